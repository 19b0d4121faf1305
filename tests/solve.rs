use rstest::rstest;
use yac::{Options, SolveError, options::MAX_DECIMAL_PLACES, solve, solve_pair, solve_with};

fn assert_solves(src: &str, expected: f64) {
    match solve(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "'{src}' solved to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_fails(src: &str, expected: &SolveError) {
    match solve(src) {
        Ok(value) => panic!("'{src}' solved to {value} but was expected to fail with {expected:?}"),
        Err(e) => assert_eq!(&e, expected, "'{src}' failed with the wrong error"),
    }
}

#[rstest]
#[case("0", 0.0)]
#[case("1", 1.0)]
#[case("12340", 12340.0)]
#[case("+12340", 12340.0)]
#[case("-12340", -12340.0)]
#[case("1.243", 1.24)]
#[case("1.246", 1.25)]
#[case("+1.24", 1.24)]
#[case("-1.24", -1.24)]
#[case("(-1.24)", -1.24)]
#[case("(-1.24 )", -1.24)]
#[case("(-1.24  )", -1.24)]
#[case("(( -1.24  ))", -1.24)]
#[case(" -1.24 ", -1.24)]
#[case("1 + 2", 3.0)]
#[case("5 +    5", 10.0)]
#[case("1/2", 0.5)]
#[case("15-(2-3)+5", 21.0)]
#[case("1/2 + 3 + 3 * (23) + 3", 75.5)]
#[case("1/2 + ((9)) + 1", 10.5)]
#[case("1/2 + 1.3 + 3", 4.8)]
#[case("(((((((((0,0)))))))))", 0.0)]
#[case("1 + (3 +2.1*3) + 2*3*4*7/3*2 +7", 129.3)]
#[case("1 - (+ 1)", 0.0)]
#[case("1 - (+ 1.0)", 0.0)]
#[case("99999*9999", 999_890_001.0)]
fn solves_expression(#[case] src: &str, #[case] expected: f64) {
    assert_solves(src, expected);
}

#[rstest]
#[case("-1.", SolveError::FloatingPointEndDot)]
#[case(".0", SolveError::FloatingPointStartDot)]
#[case("1 + .1", SolveError::FloatingPointStartDot)]
#[case("(-1.24", SolveError::EndBracket)]
#[case("(( -1.24  )", SolveError::EndBracket)]
#[case(" -1. 24 ", SolveError::FloatingPointEndDot)]
#[case(" --1. 24 ", SolveError::TooManySign)]
#[case("1/2 + 1.3 + 3)", SolveError::NotCompleteExpression)]
#[case("(((((((((0,0))))))))", SolveError::EndBracket)]
#[case("((((((((()))))))))", SolveError::WrongToken)]
#[case("((((((((())))))))))", SolveError::WrongToken)]
#[case("1()", SolveError::NotCompleteExpression)]
#[case("1)", SolveError::NotCompleteExpression)]
#[case("- -1", SolveError::TooManySign)]
#[case("--1", SolveError::TooManySign)]
#[case("1 - -1", SolveError::TooManySign)]
#[case("1 - + 1", SolveError::TooManySign)]
#[case("1 - (+ 1.00.)", SolveError::FloatingPointManyDot)]
#[case("1.00.", SolveError::FloatingPointManyDot)]
#[case("1/0", SolveError::DivideByZero)]
#[case("1/(2 - 2)", SolveError::DivideByZero)]
#[case("aefwef", SolveError::WrongToken)]
fn rejects_expression(#[case] src: &str, #[case] expected: SolveError) {
    assert_fails(src, &expected);
}

#[test]
fn multiplicative_operators_bind_tighter() {
    assert_solves("2+3*4", 14.0);
    assert_solves("2*3+4", 10.0);
    assert_solves("2*(3+4)", 14.0);
    assert_solves("1+8/4-2", 1.0);
}

#[test]
fn equal_priorities_associate_left() {
    assert_solves("10-2-3", 5.0);
    assert_solves("8/2/2", 2.0);
    assert_solves("8/2*2", 8.0);
    assert_solves("1-2+3", 2.0);
}

#[test]
fn comma_is_a_decimal_point() {
    assert_solves("1,5", 1.5);
    assert_solves("2,25 * 2", 4.5);
    assert_fails("1,5.0", &SolveError::FloatingPointManyDot);
    assert_fails("1,", &SolveError::FloatingPointEndDot);
    assert_fails(",5", &SolveError::WrongToken);
    assert_fails("1 + ,5", &SolveError::WrongToken);
    assert_fails("-,5", &SolveError::WrongToken);
    assert_fails("1 + .5", &SolveError::FloatingPointStartDot);
}

#[test]
fn sign_is_only_legal_at_the_start_of_a_group() {
    assert_solves("-(2+3)", -5.0);
    assert_solves("2 * (-3)", -6.0);
    assert_solves("(+(-1))", -1.0);
    assert_fails("2 * -3", &SolveError::TooManySign);
    assert_fails("(+-1)", &SolveError::TooManySign);
}

#[test]
fn missing_operands_are_wrong_tokens() {
    assert_fails("", &SolveError::WrongToken);
    assert_fails("   ", &SolveError::WrongToken);
    assert_fails("1 +", &SolveError::WrongToken);
    assert_fails("1 + $", &SolveError::WrongToken);
    assert_fails("*2", &SolveError::WrongToken);
    assert_fails("-", &SolveError::WrongToken);
}

#[test]
fn trailing_input_is_incomplete() {
    assert_fails("1 $", &SolveError::NotCompleteExpression);
    assert_fails("1 2", &SolveError::NotCompleteExpression);
    assert_fails("(1) (2)", &SolveError::NotCompleteExpression);
    // A malformed literal after a complete expression is never read as one.
    assert_fails("1 1..", &SolveError::NotCompleteExpression);
}

#[test]
fn unclosed_group_ignores_what_follows() {
    assert_fails("(1 $", &SolveError::EndBracket);
    assert_fails("(1 1..)", &SolveError::EndBracket);
}

#[test]
fn first_error_wins() {
    assert_fails("1/0 + .5", &SolveError::DivideByZero);
    assert_fails("1..2 + 1/0", &SolveError::FloatingPointManyDot);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(solve("5 +    5"), solve("5+5"));
    assert_solves("\t( 1 +\n2 )\r* 3 ", 9.0);
}

#[test]
fn oversized_literals_are_rejected() {
    assert_solves("9007199254740991 - 9007199254740990", 1.0);
    assert_fails("9007199254740992", &SolveError::LiteralTooLarge);
    assert_fails("99999999999999999999999", &SolveError::LiteralTooLarge);
    // The limit is the safe-integer range, not exact representability.
    assert_fails("10000000000000000", &SolveError::LiteralTooLarge);
    // Decimal literals round to the nearest f64 instead.
    let whole = Options::default().with_decimal_places(0);
    assert_eq!(solve_with("9007199254740993.5", &whole), Ok(9_007_199_254_740_994.0));

    let huge = format!("1{}.5", "0".repeat(400));
    assert_fails(&huge, &SolveError::LiteralTooLarge);
}

#[test]
fn nesting_depth_is_limited() {
    let options = Options::default().with_max_depth(2);
    assert_eq!(solve_with("((1))", &options), Ok(1.0));
    assert_eq!(solve_with("(((1)))", &options),
               Err(SolveError::NestingTooDeep { limit: 2 }));
    assert_eq!(solve_with("(1) + (2) + ((3))", &options), Ok(6.0));

    let deep = format!("{}7{}", "(".repeat(200), ")".repeat(200));
    assert_solves(&deep, 7.0);

    let too_deep = format!("{}7{}", "(".repeat(300), ")".repeat(300));
    assert_fails(&too_deep, &SolveError::NestingTooDeep { limit: 256 });
}

#[test]
fn decimal_places_are_configurable() {
    let options = Options::default().with_decimal_places(4);
    assert_eq!(solve_with("1/3", &options), Ok(0.3333));
    assert_eq!(solve("1/3"), Ok(0.33));
    assert_eq!(solve_with("2/3", &Options::default().with_decimal_places(0)), Ok(1.0));
}

#[test]
fn decimal_places_are_clamped() {
    let options = Options::default().with_decimal_places(400);
    assert_eq!(options.decimal_places, MAX_DECIMAL_PLACES);
    assert_eq!(solve_with("1", &options), Ok(1.0));
    assert_eq!(solve_with("1/4", &Options::default().with_decimal_places(-3)), Ok(0.0));

    // A field set directly is clamped when rounding as well.
    let raw = Options { decimal_places: 400,
                        ..Options::default() };
    assert_eq!(solve_with("1", &raw), Ok(1.0));
    assert_eq!(solve_with("1/2", &raw), Ok(0.5));
}

#[test]
fn pair_form_reports_zero_on_error() {
    assert_eq!(solve_pair("1/2"), (0.5, None));
    assert_eq!(solve_pair("1/0"), (0.0, Some(SolveError::DivideByZero)));
    assert_eq!(solve_pair("aefwef"), (0.0, Some(SolveError::WrongToken)));
}

#[rstest]
#[case(SolveError::WrongToken, "parser error, wrong token")]
#[case(SolveError::NotCompleteExpression, "expression is not complete")]
#[case(SolveError::NotSupportedOperator, "contains a not supported operator")]
#[case(SolveError::WrongValue, "value is wrong")]
#[case(SolveError::DivideByZero, "division by zero")]
#[case(SolveError::TooManySign, "too many sign before number")]
#[case(SolveError::FloatingPointManyDot, "floating point contains too many dots")]
#[case(SolveError::FloatingPointStartDot, "floating point couldn't start with dot")]
#[case(SolveError::FloatingPointEndDot, "floating point couldn't end with dot")]
#[case(SolveError::EndBracket, "couldn't find end bracket")]
#[case(SolveError::LiteralTooLarge, "numeric literal is too large")]
#[case(SolveError::NestingTooDeep { limit: 3 }, "parentheses are nested deeper than 3 levels")]
fn error_messages_are_stable(#[case] error: SolveError, #[case] message: &str) {
    assert_eq!(error.to_string(), message);
}
