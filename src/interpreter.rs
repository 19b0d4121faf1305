/// The cursor module tracks the read position within an expression.
///
/// It wraps the lexer's token stream with single-token lookahead and counts
/// how many parenthesized groups are open.
pub mod cursor;
/// The evaluator module applies arithmetic operators to operands.
///
/// # Responsibilities
/// - Computes `+`, `-`, `*` and `/` on two `f64` operands.
/// - Reports division by zero.
pub mod evaluator;
/// The lexer module tokenizes expression text for the parser.
///
/// The lexer reads the raw text and produces numbers, operators and brackets,
/// skipping whitespace. Numeric literals are validated as they are scanned.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Accepts `.` and `,` as the decimal point, at most once per literal.
/// - Reports malformed literals and unknown characters.
pub mod lexer;
/// The parser module evaluates expressions while it reads them.
///
/// There is no intermediate syntax tree: every reduction of the operator
/// stack is computed immediately.
///
/// # Responsibilities
/// - Resolves operands, operators and parenthesized groups.
/// - Applies operator priority and left-associativity.
/// - Reports sign, bracket and token placement errors.
pub mod parser;
