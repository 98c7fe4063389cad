use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that matches the maximal leading run of decimal digits as an `i64`
///
/// The run is greedy: the parser never backtracks to a shorter match. An
/// empty run is a failure, as is a run too large to represent as `i64`; both
/// fail with `expected = "integer"` and leave the input untouched.
pub struct IntegerParser;

impl<'a> Parser<'a> for IntegerParser {
    type Output = i64;

    fn parse(&self, input: &'a str) -> ParseResult<'a, i64> {
        let end = input
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(input.len());
        if end == 0 {
            return ParseResult::failure("integer", input);
        }
        match input[..end].parse::<i64>() {
            Ok(value) => ParseResult::success(value, &input[end..]),
            Err(_) => ParseResult::failure("integer", input),
        }
    }
}

/// Convenience function to create an IntegerParser
pub fn integer() -> IntegerParser {
    IntegerParser
}
