use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that matches the maximal leading run of whitespace characters
///
/// Whitespace is `char::is_whitespace`, so spaces, tabs, newlines and the
/// Unicode whitespace characters all count. An empty run is a failure with
/// `expected = "whitespace"`, never a trivial success.
pub struct WhitespaceParser;

impl<'a> Parser<'a> for WhitespaceParser {
    type Output = &'a str;

    fn parse(&self, input: &'a str) -> ParseResult<'a, &'a str> {
        let end = input
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(input.len());
        if end == 0 {
            return ParseResult::failure("whitespace", input);
        }
        ParseResult::success(&input[..end], &input[end..])
    }
}

/// Convenience function to create a WhitespaceParser
pub fn whitespace() -> WhitespaceParser {
    WhitespaceParser
}
