use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser that matches an exact literal at the start of the input
///
/// On success the matched value is the corresponding slice of the input and
/// exactly the literal is consumed. On failure the expected-description is
/// the literal itself and the input is left untouched.
pub struct PrefixParser {
    literal: Cow<'static, str>,
}

impl PrefixParser {
    pub fn new(literal: impl Into<Cow<'static, str>>) -> Self {
        PrefixParser {
            literal: literal.into(),
        }
    }
}

impl<'a> Parser<'a> for PrefixParser {
    type Output = &'a str;

    fn parse(&self, input: &'a str) -> ParseResult<'a, &'a str> {
        match input.strip_prefix(self.literal.as_ref()) {
            Some(remainder) => ParseResult::success(&input[..self.literal.len()], remainder),
            None => ParseResult::failure(self.literal.clone(), input),
        }
    }
}

/// Convenience function to create a PrefixParser
pub fn prefix(literal: impl Into<Cow<'static, str>>) -> PrefixParser {
    PrefixParser::new(literal)
}
