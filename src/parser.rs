use crate::result::ParseResult;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from the remaining input to a
/// [`ParseResult`]: calling it twice on the same input yields the same
/// outcome, with no observable side effect. Parsers are stateless values
/// that may be stored, composed and reused arbitrarily many times.
pub trait Parser<'a> {
    type Output;

    /// Attempt to parse a prefix of `input`.
    ///
    /// Returns `Success` with the matched value and the unconsumed
    /// remainder, or `Failure` describing what was expected. Failures do
    /// not consume input.
    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output>;
}

/// Any plain function conforming to the parsing contract is a parser, so
/// free functions and closures compose directly with the combinators.
impl<'a, T, F> Parser<'a> for F
where
    F: Fn(&'a str) -> ParseResult<'a, T>,
{
    type Output = T;

    fn parse(&self, input: &'a str) -> ParseResult<'a, T> {
        self(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lowercase_x(input: &str) -> ParseResult<'_, &str> {
        match input.strip_prefix('x') {
            Some(remainder) => ParseResult::success(&input[..1], remainder),
            None => ParseResult::failure("x", input),
        }
    }

    #[test]
    fn test_plain_function_is_a_parser() {
        assert_eq!(lowercase_x.parse("xy"), ParseResult::success("x", "y"));
        assert_eq!(lowercase_x.parse("ab"), ParseResult::failure("x", "ab"));
    }

    #[test]
    fn test_closure_is_a_parser() {
        let parser = |input: &'static str| ParseResult::success((), input);
        assert_eq!(parser.parse("abc"), ParseResult::success((), "abc"));
    }

    #[test]
    fn test_same_input_same_result() {
        let first = lowercase_x.parse("xyz");
        let second = lowercase_x.parse("xyz");
        assert_eq!(first, second);
    }
}
