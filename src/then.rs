use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that sequences two parsers and returns both matches as
/// a pair
///
/// The second parser runs on the first parser's remainder. A failure of the
/// first parser propagates unchanged; a failure of the second propagates
/// unchanged as well, so the overall failure reports the second parser's
/// position and the first parser's partial consumption is discarded from the
/// caller's view.
///
/// Note: chaining multiple `.then()` calls produces nested pairs like
/// `((a, b), c)` rather than flat tuples; destructuring makes the parsing
/// order explicit.
pub struct Then<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Then { first, second }
    }
}

impl<'a, P1, P2> Parser<'a> for Then<P1, P2>
where
    P1: Parser<'a>,
    P2: Parser<'a>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        self.first.parse(input).and_then(|first, remainder| {
            self.second
                .parse(remainder)
                .map(|second| (first, second))
        })
    }
}

/// Convenience function to create a Then parser
pub fn sequence<'a, P1, P2>(first: P1, second: P2) -> Then<P1, P2>
where
    P1: Parser<'a>,
    P2: Parser<'a>,
{
    Then::new(first, second)
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'a>: Parser<'a> + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'a>,
    {
        Then::new(self, other)
    }
}

/// Implement ThenExt for all parsers
impl<'a, P> ThenExt<'a> for P where P: Parser<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::integer;
    use crate::prefix::prefix;

    #[test]
    fn test_sequence_both_succeed() {
        let parser = sequence(prefix("-"), integer());
        assert_eq!(parser.parse("-123"), ParseResult::success(("-", 123), ""));
    }

    #[test]
    fn test_sequence_first_failure_propagates_unchanged() {
        let parser = sequence(prefix("-"), integer());
        assert_eq!(parser.parse("123"), ParseResult::failure("-", "123"));
    }

    #[test]
    fn test_sequence_second_failure_reports_its_position() {
        let parser = sequence(prefix("-"), integer());
        // The "-" was consumed before the integer failed, so the failure
        // remainder is the second parser's input, not the original.
        assert_eq!(parser.parse("-abc"), ParseResult::failure("integer", "abc"));
    }

    #[test]
    fn test_then_method_syntax() {
        let parser = prefix("-").then(integer());
        assert_eq!(parser.parse("-123"), ParseResult::success(("-", 123), ""));
    }

    #[test]
    fn test_then_chain_nests_pairs() {
        let parser = prefix("a").then(prefix("b")).then(prefix("c"));
        assert_eq!(
            parser.parse("abcd"),
            ParseResult::success((("a", "b"), "c"), "d")
        );
    }

    #[test]
    fn test_then_with_function_parser() {
        fn dash(input: &str) -> ParseResult<'_, &str> {
            prefix("-").parse(input)
        }
        let parser = dash.then(integer());
        assert_eq!(parser.parse("-7"), ParseResult::success(("-", 7), ""));
    }
}
