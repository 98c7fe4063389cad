use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that requires and consumes a leading parser but keeps
/// only the second parser's match
///
/// `skipped` must still succeed; its value is simply discarded. Typical use
/// is dropping an opening delimiter while keeping the content after it.
pub struct Before<P1, P2> {
    skipped: P1,
    kept: P2,
}

impl<P1, P2> Before<P1, P2> {
    pub fn new(skipped: P1, kept: P2) -> Self {
        Before { skipped, kept }
    }
}

impl<'a, P1, P2> Parser<'a> for Before<P1, P2>
where
    P1: Parser<'a>,
    P2: Parser<'a>,
{
    type Output = P2::Output;

    fn parse(&self, input: &'a str) -> ParseResult<'a, P2::Output> {
        self.skipped
            .parse(input)
            .and_then(|_, remainder| self.kept.parse(remainder))
    }
}

/// Convenience function to create a Before parser
pub fn before<'a, P1, P2>(skipped: P1, kept: P2) -> Before<P1, P2>
where
    P1: Parser<'a>,
    P2: Parser<'a>,
{
    Before::new(skipped, kept)
}

/// Extension trait to add .before() method support for parsers
pub trait BeforeExt<'a>: Parser<'a> + Sized {
    /// `a.before(b)` runs `a` then `b`, keeping only `b`'s match.
    fn before<P>(self, kept: P) -> Before<Self, P>
    where
        P: Parser<'a>,
    {
        Before::new(self, kept)
    }
}

/// Implement BeforeExt for all parsers
impl<'a, P> BeforeExt<'a> for P where P: Parser<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer::integer;
    use crate::prefix::prefix;

    #[test]
    fn test_before_keeps_second_match() {
        let parser = integer().before(prefix("a"));
        assert_eq!(parser.parse("1a"), ParseResult::success("a", ""));
    }

    #[test]
    fn test_before_requires_skipped_parser() {
        let parser = integer().before(prefix("a"));
        assert_eq!(parser.parse("a"), ParseResult::failure("integer", "a"));
    }

    #[test]
    fn test_before_second_failure_propagates() {
        let parser = integer().before(prefix("a"));
        assert_eq!(parser.parse("1b"), ParseResult::failure("a", "b"));
    }

    #[test]
    fn test_before_drops_opening_delimiter() {
        let parser = before(prefix("["), integer());
        assert_eq!(parser.parse("[42]"), ParseResult::success(42, "]"));
    }
}
