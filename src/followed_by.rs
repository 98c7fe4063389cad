use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that requires and consumes a trailing parser but keeps
/// only the first parser's match
///
/// The mirror image of [`Before`](crate::Before): typical use is dropping a
/// closing delimiter or trailing whitespace while keeping the value before
/// it. The remainder is the trailing parser's remainder.
pub struct FollowedBy<P1, P2> {
    kept: P1,
    trailing: P2,
}

impl<P1, P2> FollowedBy<P1, P2> {
    pub fn new(kept: P1, trailing: P2) -> Self {
        FollowedBy { kept, trailing }
    }
}

impl<'a, P1, P2> Parser<'a> for FollowedBy<P1, P2>
where
    P1: Parser<'a>,
    P2: Parser<'a>,
{
    type Output = P1::Output;

    fn parse(&self, input: &'a str) -> ParseResult<'a, P1::Output> {
        self.kept.parse(input).and_then(|value, remainder| {
            self.trailing.parse(remainder).map(|_| value)
        })
    }
}

/// Convenience function to create a FollowedBy parser
pub fn followed_by<'a, P1, P2>(kept: P1, trailing: P2) -> FollowedBy<P1, P2>
where
    P1: Parser<'a>,
    P2: Parser<'a>,
{
    FollowedBy::new(kept, trailing)
}

/// Extension trait to add .followed_by() method support for parsers
pub trait FollowedByExt<'a>: Parser<'a> + Sized {
    /// `a.followed_by(b)` runs `a` then `b`, keeping only `a`'s match.
    fn followed_by<P>(self, trailing: P) -> FollowedBy<Self, P>
    where
        P: Parser<'a>,
    {
        FollowedBy::new(self, trailing)
    }
}

/// Implement FollowedByExt for all parsers
impl<'a, P> FollowedByExt<'a> for P where P: Parser<'a> {}
