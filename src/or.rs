use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that tries the first parser, and if it fails, retries
/// the second parser on the original input
///
/// This is backtracking: the second parser always starts from the same point
/// as the first, regardless of any partial progress the first attempt made.
/// If both fail, the two expected-descriptions merge into `"a or b"` and the
/// second failure's remainder is kept.
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

impl<'a, P1, P2, O> Parser<'a> for Or<P1, P2>
where
    P1: Parser<'a, Output = O>,
    P2: Parser<'a, Output = O>,
{
    type Output = O;

    fn parse(&self, input: &'a str) -> ParseResult<'a, O> {
        match self.first.parse(input) {
            success @ ParseResult::Success { .. } => success,
            ParseResult::Failure {
                expected: first_expected,
                ..
            } => self
                .second
                .parse(input)
                .map_expected(|second_expected| {
                    format!("{} or {}", first_expected, second_expected).into()
                }),
        }
    }
}

/// Convenience function to create an Or parser
pub fn one_of<'a, P1, P2, O>(first: P1, second: P2) -> Or<P1, P2>
where
    P1: Parser<'a, Output = O>,
    P2: Parser<'a, Output = O>,
{
    Or::new(first, second)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'a>: Parser<'a> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'a, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'a, P> OrExt<'a> for P where P: Parser<'a> {}
