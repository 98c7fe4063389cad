use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that transforms the matched value of a parser using a
/// mapping function
///
/// The remainder is untouched and failures pass through unchanged, with the
/// mapper never invoked for them.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'a, P, F, U> Parser<'a> for Map<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, input: &'a str) -> ParseResult<'a, U> {
        self.parser.parse(input).map(|value| (self.mapper)(value))
    }
}

/// Convenience function to create a Map parser
pub fn map<'a, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'a>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'a>: Parser<'a> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'a, P> MapExt<'a> for P where P: Parser<'a> {}
