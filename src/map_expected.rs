use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that transforms the expected-description of a failing
/// parser using a mapping function
///
/// Successes pass through unchanged. Useful to replace a generic description
/// such as `"predicate"` with something the caller can surface directly.
pub struct MapExpected<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapExpected<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapExpected { parser, mapper }
    }
}

impl<'a, P, F> Parser<'a> for MapExpected<P, F>
where
    P: Parser<'a>,
    F: Fn(Cow<'static, str>) -> Cow<'static, str>,
{
    type Output = P::Output;

    fn parse(&self, input: &'a str) -> ParseResult<'a, P::Output> {
        self.parser
            .parse(input)
            .map_expected(|expected| (self.mapper)(expected))
    }
}

/// Convenience function to create a MapExpected parser
pub fn map_expected<'a, P, F>(parser: P, mapper: F) -> MapExpected<P, F>
where
    P: Parser<'a>,
    F: Fn(Cow<'static, str>) -> Cow<'static, str>,
{
    MapExpected::new(parser, mapper)
}

/// Extension trait to add .map_expected() method support for parsers
pub trait MapExpectedExt<'a>: Parser<'a> + Sized {
    fn map_expected<F>(self, mapper: F) -> MapExpected<Self, F>
    where
        F: Fn(Cow<'static, str>) -> Cow<'static, str>,
    {
        MapExpected::new(self, mapper)
    }
}

/// Implement MapExpectedExt for all parsers
impl<'a, P> MapExpectedExt<'a> for P where P: Parser<'a> {}
