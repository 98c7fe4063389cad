use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches zero or more occurrences of an element
/// parser interleaved with a separator, pattern `p (sep p)*`
///
/// Failure of the very first element is not an overall failure: the result
/// is an empty list with the input untouched. Note this makes "no elements
/// present" indistinguishable from "malformed first element" in the result
/// alone; callers that need the distinction must probe the first element
/// separately. Once at least one element matched, a failing separator simply
/// ends the list, but an element failure after a successful separator
/// propagates (a separator promises another element).
pub struct SeparatedBy<P, S> {
    parser: P,
    separator: S,
}

impl<P, S> SeparatedBy<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        SeparatedBy { parser, separator }
    }
}

impl<'a, P, S> Parser<'a> for SeparatedBy<P, S>
where
    P: Parser<'a>,
    S: Parser<'a>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        let mut values = Vec::new();

        let mut remainder = match self.parser.parse(input) {
            ParseResult::Success { value, remainder } => {
                values.push(value);
                remainder
            }
            ParseResult::Failure { .. } => return ParseResult::success(values, input),
        };

        loop {
            let after_separator = match self.separator.parse(remainder) {
                ParseResult::Success {
                    remainder: rest, ..
                } => rest,
                ParseResult::Failure { .. } => break,
            };

            match self.parser.parse(after_separator) {
                ParseResult::Success {
                    value,
                    remainder: rest,
                } => {
                    values.push(value);
                    remainder = rest;
                }
                ParseResult::Failure {
                    expected,
                    remainder,
                } => {
                    return ParseResult::Failure {
                        expected,
                        remainder,
                    };
                }
            }
        }

        ParseResult::success(values, remainder)
    }
}

/// Convenience function to create a SeparatedBy parser
pub fn separated_by<'a, P, S>(parser: P, separator: S) -> SeparatedBy<P, S>
where
    P: Parser<'a>,
    S: Parser<'a>,
{
    SeparatedBy::new(parser, separator)
}

/// Extension trait to add .separated_by() method support for parsers
pub trait SeparatedByExt<'a>: Parser<'a> + Sized {
    fn separated_by<S>(self, separator: S) -> SeparatedBy<Self, S>
    where
        S: Parser<'a>,
    {
        SeparatedBy::new(self, separator)
    }
}

/// Implement SeparatedByExt for all parsers
impl<'a, P> SeparatedByExt<'a> for P where P: Parser<'a> {}
