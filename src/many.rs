use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser combinator that matches zero or more occurrences of the given
/// parser
///
/// Repetition stops at the first failure, which is swallowed rather than
/// propagated; zero matches is still a success with the input untouched.
/// A repetition step that succeeds without consuming input also stops the
/// loop, so a zero-length-success parser cannot cause it to run forever (the
/// shipped primitives never succeed on an empty run, so this guard does not
/// fire for them).
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'a, P> Parser<'a> for Many<P>
where
    P: Parser<'a>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        let mut values = Vec::new();
        let mut remainder = input;

        loop {
            match self.parser.parse(remainder) {
                ParseResult::Success {
                    value,
                    remainder: rest,
                } => {
                    if rest.len() == remainder.len() {
                        // No progress; stop instead of looping forever.
                        break;
                    }
                    values.push(value);
                    remainder = rest;
                }
                ParseResult::Failure { .. } => break,
            }
        }

        ParseResult::success(values, remainder)
    }
}

/// Convenience function to create a Many parser
pub fn many<'a, P>(parser: P) -> Many<P>
where
    P: Parser<'a>,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt<'a>: Parser<'a> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<'a, P> ManyExt<'a> for P where P: Parser<'a> {}
