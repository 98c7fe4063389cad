use crate::parser::Parser;
use crate::result::ParseResult;

/// Parser that matches the maximal leading run of characters satisfying a
/// predicate
///
/// Generalizes the greedy-run policy of [`integer`](crate::integer) and
/// [`whitespace`](crate::whitespace) to an arbitrary character predicate. An
/// empty run is a failure with `expected = "predicate"`; use
/// [`map_expected`](crate::MapExpectedExt::map_expected) to give the parser
/// a domain-specific description.
pub struct PrefixWhile<F> {
    predicate: F,
}

impl<F> PrefixWhile<F> {
    pub fn new(predicate: F) -> Self {
        PrefixWhile { predicate }
    }
}

impl<'a, F> Parser<'a> for PrefixWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'a str;

    fn parse(&self, input: &'a str) -> ParseResult<'a, &'a str> {
        let end = input
            .find(|c: char| !(self.predicate)(c))
            .unwrap_or(input.len());
        if end == 0 {
            return ParseResult::failure("predicate", input);
        }
        ParseResult::success(&input[..end], &input[end..])
    }
}

/// Convenience function to create a PrefixWhile parser
pub fn prefix_while<F>(predicate: F) -> PrefixWhile<F>
where
    F: Fn(char) -> bool,
{
    PrefixWhile::new(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_while_greedy_run() {
        let parser = prefix_while(|c| c.is_alphabetic());
        assert_eq!(parser.parse("ab1c"), ParseResult::success("ab", "1c"));
    }

    #[test]
    fn test_prefix_while_fails_on_empty_run() {
        let parser = prefix_while(|c| c.is_alphabetic());
        assert_eq!(parser.parse("1ab"), ParseResult::failure("predicate", "1ab"));
    }

    #[test]
    fn test_prefix_while_fails_on_empty_input() {
        let parser = prefix_while(|c| c.is_alphabetic());
        assert_eq!(parser.parse(""), ParseResult::failure("predicate", ""));
    }

    #[test]
    fn test_prefix_while_consumes_to_end() {
        let parser = prefix_while(|c| c != ',');
        assert_eq!(parser.parse("abc"), ParseResult::success("abc", ""));
    }

    #[test]
    fn test_prefix_while_with_method_reference() {
        let parser = prefix_while(char::is_alphanumeric);
        assert_eq!(parser.parse("a1!"), ParseResult::success("a1", "!"));
    }

    #[test]
    fn test_prefix_while_multibyte_characters() {
        let parser = prefix_while(|c| c.is_alphabetic());
        assert_eq!(parser.parse("żółw 1"), ParseResult::success("żółw", " 1"));
    }
}
