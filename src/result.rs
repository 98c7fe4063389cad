use std::borrow::Cow;

/// Outcome of running a parser against a prefix of a string.
///
/// A `Success` carries the matched value together with the unconsumed
/// remainder of the input; the remainder is always a suffix of the input the
/// parser was invoked on. A `Failure` carries a description of what would
/// have satisfied the parser and the input it was invoked on: failures never
/// consume input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult<'a, T> {
    Success {
        value: T,
        remainder: &'a str,
    },
    Failure {
        expected: Cow<'static, str>,
        remainder: &'a str,
    },
}

impl<'a, T> ParseResult<'a, T> {
    pub fn success(value: T, remainder: &'a str) -> Self {
        ParseResult::Success { value, remainder }
    }

    pub fn failure(expected: impl Into<Cow<'static, str>>, remainder: &'a str) -> Self {
        ParseResult::Failure {
            expected: expected.into(),
            remainder,
        }
    }

    /// Transform the matched value, leaving the remainder untouched.
    ///
    /// Failures pass through unchanged and `f` is never invoked for them.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<'a, U> {
        match self {
            ParseResult::Success { value, remainder } => ParseResult::Success {
                value: f(value),
                remainder,
            },
            ParseResult::Failure {
                expected,
                remainder,
            } => ParseResult::Failure {
                expected,
                remainder,
            },
        }
    }

    /// Continue parsing from a success with `f`, which receives the matched
    /// value and the remainder and decides how much further input to consume.
    ///
    /// Failures pass through unchanged and `f` is never invoked for them.
    pub fn and_then<U>(
        self,
        f: impl FnOnce(T, &'a str) -> ParseResult<'a, U>,
    ) -> ParseResult<'a, U> {
        match self {
            ParseResult::Success { value, remainder } => f(value, remainder),
            ParseResult::Failure {
                expected,
                remainder,
            } => ParseResult::Failure {
                expected,
                remainder,
            },
        }
    }

    /// Transform the expected-description of a failure, e.g. to build
    /// combined messages such as `"a or b"`. Successes pass through
    /// unchanged and `f` is never invoked for them.
    pub fn map_expected(
        self,
        f: impl FnOnce(Cow<'static, str>) -> Cow<'static, str>,
    ) -> ParseResult<'a, T> {
        match self {
            ParseResult::Failure {
                expected,
                remainder,
            } => ParseResult::Failure {
                expected: f(expected),
                remainder,
            },
            success => success,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    /// The unconsumed input: the suffix after the match for a success, the
    /// input at the point of failure for a failure.
    pub fn remainder(&self) -> &'a str {
        match self {
            ParseResult::Success { remainder, .. } => remainder,
            ParseResult::Failure { remainder, .. } => remainder,
        }
    }

    /// The expected-description of a failure, `None` for a success.
    pub fn expected(&self) -> Option<&str> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure { expected, .. } => Some(expected),
        }
    }

    /// Byte offset of the remainder within `original`, the string the
    /// top-level parser was invoked on. Useful for pointing a diagnostic at
    /// the position where parsing stopped.
    pub fn offset_in(&self, original: &str) -> usize {
        original.len().saturating_sub(self.remainder().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_transforms_success_value() {
        let result = ParseResult::success(11, "rest");
        assert_eq!(
            result.map(|n| n % 2 == 0),
            ParseResult::success(false, "rest")
        );
    }

    #[test]
    fn test_map_leaves_failure_untouched() {
        let result: ParseResult<i64> = ParseResult::failure("integer", "abc");
        let mapped: ParseResult<bool> = result.map(|_| unreachable!("must not run on failure"));
        assert_eq!(mapped, ParseResult::<bool>::failure("integer", "abc"));
    }

    #[test]
    fn test_and_then_threads_remainder() {
        let result = ParseResult::success("a", "bc");
        let chained = result.and_then(|value, remainder| {
            assert_eq!(value, "a");
            ParseResult::success(remainder.len(), &remainder[1..])
        });
        assert_eq!(chained, ParseResult::success(2, "c"));
    }

    #[test]
    fn test_and_then_passes_failure_through() {
        let result: ParseResult<&str> = ParseResult::failure("whitespace", "x");
        let chained =
            result.and_then(|_, _| -> ParseResult<usize> { unreachable!("must not run") });
        assert_eq!(chained, ParseResult::<usize>::failure("whitespace", "x"));
    }

    #[test]
    fn test_map_expected_rewrites_failure() {
        let result: ParseResult<&str> = ParseResult::failure("a", "cd");
        let merged = result.map_expected(|expected| format!("{} or b", expected).into());
        assert_eq!(merged, ParseResult::failure("a or b", "cd"));
    }

    #[test]
    fn test_map_expected_is_noop_on_success() {
        let result = ParseResult::success(1, "");
        let mapped = result.map_expected(|_| unreachable!("must not run on success"));
        assert_eq!(mapped, ParseResult::success(1, ""));
    }

    #[test]
    fn test_offset_in_points_at_stop_position() {
        let input = "let x";
        let result: ParseResult<&str> = ParseResult::failure("=", &input[4..]);
        assert_eq!(result.offset_in(input), 4);
    }

    #[test]
    fn test_accessors() {
        let success = ParseResult::success(7, "tail");
        assert!(success.is_success());
        assert_eq!(success.remainder(), "tail");
        assert_eq!(success.expected(), None);

        let failure: ParseResult<i64> = ParseResult::failure("integer", "tail");
        assert!(!failure.is_success());
        assert_eq!(failure.remainder(), "tail");
        assert_eq!(failure.expected(), Some("integer"));
    }
}
