//! # StrComb - String Parser Combinators
//!
//! A small parser combinator library over in-memory strings: a parser is a
//! pure function that consumes a prefix of its input and returns a typed
//! match plus the unconsumed remainder, or a typed failure describing what
//! was expected. Small parsers combine into larger ones, which keeps the
//! parsing logic composable as requirements grow (nested structures, custom
//! separators) where a single regular expression would not. The library
//! emphasizes:
//!
//! - **Plain-value failures**: a failed parse is an ordinary
//!   [`ParseResult::Failure`] value, never a panic or an abort
//! - **No consumption on failure**: a failing parser reports the input it
//!   was invoked on, so alternatives can retry from the same point
//! - **Backtracking alternation**: [`one_of`] re-attempts the original
//!   input with the alternative parser, discarding any partial progress
//! - **Greedy-maximal primitives**: run-based parsers consume the longest
//!   possible prefix and never succeed on an empty run, which is what makes
//!   [`many`] terminate by construction
//!
//! ```
//! use strcomb::{ParseResult, Parser, SeparatedByExt, integer, prefix};
//!
//! let csv = integer().separated_by(prefix(","));
//! assert_eq!(csv.parse("1,2,3"), ParseResult::success(vec![1, 2, 3], ""));
//! ```

pub mod before;
pub mod followed_by;
pub mod integer;
pub mod many;
pub mod map;
pub mod map_expected;
pub mod or;
pub mod parser;
pub mod prefix;
pub mod prefix_while;
pub mod result;
pub mod separated_by;
pub mod then;
pub mod whitespace;

pub use before::{Before, BeforeExt, before};
pub use followed_by::{FollowedBy, FollowedByExt, followed_by};
pub use integer::{IntegerParser, integer};
pub use many::{Many, ManyExt, many};
pub use map::{Map, MapExt, map};
pub use map_expected::{MapExpected, MapExpectedExt, map_expected};
pub use or::{Or, OrExt, one_of};
pub use parser::Parser;
pub use prefix::{PrefixParser, prefix};
pub use prefix_while::{PrefixWhile, prefix_while};
pub use result::ParseResult;
pub use separated_by::{SeparatedBy, SeparatedByExt, separated_by};
pub use then::{Then, ThenExt, sequence};
pub use whitespace::{WhitespaceParser, whitespace};
