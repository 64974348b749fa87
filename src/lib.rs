//! Composable string matchers that enumerate every reachable match
//! position.
//!
//! A [`Matcher`] maps an input and a start offset to the *set* of offsets
//! reachable by one application — never a single greedy or backtracking
//! result — so sequence and alternation compose without ever discarding a
//! branch. Repetition explores that set breadth-first, keyed on positions
//! reached rather than derivations tried, which keeps nested
//! zero-width-capable repetitions from looping and bounds the work by the
//! input length.
//!
//! Grammars are built by direct composition: leaf constructors such as
//! [`ch`], [`range`] and [`lit`], combinator methods on [`Matcher`], and
//! [`lazy`] for recursive rules. Matching failure is simply an empty
//! result set.
//!
//! # Example
//!
//! ```rust
//! use allmatch::{Matcher, ch, lazy, lit};
//!
//! // expr = term+ ; term = "()" | '(' expr ')'
//! fn expr() -> Matcher {
//!     term().many1()
//! }
//! fn term() -> Matcher {
//!     lit("()").or(ch('(').and(lazy(expr)).and(')'))
//! }
//!
//! assert!(expr().full_match("(()())()"));
//! assert!(!expr().full_match("(()"));
//!
//! // All reachable end positions, not just the greedy one.
//! let input: Vec<char> = "()()".chars().collect();
//! let ends: Vec<usize> = expr().evaluate(&input, 0).collect();
//! assert_eq!(ends, vec![2, 4]);
//! ```

mod eval;
mod leaf;
mod matcher;
mod repeat;

pub use eval::Positions;
pub use leaf::{any, ch, chs, lit, lits, not_ch, pred, range};
pub use matcher::{Matcher, lazy, one_of, seq};
