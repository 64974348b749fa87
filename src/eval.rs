//! Matcher evaluation: from `(input, start)` to the lazy set of end
//! positions.
//!
//! All positions are **character** (not byte) indices into the input.

use itertools::Itertools;

use crate::matcher::{Expr, Matcher};
use crate::repeat::RepeatEnds;

/// Lazy stream of end positions: no duplicates, first-seen order.
///
/// The stream borrows only the input. The matcher tree is shared into it by
/// handle, so temporaries — a continuation-built matcher, a deferred rule
/// just resolved — can be evaluated and dropped while their streams live on.
pub type Positions<'a> = Box<dyn Iterator<Item = usize> + 'a>;

impl Matcher {
    /// Every position reachable from `start` by one application of this
    /// matcher, each in `start..=input.len()`, without duplicates.
    ///
    /// `start` must be at most `input.len()`. Results are produced on
    /// demand: a consumer may stop after any element without paying for
    /// the rest of the search.
    pub fn evaluate<'a>(&self, input: &'a [char], start: usize) -> Positions<'a> {
        match self.expr() {
            Expr::Pred(p) => {
                let end = (start < input.len() && p(input[start])).then_some(start + 1);
                Box::new(end.into_iter())
            }
            Expr::Lit(text) => Box::new(literal_end(text, input, start).into_iter()),
            Expr::And(a, b) => {
                let b = b.clone();
                Box::new(
                    a.evaluate(input, start)
                        .flat_map(move |p| b.evaluate(input, p))
                        .unique(),
                )
            }
            Expr::Or(a, b) => Box::new(
                a.evaluate(input, start)
                    .chain(b.evaluate(input, start))
                    .unique(),
            ),
            Expr::Repeat { inner, min, max } => {
                Box::new(RepeatEnds::new(inner.clone(), input, start, *min, *max))
            }
            Expr::FlatMap { inner, next } => {
                let next = next.clone();
                Box::new(
                    inner
                        .evaluate(input, start)
                        .flat_map(move |p| {
                            let consumed: String = input[start..p].iter().collect();
                            next(&consumed).evaluate(input, p)
                        })
                        .unique(),
                )
            }
            Expr::Lazy(supplier) => supplier().evaluate(input, start),
        }
    }

    /// Whether this matcher consumes `input` exactly, start to end.
    ///
    /// Stops pulling positions as soon as the full length shows up.
    pub fn full_match(&self, input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        self.evaluate(&chars, 0).any(|p| p == len)
    }
}

/// End position of `text` matched char-for-char at `start`, if it is there.
fn literal_end(text: &str, input: &[char], start: usize) -> Option<usize> {
    let mut pos = start;
    for ch in text.chars() {
        if input.get(pos) != Some(&ch) {
            return None;
        }
        pos += 1;
    }
    Some(pos)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
