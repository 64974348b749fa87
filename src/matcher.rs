//! The [`Matcher`] value type and its construction API.
//!
//! Construction only builds an expression tree; nothing is evaluated until
//! [`Matcher::evaluate`] or [`Matcher::full_match`] is called. The algebra
//! is closed: every combinator takes matchers and returns a matcher.

use std::fmt;
use std::sync::Arc;

/// An immutable, composable matcher.
///
/// A `Matcher` is a shared handle to an expression tree, so cloning is
/// cheap and children may appear under any number of parents. Evaluation
/// allocates all of its search state per call, which makes a single
/// `Matcher` value safe to evaluate from several threads at once.
#[derive(Clone)]
pub struct Matcher(Arc<Expr>);

/// One node of the matcher expression tree.
pub(crate) enum Expr {
    /// One character satisfying a predicate.
    Pred(Arc<dyn Fn(char) -> bool + Send + Sync>),
    /// An exact literal string.
    Lit(String),
    /// Sequence: feed every end position of the left matcher to the right.
    And(Matcher, Matcher),
    /// Alternation: the union of both branches' end positions.
    Or(Matcher, Matcher),
    /// Repetition, `min..=max` applications. `max: None` is unbounded.
    Repeat {
        inner: Matcher,
        min: usize,
        max: Option<usize>,
    },
    /// Content-dependent continuation: build the next matcher from the
    /// substring the inner matcher consumed.
    FlatMap {
        inner: Matcher,
        next: Arc<dyn Fn(&str) -> Matcher + Send + Sync>,
    },
    /// Deferred construction: resolve the matcher at evaluation time.
    Lazy(Arc<dyn Fn() -> Matcher + Send + Sync>),
}

impl Matcher {
    pub(crate) fn new(expr: Expr) -> Self {
        Self(Arc::new(expr))
    }

    pub(crate) fn expr(&self) -> &Expr {
        &self.0
    }

    /// This matcher, then `rhs` from every position this one reaches.
    ///
    /// Associative: regrouping a chain of `and`s never changes the result
    /// set, because sequencing is function composition over position sets.
    pub fn and(self, rhs: impl Into<Matcher>) -> Matcher {
        Matcher::new(Expr::And(self, rhs.into()))
    }

    /// Either this matcher or `rhs`, as a set union of end positions.
    ///
    /// Not a priority choice: no branch is discarded because the other one
    /// already matched.
    pub fn or(self, rhs: impl Into<Matcher>) -> Matcher {
        Matcher::new(Expr::Or(self, rhs.into()))
    }

    /// Repeat at least `min` times, with no upper bound.
    pub fn at_least(self, min: usize) -> Matcher {
        Matcher::new(Expr::Repeat {
            inner: self,
            min,
            max: None,
        })
    }

    /// Repeat zero or more times.
    pub fn many(self) -> Matcher {
        self.at_least(0)
    }

    /// Repeat one or more times.
    pub fn many1(self) -> Matcher {
        self.at_least(1)
    }

    /// Repeat between `min` and `max` times inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `max < min`.
    pub fn between(self, min: usize, max: usize) -> Matcher {
        assert!(min <= max, "between({min}, {max}): max must be >= min");
        Matcher::new(Expr::Repeat {
            inner: self,
            min,
            max: Some(max),
        })
    }

    /// Repeat exactly `n` times.
    pub fn times(self, n: usize) -> Matcher {
        self.between(n, n)
    }

    /// After this matcher consumes some text, `next` builds the matcher
    /// that continues from there, out of that text.
    ///
    /// This is how a later fragment can depend on earlier matched input,
    /// e.g. "a word, then a separator, then that same word again".
    pub fn flat_map(self, next: impl Fn(&str) -> Matcher + Send + Sync + 'static) -> Matcher {
        Matcher::new(Expr::FlatMap {
            inner: self,
            next: Arc::new(next),
        })
    }
}

/// Defer construction until evaluation time.
///
/// `supplier` is re-invoked on every evaluation, never cached, which lets a
/// grammar rule refer to itself through a plain `fn` item:
///
/// ```rust
/// use allmatch::{Matcher, ch, lazy, lit};
///
/// fn expr() -> Matcher {
///     term().many1()
/// }
/// fn term() -> Matcher {
///     lit("()").or(ch('(').and(lazy(expr)).and(')'))
/// }
///
/// assert!(expr().full_match("(())"));
/// ```
///
/// Writing the recursive reference without `lazy` recurses at construction
/// time instead and overflows the stack.
pub fn lazy(supplier: impl Fn() -> Matcher + Send + Sync + 'static) -> Matcher {
    Matcher::new(Expr::Lazy(Arc::new(supplier)))
}

/// Fold a non-empty collection of matchers into a sequence with [`Matcher::and`].
///
/// # Panics
///
/// Panics if `matchers` is empty.
pub fn seq(matchers: impl IntoIterator<Item = Matcher>) -> Matcher {
    let mut matchers = matchers.into_iter();
    let Some(first) = matchers.next() else {
        panic!("seq requires at least one matcher");
    };
    matchers.fold(first, |acc, m| acc.and(m))
}

/// Fold a non-empty collection of matchers into an alternation with [`Matcher::or`].
///
/// # Panics
///
/// Panics if `matchers` is empty.
pub fn one_of(matchers: impl IntoIterator<Item = Matcher>) -> Matcher {
    let mut matchers = matchers.into_iter();
    let Some(first) = matchers.next() else {
        panic!("one_of requires at least one matcher");
    };
    matchers.fold(first, |acc, m| acc.or(m))
}

impl From<char> for Matcher {
    fn from(c: char) -> Self {
        crate::leaf::ch(c)
    }
}

impl From<&str> for Matcher {
    fn from(text: &str) -> Self {
        crate::leaf::lit(text)
    }
}

impl From<String> for Matcher {
    fn from(text: String) -> Self {
        crate::leaf::lit(text)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expr() {
            Expr::Pred(_) => f.write_str("Pred"),
            Expr::Lit(text) => write!(f, "Lit({text:?})"),
            Expr::And(a, b) => f.debug_tuple("And").field(a).field(b).finish(),
            Expr::Or(a, b) => f.debug_tuple("Or").field(a).field(b).finish(),
            Expr::Repeat { inner, min, max } => f
                .debug_struct("Repeat")
                .field("inner", inner)
                .field("min", min)
                .field("max", max)
                .finish(),
            Expr::FlatMap { inner, .. } => f.debug_tuple("FlatMap").field(inner).finish(),
            // Resolving the supplier here could recurse forever on a
            // self-referential grammar, so deferred nodes print opaquely.
            Expr::Lazy(_) => f.write_str("Lazy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::{ch, lit};

    #[test]
    fn seq_chains_left_to_right() {
        let m = seq([ch('a'), ch('b'), ch('c')]);
        assert!(m.full_match("abc"));
        assert!(!m.full_match("ab"));
        assert!(!m.full_match("abcd"));
    }

    #[test]
    fn one_of_unions_alternatives() {
        let m = one_of([lit("cat"), lit("dog"), lit("cow")]);
        assert!(m.full_match("dog"));
        assert!(m.full_match("cow"));
        assert!(!m.full_match("fox"));
    }

    #[test]
    fn operands_convert_from_chars_and_strings() {
        let m = ch('<').and("tag").and('>');
        assert!(m.full_match("<tag>"));
        assert!(!m.full_match("<tag"));
    }

    #[test]
    fn debug_shows_tree_shape() {
        let m = ch('a').and(lit("bc"));
        assert_eq!(format!("{m:?}"), "And(Pred, Lit(\"bc\"))");
    }

    #[test]
    #[should_panic(expected = "seq requires at least one matcher")]
    fn seq_rejects_empty_input() {
        let none: Vec<Matcher> = Vec::new();
        seq(none);
    }

    #[test]
    #[should_panic(expected = "one_of requires at least one matcher")]
    fn one_of_rejects_empty_input() {
        let none: Vec<Matcher> = Vec::new();
        one_of(none);
    }

    #[test]
    #[should_panic(expected = "max must be >= min")]
    fn between_rejects_inverted_bounds() {
        ch('a').between(5, 3);
    }
}
