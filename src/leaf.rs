//! Leaf matchers: single characters and literal strings.
//!
//! Every character-level matcher here is a predicate matcher underneath;
//! the named constructors only vary the predicate.

use std::sync::Arc;

use crate::matcher::{Expr, Matcher};

/// Match one character satisfying `p`, consuming exactly one position.
pub fn pred(p: impl Fn(char) -> bool + Send + Sync + 'static) -> Matcher {
    Matcher::new(Expr::Pred(Arc::new(p)))
}

/// Match exactly the character `c`.
pub fn ch(c: char) -> Matcher {
    pred(move |x| x == c)
}

/// Match any single character.
pub fn any() -> Matcher {
    pred(|_| true)
}

/// Match any single character except `c`.
pub fn not_ch(c: char) -> Matcher {
    pred(move |x| x != c)
}

/// Match one character in the inclusive range `lo..=hi`.
pub fn range(lo: char, hi: char) -> Matcher {
    pred(move |x| lo <= x && x <= hi)
}

/// Match one character contained in `set`.
pub fn chs(set: impl IntoIterator<Item = char>) -> Matcher {
    let set: Vec<char> = set.into_iter().collect();
    pred(move |x| set.contains(&x))
}

/// Match the literal `text` exactly, case-sensitively.
///
/// The empty literal matches everywhere, consuming nothing.
pub fn lit(text: impl Into<String>) -> Matcher {
    Matcher::new(Expr::Lit(text.into()))
}

/// Match any one of `texts`, as an alternation of literal matchers.
///
/// # Panics
///
/// Panics if `texts` is empty.
pub fn lits<S: Into<String>>(texts: impl IntoIterator<Item = S>) -> Matcher {
    let mut matchers = texts.into_iter().map(lit);
    let Some(first) = matchers.next() else {
        panic!("lits requires at least one literal");
    };
    matchers.fold(first, |acc, m| acc.or(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ch_matches_one_exact_character() {
        let m = ch('a');
        assert!(m.full_match("a"));
        assert!(!m.full_match(""));
        assert!(!m.full_match("b"));
        assert!(!m.full_match("aa"));
        assert!(!m.full_match("xy"));
    }

    #[test]
    fn chs_matches_set_members() {
        let m = chs(['a', 'b', 'c']);
        assert!(m.full_match("a"));
        assert!(m.full_match("b"));
        assert!(m.full_match("c"));
        assert!(!m.full_match("d"));
        assert!(!m.full_match("1"));
    }

    #[test]
    fn any_matches_exactly_one_character() {
        let m = any();
        assert!(m.full_match("a"));
        assert!(m.full_match("~"));
        assert!(!m.full_match(""));
        assert!(!m.full_match("xyz"));
    }

    #[test]
    fn range_is_inclusive() {
        let m = range('0', '9');
        assert!(m.full_match("0"));
        assert!(m.full_match("5"));
        assert!(m.full_match("9"));
        assert!(!m.full_match(""));
        assert!(!m.full_match("a"));
    }

    #[test]
    fn not_ch_excludes_one_character() {
        let m = not_ch('a');
        assert!(m.full_match("b"));
        assert!(!m.full_match("a"));
        assert!(!m.full_match(""));
    }

    #[test]
    fn lit_requires_the_exact_string() {
        let m = lit("abc");
        assert!(m.full_match("abc"));
        assert!(!m.full_match(""));
        assert!(!m.full_match("a"));
        assert!(!m.full_match("ab"));
        assert!(!m.full_match("ax"));
        assert!(!m.full_match("abx"));
        assert!(!m.full_match("abcx"));
    }

    #[test]
    fn empty_lit_consumes_nothing() {
        let m = lit("");
        assert!(m.full_match(""));
        assert!(!m.full_match("a"));
        let chars: Vec<char> = "ab".chars().collect();
        assert_eq!(m.evaluate(&chars, 1).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn lits_matches_any_listed_literal() {
        let m = lits(["true", "false"]);
        assert!(m.full_match("true"));
        assert!(m.full_match("false"));
        assert!(!m.full_match("truth"));
        assert!(!m.full_match(""));
    }

    #[test]
    #[should_panic(expected = "lits requires at least one literal")]
    fn lits_rejects_empty_set() {
        let none: Vec<&str> = Vec::new();
        lits(none);
    }

    #[test]
    fn predicates_see_unicode_scalars() {
        let m = pred(char::is_alphabetic);
        assert!(m.full_match("é"));
        assert!(m.full_match("語"));
        assert!(!m.full_match("7"));
    }
}
