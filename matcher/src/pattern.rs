//! Query tokenization and the higher level match API used by callers.

use std::cmp::Reverse;

use crate::highlight;
use crate::{chars, Matcher};


/// A single case folded search word from the user's query.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Term {
    needle: Box<str>,
    char_len: usize,
}

impl Term {
    /// Creates a term by case folding `needle`. Terms produced by
    /// [`Pattern::parse`] are never empty; an explicitly constructed
    /// empty term is legal and vacuously matches everything.
    pub fn new(needle: &str) -> Term {
        let needle: String = needle.chars().map(chars::to_lower_case).collect();
        Term {
            char_len: needle.chars().count(),
            needle: needle.into_boxed_str(),
        }
    }

    /// The folded needle text.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Number of chars (not bytes) in this term.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

/// A parsed query: the ordered list of search words the user typed.
#[derive(Debug, Default, Clone)]
pub struct Pattern {
    /// The individual terms in this pattern, in the order they
    /// appeared in the query. Order matters for scoring: later terms
    /// weigh slightly less.
    pub terms: Vec<Term>,
}

impl Pattern {
    /// Tokenizes a raw query: case fold, split on runs of
    /// whitespace, drop empty words. A blank or whitespace-only
    /// query parses to the empty pattern, which matches every
    /// candidate.
    pub fn parse(query: &str) -> Pattern {
        Pattern {
            terms: query.split_whitespace().map(Term::new).collect(),
        }
    }

    /// Reparses in place, reusing the term list allocation across
    /// keystrokes.
    pub fn reparse(&mut self, query: &str) {
        self.terms.clear();
        self.terms.extend(query.split_whitespace().map(Term::new));
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether every term of this pattern is a subsequence of
    /// `haystack`. Terms match independently; they are not required
    /// to cover disjoint char ranges. The empty pattern matches
    /// everything.
    pub fn matches(&self, haystack: &str, matcher: &mut Matcher) -> bool {
        self.terms
            .iter()
            .all(|term| matcher.subsequence_match(haystack, term))
    }

    /// Filters and ranks in one pass: `None` when some term fails
    /// the subsequence predicate, otherwise the summed per term
    /// scores. The empty pattern scores `Some(0)` so an unfiltered
    /// list keeps its insertion order.
    pub fn score(&self, haystack: &str, matcher: &mut Matcher) -> Option<i32> {
        let mut score = 0;
        for (rank, term) in self.terms.iter().enumerate() {
            let (matched, term_score) = matcher.term_match(haystack, term, rank);
            if !matched {
                return None;
            }
            score += term_score;
        }
        Some(score)
    }

    /// Computes the highlight mask for `haystack`: one entry per
    /// char, `true` where the folded title char equals any char of
    /// any term. The empty pattern produces an all-false mask. See
    /// the highlight module for the (deliberate) over marking
    /// semantics.
    pub fn highlight(&self, haystack: &str, matcher: &mut Matcher, mask: &mut Vec<bool>) {
        highlight::highlight_into(haystack, &self.terms, &mut matcher.scratch, mask);
    }

    /// Convenience function to filter, score and sort a (relatively
    /// small) list of titles on the current thread. Results are
    /// sorted by descending score; equal scores keep their input
    /// order. For large lists prefer the parallel pipeline in the
    /// `switchboard` crate.
    pub fn match_list<T: AsRef<str>>(
        &self,
        matcher: &mut Matcher,
        items: impl IntoIterator<Item = T>,
    ) -> Vec<(T, i32)> {
        if self.terms.is_empty() {
            return items.into_iter().map(|item| (item, 0)).collect();
        }
        let mut items: Vec<_> = items
            .into_iter()
            .filter_map(|item| {
                self.score(item.as_ref(), matcher)
                    .map(|score| (item, score))
            })
            .collect();
        // sort_by_key is stable, so score ties keep their input order
        items.sort_by_key(|(_, score)| Reverse(*score));
        items
    }
}
