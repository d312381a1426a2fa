/*!
`switchboard_matcher` is a low level crate that contains the pure
matching subsystem used by the `switchboard` engine: query
tokenization, subsequence matching, relevance scoring and match
highlighting for tab titles.

Every operation is a pure function of its inputs. The only state a
[`Matcher`] carries is its configuration and a scratch buffer holding
the case folded copy of the current haystack, which is reused between
calls so that a filter pass over a whole tab list does not allocate
per candidate.
*/

pub mod chars;
mod config;
mod highlight;
mod score;

pub mod pattern;

#[cfg(test)]
mod tests;

pub use crate::config::MatcherConfig;
pub use crate::pattern::{Pattern, Term};

/// A matcher that can execute subsequence matches and compute
/// relevance scores for candidate titles.
///
/// Matching is case insensitive: the haystack is folded char by char
/// into the scratch buffer (one codepoint per codepoint, so char
/// indices stay aligned with the original title) and needles are
/// folded when the [`Pattern`] is parsed. Callers therefore pass raw
/// display titles; they never need to lowercase anything themselves.
///
/// A matcher should be created once and reused for an entire filter
/// pass rather than constructed per candidate.
pub struct Matcher {
    pub config: MatcherConfig,
    scratch: String,
}

impl Default for Matcher {
    fn default() -> Self {
        Matcher::new(MatcherConfig::DEFAULT)
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Matcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            scratch: String::new(),
        }
    }

    /// Checks whether `term` appears in `haystack` as a subsequence:
    /// the term's chars must occur in order but not contiguously, so
    /// `"spb"` matches `"spring boot"`.
    ///
    /// The empty term vacuously matches every haystack; a non-empty
    /// term never matches the empty haystack.
    pub fn subsequence_match(&mut self, haystack: &str, term: &Term) -> bool {
        let haystack = chars::fold(&mut self.scratch, haystack);
        score::subsequence_walk(haystack, term.as_str()).consumed == term.char_len()
    }

    /// Computes the relevance score of a single term against
    /// `haystack`. Higher is more relevant; the magnitude carries no
    /// meaning beyond ordering and the value can go negative.
    ///
    /// `rank` is the position of the term within its query. Later
    /// terms are weighted slightly lower since users tend to type
    /// their most important word first.
    ///
    /// The function is total: a term that is not a subsequence of the
    /// haystack still receives its partial coverage score. Callers
    /// that want filtering fused with scoring should use
    /// [`Pattern::score`] instead.
    pub fn term_score(&mut self, haystack: &str, term: &Term, rank: usize) -> i32 {
        self.term_match(haystack, term, rank).1
    }
}
