use memchr::memmem;

use crate::chars::{self, CharClass};
use crate::pattern::Term;
use crate::Matcher;

// The weights below are deliberately blunt heuristics: whole words
// beat substrings beat scattered subsequences. They have no deeper
// derivation; treat them as tunable constants, not load bearing
// invariants.

/// Bonus for a term that occurs as a whole word, delimited by word
/// boundaries on both sides.
pub(crate) const BONUS_WHOLE_WORD: i32 = 1000;

/// Bonus for a term that occurs as a contiguous substring anywhere
/// in the title.
pub(crate) const BONUS_SUBSTRING: i32 = 500;

/// Extra bonus when the first substring occurrence starts the title.
pub(crate) const BONUS_PREFIX: i32 = 200;

/// Per char weight of the longest uninterrupted run of the
/// subsequence walk.
pub(crate) const WEIGHT_CONSECUTIVE: i32 = 50;

/// Per char weight of every title char consumed by the walk.
pub(crate) const WEIGHT_COVERAGE: i32 = 10;

/// Per char weight of the term itself; a long term that matched is
/// more intentional than a short incidental one.
pub(crate) const WEIGHT_TERM_LEN: i32 = 5;

/// Penalty per term position within the query; later terms weigh
/// slightly less than earlier ones.
pub(crate) const PENALTY_TERM_RANK: i32 = 5;

/// Result of a single subsequence walk over a haystack.
pub(crate) struct Walk {
    /// Number of term chars consumed. Equals the term length iff the
    /// term is a subsequence of the haystack.
    pub consumed: usize,
    /// Length of the longest run of consecutive haystack chars that
    /// each advanced the term pointer without interruption.
    pub longest_run: usize,
}

/// Two pointer scan: walks `haystack` left to right and advances
/// into `term` on every equal char. Both inputs must already be case
/// folded.
pub(crate) fn subsequence_walk(haystack: &str, term: &str) -> Walk {
    let mut walk = Walk {
        consumed: 0,
        longest_run: 0,
    };
    let mut term_chars = term.chars();
    let Some(mut needle) = term_chars.next() else {
        return walk;
    };
    let mut run = 0;
    for c in haystack.chars() {
        if c == needle {
            walk.consumed += 1;
            run += 1;
            walk.longest_run = walk.longest_run.max(run);
            match term_chars.next() {
                Some(next) => needle = next,
                None => break,
            }
        } else {
            run = 0;
        }
    }
    walk
}

/// Returns the char index of the first occurrence of `needle` in
/// `haystack`, if any. Byte offsets of a valid UTF-8 needle always
/// fall on char boundaries of the haystack, so the byte offset can
/// be converted by counting the chars in front of it.
fn find_substring(haystack: &str, needle: &str) -> Option<usize> {
    let pos = memmem::find(haystack.as_bytes(), needle.as_bytes())?;
    Some(haystack[..pos].chars().count())
}

/// Whether `needle` occurs in `haystack` delimited by word
/// boundaries (or the string edges) on both sides.
fn has_whole_word(haystack: &str, needle: &str) -> bool {
    memmem::find_iter(haystack.as_bytes(), needle.as_bytes()).any(|start| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        before.map_or(true, |c| chars::char_class(c) != CharClass::Word)
            && after.map_or(true, |c| chars::char_class(c) != CharClass::Word)
    })
}

impl Matcher {
    /// Scores a single term against the haystack and reports whether
    /// it passed the subsequence predicate, so [`Pattern::score`]
    /// (crate::Pattern::score) can filter and rank in one pass.
    pub(crate) fn term_match(&mut self, haystack: &str, term: &Term, rank: usize) -> (bool, i32) {
        let config = self.config;
        let haystack = chars::fold(&mut self.scratch, haystack);
        let needle = term.as_str();
        let walk = subsequence_walk(haystack, needle);

        let mut score = 0;
        // the empty needle trivially occurs everywhere; it must not
        // collect the occurrence bonuses
        if !needle.is_empty() {
            if has_whole_word(haystack, needle) {
                cov_mark::hit!(whole_word_bonus);
                score += config.bonus_whole_word;
            }
            if let Some(pos) = find_substring(haystack, needle) {
                score += config.bonus_substring;
                if pos == 0 {
                    cov_mark::hit!(prefix_bonus);
                    score += config.bonus_prefix;
                }
            }
        }
        score += walk.longest_run as i32 * config.weight_consecutive;
        score += walk.consumed as i32 * config.weight_coverage;
        score += term.char_len() as i32 * config.weight_term_len;
        score -= rank as i32 * config.penalty_term_rank;

        (walk.consumed == term.char_len(), score)
    }
}
