use crate::score::{
    BONUS_PREFIX, BONUS_SUBSTRING, BONUS_WHOLE_WORD, PENALTY_TERM_RANK, WEIGHT_CONSECUTIVE,
    WEIGHT_COVERAGE, WEIGHT_TERM_LEN,
};

/// Scoring weights used by a [`Matcher`](crate::Matcher).
///
/// All weights are additive per term; see the constants in the
/// score module for what each component measures.
#[non_exhaustive]
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct MatcherConfig {
    /// Bonus for a word boundary delimited whole word occurrence
    pub bonus_whole_word: i32,
    /// Bonus for a contiguous substring occurrence
    pub bonus_substring: i32,
    /// Extra bonus when that substring starts at the first char
    pub bonus_prefix: i32,
    /// Weight per char of the longest consecutive subsequence run
    pub weight_consecutive: i32,
    /// Weight per title char consumed by the subsequence walk
    pub weight_coverage: i32,
    /// Weight per char of the term itself
    pub weight_term_len: i32,
    /// Penalty per term position within the query
    pub penalty_term_rank: i32,
}

impl MatcherConfig {
    pub const DEFAULT: Self = {
        MatcherConfig {
            bonus_whole_word: BONUS_WHOLE_WORD,
            bonus_substring: BONUS_SUBSTRING,
            bonus_prefix: BONUS_PREFIX,
            weight_consecutive: WEIGHT_CONSECUTIVE,
            weight_coverage: WEIGHT_COVERAGE,
            weight_term_len: WEIGHT_TERM_LEN,
            penalty_term_rank: PENALTY_TERM_RANK,
        }
    };
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
