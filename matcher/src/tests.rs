use crate::score::{
    BONUS_PREFIX, BONUS_SUBSTRING, BONUS_WHOLE_WORD, PENALTY_TERM_RANK, WEIGHT_CONSECUTIVE,
    WEIGHT_COVERAGE, WEIGHT_TERM_LEN,
};
use crate::{Matcher, Pattern, Term};

fn assert_subsequence(cases: &[(&str, &str, bool)]) {
    let mut matcher = Matcher::default();
    for &(haystack, needle, expected) in cases {
        let term = Term::new(needle);
        assert_eq!(
            matcher.subsequence_match(haystack, &term),
            expected,
            "{needle:?} against {haystack:?}"
        );
    }
}

#[test]
fn subsequence() {
    assert_subsequence(&[
        ("spring boot", "spb", true),
        ("spring boot", "bps", false),
        ("spring boot", "", true),
        ("", "x", false),
        ("", "", true),
        ("aaa", "ab", false),
        ("aba", "ab", true),
        // matching is case insensitive on both sides
        ("Spring Boot Guide", "SBG", true),
        ("GitHub - pull requests", "ghr", true),
        ("Héllo Wörld", "hö", true),
    ]);
}

#[test]
fn and_semantics_across_terms() {
    let mut matcher = Matcher::default();
    let pattern = Pattern::parse("spring guide");
    assert!(pattern.matches("Spring Boot Guide", &mut matcher));
    assert!(pattern.score("Spring Boot Guide", &mut matcher).is_some());

    let pattern = Pattern::parse("spring xyz");
    assert!(!pattern.matches("Spring Boot Guide", &mut matcher));
    assert_eq!(pattern.score("Spring Boot Guide", &mut matcher), None);
}

#[test]
fn empty_pattern_matches_everything() {
    let mut matcher = Matcher::default();
    let pattern = Pattern::parse("   ");
    assert!(pattern.is_empty());
    assert!(pattern.matches("anything at all", &mut matcher));
    assert!(pattern.matches("", &mut matcher));
    assert_eq!(pattern.score("anything at all", &mut matcher), Some(0));
}

#[test]
fn whole_word_and_prefix_bonus() {
    let mut matcher = Matcher::default();
    let term = Term::new("spring");

    cov_mark::check!(whole_word_bonus);
    cov_mark::check!(prefix_bonus);
    let at_start = matcher.term_score("Spring Boot", &term, 0);
    assert_eq!(
        at_start,
        BONUS_WHOLE_WORD
            + BONUS_SUBSTRING
            + BONUS_PREFIX
            + 6 * WEIGHT_CONSECUTIVE
            + 6 * WEIGHT_COVERAGE
            + 6 * WEIGHT_TERM_LEN
    );
}

#[test]
fn interior_word_misses_prefix_bonus() {
    let mut matcher = Matcher::default();
    let term = Term::new("spring");

    // no prefix bonus in the expected sum: the occurrence starts at
    // char 3, not 0
    let interior = matcher.term_score("My Spring App", &term, 0);
    assert_eq!(
        interior,
        BONUS_WHOLE_WORD
            + BONUS_SUBSTRING
            + 6 * WEIGHT_CONSECUTIVE
            + 6 * WEIGHT_COVERAGE
            + 6 * WEIGHT_TERM_LEN
    );
}

#[test]
fn start_of_title_outranks_interior() {
    let mut matcher = Matcher::default();
    let term = Term::new("spring");
    let at_start = matcher.term_score("Spring Boot", &term, 0);
    let interior = matcher.term_score("My Spring App", &term, 0);
    assert!(at_start > interior);
}

#[test]
fn whole_word_outranks_scattered_subsequence() {
    let mut matcher = Matcher::default();
    let term = Term::new("spring");

    let whole_word = matcher.term_score("Spring Boot", &term, 0);
    // every term char present, but only as a scattered subsequence
    let scattered = matcher.term_score("sxpxrxixnxgx", &term, 0);
    assert!(matcher.subsequence_match("sxpxrxixnxgx", &term));
    assert_eq!(
        scattered,
        WEIGHT_CONSECUTIVE + 6 * WEIGHT_COVERAGE + 6 * WEIGHT_TERM_LEN
    );
    assert!(whole_word > scattered);
}

#[test]
fn embedded_substring_misses_word_bonus() {
    let mut matcher = Matcher::default();
    let term = Term::new("spring");

    // "Wellsprings" contains the term only as an undelimited
    // substring; the expected sum carries no whole word bonus
    let embedded = matcher.term_score("Wellsprings", &term, 0);
    assert_eq!(
        embedded,
        BONUS_SUBSTRING + 6 * WEIGHT_CONSECUTIVE + 6 * WEIGHT_COVERAGE + 6 * WEIGHT_TERM_LEN
    );
}

#[test]
fn walk_is_greedy_about_runs() {
    let mut matcher = Matcher::default();
    let term = Term::new("ab");
    // the walk consumes the first 'a' of "aab", so the second 'a'
    // interrupts the run even though "ab" is right there
    let score = matcher.term_score("aab", &term, 0);
    assert_eq!(
        score,
        BONUS_SUBSTRING + WEIGHT_CONSECUTIVE + 2 * WEIGHT_COVERAGE + 2 * WEIGHT_TERM_LEN
    );
}

#[test]
fn whole_words_outrank_scattered_for_multi_term_queries() {
    let mut matcher = Matcher::default();
    let pattern = Pattern::parse("spring boot");
    let matches = pattern.match_list(
        &mut matcher,
        ["spxrixng bxoxot guide", "Spring Boot Guide"],
    );
    assert_eq!(matches[0].0, "Spring Boot Guide");
    assert_eq!(matches[1].0, "spxrixng bxoxot guide");
    assert!(matches[0].1 > matches[1].1);
}

#[test]
fn later_terms_weigh_less() {
    let mut matcher = Matcher::default();
    let term = Term::new("boot");
    let first = matcher.term_score("Spring Boot", &term, 0);
    let second = matcher.term_score("Spring Boot", &term, 1);
    assert_eq!(first - second, PENALTY_TERM_RANK);
}

#[test]
fn score_is_total() {
    let mut matcher = Matcher::default();
    let term = Term::new("ab");
    // "ab" is not a subsequence of "aaa" but scoring still succeeds
    assert!(!matcher.subsequence_match("aaa", &term));
    let partial = matcher.term_score("aaa", &term, 0);
    assert_eq!(
        partial,
        WEIGHT_CONSECUTIVE + WEIGHT_COVERAGE + 2 * WEIGHT_TERM_LEN
    );
}

#[test]
fn match_list_ranks_and_filters() {
    let mut matcher = Matcher::default();

    // "boot" is not a subsequence of the second title
    let pattern = Pattern::parse("spring boot");
    let matches = pattern.match_list(
        &mut matcher,
        ["Spring Boot Reference", "Java Spring Framework"],
    );
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].0, "Spring Boot Reference");

    let pattern = Pattern::parse("ab");
    let matches = pattern.match_list(&mut matcher, ["aaa", "aba"]);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].0, "aba");
}

#[test]
fn match_list_keeps_input_order_on_ties() {
    let mut matcher = Matcher::default();
    let pattern = Pattern::parse("g");
    let matches = pattern.match_list(
        &mut matcher,
        ["Gmail Inbox", "GitHub - pull requests", "Google Calendar"],
    );
    // all three start with 'g', so they tie and keep insertion order
    let expected = BONUS_SUBSTRING
        + BONUS_PREFIX
        + WEIGHT_CONSECUTIVE
        + WEIGHT_COVERAGE
        + WEIGHT_TERM_LEN;
    assert_eq!(
        matches,
        vec![
            ("Gmail Inbox", expected),
            ("GitHub - pull requests", expected),
            ("Google Calendar", expected),
        ]
    );
}

#[test]
fn match_list_empty_query_passes_through() {
    let mut matcher = Matcher::default();
    let pattern = Pattern::parse("");
    let matches = pattern.match_list(&mut matcher, ["b", "a", "c"]);
    assert_eq!(matches, vec![("b", 0), ("a", 0), ("c", 0)]);
}

fn mask_of(pattern: &str, haystack: &str) -> Vec<bool> {
    let mut matcher = Matcher::default();
    let mut mask = Vec::new();
    Pattern::parse(pattern).highlight(haystack, &mut matcher, &mut mask);
    mask
}

#[test]
fn highlight_marks_every_occurrence() {
    // occurrence marking, not a minimal subsequence alignment: every
    // 'b', 'a' and 'n' lights up
    assert_eq!(mask_of("ban", "banana"), vec![true; 6]);
    assert_eq!(
        mask_of("g", "Spring Boot"),
        vec![
            false, false, false, false, false, true, // "spring"
            false, false, false, false, false // " boot"
        ]
    );
}

#[test]
fn highlight_mask_length_is_char_count() {
    assert_eq!(mask_of("x", "").len(), 0);
    assert_eq!(mask_of("", "anything").len(), 8);
    assert_eq!(mask_of("", "anything"), vec![false; 8]);
    // chars, not bytes
    assert_eq!(mask_of("ö", "Héllo Wörld").len(), 11);
    assert_eq!(
        mask_of("ö", "Héllo Wörld"),
        vec![
            false, false, false, false, false, false, // "héllo "
            false, true, false, false, false // "wörld"
        ]
    );
}

#[test]
fn highlight_is_case_insensitive() {
    assert_eq!(
        mask_of("B", "Banana Bread"),
        vec![
            true, false, false, false, false, false, false, // "banana "
            true, false, false, false, false // "bread"
        ]
    );
}
