//! # Cleanup Pipeline
//!
//! Turns arbitrary text into a cleaned copy plus a report of the catalog
//! characters that were found.
//!
//! ## Pipeline Stages
//!
//! 1. **Catalog substitution** - every catalog character is counted and rewritten per its policy
//! 2. **Digit removal** - `remove_numbers`
//! 3. **Symbol filtering** - `remove_punctuation` / `remove_special_chars`
//! 4. **ASCII filtering** - `remove_non_ascii`
//! 5. **Whitespace handling** - `remove_all_spaces`, else `remove_extra_spaces`
//! 6. **Line-break handling** - `remove_line_breaks`, else `normalize_line_breaks`
//! 7. **Case transform** - `text_case`
//! 8. **Final collapse** - repeats stage 5 collapsing when it is in effect
//!
//! Each stage reads the output of the previous one. The pipeline holds no
//! state between calls.

use crate::catalog::{self, catalog};
use crate::options::{CleaningOptions, TextCase};
use crate::report::{collect_matches, CleanupResult, MatchRecord};
use regex::Regex;
use std::sync::LazyLock;

// ============================================================================
// Stage 1: Catalog Substitution
// ============================================================================

/// Stage 1: rewrite catalog characters.
///
/// Returns the rewritten text and one counter per catalog entry, indexed by
/// catalog position. Counts are taken against the input; catalog code points
/// are disjoint, so a single pass gives the same result as one pass per entry.
pub fn stage1_substitute(input: &str) -> (String, Vec<usize>) {
    let mut counts = vec![0usize; catalog().len()];
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        match catalog::position(c) {
            Some(pos) => {
                counts[pos] += 1;
                result.push_str(catalog()[pos].replacement());
            }
            None => result.push(c),
        }
    }

    (result, counts)
}

/// Reports catalog matches without rewriting anything.
pub fn scan(input: &str) -> Vec<MatchRecord> {
    let mut counts = vec![0usize; catalog().len()];
    for pos in input.chars().filter_map(catalog::position) {
        counts[pos] += 1;
    }
    collect_matches(catalog(), &counts)
}

// ============================================================================
// Stages 2-4: Character Filters
// ============================================================================

static RE_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

// Keeps ASCII word characters, whitespace and the Cyrillic block.
static RE_SYMBOLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s\x{0400}-\x{04FF}]+").unwrap());

/// Stage 2: delete ASCII digits.
pub fn stage2_remove_numbers(input: &str) -> String {
    RE_DIGITS.replace_all(input, "").into_owned()
}

/// Stage 3: delete everything that is not a word character, whitespace or Cyrillic.
pub fn stage3_remove_symbols(input: &str) -> String {
    RE_SYMBOLS.replace_all(input, "").into_owned()
}

/// Stage 4: delete everything outside 7-bit ASCII.
pub fn stage4_remove_non_ascii(input: &str) -> String {
    input.chars().filter(char::is_ascii).collect()
}

// ============================================================================
// Stages 5-6: Whitespace and Line Breaks
// ============================================================================

static RE_ANY_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// Space, tab, vertical tab, form feed. Newlines are not horizontal.
static RE_HORIZONTAL_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\x0B\x0C]+").unwrap());

static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());

// Stray CRs before a break belong to the run, or a second pass would eat them.
static RE_LINE_BREAK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r*\n){2,}").unwrap());

fn is_horizontal_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0B' | '\x0C')
}

/// Delete every whitespace character, line breaks included.
pub fn remove_all_whitespace(input: &str) -> String {
    RE_ANY_WHITESPACE.replace_all(input, "").into_owned()
}

/// Collapse horizontal whitespace runs to one space and trim both ends.
pub fn collapse_horizontal_whitespace(input: &str) -> String {
    let collapsed = RE_HORIZONTAL_WHITESPACE.replace_all(input, " ");
    collapsed.trim_matches(is_horizontal_whitespace).to_string()
}

/// Stage 5: whitespace handling. `remove_all_spaces` wins over `remove_extra_spaces`.
pub fn stage5_whitespace(input: &str, options: &CleaningOptions) -> String {
    if options.remove_all_spaces {
        remove_all_whitespace(input)
    } else if options.remove_extra_spaces {
        collapse_horizontal_whitespace(input)
    } else {
        input.to_string()
    }
}

/// Stage 6: line-break handling. `remove_line_breaks` wins over `normalize_line_breaks`.
pub fn stage6_line_breaks(input: &str, options: &CleaningOptions) -> String {
    if options.remove_line_breaks {
        RE_LINE_BREAK.replace_all(input, " ").into_owned()
    } else if options.normalize_line_breaks {
        RE_LINE_BREAK_RUN.replace_all(input, "\n\n").into_owned()
    } else {
        input.to_string()
    }
}

// ============================================================================
// Stage 7: Case Transform
// ============================================================================

/// Stage 7: apply the case transform.
pub fn stage7_case(input: &str, case: TextCase) -> String {
    match case {
        TextCase::Original => input.to_string(),
        TextCase::Lowercase => input.to_lowercase(),
        TextCase::Uppercase => input.to_uppercase(),
        TextCase::SentenceCase => to_sentence_case(input),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SentenceState {
    /// Start of text, or after ". " plus any further whitespace.
    AwaitingLetter,
    /// Just read one or more periods.
    AfterPeriod,
    /// Anywhere else.
    Inside,
}

/// Lowercase everything, then capitalize the first letter of the text and
/// the first letter after each period-plus-whitespace boundary.
///
/// Only whitespace is skipped while looking for that letter. Any other
/// character (a quote, a digit) takes the slot and stays as it is.
pub fn to_sentence_case(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut result = String::with_capacity(lowered.len());
    let mut state = SentenceState::AwaitingLetter;

    for c in lowered.chars() {
        match state {
            SentenceState::AwaitingLetter if c.is_whitespace() => {
                result.push(c);
                continue;
            }
            SentenceState::AwaitingLetter => {
                result.push(capitalize(c));
            }
            SentenceState::AfterPeriod if c.is_whitespace() => {
                result.push(c);
                state = SentenceState::AwaitingLetter;
                continue;
            }
            SentenceState::AfterPeriod | SentenceState::Inside => {
                result.push(c);
            }
        }

        state = if c == '.' {
            SentenceState::AfterPeriod
        } else {
            SentenceState::Inside
        };
    }

    result
}

/// Uppercases a letter when the uppercase form is a single character.
fn capitalize(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// ============================================================================
// Main Pipeline
// ============================================================================

/// Run the full cleanup pipeline.
///
/// Total over all inputs: any string, including the empty one, is accepted.
///
/// # Example
///
/// ```
/// use uncloak::cleanup::clean;
/// use uncloak::CleaningOptions;
///
/// let result = clean("Hello\u{2014}world", &CleaningOptions::default());
/// assert_eq!(result.cleaned_text, "Hello-world");
/// assert_eq!(result.matches[0].label, "Em Dash");
/// assert_eq!(result.total_removed, 1);
/// ```
pub fn clean(input: &str, options: &CleaningOptions) -> CleanupResult {
    // Stage 1: Catalog substitution
    let (mut result, counts) = stage1_substitute(input);
    let matches = collect_matches(catalog(), &counts);
    let total_removed = matches.iter().map(|m| m.occurrence_count).sum();

    // Stage 2: Digits
    if options.remove_numbers {
        result = stage2_remove_numbers(&result);
    }

    // Stage 3: Punctuation / special characters (same filter)
    if options.strips_symbols() {
        result = stage3_remove_symbols(&result);
    }

    // Stage 4: Non-ASCII
    if options.remove_non_ascii {
        result = stage4_remove_non_ascii(&result);
    }

    // Stage 5: Whitespace
    result = stage5_whitespace(&result, options);

    // Stage 6: Line breaks
    result = stage6_line_breaks(&result, options);

    // Stage 7: Case
    result = stage7_case(&result, options.text_case);

    // Stage 8: Collapse again; stage 6 can leave fresh runs
    if options.collapses_spaces() {
        result = collapse_horizontal_whitespace(&result);
    }

    tracing::debug!(
        input_len = input.len(),
        output_len = result.len(),
        total_removed,
        entries = matches.len(),
        "cleaned text"
    );

    CleanupResult {
        cleaned_text: result,
        matches,
        total_removed,
    }
}

/// Run cleanup with default options
pub fn clean_default(input: &str) -> CleanupResult {
    clean(input, &CleaningOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_em_dash() {
        let result = clean_default("Hello\u{2014}world");
        assert_eq!(result.cleaned_text, "Hello-world");
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].label, "Em Dash");
        assert_eq!(result.matches[0].hex_code, "U+2014");
        assert_eq!(result.matches[0].occurrence_count, 1);
        assert_eq!(result.total_removed, 1);
    }

    #[test]
    fn test_non_breaking_spaces_collapse() {
        let result = clean_default("Test\u{00A0}\u{00A0}text");
        assert_eq!(result.cleaned_text, "Test text");
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].occurrence_count, 2);
        assert_eq!(result.total_removed, 2);
    }

    #[test]
    fn test_non_breaking_spaces_without_collapse() {
        let result = clean("Test\u{00A0}\u{00A0}text", &CleaningOptions::minimal());
        assert_eq!(result.cleaned_text, "Test  text");
        assert_eq!(result.total_removed, 2);
    }

    #[test]
    fn test_zero_width_space_removed() {
        let result = clean_default("caf\u{e9}\u{200B}");
        assert_eq!(result.cleaned_text, "café");
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].label, "Zero-Width Space");
        assert_eq!(result.matches[0].occurrence_count, 1);
    }

    #[test]
    fn test_empty_input() {
        let result = clean_default("");
        assert_eq!(result.cleaned_text, "");
        assert!(result.matches.is_empty());
        assert_eq!(result.total_removed, 0);
    }

    #[test]
    fn test_sentence_case_double_space() {
        let options = CleaningOptions::minimal().with_case(TextCase::SentenceCase);
        let result = clean("a.  b", &options);
        assert_eq!(result.cleaned_text, "A.  B");
    }

    #[test]
    fn test_normalize_line_breaks() {
        let options = CleaningOptions::default().normalize_line_breaks();
        let result = clean("Hi\n\n\nThere", &options);
        assert_eq!(result.cleaned_text, "Hi\n\nThere");
    }

    #[test]
    fn test_normalize_line_breaks_crlf() {
        let options = CleaningOptions::default().normalize_line_breaks();
        let result = clean("Hi\r\n\r\n\r\nThere\r\nagain", &options);
        assert_eq!(result.cleaned_text, "Hi\n\nThere\r\nagain");
    }

    #[test]
    fn test_normalize_line_breaks_absorbs_stray_cr() {
        let options = CleaningOptions::default().normalize_line_breaks();
        for input in ["a\r\r\n\r\nb", "a\r\n\r\r\nb", "a\r\n\n\rb", "a\r\r\nb"] {
            let once = clean(input, &options).cleaned_text;
            let twice = clean(&once, &options).cleaned_text;
            assert_eq!(once, twice, "input {input:?}");
        }
        assert_eq!(clean("a\r\r\n\r\nb", &options).cleaned_text, "a\n\nb");
        // A single break with a stray CR is not a run
        assert_eq!(clean("a\r\r\nb", &options).cleaned_text, "a\r\r\nb");
    }

    #[test]
    fn test_remove_line_breaks() {
        let options = CleaningOptions::default().remove_line_breaks();
        let result = clean("one\ntwo\r\nthree", &options);
        assert_eq!(result.cleaned_text, "one two three");
    }

    #[test]
    fn test_remove_line_breaks_wins_over_normalize() {
        let both = CleaningOptions::default()
            .remove_line_breaks()
            .normalize_line_breaks();
        let only = CleaningOptions::default().remove_line_breaks();
        let input = "a\n\n\nb\nc";
        assert_eq!(clean(input, &both), clean(input, &only));
        assert_eq!(clean(input, &both).cleaned_text, "a b c");
    }

    #[test]
    fn test_final_collapse_after_line_break_removal() {
        // Stage 6 turns "a \n b" into "a   b"; stage 8 collapses it
        let options = CleaningOptions::default().remove_line_breaks();
        let result = clean("a \n b\n", &options);
        assert_eq!(result.cleaned_text, "a b");
    }

    #[test]
    fn test_default_keeps_newlines_and_trims_horizontal_only() {
        let result = clean_default("  first \t line\n\tsecond   line  ");
        assert_eq!(result.cleaned_text, "first line\n second line");
        assert!(result.matches.is_empty());
        assert_eq!(result.total_removed, 0);
    }

    #[test]
    fn test_remove_all_spaces() {
        let options = CleaningOptions::default().remove_all_spaces();
        let result = clean("a b\tc\nd\r\ne", &options);
        assert_eq!(result.cleaned_text, "abcde");
    }

    #[test]
    fn test_remove_all_spaces_precedence() {
        let input = "  Some\u{00A0} text \n\n with   gaps ";
        let both = CleaningOptions::default().remove_all_spaces();
        let alone = CleaningOptions::minimal().remove_all_spaces();
        assert!(both.remove_extra_spaces);
        assert!(!alone.remove_extra_spaces);
        assert_eq!(clean(input, &both), clean(input, &alone));
    }

    #[test]
    fn test_remove_numbers() {
        let options = CleaningOptions::default().remove_numbers();
        let result = clean("Room 101, floor 3", &options);
        assert_eq!(result.cleaned_text, "Room , floor");
    }

    #[test]
    fn test_remove_punctuation_keeps_cyrillic() {
        let options = CleaningOptions::default().remove_punctuation();
        let result = clean("Hello, мир! (snake_case) café #1", &options);
        assert_eq!(result.cleaned_text, "Hello мир snake_case caf 1");
    }

    #[test]
    fn test_punctuation_and_special_chars_same_filter() {
        let input = "Wait\u{2026} what?! \"quoted\" — 50% off <b>";
        let punctuation = CleaningOptions::default().remove_punctuation();
        let special = CleaningOptions::default().remove_special_chars();
        let both = CleaningOptions::default()
            .remove_punctuation()
            .remove_special_chars();
        let expected = clean(input, &punctuation);
        assert_eq!(clean(input, &special), expected);
        assert_eq!(clean(input, &both), expected);
        assert_eq!(expected.cleaned_text, "Wait what quoted 50 off b");
    }

    #[test]
    fn test_remove_non_ascii() {
        let options = CleaningOptions::default().remove_non_ascii();
        let result = clean("naïve résumé 日本 ok", &options);
        assert_eq!(result.cleaned_text, "nave rsum ok");
    }

    #[test]
    fn test_non_ascii_counts_not_in_total() {
        let options = CleaningOptions::default().remove_non_ascii().remove_numbers();
        let result = clean("ü1\u{200B}", &options);
        assert_eq!(result.cleaned_text, "");
        assert_eq!(result.total_removed, 1);
    }

    #[test]
    fn test_case_transforms() {
        let input = "MiXeD case. next";
        let lower = CleaningOptions::default().with_case(TextCase::Lowercase);
        let upper = CleaningOptions::default().with_case(TextCase::Uppercase);
        assert_eq!(clean(input, &lower).cleaned_text, "mixed case. next");
        assert_eq!(clean(input, &upper).cleaned_text, "MIXED CASE. NEXT");
    }

    #[test]
    fn test_sentence_case_rules() {
        assert_eq!(to_sentence_case("hELLO wORLD. sECOND. third"), "Hello world. Second. Third");
        assert_eq!(to_sentence_case("  leading space"), "  Leading space");
        assert_eq!(to_sentence_case("e.g.example"), "E.g.example");
        assert_eq!(to_sentence_case("end.\nnew line"), "End.\nNew line");
        assert_eq!(to_sentence_case("wait... what"), "Wait... What");
        assert_eq!(to_sentence_case("привет. мир"), "Привет. Мир");
        assert_eq!(to_sentence_case(""), "");
    }

    #[test]
    fn test_sentence_case_skips_multi_char_uppercase() {
        assert_eq!(to_sentence_case("ßtraße. ok"), "ßtraße. Ok");
    }

    #[test]
    fn test_sentence_case_non_letter_start() {
        // A quote or digit after the boundary takes the capital slot
        assert_eq!(to_sentence_case("one. \"two\""), "One. \"two\"");
        assert_eq!(to_sentence_case("1st. go"), "1st. Go");
    }

    #[test]
    fn test_every_catalog_entry_single_occurrence() {
        for entry in catalog() {
            let input = format!("alpha{}beta", entry.codepoint);
            let result = clean_default(&input);
            assert_eq!(result.matches.len(), 1, "entry {}", entry.label);
            assert_eq!(result.matches[0].codepoint, entry.codepoint);
            assert_eq!(result.matches[0].label, entry.label);
            assert_eq!(result.matches[0].occurrence_count, 1);
            assert_eq!(result.total_removed, 1);
            assert_eq!(
                result.cleaned_text,
                format!("alpha{}beta", entry.replacement())
            );
        }
    }

    #[test]
    fn test_matches_in_catalog_order() {
        // Ellipsis is last in the catalog, ZWSP first
        let result = clean_default("\u{2026}x\u{200B}\u{201C}q\u{201D}\u{2026}");
        let labels: Vec<_> = result.matches.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec![
                "Zero-Width Space",
                "Left Double Quotation Mark",
                "Right Double Quotation Mark",
                "Horizontal Ellipsis"
            ]
        );
        assert_eq!(result.total_removed, 5);
        assert_eq!(result.cleaned_text, "...x\"q\"...");
    }

    #[test]
    fn test_bidi_override_attack_cleaned() {
        let result = clean_default("access\u{202E}txt.exe\u{202C}");
        assert_eq!(result.cleaned_text, "accesstxt.exe");
        assert_eq!(result.total_removed, 2);
    }

    #[test]
    fn test_scan_matches_clean_report() {
        let input = "\u{2018}hi\u{2019}\u{00A0}\u{2014} there\u{FEFF}";
        assert_eq!(scan(input), clean_default(input).matches);
    }

    #[test]
    fn test_clean_text_unchanged_except_collapse() {
        let input = "plain\ttext  with   spacing\nand lines";
        let result = clean_default(input);
        assert_eq!(result.cleaned_text, collapse_horizontal_whitespace(input));
        assert!(result.is_clean());
    }

    fn random_text(rng: &mut StdRng) -> String {
        const POOL: &[char] = &[
            'a', 'B', 'z', 'Q', '0', '7', '_', '.', ',', '!', '"', '\'', '-', '#', ' ', ' ', '\t',
            '\n', '\n', '\r', '\x0B', '\x0C', 'é', 'ß', 'İ', 'Σ', 'ж', 'Я', '日', '\u{3000}',
            '\u{200B}', '\u{00A0}', '\u{2014}', '\u{2019}', '\u{201C}', '\u{2026}', '\u{202E}',
            '\u{2028}', '\u{FEFF}', '\u{2009}', '\u{00AB}',
        ];
        let len = rng.gen_range(0..48);
        (0..len)
            .map(|_| POOL[rng.gen_range(0..POOL.len())])
            .collect()
    }

    fn option_matrix() -> Vec<CleaningOptions> {
        let mut all = Vec::new();
        for case in [
            TextCase::Original,
            TextCase::Lowercase,
            TextCase::Uppercase,
            TextCase::SentenceCase,
        ] {
            all.push(CleaningOptions::default().with_case(case));
            all.push(CleaningOptions::minimal().with_case(case));
            all.push(CleaningOptions::aggressive().with_case(case));
            all.push(CleaningOptions::default().with_case(case).normalize_line_breaks());
            all.push(CleaningOptions::default().with_case(case).remove_all_spaces());
            all.push(
                CleaningOptions::minimal()
                    .with_case(case)
                    .remove_line_breaks()
                    .remove_numbers()
                    .remove_punctuation(),
            );
        }
        all
    }

    #[test]
    fn test_idempotent_over_random_inputs() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let matrix = option_matrix();
        for _ in 0..300 {
            let text = random_text(&mut rng);
            for options in &matrix {
                let once = clean(&text, options).cleaned_text;
                let twice = clean(&once, options).cleaned_text;
                assert_eq!(once, twice, "input {text:?} with {options:?}");
            }
        }
    }

    #[test]
    fn test_resolved_options_equivalent() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let text = random_text(&mut rng);
            for options in option_matrix() {
                let options = options.remove_line_breaks().normalize_line_breaks();
                assert_eq!(clean(&text, &options), clean(&text, &options.resolved()));
            }
        }
    }
}
