//! Document-wide name scrubbing.
//!
//! # Responsibility
//! - Blindly redact honorific-prefixed names the detector may have missed.
//! - Replace every whole-word occurrence of a discovered token,
//!   case-insensitively, longest token first.
//!
//! # Invariants
//! - Tokens join into one combined alternation sorted by descending
//!   length, so a short token can never corrupt a longer token's match.
//! - Occurrences preceded by `Dr.`/`Doctor` survive: clinician names are
//!   not treated as identifying under policy.
//! - Placeholders already present are never re-matched.

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeSet;

static HONORIFIC_NET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?P<honorific>(?:Mrs|Miss|Mr|Ms|Mx)\.?)[ \t]+[A-Z][A-Za-z'-]*")
        .expect("valid honorific net regex")
});

/// Scrubs person names from `text`: honorific net first, then the token
/// pass. Total function; with no honorifics and an empty token set the
/// text is returned unchanged.
pub fn scrub_names(text: &str, tokens: &BTreeSet<String>) -> String {
    let swept = HONORIFIC_NET_RE.replace_all(text, "${honorific} [REDACTED_NAME]");
    scrub_tokens(&swept, tokens)
}

/// Replaces whole-word, case-insensitive token occurrences, except
/// directly after a clinician honorific.
fn scrub_tokens(text: &str, tokens: &BTreeSet<String>) -> String {
    if tokens.is_empty() {
        return text.to_string();
    }

    let mut ordered: Vec<&String> = tokens.iter().collect();
    ordered.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    let alternation = ordered
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");

    // Built from escaped letter/hyphen tokens; compilation cannot fail on
    // that input.
    let matcher = Regex::new(&format!(
        r"(?i)\b(?P<exempt>(?:dr\.?|doctor)[ \t]+)?(?:{alternation})\b"
    ))
    .expect("valid token alternation regex");

    debug!(
        "event=token_pass module=scrub status=ok tokens={}",
        ordered.len()
    );

    matcher
        .replace_all(text, |caps: &Captures<'_>| {
            if caps.name("exempt").is_some() {
                caps[0].to_string()
            } else {
                "[REDACTED_NAME]".to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::scrub_names;
    use std::collections::BTreeSet;

    fn tokens(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_token_set_leaves_text_unchanged() {
        let text = "no names here";
        assert_eq!(scrub_names(text, &BTreeSet::new()), text);
    }

    #[test]
    fn tokens_match_whole_words_case_insensitively() {
        let out = scrub_names("MARIA saw maria; mariana did not.", &tokens(&["Maria"]));
        assert_eq!(out, "[REDACTED_NAME] saw [REDACTED_NAME]; mariana did not.");
    }

    #[test]
    fn longer_tokens_win_over_their_own_substrings() {
        let out = scrub_names("Smith-Jones then Smith", &tokens(&["Smith", "Smith-Jones"]));
        assert_eq!(out, "[REDACTED_NAME] then [REDACTED_NAME]");
    }

    #[test]
    fn clinician_honorific_exempts_the_following_token() {
        let out = scrub_names("Dr. Smith consulted; Smith agreed. Doctor Smith signed.", &tokens(&["Smith"]));
        assert_eq!(
            out,
            "Dr. Smith consulted; [REDACTED_NAME] agreed. Doctor Smith signed."
        );
    }

    #[test]
    fn honorific_net_fires_without_any_token() {
        let out = scrub_names("Mr. Delgado and Miss Quinn visited.", &BTreeSet::new());
        assert_eq!(out, "Mr. [REDACTED_NAME] and Miss [REDACTED_NAME] visited.");
    }

    #[test]
    fn honorific_net_keeps_the_honorific_spelling() {
        let out = scrub_names("Mrs Vega arrived.", &BTreeSet::new());
        assert_eq!(out, "Mrs [REDACTED_NAME] arrived.");
    }

    #[test]
    fn output_is_a_fixed_point() {
        let toks = tokens(&["Maria"]);
        let once = scrub_names("Ms. Lopez and Maria left.", &toks);
        assert_eq!(scrub_names(&once, &toks), once);
    }
}
