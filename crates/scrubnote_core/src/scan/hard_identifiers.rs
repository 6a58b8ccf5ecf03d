//! Pattern passes for structurally recognizable identifiers.
//!
//! # Responsibility
//! - Replace emails, URLs, phone numbers, record identifiers, DOB lines
//!   and street addresses with category placeholders.
//! - Provide the reduced server-side safety-net variant of the same table.
//!
//! # Invariants
//! - Pass order is part of the contract: later passes must never re-match
//!   placeholders or fragments produced by earlier passes.
//! - Ambiguous digit runs are redacted rather than kept; over-redaction is
//!   the accepted failure mode.
//! - Generic dates, clinical timelines and provider names pass through.

use crate::model::redaction::RedactionCategory;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// One ordered rewrite pass of the hard-identifier table.
struct HardRule {
    /// Category this rule emits.
    category: RedactionCategory,
    pattern: &'static Lazy<Regex>,
    /// `replace_all` template; `${label}` keeps the matched field label.
    rewrite: &'static str,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s<>]+").expect("valid url regex"));

// Separator or paren structure is required; bare 10-digit runs are left
// for the digit-run pass so they redact as record identifiers.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:\+?1[-.\s]?)?(?:\(\d{3}\)[-.\s]?\d{3}[-.\s]?\d{4}\b|\b\d{3}[-.\s]\d{3}[-.\s]\d{4}\b)",
    )
    .expect("valid phone regex")
});

static SSN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").expect("valid ssn regex"));

// The value must carry at least one digit so prose after a bare label
// ("Medical Record shows improvement") is not eaten.
static LABELED_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?P<label>MRN|Medical\s+Record(?:\s+(?:Number|No\.?))?|Chart\s+(?:Number|No\.?)|Account\s+(?:Number|No\.?))\b\s*[:#.-]?\s*[A-Za-z0-9-]*\d[A-Za-z0-9-]*",
    )
    .expect("valid labeled id regex")
});

static BARE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{7,10}\b").expect("valid bare id regex"));

static DOB_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?P<label>DOB|Date\s+of\s+Birth|Birth\s?date)\b[^\r\n]*")
        .expect("valid dob line regex")
});

static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b\d+\s+(?:[A-Za-z][A-Za-z'-]*\s+){1,3}(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln|Court|Ct|Place|Pl|Way|Circle|Cir|Terrace|Ter|Parkway|Pkwy)\b\.?",
    )
    .expect("valid address regex")
});

/// Full client-side pass table, in contract order. The address rule stays
/// last; the server safety net excludes it by category.
static HARD_RULES: &[HardRule] = &[
    HardRule {
        category: RedactionCategory::Email,
        pattern: &EMAIL_RE,
        rewrite: "[REDACTED_EMAIL]",
    },
    HardRule {
        category: RedactionCategory::Url,
        pattern: &URL_RE,
        rewrite: "[REDACTED_URL]",
    },
    HardRule {
        category: RedactionCategory::Phone,
        pattern: &PHONE_RE,
        rewrite: "[REDACTED_PHONE]",
    },
    HardRule {
        category: RedactionCategory::Id,
        pattern: &SSN_RE,
        rewrite: "[REDACTED_ID]",
    },
    HardRule {
        category: RedactionCategory::Id,
        pattern: &LABELED_ID_RE,
        rewrite: "${label} [REDACTED_ID]",
    },
    HardRule {
        category: RedactionCategory::Id,
        pattern: &BARE_ID_RE,
        rewrite: "[REDACTED_ID]",
    },
    HardRule {
        category: RedactionCategory::DobLine,
        pattern: &DOB_LINE_RE,
        rewrite: "${label}: [REDACTED_DOB_LINE]",
    },
    HardRule {
        category: RedactionCategory::Address,
        pattern: &ADDRESS_RE,
        rewrite: "[REDACTED_ADDRESS]",
    },
];

/// Applies the full ordered hard-identifier pass table.
///
/// Total function: text without identifier-shaped content passes through
/// unchanged, including the empty string.
pub fn scrub_hard_identifiers(text: &str) -> String {
    apply_rules(text, HARD_RULES.iter())
}

/// Applies the server-side safety-net subset of the pass table.
///
/// Re-run after the trust boundary as defense-in-depth against callers
/// that skipped client-side scrubbing. The street-address pass is not
/// repeated, and name detection is deliberately absent here: the server
/// cannot tell an unredacted name from ordinary clinical prose.
pub fn scrub_safety_net(text: &str) -> String {
    apply_rules(
        text,
        HARD_RULES
            .iter()
            .filter(|rule| rule.category != RedactionCategory::Address),
    )
}

fn apply_rules<'a>(text: &str, rules: impl Iterator<Item = &'a HardRule>) -> String {
    let mut out = text.to_string();
    for rule in rules {
        let matches = rule.pattern.find_iter(&out).count();
        if matches == 0 {
            continue;
        }
        debug!(
            "event=hard_identifier_pass module=scan status=ok category={:?} matches={}",
            rule.category, matches
        );
        out = rule.pattern.replace_all(&out, rule.rewrite).into_owned();
    }
    out
}
