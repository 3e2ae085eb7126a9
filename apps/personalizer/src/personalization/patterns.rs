//! Pattern translator: turns Lite report pattern names into the plain-language
//! phrase that follows "You know you ..." on the upgrade page.

use tracing::debug;

use crate::models::{Pattern, PatternKind};

/// Pattern name → plain-language phrase. Keys must match Lite report pattern names exactly.
const PATTERN_CONVERSIONS: &[(&str, &str)] = &[
    ("The Advice Avalanche", "gave away the entire strategy session"),
    ("The Soft Close Fade", "ended with \"let me know what you think\""),
    (
        "The Generosity Trap",
        "delivered so much value they don't need to hire you",
    ),
    (
        "The Peer Validation Engine",
        "built massive credibility by showing you get it",
    ),
    (
        "The Pricing Intervention",
        "diagnosed their underpricing and showed them the ceiling",
    ),
    (
        "The Immediate Value Bomb",
        "gave them actionable strategy before they paid",
    ),
    (
        "The Mirror Close",
        "reflected back their potential until they saw themselves differently",
    ),
    (
        "The Vulnerability Flip",
        "turned their objection into the reason to buy",
    ),
    ("The Diagnostic Reveal", "named their problem before they could"),
    (
        "The Permission Pattern",
        "made the sale feel optional, not urgent",
    ),
    (
        "The Premature Solution",
        "solved the problem before showing them why it matters",
    ),
];

const WEAKNESS_FALLBACK: &str = "missed key closing moments";
const STRENGTH_FALLBACK: &str = "built strong rapport";

/// Returns the plain-language phrase for a pattern.
///
/// Exact name match first; otherwise a generic phrase chosen by kind.
/// An absent pattern reads as an unnamed weakness.
pub fn to_plain_language(pattern: Option<&Pattern>) -> &'static str {
    let (name, kind) = match pattern {
        Some(p) => (p.name(), p.kind()),
        None => ("", PatternKind::Weakness),
    };

    if let Some(phrase) = PATTERN_CONVERSIONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, phrase)| *phrase)
    {
        return phrase;
    }

    debug!(pattern = name, ?kind, "No plain-language phrase for pattern, using kind fallback");
    match kind {
        PatternKind::Weakness => WEAKNESS_FALLBACK,
        PatternKind::Strength | PatternKind::Other => STRENGTH_FALLBACK,
    }
}
