//! Testimonial selection: matches the upgrade page quote to the user's primary pattern.

use tracing::debug;

use crate::models::Testimonial;

const ATTRIBUTION: &str = "$2mm performance marketing agency founder";

const GIVING_AWAY_STRATEGY: Testimonial = Testimonial {
    quote: "I've been giving away strategy for 18 months. Pro showed me I wasn't building trust—I was eliminating urgency.",
    attribution: ATTRIBUTION,
};

const SCARED_TO_ASK: Testimonial = Testimonial {
    quote: "I thought I was being consultative. Pro showed me I was just being scared to ask.",
    attribution: ATTRIBUTION,
};

/// Used for any primary pattern not listed in `TESTIMONIALS`.
pub const DEFAULT_TESTIMONIAL: Testimonial = GIVING_AWAY_STRATEGY;

/// Primary pattern name → testimonial.
// Advice Avalanche and Generosity Trap intentionally carry the default quote.
const TESTIMONIALS: &[(&str, Testimonial)] = &[
    ("The Advice Avalanche", GIVING_AWAY_STRATEGY),
    ("The Soft Close Fade", SCARED_TO_ASK),
    ("The Generosity Trap", GIVING_AWAY_STRATEGY),
];

/// Returns the testimonial for a primary pattern name, or the default.
pub fn select_testimonial(primary_pattern_name: &str) -> Testimonial {
    match TESTIMONIALS
        .iter()
        .find(|(key, _)| *key == primary_pattern_name)
    {
        Some((_, testimonial)) => *testimonial,
        None => {
            debug!(
                pattern = primary_pattern_name,
                "No testimonial keyed to pattern, using default"
            );
            DEFAULT_TESTIMONIAL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advice_avalanche_quote() {
        let t = select_testimonial("The Advice Avalanche");
        assert!(t
            .quote
            .starts_with("I've been giving away strategy for 18 months."));
        assert_eq!(t.attribution, "$2mm performance marketing agency founder");
    }

    #[test]
    fn test_soft_close_fade_has_its_own_quote() {
        let t = select_testimonial("The Soft Close Fade");
        assert_eq!(
            t.quote,
            "I thought I was being consultative. Pro showed me I was just being scared to ask."
        );
        assert_eq!(t.attribution, "$2mm performance marketing agency founder");
    }

    #[test]
    fn test_generosity_trap_matches_default() {
        assert_eq!(select_testimonial("The Generosity Trap"), DEFAULT_TESTIMONIAL);
    }

    #[test]
    fn test_unknown_name_matches_empty_name() {
        let unknown = select_testimonial("Unknown Pattern X");
        let empty = select_testimonial("");
        assert_eq!(unknown, empty);
        assert_eq!(unknown, DEFAULT_TESTIMONIAL);
    }

    #[test]
    fn test_default_key_is_not_a_pattern_name() {
        // "default" is not a lookup key; it resolves through the fallback path
        assert_eq!(select_testimonial("default"), DEFAULT_TESTIMONIAL);
        assert!(TESTIMONIALS.iter().all(|(key, _)| *key != "default"));
    }

    #[test]
    fn test_quote_uses_em_dash_verbatim() {
        assert!(DEFAULT_TESTIMONIAL
            .quote
            .contains("building trust\u{2014}I was eliminating urgency"));
    }
}
