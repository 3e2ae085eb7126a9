use serde::{Deserialize, Serialize};

/// A customer quote shown on the upgrade page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub attribution: &'static str,
}

/// All personalized copy for one upgrade page render.
///
/// Field names are the template variables consumed by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizedCopy {
    pub pain_paragraph: String,
    pub what_you_dont_know: String,
    pub testimonial_quote: String,
    pub testimonial_attribution: String,
    pub cta_urgency: String,
    /// Formatted as `"{score}/{max_score}"`.
    pub score: String,
    pub effectiveness: String,
}
