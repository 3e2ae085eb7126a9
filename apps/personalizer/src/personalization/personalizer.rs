//! Upgrade Page Personalizer: builds the Call Lab Pro upgrade page copy from a
//! user's Lite report.
//!
//! Every method is a pure function of the held report. Absent report fields
//! read as their documented defaults, so generation never fails.

use tracing::debug;

use crate::models::{LiteReport, PersonalizedCopy, Testimonial};
use crate::personalization::patterns::to_plain_language;
use crate::personalization::testimonials::select_testimonial;

/// Buying-signal counts above this get the "(N detected, ...)" suffix.
const BUYING_SIGNAL_CALLOUT_THRESHOLD: i64 = 3;

/// Report counts up to this get the "how many more" nudge instead of the
/// "pattern is still there" line.
const CTA_NUDGE_MAX_REPORTS: i64 = 3;

const PAUSE_PHRASE: &str = "UH...I DON'T KNOW IF THIS IS FOR ME";

/// Holds one Lite report and produces the personalized copy fragments for it.
#[derive(Debug, Clone)]
pub struct UpgradePagePersonalizer {
    report: LiteReport,
}

impl UpgradePagePersonalizer {
    pub fn new(report: LiteReport) -> Self {
        Self { report }
    }

    pub fn report(&self) -> &LiteReport {
        &self.report
    }

    /// The "You know..." paragraph.
    pub fn pain_paragraph(&self) -> String {
        let primary = to_plain_language(self.report.primary_pattern());
        let secondary = to_plain_language(self.report.secondary_pattern());

        format!(
            "You know the call was a {}/{}. You know you {primary}. You know you {secondary}.",
            self.report.score(),
            self.report.max_score(),
        )
    }

    /// The "What you don't know" list: three clauses, comma-joined, period-terminated.
    pub fn what_you_dont_know(&self) -> String {
        let buying_signals = self.report.buying_signals_detected();
        let missed_closes = self.report.missed_close_opportunities();

        let buy_signal = if buying_signals > BUYING_SIGNAL_CALLOUT_THRESHOLD {
            format!(
                "Where you missed the BUY signal ({buying_signals} detected, how many did you act on?)"
            )
        } else {
            "Where you missed the BUY signal".to_string()
        };

        let pause = if missed_closes > 0 {
            format!("where you didn't handle the \"{PAUSE_PHRASE}\" pause ({missed_closes} times)")
        } else {
            format!("where you didn't handle the \"{PAUSE_PHRASE}\" pause")
        };

        let trust_peak = "or the <strong>exact</strong> moment trust peaked".to_string();

        [buy_signal, pause, trust_peak].join(", ") + "."
    }

    /// Testimonial matched to the primary pattern.
    pub fn testimonial(&self) -> Testimonial {
        select_testimonial(self.report.primary_pattern_name())
    }

    /// Urgency line keyed on how many Lite reports the user has generated.
    pub fn cta_urgency(&self) -> String {
        match self.report.total_lite_reports_generated() {
            1 => "You're already doing the calls.".to_string(),
            n if n <= CTA_NUDGE_MAX_REPORTS => {
                format!("You've analyzed {n} calls. How many more before you fix the pattern?")
            }
            n => format!("You've analyzed {n} calls and the pattern is still there."),
        }
    }

    /// `"{score}/{max_score}"` for display.
    pub fn score_display(&self) -> String {
        format!("{}/{}", self.report.score(), self.report.max_score())
    }

    /// All copy elements, ready to hand to a template engine.
    pub fn full_copy(&self) -> PersonalizedCopy {
        let defaulted = self.report.defaulted_fields();
        if !defaulted.is_empty() {
            debug!(?defaulted, "Personalizing with defaulted report fields");
        }

        let testimonial = self.testimonial();

        PersonalizedCopy {
            pain_paragraph: self.pain_paragraph(),
            what_you_dont_know: self.what_you_dont_know(),
            testimonial_quote: testimonial.quote.to_string(),
            testimonial_attribution: testimonial.attribution.to_string(),
            cta_urgency: self.cta_urgency(),
            score: self.score_display(),
            effectiveness: self.report.effectiveness().to_string(),
        }
    }
}
