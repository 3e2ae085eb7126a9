//! Lite report record: the summarized Call Lab Lite analysis that feeds the
//! upgrade page personalizer.
//!
//! Every field is optional on the wire, and a value of the wrong shape reads as
//! absent. Reads go through the accessor methods, which substitute the
//! documented `DEFAULT_*` value for anything absent.

use serde::{Deserialize, Serialize};

use crate::models::lenient;

pub const DEFAULT_SCORE: i64 = 7;
pub const DEFAULT_MAX_SCORE: i64 = 10;
pub const DEFAULT_EFFECTIVENESS: &str = "Mixed results";
pub const DEFAULT_BUYING_SIGNALS: i64 = 5;
pub const DEFAULT_MISSED_CLOSES: i64 = 2;
pub const DEFAULT_TOTAL_LITE_REPORTS: i64 = 1;

/// Whether a detected pattern hurt or helped the call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    #[default]
    Weakness,
    Strength,
    /// Any other tag an upstream report emits. Treated like a strength.
    #[serde(other)]
    Other,
}

/// A named behavioral pattern observed in a sales call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pattern {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    /// `null` reads as absent, i.e. `Weakness`.
    #[serde(rename = "type", deserialize_with = "lenient::pattern_kind")]
    pub kind: Option<PatternKind>,
    /// Carried through from the report; not used in generated copy.
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, kind: PatternKind) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some(kind),
            description: None,
        }
    }

    /// Pattern name, `""` when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Pattern kind, `Weakness` when absent.
    pub fn kind(&self) -> PatternKind {
        self.kind.unwrap_or_default()
    }
}

/// Input record for personalization. Never mutated by the personalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteReport {
    #[serde(deserialize_with = "lenient::integer")]
    pub score: Option<i64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub max_score: Option<i64>,
    #[serde(deserialize_with = "lenient::text")]
    pub effectiveness: Option<String>,
    #[serde(deserialize_with = "lenient::pattern")]
    pub primary_pattern: Option<Pattern>,
    #[serde(deserialize_with = "lenient::pattern")]
    pub secondary_pattern: Option<Pattern>,
    #[serde(deserialize_with = "lenient::integer")]
    pub buying_signals_detected: Option<i64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub missed_close_opportunities: Option<i64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub call_duration_minutes: Option<i64>,
    #[serde(deserialize_with = "lenient::integer")]
    pub total_lite_reports_generated: Option<i64>,
    #[serde(deserialize_with = "lenient::text")]
    pub rep_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub prospect_name: Option<String>,
}

impl LiteReport {
    pub fn score(&self) -> i64 {
        self.score.unwrap_or(DEFAULT_SCORE)
    }

    pub fn max_score(&self) -> i64 {
        self.max_score.unwrap_or(DEFAULT_MAX_SCORE)
    }

    pub fn effectiveness(&self) -> &str {
        self.effectiveness.as_deref().unwrap_or(DEFAULT_EFFECTIVENESS)
    }

    pub fn primary_pattern(&self) -> Option<&Pattern> {
        self.primary_pattern.as_ref()
    }

    pub fn secondary_pattern(&self) -> Option<&Pattern> {
        self.secondary_pattern.as_ref()
    }

    /// Name of the primary pattern, `""` when the pattern or its name is absent.
    pub fn primary_pattern_name(&self) -> &str {
        self.primary_pattern.as_ref().map(Pattern::name).unwrap_or("")
    }

    pub fn buying_signals_detected(&self) -> i64 {
        self.buying_signals_detected
            .unwrap_or(DEFAULT_BUYING_SIGNALS)
    }

    pub fn missed_close_opportunities(&self) -> i64 {
        self.missed_close_opportunities
            .unwrap_or(DEFAULT_MISSED_CLOSES)
    }

    pub fn total_lite_reports_generated(&self) -> i64 {
        self.total_lite_reports_generated
            .unwrap_or(DEFAULT_TOTAL_LITE_REPORTS)
    }

    /// Names of the fields that will fall back to a default on read.
    pub fn defaulted_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.score.is_none() {
            fields.push("score");
        }
        if self.max_score.is_none() {
            fields.push("max_score");
        }
        if self.effectiveness.is_none() {
            fields.push("effectiveness");
        }
        if self.primary_pattern.is_none() {
            fields.push("primary_pattern");
        }
        if self.secondary_pattern.is_none() {
            fields.push("secondary_pattern");
        }
        if self.buying_signals_detected.is_none() {
            fields.push("buying_signals_detected");
        }
        if self.missed_close_opportunities.is_none() {
            fields.push("missed_close_opportunities");
        }
        if self.total_lite_reports_generated.is_none() {
            fields.push("total_lite_reports_generated");
        }
        fields
    }
}
