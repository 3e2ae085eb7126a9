//! Call Lab Pro upgrade page personalization.
//!
//! Turns a user's Call Lab Lite report into the personalized copy shown on the
//! Pro upgrade page: the "You know..." pain paragraph, the missed-opportunity
//! list, a matched testimonial and the call-to-action urgency line.
//!
//! ```
//! use personalizer::{LiteReport, UpgradePagePersonalizer};
//!
//! let report = LiteReport {
//!     score: Some(6),
//!     total_lite_reports_generated: Some(4),
//!     ..Default::default()
//! };
//! let copy = UpgradePagePersonalizer::new(report).full_copy();
//! assert_eq!(copy.score, "6/10");
//! assert_eq!(copy.cta_urgency, "You've analyzed 4 calls and the pattern is still there.");
//! ```

pub mod config;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod personalization;
pub mod render;

pub use errors::AppError;
pub use models::{LiteReport, Pattern, PatternKind, PersonalizedCopy, Testimonial};
pub use personalization::UpgradePagePersonalizer;
