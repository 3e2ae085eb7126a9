pub mod copy;
mod lenient;
pub mod lite_report;

pub use copy::{PersonalizedCopy, Testimonial};
pub use lite_report::{LiteReport, Pattern, PatternKind};
