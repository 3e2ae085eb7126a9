// Upgrade page personalization.
// Pattern translation and testimonial lookup are fixed tables; the personalizer
// composes them with the Lite report counts into page copy. No I/O here.

pub mod patterns;
pub mod personalizer;
pub mod testimonials;

pub use personalizer::UpgradePagePersonalizer;
