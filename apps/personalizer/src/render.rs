//! Output rendering for personalized copy: a sectioned console layout for
//! reviewing copy by eye, and JSON template variables for template engines.

use crate::errors::AppError;
use crate::models::PersonalizedCopy;

const RULE_WIDTH: usize = 80;

/// Renders the copy as titled console sections.
pub fn render_console(copy: &PersonalizedCopy) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str("PERSONALIZED UPGRADE PAGE COPY\n");
    out.push_str(&rule);
    out.push_str("\n\n");

    push_section(&mut out, "PAIN PARAGRAPH:", &copy.pain_paragraph);
    push_section(&mut out, "WHAT YOU DON'T KNOW:", &copy.what_you_dont_know);
    push_section(
        &mut out,
        "TESTIMONIAL:",
        &format!(
            "\"{}\"\n\u{2014} {}",
            copy.testimonial_quote, copy.testimonial_attribution
        ),
    );
    push_section(&mut out, "CTA URGENCY:", &copy.cta_urgency);

    out.push_str(&rule);
    out.push('\n');
    out
}

fn push_section(out: &mut String, heading: &str, body: &str) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(body);
    out.push_str("\n\n");
}

/// Renders the copy as pretty-printed JSON template variables.
pub fn render_json(copy: &PersonalizedCopy) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(copy)?)
}
