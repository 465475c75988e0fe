//! Pure renderers from a [`ResumeDraft`] to HTML fragments, one per resume section.
//!
//! Plain-text fields are escaped. Custom section content is trusted editor output
//! and is emitted as is.

mod custom_sections;
mod history;
mod personal_details;
mod skills;
mod social_profiles;

pub use custom_sections::render_custom_sections;
pub use history::{render_education, render_experience};
pub use personal_details::{render_personal_details, render_summary};
pub use skills::render_skills;
pub use social_profiles::{platform_label, render_social_profiles};

use crate::modules::resume::domain::draft::ResumeDraft;
use crate::shared::html::escape;

/// The whole document: personal details first, then every non-empty section.
pub fn render_resume(draft: &ResumeDraft) -> String {
    let mut html = format!(
        r#"<div class="resume-preview" style="border-top: 20px solid {};">"#,
        escape(draft.accent())
    );

    html.push_str(&render_personal_details(draft));

    let sections = [
        render_summary(draft),
        render_experience(draft),
        render_education(draft),
        render_skills(draft),
        render_custom_sections(draft),
        render_social_profiles(draft),
    ];
    for section in sections.into_iter().flatten() {
        html.push_str(&section);
    }

    html.push_str("</div>");
    html
}

/// Centered section title followed by a rule, both in the accent color.
fn section_heading(title: &str, color: &str) -> String {
    format!(
        r#"<h2 class="section-title" style="color: {color};">{}</h2><hr style="border-color: {color};" />"#,
        escape(title)
    )
}
