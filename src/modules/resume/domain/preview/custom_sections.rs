use crate::modules::resume::domain::draft::ResumeDraft;
use crate::shared::html::escape;

use super::section_heading;

/// Each section's `content` is inserted verbatim (pre-sanitized rich text).
pub fn render_custom_sections(draft: &ResumeDraft) -> Option<String> {
    if draft.custom_sections.is_empty() {
        return None;
    }
    let color = escape(draft.accent());

    let mut html = String::from(r#"<div class="custom-sections">"#);
    for item in &draft.custom_sections {
        html.push_str("<div>");
        html.push_str(&section_heading(&item.record.title, &color));
        html.push_str(r#"<div class="rich-text">"#);
        html.push_str(&item.record.content);
        html.push_str("</div></div>");
    }
    html.push_str("</div>");

    Some(html)
}
