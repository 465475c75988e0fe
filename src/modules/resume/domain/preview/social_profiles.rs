use crate::modules::resume::domain::draft::ResumeDraft;
use crate::shared::html::{escape, safe_href};

use super::section_heading;

/// Marker shown next to each link. Coding sites share one marker and anything
/// unrecognised is treated as a website.
pub fn platform_label(platform: &str) -> &'static str {
    match platform.trim().to_ascii_lowercase().as_str() {
        "github" => "GitHub",
        "linkedin" => "LinkedIn",
        "twitter" => "Twitter",
        "leetcode" | "codechef" | "hackerrank" => "Code",
        _ => "Website",
    }
}

pub fn render_social_profiles(draft: &ResumeDraft) -> Option<String> {
    if draft.social_profiles.is_empty() {
        return None;
    }
    let color = escape(draft.accent());

    let mut html = format!(
        r#"<div class="social-profiles">{}<div class="links">"#,
        section_heading("Links", &color)
    );

    for item in &draft.social_profiles {
        let profile = &item.record;
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" style="color: {color};"><span class="icon" data-platform="{}">{}</span>{}</a>"#,
            safe_href(&profile.url),
            escape(&profile.platform),
            platform_label(&profile.platform),
            escape(&profile.url),
        ));
    }

    html.push_str("</div></div>");
    Some(html)
}
