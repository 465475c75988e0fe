use crate::modules::resume::domain::draft::ResumeDraft;
use crate::shared::html::escape;

use super::section_heading;

const MAX_RATING: i32 = 5;

pub fn render_skills(draft: &ResumeDraft) -> Option<String> {
    if draft.skills.is_empty() {
        return None;
    }
    let color = escape(draft.accent());

    let mut html = format!(
        r#"<div class="skills">{}<div class="skill-grid">"#,
        section_heading("Skills", &color)
    );

    for item in &draft.skills {
        let skill = &item.record;
        html.push_str(&format!(r#"<div class="skill"><span>{}</span>"#, escape(&skill.name)));

        if let Some(rating) = skill.rating {
            let width = rating.clamp(0, MAX_RATING) * 100 / MAX_RATING;
            html.push_str(&format!(
                r#"<div class="skill-bar"><div style="background-color: {color}; width: {width}%;"></div></div>"#
            ));
        }

        html.push_str("</div>");
    }

    html.push_str("</div></div>");
    Some(html)
}
