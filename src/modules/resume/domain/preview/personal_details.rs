use crate::modules::resume::domain::draft::ResumeDraft;
use crate::modules::resume::domain::entities::PhotoPosition;
use crate::shared::html::{escape, safe_image_src};

use super::section_heading;

fn photo(draft: &ResumeDraft, color: &str) -> String {
    let Some(src) = draft.profile_photo.as_deref().and_then(safe_image_src) else {
        return String::new();
    };

    format!(
        r#"<img class="profile-photo" src="{}" alt="Profile" style="border-color: {color};" />"#,
        src
    )
}

fn line(class: &str, value: Option<&str>, color: Option<&str>) -> String {
    let text = escape(value.unwrap_or_default());
    match color {
        Some(color) => format!(r#"<p class="{class}" style="color: {color};">{text}</p>"#),
        None => format!(r#"<p class="{class}">{text}</p>"#),
    }
}

/// Name, job title and contact lines, with the photo placed per `photoPosition`.
/// Always rendered, even for a blank draft.
pub fn render_personal_details(draft: &ResumeDraft) -> String {
    let color = escape(draft.accent());
    let photo = photo(draft, &color);

    let name = [draft.first_name.as_deref(), draft.last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    let align = if draft.photo_position == PhotoPosition::Center {
        " text-center"
    } else {
        ""
    };

    let mut html = String::from(r#"<div class="personal-details">"#);

    if draft.photo_position == PhotoPosition::Left {
        html.push_str(&photo);
    }

    html.push_str(&format!(r#"<div class="details{align}">"#));
    html.push_str(&format!(
        r#"<h2 class="name" style="color: {color};">{}</h2>"#,
        escape(&name)
    ));
    html.push_str(&line("job-title", draft.job_title.as_deref(), None));
    html.push_str(&line("address", draft.address.as_deref(), Some(&color)));
    html.push_str(r#"<div class="contact">"#);
    html.push_str(&line("phone", draft.phone.as_deref(), Some(&color)));
    html.push_str(&line("email", draft.email.as_deref(), Some(&color)));
    html.push_str("</div></div>");

    if matches!(
        draft.photo_position,
        PhotoPosition::Right | PhotoPosition::Center
    ) {
        html.push_str(&photo);
    }

    html.push_str(&format!(r#"<hr style="border-color: {color};" /></div>"#));
    html
}

pub fn render_summary(draft: &ResumeDraft) -> Option<String> {
    let summary = draft.summary.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
    let color = escape(draft.accent());

    Some(format!(
        r#"<div class="summary">{}<p>{}</p></div>"#,
        section_heading("Summary", &color),
        escape(summary)
    ))
}
