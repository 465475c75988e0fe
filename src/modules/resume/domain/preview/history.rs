use crate::modules::resume::domain::draft::ResumeDraft;
use crate::shared::html::escape;

use super::section_heading;

fn date_range(start: &str, end: &str) -> String {
    let end = if end.trim().is_empty() { "Present" } else { end };
    format!("{} - {}", escape(start), escape(end))
}

pub fn render_experience(draft: &ResumeDraft) -> Option<String> {
    if draft.experience.is_empty() {
        return None;
    }
    let color = escape(draft.accent());

    let mut html = format!(
        r#"<div class="experience">{}"#,
        section_heading("Professional Experience", &color)
    );

    for item in &draft.experience {
        let exp = &item.record;
        let place = [exp.company.as_str(), exp.city.as_str(), exp.state.as_str()]
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        html.push_str(&format!(
            r#"<div class="entry"><h3 style="color: {color};">{}</h3><p class="meta"><span>{}</span><span>{}</span></p><p class="body">{}</p></div>"#,
            escape(&exp.title),
            escape(&place),
            date_range(&exp.start_date, &exp.end_date),
            escape(&exp.work_summary),
        ));
    }

    html.push_str("</div>");
    Some(html)
}

pub fn render_education(draft: &ResumeDraft) -> Option<String> {
    if draft.education.is_empty() {
        return None;
    }
    let color = escape(draft.accent());

    let mut html = format!(
        r#"<div class="education">{}"#,
        section_heading("Education", &color)
    );

    for item in &draft.education {
        let edu = &item.record;
        let degree = [edu.degree.as_str(), edu.major.as_str()]
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" in ");

        html.push_str(&format!(
            r#"<div class="entry"><h3 style="color: {color};">{}</h3><p class="meta"><span>{}</span><span>{}</span></p><p class="body">{}</p></div>"#,
            escape(&edu.university_name),
            escape(&degree),
            date_range(&edu.start_date, &edu.end_date),
            escape(&edu.description),
        ));
    }

    html.push_str("</div>");
    Some(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_lists_render_nothing() {
        let draft = ResumeDraft::empty("r1", "Draft");

        assert!(render_experience(&draft).is_none());
        assert!(render_education(&draft).is_none());
    }

    #[test]
    fn test_experience_entry() {
        let mut draft = ResumeDraft::empty("r1", "Draft");
        draft
            .set_field(
                "experience",
                json!([{
                    "title": "Engineer",
                    "company": "Acme",
                    "city": "Berlin",
                    "startDate": "2020-01",
                    "endDate": ""
                }]),
            )
            .unwrap();

        let html = render_experience(&draft).unwrap();

        assert!(html.contains("Engineer"));
        assert!(html.contains("Acme, Berlin"));
        assert!(html.contains("2020-01 - Present"));
    }

    #[test]
    fn test_education_entry() {
        let mut draft = ResumeDraft::empty("r1", "Draft");
        draft
            .set_field(
                "education",
                json!([{
                    "universityName": "Cambridge",
                    "degree": "BSc",
                    "major": "Mathematics",
                    "startDate": "2010",
                    "endDate": "2013"
                }]),
            )
            .unwrap();

        let html = render_education(&draft).unwrap();

        assert!(html.contains("Cambridge"));
        assert!(html.contains("BSc in Mathematics"));
        assert!(html.contains("2010 - 2013"));
    }
}
