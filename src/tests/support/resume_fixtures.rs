use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::resume::application::ports::outgoing::ResumeRecord;
use crate::modules::resume::domain::entities::{
    Experience, PhotoPosition, Resume, DEFAULT_THEME_COLOR,
};

/// Freshly created resume row: title only, nothing referenced.
pub fn record(resume_id: &str, user_id: &str, title: &str) -> ResumeRecord {
    ResumeRecord {
        resume_id: resume_id.to_string(),
        user_id: UserId::from(user_id),
        title: title.to_string(),
        first_name: None,
        last_name: None,
        job_title: None,
        address: None,
        phone: None,
        email: None,
        summary: None,
        profile_photo: None,
        photo_position: PhotoPosition::Right,
        theme_color: DEFAULT_THEME_COLOR.to_string(),
        experience: Vec::new(),
        education: Vec::new(),
        skills: Vec::new(),
        custom_sections: Vec::new(),
        social_profiles: Vec::new(),
        updated_at: Utc::now(),
    }
}

pub fn resume(resume_id: &str, user_id: &str, title: &str) -> Resume {
    Resume {
        resume_id: resume_id.to_string(),
        user_id: UserId::from(user_id),
        title: title.to_string(),
        first_name: None,
        last_name: None,
        job_title: None,
        address: None,
        phone: None,
        email: None,
        summary: None,
        profile_photo: None,
        photo_position: PhotoPosition::Right,
        theme_color: DEFAULT_THEME_COLOR.to_string(),
        experience: Vec::new(),
        education: Vec::new(),
        skills: Vec::new(),
        custom_sections: Vec::new(),
        social_profiles: Vec::new(),
        updated_at: Utc::now(),
    }
}

pub fn experience(company: &str) -> Experience {
    Experience {
        title: "Engineer".to_string(),
        company: company.to_string(),
        city: "London".to_string(),
        start_date: "2020-01".to_string(),
        ..Default::default()
    }
}
