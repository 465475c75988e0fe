use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of every successful JSON response
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// A populated resume: scalar fields plus its five sections in stored order.
///
/// Section entries carry their record id as `_id`; send it back unchanged to
/// update the entry in place.
#[derive(Serialize, ToSchema)]
pub struct ResumeResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = Object, example = json!({
        "resumeId": "a7c1e0f2-cv",
        "userId": "user_2abc",
        "title": "Backend Engineer",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "jobTitle": "Software Engineer",
        "address": "London",
        "phone": "555-0100",
        "email": "ada@example.com",
        "summary": "<p>Systems programmer.</p>",
        "profilePhoto": null,
        "photoPosition": "right",
        "themeColor": "#ff6666",
        "experience": [{
            "_id": "5b0c2f4e-9a7d-4c1e-8f3a-2d6b1e0c9a11",
            "title": "Engineer",
            "company": "Acme",
            "city": "London",
            "state": "",
            "startDate": "2020-01",
            "endDate": "",
            "workSummary": "<ul><li>Built the billing pipeline</li></ul>"
        }],
        "education": [],
        "skills": [{ "_id": "0e9f6c3a-1b2d-4e5f-8a9b-7c6d5e4f3a2b", "name": "Rust", "rating": 5 }],
        "customSections": [],
        "socialProfiles": [{
            "_id": "c4d3e2f1-0a9b-4c8d-9e7f-6a5b4c3d2e1f",
            "platform": "github",
            "url": "https://github.com/ada"
        }],
        "updatedAt": "2026-03-01T12:00:00Z"
    }))]
    pub data: serde_json::Value,
}

/// The caller's resumes, most recently updated first
#[derive(Serialize, ToSchema)]
pub struct ResumeListResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = Vec<Object>, example = json!([{
        "resumeId": "a7c1e0f2-cv",
        "userId": "user_2abc",
        "title": "Backend Engineer",
        "photoPosition": "right",
        "themeColor": "#ff6666",
        "experience": [],
        "education": [],
        "skills": [],
        "customSections": [],
        "socialProfiles": [],
        "updatedAt": "2026-03-01T12:00:00Z"
    }]))]
    pub data: Vec<serde_json::Value>,
}

/// Envelope of every failed request
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code, e.g. `NOT_RESUME_OWNER` or `DRAFT_NOT_FOUND`
    #[schema(example = "RESUME_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Resume not found")]
    pub message: String,
}
