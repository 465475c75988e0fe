pub mod ports;
pub mod resume_use_cases;
pub mod service;

pub use resume_use_cases::ResumeUseCases;
