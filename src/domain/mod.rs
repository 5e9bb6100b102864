//! Domain entities backing the marketplace list screens.

pub mod coach;
pub mod course;
pub mod enrollment;
pub mod faq;
pub mod feedback;
pub mod study_domain;
pub mod track;
pub mod types;
