use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A learner's enrollment in a course. The "my courses" screen filters by
/// `student_email`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Enrollment {
    pub id: i32,
    pub course_id: i32,
    pub student_email: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewEnrollment {
    pub course_id: i32,
    pub student_email: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateEnrollment {
    pub status: String,
}
