use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Learner feedback left on a course. Feedback list screens filter by
/// `course_id`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Feedback {
    pub id: i32,
    pub course_id: i32,
    pub author_name: String,
    /// 1 to 5 stars.
    pub rating: i32,
    pub message: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewFeedback {
    pub course_id: i32,
    pub author_name: String,
    pub rating: i32,
    pub message: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateFeedback {
    pub rating: i32,
    pub message: String,
}
