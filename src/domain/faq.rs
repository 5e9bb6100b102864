use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Faq {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Display order on the public FAQ page.
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
    pub position: i32,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateFaq {
    pub question: String,
    pub answer: String,
    pub position: i32,
}
