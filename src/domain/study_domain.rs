use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Top-level catalog area (e.g. "Music", "Languages").
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct StudyDomain {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewStudyDomain {
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateStudyDomain {
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
}

/// Second-level catalog area, always attached to a parent [`StudyDomain`].
/// Subdomain list screens filter by `domain_id`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Subdomain {
    pub id: i32,
    pub domain_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewSubdomain {
    pub domain_id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateSubdomain {
    pub name: String,
    pub description: Option<String>,
}
