use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Coach {
    pub id: i32,
    pub name: String,
    pub headline: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewCoach {
    pub name: String,
    pub headline: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

impl NewCoach {
    #[must_use]
    pub fn new(
        name: String,
        headline: String,
        bio: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            headline: headline.trim().to_string(),
            bio: bio.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            avatar_url: avatar_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateCoach {
    pub name: String,
    pub headline: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

impl UpdateCoach {
    #[must_use]
    pub fn new(
        name: String,
        headline: String,
        bio: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            headline: headline.trim().to_string(),
            bio: bio.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            avatar_url: avatar_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
