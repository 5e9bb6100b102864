use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Course {
    pub id: i32,
    pub subdomain_id: i32,
    pub coach_id: i32,
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub cover_image_url: Option<String>,
    pub intro_video_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewCourse {
    pub subdomain_id: i32,
    pub coach_id: i32,
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub cover_image_url: Option<String>,
    pub intro_video_url: Option<String>,
}

impl NewCourse {
    #[must_use]
    pub fn new(
        subdomain_id: i32,
        coach_id: i32,
        title: String,
        description: String,
        price_cents: i64,
        cover_image_url: Option<String>,
        intro_video_url: Option<String>,
    ) -> Self {
        Self {
            subdomain_id,
            coach_id,
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            price_cents,
            cover_image_url: cover_image_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            intro_video_url: intro_video_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateCourse {
    pub title: String,
    pub description: String,
    pub price_cents: i64,
    pub cover_image_url: Option<String>,
    pub intro_video_url: Option<String>,
}

impl UpdateCourse {
    #[must_use]
    pub fn new(
        title: String,
        description: String,
        price_cents: i64,
        cover_image_url: Option<String>,
        intro_video_url: Option<String>,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            price_cents,
            cover_image_url: cover_image_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            intro_video_url: intro_video_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
