use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One entry of the practice music library.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Track {
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub audio_url: String,
    pub duration_secs: Option<i64>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewTrack {
    pub title: String,
    pub artist: String,
    pub audio_url: String,
    pub duration_secs: Option<i64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateTrack {
    pub title: String,
    pub artist: String,
    pub audio_url: String,
    pub duration_secs: Option<i64>,
}
