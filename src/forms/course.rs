use serde::Deserialize;
use validator::Validate;

use crate::client::errors::ClientError;
use crate::domain::course::{NewCourse, UpdateCourse};
use crate::domain::types::{CoachId, CourseTitle, SubdomainId};
use crate::forms::optional_url;

/// Admin drawer form for creating or editing a course.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CourseForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: String,
    #[validate(range(min = 1, message = "a subdomain must be selected"))]
    pub subdomain_id: i32,
    #[validate(range(min = 1, message = "a coach must be selected"))]
    pub coach_id: i32,
    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub price_cents: i64,
    pub cover_image_url: Option<String>,
    pub intro_video_url: Option<String>,
}

impl TryFrom<CourseForm> for NewCourse {
    type Error = ClientError;

    fn try_from(form: CourseForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let title = CourseTitle::new(form.title)?;
        let subdomain_id = SubdomainId::new(form.subdomain_id)?;
        let coach_id = CoachId::new(form.coach_id)?;

        Ok(NewCourse::new(
            subdomain_id.get(),
            coach_id.get(),
            title.into_inner(),
            form.description,
            form.price_cents,
            optional_url(form.cover_image_url)?,
            optional_url(form.intro_video_url)?,
        ))
    }
}

impl TryFrom<CourseForm> for UpdateCourse {
    type Error = ClientError;

    fn try_from(form: CourseForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let title = CourseTitle::new(form.title)?;

        Ok(UpdateCourse::new(
            title.into_inner(),
            form.description,
            form.price_cents,
            optional_url(form.cover_image_url)?,
            optional_url(form.intro_video_url)?,
        ))
    }
}
