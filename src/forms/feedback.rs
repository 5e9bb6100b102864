use serde::Deserialize;
use validator::Validate;

use crate::client::errors::ClientError;
use crate::domain::feedback::{NewFeedback, UpdateFeedback};
use crate::domain::types::{AuthorName, CourseId, FeedbackMessage};

/// Public feedback form shown under a course page.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FeedbackForm {
    #[validate(range(min = 1, message = "a course must be selected"))]
    pub course_id: i32,
    #[validate(length(min = 1, message = "name is required"))]
    pub author_name: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

impl TryFrom<FeedbackForm> for NewFeedback {
    type Error = ClientError;

    fn try_from(form: FeedbackForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let course_id = CourseId::new(form.course_id)?;
        let author_name = AuthorName::new(form.author_name)?;
        let message = FeedbackMessage::new(form.message)?;

        Ok(NewFeedback {
            course_id: course_id.get(),
            author_name: author_name.into_inner(),
            rating: form.rating,
            message: message.into_inner(),
        })
    }
}

impl TryFrom<FeedbackForm> for UpdateFeedback {
    type Error = ClientError;

    fn try_from(form: FeedbackForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let message = FeedbackMessage::new(form.message)?;

        Ok(UpdateFeedback {
            rating: form.rating,
            message: message.into_inner(),
        })
    }
}
