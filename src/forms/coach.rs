use serde::Deserialize;
use validator::Validate;

use crate::client::errors::ClientError;
use crate::domain::coach::{NewCoach, UpdateCoach};
use crate::domain::types::{CoachName, EmailAddress, PhoneNumber};
use crate::forms::optional_url;

/// Admin drawer form for creating or editing a coach profile.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CoachForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "headline is required"))]
    pub headline: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

impl CoachForm {
    fn normalized(self) -> Result<NewCoach, ClientError> {
        self.validate()?;

        let name = CoachName::new(self.name)?;

        let email = match self.email.filter(|s| !s.trim().is_empty()) {
            Some(raw) => Some(EmailAddress::new(raw)?.into_inner()),
            None => None,
        };
        let phone = match self.phone.filter(|s| !s.trim().is_empty()) {
            Some(raw) => Some(PhoneNumber::new(raw)?.into_inner()),
            None => None,
        };

        Ok(NewCoach::new(
            name.into_inner(),
            self.headline,
            self.bio,
            email,
            phone,
            optional_url(self.avatar_url)?,
        ))
    }
}

impl TryFrom<CoachForm> for NewCoach {
    type Error = ClientError;

    fn try_from(form: CoachForm) -> Result<Self, Self::Error> {
        form.normalized()
    }
}

impl TryFrom<CoachForm> for UpdateCoach {
    type Error = ClientError;

    fn try_from(form: CoachForm) -> Result<Self, Self::Error> {
        let new = form.normalized()?;
        Ok(UpdateCoach {
            name: new.name,
            headline: new.headline,
            bio: new.bio,
            email: new.email,
            phone: new.phone,
            avatar_url: new.avatar_url,
        })
    }
}
