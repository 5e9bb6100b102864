//! Collection paths and payload types for every listable entity.

use crate::client::Resource;
use crate::domain::coach::{Coach, NewCoach, UpdateCoach};
use crate::domain::course::{Course, NewCourse, UpdateCourse};
use crate::domain::enrollment::{Enrollment, NewEnrollment, UpdateEnrollment};
use crate::domain::faq::{Faq, NewFaq, UpdateFaq};
use crate::domain::feedback::{Feedback, NewFeedback, UpdateFeedback};
use crate::domain::study_domain::{
    NewStudyDomain, NewSubdomain, StudyDomain, Subdomain, UpdateStudyDomain, UpdateSubdomain,
};
use crate::domain::track::{NewTrack, Track, UpdateTrack};

impl Resource for StudyDomain {
    const PATH: &'static str = "domains";
    type New = NewStudyDomain;
    type Update = UpdateStudyDomain;
}

impl Resource for Subdomain {
    const PATH: &'static str = "subdomains";
    type New = NewSubdomain;
    type Update = UpdateSubdomain;
}

impl Resource for Coach {
    const PATH: &'static str = "coaches";
    type New = NewCoach;
    type Update = UpdateCoach;
}

impl Resource for Course {
    const PATH: &'static str = "courses";
    type New = NewCourse;
    type Update = UpdateCourse;
}

impl Resource for Enrollment {
    const PATH: &'static str = "enrollments";
    type New = NewEnrollment;
    type Update = UpdateEnrollment;
}

impl Resource for Faq {
    const PATH: &'static str = "faqs";
    type New = NewFaq;
    type Update = UpdateFaq;
}

impl Resource for Feedback {
    const PATH: &'static str = "feedbacks";
    type New = NewFeedback;
    type Update = UpdateFeedback;
}

impl Resource for Track {
    const PATH: &'static str = "tracks";
    type New = NewTrack;
    type Update = UpdateTrack;
}
