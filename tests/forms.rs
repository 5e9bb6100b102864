use learnhub_client::client::errors::ClientError;
use learnhub_client::domain::coach::NewCoach;
use learnhub_client::domain::course::NewCourse;
use learnhub_client::domain::feedback::NewFeedback;
use learnhub_client::forms::coach::CoachForm;
use learnhub_client::forms::course::CourseForm;
use learnhub_client::forms::feedback::FeedbackForm;

fn course_form() -> CourseForm {
    CourseForm {
        title: "  Jazz Piano Basics  ".to_string(),
        description: "Twelve lessons.".to_string(),
        subdomain_id: 3,
        coach_id: 7,
        price_cents: 4900,
        cover_image_url: Some("https://cdn.learnhub.test/covers/1.jpg".to_string()),
        intro_video_url: Some("   ".to_string()),
    }
}

#[test]
fn test_course_form_trims_and_normalizes() {
    let new: NewCourse = course_form().try_into().expect("valid form");
    assert_eq!(new.title, "Jazz Piano Basics");
    assert_eq!(new.subdomain_id, 3);
    assert_eq!(
        new.cover_image_url.as_deref(),
        Some("https://cdn.learnhub.test/covers/1.jpg")
    );
    assert_eq!(new.intro_video_url, None, "blank URL becomes None");
}

#[test]
fn test_course_form_rejects_empty_title() {
    let form = CourseForm {
        title: String::new(),
        ..course_form()
    };
    let err = NewCourse::try_from(form).expect_err("must fail");
    assert!(matches!(err, ClientError::Validation(_)));
}

#[test]
fn test_course_form_rejects_malformed_url() {
    let form = CourseForm {
        cover_image_url: Some("not a url".to_string()),
        ..course_form()
    };
    assert!(NewCourse::try_from(form).is_err());
}

#[test]
fn test_course_form_rejects_missing_coach() {
    let form = CourseForm {
        coach_id: 0,
        ..course_form()
    };
    assert!(NewCourse::try_from(form).is_err());
}

#[test]
fn test_coach_form_normalizes_email_and_drops_blanks() {
    let form = CoachForm {
        name: "Ada Deng".to_string(),
        headline: "Concert pianist".to_string(),
        bio: None,
        email: Some("  Ada@Example.COM ".to_string()),
        phone: Some(String::new()),
        avatar_url: None,
    };
    let new: NewCoach = form.try_into().expect("valid form");
    assert_eq!(new.email.as_deref(), Some("ada@example.com"));
    assert_eq!(new.phone, None);
}

#[test]
fn test_coach_form_normalizes_phone_to_e164() {
    let form = CoachForm {
        name: "Ada Deng".to_string(),
        headline: "Concert pianist".to_string(),
        bio: None,
        email: None,
        phone: Some("+1 415 555 0132".to_string()),
        avatar_url: None,
    };
    let new: NewCoach = form.try_into().expect("valid form");
    assert_eq!(new.phone.as_deref(), Some("+14155550132"));
}

#[test]
fn test_coach_form_rejects_bad_email() {
    let form = CoachForm {
        name: "Ada Deng".to_string(),
        headline: "Concert pianist".to_string(),
        bio: None,
        email: Some("not-an-email".to_string()),
        phone: None,
        avatar_url: None,
    };
    assert!(NewCoach::try_from(form).is_err());
}

#[test]
fn test_feedback_form_sanitizes_markup() {
    let form = FeedbackForm {
        course_id: 1,
        author_name: "Sam".to_string(),
        rating: 5,
        message: "Great!<script>alert(1)</script>".to_string(),
    };
    let new: NewFeedback = form.try_into().expect("valid form");
    assert_eq!(new.message, "Great!");
}

#[test]
fn test_feedback_form_rejects_out_of_range_rating() {
    let form = FeedbackForm {
        course_id: 1,
        author_name: "Sam".to_string(),
        rating: 0,
        message: "Great!".to_string(),
    };
    let err = NewFeedback::try_from(form).expect_err("must fail");
    assert!(matches!(err, ClientError::Validation(_)));
}
