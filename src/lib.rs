//! Client-side data layer for the LearnHub course/coaching marketplace.
//!
//! Every list screen (study domains, coaches, courses, FAQs, feedback,
//! music tracks, ...) binds to one [`controller::ListController`] instance,
//! which composes pagination state, a [`client::ResourceFetcher`] and the
//! create/update/delete operations over the uniform REST contract exposed
//! by the LearnHub backend.

pub mod client;
pub mod controller;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;

/// Page size used when a screen does not pick one explicitly.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes a list screen may offer in its size selector.
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 20, 50, 100];

/// Where the navigation port sends the user when the backend answers 401/403.
pub const SIGNIN_PATH: &str = "/signin";
