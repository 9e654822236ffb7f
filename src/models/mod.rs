//! Data models for users and form submissions.

pub mod submission;
pub mod user;

pub use submission::*;
pub use user::*;
