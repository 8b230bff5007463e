//! Persisted records of learner interaction with content and with the
//! platform itself: content visits, per-user summaries, ratings, platform
//! sessions, mastery attempts and exam engagement.

pub mod attempt;
pub mod content;
pub mod exam;
pub mod facility;
pub mod mastery;
pub mod permission;
pub mod user;
pub mod user_session;
pub mod validate;
