pub mod attempt;
pub mod catalog;
pub mod content_rating;
pub mod content_session;
pub mod content_summary;
pub mod dataset;
pub mod error;
pub mod exam;
pub mod exam_attempt;
pub mod mastery;
pub mod user_session;
pub mod util;

pub use sea_orm;
