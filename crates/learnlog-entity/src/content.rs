pub mod rating;
pub mod session;
pub mod summary;
