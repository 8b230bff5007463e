use crate::dataset::DatasetError;
use learnlog_entity::validate::ValidationError;
use sea_orm::DbErr;
use thiserror::Error;

/// Failure of a log write. Validation rejections happen before anything is
/// persisted, so a `Validation` error never leaves a partial write behind.
#[derive(Error, Debug)]
pub enum LogWriteError {
    #[error(transparent)]
    Db(#[from] DbErr),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
