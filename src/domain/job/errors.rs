//! Job Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JobError {
    #[error("无效的 Job ID: {0}")]
    InvalidJobId(String),
}
