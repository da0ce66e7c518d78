use thiserror::Error;

use crate::domain::message::entities::MessageId;

pub mod services;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("message with ID {id} not found")]
    MessageNotFound { id: MessageId },

    #[error("an unknown error occurred: {message}")]
    Unknown { message: String },
}
