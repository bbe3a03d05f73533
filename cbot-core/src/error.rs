use thiserror::Error;

#[derive(Error, Debug)]
pub enum CbotError {
    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Empty content")]
    EmptyContent,

    #[error("Reply source failed: {0}")]
    Reply(String),
}

pub type Result<T> = std::result::Result<T, CbotError>;
