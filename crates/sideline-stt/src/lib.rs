#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod transcriber;

pub use error::SttError;
pub use transcriber::{AudioUpload, Transcriber};

pub type Result<T> = std::result::Result<T, SttError>;
