#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
mod prompts;

pub use client::Generator;
pub use error::GenerateError;

pub type Result<T> = std::result::Result<T, GenerateError>;
