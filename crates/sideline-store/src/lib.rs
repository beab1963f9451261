#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;

pub use client::Store;
pub use error::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;
