#![allow(clippy::must_use_candidate)]

mod error;
mod usage;

pub use error::ErrorBody;
pub use usage::UsagePolicy;
