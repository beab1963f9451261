pub mod checkout;
pub mod health;
pub mod schedule;
pub mod transcribe;
pub mod translate;
pub mod webhook;

mod multipart;
