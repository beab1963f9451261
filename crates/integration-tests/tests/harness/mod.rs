//! Shared test harness
//!
//! Each integration test stands up the real router against wiremock
//! stand-ins for the speech, generation, store, and payment backends.

#![allow(dead_code)]

pub mod config;
pub mod server;
