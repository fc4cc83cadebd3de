//! integrated tests
pub mod toolkit;

mod decoding;
