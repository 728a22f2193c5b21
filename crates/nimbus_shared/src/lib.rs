//! Shared functionality
//!
//! This crate supplies the plumbing shared by the nimbus crates: the
//! preprocessed byte stream with its code-point reader, and the common
//! error types.

pub mod byte_stream;
pub mod errors;
