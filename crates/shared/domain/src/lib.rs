//! # Domain Models
//!
//! Plain configuration types shared across the workspace. The only dependency is `serde`;
//! loading, validation and I/O live in `plume-kernel` and the consumers.

pub mod config;
