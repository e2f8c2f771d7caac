//! Runtime models loaded outside the domain layer.

pub mod config;
