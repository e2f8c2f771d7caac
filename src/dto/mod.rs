//! DTO modules that bridge services with templates and the ideas API.

pub mod api;
pub mod ideas;
