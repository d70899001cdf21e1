//! Core value objects and errors

pub mod error;
pub mod input;
