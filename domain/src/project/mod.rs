//! Research projects and their closed category set

pub mod category;
pub mod entities;
