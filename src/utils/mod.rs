//! Shared validation helpers.

pub mod validation;
