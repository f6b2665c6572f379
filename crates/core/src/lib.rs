//! `classroll-core`: validation foundation building blocks.
//!
//! This crate contains the operation contexts, the constraint model and the
//! generic validator. It knows nothing about concrete entities.

pub mod entity;
pub mod error;
pub mod operation;
pub mod validation;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use operation::{Operation, OperationSet};
pub use validation::{
    Constraint, FieldRules, FieldValue, Validate, Violation, Violations, ensure_valid, validate,
};
