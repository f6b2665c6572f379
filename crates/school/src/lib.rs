//! School domain module (students and teachers).
//!
//! Plain records whose fields carry operation-scoped constraints. Storage,
//! transport and request handling live outside this crate.

use classroll_core::OperationSet;

pub mod student;
pub mod teacher;

pub use student::Student;
pub use teacher::Teacher;

/// Operations that presuppose a stored record.
pub(crate) const EXISTING_RECORD: OperationSet = OperationSet::GET
    .union(OperationSet::DEL)
    .union(OperationSet::UPDATE);

/// Operations that write the record's content.
pub(crate) const WRITES_CONTENT: OperationSet = OperationSet::ADD.union(OperationSet::UPDATE);
