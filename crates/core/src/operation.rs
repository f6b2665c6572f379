//! Operation contexts used to select which field rules apply.

use bitflags::bitflags;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The operation a record is being validated for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Get,
    Update,
    Del,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Get,
        Operation::Update,
        Operation::Del,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Get => "get",
            Operation::Update => "update",
            Operation::Del => "del",
        }
    }

    /// The single-member set for this operation.
    pub const fn flag(self) -> OperationSet {
        match self {
            Operation::Add => OperationSet::ADD,
            Operation::Get => OperationSet::GET,
            Operation::Update => OperationSet::UPDATE,
            Operation::Del => OperationSet::DEL,
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::unknown_operation(s))
    }
}

bitflags! {
    /// A set of operations, usable in `const` rule tables.
    #[derive(Copy, Clone, PartialEq, Eq, Hash)]
    pub struct OperationSet: u8 {
        const ADD =    0b0000_0001;
        const GET =    0b0000_0010;
        const UPDATE = 0b0000_0100;
        const DEL =    0b0000_1000;
    }
}

impl OperationSet {
    pub const fn includes(self, op: Operation) -> bool {
        self.contains(op.flag())
    }

    /// Member operations, in declaration order.
    pub fn operations(self) -> impl Iterator<Item = Operation> {
        Operation::ALL.into_iter().filter(move |op| self.includes(*op))
    }
}

impl From<Operation> for OperationSet {
    fn from(op: Operation) -> Self {
        op.flag()
    }
}

impl core::fmt::Debug for OperationSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.operations()).finish()
    }
}

impl FromIterator<Operation> for OperationSet {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, op| set.union(op.flag()))
    }
}
