use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifier of an administrable system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SystemId(i64);

impl SystemId {
    /// Creates a system identifier from a stored value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Display for SystemId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Identifier of an administrator-to-system assignment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentId(i64);

impl AssignmentId {
    /// Creates an assignment identifier from a stored value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}
