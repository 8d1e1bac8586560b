//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod system;
mod user;

pub use system::{AssignmentId, SystemId};
pub use user::{
    EmailAddress, PASSWORD_SUFFIX_MAX, PASSWORD_SUFFIX_MIN, UserId, UserRole,
    normalize_person_name, temporary_password,
};
