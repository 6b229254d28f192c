//! UUID-based implementation of the id generator port.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Generates 32-character hexadecimal suffixes from random UUIDs.
///
/// Prefixed resource ids (`thread-<suffix>`) stay within the schema's
/// VARCHAR(50) columns.
#[derive(Clone, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
