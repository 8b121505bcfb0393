//! Shape identifier generation.

use crate::types::ShapeId;

/// Source of collision-resistant shape identifiers.
pub trait IdGenerator {
    /// Returns an identifier never returned before by this generator.
    fn next_id(&mut self) -> ShapeId;
}

/// Generates random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> ShapeId {
        ShapeId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Generates `{prefix}{n}` identifiers from a monotonically increasing counter.
///
/// Used for deterministic replays and tests.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first id is `{prefix}1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("shape")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ShapeId {
        let id = ShapeId::new(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> ShapeId {
        (**self).next_id()
    }
}
