//! Entity trait: identity once persisted.

/// Entity marker + minimal interface.
///
/// Identity is optional: a record that has not been stored yet carries no id.
pub trait Entity {
    /// Identifier type assigned by the persistence layer.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if one has been assigned.
    fn id(&self) -> Option<&Self::Id>;

    /// Whether the entity refers to an existing record.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
