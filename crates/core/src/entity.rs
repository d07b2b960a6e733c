//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identifier, unique within whatever collection owns the entity.
    type Id: Eq + core::hash::Hash + core::fmt::Debug + ?Sized;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when `id` identifies this entity.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
