//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Every record kept in the inventory is identified by a numeric id and
/// carries a display name; lookups work against both.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + Into<u32>;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Returns the display name.
    fn name(&self) -> &str;
}
