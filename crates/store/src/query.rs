//! Derived views over a store snapshot.
//!
//! Pure, side-effect-free projections; callers recompute them from the
//! current snapshot on every render.

use telinv_core::Entity;

/// Case-insensitive substring match of `query` against each entity's name.
///
/// An empty query matches everything.
pub fn search_by_name<'a, E: Entity>(entries: &'a [E], query: &str) -> Vec<&'a E> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| e.name().to_lowercase().contains(&needle))
        .collect()
}
