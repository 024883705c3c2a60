use std::collections::HashMap;

use crate::model::{Atlas, Marker};

/// Build the marker projection for map-rendering clients, optionally
/// filtered to one map. Read-only: region associations come out exactly as
/// persisted and geometry is never consulted.
///
/// Figure counts come from a single grouped pass over the figure table
/// rather than one lookup per settlement. An unknown `map_id` yields an
/// empty list. Output order follows store iteration order; callers must
/// not rely on it.
pub fn markers(atlas: &Atlas, map_id: Option<u64>) -> Vec<Marker> {
    let mut counts: HashMap<u64, u64> = HashMap::new();
    for figure in atlas.figures.values() {
        *counts.entry(figure.origin).or_insert(0) += 1;
    }

    atlas
        .settlements
        .values()
        .filter(|s| map_id.is_none_or(|id| s.map_id == Some(id)))
        .map(|s| Marker {
            id: s.id,
            name: s.name.clone(),
            kind: s.kind.clone(),
            x: s.x,
            y: s.y,
            map_id: s.map_id,
            figure_count: counts.get(&s.id).copied().unwrap_or(0),
            region_ids: s.region_ids.clone(),
        })
        .collect()
}
