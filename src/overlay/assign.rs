use crate::geom::{self, Point};
use crate::model::Atlas;

/// Compute and persist a settlement's region associations. Runs exactly
/// once, at settlement creation, against region shapes as they exist at
/// that moment — later polygon edits never reclassify existing settlements.
///
/// Decision policy, in order:
/// 1. A non-empty `explicit` list wins outright: unknown ids are dropped
///    with a warning, duplicates collapse, and no geometry runs. An empty
///    explicit list is treated as absent.
/// 2. A settlement that already has associations is left untouched (skip,
///    not merge).
/// 3. Without a map or a position there is nothing to classify — returns
///    empty, silently.
/// 4. Otherwise every region on the settlement's map is tested with
///    `geom::contains_any`; all matches are collected (set-union, no
///    priority between regions). Regions with malformed polygon sets
///    contribute nothing and are noted as a data-quality warning.
///
/// Always completes; the worst outcome is an empty association set. The
/// candidate read and the association write are not atomic — a concurrent
/// polygon edit in between is an accepted race, and the result reflects
/// whichever snapshot was read.
///
/// # Panics
/// Panics if `settlement_id` does not exist.
pub fn assign_regions_on_create(
    atlas: &mut Atlas,
    settlement_id: u64,
    explicit: Option<&[u64]>,
) -> Vec<u64> {
    if let Some(ids) = explicit.filter(|ids| !ids.is_empty()) {
        let valid = known_region_ids(atlas, ids);
        atlas.set_settlement_regions(settlement_id, valid.clone());
        return valid;
    }

    let (map_id, position, existing) = {
        let settlement = atlas
            .settlements
            .get(&settlement_id)
            .unwrap_or_else(|| panic!("assign_regions_on_create: settlement {settlement_id} not found"));
        (
            settlement.map_id,
            settlement.position(),
            settlement.region_ids.clone(),
        )
    };

    if !existing.is_empty() {
        return existing;
    }
    let (Some(map_id), Some((x, y))) = (map_id, position) else {
        return Vec::new();
    };

    let point = Point::new(x, y);
    let mut matched = Vec::new();
    for region in atlas.regions_for_map(map_id) {
        if !region.polygons.is_array() {
            tracing::warn!(
                "region {} has a non-list polygon set, skipping membership test",
                region.id
            );
            continue;
        }
        if geom::contains_any(point, &region.polygons) {
            matched.push(region.id);
        }
    }

    atlas.set_settlement_regions(settlement_id, matched.clone());
    matched
}

/// Filter an explicit id list down to ids that exist as regions, dropping
/// unknowns with a warning and collapsing duplicates. Best-effort by
/// choice: a partially-invalid override applies its valid part.
fn known_region_ids(atlas: &Atlas, ids: &[u64]) -> Vec<u64> {
    let mut valid = Vec::with_capacity(ids.len());
    for &id in ids {
        if !atlas.regions.contains_key(&id) {
            tracing::warn!("explicit region id {id} does not exist, dropping");
            continue;
        }
        if !valid.contains(&id) {
            valid.push(id);
        }
    }
    valid
}
