use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use super::figure::Figure;
use super::map::WorldMap;
use super::region::{Region, RegionCategory, default_color, default_polygons};
use super::settlement::{RegionLink, Settlement, SettlementKind};
use crate::id::IdGenerator;

/// In-memory record store for maps, regions, settlements, and figures.
///
/// Stand-in for the backing record store: plain keyed tables with
/// filter-by-foreign-key scans. Unique-name and foreign-key invariants are
/// enforced with assertions; everything downstream (geometry, assignment,
/// aggregation) is best-effort and never fails.
#[derive(Debug)]
pub struct Atlas {
    pub maps: BTreeMap<u64, WorldMap>,
    pub regions: BTreeMap<u64, Region>,
    pub settlements: BTreeMap<u64, Settlement>,
    pub figures: BTreeMap<u64, Figure>,
    pub id_gen: IdGenerator,
}

impl Atlas {
    pub fn new() -> Self {
        Self {
            maps: BTreeMap::new(),
            regions: BTreeMap::new(),
            settlements: BTreeMap::new(),
            figures: BTreeMap::new(),
            id_gen: IdGenerator::new(),
        }
    }

    /// Add a map, assigning it a unique ID. The image is an opaque blob
    /// store reference; dimensions are cached later via
    /// `set_map_dimensions`. Returns the assigned ID.
    ///
    /// # Panics
    /// Panics if a map with the same name already exists.
    pub fn add_map(&mut self, name: String, image: String) -> u64 {
        assert!(
            !self.maps.values().any(|m| m.name == name),
            "add_map: map name {name:?} already exists"
        );
        let id = self.id_gen.next_id();
        self.maps.insert(
            id,
            WorldMap {
                id,
                name,
                image,
                width: None,
                height: None,
                created_at: now_unix(),
            },
        );
        id
    }

    /// Cache a map's image dimensions. A no-op if dimensions are already
    /// present — they are derived once and never refreshed, even if the
    /// image reference changes afterwards.
    ///
    /// # Panics
    /// Panics if `map_id` does not exist.
    pub fn set_map_dimensions(&mut self, map_id: u64, width: u32, height: u32) {
        let map = self
            .maps
            .get_mut(&map_id)
            .unwrap_or_else(|| panic!("set_map_dimensions: map {map_id} not found"));
        if map.width.is_some() && map.height.is_some() {
            return;
        }
        map.width = Some(width);
        map.height = Some(height);
    }

    /// Add a region with an empty polygon set. Returns the assigned ID.
    ///
    /// # Panics
    /// Panics if the name is taken or `map_id` references a missing map.
    pub fn add_region(
        &mut self,
        name: String,
        category: RegionCategory,
        map_id: Option<u64>,
    ) -> u64 {
        assert!(
            !self.regions.values().any(|r| r.name == name),
            "add_region: region name {name:?} already exists"
        );
        if let Some(map_id) = map_id {
            assert!(
                self.maps.contains_key(&map_id),
                "add_region: map {map_id} not found"
            );
        }
        let id = self.id_gen.next_id();
        self.regions.insert(
            id,
            Region {
                id,
                name,
                category,
                color: default_color(),
                map_id,
                polygons: default_polygons(),
            },
        );
        id
    }

    /// Replace a region's polygon set with whatever the drawing editor
    /// sent. The payload is stored verbatim (order preserved, malformed
    /// fragments included); validation happens at membership-test time.
    ///
    /// Editing a shape never re-runs auto-assignment for settlements that
    /// were classified against the old shape.
    ///
    /// # Panics
    /// Panics if `region_id` does not exist.
    pub fn set_region_polygons(&mut self, region_id: u64, polygons: serde_json::Value) {
        let region = self
            .regions
            .get_mut(&region_id)
            .unwrap_or_else(|| panic!("set_region_polygons: region {region_id} not found"));
        region.polygons = polygons;
    }

    /// Add a settlement with no region associations. Returns the assigned
    /// ID. Region assignment is a separate step
    /// (`overlay::assign_regions_on_create`), run once after creation.
    ///
    /// # Panics
    /// Panics if the name is taken or `map_id` references a missing map.
    pub fn add_settlement(
        &mut self,
        name: String,
        kind: SettlementKind,
        map_id: Option<u64>,
        position: Option<(f64, f64)>,
    ) -> u64 {
        assert!(
            !self.settlements.values().any(|s| s.name == name),
            "add_settlement: settlement name {name:?} already exists"
        );
        if let Some(map_id) = map_id {
            assert!(
                self.maps.contains_key(&map_id),
                "add_settlement: map {map_id} not found"
            );
        }
        let id = self.id_gen.next_id();
        let (x, y) = match position {
            Some((x, y)) => (Some(x), Some(y)),
            None => (None, None),
        };
        self.settlements.insert(
            id,
            Settlement {
                id,
                name,
                kind,
                map_id,
                x,
                y,
                region_ids: Vec::new(),
            },
        );
        id
    }

    /// Replace a settlement's region associations. Duplicates collapse to
    /// the first occurrence (the association is a set).
    ///
    /// # Panics
    /// Panics if `settlement_id` or any region id does not exist.
    pub fn set_settlement_regions(&mut self, settlement_id: u64, region_ids: Vec<u64>) {
        for region_id in &region_ids {
            assert!(
                self.regions.contains_key(region_id),
                "set_settlement_regions: region {region_id} not found"
            );
        }
        let settlement = self
            .settlements
            .get_mut(&settlement_id)
            .unwrap_or_else(|| panic!("set_settlement_regions: settlement {settlement_id} not found"));
        let mut deduped = Vec::with_capacity(region_ids.len());
        for region_id in region_ids {
            if !deduped.contains(&region_id) {
                deduped.push(region_id);
            }
        }
        settlement.region_ids = deduped;
    }

    /// Add a figure originating from a settlement. Returns the assigned ID.
    ///
    /// # Panics
    /// Panics if the name is taken or `origin` references a missing
    /// settlement.
    pub fn add_figure(&mut self, name: String, origin: u64) -> u64 {
        assert!(
            !self.figures.values().any(|f| f.name == name),
            "add_figure: figure name {name:?} already exists"
        );
        assert!(
            self.settlements.contains_key(&origin),
            "add_figure: settlement {origin} not found"
        );
        let id = self.id_gen.next_id();
        self.figures.insert(id, Figure { id, name, origin });
        id
    }

    /// Foreign-key filter scan: regions owned by the given map. Regions
    /// without a map never appear here.
    pub fn regions_for_map(&self, map_id: u64) -> impl Iterator<Item = &Region> {
        self.regions
            .values()
            .filter(move |r| r.map_id == Some(map_id))
    }

    /// Extract all inline settlement↔region associations as normalized
    /// rows. Used at flush time.
    pub fn collect_region_links(&self) -> impl Iterator<Item = RegionLink> {
        self.settlements.values().flat_map(|s| {
            s.region_ids.iter().map(move |&region_id| RegionLink {
                settlement_id: s.id,
                region_id,
            })
        })
    }
}

impl Default for Atlas {
    fn default() -> Self {
        Self::new()
    }
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_unique_across_record_types() {
        let mut atlas = Atlas::new();
        let map = atlas.add_map("Eryndor".to_string(), "maps/eryndor.png".to_string());
        let region = atlas.add_region("Mirkwood".to_string(), RegionCategory::Forest, Some(map));
        let settlement = atlas.add_settlement(
            "Ironhold".to_string(),
            SettlementKind::City,
            Some(map),
            None,
        );
        let figure = atlas.add_figure("Aldric".to_string(), settlement);
        let mut ids = [map, region, settlement, figure];
        ids.sort_unstable();
        ids.windows(2).for_each(|w| assert_ne!(w[0], w[1]));
    }

    #[test]
    fn set_map_dimensions_caches_once() {
        let mut atlas = Atlas::new();
        let map = atlas.add_map("Eryndor".to_string(), "maps/eryndor.png".to_string());
        assert_eq!(atlas.maps[&map].width, None);

        atlas.set_map_dimensions(map, 1024, 768);
        assert_eq!(atlas.maps[&map].width, Some(1024));
        assert_eq!(atlas.maps[&map].height, Some(768));

        // Later calls are ignored — dimensions are never re-derived.
        atlas.set_map_dimensions(map, 99, 99);
        assert_eq!(atlas.maps[&map].width, Some(1024));
        assert_eq!(atlas.maps[&map].height, Some(768));
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn duplicate_map_name_panics() {
        let mut atlas = Atlas::new();
        atlas.add_map("Eryndor".to_string(), "a.png".to_string());
        atlas.add_map("Eryndor".to_string(), "b.png".to_string());
    }

    #[test]
    #[should_panic(expected = "map 99 not found")]
    fn region_with_missing_map_panics() {
        let mut atlas = Atlas::new();
        atlas.add_region("Orphan".to_string(), RegionCategory::Desert, Some(99));
    }

    #[test]
    fn region_without_map_is_allowed() {
        let mut atlas = Atlas::new();
        let id = atlas.add_region("Unplaced".to_string(), RegionCategory::Desert, None);
        assert_eq!(atlas.regions[&id].map_id, None);
        assert_eq!(atlas.regions[&id].polygons, json!([]));
    }

    #[test]
    fn set_region_polygons_stores_payload_verbatim() {
        let mut atlas = Atlas::new();
        let id = atlas.add_region("Mirkwood".to_string(), RegionCategory::Forest, None);
        let payload = json!([[[0, 0], [10, 0], [5, 9]], "garbage"]);
        atlas.set_region_polygons(id, payload.clone());
        assert_eq!(atlas.regions[&id].polygons, payload);
    }

    #[test]
    fn set_settlement_regions_deduplicates() {
        let mut atlas = Atlas::new();
        let a = atlas.add_region("A".to_string(), RegionCategory::Forest, None);
        let b = atlas.add_region("B".to_string(), RegionCategory::Swamp, None);
        let s = atlas.add_settlement("Ironhold".to_string(), SettlementKind::City, None, None);
        atlas.set_settlement_regions(s, vec![b, a, b, b]);
        assert_eq!(atlas.settlements[&s].region_ids, vec![b, a]);
    }

    #[test]
    #[should_panic(expected = "region")]
    fn set_settlement_regions_panics_on_missing_region() {
        let mut atlas = Atlas::new();
        let s = atlas.add_settlement("Ironhold".to_string(), SettlementKind::City, None, None);
        atlas.set_settlement_regions(s, vec![999]);
    }

    #[test]
    #[should_panic(expected = "settlement 42 not found")]
    fn figure_with_missing_settlement_panics() {
        let mut atlas = Atlas::new();
        atlas.add_figure("Aldric".to_string(), 42);
    }

    #[test]
    fn regions_for_map_filters_by_owner() {
        let mut atlas = Atlas::new();
        let m1 = atlas.add_map("One".to_string(), "1.png".to_string());
        let m2 = atlas.add_map("Two".to_string(), "2.png".to_string());
        let r1 = atlas.add_region("A".to_string(), RegionCategory::Forest, Some(m1));
        atlas.add_region("B".to_string(), RegionCategory::Swamp, Some(m2));
        atlas.add_region("C".to_string(), RegionCategory::Desert, None);

        let ids: Vec<u64> = atlas.regions_for_map(m1).map(|r| r.id).collect();
        assert_eq!(ids, vec![r1]);
    }

    #[test]
    fn collect_region_links_extracts_all() {
        let mut atlas = Atlas::new();
        let a = atlas.add_region("A".to_string(), RegionCategory::Forest, None);
        let b = atlas.add_region("B".to_string(), RegionCategory::Swamp, None);
        let s1 = atlas.add_settlement("One".to_string(), SettlementKind::Village, None, None);
        let s2 = atlas.add_settlement("Two".to_string(), SettlementKind::City, None, None);
        atlas.set_settlement_regions(s1, vec![a, b]);
        atlas.set_settlement_regions(s2, vec![b]);

        let links: Vec<RegionLink> = atlas.collect_region_links().collect();
        assert_eq!(links.len(), 3);
        assert!(links.contains(&RegionLink {
            settlement_id: s2,
            region_id: b
        }));
    }

    #[test]
    fn position_stored_on_settlement() {
        let mut atlas = Atlas::new();
        let m = atlas.add_map("Eryndor".to_string(), "maps/eryndor.png".to_string());
        let s = atlas.add_settlement(
            "Ironhold".to_string(),
            SettlementKind::City,
            Some(m),
            Some((120.0, 88.5)),
        );
        assert_eq!(atlas.settlements[&s].position(), Some((120.0, 88.5)));
    }
}
