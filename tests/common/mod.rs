use serde_json::json;
use world_atlas::model::{Atlas, RegionCategory, SettlementKind};
use world_atlas::overlay::assign_regions_on_create;

/// Fixture atlas: one map, three regions (one off-map), three settlements
/// with auto-assigned regions, and two figures in Ironhold.
pub fn build_test_atlas() -> Atlas {
    let mut atlas = Atlas::new();

    let map = atlas.add_map("Eryndor".to_string(), "maps/eryndor.png".to_string());
    atlas.set_map_dimensions(map, 1024, 768);

    // Square region near the origin
    let mirkwood = atlas.add_region("Mirkwood".to_string(), RegionCategory::Forest, Some(map));
    atlas.set_region_polygons(
        mirkwood,
        json!([[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]]),
    );

    // Two disjoint triangles
    let saltmere = atlas.add_region("Saltmere".to_string(), RegionCategory::Swamp, Some(map));
    atlas.set_region_polygons(
        saltmere,
        json!([
            [[0.0, 0.0], [4.0, 0.0], [2.0, 4.0]],
            [[20.0, 20.0], [30.0, 20.0], [25.0, 30.0]],
        ]),
    );

    // Region without an owning map — never an assignment candidate
    let wastes = atlas.add_region("The Wastes".to_string(), RegionCategory::Desert, None);
    atlas.set_region_polygons(
        wastes,
        json!([[[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]]]),
    );

    // 3 settlements: inside the square, inside the second triangle, outside everything
    let ironhold = atlas.add_settlement(
        "Ironhold".to_string(),
        SettlementKind::City,
        Some(map),
        Some((5.0, 5.0)),
    );
    assign_regions_on_create(&mut atlas, ironhold, None);

    let reedhaven = atlas.add_settlement(
        "Reedhaven".to_string(),
        SettlementKind::Village,
        Some(map),
        Some((25.0, 22.0)),
    );
    assign_regions_on_create(&mut atlas, reedhaven, None);

    let farpost = atlas.add_settlement(
        "Farpost".to_string(),
        SettlementKind::Village,
        Some(map),
        Some((500.0, 500.0)),
    );
    assign_regions_on_create(&mut atlas, farpost, None);

    // 2 figures, both from Ironhold
    atlas.add_figure("Aldric".to_string(), ironhold);
    atlas.add_figure("Bryn".to_string(), ironhold);

    atlas
}

#[allow(dead_code)]
pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
