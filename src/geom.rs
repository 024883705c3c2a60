use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point in map pixel space. Origin is the image's top-left corner,
/// x grows rightward, y grows downward.
///
/// Serializes as a two-element `[x, y]` array to match the stored polygon
/// payload shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Point { x, y })
    }
}

/// Added to the y-span denominator so an exactly horizontal edge never
/// divides by zero. Tolerance only — points exactly on an edge get an
/// arbitrary (but deterministic) side.
const EDGE_EPS: f64 = 1e-12;

/// Ray-casting point-in-polygon test with parity counting.
///
/// Casts a horizontal ray from the point to +∞ and counts edge crossings:
/// an edge (vi, vj) crosses when its y-range straddles the point's y and
/// the point lies left of the edge's x-intersection at that y. An odd
/// crossing count means inside.
///
/// A polygon with fewer than 3 vertices is degenerate and contains nothing.
pub fn contains(point: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);
        let crosses = ((yi > point.y) != (yj > point.y))
            && point.x < (xj - xi) * (point.y - yi) / (yj - yi + EDGE_EPS) + xi;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Tolerant decode of one polygon from its stored JSON form: a list of
/// `[x, y]` number pairs. Returns `None` for anything else (wrong arity,
/// non-numeric coordinates, not a list).
pub fn decode_polygon(value: &serde_json::Value) -> Option<Vec<Point>> {
    let vertices = value.as_array()?;
    let mut polygon = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        let pair = vertex.as_array()?;
        if pair.len() != 2 {
            return None;
        }
        polygon.push(Point {
            x: pair[0].as_f64()?,
            y: pair[1].as_f64()?,
        });
    }
    Some(polygon)
}

/// Union membership over a raw polygon set: true as soon as any polygon in
/// the set contains the point. A malformed element decodes to nothing and
/// is skipped without aborting the remaining polygons; a set that is not a
/// JSON array matches nothing.
pub fn contains_any(point: Point, polygon_set: &serde_json::Value) -> bool {
    let Some(polygons) = polygon_set.as_array() else {
        return false;
    };
    polygons.iter().any(|poly| match decode_polygon(poly) {
        Some(vertices) => contains(point, &vertices),
        None => false,
    })
}
