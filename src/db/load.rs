use std::fmt::Display;

use serde::Serialize;
use sqlx::PgPool;

use crate::model::Atlas;

/// Load an entire `Atlas` into Postgres using COPY FROM STDIN (text format).
///
/// Order respects FK constraints: maps → regions → settlements →
/// settlement_regions → figures.
pub async fn load_atlas(pool: &PgPool, atlas: &Atlas) -> Result<(), sqlx::Error> {
    // Maps
    {
        let mut buf = String::new();
        for m in atlas.maps.values() {
            buf.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                m.id,
                escape(&m.name),
                escape(&m.image),
                opt(m.width),
                opt(m.height),
                m.created_at,
            ));
        }
        copy_in(pool, include_str!("../../sql/copy_maps.sql"), &buf).await?;
    }

    // Regions (polygon sets go into a jsonb column as compact JSON)
    {
        let mut buf = String::new();
        for r in atlas.regions.values() {
            buf.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                r.id,
                escape(&r.name),
                escape(&enum_str(&r.category)),
                escape(&r.color),
                opt(r.map_id),
                escape(&r.polygons.to_string()),
            ));
        }
        copy_in(pool, include_str!("../../sql/copy_regions.sql"), &buf).await?;
    }

    // Settlements (before links due to FK)
    {
        let mut buf = String::new();
        for s in atlas.settlements.values() {
            buf.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                s.id,
                escape(&s.name),
                escape(&enum_str(&s.kind)),
                opt(s.map_id),
                opt(s.x),
                opt(s.y),
            ));
        }
        copy_in(pool, include_str!("../../sql/copy_settlements.sql"), &buf).await?;
    }

    // Settlement↔region links
    {
        let mut buf = String::new();
        for link in atlas.collect_region_links() {
            buf.push_str(&format!("{}\t{}\n", link.settlement_id, link.region_id));
        }
        copy_in(pool, include_str!("../../sql/copy_settlement_regions.sql"), &buf).await?;
    }

    // Figures
    {
        let mut buf = String::new();
        for f in atlas.figures.values() {
            buf.push_str(&format!("{}\t{}\t{}\n", f.id, escape(&f.name), f.origin));
        }
        copy_in(pool, include_str!("../../sql/copy_figures.sql"), &buf).await?;
    }

    Ok(())
}

/// Execute a COPY FROM STDIN with the given text-format payload.
async fn copy_in(pool: &PgPool, statement: &str, data: &str) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let mut copy = conn.copy_in_raw(statement).await?;
    copy.send(data.as_bytes()).await?;
    copy.finish().await?;
    Ok(())
}

/// Escape a string for Postgres COPY text format.
/// Backslash must be escaped first, then the special whitespace characters.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an optional value as a COPY text value (`\N` for NULL).
fn opt<T: Display>(v: Option<T>) -> String {
    match v {
        Some(n) => n.to_string(),
        None => "\\N".to_string(),
    }
}

/// Serialize a serde enum variant to its snake_case string (strips JSON quotes).
fn enum_str<T: Serialize>(val: &T) -> String {
    let json = serde_json::to_string(val).expect("enum serialization");
    // serde_json wraps string enums in quotes: "\"value\""
    json[1..json.len() - 1].to_string()
}
