use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::Atlas;

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush the atlas to JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 5 files:
/// - `maps.jsonl` — one WorldMap per line
/// - `regions.jsonl` — one Region per line, polygon payloads verbatim
/// - `settlements.jsonl` — one Settlement per line (without inline region ids)
/// - `settlement_regions.jsonl` — normalized settlement↔region links
/// - `figures.jsonl` — one Figure per line
pub fn flush_to_jsonl(atlas: &Atlas, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(&output_dir.join("maps.jsonl"), atlas.maps.values())?;
    write_jsonl(&output_dir.join("regions.jsonl"), atlas.regions.values())?;
    write_jsonl(
        &output_dir.join("settlements.jsonl"),
        atlas.settlements.values(),
    )?;
    write_jsonl(
        &output_dir.join("settlement_regions.jsonl"),
        atlas.collect_region_links(),
    )?;
    write_jsonl(&output_dir.join("figures.jsonl"), atlas.figures.values())?;

    Ok(())
}
