//! Frequency table loading from the JSON classification file.

use anyhow::{anyhow, Context, Result};
use glam::Vec3;
use procgen::FrequencyTable;
use serde::Deserialize;
use starmap_core::{ClassificationRecord, PhysicalAttributes, SpectralClass};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TableFile {
    stars: Vec<StarRow>,
}

/// One row as stored on disk. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct StarRow {
    stellar_class: String,
    subclass: u8,
    luminosity_class: String,
    #[serde(default)]
    mass: f32,
    #[serde(default)]
    radius: f32,
    #[serde(default)]
    temp: f32,
    #[serde(default)]
    luminosity: f32,
    /// `"(r, g, b)"` with 0..255 channels.
    #[serde(rename = "RGB")]
    rgb: String,
    #[serde(default)]
    color: Option<String>,
    frequency: f64,
}

impl StarRow {
    fn into_record(self) -> Result<ClassificationRecord> {
        let color = parse_rgb(&self.rgb).with_context(|| {
            format!("bad RGB for {}{}({})", self.stellar_class, self.subclass, self.luminosity_class)
        })?;
        let mut record = ClassificationRecord::new(
            SpectralClass::new(self.stellar_class, self.subclass, self.luminosity_class),
            color,
            self.frequency,
        )
        .with_physical(PhysicalAttributes {
            mass: self.mass,
            radius: self.radius,
            temperature: self.temp,
            luminosity: self.luminosity,
        });
        if let Some(name) = self.color {
            record = record.with_color_name(name);
        }
        Ok(record)
    }
}

/// Parse `"(255, 204, 111)"` into a 0..1 color.
pub fn parse_rgb(text: &str) -> Result<Vec3> {
    let channels = text
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .split(',')
        .map(|c| c.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("non-numeric channel in {:?}", text))?;
    match channels.as_slice() {
        [r, g, b] if [r, g, b].iter().all(|c| (0.0..=255.0).contains(*c)) => {
            Ok(Vec3::new(*r, *g, *b) / 255.0)
        }
        _ => Err(anyhow!("expected three channels in 0..=255, got {:?}", text)),
    }
}

/// Parse a table from JSON text.
pub fn parse_table(json: &str) -> Result<FrequencyTable> {
    let file: TableFile = serde_json::from_str(json).context("malformed frequency table")?;
    let records = file
        .stars
        .into_iter()
        .enumerate()
        .map(|(i, row)| row.into_record().with_context(|| format!("row {}", i)))
        .collect::<Result<Vec<_>>>()?;
    Ok(FrequencyTable::new(records)?)
}

/// Read and parse the table at `path`.
pub fn load_table(path: &Path) -> Result<FrequencyTable> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("could not read frequency table {:?}", path))?;
    let table = parse_table(&json).with_context(|| format!("in {:?}", path))?;
    log::info!("Loaded {} classifications from {:?}", table.len(), path);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "stars": [
            { "StellarClass": "M", "Subclass": 3, "LuminosityClass": "V", "Mass": 0.36,
              "Radius": 0.39, "Temp": 3400, "Luminosity": 0.015, "RGB": "(255, 167, 97)",
              "Color": "orange-red", "Planets": "0-3", "Frequency": 70.0 },
            { "StellarClass": "G", "Subclass": 2, "LuminosityClass": "V", "Mass": 1.0,
              "Radius": 1.0, "Temp": 5778, "Luminosity": 1.0, "RGB": "(255, 244, 234)",
              "Frequency": 30.0 }
        ]
    }"#;

    #[test]
    fn parses_rgb_tuple() {
        let c = parse_rgb("(255, 0, 51)").unwrap();
        assert_eq!(c, Vec3::new(1.0, 0.0, 0.2));
    }

    #[test]
    fn rejects_bad_rgb() {
        assert!(parse_rgb("(255, 0)").is_err());
        assert!(parse_rgb("(255, red, 0)").is_err());
        assert!(parse_rgb("(300, 0, 0)").is_err());
    }

    #[test]
    fn parses_table_rows() {
        let table = parse_table(SAMPLE).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.is_normalized());
        let m = &table.records()[0];
        assert_eq!(m.spectral.to_string(), "M3(V)");
        assert_eq!(m.physical.temperature, 3400.0);
        assert_eq!(m.color_name.as_deref(), Some("orange-red"));
        assert!(table.records()[1].color_name.is_none());
    }

    #[test]
    fn empty_table_fails() {
        let err = parse_table(r#"{ "stars": [] }"#).unwrap_err();
        assert!(err.to_string().contains("empty"), "{}", err);
    }

    #[test]
    fn bundled_table_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/spectral_classes.json");
        let table = load_table(&path).unwrap();
        assert!(table.is_normalized());
    }
}
