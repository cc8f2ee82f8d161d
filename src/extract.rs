//! Loaders for the NEO CSV file and the close-approach JSON file.
//!
//! Loaders return unlinked records; hand them to [`Catalog::new`](crate::Catalog::new)
//! to link them. Columns are located by header name, so column order in
//! the source files does not matter.

use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{NeoError, Result};
use crate::helpers::cd_to_datetime;
use crate::models::{CloseApproach, NearEarthObject};

const NEO_DESIGNATION: &str = "pdes";
const NEO_NAME: &str = "name";
const NEO_DIAMETER: &str = "diameter";
const NEO_HAZARDOUS: &str = "pha";

const CAD_DESIGNATION: &str = "des";
const CAD_DATE: &str = "cd";
const CAD_DISTANCE: &str = "dist";
const CAD_VELOCITY: &str = "v_rel";

/// Read near-Earth objects from a CSV file with a header row.
pub fn load_neos<P: AsRef<Path>>(path: P) -> Result<Vec<NearEarthObject>> {
    let path = path.as_ref();
    let neos = load_neos_from_reader(File::open(path)?)?;
    log::info!("Loaded {} NEOs from {}", neos.len(), path.display());
    Ok(neos)
}

pub fn load_neos_from_reader<R: Read>(reader: R) -> Result<Vec<NearEarthObject>> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| NeoError::InvalidInput(format!("NEO CSV is missing column '{}'", name)))
    };
    let designation_col = column(NEO_DESIGNATION)?;
    let name_col = column(NEO_NAME)?;
    let diameter_col = column(NEO_DIAMETER)?;
    let hazardous_col = column(NEO_HAZARDOUS)?;

    let mut neos = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let field = |col: usize| record.get(col).map(str::trim).unwrap_or("");

        let designation = field(designation_col);
        if designation.is_empty() {
            return Err(NeoError::InvalidInput(format!(
                "NEO row {} has an empty designation",
                idx + 1
            )));
        }

        let name = Some(field(name_col))
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        let diameter = match field(diameter_col) {
            "" => f64::NAN,
            raw => raw.parse::<f64>().map_err(|e| {
                NeoError::InvalidInput(format!(
                    "NEO '{}' has invalid diameter '{}': {}",
                    designation, raw, e
                ))
            })?,
        };

        let hazardous = field(hazardous_col) == "Y";

        neos.push(NearEarthObject::new(designation, name, diameter, hazardous));
    }

    Ok(neos)
}

#[derive(Debug, Deserialize)]
struct CadDocument {
    fields: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<Value>>,
}

/// Read close approaches from a JSON document of the form
/// `{"fields": [...], "data": [[...], ...]}`.
pub fn load_approaches<P: AsRef<Path>>(path: P) -> Result<Vec<CloseApproach>> {
    let path = path.as_ref();
    let approaches = load_approaches_from_reader(BufReader::new(File::open(path)?))?;
    log::info!(
        "Loaded {} close approaches from {}",
        approaches.len(),
        path.display()
    );
    Ok(approaches)
}

pub fn load_approaches_from_reader<R: Read>(reader: R) -> Result<Vec<CloseApproach>> {
    let document: CadDocument = serde_json::from_reader(reader)?;

    let column = |name: &str| -> Result<usize> {
        document.fields.iter().position(|f| f == name).ok_or_else(|| {
            NeoError::InvalidInput(format!("close-approach data is missing field '{}'", name))
        })
    };
    let designation_col = column(CAD_DESIGNATION)?;
    let date_col = column(CAD_DATE)?;
    let distance_col = column(CAD_DISTANCE)?;
    let velocity_col = column(CAD_VELOCITY)?;

    document
        .data
        .iter()
        .enumerate()
        .map(|(idx, row)| -> Result<CloseApproach> {
            let designation = text(row, designation_col, idx)?;
            let time = cd_to_datetime(&text(row, date_col, idx)?)?;
            let distance = number(row, distance_col, idx)?;
            let velocity = number(row, velocity_col, idx)?;
            Ok(CloseApproach::new(designation, time, distance, velocity))
        })
        .collect()
}

fn cell(row: &[Value], col: usize, idx: usize) -> Result<&Value> {
    row.get(col).ok_or_else(|| {
        NeoError::InvalidInput(format!(
            "close-approach row {} has {} values, expected more than {}",
            idx, row.len(), col
        ))
    })
}

fn text(row: &[Value], col: usize, idx: usize) -> Result<String> {
    match cell(row, col, idx)? {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(NeoError::InvalidInput(format!(
            "close-approach row {} column {}: expected text, got {}",
            idx, col, other
        ))),
    }
}

fn number(row: &[Value], col: usize, idx: usize) -> Result<f64> {
    let value = cell(row, col, idx)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        NeoError::InvalidInput(format!(
            "close-approach row {} column {}: expected a number, got {}",
            idx, col, value
        ))
    })
}
