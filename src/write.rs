//! Serialization of close-approach result streams to CSV and JSON.
//!
//! Each output row describes one close approach together with the object it
//! is linked to. Date-times are written as `YYYY-MM-DD HH:MM`. CSV numbers
//! are always positional with at least one decimal place. An unknown
//! diameter is written as `nan` in CSV and `null` in JSON.

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::helpers::format_float;
use crate::models::{CloseApproach, NearEarthObject};

/// CSV header, in column order.
pub const CSV_FIELDS: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    datetime_utc: String,
    distance_au: String,
    velocity_km_s: String,
    designation: &'a str,
    name: Option<&'a str>,
    diameter_km: Option<String>,
    potentially_hazardous: Option<bool>,
}

impl<'a> CsvRow<'a> {
    fn new(approach: &'a CloseApproach, neo: Option<&'a NearEarthObject>) -> Self {
        Self {
            datetime_utc: approach.time_str(),
            distance_au: format_float(approach.distance),
            velocity_km_s: format_float(approach.velocity),
            designation: neo.map_or(approach.designation.as_str(), |n| n.designation.as_str()),
            name: neo.and_then(NearEarthObject::name),
            diameter_km: neo.map(|n| format_float(n.diameter)),
            potentially_hazardous: neo.map(|n| n.hazardous),
        }
    }
}

#[derive(Serialize)]
struct JsonNeo<'a> {
    designation: &'a str,
    name: &'a str,
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    neo: Option<JsonNeo<'a>>,
}

impl<'a> JsonRow<'a> {
    fn new(approach: &'a CloseApproach, neo: Option<&'a NearEarthObject>) -> Self {
        Self {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            neo: neo.map(|n| JsonNeo {
                designation: &n.designation,
                name: n.name().unwrap_or(""),
                diameter_km: Some(n.diameter).filter(|d| !d.is_nan()),
                potentially_hazardous: n.hazardous,
            }),
        }
    }
}

/// Write results as CSV to `writer`, returning the number of rows written.
///
/// The header row is always written, even for an empty result stream.
pub fn write_csv<'a, W, I>(catalog: &'a Catalog, results: I, writer: W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_FIELDS)?;

    let mut rows = 0;
    for approach in results {
        csv_writer.serialize(CsvRow::new(approach, catalog.neo_for(approach)))?;
        rows += 1;
    }
    csv_writer.flush()?;
    Ok(rows)
}

/// Write results as CSV to a file at `path`.
pub fn write_to_csv<'a, P, I>(catalog: &'a Catalog, results: I, path: P) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let path = path.as_ref();
    let rows = write_csv(catalog, results, BufWriter::new(File::create(path)?))?;
    log::info!("Wrote {} rows to {}", rows, path.display());
    Ok(rows)
}

/// Write results as a pretty-printed JSON array to `writer`.
pub fn write_json<'a, W, I>(catalog: &'a Catalog, results: I, mut writer: W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let rows: Vec<JsonRow<'a>> = results
        .into_iter()
        .map(|approach| JsonRow::new(approach, catalog.neo_for(approach)))
        .collect();
    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writer.flush()?;
    Ok(rows.len())
}

/// Write results as JSON to a file at `path`.
pub fn write_to_json<'a, P, I>(catalog: &'a Catalog, results: I, path: P) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a CloseApproach>,
{
    let path = path.as_ref();
    let rows = write_json(catalog, results, BufWriter::new(File::create(path)?))?;
    log::info!("Wrote {} records to {}", rows, path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LinkPolicy};
    use crate::filters::Filters;
    use chrono::NaiveDate;

    fn catalog() -> Catalog {
        let time = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(12, 30, 45)
            .unwrap();
        let neos = vec![
            NearEarthObject::new("433", Some("Eros".into()), 16.84, false),
            NearEarthObject::new("2019 AA", None, f64::NAN, true),
        ];
        let approaches = vec![
            CloseApproach::new("433", time, 0.25, 5.5),
            CloseApproach::new("2019 AA", time, 0.05, 3.0),
            CloseApproach::new("9999", time, 0.5, 1.0),
        ];
        let config = Config::default().with_link_policy(LinkPolicy::Lenient);
        Catalog::with_config(neos, approaches, config).unwrap()
    }

    #[test]
    fn test_write_csv() {
        let catalog = catalog();
        let mut out = Vec::new();
        let rows = write_csv(&catalog, catalog.query(&Filters::new()), &mut out).unwrap();
        assert_eq!(rows, 3);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous"
        );
        assert_eq!(lines[1], "2020-01-01 12:30,0.25,5.5,433,Eros,16.84,false");
        assert_eq!(lines[2], "2020-01-01 12:30,0.05,3.0,2019 AA,,nan,true");
        assert_eq!(lines[3], "2020-01-01 12:30,0.5,1.0,9999,,,");
    }

    #[test]
    fn test_write_csv_number_columns_share_one_format() {
        let time = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let neos = vec![
            NearEarthObject::new("A", None, 1.0, false),
            NearEarthObject::new("B", None, 1e-7, false),
        ];
        let approaches = vec![
            CloseApproach::new("A", time, 1.0, 1e-7),
            CloseApproach::new("B", time, 1.0, 2.0),
        ];
        let catalog = Catalog::new(neos, approaches).unwrap();

        let mut out = Vec::new();
        write_csv(&catalog, catalog.query(&Filters::new()), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "2020-01-01 00:00,1.0,0.0000001,A,,1.0,false");
        assert_eq!(lines[2], "2020-01-01 00:00,1.0,2.0,B,,0.0000001,false");
    }

    #[test]
    fn test_write_csv_empty_has_header() {
        let catalog = catalog();
        let mut out = Vec::new();
        let filters = Filters::new().with_distance_min(10.0);
        let rows = write_csv(&catalog, catalog.query(&filters), &mut out).unwrap();
        assert_eq!(rows, 0);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_write_json() {
        let catalog = catalog();
        let mut out = Vec::new();
        let rows = write_json(&catalog, catalog.query(&Filters::new()), &mut out).unwrap();
        assert_eq!(rows, 3);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records[0]["datetime_utc"], "2020-01-01 12:30");
        assert_eq!(records[0]["distance_au"], 0.25);
        assert_eq!(records[0]["neo"]["designation"], "433");
        assert_eq!(records[0]["neo"]["name"], "Eros");
        assert_eq!(records[0]["neo"]["potentially_hazardous"], false);

        assert_eq!(records[1]["neo"]["name"], "");
        assert!(records[1]["neo"]["diameter_km"].is_null());
        assert!(records[2]["neo"].is_null());
    }
}
