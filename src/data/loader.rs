//! Loading series from CSV and JSON files.

use super::SeriesSet;
use crate::error::{Error, Result};
use csv::Reader;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// JSON layouts accepted by [`SeriesLoader::load_json`]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonSeries {
    /// `[[1.0, 2.0], [3.0, 4.0]]`
    Unnamed(Vec<Vec<f64>>),
    /// `{"lead_ii": [1.0, 2.0], "lead_v1": [3.0, 4.0]}`
    Named(BTreeMap<String, Vec<f64>>),
}

/// Loader for series stored on disk
pub struct SeriesLoader;

impl SeriesLoader {
    /// Load series from a CSV file with a header row.
    ///
    /// Every column is a series. When `columns` is given only those columns
    /// are kept, in the order requested.
    pub fn load_csv<P: AsRef<Path>>(path: P, columns: Option<&[String]>) -> Result<SeriesSet> {
        let file = File::open(&path)?;
        let mut reader = Reader::from_reader(file);

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();

        let selected: Vec<usize> = match columns {
            Some(wanted) => wanted
                .iter()
                .map(|name| {
                    headers.iter().position(|h| h == name).ok_or_else(|| {
                        Error::InvalidInput(format!("column '{}' not found in CSV header", name))
                    })
                })
                .collect::<Result<_>>()?,
            None => (0..headers.len()).collect(),
        };

        let mut series: Vec<Vec<f64>> = vec![Vec::new(); selected.len()];

        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            for (slot, &col) in selected.iter().enumerate() {
                let field = record.get(col).unwrap_or("").trim();
                let value: f64 = field.parse().map_err(|_| {
                    Error::InvalidInput(format!(
                        "row {}, column '{}': '{}' is not a number",
                        row_idx + 1,
                        headers[col],
                        field
                    ))
                })?;
                series[slot].push(value);
            }
        }

        debug!(
            path = %path.as_ref().display(),
            series = series.len(),
            "loaded CSV series"
        );

        Ok(SeriesSet {
            names: selected.iter().map(|&c| headers[c].clone()).collect(),
            series,
        })
    }

    /// Load series from a JSON file: an array of arrays or an object of named arrays
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<SeriesSet> {
        let file = File::open(&path)?;
        let parsed: JsonSeries = serde_json::from_reader(file)?;

        let set = match parsed {
            JsonSeries::Unnamed(series) => SeriesSet::from_series(series),
            JsonSeries::Named(map) => {
                let (names, series): (Vec<String>, Vec<Vec<f64>>) = map.into_iter().unzip();
                SeriesSet { names, series }
            }
        };

        debug!(
            path = %path.as_ref().display(),
            series = set.num_series(),
            "loaded JSON series"
        );

        Ok(set)
    }

    /// Load by file extension (`.json` or anything else as CSV)
    pub fn load<P: AsRef<Path>>(path: P, columns: Option<&[String]>) -> Result<SeriesSet> {
        let is_json = path
            .as_ref()
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::load_json(path)
        } else {
            Self::load_csv(path, columns)
        }
    }
}
