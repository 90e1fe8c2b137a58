// src/input.rs

use std::fs;
use std::io::{self, Read};

use models::FormValues;

#[derive(Debug, thiserror::Error)]
pub(crate) enum InputError {
    #[error("failed to read {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: io::Error,
    },
    #[error("field values must be a JSON object of strings and booleans: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read field values from `path`, or from stdin when no path is given.
pub(crate) fn read_values(path: Option<&str>) -> Result<FormValues, InputError> {
    let raw = match path {
        Some(path) => fs::read_to_string(path).map_err(|source| InputError::Io {
            source_name: path.to_string(),
            source,
        })?,
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .map_err(|source| InputError::Io {
                    source_name: "stdin".to_string(),
                    source,
                })?;
            raw
        }
    };
    parse_values(&raw)
}

pub(crate) fn parse_values(raw: &str) -> Result<FormValues, InputError> {
    Ok(serde_json::from_str(raw)?)
}
