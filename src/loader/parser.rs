use serde::de::DeserializeOwned;
use std::fs;

use crate::error::Result;

/// Parses a JSON file into a given type `T`.
///
/// Reads the file at `file_path` and deserializes its contents.
/// IO failures surface as `Error::IoError`, malformed JSON as
/// `Error::DeserializationError`.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let data = fs::read_to_string(file_path)?;
    let parsed: T = serde_json::from_str(&data)?;

    Ok(parsed)
}
