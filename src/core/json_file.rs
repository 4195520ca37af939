use std::{fs, path::Path};

use eyre::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};

pub fn read_from_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("Cannot parse {}", path.display()))
}

pub fn write_json_to_file<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let data = serde_json::to_vec_pretty(value)?;
    fs::write(path, data).with_context(|| format!("Cannot write {}", path.display()))
}
