use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;

pub mod json_writer;
pub mod render;
pub mod table;
pub mod table_writer;

pub(crate) fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(decoder))
    } else {
        Ok(Box::new(file))
    }
}

/// Opens a predictions table, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<BufReader<Box<dyn Read>>> {
    let reader: Box<dyn Read> = match path {
        Some(path) => open_maybe_gz(path)?,
        None => Box::new(std::io::stdin()),
    };
    Ok(BufReader::new(reader))
}
