//! JSON reports for simulation results.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::common::Result;
use crate::page::{PageResult, PageStrategy};

/// A page replacement result labelled with the strategy that produced it
#[derive(Debug, Clone, Serialize)]
pub struct PageReport<'a> {
    pub strategy: PageStrategy,
    #[serde(flatten)]
    pub result: &'a PageResult,
}

impl<'a> PageReport<'a> {
    pub fn new(strategy: PageStrategy, result: &'a PageResult) -> Self {
        Self { strategy, result }
    }
}

/// Serializes `value` as pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes `value` as pretty-printed JSON to `path`, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(path = %path.display(), "wrote report");
    Ok(())
}
