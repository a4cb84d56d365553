//! Reading and writing built indexes.
//!
//! Indexes are stored as a sequence of [`VertexLabel`](crate::h2h::VertexLabel) records in
//! elimination order, either as JSON or as `MessagePack`. Build statistics are written as JSON.

use std::fs::File;
use std::io::{
    BufWriter,
    Write,
};
use std::path::Path;

use anyhow::{
    Context,
    Result,
};
use tracing::{
    info,
    instrument,
};

use crate::h2h::H2HIndex;
use crate::stats::IndexStats;

/// On-disk encoding of an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexFormat {
    /// Human-readable JSON.
    Json,
    /// Compact `MessagePack`.
    MessagePack,
}

impl IndexFormat {
    /// JSON for paths ending in `.json`, `MessagePack` for everything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::MessagePack,
        }
    }
}

/// Write `index` to `path` in the format implied by its extension.
#[instrument(skip(index), fields(labels = index.len()))]
pub fn write_index(index: &H2HIndex, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    match IndexFormat::from_path(path) {
        IndexFormat::Json => serde_json::to_writer(&mut writer, index)?,
        IndexFormat::MessagePack => rmp_serde::encode::write_named(&mut writer, index)?,
    }
    writer.flush()?;
    info!("index written to {}", path.display());
    Ok(())
}

/// Read an index written by [`write_index`], decoding by the same extension rule.
///
/// Decoding runs the label checks of `H2HIndex`, so a file whose labels do not line up fails with
/// that error in its chain.
#[instrument]
pub fn read_index(path: &Path) -> Result<H2HIndex> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let decoding = || format!("decoding index from {}", path.display());
    let index = match IndexFormat::from_path(path) {
        IndexFormat::Json => serde_json::from_slice(&bytes).with_context(decoding)?,
        IndexFormat::MessagePack => rmp_serde::from_slice(&bytes).with_context(decoding)?,
    };
    Ok(index)
}

/// Write build statistics to `path` as pretty-printed JSON.
#[instrument(skip(stats))]
pub fn write_stats(stats: &IndexStats, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, stats)?;
    writer.flush()?;
    info!("statistics written to {}", path.display());
    Ok(())
}
