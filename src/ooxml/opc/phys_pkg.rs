//! Physical package writer (the ZIP container).
//!
//! Stores named entries in a ZIP archive. Every write is wrapped as a
//! packaging failure naming the entry, and the first failure stops the
//! caller; entries already written are not rolled back.

use crate::ooxml::error::{DocxError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Seek, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

/// Compression used for package entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// Deflate every entry (what Word itself produces)
    #[default]
    Deflated,
    /// Store entries uncompressed
    Stored,
}

impl Compression {
    fn method(self) -> zip::CompressionMethod {
        match self {
            Self::Deflated => zip::CompressionMethod::Deflated,
            Self::Stored => zip::CompressionMethod::Stored,
        }
    }
}

/// Physical package writer for creating OPC packages.
pub struct PhysPkgWriter<W: Write + Seek> {
    archive: ZipWriter<W>,
    compression: Compression,
    entries: Vec<String>,
}

impl PhysPkgWriter<Cursor<Vec<u8>>> {
    /// Create a new package writer that writes to memory.
    pub fn in_memory(compression: Compression) -> Self {
        Self::new(Cursor::new(Vec::new()), compression)
    }
}

impl<W: Write + Seek> PhysPkgWriter<W> {
    pub fn new(writer: W, compression: Compression) -> Self {
        Self {
            archive: ZipWriter::new(writer),
            compression,
            entries: Vec::new(),
        }
    }

    /// Write one entry.
    ///
    /// # Arguments
    /// * `name` - Entry name inside the container, forward-slash separated
    /// * `blob` - The entry's bytes
    pub fn write(&mut self, name: &str, blob: &[u8]) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(self.compression.method());
        self.archive
            .start_file(name, options)
            .map_err(|e| DocxError::packaging(name, e))?;
        self.archive
            .write_all(blob)
            .map_err(|e| DocxError::packaging(name, e))?;
        self.entries.push(name.to_string());
        debug!("wrote package part '{}' ({} bytes)", name, blob.len());
        Ok(())
    }

    /// Names of the entries written so far, in order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Write the ZIP central directory and return the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.archive
            .finish()
            .map_err(|e| DocxError::packaging("central directory", e))
    }
}
