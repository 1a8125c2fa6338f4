//! File-level entry point: read an NCGR/NCLR pair from disk and render it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{NitroError, Result};
use crate::formats::{load_palette, load_tile_source, NcgrHeader, Palette};
use crate::graphics::{render, PixelGrid};

/// Everything produced by one conversion.
#[derive(Clone, Debug)]
pub struct Conversion {
    pub header: NcgrHeader,
    pub palette: Palette,
    pub grid: PixelGrid,
}

/// Collects the two source paths. Nothing is read until [`Converter::run`].
#[derive(Clone, Debug, Default)]
pub struct Converter {
    ncgr_path: Option<PathBuf>,
    nclr_path: Option<PathBuf>,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ncgr<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.ncgr_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn nclr<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.nclr_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn run(&self) -> Result<Conversion> {
        let ncgr_path = self
            .ncgr_path
            .as_ref()
            .ok_or(NitroError::MissingInput { input: "NCGR" })?;
        let nclr_path = self
            .nclr_path
            .as_ref()
            .ok_or(NitroError::MissingInput { input: "NCLR" })?;

        debug!(ncgr = %ncgr_path.display(), nclr = %nclr_path.display(), "converting");

        let ncgr_bytes = fs::read(ncgr_path)?;
        let nclr_bytes = fs::read(nclr_path)?;

        let source = load_tile_source(&ncgr_bytes)?;
        let palette = load_palette(&nclr_bytes)?;
        let grid = render(&source.header, source.payload, &palette)?;

        Ok(Conversion {
            header: source.header,
            palette,
            grid,
        })
    }

    pub fn convert(&self) -> Result<PixelGrid> {
        self.run().map(|conversion| conversion.grid)
    }
}

/// Convert one NCGR/NCLR pair into a pixel grid.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(ncgr_path: P, nclr_path: Q) -> Result<PixelGrid> {
    Converter::new().ncgr(ncgr_path).nclr(nclr_path).convert()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sources_are_reported_before_reading() {
        match Converter::new().nclr("does-not-exist.nclr").run() {
            Err(NitroError::MissingInput { input }) => assert_eq!(input, "NCGR"),
            other => panic!("unexpected result: {:?}", other),
        }
        match Converter::new().ncgr("does-not-exist.ncgr").run() {
            Err(NitroError::MissingInput { input }) => assert_eq!(input, "NCLR"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let result = convert("does-not-exist.ncgr", "does-not-exist.nclr");
        assert!(matches!(result, Err(NitroError::Io(_))));
    }
}
