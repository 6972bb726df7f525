//! File-backed xacro sink.
//!
//! The document is streamed into a temporary file beside the target and moved
//! into place on `close`. A run that aborts drops the temporary file, so the
//! target is either the previous complete document or the new one.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use descgen_core::{Block, MacroParams, OutputSink, SinkError};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::writer::{XacroWriter, EXTENSION};

/// Path of the description generated for `serial` in `output_dir`.
pub fn output_path(output_dir: &Path, serial: &str) -> PathBuf {
    output_dir.join(format!("{serial}.{EXTENSION}"))
}

/// Xacro sink writing `<output_dir>/<serial>.urdf.xacro`.
pub struct XacroFile {
    target: PathBuf,
    writer: Option<XacroWriter<BufWriter<NamedTempFile>>>,
}

impl XacroFile {
    /// Start a new description for `serial` in `output_dir`, creating the
    /// directory if needed.
    pub fn create(output_dir: &Path, serial: &str) -> Result<Self, SinkError> {
        fs::create_dir_all(output_dir)?;
        let target = output_path(output_dir, serial);
        let temp = tempfile::Builder::new()
            .prefix(".descgen-")
            .suffix(".tmp")
            .tempfile_in(output_dir)?;
        debug!(temp = %temp.path().display(), target = %target.display(), "opened output");
        let writer = XacroWriter::new(BufWriter::new(temp), serial)?;
        Ok(Self {
            target,
            writer: Some(writer),
        })
    }

    /// Final location of the document.
    pub fn path(&self) -> &Path {
        &self.target
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    fn writer(&mut self) -> Result<&mut XacroWriter<BufWriter<NamedTempFile>>, SinkError> {
        self.writer.as_mut().ok_or(SinkError::Closed)
    }
}

impl OutputSink for XacroFile {
    fn write_include(&mut self, package: &str, file: &str, path: &str) -> Result<(), SinkError> {
        self.writer()?.write_include(package, file, path)
    }

    fn write_macro(
        &mut self,
        name: &str,
        parameters: &MacroParams,
        blocks: &[Block],
    ) -> Result<(), SinkError> {
        self.writer()?.write_macro(name, parameters, blocks)
    }

    fn write_comment(&mut self, text: &str) -> Result<(), SinkError> {
        self.writer()?.write_comment(text)
    }

    fn write_blank_line(&mut self) -> Result<(), SinkError> {
        self.writer()?.write_blank_line()
    }

    fn close(&mut self) -> Result<(), SinkError> {
        let mut writer = self.writer.take().ok_or(SinkError::Closed)?;
        writer.close()?;
        let temp = writer
            .into_inner()
            .into_inner()
            .map_err(|e| e.into_error())?;
        temp.as_file().sync_all()?;

        if self.target.exists() {
            warn!(path = %self.target.display(), "replacing existing description");
        }
        temp.persist(&self.target)
            .map_err(|e| SinkError::Persist {
                path: self.target.display().to_string(),
                message: e.error.to_string(),
            })?;
        debug!(path = %self.target.display(), "description written");
        Ok(())
    }
}
