//! Output sinks for the computed version

use crate::config::OutputConfig;
use crate::domain::Version;
use crate::error::{NextVersionError, Result};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Destination for the computed version
pub trait OutputSink {
    fn emit(&mut self, version: &Version) -> Result<()>;
}

/// Prints the version as a single line
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleSink {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        ConsoleSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, version: &Version) -> Result<()> {
        writeln!(self.writer, "{}", version)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes a `key=value` pipeline annotation
///
/// Appends to `file` when set (for example a CI step output file),
/// otherwise prints the line to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSink {
    pub key: String,
    pub uppercase: bool,
    pub file: Option<PathBuf>,
}

impl AnnotationSink {
    pub fn new(key: impl Into<String>) -> Self {
        AnnotationSink {
            key: key.into(),
            uppercase: false,
            file: None,
        }
    }

    /// Renders the annotation line without a trailing newline
    pub fn render(&self, version: &Version) -> String {
        let value = version.to_string();
        let value = if self.uppercase {
            value.to_uppercase()
        } else {
            value
        };
        format!("{}={}", self.key, value)
    }
}

impl OutputSink for AnnotationSink {
    fn emit(&mut self, version: &Version) -> Result<()> {
        if self.key.is_empty() || self.key.contains(['=', '\n']) {
            return Err(NextVersionError::output(format!(
                "Invalid annotation key: {:?}",
                self.key
            )));
        }

        let line = self.render(version);
        match &self.file {
            Some(path) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        NextVersionError::output(format!("Cannot open {}: {}", path.display(), e))
                    })?;
                writeln!(file, "{}", line)?;
            }
            None => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", line)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// Builds the sinks enabled by the output configuration
pub fn sinks_from_config(config: &OutputConfig) -> Vec<Box<dyn OutputSink>> {
    let mut sinks: Vec<Box<dyn OutputSink>> = Vec::new();
    if config.console {
        sinks.push(Box::new(ConsoleSink::stdout()));
    }
    if config.annotation {
        sinks.push(Box::new(AnnotationSink {
            key: config.annotation_key.clone(),
            uppercase: config.uppercase,
            file: config.annotation_file.clone(),
        }));
    }
    sinks
}

/// Emits to every sink, collecting failures instead of stopping at the first
pub fn emit_all(sinks: &mut [Box<dyn OutputSink>], version: &Version) -> Vec<NextVersionError> {
    sinks
        .iter_mut()
        .filter_map(|sink| sink.emit(version).err())
        .collect()
}
