//! Destinations for report lines

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::config::OutputConfig;

/// Receives the human-readable lines produced by the reporter
pub trait ReportSink {
    /// Write one line; the sink adds the line terminator
    fn report_line(&mut self, line: &str) -> io::Result<()>;
}

/// Writes lines to standard output
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn report_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()
    }
}

/// Mirrors lines into a file
///
/// The file is truncated when opened unless `append` is set.
#[derive(Debug)]
pub struct FileSink {
    file: File,
}

impl FileSink {
    pub fn open(path: &Path, append: bool) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)?;

        Ok(Self { file })
    }
}

impl ReportSink for FileSink {
    fn report_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.file, "{}", line)?;
        self.file.flush()
    }
}

/// Forwards every line to each inner sink
///
/// All sinks receive the line even if an earlier one fails; the first error
/// is returned.
#[derive(Default)]
pub struct TeeSink {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl TeeSink {
    pub fn new(sinks: Vec<Box<dyn ReportSink>>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: Box<dyn ReportSink>) {
        self.sinks.push(sink);
    }
}

impl ReportSink for TeeSink {
    fn report_line(&mut self, line: &str) -> io::Result<()> {
        let mut first_error = None;
        for sink in &mut self.sinks {
            if let Err(e) = sink.report_line(line) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// Console sink, mirrored into the output file when one is configured
pub fn build_sink(output: &OutputConfig) -> io::Result<TeeSink> {
    let mut sink = TeeSink::new(vec![Box::new(ConsoleSink)]);
    if let Some(path) = &output.file {
        sink.push(Box::new(FileSink::open(path, output.append)?));
    }
    Ok(sink)
}

/// Keeps lines in memory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl ReportSink for MemorySink {
    fn report_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
