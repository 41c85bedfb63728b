//! Download sinks: write the PNG to a directory or print it as a data URI.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use super::{Download, DownloadSink, ExportError};

/// Writes `<dir>/<file name>`, creating the directory if needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, download: &Download) -> Result<Option<PathBuf>, ExportError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&download.file_name);
        std::fs::write(&path, &download.png)?;
        tracing::info!(path = %path.display(), bytes = download.png.len(), "Badge saved");
        Ok(Some(path))
    }
}

/// Writes one `data:image/png;base64,...` line per download.
pub struct DataUriSink<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> DataUriSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write> DownloadSink for DataUriSink<W> {
    fn deliver(&self, download: &Download) -> Result<Option<PathBuf>, ExportError> {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(out, "{}", download.data_uri())?;
        out.flush()?;
        tracing::info!(file_name = %download.file_name, "Badge written as data URI");
        Ok(None)
    }
}
