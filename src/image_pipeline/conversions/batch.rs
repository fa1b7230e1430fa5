use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::conversions::raw_to_tiff::RawToTiffPipeline;
use crate::image_pipeline::tiff::ConversionConfig;

/// A single file that failed during a directory run, with the reason.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: ConversionError,
}

/// Outcome of a `process_path` run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<PathBuf>,
    pub failed: Vec<FileFailure>,
}

fn is_raw_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("raw"))
}

/// Converts a single RAW file, or every `.raw` file in a directory.
///
/// In directory mode a per-file failure is logged and recorded in the report
/// while the remaining files are still processed; one malformed dump never
/// aborts the batch. For a single explicit file the error propagates to the
/// caller instead, since there is no next file to continue with.
pub fn process_path(path: &Path, config: ConversionConfig) -> Result<BatchReport> {
    let pipeline = RawToTiffPipeline::new(config);

    if path.is_dir() {
        let mut files = Vec::new();
        let entries = fs::read_dir(path).map_err(|e| {
            ConversionError::FileAccessError(format!("{}: {}", path.display(), e))
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| {
                ConversionError::FileAccessError(format!("{}: {}", path.display(), e))
            })?;
            let candidate = entry.path();
            if candidate.is_file() && is_raw_file(&candidate) {
                files.push(candidate);
            }
        }
        files.sort();

        info!(
            dir = %path.display(),
            count = files.len(),
            "Processing RAW files"
        );

        let mut report = BatchReport::default();
        for file in files {
            match pipeline.process_file(&file) {
                Ok(()) => report.succeeded.push(file),
                Err(e) => {
                    error!(
                        file = %file.display(),
                        error = %e,
                        "Conversion failed, continuing with remaining files"
                    );
                    report.failed.push(FileFailure {
                        path: file,
                        error: e,
                    });
                }
            }
        }
        Ok(report)
    } else if path.is_file() {
        pipeline.process_file(path)?;
        Ok(BatchReport {
            succeeded: vec![path.to_path_buf()],
            failed: Vec::new(),
        })
    } else {
        Err(ConversionError::FileAccessError(format!(
            "{}: not a file or a directory",
            path.display()
        )))
    }
}
