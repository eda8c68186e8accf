use std::path::PathBuf;

use tabclean_ingest::SourceEncoding;
use tabclean_model::{CleaningProfile, FileFormat};
use tabclean_normalization::CleaningReport;

/// Outcome of one `tabclean` run.
#[derive(Debug)]
pub struct CleanRun {
    pub input: PathBuf,
    pub input_format: FileFormat,
    /// Delimiter and encoding of CSV input.
    pub delimiter: Option<u8>,
    pub encoding: Option<SourceEncoding>,
    /// Whether an embedded CSV export was split into columns.
    pub expanded: bool,
    pub output: PathBuf,
    pub output_format: FileFormat,
    pub profile: CleaningProfile,
    /// `None` for a dry run.
    pub written: Option<PathBuf>,
    pub report: CleaningReport,
}
