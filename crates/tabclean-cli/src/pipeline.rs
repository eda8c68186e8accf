//! Cleaning pipeline with explicit stages.
//!
//! 1. **Load**: read the input file into a typed table
//! 2. **Clean**: clean column names and text cells, coerce numeric columns
//! 3. **Write**: write the table in the format of the output path
//!
//! The output format is checked before anything is loaded, and nothing is
//! written unless every earlier stage succeeded.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use tabclean_ingest::{IngestError, LoadOptions, LoadedTable, load_table};
use tabclean_model::{CleaningProfile, FileFormat, Table};
use tabclean_normalization::{CleanOptions, CleaningReport, clean_table};
use tabclean_output::{OutputError, WriteOptions, output_format, write_table};

use crate::logging::{log_data_enabled, redact_value};
use crate::types::CleanRun;

/// Options shared by every stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Fixed profile. `None` infers it from the output file name.
    pub profile: Option<CleaningProfile>,
    /// Fixed CSV delimiter. `None` sniffs it.
    pub delimiter: Option<u8>,
    pub dry_run: bool,
}

/// Profile for a run writing to `output`.
pub fn resolve_profile(requested: Option<CleaningProfile>, output: &Path) -> CleaningProfile {
    requested.unwrap_or_else(|| CleaningProfile::infer_from_output(output))
}

// ============================================================================
// Stage 1: Load
// ============================================================================

pub fn load(input: &Path, options: &PipelineOptions) -> Result<LoadedTable> {
    let span = info_span!("load", path = %input.display());
    let _guard = span.enter();
    let load_options = LoadOptions {
        delimiter: options.delimiter,
    };
    load_table(input, &load_options).with_context(|| format!("load {}", input.display()))
}

// ============================================================================
// Stage 2: Clean
// ============================================================================

pub fn clean(table: &mut Table, profile: CleaningProfile) -> CleaningReport {
    let options = CleanOptions::new(profile).with_log_values(log_data_enabled());
    let report = clean_table(table, &options);
    if table.height() > 0 {
        let first_row: Vec<String> = table
            .columns()
            .iter()
            .map(|column| column.data.cell_text(0).unwrap_or_default())
            .collect();
        trace!(row = redact_value(&first_row.join(" | ")), "first cleaned row");
    }
    report
}

// ============================================================================
// Stage 3: Write
// ============================================================================

/// Write the cleaned table. CSV output reuses the input delimiter.
pub fn write(table: &Table, output: &Path, delimiter: Option<u8>) -> Result<FileFormat> {
    let options = WriteOptions {
        delimiter: delimiter.unwrap_or(b','),
    };
    write_table(table, output, &options).with_context(|| format!("write {}", output.display()))
}

/// Run load, clean and write for one input file.
pub fn run_pipeline(input: &Path, output: &Path, options: &PipelineOptions) -> Result<CleanRun> {
    let span = info_span!("tabclean", input = %input.display(), output = %output.display());
    let _guard = span.enter();
    let start = Instant::now();

    let output_format =
        output_format(output).with_context(|| format!("write {}", output.display()))?;
    let profile = resolve_profile(options.profile, output);
    info!(profile = profile.as_str(), "profile selected");

    let LoadedTable {
        mut table,
        format: input_format,
        delimiter,
        encoding,
        expanded,
    } = load(input, options)?;

    let report = clean(&mut table, profile);

    let written: Option<PathBuf> = if options.dry_run {
        info!("dry run, output not written");
        None
    } else {
        write(&table, output, delimiter)?;
        Some(output.to_path_buf())
    };

    info!(
        rows = report.rows,
        columns = report.columns.len(),
        changed_cells = report.changed_cells(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(CleanRun {
        input: input.to_path_buf(),
        input_format,
        delimiter,
        encoding,
        expanded,
        output: output.to_path_buf(),
        output_format,
        profile,
        written,
        report,
    })
}

/// Category label of a pipeline error, e.g. `FileAccessError`.
pub fn error_kind(error: &anyhow::Error) -> &'static str {
    for cause in error.chain() {
        if let Some(err) = cause.downcast_ref::<IngestError>() {
            return err.kind();
        }
        if let Some(err) = cause.downcast_ref::<OutputError>() {
            return err.kind();
        }
    }
    "Error"
}
