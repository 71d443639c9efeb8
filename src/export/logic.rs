// src/export/logic.rs

use crate::core::{BibleLog, RosaryLog, SinFilter, SinLog};
use crate::db::pool::StoreProvider;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, ExportTarget};
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the full ordered sequence of one log to `file`.
    ///
    /// Returns the number of exported rows; nothing is written when the log is empty.
    pub fn export<P: StoreProvider>(
        store: &P,
        what: ExportTarget,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        match what {
            ExportTarget::Bible => {
                write_rows(&BibleLog::with_system_clock(store).list(None)?, format, path)
            }
            ExportTarget::Rosary => write_rows(
                &RosaryLog::with_system_clock(store).history(None)?,
                format,
                path,
            ),
            ExportTarget::Sins => write_rows(
                &SinLog::with_system_clock(store).list(SinFilter::All, None)?,
                format,
                path,
            ),
        }
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<usize> {
    if rows.is_empty() {
        warning("No entries to export.");
        return Ok(0);
    }

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }

    Ok(rows.len())
}
