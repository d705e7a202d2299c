use std::io;
use std::path::Path;

use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::xlsx::export_xlsx;
use crate::store::Store;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Export entries.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"`, or a period/range expression
    ///   (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `start:end`)
    pub fn export(
        store: &mut dyn Store,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        // Positions are assigned over the full load order BEFORE range
        // filtering, so an exported row keeps the handle `del` would take.
        let entries = store.load_entries()?;
        let rows: Vec<EntryExport> = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| match date_bounds {
                None => true,
                Some((start, end)) => e.date >= start && e.date <= end,
            })
            .map(|(i, e)| EntryExport::from_entry(i + 1, e))
            .collect();

        if rows.is_empty() {
            warning("No entries found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }
}
