use std::{fs::File, io::Read, str::FromStr};

use anyhow::{Context, Error, Result};
use chrono::Local;
use csv::Reader;
use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, info, warn};

use crate::{
    app::calc::aggregate,
    models::{
        DisplayRow, DisplayTotals, Evaluation, LineItem, LineItemId, MarginMode, Summary,
        SummaryDisplay, WithholdingClass,
    },
};

/// Rows added and rows dropped for an unknown mode or class.
#[derive(Clone, Copy, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct ImportOutcome {
    imported: usize,
    skipped: usize,
}

impl ImportOutcome {
    /// A message for the user when rows were dropped.
    pub fn notice(&self) -> Option<String> {
        if self.skipped == 0 {
            return None;
        }
        Some(format!(
            "Imported {} line item(s), skipped {} row(s) with an unknown margin mode or withholding class",
            self.imported, self.skipped
        ))
    }
}

/// The editable collection of line items. Always holds at least one row.
#[derive(Clone, Debug)]
pub struct Portfolio {
    rows: Vec<LineItem>,
    next_id: u64,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new()
    }
}

impl Portfolio {
    pub fn new() -> Self {
        let mut portfolio = Self {
            rows: Vec::new(),
            next_id: 1,
        };
        portfolio.add_row();
        portfolio
    }

    pub fn rows(&self) -> &Vec<LineItem> {
        &self.rows
    }

    pub fn row_mut(&mut self, id: LineItemId) -> Option<&mut LineItem> {
        self.rows.iter_mut().find(|row| *row.id() == id)
    }

    fn allocate_id(&mut self) -> LineItemId {
        let id = LineItemId::new(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn add_row(&mut self) -> LineItemId {
        let id = self.allocate_id();
        self.rows.push(LineItem::blank(id));
        id
    }

    /// Removes a row unless it is the last one left.
    pub fn remove_row(&mut self, id: LineItemId) -> bool {
        if self.rows.len() <= 1 {
            debug!(%id, "refusing to remove the last line item");
            return false;
        }

        let before = self.rows.len();
        self.rows.retain(|row| *row.id() != id);
        before != self.rows.len()
    }

    /// Recomputes every row from scratch.
    pub fn evaluate(&self) -> Evaluation {
        aggregate(&self.rows)
    }

    pub fn import_line_items(&mut self, path: &str) -> Result<ImportOutcome> {
        let path = shellexpand::tilde(path);
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open CSV file at path: {}", path))?;

        let outcome = self.import_reader(file)?;
        info!(
            path = %path,
            imported = outcome.imported,
            skipped = outcome.skipped,
            "imported line items"
        );
        Ok(outcome)
    }

    /// Reads `base,margin_mode,margin_value,withholding_class` records. Rows
    /// with an unknown mode or class are skipped.
    pub fn import_reader<R: Read>(&mut self, source: R) -> Result<ImportOutcome> {
        let mut reader = Reader::from_reader(source);
        let mut imported = Vec::new();
        let mut skipped = 0;

        for (row_idx, record) in reader.records().enumerate() {
            let rec = record
                .with_context(|| format!("Failed to read CSV record at row {}", row_idx + 1))?;

            if rec.len() < 4 {
                return Err(Error::msg(format!(
                    "Invalid CSV format at row {}: expected at least 4 columns, found {}",
                    row_idx + 1,
                    rec.len()
                )));
            }

            let margin_mode = match MarginMode::from_str(rec[1].trim()) {
                Ok(mode) => mode,
                Err(_) => {
                    warn!(
                        row = row_idx + 1,
                        value = &rec[1],
                        "skipping row with unknown margin mode"
                    );
                    skipped += 1;
                    continue;
                }
            };

            let withholding_class = match WithholdingClass::from_str(rec[3].trim()) {
                Ok(class) => class,
                Err(_) => {
                    warn!(
                        row = row_idx + 1,
                        value = &rec[3],
                        "skipping row with unknown withholding class"
                    );
                    skipped += 1;
                    continue;
                }
            };

            imported.push((
                rec[0].trim().to_string(),
                margin_mode,
                rec[2].trim().to_string(),
                withholding_class,
            ));
        }

        if imported.is_empty() {
            return Ok(ImportOutcome::new(0, skipped));
        }

        if self.rows.len() == 1 && self.rows[0].is_blank() {
            self.rows.clear();
        }

        let count = imported.len();
        for (base_amount, margin_mode, margin_value, withholding_class) in imported {
            let id = self.allocate_id();
            self.rows.push(LineItem::new(
                id,
                base_amount,
                margin_mode,
                margin_value,
                withholding_class,
            ));
        }

        Ok(ImportOutcome::new(count, skipped))
    }

    pub fn summary(&self) -> Summary {
        let evaluation = self.evaluate();
        let display = SummaryDisplay::new(
            evaluation.metrics().iter().map(DisplayRow::from).collect(),
            DisplayTotals::from(evaluation.totals()),
        );

        Summary::new(
            Local::now(),
            evaluation.metrics().clone(),
            *evaluation.totals(),
            display,
        )
    }

    pub fn export_summary(&self, path: &str) -> Result<String> {
        let path = shellexpand::tilde(path).to_string();
        let file = File::create(&path)
            .with_context(|| format!("Failed to create summary file at path: {}", path))?;

        serde_json::to_writer_pretty(file, &self.summary())
            .with_context(|| format!("Failed to write summary to {}", path))?;

        info!(path = %path, rows = self.rows.len(), "exported summary");
        Ok(path)
    }
}
