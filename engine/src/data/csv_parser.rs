use crate::config::{ColumnNames, DataSettings};
use crate::error::{EngineError, EngineResult};
use crate::format::normalize_date;
use csv::{ReaderBuilder, StringRecord, Trim};
use shared::models::{LineItem, RawValue};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads spreadsheet exports of payables/receivables into raw line items.
///
/// Money cells are kept as text so the engine's own parser decides what they
/// are worth; only the due date is normalised here (either `DD/MM/YYYY` or
/// `YYYY-MM-DD` is accepted).
pub struct LineItemCsvParser;

// Header positions resolved once per file.
struct ColumnIndexes {
    description: Option<usize>,
    amount: usize,
    paid_amount: Option<usize>,
    net_amount: Option<usize>,
    due_date: Option<usize>,
}

impl ColumnIndexes {
    fn resolve(headers: &StringRecord, names: &ColumnNames) -> EngineResult<Self> {
        let amount = Self::position(headers, &names.amount).ok_or_else(|| {
            EngineError::CsvDataFormatError(format!("Missing '{}' column in CSV header", names.amount))
        })?;
        Ok(ColumnIndexes {
            description: Self::position(headers, &names.description),
            amount,
            paid_amount: Self::position(headers, &names.paid_amount),
            net_amount: Self::position(headers, &names.net_amount),
            due_date: Self::position(headers, &names.due_date),
        })
    }

    // Spreadsheet exports often start with a UTF-8 BOM.
    fn position(headers: &StringRecord, name: &str) -> Option<usize> {
        headers
            .iter()
            .position(|header| header.trim_start_matches('\u{feff}').trim() == name)
    }
}

impl LineItemCsvParser {
    pub fn load_from_path(path: impl AsRef<Path>, settings: &DataSettings) -> EngineResult<Vec<LineItem>> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Loading line items from CSV");
        let file = File::open(path)?;
        Self::load_from_reader(BufReader::new(file), settings)
    }

    pub fn load_from_reader<R: Read>(reader: R, settings: &DataSettings) -> EngineResult<Vec<LineItem>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(settings.delimiter_byte()?)
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let columns = ColumnIndexes::resolve(&headers, &settings.columns)?;

        let mut items = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2;
            let record = result.map_err(|e| {
                EngineError::CsvDataFormatError(format!("Error reading CSV record at line {}: {}", line, e))
            })?;

            let date = Self::get_field(&record, columns.due_date).and_then(|raw| {
                let canonical = normalize_date(raw);
                if canonical.is_empty() {
                    tracing::warn!(line, value = raw, "Unrecognised due date, leaving it blank");
                    None
                } else {
                    Some(canonical)
                }
            });

            items.push(LineItem {
                description: Self::get_field(&record, columns.description).map(str::to_string),
                amount: Self::get_raw(&record, Some(columns.amount)),
                paid_amount: Self::get_raw(&record, columns.paid_amount),
                net_amount: Self::get_raw(&record, columns.net_amount),
                date,
            });
        }

        tracing::debug!(count = items.len(), "Parsed line items");
        Ok(items)
    }

    // Blank cells count as absent.
    fn get_field(record: &StringRecord, pos: Option<usize>) -> Option<&str> {
        pos.and_then(|pos| record.get(pos)).filter(|value| !value.is_empty())
    }

    fn get_raw(record: &StringRecord, pos: Option<usize>) -> Option<RawValue> {
        Self::get_field(record, pos).map(RawValue::from)
    }
}
