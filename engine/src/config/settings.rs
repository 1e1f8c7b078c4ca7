// Report settings, loaded from a JSON file or left at their defaults.
use crate::error::{EngineError, EngineResult};
use serde::Deserialize;
use shared::models::Direction;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Side of the ledger the CSV export describes.
    pub direction: Direction,
    pub data: DataSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DataSettings {
    pub csv_delimiter: String, // Should be char, but JSON string is easier
    pub columns: ColumnNames,
}

/// Header names of the spreadsheet export.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ColumnNames {
    pub description: String,
    pub amount: String,
    pub paid_amount: String,
    pub net_amount: String,
    pub due_date: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for DataSettings {
    fn default() -> Self {
        DataSettings {
            csv_delimiter: ";".to_string(),
            columns: ColumnNames::default(),
        }
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        ColumnNames {
            description: "Descrição".to_string(),
            amount: "Valor".to_string(),
            paid_amount: "Valor Pago".to_string(),
            net_amount: "Valor Líquido".to_string(),
            due_date: "Vencimento".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// Reads settings from `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> EngineResult<Self> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };
        let contents = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let settings = Self::from_json(&contents).map_err(|e| {
            EngineError::ConfigError(format!("Failed to parse '{}': {}", path.display(), e))
        })?;
        settings.data.delimiter_byte()?;
        Ok(settings)
    }

    pub fn from_json(contents: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}

impl DataSettings {
    pub fn delimiter_byte(&self) -> EngineResult<u8> {
        match self.csv_delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(EngineError::ConfigError(format!(
                "CSV delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.direction, Direction::Payable);
        assert_eq!(settings.data.delimiter_byte().unwrap(), b';');
        assert_eq!(settings.data.columns.amount, "Valor");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(
            r#"{"direction":"receivable","data":{"columns":{"amount":"Valor Bruto"}}}"#,
        )
        .unwrap();
        assert_eq!(settings.direction, Direction::Receivable);
        assert_eq!(settings.data.csv_delimiter, ";");
        assert_eq!(settings.data.columns.amount, "Valor Bruto");
        assert_eq!(settings.data.columns.due_date, "Vencimento");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"data":{{"csv_delimiter":","}},"logging":{{"level":"debug","json":true}}}}"#).unwrap();
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.data.delimiter_byte().unwrap(), b',');
        assert!(settings.logging.json);
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn test_load_rejects_bad_delimiter() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"data":{{"csv_delimiter":";;"}}}}"#).unwrap();
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("single ASCII character"));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = Settings::load(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }

    #[test]
    fn test_load_invalid_json_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
