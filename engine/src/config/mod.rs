pub mod settings;

pub use settings::{ColumnNames, DataSettings, LoggingSettings, Settings};
