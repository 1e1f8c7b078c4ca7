// Engine library root
// Pure pt-BR normalisation core (format, masks, reconciliation) plus the
// adapters the fin-report binary needs (config, data, error).

pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod masks;
pub mod reconciliation;

pub use error::{EngineError, EngineResult};
pub use format::{parse_amount, to_canonical, to_display};
pub use masks::{mask_date, mask_money};
pub use reconciliation::{aggregate, aggregate_as_of};
