// Brazilian number and date text handling.
// Everything here is total: malformed input maps to a default value, never to an error.
pub mod amount;
pub mod date;

pub use amount::{format_cents, money_text, parse_amount, parse_cents, AmountInput};
pub use date::{is_before, normalize_date, to_canonical, to_display, today_canonical};
