use crate::format::{is_before, parse_cents};
use shared::models::{Cents, Direction, ItemStatus, LineItem};

/// Money figures of a single row, all in centavos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemFigures {
    pub amount: Cents,
    /// Settled field as typed, possibly larger than `amount`.
    pub settled_raw: Cents,
    /// `max(amount - settled_raw, 0)`
    pub pending: Cents,
    /// Settlement credited to the row, capped at `amount`.
    pub credited: Cents,
}

impl ItemFigures {
    pub fn of(item: &LineItem, direction: Direction) -> Self {
        let amount = parse_cents(item.amount.as_ref());
        let settled_raw = parse_cents(item.settled_value(direction));
        ItemFigures {
            amount,
            settled_raw,
            pending: (amount - settled_raw).max(Cents::ZERO),
            credited: settled_raw.min(amount),
        }
    }

    pub fn is_overdue(&self, due_date: &str, today: &str) -> bool {
        self.pending.is_positive() && is_before(due_date, today)
    }
}

/// Row status relative to `today` (canonical `YYYY-MM-DD`).
pub fn classify(item: &LineItem, direction: Direction, today: &str) -> ItemStatus {
    let figures = ItemFigures::of(item, direction);
    if !figures.pending.is_positive() {
        ItemStatus::Settled
    } else if figures.is_overdue(item.date_or_empty(), today) {
        ItemStatus::Overdue
    } else {
        ItemStatus::Open
    }
}
