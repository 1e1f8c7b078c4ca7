// Payable/receivable reconciliation: folds line items into the dashboard KPI cards.
pub mod status;

pub use status::{classify, ItemFigures};

use crate::format::today_canonical;
use shared::models::{Direction, KpiSummary, LineItem};

/// Summarises `items` against today's date on the local clock.
///
/// Today is read once, so a pass that runs across midnight still sees a
/// single date for every item.
pub fn aggregate(items: &[LineItem], direction: Direction) -> KpiSummary {
    let today = today_canonical();
    aggregate_as_of(items, direction, &today)
}

/// Same as [`aggregate`] with an explicit reference date (`YYYY-MM-DD`).
///
/// Money is summed in centavos. For every item: the amount adds to `total`,
/// the settled field (capped at the amount) adds to `settled`, the remainder
/// (never below zero) adds to `outstanding`, and a remainder on a due date
/// strictly before `today` counts as overdue. A missing due date compares as
/// the empty string, which sorts before any date.
pub fn aggregate_as_of(items: &[LineItem], direction: Direction, today: &str) -> KpiSummary {
    let summary = items
        .iter()
        .fold(KpiSummary::default(), |mut acc, item| {
            let figures = ItemFigures::of(item, direction);
            acc.total += figures.amount;
            acc.settled += figures.credited;
            acc.outstanding += figures.pending;
            if figures.is_overdue(item.date_or_empty(), today) {
                acc.overdue_count += 1;
            }
            acc.item_count += 1;
            acc
        });

    tracing::debug!(
        ?direction,
        today,
        items = summary.item_count,
        total = %summary.total,
        settled = %summary.settled,
        outstanding = %summary.outstanding,
        overdue = summary.overdue_count,
        "Aggregated line items"
    );
    summary
}

pub fn summarize_payables(items: &[LineItem]) -> KpiSummary {
    aggregate(items, Direction::Payable)
}

pub fn summarize_receivables(items: &[LineItem]) -> KpiSummary {
    aggregate(items, Direction::Receivable)
}
