use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// A cell as supplied by the caller: either a number already or text typed
/// by a person (`"1.234,56"`). Absent or null cells are modelled as `None`
/// at the field level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Money in minor units (centavos).
///
/// Serialised as a plain decimal number of reais so JSON consumers see
/// `150.5` rather than `15050`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn new(minor_units: i64) -> Self {
        Cents(minor_units)
    }

    /// Rounds half away from zero to the nearest centavo. Non-finite input
    /// becomes zero and out-of-range input saturates.
    pub fn from_reais(value: f64) -> Self {
        if !value.is_finite() {
            return Cents::ZERO;
        }
        Cents((value * 100.0).round() as i64)
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub fn to_reais(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl From<Cents> for f64 {
    fn from(value: Cents) -> Self {
        value.to_reais()
    }
}

impl From<f64> for Cents {
    fn from(value: f64) -> Self {
        Cents::from_reais(value)
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Cents) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Cents {
    type Output = Cents;

    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Which side of the ledger a batch of items belongs to. It decides which
/// field counts as the settled counterpart of `amount`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Contas a pagar, settled by `valorPago`.
    #[default]
    Payable,
    /// Contas a receber, settled by `valorLiquido`.
    Receivable,
}

/// One payable or receivable row as handed over by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, alias = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "valor")]
    pub amount: Option<RawValue>,
    #[serde(default, rename = "valorPago", alias = "paidAmount")]
    pub paid_amount: Option<RawValue>,
    #[serde(default, rename = "valorLiquido", alias = "netAmount")]
    pub net_amount: Option<RawValue>,
    #[serde(default, alias = "data", alias = "vencimento")]
    pub date: Option<String>,
}

impl LineItem {
    pub fn new(amount: impl Into<RawValue>) -> Self {
        LineItem {
            amount: Some(amount.into()),
            ..LineItem::default()
        }
    }

    pub fn with_paid(mut self, paid: impl Into<RawValue>) -> Self {
        self.paid_amount = Some(paid.into());
        self
    }

    pub fn with_net(mut self, net: impl Into<RawValue>) -> Self {
        self.net_amount = Some(net.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn settled_value(&self, direction: Direction) -> Option<&RawValue> {
        match direction {
            Direction::Payable => self.paid_amount.as_ref(),
            Direction::Receivable => self.net_amount.as_ref(),
        }
    }

    /// Due date in canonical form, empty when absent.
    pub fn date_or_empty(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }
}

/// Per-row reconciliation state shown in the dashboard tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Settled,
    Open,
    Overdue,
}

/// KPI cards for one batch of payables or receivables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total: Cents,
    pub settled: Cents,
    pub outstanding: Cents,
    pub overdue_count: usize,
    pub item_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_from_reais_rounds_to_nearest() {
        assert_eq!(Cents::from_reais(1234.56), Cents::new(123456));
        assert_eq!(Cents::from_reais(0.005), Cents::new(1));
        assert_eq!(Cents::from_reais(-12.34), Cents::new(-1234));
        assert_eq!(Cents::from_reais(f64::NAN), Cents::ZERO);
        assert_eq!(Cents::from_reais(f64::INFINITY), Cents::ZERO);
    }

    #[test]
    fn test_cents_display() {
        assert_eq!(Cents::new(15000).to_string(), "150.00");
        assert_eq!(Cents::new(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_cents_arithmetic_saturates() {
        let max = Cents::new(i64::MAX);
        assert_eq!(max + Cents::new(1), max);
        assert_eq!(Cents::new(300) - Cents::new(500), Cents::new(-200));
    }

    #[test]
    fn test_line_item_from_dashboard_json() {
        let json = r#"{"valor":"50,00","valorPago":50,"data":"2099-01-01"}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.amount, Some(RawValue::Text("50,00".to_string())));
        assert_eq!(item.paid_amount, Some(RawValue::Number(50.0)));
        assert_eq!(item.net_amount, None);
        assert_eq!(item.date_or_empty(), "2099-01-01");
    }

    #[test]
    fn test_line_item_tolerates_nulls_and_missing_fields() {
        let item: LineItem = serde_json::from_str(r#"{"amount":null}"#).unwrap();
        assert_eq!(item, LineItem::default());
        assert_eq!(item.date_or_empty(), "");
    }

    #[test]
    fn test_settled_value_follows_direction() {
        let item = LineItem::new("10,00").with_paid("4,00").with_net("9,50");
        assert_eq!(item.settled_value(Direction::Payable), Some(&RawValue::from("4,00")));
        assert_eq!(item.settled_value(Direction::Receivable), Some(&RawValue::from("9,50")));
    }

    #[test]
    fn test_kpi_summary_serialises_reais() {
        let summary = KpiSummary {
            total: Cents::new(15000),
            settled: Cents::new(5000),
            outstanding: Cents::new(10000),
            overdue_count: 1,
            item_count: 2,
        };
        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(value["total"], 150.0);
        assert_eq!(value["overdueCount"], 1);
    }
}
