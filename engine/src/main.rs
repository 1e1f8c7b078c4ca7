// fin-report: KPI summary of a payables/receivables spreadsheet export.
use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use finance_engine::config::{LoggingSettings, Settings};
use finance_engine::data::LineItemCsvParser;
use finance_engine::format::{format_cents, money_text, normalize_date, parse_amount, to_display, today_canonical};
use finance_engine::reconciliation::{aggregate_as_of, classify};
use shared::models::{Direction, KpiSummary, LineItem};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DirectionArg {
    /// Contas a pagar
    Payable,
    /// Contas a receber
    Receivable,
}

impl From<DirectionArg> for Direction {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::Payable => Direction::Payable,
            DirectionArg::Receivable => Direction::Receivable,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fin-report", version, about = "Resumo de contas a pagar/receber a partir de uma planilha CSV")]
struct Cli {
    /// CSV export with a header row
    #[arg(short, long)]
    input: PathBuf,

    /// Ledger side (overrides config file)
    #[arg(short, long, value_enum)]
    direction: Option<DirectionArg>,

    /// Path to a JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reference date, DD/MM/YYYY or YYYY-MM-DD (defaults to today)
    #[arg(long)]
    as_of: Option<String>,

    /// Print one line per item with its status
    #[arg(long)]
    rows: bool,

    /// Log filter (overrides config file and RUST_LOG)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(settings: &LoggingSettings, override_level: Option<&str>) {
    let filter = match override_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level)),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if settings.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_rows(items: &[LineItem], direction: Direction, today: &str) {
    for item in items {
        let status = classify(item, direction, today);
        let due = to_display(item.date_or_empty());
        println!(
            "{:<30} {:>16} {:>16} {:<10} {:?}",
            item.description.as_deref().unwrap_or("-"),
            money_text(parse_amount(item.amount.as_ref())),
            money_text(parse_amount(item.settled_value(direction))),
            if due.is_empty() { "-" } else { due.as_str() },
            status,
        );
    }
}

fn print_summary(summary: &KpiSummary, direction: Direction, today: &str) -> Result<()> {
    let label = match direction {
        Direction::Payable => "Pago",
        Direction::Receivable => "Recebido",
    };
    println!("Referência: {}", to_display(today));
    println!("Total:      R$ {}", format_cents(summary.total));
    println!("{:<11} R$ {}", format!("{}:", label), format_cents(summary.settled));
    println!("Em aberto:  R$ {}", format_cents(summary.outstanding));
    println!("Vencidos:   {}", summary.overdue_count);
    println!("{}", serde_json::to_string_pretty(summary).context("Failed to serialise summary")?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    init_tracing(&settings.logging, cli.log_level.as_deref());

    let direction = cli.direction.map(Direction::from).unwrap_or(settings.direction);
    let today = match cli.as_of.as_deref() {
        Some(raw) => {
            let canonical = normalize_date(raw);
            if canonical.is_empty() {
                bail!("--as-of must be DD/MM/YYYY or YYYY-MM-DD, got '{}'", raw);
            }
            canonical
        }
        None => today_canonical(),
    };

    info!(input = %cli.input.display(), ?direction, %today, "Starting fin-report");

    let items = LineItemCsvParser::load_from_path(&cli.input, &settings.data)
        .with_context(|| format!("Failed to load '{}'", cli.input.display()))?;

    if cli.rows {
        print_rows(&items, direction, &today);
    }

    let summary = aggregate_as_of(&items, direction, &today);
    print_summary(&summary, direction, &today)?;

    info!(items = summary.item_count, overdue = summary.overdue_count, "Report finished");
    Ok(())
}
