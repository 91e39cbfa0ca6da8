use std::io::{stderr, stdout, BufWriter};
use std::process::exit;

use anyhow::Result;
use tracing::{debug, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use bank_operations::models::Transaction;
use bank_operations::normalizer::Normalizer;
use bank_operations::options::ReportOptions;
use bank_operations::query::{
    count_by_category, filter_by_currency, filter_by_state, limit, search_by_description, sort_by_date
};
use bank_operations::rates::total_in_rub;
use bank_operations::report::ReportRenderer;
use bank_operations::sources::load_rows;

const USAGE: &str = "Usage: bank-operations [input].json|csv|xlsx [key=value ...] > [report].txt
Options:
  state=EXECUTED|CANCELED|PENDING   keep one operation state
  sort=asc|desc                     sort by date
  currency=RUB                      keep one currency
  search=word                       keep descriptions containing a word
  limit=N                           show at most N operations
  categories=a,b,c                  count operations per description category
  rates=USD:90.5,EUR:98.1           print the RUB total using these rates
  log=error|warn|info|debug|trace   log level on stderr (default: error)";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("{USAGE}");
        exit(1);
    }

    let options = match ReportOptions::from_args(&args) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            exit(1);
        }
    };

    setup_logging(options.log_level);
    debug!("Running with {options:?}");

    let rows = load_rows(&options.input);
    let transactions = Normalizer::new().normalize_all(&rows);

    if transactions.is_empty() {
        info!("No operations could be loaded from {}", options.input.display());
    }

    let selected = select_transactions(&transactions, &options);
    let shown = limit(&selected, options.limit);

    write_report_to_stdout(&selected, &shown, &options)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The report goes to stdout, so logging is kept on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

/// Runs the stages the options ask for, in a fixed order: state, date sort, currency, search.
fn select_transactions(transactions: &[Transaction], options: &ReportOptions) -> Vec<Transaction> {
    let mut selected = transactions.to_vec();

    if let Some(state) = options.state {
        selected = filter_by_state(&selected, state);
        info!("Operations filtered by state '{state}': {} left", selected.len());
    }

    if let Some(order) = options.sort {
        selected = sort_by_date(&selected, order);
        info!("Operations sorted by date ({order:?})");
    }

    if let Some(code) = &options.currency {
        selected = filter_by_currency(selected, code).collect();
        info!("Operations filtered by currency '{code}': {} left", selected.len());
    }

    if let Some(needle) = &options.search {
        selected = search_by_description(&selected, needle);
        info!("Operations filtered by description '{needle}': {} left", selected.len());
    }

    selected
}

fn write_report_to_stdout(selected: &[Transaction], shown: &[Transaction], options: &ReportOptions) -> Result<()> {
    let mut renderer = ReportRenderer::new(BufWriter::new(stdout().lock()));

    renderer.write_transactions(shown, options.limit.map(|_| selected.len()))?;

    if !options.categories.is_empty() {
        renderer.write_category_counts(&count_by_category(selected, &options.categories))?;
    }

    if !options.rates.is_empty() {
        renderer.write_total_in_rub(total_in_rub(shown, &options.rates))?;
    }

    renderer.finish()?;

    Ok(())
}
