#![forbid(unsafe_code)]
//! The explorer dashboard, one subcommand per page

use clap::{Args, Parser, Subcommand};
use colored::*;
use repscan::cache::FilterCache;
use repscan::charts::{self, Series};
use repscan::cli::{data_table, init_tracing, series_table, stat_table};
use repscan::config::{load_config, ExplorerConfig};
use repscan::dataset::TableDataset;
use repscan::error::ExplorerError;
use repscan::export;
use repscan::pages::{
    accounts, blocks, delegation, tokenomics, transactions, transfers, validator_detail,
    validators, wallet,
};
use repscan::view::{
    footer_showing, footer_showing_short, footer_showing_window, DetailTab, PaginationStub,
    RowsPerPage, TimeRange,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (filter timings, cache hits)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every searchable table page.
#[derive(Args)]
struct TableArgs {
    /// Case-insensitive substring to match across the page's search fields
    #[arg(long)]
    search: Option<String>,

    /// Write the filtered rows to the page's CSV file
    #[arg(long)]
    export: bool,

    /// Directory for the exported CSV
    #[arg(long, requires = "export")]
    out: Option<PathBuf>,

    /// Print the filtered rows as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Latest blocks
    Blocks {
        #[command(flatten)]
        table: TableArgs,
        /// Rows per page: 10, 25, 50 or 100
        #[arg(long)]
        rows: Option<usize>,
    },
    /// Latest transactions, with the volume chart
    Transactions {
        #[command(flatten)]
        table: TableArgs,
        /// Rows per page: 10, 25, 50 or 100
        #[arg(long)]
        rows: Option<usize>,
        /// Chart time range: 7d, 30d, 90d, 180d or 1y
        #[arg(long)]
        range: Option<String>,
    },
    /// Token transfers
    Transfers {
        #[command(flatten)]
        table: TableArgs,
        /// Rows per page: 10, 25, 50 or 100
        #[arg(long)]
        rows: Option<usize>,
    },
    /// Accounts ranked by balance, with the growth chart
    Accounts {
        #[command(flatten)]
        table: TableArgs,
        /// Rows per page: 10, 25, 50 or 100
        #[arg(long)]
        rows: Option<usize>,
        /// Chart time range: 7d, 30d, 90d, 180d or 1y
        #[arg(long)]
        range: Option<String>,
    },
    /// The active validator set
    Validators {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Recent delegation events
    Delegation {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Validator detail: KPI cards and the tabbed table
    Validator {
        /// Detail tab: Performance, Staked, Rewards, Jobs History,
        /// Blocks Mined, Slashing or Benchmarks
        #[arg(long)]
        tab: Option<String>,
        /// Rows per page: 1, 25, 50 or 100
        #[arg(long)]
        rows: Option<usize>,
        /// Print the profile and rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Supply stats and the staked/unstaked split
    Tokenomics {
        /// Chart time range: 7d, 30d, 90d, 180d or 1y
        #[arg(long)]
        range: Option<String>,
        /// Print the supply stats as JSON
        #[arg(long)]
        json: bool,
    },
    /// Wallet overview: balances, delegations and recent activity
    Wallet {
        /// Chart time range: 1d, 7d, 30d, 180d or 360d
        #[arg(long)]
        range: Option<String>,
        /// Print the wallet data as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config()?;
    if !config.display.color {
        colored::control::set_override(false);
    }
    let cache = FilterCache::new(config.export.cache_capacity);

    match &cli.command {
        Commands::Blocks { table, rows } => {
            stub_page(
                &blocks::table(),
                table,
                *rows,
                blocks::TOTAL_PAGES,
                None,
                &config,
                &cache,
            )?;
        }
        Commands::Transactions { table, rows, range } => {
            stub_page(
                &transactions::table(),
                table,
                *rows,
                transactions::TOTAL_PAGES,
                None,
                &config,
                &cache,
            )?;
            if !table.json {
                chart_section(
                    "Number of Transactions",
                    "transaction volume",
                    charts::transaction_volume,
                    range.as_deref(),
                )?;
            }
        }
        Commands::Transfers { table, rows } => {
            let filters = format!(
                "Amount: {}   Network: {}",
                transfers::AMOUNT_OPTIONS[0],
                transfers::NETWORK_OPTIONS[0]
            );
            stub_page(
                &transfers::table(),
                table,
                *rows,
                transfers::TOTAL_PAGES,
                Some(filters),
                &config,
                &cache,
            )?;
        }
        Commands::Accounts { table, rows, range } => {
            stub_page(
                &accounts::table(),
                table,
                *rows,
                accounts::TOTAL_PAGES,
                None,
                &config,
                &cache,
            )?;
            if !table.json {
                chart_section(
                    "Number of Accounts",
                    "account growth",
                    charts::account_growth,
                    range.as_deref(),
                )?;
            }
        }
        Commands::Validators { table } => {
            validators_page(table, &config, &cache)?;
        }
        Commands::Delegation { table } => {
            delegation_page(table, &config, &cache)?;
        }
        Commands::Validator { tab, rows, json } => {
            validator_page(tab.as_deref(), *rows, *json)?;
        }
        Commands::Tokenomics { range, json } => {
            tokenomics_page(range.as_deref(), *json, &config)?;
        }
        Commands::Wallet { range, json } => {
            wallet_page(range.as_deref(), *json, &config)?;
        }
    }

    Ok(())
}

fn print_title(title: &str, network: &str) {
    println!();
    println!(
        "{} {}",
        title.bright_cyan().bold(),
        format!("({})", network).dimmed()
    );
}

fn print_pager(pager: &PaginationStub) {
    let trail = pager.trail().join("  ");
    println!("{}  {}  {}", "Previous".dimmed(), trail, "Next".dimmed());
}

/// The four list pages with the decorative pager: blocks, transactions,
/// transfers and accounts. The footer quotes the raw rows-per-page setting,
/// exactly as the page does.
fn stub_page<T: Clone + Serialize>(
    dataset: &TableDataset<T>,
    args: &TableArgs,
    rows_arg: Option<usize>,
    total_pages: u64,
    context_line: Option<String>,
    config: &ExplorerConfig,
    cache: &FilterCache,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = args.search.as_deref().unwrap_or("");
    let matched = dataset.filter_cached(cache, query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    let mut rows = RowsPerPage::list();
    rows.select(config.display.rows_per_page)?;
    if let Some(n) = rows_arg {
        rows.select(n)?;
    }

    print_title(dataset.title(), &config.chain.network_name);
    if let Some(line) = context_line {
        println!("{}", line.dimmed());
    }
    let end = matched.len().min(rows.selected());
    println!("{}", data_table(dataset.columns(), &matched[..end]));
    println!("{}", footer_showing(rows.selected(), matched.len()).dimmed());
    print_pager(&PaginationStub::new(total_pages));

    export_if_requested(dataset, query, args, config)?;
    Ok(())
}

fn validators_page(
    args: &TableArgs,
    config: &ExplorerConfig,
    cache: &FilterCache,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = validators::table();
    let query = args.search.as_deref().unwrap_or("");
    let matched = dataset.filter_cached(cache, query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    print_title(dataset.title(), &config.chain.network_name);
    let end = matched.len().min(validators::ENTRIES_PER_PAGE);
    println!("{}", data_table(dataset.columns(), &matched[..end]));
    println!(
        "{}",
        footer_showing_window(1, end, matched.len()).dimmed()
    );
    println!("{}  1  2  {}", "Previous".dimmed(), "Next".dimmed());

    export_if_requested(&dataset, query, args, config)?;
    Ok(())
}

fn delegation_page(
    args: &TableArgs,
    config: &ExplorerConfig,
    cache: &FilterCache,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = delegation::table();
    let query = args.search.as_deref().unwrap_or("");
    let matched = dataset.filter_cached(cache, query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    print_title(dataset.title(), &config.chain.network_name);
    println!("{}", data_table(dataset.columns(), &matched));
    // The page quotes its fixed entry count whatever the filter matched
    println!(
        "{}",
        footer_showing_short(delegation::ENTRIES_PER_PAGE).dimmed()
    );
    print_pager(&PaginationStub::new(delegation::TOTAL_PAGES));

    export_if_requested(&dataset, query, args, config)?;
    Ok(())
}

fn validator_page(
    tab_arg: Option<&str>,
    rows_arg: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tab = match tab_arg {
        Some(s) => s.parse::<DetailTab>()?,
        None => DetailTab::Performance,
    };
    let dataset = validator_detail::table();
    let profile = &validator_detail::PROFILE;

    if json {
        let payload = serde_json::json!({
            "profile": profile,
            "tab": tab.label(),
            "rows": dataset.records(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let mut rows = RowsPerPage::detail();
    if let Some(n) = rows_arg {
        rows.select(n)?;
    }

    println!();
    println!(
        "{} {}",
        profile.name.bright_cyan().bold(),
        format!("Rank #{}", profile.rank).yellow()
    );
    println!("{}", stat_table(&profile.stat_rows()));
    println!(
        "{}",
        format!(
            "REP {} weighted   REP {} weighted",
            profile.rep_weighted_1, profile.rep_weighted_2
        )
        .dimmed()
    );

    let tabs = DetailTab::ALL
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(" | ");
    println!("{}", format!("Tabs: {}", tabs).dimmed());

    println!();
    println!("{}", format!("{} Data", tab).bright_cyan().bold());
    let all = dataset.records();
    let end = all.len().min(rows.selected());
    println!("{}", data_table(dataset.columns(), &all[..end]));
    println!("{}", footer_showing(end, all.len()).dimmed());
    println!("{}  1  2  {}", "Previous".dimmed(), "Next".dimmed());

    Ok(())
}

fn tokenomics_page(
    range_arg: Option<&str>,
    json: bool,
    config: &ExplorerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = &tokenomics::STATS;

    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    print_title("Tokenomics", &config.chain.network_name);
    println!("{}", stat_table(&stats.stat_rows()));

    println!();
    println!("{}", "Supply Distribution".bright_cyan().bold());
    println!(
        "{}   {}",
        format!("Staked {}%", stats.staked_percent).bright_green(),
        format!("Unstaked {}%", stats.unstaked_percent()).yellow()
    );

    chart_section(
        "Supply Trend",
        "supply trend",
        charts::supply_trend,
        range_arg,
    )?;
    Ok(())
}

fn wallet_page(
    range_arg: Option<&str>,
    json: bool,
    config: &ExplorerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let overview = &wallet::OVERVIEW;

    if json {
        let payload = serde_json::json!({
            "overview": overview,
            "delegation_breakdown": wallet::breakdown_records(),
            "transfer_activity": wallet::transfer_records(),
            "delegation_actions": wallet::action_records(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print_title("Wallet", &config.chain.network_name);
    println!("{}", format!("📍 Address: {}", overview.address).cyan());
    println!("{}", stat_table(&overview.stat_rows()));

    let breakdown = wallet::breakdown_table();
    println!();
    println!("{}", breakdown.title().bright_cyan().bold());
    println!("{}", data_table(breakdown.columns(), breakdown.records()));

    let activity = wallet::transfer_table();
    println!();
    println!("{}", activity.title().bright_cyan().bold());
    println!("{}", data_table(activity.columns(), activity.records()));

    let actions = wallet::action_table();
    println!();
    println!("{}", actions.title().bright_cyan().bold());
    println!("{}", data_table(actions.columns(), actions.records()));

    chart_section(
        "Balance History",
        "balance history",
        charts::balance_history,
        range_arg,
    )?;
    Ok(())
}

/// Resolve the requested range (default 30d) and print the series table.
fn chart_section(
    heading: &'static str,
    chart: &'static str,
    lookup: fn(TimeRange) -> Option<Series>,
    range_arg: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let range = match range_arg {
        Some(s) => s.parse::<TimeRange>()?,
        None => charts::DEFAULT_RANGE,
    };
    let series = lookup(range).ok_or(ExplorerError::RangeNotOffered {
        chart,
        range: range.to_string(),
    })?;

    println!();
    println!(
        "{} {}",
        heading.bright_cyan().bold(),
        format!("({})", range).dimmed()
    );
    println!("{}", series_table(&series));
    Ok(())
}

fn export_if_requested<T: Clone>(
    dataset: &TableDataset<T>,
    query: &str,
    args: &TableArgs,
    config: &ExplorerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.export {
        return Ok(());
    }
    let dir = export::resolve_dir(args.out.as_deref(), &config.export);
    let path = export::write_csv(&dir, dataset.csv_filename(), &dataset.export_csv(query))?;
    println!();
    println!(
        "{}",
        format!("💾 Exported {}", path.display()).bright_green()
    );
    Ok(())
}
