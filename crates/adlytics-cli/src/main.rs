//! Adlytics CLI - campaign performance report generator

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use adlytics::prelude::*;

#[derive(Parser)]
#[command(name = "adlytics")]
#[command(author, version, about = "Campaign performance report generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline and write one CSV per report table
    Generate {
        /// Campaign performance export (CSV)
        #[arg(long)]
        campaign: PathBuf,

        /// Seller business report export (CSV)
        #[arg(long)]
        business: Option<PathBuf>,

        /// Output directory for the table CSVs
        #[arg(long, default_value = "report")]
        out: PathBuf,

        /// Start of the inclusive date filter (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// End of the inclusive date filter (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Portfolio view for the trends table
        #[arg(long, value_enum, default_value_t = PortfolioArg::Overall)]
        portfolio: PortfolioArg,

        /// Time period view for the trends table
        #[arg(long, value_enum, default_value_t = PeriodArg::Monthly)]
        period: PeriodArg,

        /// Also dump every table as JSON to stdout
        #[arg(long)]
        json: bool,
    },

    /// Print the Executive Summary to stdout
    Summary {
        /// Campaign performance export (CSV)
        #[arg(long)]
        campaign: PathBuf,

        /// Seller business report export (CSV)
        #[arg(long)]
        business: Option<PathBuf>,

        /// Start of the inclusive date filter (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// End of the inclusive date filter (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PortfolioArg {
    Overall,
    Jn,
    NonJn,
}

impl From<PortfolioArg> for PortfolioFilter {
    fn from(arg: PortfolioArg) -> Self {
        match arg {
            PortfolioArg::Overall => PortfolioFilter::Overall,
            PortfolioArg::Jn => PortfolioFilter::Jn,
            PortfolioArg::NonJn => PortfolioFilter::NonJn,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PeriodArg {
    Daily,
    Weekly,
    Monthly,
}

impl From<PeriodArg> for Granularity {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Daily => Granularity::Daily,
            PeriodArg::Weekly => Granularity::Weekly,
            PeriodArg::Monthly => Granularity::Monthly,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            campaign,
            business,
            out,
            start,
            end,
            portfolio,
            period,
            json,
        } => {
            let options = report_options(start, end, portfolio.into(), period.into())?;
            generate(&campaign, business.as_deref(), &out, &options, json)
        }
        Commands::Summary {
            campaign,
            business,
            start,
            end,
        } => {
            let options =
                report_options(start, end, PortfolioFilter::Overall, Granularity::Monthly)?;
            summary(&campaign, business.as_deref(), &options)
        }
    }
}

fn report_options(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    portfolio: PortfolioFilter,
    granularity: Granularity,
) -> Result<ReportOptions> {
    let date_range = match (start, end) {
        (None, None) => None,
        // An open end keeps the range inclusive of everything on that side
        (start, end) => Some(
            DateRange::new(
                start.unwrap_or(NaiveDate::MIN),
                end.unwrap_or(NaiveDate::MAX),
            )
            .context("Invalid date filter")?,
        ),
    };
    Ok(ReportOptions {
        date_range,
        portfolio,
        granularity,
        ..ReportOptions::default()
    })
}

fn run_pipeline(
    campaign: &Path,
    business: Option<&Path>,
    options: &ReportOptions,
) -> Result<ReportBundle> {
    let bundle = generate_report(campaign, business, options)
        .with_context(|| format!("Failed to generate report from '{}'", campaign.display()))?;

    let skipped = bundle.campaign_summary.skipped()
        + bundle.business_summary.as_ref().map_or(0, RunSummary::skipped);
    if skipped > 0 {
        eprintln!("Skipped {} malformed input row(s):", skipped);
        for skip in bundle
            .campaign_summary
            .skips
            .iter()
            .chain(bundle.business_summary.iter().flat_map(|s| s.skips.iter()))
        {
            eprintln!("  {}", skip);
        }
    }
    for gap in &bundle.join_gaps {
        eprintln!("Warning: no business data for {} (TACOS undefined)", gap);
    }

    Ok(bundle)
}

fn generate(
    campaign: &Path,
    business: Option<&Path>,
    out: &Path,
    options: &ReportOptions,
    json: bool,
) -> Result<()> {
    let bundle = run_pipeline(campaign, business, options)?;

    std::fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory '{}'", out.display()))?;

    for table in &bundle.tables {
        let path = out.join(format!("{}.csv", slug(&table.name)));
        TableWriter::write_file(table, &path)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        println!("Wrote {} rows to '{}'", table.rows.len(), path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&bundle.tables)?);
    }

    Ok(())
}

fn summary(campaign: &Path, business: Option<&Path>, options: &ReportOptions) -> Result<()> {
    let bundle = run_pipeline(campaign, business, options)?;

    let table = bundle
        .table("Executive Summary")
        .context("Executive Summary table missing from bundle")?;

    let width = table
        .rows
        .iter()
        .filter_map(|row| match row.first() {
            Some(Field::Text(label)) => Some(label.len()),
            _ => None,
        })
        .max()
        .unwrap_or(0);

    println!("{}", table.name.to_uppercase());
    for row in &table.rows {
        if let [label, value] = row.as_slice() {
            println!("  {:<width$}  {}", label, value, width = width);
        }
    }

    Ok(())
}

/// File-name slug for a table name ("Organic vs Paid" -> "organic_vs_paid")
fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect::<String>()
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("Executive Summary"), "executive_summary");
        assert_eq!(slug("JN-Non-JN Portfolio"), "jn_non_jn_portfolio");
        assert_eq!(slug("Pivot-Segment"), "pivot_segment");
    }
}
