//! Assetdesk CLI - run list queries against JSON snapshots.
//!
//! Stands in for the HTTP controller layer: it parses raw parameters into a
//! [`QueryRequest`](assetdesk_query::QueryRequest), runs the pipeline and
//! prints the page as JSON.
//!
//! ```text
//! assetdesk query --kind assignment --data assignments.json \
//!     --state Accepted,Declined --location HCM --sort "state:asc,assetcode:desc" \
//!     --page 2 --page-size 5
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod snapshot;

use std::io::Write;

use anyhow::{Context, Result};
use assetdesk_records::{execute_with, field_keys};

pub use cli::{Cli, Command, FieldsArgs, QueryArgs};

/// Executes a parsed command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Query(args) => query(args, out),
        Command::Fields(args) => fields(args, out),
    }
}

fn query(args: &QueryArgs, out: &mut impl Write) -> Result<()> {
    let config = config::load(args.config.as_deref())?;
    let records = snapshot::load(&args.data, args.kind)?;
    let request = args.to_request();

    let page = execute_with(args.kind, &records, &request, &config);
    serde_json::to_writer_pretty(&mut *out, &page).context("failed to write results")?;
    writeln!(out)?;
    Ok(())
}

fn fields(args: &FieldsArgs, out: &mut impl Write) -> Result<()> {
    for key in field_keys(args.kind) {
        writeln!(out, "{key}")?;
    }
    Ok(())
}
