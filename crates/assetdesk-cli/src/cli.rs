//! Command-line arguments.

use std::path::PathBuf;

use assetdesk_query::{parse_date, QueryRequest};
use assetdesk_records::EntityKind;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

/// List queries over asset desk snapshots.
#[derive(Debug, Parser)]
#[command(name = "assetdesk", version, about)]
pub struct Cli {
    /// Log pipeline stages to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search, filter, sort and page a snapshot.
    Query(QueryArgs),
    /// List the sort and filter keys of an entity kind.
    Fields(FieldsArgs),
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Entity kind: asset, user, assignment or return-request.
    #[arg(short, long)]
    pub kind: EntityKind,

    /// JSON snapshot: an array of records of that kind.
    #[arg(short, long)]
    pub data: PathBuf,

    /// Free-text search term.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Accepted states (repeatable or comma-separated; "All" disables).
    #[arg(long = "state", value_delimiter = ',')]
    pub states: Vec<String>,

    /// Accepted category names (repeatable or comma-separated; "All" disables).
    #[arg(long = "category", value_delimiter = ',')]
    pub categories: Vec<String>,

    /// User type ("all" disables).
    #[arg(long = "type")]
    pub user_type: Option<String>,

    /// Operating site.
    #[arg(long)]
    pub location: Option<String>,

    /// Calendar day, YYYY-MM-DD or RFC 3339.
    #[arg(long, value_parser = parse_date)]
    pub date: Option<DateTime<Utc>>,

    /// Sort keys, e.g. "state:asc,assetcode:desc".
    #[arg(long)]
    pub sort: Option<String>,

    /// Page number; values below 1 read as 1.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Items per page; defaults to the configured size for the kind.
    #[arg(long, allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    /// YAML query configuration.
    #[arg(long, env = "ASSETDESK_CONFIG")]
    pub config: Option<PathBuf>,
}

impl QueryArgs {
    /// Builds the query request these arguments describe.
    pub fn to_request(&self) -> QueryRequest {
        let mut request = QueryRequest::new().page(self.page);
        if let Some(term) = &self.search {
            request = request.search(term.as_str());
        }
        if !self.states.is_empty() {
            request = request.states(self.states.iter().map(String::as_str));
        }
        if !self.categories.is_empty() {
            request = request.categories(self.categories.iter().map(String::as_str));
        }
        if let Some(user_type) = &self.user_type {
            request = request.user_type(user_type.as_str());
        }
        if let Some(location) = &self.location {
            request = request.location(location.as_str());
        }
        if let Some(date) = self.date {
            request = request.date(date);
        }
        if let Some(sort) = &self.sort {
            request = request.sort(sort);
        }
        if let Some(page_size) = self.page_size {
            request = request.per_page(page_size);
        }
        request
    }
}

#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Entity kind: asset, user, assignment or return-request.
    #[arg(short, long)]
    pub kind: EntityKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdesk_query::Dir;
    use clap::CommandFactory;

    fn query_args(args: &[&str]) -> QueryArgs {
        let argv = ["assetdesk", "query"].iter().chain(args.iter());
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Query(args) => args,
            other => panic!("expected query, got {other:?}"),
        }
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn minimal_query() {
        let args = query_args(&["--kind", "asset", "--data", "assets.json"]);
        assert_eq!(args.kind, EntityKind::Asset);
        let request = args.to_request();
        assert_eq!(request.page_number(), 1);
        assert_eq!(request.page_size(), None);
        assert!(request.filters().is_empty());
    }

    #[test]
    fn lists_split_on_commas() {
        let args = query_args(&[
            "-k",
            "assignment",
            "-d",
            "a.json",
            "--state",
            "Accepted,Declined",
            "--state",
            "Returned",
        ]);
        let request = args.to_request();
        assert_eq!(
            request.filters().states.as_deref(),
            Some(&["Accepted".to_string(), "Declined".to_string(), "Returned".to_string()][..])
        );
    }

    #[test]
    fn negative_paging_is_accepted() {
        let args = query_args(&["-k", "user", "-d", "u.json", "--page", "-3", "--page-size", "0"]);
        assert_eq!(args.page, -3);
        assert_eq!(args.page_size, Some(0));
    }

    #[test]
    fn sort_string_is_parsed() {
        let args = query_args(&["-k", "asset", "-d", "a.json", "--sort", "state:asc,assetcode:desc"]);
        let request = args.to_request();
        assert_eq!(request.sort_keys().len(), 2);
        assert_eq!(request.sort_keys()[1].dir, Dir::Desc);
    }

    #[test]
    fn bad_date_is_rejected() {
        let result = Cli::try_parse_from([
            "assetdesk", "query", "-k", "asset", "-d", "a.json", "--date", "31/12/2024",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = Cli::try_parse_from(["assetdesk", "fields", "--kind", "category"]);
        assert!(result.is_err());
    }
}
