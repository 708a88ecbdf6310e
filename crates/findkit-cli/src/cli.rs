//! CLI argument definitions for findkit.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `advanced` | Search by keywords and/or categories |
//! | `keywords` | Search by keywords |
//! | `category` | Search within categories |
//! | `version` | Report the service version |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--app-id` | `$FINDKIT_APP_ID` | Application id sent with every call |
//! | `--wire-format` | `xml` | Request/response encoding (xml, json) |
//! | `--global-id` | `EBAY-US` | Target site |
//! | `--sandbox` | `false` | Use the sandbox endpoint |
//! | `--timeout-ms` | `10000` | Request timeout in ms |
//! | `--dry-run` | `false` | Print the request body instead of sending it |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--verbose` | `false` | Debug logging |
//!
//! # Examples
//!
//! ```bash
//! findkit keywords tolkien --max-price 20 --currency USD --pretty
//! findkit advanced "lord of the rings" --category 267 --condition 1000 --dry-run
//! findkit category 29223 --listing-type Auction --sort EndTimeSoonest --page 2
//! ```

use clap::{Args, Parser, Subcommand};
use findkit_core::{Condition, Currency, GlobalId, ListingType, SortOrder, WireFormat};

/// findkit - command-line client for the eBay Finding service
#[derive(Debug, Parser)]
#[command(
    name = "findkit",
    author,
    version,
    about = "Command-line client for the eBay Finding service"
)]
pub struct Cli {
    /// Application id. Falls back to FINDKIT_APP_ID.
    #[arg(long, global = true)]
    pub app_id: Option<String>,

    /// Request and response encoding (xml or json).
    #[arg(long, global = true)]
    pub wire_format: Option<WireFormat>,

    /// Target site, e.g. EBAY-GB or gb.
    #[arg(long, global = true)]
    pub global_id: Option<GlobalId>,

    /// Send calls to the sandbox endpoint.
    #[arg(long, global = true, default_value_t = false)]
    pub sandbox: bool,

    /// Request timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Print the encoded request body and exit without sending it.
    #[arg(long, global = true, default_value_t = false)]
    pub dry_run: bool,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Log round trips at debug level. RUST_LOG takes precedence.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search by keywords, categories or both.
    ///
    /// # Examples
    ///
    ///   findkit advanced tolkien --category 267
    ///   findkit advanced --category 29223 --description-search
    Advanced(AdvancedArgs),

    /// Search by keywords.
    ///
    /// # Examples
    ///
    ///   findkit keywords "the hobbit" --free-shipping
    Keywords(KeywordsArgs),

    /// Search within one or more categories.
    ///
    /// # Examples
    ///
    ///   findkit category 267 29223 --condition 3000
    Category(CategoryArgs),

    /// Report the service version.
    Version,
}

#[derive(Debug, Args)]
pub struct AdvancedArgs {
    /// Query string.
    pub keywords: Option<String>,

    /// Category id to search in. Repeatable; at most three are sent.
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Also match keywords against item descriptions.
    #[arg(long, default_value_t = false)]
    pub description_search: bool,

    #[command(flatten)]
    pub filters: FilterArgs,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, Args)]
pub struct KeywordsArgs {
    /// Query string.
    pub keywords: String,

    #[command(flatten)]
    pub filters: FilterArgs,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Debug, Args)]
pub struct CategoryArgs {
    /// Category ids; at most three are sent.
    #[arg(required = true, num_args = 1..)]
    pub categories: Vec<String>,

    #[command(flatten)]
    pub filters: FilterArgs,

    #[command(flatten)]
    pub page: PageArgs,
}

/// Item filters shared by the search commands.
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Condition id, e.g. 1000 (new) or 3000 (used). Repeatable.
    #[arg(long = "condition")]
    pub conditions: Vec<Condition>,

    /// Listing format. Repeatable.
    #[arg(long = "listing-type")]
    pub listing_types: Vec<ListingType>,

    /// Seller user name. Repeatable.
    #[arg(long = "seller")]
    pub sellers: Vec<String>,

    /// Upper price bound.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Lower price bound.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Currency qualifying the price bounds.
    #[arg(long)]
    pub currency: Option<Currency>,

    /// Only items with free shipping.
    #[arg(long, default_value_t = false)]
    pub free_shipping: bool,
}

/// Pagination and ordering shared by the search commands.
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Page to fetch, clamped to 1..=100.
    #[arg(long, default_value_t = 1)]
    pub page: i64,

    /// Entries per page, clamped to 1..=100.
    #[arg(long)]
    pub limit: Option<i64>,

    /// Result ordering, e.g. EndTimeSoonest.
    #[arg(long)]
    pub sort: Option<SortOrder>,
}

impl Default for PageArgs {
    fn default() -> Self {
        Self {
            page: 1,
            limit: None,
            sort: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn keywords_command_parses_filters_and_paging() {
        let cli = Cli::try_parse_from([
            "findkit",
            "keywords",
            "tolkien",
            "--condition",
            "1000",
            "--condition",
            "3000",
            "--max-price",
            "20",
            "--currency",
            "usd",
            "--page",
            "3",
            "--sort",
            "EndTimeSoonest",
            "--wire-format",
            "json",
        ])
        .expect("valid arguments");

        assert_eq!(cli.wire_format, Some(WireFormat::Json));
        let Command::Keywords(args) = cli.command else {
            panic!("expected keywords command");
        };
        assert_eq!(args.keywords, "tolkien");
        assert_eq!(args.filters.conditions, [Condition::New, Condition::Used]);
        assert_eq!(args.filters.max_price, Some(20.0));
        assert_eq!(args.filters.currency, Some(Currency::Usd));
        assert_eq!(args.page.page, 3);
        assert_eq!(args.page.sort, Some(SortOrder::EndTimeSoonest));
    }

    #[test]
    fn category_command_requires_an_id() {
        assert!(Cli::try_parse_from(["findkit", "category"]).is_err());
    }

    #[test]
    fn unknown_condition_is_rejected() {
        let result = Cli::try_parse_from(["findkit", "keywords", "x", "--condition", "9999"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_apply_after_the_subcommand() {
        let cli = Cli::try_parse_from(["findkit", "version", "--dry-run", "--global-id", "gb"])
            .expect("valid arguments");

        assert!(cli.dry_run);
        assert_eq!(cli.global_id, Some(GlobalId::Gb));
        assert!(matches!(cli.command, Command::Version));
    }
}
