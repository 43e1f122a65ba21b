//! CLI argument definitions for benchq.

use std::path::PathBuf;

use bench_cli::args::parse_filter_pair;
use bench_model::{Category, SemanticType, SortOrder};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "benchq",
    version,
    about = "Search, sort, filter and export hardware benchmark data",
    long_about = "Query the CPU, GPU and storage benchmark tables.\n\n\
                  Values such as \"8 GB\", \"1750 MHz\" and \"Jan 2021\" are \
                  normalized so they sort and filter by magnitude."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the fields of a category and their semantic types.
    Schema(SchemaArgs),

    /// Rank records by how many query words appear in their name.
    Search(SearchArgs),

    /// Show a single record by id.
    Item(ItemArgs),

    /// Sort records by one field, interpreting it by its semantic type.
    Sorted(SortedArgs),

    /// Filter records by field values, optionally sorting the result.
    Filter(FilterArgs),
}

/// Where records come from.
#[derive(Args)]
pub struct SourceArgs {
    /// Dataset category: cpu, gpu, storage, or a site domain.
    #[arg(long, short = 'c', default_value = "cpu")]
    pub category: Category,

    /// Read a saved payload instead of fetching from the site.
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Save the fetched payload for later use with --input.
    #[arg(long, value_name = "PATH", conflicts_with = "input")]
    pub save: Option<PathBuf>,

    /// HTTP timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,
}

/// Where results go besides the terminal.
#[derive(Args)]
pub struct ExportArgs {
    /// Write the result rows to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Columns to show and export (comma separated).
    #[arg(long, value_delimiter = ',', value_name = "FIELDS")]
    pub columns: Option<Vec<String>>,
}

#[derive(Args)]
pub struct SchemaArgs {
    /// Dataset category: cpu, gpu, storage, or a site domain.
    #[arg(long, short = 'c', default_value = "cpu")]
    pub category: Category,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search words, matched case-insensitively against record names.
    #[arg(required = true, num_args = 1.., value_name = "QUERY")]
    pub query: Vec<String>,

    /// Maximum number of results.
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Args)]
pub struct ItemArgs {
    /// Record id.
    pub id: i64,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args)]
pub struct SortedArgs {
    /// Field to sort by.
    #[arg(long = "by", value_name = "FIELD", default_value = "rank")]
    pub field: String,

    /// Sort direction.
    #[arg(long, value_enum, default_value = "descending")]
    pub order: OrderArg,

    /// Maximum number of results.
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Interpret the field as this type instead of the schema's.
    #[arg(long = "as", value_enum, value_name = "TYPE")]
    pub semantic_type: Option<TypeArg>,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Keep records matching FIELD=VALUE (repeatable).
    #[arg(long = "where", value_name = "FIELD=VALUE", value_parser = parse_filter_pair)]
    pub filters: Vec<(String, String)>,

    /// Field to sort the filtered records by.
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort direction.
    #[arg(long, value_enum, default_value = "descending")]
    pub order: OrderArg,

    /// Maximum number of results (applied after sorting).
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Drop records whose value for FIELD is "NA" (repeatable).
    #[arg(long = "exclude-na", value_name = "FIELD")]
    pub exclude_na: Vec<String>,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Ascending,
    Descending,
}

impl From<OrderArg> for SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Ascending => SortOrder::Ascending,
            OrderArg::Descending => SortOrder::Descending,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TypeArg {
    String,
    Number,
    Bool,
    Size,
    Speed,
    Date,
}

impl From<TypeArg> for SemanticType {
    fn from(semantic_type: TypeArg) -> Self {
        match semantic_type {
            TypeArg::String => SemanticType::String,
            TypeArg::Number => SemanticType::Number,
            TypeArg::Bool => SemanticType::Bool,
            TypeArg::Size => SemanticType::Size,
            TypeArg::Speed => SemanticType::Speed,
            TypeArg::Date => SemanticType::Date,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
