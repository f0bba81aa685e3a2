use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for isocodes
#[derive(Debug, Parser)]
#[command(
    name = "isocodes",
    version,
    about = "CLI for isocodes - Access ISO standard data from the command line",
    arg_required_else_help = true,
    after_help = "Examples:
  isocodes countries --code US                    # Find country by code
  isocodes countries --name Germany --exact       # Find exact country name
  isocodes countries --name Island                # Search countries with \"Island\"
  isocodes countries --former-name Burma          # Find by former name
  isocodes languages --code en                    # Find language by code
  isocodes currencies --code USD                  # Find currency by code
  isocodes subdivisions --country US              # List US subdivisions
  isocodes --format json countries --list-all     # List all countries as JSON
  isocodes --fields name,flag countries --code US # Show only specific fields"
)]
pub struct CliArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Comma-separated list of fields to display (e.g. name,flag,alpha_2)
    #[arg(long, value_delimiter = ',', global = true)]
    pub fields: Option<Vec<String>>,

    /// Limit number of results
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// Directory with iso_<key>.json(.gz) files instead of the bundled data
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search countries (ISO 3166-1)
    Countries {
        #[command(flatten)]
        query: CountryQuery,
        /// Exact name match only
        #[arg(long)]
        exact: bool,
    },

    /// Search languages (ISO 639-2)
    Languages {
        #[command(flatten)]
        query: LanguageQuery,
        /// Exact name match only
        #[arg(long)]
        exact: bool,
    },

    /// Search currencies (ISO 4217)
    Currencies {
        #[command(flatten)]
        query: CurrencyQuery,
        /// Exact name match only
        #[arg(long)]
        exact: bool,
    },

    /// Search country subdivisions (ISO 3166-2)
    Subdivisions {
        #[command(flatten)]
        query: SubdivisionQuery,
        /// Exact name match only
        #[arg(long)]
        exact: bool,
    },

    /// Search former countries (ISO 3166-3)
    FormerCountries {
        #[command(flatten)]
        query: FormerCountryQuery,
        /// Exact name match only
        #[arg(long)]
        exact: bool,
    },

    /// Search script names (ISO 15924)
    Scripts {
        #[command(flatten)]
        query: ScriptQuery,
        /// Exact name match only
        #[arg(long)]
        exact: bool,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct CountryQuery {
    /// Country code (alpha-2 or alpha-3)
    #[arg(long)]
    pub code: Option<String>,
    /// Country name
    #[arg(long)]
    pub name: Option<String>,
    /// Numeric country code
    #[arg(long)]
    pub numeric: Option<String>,
    /// Former country name
    #[arg(long = "former-name")]
    pub former_name: Option<String>,
    /// List all countries
    #[arg(long = "list-all")]
    pub list_all: bool,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct LanguageQuery {
    /// Language code (alpha-2 or alpha-3)
    #[arg(long)]
    pub code: Option<String>,
    /// Language name
    #[arg(long)]
    pub name: Option<String>,
    /// List all languages
    #[arg(long = "list-all")]
    pub list_all: bool,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct CurrencyQuery {
    /// Currency code (alpha-3)
    #[arg(long)]
    pub code: Option<String>,
    /// Currency name
    #[arg(long)]
    pub name: Option<String>,
    /// Numeric currency code
    #[arg(long)]
    pub numeric: Option<String>,
    /// List all currencies
    #[arg(long = "list-all")]
    pub list_all: bool,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SubdivisionQuery {
    /// Subdivision code (e.g. US-CA)
    #[arg(long)]
    pub code: Option<String>,
    /// Subdivision name
    #[arg(long)]
    pub name: Option<String>,
    /// Country code to list subdivisions for
    #[arg(long)]
    pub country: Option<String>,
    /// List all subdivisions
    #[arg(long = "list-all")]
    pub list_all: bool,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct FormerCountryQuery {
    /// Former country code (alpha-2, alpha-3 or alpha-4)
    #[arg(long)]
    pub code: Option<String>,
    /// Former country name
    #[arg(long)]
    pub name: Option<String>,
    /// List all former countries
    #[arg(long = "list-all")]
    pub list_all: bool,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ScriptQuery {
    /// Script code (alpha-4)
    #[arg(long)]
    pub code: Option<String>,
    /// Script name
    #[arg(long)]
    pub name: Option<String>,
    /// Numeric script code
    #[arg(long)]
    pub numeric: Option<String>,
    /// List all scripts
    #[arg(long = "list-all")]
    pub list_all: bool,
}
