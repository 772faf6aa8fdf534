//! Browser configuration module

use std::path::PathBuf;

use clap::{Args, Parser};

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
}

/// Quotebook catalog browser configuration
#[derive(Debug, Parser)]
#[command(name = "quotebook", about = "Browse the rental catalog and build a quote basket", long_about = None)]
pub(crate) struct BrowseConfig {
    /// Catalog fixture file
    #[arg(
        short,
        long,
        env = "QUOTEBOOK_CATALOG",
        default_value = "fixtures/catalog/showroom.yml"
    )]
    pub(crate) catalog: PathBuf,

    /// Free-text search over name, SKU, category, tags and description
    #[arg(short, long, default_value = "")]
    pub(crate) search: String,

    /// Category to include (repeatable)
    #[arg(long = "category")]
    pub(crate) categories: Vec<String>,

    /// Event type to include (repeatable)
    #[arg(long = "event-type")]
    pub(crate) event_types: Vec<String>,

    /// Style tag to include (repeatable)
    #[arg(long = "tag")]
    pub(crate) tags: Vec<String>,

    /// Allow only one category at a time; the last one given wins
    #[arg(long)]
    pub(crate) single: bool,

    /// Drop selected values the catalog no longer offers
    #[arg(long)]
    pub(crate) prune: bool,

    /// SKU to add to the quote basket (repeatable)
    #[arg(long = "add")]
    pub(crate) add: Vec<String>,

    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,
}

impl BrowseConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn repeated_facets_are_collected() -> TestResult {
        let config = BrowseConfig::try_parse_from([
            "quotebook",
            "--catalog",
            "catalog.yml",
            "--category",
            "Tables",
            "--category",
            "Seating",
            "--tag",
            "gold",
            "--add",
            "TBL-001",
        ])?;

        assert_eq!(config.catalog, PathBuf::from("catalog.yml"));
        assert_eq!(config.categories, vec!["Tables", "Seating"]);
        assert_eq!(config.tags, vec!["gold"]);
        assert_eq!(config.add, vec!["TBL-001"]);
        assert!(!config.single);

        Ok(())
    }

    #[test]
    fn json_log_format_parses() -> TestResult {
        let config = BrowseConfig::try_parse_from(["quotebook", "--log-format", "json"])?;

        assert!(matches!(config.logging.log_format, LogFormat::Json));

        Ok(())
    }
}
