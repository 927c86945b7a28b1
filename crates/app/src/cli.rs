use clap::{Parser, Subcommand};

use shopcart_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "shopcart")]
#[command(about = "Browse a product catalog and keep a shopping cart")]
#[command(version)]
pub struct Args {
    /// Catalog endpoint (overrides SHOPCART_CATALOG_URL)
    #[arg(long, global = true)]
    pub catalog_url: Option<String>,

    /// Log format: json or pretty (overrides SHOPCART_LOG_FORMAT)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive session: browse the catalog and edit the cart (default)
    Shop,
    /// Print the catalog once and exit
    Products,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Shop)
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_interactive_shop() {
        let args = Args::try_parse_from(["shopcart"]).unwrap();
        assert_eq!(args.command(), Command::Shop);
        assert_eq!(args.catalog_url, None);
        assert_eq!(args.log_format, None);
        assert_eq!(args.log_level(), "info");
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "shopcart",
            "products",
            "--catalog-url",
            "http://localhost:8080/products",
            "--log-format",
            "pretty",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.command(), Command::Products);
        assert_eq!(args.catalog_url.as_deref(), Some("http://localhost:8080/products"));
        assert_eq!(args.log_format, Some(LogFormat::Pretty));
        assert_eq!(args.log_level(), "debug");
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(Args::try_parse_from(["shopcart", "--log-format", "xml"]).is_err());
    }
}
