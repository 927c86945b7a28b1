use anyhow::Context;
use clap::Parser;

use shopcart_app::{load, run, AppConfig, Args, Command};
use shopcart_catalog::{fetch_catalog, HttpCatalog};
use shopcart_display::{render_catalog, LOADING_MESSAGE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = AppConfig::from_env()
        .context("failed to load configuration")?
        .with_overrides(args.catalog_url.clone(), args.log_format);

    shopcart_observability::init(config.log_format, args.log_level());
    tracing::info!(catalog_url = %config.catalog_url, "shopcart starting");

    let catalog = HttpCatalog::new(&config.catalog_url)?;

    match args.command() {
        Command::Products => {
            println!("{LOADING_MESSAGE}");
            let state = fetch_catalog(&catalog).await;
            println!("{}", render_catalog(&state));
            if state.is_failed() {
                anyhow::bail!("catalog unavailable");
            }
        }
        Command::Shop => {
            let mut stdout = tokio::io::stdout();
            let mut session = load(&catalog, &mut stdout).await?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run(&mut session, stdin, stdout).await?;
        }
    }

    Ok(())
}
