//! Shopfront console

use std::{io, process};

use shopfront_client::HttpCatalogApi;

mod browse;
mod config;
mod editor;
mod logging;

#[cfg(test)]
mod test_helpers;

use config::{Cli, Command};

#[tokio::main]
pub async fn main() {
    let cli = Cli::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = logging::init_subscriber(&cli.logging) {
        eprintln!("{error}");
        process::exit(1);
    }

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let api = HttpCatalogApi::new(cli.api.client_config())
        .map_err(|error| format!("failed to build API client: {error}"))?;

    let out = io::stdout();

    match cli.command {
        Command::Browse(args) => browse::browse(&api, &args.query(), out).await,
        Command::Shops => browse::shops(&api, out).await,
        Command::Create(inputs) => editor::create(&api, inputs, out).await,
        Command::Edit(args) => editor::edit(&api, &args.product_id, args.inputs, out).await,
    }
}
