use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use resonite_downloader::cli::{Cli, Command};
use resonite_downloader::command::{self, CommandContext};
use resonite_downloader::config::DownloaderConfig;
use resonite_downloader::logging;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose, cli.json_logs);

    let config = match &cli.config {
        Some(path) => DownloaderConfig::load(path)?,
        None => DownloaderConfig::default(),
    };
    let ctx = CommandContext::new(config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        match cli.command {
            Command::Download(args) => command::download::run(&ctx, &args.into())
                .await
                .map(|_| ()),
            Command::ResolveVersion(args) => command::resolve_version::run(&ctx, &args.into())
                .await
                .map(|_| ()),
        }
    });

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("ERROR: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
