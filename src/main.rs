use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use blogterm::api::{HttpPostsClient, PostsApi};
use blogterm::config::{Config, ConfigOverrides};
use blogterm::logging::init_tracing;
use blogterm::ui::router::Route;

/// blogterm - browse, create and delete posts on a blog REST service
#[derive(Parser, Debug)]
#[command(name = "blogterm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to <config dir>/blogterm/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override api.base_url
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override api.key
    #[arg(long, value_name = "KEY")]
    key: Option<String>,

    /// Initial route, e.g. / or /posts/new or /posts/12
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: String,

    /// Override logging.file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::read_from(&path)?.with_overrides(ConfigOverrides {
        base_url: cli.base_url,
        key: cli.key,
        log_file: cli.log_file,
    })?;

    if cli.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let log_path = init_tracing(&config.logging).context("failed to initialise logging")?;
    tracing::info!(log = %log_path.display(), version = env!("CARGO_PKG_VERSION"), "starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("blogterm-io")
        .build()
        .context("failed to start async runtime")?;

    let client = HttpPostsClient::new(&config.api).context("failed to build HTTP client")?;
    tracing::info!(base_url = %client.base_url(), "posts service");
    let api: Arc<dyn PostsApi> = Arc::new(client);
    let route = Route::parse(&cli.route);

    let result = blogterm::ui::run(api, &config, route, runtime.handle().clone());
    runtime.shutdown_background();
    result.context("terminal UI failed")?;

    tracing::info!("exiting");
    Ok(())
}
