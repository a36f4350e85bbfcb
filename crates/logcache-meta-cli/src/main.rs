//! CLI for logcache-meta — what is log-cache holding right now, per source.

mod commands;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "logcache-meta")]
#[command(about = "Show per-source log-cache retention: counts, expiry and cache duration")]
#[command(version = logcache_meta_core::VERSION)]
struct Cli {
    /// Sources to show: platform, applications or all (case-insensitive)
    #[arg(long, default_value = "all")]
    scope: String,

    /// Add a Rate column: lines each source emitted in the last minute
    #[arg(long)]
    noise: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    commands::meta::run(&cli.scope, cli.noise);
}
