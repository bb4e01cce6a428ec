use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use sbdk_common::ResolveMode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sbdk_site::{SiteConfig, serve, sitemap};

#[derive(Parser, Debug)]
#[command(author, version, about = "SBDK.dev website and documentation proxy", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Optional config file (TOML); CLI flags override values from the file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, global = true)]
    bind: Option<SocketAddr>,

    /// Public origin used for canonical URLs and the sitemap
    #[arg(long, global = true)]
    site_url: Option<String>,

    /// Raw wiki base URL; pages are fetched from `{base}/{id}.md`
    #[arg(long, global = true)]
    wiki_raw_base: Option<String>,

    /// Freshness window for fetched pages in seconds (0 disables caching)
    #[arg(long, global = true)]
    cache_ttl_secs: Option<u64>,

    /// Slug resolution: "registry" (page table, legacy fallback) or "legacy"
    #[arg(long, global = true)]
    resolve_mode: Option<ResolveMode>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the web server (default if no subcommand specified)
    Serve,

    /// Print sitemap.xml to stdout
    Sitemap,
}

impl Cli {
    fn into_site_config(self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::load_from_path(path)?,
            None => SiteConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(site_url) = self.site_url {
            config.site_url = site_url;
        }
        if let Some(base) = self.wiki_raw_base {
            config.wiki_raw_base = base;
        }
        if let Some(ttl) = self.cache_ttl_secs {
            config.cache_ttl_secs = ttl;
        }
        if let Some(mode) = self.resolve_mode {
            config.resolve_mode = mode;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        Ok(config)
    }
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or(Commands::Serve);
    let config = cli.into_site_config()?;

    match command {
        Commands::Sitemap => {
            let entries = sitemap::entries(&config.site_url, Utc::now().date_naive());
            let xml = sitemap::to_xml(&entries).context("rendering sitemap")?;
            println!("{xml}");
            Ok(())
        }
        Commands::Serve => {
            init_logging(&config.log_level);

            info!("Starting sbdk-site v{}", env!("CARGO_PKG_VERSION"));
            info!("Wiki: {}", config.wiki_raw_base);
            info!("Site: {}", config.site_url);
            info!(
                "Cache TTL: {}s, resolve mode: {}",
                config.cache_ttl_secs, config.resolve_mode
            );

            serve(config).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_mode_flag_overrides_config() {
        let cli = Cli::try_parse_from(["sbdk-site", "--resolve-mode", "legacy", "sitemap"])
            .expect("valid flags");
        let config = cli.into_site_config().expect("config");
        assert_eq!(config.resolve_mode, ResolveMode::Legacy);
    }

    #[test]
    fn unknown_resolve_mode_is_rejected() {
        assert!(Cli::try_parse_from(["sbdk-site", "--resolve-mode", "fuzzy"]).is_err());
    }
}
