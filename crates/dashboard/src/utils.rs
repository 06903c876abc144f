use clap::Parser;
use cityweather_core::{
    find_config_file, load_config, ConfigSource, DEFAULT_CACHE_TTL_SECS, DEFAULT_DASHBOARD_PORT,
};
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
use log::LevelFilter;
use std::env;
use time::{format_description::well_known::Iso8601, Duration, OffsetDateTime};

pub use cityweather_core::create_dir_all;

/// Create a folder, ignoring failure; a missing data directory just
/// means every source degrades to empty.
pub fn create_folder(root_path: &str) {
    let _ = create_dir_all(root_path);
}

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "Cityweather - multi-city weather comparison dashboard"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $CITYWEATHER_CONFIG, ./cityweather.toml,
    /// $XDG_CONFIG_HOME/cityweather/cityweather.toml, /etc/cityweather/cityweather.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "CITYWEATHER_LEVEL")]
    pub level: Option<String>,

    /// Host to listen on (use 0.0.0.0 for all interfaces)
    #[arg(short, long, env = "CITYWEATHER_HOST")]
    #[serde(alias = "host")]
    pub domain: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "CITYWEATHER_PORT")]
    pub port: Option<String>,

    /// Public URL for the UI and API docs
    #[arg(short, long, env = "CITYWEATHER_REMOTE_URL")]
    pub remote_url: Option<String>,

    /// Directory containing the three weather SQLite databases
    /// written by the external ingestion pipeline
    #[arg(short = 'w', long, env = "CITYWEATHER_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Directory containing UI static files
    #[arg(short, long, env = "CITYWEATHER_UI_DIR")]
    pub ui_dir: Option<String>,

    /// Seconds a cached database snapshot stays fresh
    #[arg(short = 't', long, env = "CITYWEATHER_CACHE_TTL")]
    pub cache_ttl: Option<u64>,
}

impl Cli {
    /// Get the effective configuration value with defaults
    pub fn host(&self) -> String {
        self.domain
            .clone()
            .unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn port(&self) -> String {
        self.port
            .clone()
            .unwrap_or_else(|| DEFAULT_DASHBOARD_PORT.to_string())
    }

    pub fn remote_url(&self) -> String {
        self.remote_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host(), self.port()))
    }

    pub fn data_dir(&self) -> String {
        self.data_dir
            .clone()
            .unwrap_or_else(|| "./weather_data".to_string())
    }

    pub fn static_dir(&self) -> String {
        self.ui_dir
            .clone()
            .unwrap_or_else(|| "./static".to_string())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::seconds(self.cache_ttl.unwrap_or(DEFAULT_CACHE_TTL_SECS) as i64)
    }
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> Cli {
    let cli_args = Cli::parse();

    // Determine config file path
    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file("CITYWEATHER_CONFIG", "cityweather.toml")
    };

    if let Some(path) = source.path() {
        log::info!("Loading config from: {}", path.display());
    }

    let file_config: Cli = load_config(&source).unwrap_or_default();

    merge(cli_args, file_config)
}

/// CLI args override file config (env vars are handled by clap)
fn merge(cli_args: Cli, file_config: Cli) -> Cli {
    Cli {
        config: cli_args.config,
        level: cli_args.level.or(file_config.level),
        domain: cli_args.domain.or(file_config.domain),
        port: cli_args.port.or(file_config.port),
        remote_url: cli_args.remote_url.or(file_config.remote_url),
        data_dir: cli_args.data_dir.or(file_config.data_dir),
        ui_dir: cli_args.ui_dir.or(file_config.ui_dir),
        cache_ttl: cli_args.cache_ttl.or(file_config.cache_ttl),
    }
}

pub fn get_log_level(cli: &Cli) -> LevelFilter {
    let level_str = cli
        .level
        .clone()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    match level_str.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

pub fn setup_logger() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::White)
        .debug(Color::Cyan)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}: {}",
                OffsetDateTime::now_utc().format(&Iso8601::DEFAULT).unwrap(),
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .chain(std::io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_args_override_file_config() {
        let cli_args = Cli {
            port: Some("9000".to_string()),
            ..Cli::default()
        };
        let file_config = Cli {
            port: Some("8000".to_string()),
            data_dir: Some("/var/lib/cityweather".to_string()),
            ..Cli::default()
        };

        let merged = merge(cli_args, file_config);
        assert_eq!(merged.port(), "9000");
        assert_eq!(merged.data_dir(), "/var/lib/cityweather");
    }

    #[test]
    fn defaults_fill_the_gaps() {
        let cli = Cli::default();
        assert_eq!(cli.host(), "127.0.0.1");
        assert_eq!(cli.port(), DEFAULT_DASHBOARD_PORT.to_string());
        assert_eq!(cli.data_dir(), "./weather_data");
        assert_eq!(cli.cache_ttl(), Duration::seconds(3600));
    }

    #[test]
    fn log_level_parsing_is_forgiving() {
        let cli = Cli {
            level: Some("DEBUG".to_string()),
            ..Cli::default()
        };
        assert_eq!(get_log_level(&cli), LevelFilter::Debug);

        let cli = Cli {
            level: Some("nonsense".to_string()),
            ..Cli::default()
        };
        assert_eq!(get_log_level(&cli), LevelFilter::Info);
    }
}
