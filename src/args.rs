use clap::Parser;

/// Command line flags for city-suggestions
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "city-suggestions",
    version,
    about = "Serve city name suggestions over HTTP",
    after_help = "Example:\n  GET /suggestions?q=Wok&latitude=43.70011&longitude=-79.4163"
)]
pub struct CliArgs {
    /// Address to listen on, e.g. 0.0.0.0:7182
    #[arg(long = "addr")]
    pub addr: Option<String>,

    /// CSV containing city data
    #[arg(long = "data-file-path")]
    pub data_file_path: Option<String>,

    /// Configuration file used instead of config/default.toml
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,
}
