//! src/cli.rs
//!
//! Command-line options for the terminal host.

use std::path::PathBuf;

use clap::Parser;
use hitgraph::graph::Variant;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "hitgraph",
    version,
    about = "Real-time scrolling hit graphs in the terminal"
)]
pub struct Cli {
    /// TOML file with one `[[graph]]` table per graph
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show a single preset graph instead of one of each
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Address of the line-based remote control server
    #[arg(long, default_value = "127.0.0.1:4000")]
    pub listen: String,

    /// Do not start the remote control server
    #[arg(long)]
    pub no_remote: bool,

    /// Serial port to count incoming lines from (e.g. /dev/ttyACM0)
    #[arg(long)]
    pub serial: Option<String>,

    #[arg(long, default_value_t = 115_200)]
    pub baud: u32,

    /// Mean synthetic hits per second fed to every graph; 0 disables
    #[arg(long, default_value_t = 25.0)]
    pub demo_rate: f64,

    /// Pace frame callbacks with the 16ms timer fallback instead of redraws
    #[arg(long)]
    pub timer_frames: bool,

    /// Ignore repeated start requests instead of starting a second loop
    #[arg(long)]
    pub guard_start: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long)]
    pub log_level: Option<log::LevelFilter>,

    /// Log destination; the terminal itself is owned by the UI
    #[arg(long, default_value = "hitgraph.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["hitgraph"]).unwrap();
        assert_eq!(cli.listen, "127.0.0.1:4000");
        assert_eq!(cli.demo_rate, 25.0);
        assert!(cli.variant.is_none());
        assert!(!cli.guard_start);
    }

    #[test]
    fn parses_variant_and_level() {
        let cli = Cli::try_parse_from([
            "hitgraph",
            "--variant",
            "activity",
            "--log-level",
            "debug",
            "--timer-frames",
        ])
        .unwrap();
        assert_eq!(cli.variant, Some(Variant::Activity));
        assert_eq!(cli.log_level, Some(log::LevelFilter::Debug));
        assert!(cli.timer_frames);
    }
}
