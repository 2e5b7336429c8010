use anyhow::Result;
use clap::{CommandFactory, Parser};
use httptap::capture::{self, FileSource, LiveSource};
use httptap::correlate::Correlator;
use httptap::filter::FilterConfig;
use httptap::logging;
use httptap::session::{self, SessionConfig};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing::level_filters::LevelFilter;

/// Watches live TCP traffic and prints plaintext HTTP requests paired
/// with their responses.
#[derive(Debug, Parser)]
#[command(name = "httptap", version, about)]
struct Cli {
    /// Capture interface (required unless --list or --read is given)
    #[arg(short, long)]
    interface: Option<String>,

    /// Only show requests whose source endpoint contains this substring
    #[arg(long, value_name = "SUBSTR")]
    src: Option<String>,

    /// Only show requests whose destination endpoint contains one of
    /// these comma-separated substrings
    #[arg(long, value_name = "SUBSTR,..", value_delimiter = ',')]
    dst: Vec<String>,

    /// Only show requests whose payload contains this substring
    #[arg(long, value_name = "SUBSTR")]
    uri: Option<String>,

    /// Stop after this many completed request/response exchanges
    #[arg(short = 'n', long, default_value_t = 10, value_name = "COUNT")]
    count: u64,

    /// List capture interfaces and exit
    #[arg(short, long)]
    list: bool,

    /// Replay a pcapng capture file instead of opening an interface
    #[arg(long, value_name = "FILE")]
    read: Option<PathBuf>,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        return capture::list_interfaces();
    }

    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let _guard = logging::init(cli.log_file.as_deref(), level)?;

    let filter = FilterConfig {
        source: cli.src,
        destinations: cli
            .dst
            .iter()
            .map(|needle| needle.trim().to_string())
            .filter(|needle| !needle.is_empty())
            .collect(),
        uri: cli.uri,
    };
    let config = SessionConfig {
        filter,
        max_completed: cli.count,
    };
    log_active_filters(&config.filter);

    let mut correlator = Correlator::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = &cli.read {
        info!(?path, max = config.max_completed, "replaying capture file");
        let mut source = FileSource::open(path)?;
        session::run(&mut source, &config, &mut correlator, &mut out)?;
    } else {
        let Some(interface) = &cli.interface else {
            Cli::command()
                .error(
                    clap::error::ErrorKind::MissingRequiredArgument,
                    "an interface is required; use --list to see what is available",
                )
                .exit();
        };
        let bpf = capture::bpf_expression(&config.filter);
        info!(
            interface,
            bpf,
            max = config.max_completed,
            "starting capture (Ctrl+C to stop)"
        );
        let mut source = LiveSource::open(interface, bpf)?;
        session::run(&mut source, &config, &mut correlator, &mut out)?;
    }

    out.flush()?;
    info!(
        completed = correlator.completed_count(),
        pending = correlator.pending_count(),
        "session finished"
    );
    Ok(())
}

fn log_active_filters(filter: &FilterConfig) {
    if let Some(src) = &filter.source {
        info!(src, "source filter active");
    }
    if !filter.destinations.is_empty() {
        info!(dst = filter.destinations.join(", "), "destination filter active");
    }
    if let Some(uri) = &filter.uri {
        info!(uri, "uri filter active");
    }
}
