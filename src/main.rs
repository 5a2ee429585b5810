use clap::{Parser, Subcommand};
use flomote::app::{self, AppConfig};
use std::net::IpAddr;

/// Flomote API server
#[derive(Parser)]
#[command(name = "flomote")]
#[command(about = "Flomote - Slimmer werken met AI: QuickScan, workflows en contact", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API (default command)
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (default: 0.0.0.0)
        #[arg(long)]
        host: Option<IpAddr>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let (port, host) = match cli.command {
        Some(Commands::Serve { port, host }) => (port, host),
        None => (None, None),
    };

    let config = match AppConfig::from_env(cli.verbose) {
        Ok(config) => config,
        Err(e) => app::handle_fatal_error(e.into(), cli.verbose),
    };
    let config = match port {
        Some(port) => config.with_port(port),
        None => config,
    };
    let config = match host {
        Some(host) => config.with_host(host),
        None => config,
    };

    if let Err(e) = app::run(config).await {
        app::handle_fatal_error(e, cli.verbose);
    }
}
