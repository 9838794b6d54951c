//! CLI Adapter.

mod guide;
mod logging;
mod status;
mod sysconfig;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::SysconfigOptions;
use crate::domain::{AppError, CertificateStrategy};

#[derive(Parser)]
#[command(name = "chn-quickstart")]
#[command(version)]
#[command(
    about = "Guided configuration of a CHN server deployment",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through every module and rebuild the compose manifest
    #[clap(visible_alias = "g")]
    Guide {
        /// Deployment root (defaults to the current directory)
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Generate the CHN server sysconfig file
    #[clap(visible_alias = "sc")]
    Sysconfig {
        /// Base URL of the CHN server, e.g. https://chn.example.org
        #[arg(short = 's', long, value_parser = sysconfig::parse_server_base_url)]
        server_base_url: String,
        /// Certificate strategy: CERTBOT, BYO or SELFSIGNED
        #[arg(
            short = 'c',
            long,
            default_value = "CERTBOT",
            value_parser = sysconfig::parse_certificate_strategy
        )]
        certificate_strategy: CertificateStrategy,
        /// File to write
        #[arg(short = 'o', long)]
        output_file: String,
        /// Overwrite an existing file
        #[arg(short = 'f', long = "force-overwrite")]
        force: bool,
    },
    /// Show which modules are configured
    #[clap(visible_alias = "st")]
    Status {
        /// Deployment root (defaults to the current directory)
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init();

    let result: Result<(), AppError> = match cli.command {
        Commands::Guide { root } => guide::run_guide(root),
        Commands::Sysconfig { server_base_url, certificate_strategy, output_file, force } => {
            sysconfig::run_sysconfig(SysconfigOptions {
                server_base_url,
                certificate_strategy,
                output_file,
                force,
            })
        }
        Commands::Status { root } => status::run_status(root),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
