mod cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cmd::Options;

#[derive(Parser)]
#[command(name = "snmpsim-datafile", about = "Inspect and rewrite SNMP simulator data files")]
struct Cli {
    /// Path to TOML data store configuration.
    #[arg(long, global = true, env = "SNMPSIM_DATAFILE_CONFIG")]
    config: Option<String>,

    /// Grammar to use instead of resolving it from the file extension.
    #[arg(long, global = true)]
    grammar: Option<String>,

    /// Log and skip bad records instead of failing on the first one.
    #[arg(long, global = true)]
    skip_bad_lines: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load data files and report record counts.
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print records as JSON lines.
    Dump { file: PathBuf },
    /// Rewrite a data file in canonical form (sorted, rebuilt lines).
    Convert { input: PathBuf, output: PathBuf },
    /// Print the kind/tag table.
    Tags,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let opts = match Options::new(cli.config.as_deref(), cli.grammar, cli.skip_bad_lines) {
        Ok(o) => o,
        Err(e) => {
            tracing::error!(error = %e, "failed to load config");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Check { files } => cmd::check::run(&opts, files),
        Command::Dump { file } => cmd::dump::run(&opts, file),
        Command::Convert { input, output } => cmd::convert::run(&opts, input, output),
        Command::Tags => cmd::print_tags(),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        std::process::exit(1);
    }
}
