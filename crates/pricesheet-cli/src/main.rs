mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pricesheet",
    version,
    about = "Turn price-list PDFs into editable pricing tables"
)]
struct Cli {
    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a pricing table proposal from a PDF (or pre-decoded .txt)
    Extract {
        /// Path to PDF or text file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the proposal to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Heuristic config JSON file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Append the proposal as a subcategory draft to a JSON-lines store
        #[arg(long, value_name = "STORE")]
        save: Option<PathBuf>,

        /// Override the suggested category name when saving
        #[arg(long, requires = "save")]
        category: Option<String>,

        /// Override the suggested subcategory name when saving
        #[arg(long, requires = "save")]
        subcategory: Option<String>,
    },
    /// Show how each line of a document was classified
    Explain {
        /// Path to PDF or text file
        input_file: PathBuf,

        /// Heuristic config JSON file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect and validate heuristic configs
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the default heuristic config as JSON
    Defaults,
    /// Validate a heuristic config file
    Validate {
        /// Path to JSON config file
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
            config,
            save,
            category,
            subcategory,
        } => commands::extract::run(commands::extract::ExtractArgs {
            input_file,
            output_format: output,
            output_file: out,
            config_file: config,
            store_file: save,
            category,
            subcategory,
        }),
        Commands::Explain {
            input_file,
            config,
            output,
        } => commands::explain::run(input_file, config, &output),
        Commands::Config { action } => match action {
            ConfigAction::Defaults => commands::config::defaults(),
            ConfigAction::Validate { file } => commands::config::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
