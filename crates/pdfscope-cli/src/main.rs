mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdfscope",
    version,
    about = "Analyze dense PDF documents and extract key information"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a PDF and print the full report
    Analyze {
        /// Path to the PDF file to analyze
        input_file: PathBuf,

        /// Save the analysis report to a file (in addition to the console)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Save the extracted raw text to a file
        #[arg(short = 'e', long = "extract-text", value_name = "FILE")]
        extract_text: Option<PathBuf>,

        /// Output format: report (default) or json
        #[arg(short, long, default_value = "report")]
        format: String,
    },
    /// Extract raw text from a PDF without analyzing it
    Extract {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Write extracted text to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input_file,
            output,
            extract_text,
            format,
        } => commands::analyze::run(input_file, output, extract_text, &format),
        Commands::Extract { input_file, out } => commands::extract::run(input_file, out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
