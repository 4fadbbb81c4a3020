use clap::Parser;
use std::path::PathBuf;
use tracing::error;

use gitprompt::rewriter;

#[derive(Parser)]
#[command(name = "gitprompt")]
#[command(about = "Configure a .bashrc file to show git branch names in the bash prompt")]
struct Args {
    /// Path of the .bashrc file to process
    input: PathBuf,

    /// Path to write the modified .bashrc file to (defaults to editing in place)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = rewriter::rewrite(&args.input, args.output.as_deref()) {
        error!("{:#}", e);
        println!("Error: {:#}", e);
        println!("Exiting...");
        std::process::exit(1);
    }
}
