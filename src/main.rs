use apictl::cli::errors::print_error_with_json;
use apictl::cli::tracing_init::init_tracing;
use apictl::cli::{commands, Cli};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    if let Err(e) = commands::run(&cli).await {
        print_error_with_json(&e, cli.json_errors);
        std::process::exit(1);
    }
}
