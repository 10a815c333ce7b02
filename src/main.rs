use clap::Parser;
use env_logger::{Builder, Env};

mod cli;

fn init_logger() {
    // RUST_LOG=debug shows per-file progress.
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn main() {
    init_logger();
    cli::run(cli::Cli::parse());
}
