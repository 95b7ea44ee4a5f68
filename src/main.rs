use ingext::{
    commands::{create_cli_commands, params::PARAMETER_VERBOSE},
    configuration::ProfileStore,
};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::execute_command;

/// Main entry point for the program
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let commands = create_cli_commands();

    // RUST_LOG wins over --verbose
    let default_level = if commands.get_flag(PARAMETER_VERBOSE) {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = ProfileStore::load_default();

    if let Err(e) = execute_command(&commands, store).await {
        eprintln!("ERROR: {}", e);
        ::std::process::exit(1);
    }
}
