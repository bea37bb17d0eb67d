//! Scytale - interactive classical cipher teaching tool.

use std::io;

use tracing::error;

fn main() {
    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = scytale_cli::run(&mut stdin.lock(), &mut stdout.lock()) {
        error!(%err, "shell terminated on I/O error");
        eprintln!("I/O error: {err}");
        std::process::exit(1);
    }
}

/// Initialize tracing with environment-based log levels.
///
/// Diagnostics go to stderr so they never interleave with the prompts on
/// stdout.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scytale_cli=info")),
        )
        .init();
}
