//! calbridge binary — serves the bridge protocol over stdin/stdout.

use std::io;

use tracing_subscriber::EnvFilter;

fn main() {
    // stdout carries protocol responses; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("calbridge failed: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_os = "macos")]
fn run() -> io::Result<()> {
    use calbridge::store::event_kit::EventKitStore;
    use objc2_foundation::MainThreadMarker;

    let Some(mtm) = MainThreadMarker::new() else {
        return Err(io::Error::other(
            "the event store must be created on the main thread",
        ));
    };

    let store = EventKitStore::new(mtm);
    let stdin = io::stdin();
    calbridge::serve(&store, stdin.lock(), io::stdout())
}

#[cfg(not(target_os = "macos"))]
fn run() -> io::Result<()> {
    Err(io::Error::other(
        "the device calendar store is only available on macOS",
    ))
}
