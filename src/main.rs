//! AscendiMed frontend - Dioxus app.
//! Default: web (cargo run). Desktop: cargo run --features desktop.

#[cfg(feature = "desktop")]
fn main() {
    use dioxus::prelude::*;
    use ascendimed_frontend::app::App;
    use ascendimed_frontend::config::AppConfig;

    let config = AppConfig::global();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .init();
    tracing::info!(initial_route = ?config.initial_route, "Starting AscendiMed desktop app");
    launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
fn main() {
    // The browser build is driven by the Dioxus CLI, which compiles this crate
    // for wasm32 and serves it.
    let status = std::process::Command::new("dx").arg("serve").status();
    match status {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {}", e);
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            std::process::exit(1);
        }
    }
}
