// Print a theme color as rgba() at a given opacity.
// Usage: cargo run --bin with-opacity -- "#2196F3" --opacity 0.12

use ascendimed_frontend::color::{self, Rgba};
use ascendimed_frontend::config::AppConfig;
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "with-opacity", about = "Render a hex color as rgba() with the given opacity")]
struct Args {
    /// Hex color: RGB, RGBA, RRGGBB or AARRGGBB, optional leading '#'.
    color: String,

    /// Opacity, clamped to [0, 1].
    #[arg(short, long, default_value_t = color::DEFAULT_OPACITY, allow_negative_numbers = true)]
    opacity: f64,

    /// Reject malformed colors instead of falling back to black.
    #[arg(long)]
    strict: bool,

    /// Print the parsed channels as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let log_filter = AppConfig::log_filter_from_env();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.as_str().into()),
        )
        .init();

    let args = Args::parse();
    debug!(?args, "with-opacity");

    if args.strict {
        let rendered = color::try_with_opacity(&args.color, args.opacity)?;
        println!("{}", rendered);
        return Ok(());
    }

    let rgba = Rgba::from_hex(Some(&args.color), args.opacity);
    if !rgba.is_valid() {
        tracing::warn!(color = %args.color, "color has non-hex channels");
    }
    if args.json {
        println!("{}", serde_json::to_string(&rgba)?);
    } else {
        println!("{}", rgba);
    }
    Ok(())
}
