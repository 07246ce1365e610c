//! Binary entry point for the enum bindings generator.
//!
//! Takes no arguments: every path is fixed relative to the repository
//! root. Run with: cargo run -p loot_codegen

use std::path::Path;
use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;

use loot_codegen::Paths;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // crates/loot_codegen -> repository root
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let paths = Paths::repo_default(&root);

    if let Err(err) = loot_codegen::generate_all(&paths) {
        error!("enum bindings generation failed: {err}");
        process::exit(1);
    }
}
