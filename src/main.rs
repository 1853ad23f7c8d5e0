//! sfxgen binary: generates the built-in game audio asset set.
//!
//! Runs with no required arguments; flags and `SFXGEN_*` environment
//! variables override the defaults.

use sfxgen::cli::Cli;
use sfxgen::config::GeneratorConfig;
use sfxgen::error::Result;
use sfxgen::manifest::MANIFEST_FILE;
use sfxgen::pipeline::generate_all;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = cli.apply_to(GeneratorConfig::from_env());

    println!("Generating audio files...");
    let manifest = generate_all(&config)?;

    println!();
    println!("✓ Audio files generated successfully!");
    println!("  Files are in: {}", config.effective_output_dir().display());
    println!(
        "  {} assets recorded in {}",
        manifest.assets.len(),
        MANIFEST_FILE
    );

    Ok(())
}
