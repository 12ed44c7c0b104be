use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use brand_renderer::batch::BatchGenerator;
use brand_renderer::config::GeneratorConfig;
use brand_renderer::svg::Rasterizer;
use brand_renderer::{Composer, DesignTokens, Result, TokenResolver};

/// Generates the brand asset tree from a design-token document.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML settings file.
    #[arg(short, long, default_value = "brand-renderer.toml")]
    config: PathBuf,

    /// Design-token JSON document.
    #[arg(short, long)]
    tokens: Option<PathBuf>,

    /// Output directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    arc_steps: Option<u32>,

    #[arg(long)]
    seed: Option<u32>,

    /// Write SVG and text outputs only.
    #[arg(long)]
    no_raster: bool,
}

impl Cli {
    fn into_config(self) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig::load_or_default(&self.config)?;
        if let Some(tokens) = self.tokens {
            config.tokens = tokens;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(steps) = self.arc_steps {
            config.arc_steps = steps;
        }
        if let Some(seed) = self.seed {
            config.particle_seed = seed;
        }
        if self.no_raster {
            config.rasterize = false;
        }
        Ok(config)
    }
}

fn run(config: &GeneratorConfig) -> Result<bool> {
    let resolver = TokenResolver::new(DesignTokens::from_path(&config.tokens)?);
    let composer = Composer::new(&resolver)
        .with_arc_steps(config.arc_steps)
        .with_particle_seed(config.particle_seed);

    let mut generator = BatchGenerator::new(composer, config.catalog());
    generator = if config.rasterize {
        generator.with_rasterizer(Rasterizer::with_system_fonts())
    } else {
        generator.without_rasters()
    };

    let report = generator.run(&config.output_dir);
    println!(
        "{} files written to {} ({} skipped, {} failed)",
        report.written.len(),
        config.output_dir.display(),
        report.skipped.len(),
        report.failures.len(),
    );
    for failure in &report.failures {
        eprintln!("  {}: {}", failure.path.display(), failure.error);
    }
    Ok(report.is_success())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("brand_renderer=info")),
        )
        .init();

    let result = Cli::parse().into_config().and_then(|config| run(&config));
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
