//! Command-line launcher.
//!
//! ```bash
//! fourierplot                              # three spirographs
//! fourierplot --preset simple --manual     # step with Ctrl+click
//! fourierplot --scene my_curves.yaml --fixed-view 2
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for producer and
//! render details.

use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use fourierplot::{
    run_fourier, FourierConfig, Modifier, Pipeline, PipelineSettings, Preset, RunError, Scene,
    ViewBounds,
};

#[derive(Debug, Parser)]
#[command(name = "fourierplot", version, about = "Live complex Fourier / spirograph plotter")]
struct Cli {
    /// Scene file (YAML, or JSON with a .json extension). Overrides --preset.
    #[arg(long, value_name = "FILE")]
    scene: Option<PathBuf>,

    /// Built-in scene: simple | spirographs
    #[arg(long, default_value_t = Preset::Spirographs)]
    preset: Preset,

    /// Redraw only on Ctrl+click (or the modifier given by --modifier).
    #[arg(long)]
    manual: bool,

    /// Modifier held while releasing the primary button to step in manual mode.
    #[arg(long, value_name = "MOD")]
    modifier: Option<Modifier>,

    /// Samples per producer batch.
    #[arg(long, value_name = "N")]
    steps_per_batch: Option<usize>,

    /// Rotation-counter steps per full rotation (theta = 1).
    #[arg(long, value_name = "N")]
    full_rotation: Option<u64>,

    /// Sleep between producer batches in milliseconds.
    #[arg(long, value_name = "MS")]
    pacing_ms: Option<u64>,

    /// Render tick interval in milliseconds.
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Pin the view to [-HALF, HALF] on both axes.
    #[arg(long, value_name = "HALF")]
    fixed_view: Option<f64>,

    /// Use the dark theme.
    #[arg(long)]
    dark: bool,
}

impl Cli {
    /// Command-line values win over scene settings.
    fn apply_to(&self, s: &mut PipelineSettings) {
        if let Some(v) = self.steps_per_batch {
            s.steps_per_batch = v;
        }
        if let Some(v) = self.full_rotation {
            s.full_rotation_denominator = v;
        }
        if let Some(v) = self.pacing_ms {
            s.producer_pacing_ms = v;
        }
        if let Some(v) = self.tick_ms {
            s.render_tick_ms = v;
        }
        if self.manual {
            s.manual = true;
        }
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    let scene = match &cli.scene {
        Some(path) => Scene::load(path)?,
        None => {
            info!("using built-in preset '{}'", cli.preset);
            cli.preset.scene()
        }
    };

    let mut settings = PipelineSettings::default();
    scene.settings.apply_to(&mut settings);
    cli.apply_to(&mut settings);

    let mut pipeline = Pipeline::new(settings)?;
    scene.register_into(&mut pipeline)?;

    let cfg = FourierConfig {
        advance_modifier: cli.modifier.unwrap_or_default(),
        fixed_view: cli.fixed_view.map(ViewBounds::symmetric),
        dark_mode: cli.dark,
        ..FourierConfig::default()
    };
    run_fourier(pipeline, cfg)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
