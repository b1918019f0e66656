#![forbid(unsafe_code)]

//! IONWAVE event page binary entry point.

use marquee_core::capability::CapabilitySnapshot;
use marquee_fx::quality::QualityProfile;
use marquee_runtime::{Program, ProgramConfig};
use marquee_site::app::{PageModel, PageOptions};
use marquee_site::cli;

fn main() {
    init_tracing();
    let opts = cli::Opts::parse();

    // The one capability read of the session: the tier is decided here and
    // kept for the session's lifetime.
    let snapshot = CapabilitySnapshot::detect();
    let quality = match opts.quality {
        Some(tier) => QualityProfile::forced(tier, &snapshot),
        None => QualityProfile::from_snapshot(&snapshot),
    };

    let config = ProgramConfig {
        max_fps: opts.fps.unwrap_or(quality.tuning.max_fps),
        mouse: opts.mouse,
        ..ProgramConfig::default()
    };
    let model = PageModel::new(PageOptions {
        quality,
        no_fx: opts.no_fx,
        seed: opts.seed.unwrap_or(0x494f_4e57),
        frame_step: config.frame_interval(),
    });

    if let Err(e) = Program::with_config(model, config).run() {
        eprintln!("runtime error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    if std::env::var("MARQUEE_LOG").is_err() {
        return;
    }
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("MARQUEE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
