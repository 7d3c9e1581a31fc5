//! Lobster Boxing entry point
//!
//! Headless runner: drives a session from a scripted key timeline on a
//! virtual clock and prints what happened. A windowed frontend hooks into the
//! same `Session` API.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use lobster_boxing::script::{self, Script};
use lobster_boxing::{ConfigError, Session, Settings, Tuning};

#[derive(Parser, Debug)]
#[command(name = "lobster-boxing", about = "Two-player lobster boxing simulation")]
struct Args {
    /// Key event timeline (JSON); without one the match idles for --idle-ms
    #[arg(long)]
    script: Option<PathBuf>,

    /// Tuning overrides (JSON)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Settings file (JSON); defaults are used if it does not exist
    #[arg(long, default_value = "lobster_boxing_settings.json")]
    settings: PathBuf,

    /// Host frame period used to step the virtual clock
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    host_frame_ms: u64,

    /// Run time when no script is given
    #[arg(long, default_value_t = 3000)]
    idle_ms: u64,

    /// Print the final render view alongside the summary
    #[arg(long)]
    dump_view: bool,
}

fn load(args: &Args) -> Result<(Tuning, Settings, Script), ConfigError> {
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let settings = Settings::load_or_default(&args.settings)?;
    let script = match &args.script {
        Some(path) => Script::load(path)?,
        None => Script {
            duration_ms: Some(args.idle_ms),
            events: Vec::new(),
        },
    };
    Ok((tuning, settings, script))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Lobster Boxing (headless) starting...");

    // Never start a match on a half-loaded configuration
    let (tuning, settings, script) = match load(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Startup failed: {e}");
            eprintln!("lobster-boxing: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(tuning, &settings, 0);
    let summary = script::run(&mut session, &script, args.host_frame_ms);

    let output = if args.dump_view {
        serde_json::to_string_pretty(&summary)
    } else {
        serde_json::to_string_pretty(&serde_json::json!({
            "frames": summary.frames,
            "hits": summary.hits,
            "knockouts": summary.knockouts,
            "resets": summary.resets,
            "quit_at_ms": summary.quit_at_ms,
        }))
    };

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to encode summary: {e}");
            ExitCode::FAILURE
        }
    }
}
