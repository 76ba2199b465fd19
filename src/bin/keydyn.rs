// Keydyn Replay CLI
// Replays a raw keyboard signal log through a capture session and
// reports the timing analysis

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use keydyn_core::{
    dwell_by_key, mean_ms, summarize, CaptureSession, JsonLinesSink, ManualClock, MemorySink,
    Settings, SignalLog,
};

/// Keystroke timing capture replay and analysis
#[derive(Parser, Debug)]
#[command(name = "keydyn")]
#[command(author = "keydyn contributors")]
#[command(version)]
#[command(about = "Replay and analyze keystroke timing logs", long_about = None)]
struct Args {
    /// JSON-lines signal log to replay ("-" for stdin)
    #[arg(value_name = "LOG", default_value = "-")]
    input: String,

    /// TOML settings file (default: ~/.config/keydyn/settings.toml)
    #[arg(short, long, value_name = "SETTINGS")]
    settings: Option<PathBuf>,

    /// Stream every published payload as a JSON line instead of only
    /// printing the final sequence
    #[arg(long)]
    emit_payloads: bool,

    /// Validate the signal log and exit
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn read_input(input: &str) -> anyhow::Result<Box<dyn Read>> {
    if input == "-" {
        Ok(Box::new(io::stdin()))
    } else {
        let file =
            File::open(input).with_context(|| format!("cannot open signal log '{input}'"))?;
        Ok(Box::new(file))
    }
}

fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    match &args.settings {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("cannot load settings from '{}'", path.display())),
        None => Settings::load_default().context("cannot load default settings"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let settings = load_settings(&args)?;

    let reader = BufReader::new(read_input(&args.input)?);
    let log = SignalLog::from_reader(reader).context("cannot parse signal log")?;

    if args.check {
        println!("{} signals OK", log.len());
        return Ok(());
    }

    log::debug!("replaying {} signals", log.len());
    let mut session = CaptureSession::with_clock(ManualClock::default());

    if args.emit_payloads {
        // Mirror the live publish cadence: one JSON line per release
        let stdout = io::stdout();
        let mut sink = JsonLinesSink::new(stdout.lock());
        log.drive(&mut session, &mut sink)?;
    } else {
        let mut sink = MemorySink::new();
        log.drive(&mut session, &mut sink)?;

        let sequence = if settings.pretty_json() {
            serde_json::to_string_pretty(session.records())?
        } else {
            serde_json::to_string(session.records())?
        };
        println!("{sequence}");
    }

    let summary = summarize(session.records());
    if settings.report_flight() {
        println!("Flight times (ms): {:?}", summary.flight_times);
        if let Some(mean) = summary.mean_flight_ms {
            println!("Mean flight time: {mean:.1} ms");
        }
    }
    if settings.report_dwell() {
        println!("Dwell times (ms): {:?}", summary.dwell_times);
        if let Some(mean) = summary.mean_dwell_ms {
            println!("Mean dwell time: {mean:.1} ms");
        }
        for (key, dwells) in dwell_by_key(session.records()) {
            let mean = mean_ms(&dwells).unwrap_or(0.0);
            println!("  {key}: {dwells:?} (mean {mean:.1} ms)");
        }
    }

    Ok(())
}
