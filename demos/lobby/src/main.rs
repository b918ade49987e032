//! lobby: demo host for the rust_lift single-car simulator.
//!
//! ```text
//! lobby simulate [--scenario morning.csv] [--traffic 0.02 --max-calls 40] [--out output/lobby]
//! lobby live     [--config car.json] [--floors 12]
//! ```
//!
//! `simulate` replays a scripted scenario as fast as possible and writes
//! `car_events.csv` and `tick_summaries.csv`.  `live` runs the car in real
//! time and reads button presses from stdin.

mod command;

use std::io::{self, BufRead, Cursor, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use lift_core::CarConfig;
use lift_orders::{load_requests_csv, load_requests_reader};
use lift_output::{CsvWriter, EventLogObserver};
use lift_sim::{Controller, PeriodicDriver, SimBuilder, TrafficConfig};

use command::{Command, HELP};

// ── Embedded scenario ─────────────────────────────────────────────────────────

// Ten floors, 100 ms ticks.  A morning rush: calls from the lobby going up,
// a couple of people heading down, and one out-of-range press.
const MORNING_CSV: &str = "\
tick,floor,kind\n\
0,1,up\n\
0,8,car\n\
15,4,down\n\
40,6,up\n\
40,11,up\n\
90,1,up\n\
90,3,car\n\
120,10,down\n\
200,2,down\n\
";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "lobby", version, about = "Single-car elevator dispatch simulator")]
struct Cli {
    #[command(flatten)]
    car: CarArgs,

    #[command(subcommand)]
    command: Mode,
}

/// Car configuration: a JSON file, then per-field overrides.
#[derive(Args, Debug)]
struct CarArgs {
    /// JSON car configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of floors served.
    #[arg(long, global = true)]
    floors: Option<u32>,

    /// Seconds to travel one floor.
    #[arg(long, global = true)]
    travel_secs: Option<u32>,

    /// Seconds the doors stay open per stop.
    #[arg(long, global = true)]
    door_secs: Option<u32>,

    /// Milliseconds per clock tick.
    #[arg(long, global = true)]
    tick_millis: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Replay a scenario offline and write CSV output.
    Simulate(SimulateArgs),

    /// Run the car in real time, reading commands from stdin.
    Live,

    /// Print the effective configuration as JSON.
    Config,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Scenario CSV (`tick,floor,kind`).  Defaults to a built-in morning rush.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Output directory.
    #[arg(long, default_value = "output/lobby")]
    out: PathBuf,

    /// Floor the car starts on.
    #[arg(long, default_value_t = 1)]
    start_floor: i32,

    /// Per-tick probability of a random request.
    #[arg(long, default_value_t = 0.0)]
    traffic: f64,

    /// Upper bound on random requests.
    #[arg(long, default_value_t = 0)]
    max_calls: u32,

    /// Seed for random traffic.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Give up after this many ticks.
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u64,
}

impl CarArgs {
    fn resolve(&self) -> Result<CarConfig> {
        let mut config = match &self.config {
            Some(path) => CarConfig::load_json(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => CarConfig::default(),
        };
        if let Some(v) = self.floors      { config.total_floors = v; }
        if let Some(v) = self.travel_secs { config.floor_travel_secs = v; }
        if let Some(v) = self.door_secs   { config.door_open_secs = v; }
        if let Some(v) = self.tick_millis { config.tick_millis = v; }
        config.validate()?;
        Ok(config)
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.car.resolve()?;

    match cli.command {
        Mode::Simulate(args) => simulate(config, &args),
        Mode::Live => live(config),
        Mode::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).with_writer(io::stderr).try_init();
}

// ── simulate ──────────────────────────────────────────────────────────────────

fn simulate(config: CarConfig, args: &SimulateArgs) -> Result<()> {
    println!("=== lobby offline run ===");
    println!(
        "Floors: {}  |  Travel: {} s/floor  |  Doors: {} s  |  Tick: {} ms",
        config.total_floors, config.floor_travel_secs, config.door_open_secs, config.tick_millis,
    );

    // 1. Scenario.
    let script = match &args.scenario {
        Some(path) => load_requests_csv(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => load_requests_reader(Cursor::new(MORNING_CSV))?,
    };
    println!("Scripted requests: {}", script.len());

    // 2. Output.
    let writer = CsvWriter::new(&args.out)?;
    let observer = EventLogObserver::new(writer, &config);

    // 3. Build.
    let mut builder = SimBuilder::new(config.clone())
        .observer(observer)
        .script(script)
        .start_floor(args.start_floor);
    if args.max_calls > 0 && args.traffic > 0.0 {
        builder = builder.traffic(TrafficConfig {
            seed:             args.seed,
            call_probability: args.traffic,
            max_calls:        args.max_calls,
        });
        println!("Random traffic: p={} per tick, up to {} calls", args.traffic, args.max_calls);
    }
    let mut sim = builder.build()?;
    println!();

    // 4. Run.
    let t0 = Instant::now();
    let summary = sim.run_until_idle(args.max_ticks)?;
    let elapsed = t0.elapsed();

    if let Some(mut obs) = sim.into_observer() {
        if let Some(e) = obs.take_error() {
            eprintln!("output error: {e}");
        }
    }

    // 5. Summary.
    let clock_secs = summary.final_tick.0 as f64 * config.tick_millis as f64 / 1_000.0;
    println!("Simulation complete in {:.3} s ({clock_secs:.1} s simulated)", elapsed.as_secs_f64());
    print_output_paths(&args.out);
    println!();
    println!("{:<14} {}", "Final tick", summary.final_tick);
    println!("{:<14} {}", "Final floor", summary.final_floor);
    println!("{:<14} {}", "Final state", summary.final_state);
    println!("{:<14} {}", "Accepted", summary.accepted);
    println!("{:<14} {}", "Rejected", summary.rejected);
    println!("{:<14} {}", "Pending", summary.pending);
    if !summary.completed {
        println!("(tick limit {} reached before the car came to rest)", args.max_ticks);
    }
    Ok(())
}

fn print_output_paths(dir: &Path) {
    for name in ["car_events.csv", "tick_summaries.csv"] {
        println!("  {}", dir.join(name).display());
    }
}

// ── live ──────────────────────────────────────────────────────────────────────

fn live(config: CarConfig) -> Result<()> {
    let controller = Controller::new(config)?;
    let driver = PeriodicDriver::spawn(controller.clone())?;
    info!("car ready on floor {}", controller.current_floor());
    println!("{HELP}");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(cmd) => writeln!(stdout, "{}", command::execute(&controller, cmd))?,
            Err(e) => writeln!(stdout, "{e}")?,
        }
        stdout.flush()?;
    }

    let ticks = driver.stop()?;
    info!(ticks, floor = %controller.current_floor(), "live session ended");
    Ok(())
}
