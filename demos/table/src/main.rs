//! dp-table — run the dining philosophers table from the command line.
//!
//! # Example
//!
//! ```bash
//! # Five seats, cooperative protocol, CSV output
//! dp-table --strategy cooperative --ticks 2000 --out output/table
//!
//! # Same seed, all three protocols side by side
//! dp-table --philosophers 7 --hungry-chance 0.9 --full-chance 0.3 --compare
//!
//! # Parameters from a JSON file, CLI flags override
//! dp-table --config run.json --seed 7
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dp_agent::Philosopher;
use dp_core::{RunConfig, Strategy, Tick};
use dp_metrics::{MetricsSnapshot, eating_count_gap};
use dp_output::{CsvWriter, MetricsOutputObserver};
use dp_sim::{Model, ModelObserver, NoopObserver};

/// Dining philosophers table
///
/// Single-threaded and reproducible: the same seed and parameters always
/// produce the same run.
#[derive(Parser, Debug)]
#[command(name = "dp-table")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON run description; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of philosophers (at least 3)
    #[arg(short = 'p', long)]
    philosophers: Option<u32>,

    /// Fork protocol: naive, atomic, or cooperative
    #[arg(short = 's', long)]
    strategy: Option<Strategy>,

    /// Per-tick chance a thinking philosopher gets hungry
    #[arg(long)]
    hungry_chance: Option<f64>,

    /// Per-tick chance an eating philosopher is done
    #[arg(long)]
    full_chance: Option<f64>,

    /// Steps to simulate
    #[arg(short = 't', long)]
    ticks: Option<u64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write metrics and snapshots as CSV into this directory
    #[arg(short = 'o', long)]
    out: Option<PathBuf>,

    /// Run every strategy with the same seed and print a comparison
    #[arg(long)]
    compare: bool,
}

impl Args {
    fn run_config(&self) -> Result<RunConfig> {
        let mut run = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => RunConfig::default(),
        };

        if let Some(p) = self.philosophers {
            run.model.num_philosophers = p;
        }
        if let Some(s) = self.strategy {
            run.model.strategy = s;
        }
        if let Some(h) = self.hungry_chance {
            run.model.hungry_chance = h;
        }
        if let Some(f) = self.full_chance {
            run.model.full_chance = f;
        }
        if let Some(t) = self.ticks {
            run.total_ticks = t;
        }
        if let Some(seed) = self.seed {
            run.seed = seed;
        }
        run.model.validate()?;
        Ok(run)
    }
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Logs progress every tenth of the run and forwards to an optional writer.
struct Progress<O> {
    every: u64,
    inner: O,
}

impl<O: ModelObserver> ModelObserver for Progress<O> {
    fn on_step_start(&mut self, tick: Tick) {
        self.inner.on_step_start(tick);
    }

    fn on_step_end(&mut self, tick: Tick, metrics: &MetricsSnapshot) {
        if tick.is_every(self.every) {
            info!(
                tick       = tick.0,
                eating     = metrics.states.eating,
                hungry     = metrics.states.hungry,
                throughput = metrics.throughput,
                "progress"
            );
        }
        self.inner.on_step_end(tick, metrics);
    }

    fn on_snapshot(&mut self, tick: Tick, philosophers: &[Philosopher], forks: &[dp_agent::Fork]) {
        self.inner.on_snapshot(tick, philosophers, forks);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.inner.on_run_end(final_tick);
    }
}

// ── Runs ──────────────────────────────────────────────────────────────────────

fn run_one(run: &RunConfig, out: Option<&Path>) -> Result<Model> {
    let mut model = Model::from_run_config(run)?;
    let every = (run.total_ticks / 10).max(1);

    match out {
        Some(dir) => {
            let writer = CsvWriter::new(dir)?;
            let mut obs = Progress { every, inner: MetricsOutputObserver::new(writer) };
            model.run(run.total_ticks, &mut obs);
            if let Some(e) = obs.inner.take_error() {
                return Err(e).context("writing output");
            }
            info!(dir = %dir.display(), "output written");
        }
        None => {
            let mut obs = Progress { every, inner: NoopObserver };
            model.run(run.total_ticks, &mut obs);
        }
    }
    Ok(model)
}

fn print_summary(model: &Model) {
    let m = model.metrics_snapshot();
    println!("{}", model.render_ring());
    println!();
    println!(
        "{:<8} {:<10} {:>8} {:>10} {:>10}",
        "Seat", "State", "Eaten", "Meals", "Waited"
    );
    println!("{}", "-".repeat(50));
    for p in model.philosophers() {
        println!(
            "{:<8} {:<10} {:>8} {:>10} {:>10}",
            p.id.seat(),
            p.state,
            p.total_eaten,
            p.eating_count,
            p.total_wait_time,
        );
    }
    println!();
    println!(
        "throughput {:.4}  avg wait {:.2}  eating-count gap {}",
        m.throughput,
        m.avg_wait_time,
        eating_count_gap(model.philosophers()),
    );
}

fn compare(run: &RunConfig, out: Option<&Path>) -> Result<()> {
    println!(
        "{:<12} {:>12} {:>10} {:>8} {:>10}",
        "Strategy", "Throughput", "Avg wait", "Gap", "Eaten"
    );
    println!("{}", "-".repeat(56));

    for strategy in Strategy::ALL {
        let mut this = run.clone();
        this.model.strategy = strategy;
        let dir = out.map(|d| d.join(strategy.as_str()));
        let model = run_one(&this, dir.as_deref())?;

        let m = model.metrics_snapshot();
        println!(
            "{:<12} {:>12.4} {:>10.2} {:>8} {:>10}",
            strategy,
            m.throughput,
            m.avg_wait_time,
            eating_count_gap(model.philosophers()),
            m.total_eaten(),
        );
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,dp_sim=info,dp_table=info")),
        )
        .init();

    let args = Args::parse();
    let run = args.run_config()?;

    info!(
        philosophers  = run.model.num_philosophers,
        strategy      = %run.model.strategy,
        hungry_chance = run.model.hungry_chance,
        full_chance   = run.model.full_chance,
        ticks         = run.total_ticks,
        seed          = run.seed,
        "starting"
    );

    let t0 = Instant::now();
    if args.compare {
        compare(&run, args.out.as_deref())?;
    } else {
        let model = run_one(&run, args.out.as_deref())?;
        print_summary(&model);
    }
    info!(elapsed_secs = t0.elapsed().as_secs_f64(), "done");
    Ok(())
}
