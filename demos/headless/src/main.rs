//! headless — scripted run of the snake world without a window.
//!
//! The player's cursor tours a rectangle of waypoints inside the arena while
//! prey, predators and enemy snakes steer on their own.  Partway through, the
//! player switches to formation mode for a few seconds and then resumes the
//! chase.  Body positions and per-tick counters are written as CSV.
//!
//! Usage: `headless [config.json]`.  The optional file holds a serialized
//! `WorldConfig`; missing fields fall back to their defaults.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sn_core::{Tick, Vec2};
use sn_output::{CsvWriter, OutputWriter, WorldOutputObserver};
use sn_world::{
    Status, TickSummary, Waypoints, World, WorldBuilder, WorldConfig, WorldEvent, WorldObserver,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:      &str = "output/headless";
const CHASE_TICKS:     u64  = 900; // 15 s at 60 ticks per second
const FORMATION_TICKS: u64  = 240;
const WAYPOINT_INSET:  f32  = 150.0;
const WAYPOINT_REACH:  f32  = 40.0;

// ── Observer wrapper to count rows and events ─────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         WorldOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    food_eaten:    usize,
    prey_eaten:    usize,
    food_stolen:   usize,
    slowdowns:     usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: WorldOutputObserver<W>) -> Self {
        Self {
            inner,
            snapshot_rows: 0,
            summary_rows:  0,
            food_eaten:    0,
            prey_eaten:    0,
            food_stolen:   0,
            slowdowns:     0,
        }
    }

    /// Flush the writer once every phase has run.
    fn close(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

impl<W: OutputWriter> WorldObserver for CountingObserver<W> {
    fn on_event(&mut self, tick: Tick, event: &WorldEvent) {
        match event {
            WorldEvent::FoodEaten { .. } => self.food_eaten += 1,
            WorldEvent::PreyEaten { .. } => self.prey_eaten += 1,
            WorldEvent::FoodStolen { .. } => self.food_stolen += 1,
            WorldEvent::Slowed => self.slowdowns += 1,
            WorldEvent::LevelComplete { level, score } => {
                println!("{tick}: level {level} complete, score {score}");
            }
            WorldEvent::Lost { cause } => println!("{tick}: lost ({cause:?})"),
            WorldEvent::Won { score } => println!("{tick}: won with score {score}"),
            _ => {}
        }
        self.inner.on_event(tick, event);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.summary_rows += 1;
        self.inner.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, tick: Tick, world: &World) {
        self.snapshot_rows += world.agents().map(|a| a.chain.len()).sum::<usize>();
        self.inner.on_snapshot(tick, world);
    }

    // The run is split into phases; the writer is closed by `close`.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config() -> Result<WorldConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(WorldConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("headless=info,sn_world=info")),
        )
        .init();
}

/// Clockwise rectangle `WAYPOINT_INSET` inside the arena.
fn tour(config: &WorldConfig) -> Waypoints {
    let a = config.sim.arena;
    let (l, t) = (a.x + WAYPOINT_INSET, a.y + WAYPOINT_INSET);
    let (r, b) = (a.right() - WAYPOINT_INSET, a.bottom() - WAYPOINT_INSET);
    Waypoints::new(
        vec![Vec2::new(l, t), Vec2::new(r, t), Vec2::new(r, b), Vec2::new(l, b)],
        WAYPOINT_REACH,
    )
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let config = load_config()?;

    println!("=== headless — snake steering world ===");
    println!(
        "Seed: {}  |  Ticks: {}  |  Levels: {}",
        config.sim.seed,
        config.sim.total_ticks,
        config.max_level()
    );
    println!();

    // 1. Build the world at level 1, fully populated.
    let mut cursor = tour(&config);
    let mut world = WorldBuilder::new(config).build()?;
    info!(
        agents = world.agents().count(),
        food = world.food().len(),
        obstacles = world.obstacles().len(),
        "world ready"
    );

    // 2. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(WorldOutputObserver::new(writer));

    // 3. Chase, spell the word, chase again until the clock runs out.
    let t0 = Instant::now();
    let mut status = world.run(CHASE_TICKS, &mut cursor, &mut obs);
    if status == Status::Running {
        world.enter_formation();
        status = world.run(FORMATION_TICKS, &mut cursor, &mut obs);
        world.enter_chase();
    }
    if status == Status::Running {
        status = world.run_to_end(&mut cursor, &mut obs);
    }
    obs.close(world.now());
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!();
    println!("Finished ({status:?}) in {:.3} s", elapsed.as_secs_f64());
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!(
        "  food eaten {}  |  prey eaten {}  |  food stolen {}  |  slowdowns {}",
        obs.food_eaten, obs.prey_eaten, obs.food_stolen, obs.slowdowns
    );
    println!("{}", serde_json::to_string_pretty(&world.summary())?);
    println!();

    // 5. Final snake table.
    println!("{:<12} {:<10} {:>8} {:>18}", "Agent", "Kind", "Bodies", "Head");
    println!("{}", "-".repeat(51));
    for agent in world.agents() {
        println!(
            "{:<12} {:<10} {:>8} {:>18}",
            agent.id.to_string(),
            agent.kind,
            agent.chain.len(),
            agent.head().pos.to_string(),
        );
    }

    Ok(())
}
