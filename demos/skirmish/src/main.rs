//! skirmish: smallest example for the chronos turn scheduler.
//!
//! Three allies face three enemies on a 10×10 grid.  The battle runs with
//! real pauses (scaled down) and the player's wand is used at fixed points:
//! accelerate after the opening turns, a rewind in the middle, and a slow on
//! the enemy line before the fight is played out.
//!
//! Pass `--fast` to run on a virtual clock instead of sleeping.
//! Set `RUST_LOG=debug` to see the scheduler's own logging.

use std::io::Cursor;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use chronos_agent::{Agent, AgentRoster, load_roster_reader};
use chronos_behavior::TurnEvent;
use chronos_core::{AgentId, Pacer, PacingConfig, SleepPacer, TurnNumber, VirtualClock};
use chronos_grid::GridConfig;
use chronos_sim::{BattleOutcome, ChronosWand, SchedulerBuilder, TurnObserver, TurnScheduler};

// ── Constants ─────────────────────────────────────────────────────────────────

const PACING_SCALE:  f32 = 0.25; // quarter-speed pauses keep the demo short
const OPENING_TURNS: u64 = 3;
const MIDGAME_TURNS: u64 = 4;
const MAX_TURNS:     u64 = 200;

// ── Roster CSV ────────────────────────────────────────────────────────────────

const ROSTER_CSV: &str = "\
name,team,x,y,speed,health,move_range,attack_range,damage\n\
knight,ally,1,4,8,120,3,1,25\n\
archer,ally,0,6,11,70,3,3,15\n\
cleric,ally,0,2,6,90,3,1,10\n\
brute,enemy,8,4,7,140,3,1,30\n\
sniper,enemy,9,7,10,60,3,4,18\n\
imp,enemy,8,1,14,40,3,1,12\n\
";

// ── Battle log observer ───────────────────────────────────────────────────────

struct BattleLog {
    names: Vec<String>,
}

impl BattleLog {
    fn new(roster: &AgentRoster) -> Self {
        Self { names: roster.iter().map(|a| a.name().to_string()).collect() }
    }

    fn name(&self, id: AgentId) -> &str {
        self.names.get(id.index()).map(String::as_str).unwrap_or("?")
    }
}

impl TurnObserver for BattleLog {
    fn on_turn_start(&mut self, turn: TurnNumber, agent: &Agent) {
        println!(
            "[{turn}] {} (spd {}, hp {}) at {}",
            agent.name(),
            agent.speed(),
            agent.health(),
            agent.position()
        );
    }

    fn on_event(&mut self, _turn: TurnNumber, event: &TurnEvent) {
        match event {
            TurnEvent::TargetSelected { .. } => {}
            TurnEvent::NoTarget { .. } => println!("    no enemies left"),
            TurnEvent::Moved { to, .. } => println!("    moves to {to}"),
            TurnEvent::MoveBlocked { toward, .. } => println!("    blocked at {toward}"),
            TurnEvent::Attacked(hit) => println!(
                "    hits {} for {} ({} left)",
                self.name(hit.target),
                hit.damage,
                hit.remaining_health
            ),
            TurnEvent::Died { agent, at } => println!("    {} falls at {at}", self.name(*agent)),
        }
    }

    fn on_rewind(&mut self, reverted: TurnNumber, _roster: &AgentRoster) {
        println!("<< time rewinds to before {reverted} >>");
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn print_queue(scheduler: &TurnScheduler) {
    let line: Vec<String> = scheduler
        .queue_preview()
        .into_iter()
        .filter_map(|id| scheduler.agent(id))
        .map(|a| format!("{}({})", a.name(), a.speed()))
        .collect();
    println!("  queue: {}", line.join(" → "));
}

fn play<P: Pacer>(scheduler: &mut TurnScheduler, pacer: &mut P, log: &mut BattleLog) -> BattleOutcome {
    let wand = ChronosWand::default();

    scheduler.run_turns(OPENING_TURNS, pacer, log);
    print_queue(scheduler);

    println!("\n* accelerate");
    if let Some(id) = wand.accelerate(scheduler) {
        println!("  {} acts next", log.name(id));
    }
    print_queue(scheduler);

    scheduler.run_turns(MIDGAME_TURNS, pacer, log);

    println!("\n* rewind");
    if wand.rewind(scheduler) {
        // Pending until the loop reaches its next decision point.
        scheduler.run_turns(1, pacer, log);
    }
    print_queue(scheduler);

    println!("\n* slow enemies");
    wand.slow_enemies(scheduler);
    print_queue(scheduler);
    println!();

    scheduler.run_until_done(MAX_TURNS, pacer, log)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .try_init();

    let fast = std::env::args().any(|a| a == "--fast");

    println!("=== skirmish: chronos turn scheduler ===");

    let roster = load_roster_reader(Cursor::new(ROSTER_CSV))?;
    println!("Loaded {} agents", roster.len());

    let mut log = BattleLog::new(&roster);
    let mut scheduler = SchedulerBuilder::with_grid_config(roster, &GridConfig::default())?
        .pacing(PacingConfig::default().scaled(PACING_SCALE))
        .build()?;
    print_queue(&scheduler);
    println!();

    let outcome = if fast {
        let mut clock = VirtualClock::new();
        let outcome = play(&mut scheduler, &mut clock, &mut log);
        println!("(virtual time: {:.2} s)", clock.elapsed().as_secs_f64());
        outcome
    } else {
        play(&mut scheduler, &mut SleepPacer, &mut log)
    };

    println!();
    match outcome {
        BattleOutcome::Victory(team) => println!("Victory: {team}"),
        BattleOutcome::Stalled       => println!("Nobody left standing"),
        BattleOutcome::TurnLimit     => println!("Stopped after {MAX_TURNS} more turns"),
    }
    println!("Turns played: {}", scheduler.turns_completed());
    println!();

    println!("{:<8} {:<6} {:>4} {:>4} {:<8}", "Agent", "Team", "HP", "Spd", "Cell");
    println!("{}", "-".repeat(34));
    for agent in scheduler.roster().iter() {
        println!(
            "{:<8} {:<6} {:>4} {:>4} {:<8}",
            agent.name(),
            agent.team().as_str(),
            agent.health(),
            agent.speed(),
            if agent.is_alive() { agent.position().to_string() } else { "-".to_string() },
        );
    }

    Ok(())
}
