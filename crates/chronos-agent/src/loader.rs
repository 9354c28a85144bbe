//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per agent.  Row order becomes `AgentId` order.
//!
//! ```csv
//! name,team,x,y,speed,health,move_range,attack_range,damage
//! knight,ally,0,0,10,100,3,1,20
//! goblin,enemy,3,0,5,30,3,1,20
//! ```
//!
//! `team` is `ally` or `enemy` (case-insensitive).  Stats are validated the
//! same way as [`RosterBuilder`][crate::RosterBuilder] does.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use chronos_core::{Position, Team};

use crate::{AgentRoster, AgentStats, RosterBuilder, RosterError, RosterResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    name:         String,
    team:         String,
    x:            i32,
    y:            i32,
    speed:        i32,
    health:       i32,
    move_range:   u32,
    attack_range: u32,
    damage:       i32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an `AgentRoster` from a CSV file.
pub fn load_roster_csv(path: &Path) -> RosterResult<AgentRoster> {
    let file = std::fs::File::open(path).map_err(RosterError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
pub fn load_roster_reader<R: Read>(reader: R) -> RosterResult<AgentRoster> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut builder = RosterBuilder::new();

    for result in csv_reader.deserialize::<RosterRecord>() {
        let row = result.map_err(|e| RosterError::Parse(e.to_string()))?;
        let team: Team = row.team.parse()?;
        let stats = AgentStats {
            speed:        row.speed,
            health:       row.health,
            move_range:   row.move_range,
            attack_range: row.attack_range,
            damage:       row.damage,
        };
        builder = builder.agent(row.name, team, Position::new(row.x, row.y), stats);
    }

    builder.build()
}
