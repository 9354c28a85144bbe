//! Unit tests for chronos-grid.

use chronos_agent::{AgentRoster, AgentStats, RosterBuilder};
use chronos_core::{AgentId, Position, Team, WorldPoint};

use crate::{GridConfig, GridError, GridIndex};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn grid_10x10() -> GridIndex {
    GridIndex::new(&GridConfig::default()).unwrap()
}

/// Two agents: ally at (0,0), enemy at (3,0).
fn duel() -> AgentRoster {
    RosterBuilder::new()
        .agent("a", Team::Ally, Position::new(0, 0), AgentStats::default())
        .agent("b", Team::Enemy, Position::new(3, 0), AgentStats::default())
        .build()
        .unwrap()
}

fn registered_duel() -> (GridIndex, AgentRoster) {
    let roster = duel();
    let mut grid = grid_10x10();
    grid.rebuild(&roster);
    (grid, roster)
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        let cfg = GridConfig { width: 0, height: 5, tile_size: 1.0 };
        assert!(matches!(GridIndex::new(&cfg), Err(GridError::InvalidDimensions { .. })));
    }

    #[test]
    fn rejects_bad_tile_size() {
        for tile_size in [0.0, -1.0, f32::NAN] {
            let cfg = GridConfig { width: 3, height: 3, tile_size };
            assert!(GridIndex::new(&cfg).is_err(), "tile_size {tile_size}");
        }
    }

    #[test]
    fn reports_dimensions() {
        let grid = GridIndex::new(&GridConfig { width: 4, height: 7, tile_size: 2.0 }).unwrap();
        assert_eq!((grid.width(), grid.height(), grid.tile_size()), (4, 7, 2.0));
        assert_eq!(grid.occupied_count(), 0);
    }
}

#[cfg(test)]
mod coordinates {
    use super::*;

    #[test]
    fn grid_is_centred_on_origin() {
        let grid = grid_10x10();
        assert_eq!(grid.grid_to_world(Position::new(0, 0)), WorldPoint::new(-4.5, -4.5));
        assert_eq!(grid.grid_to_world(Position::new(9, 9)), WorldPoint::new(4.5, 4.5));
    }

    #[test]
    fn cell_centres_round_trip() {
        let grid = GridIndex::new(&GridConfig { width: 7, height: 4, tile_size: 1.5 }).unwrap();
        for x in 0..7 {
            for y in 0..4 {
                let p = Position::new(x, y);
                assert_eq!(grid.world_to_grid(grid.grid_to_world(p)), p);
            }
        }
    }

    #[test]
    fn world_points_snap_to_nearest_cell() {
        let grid = grid_10x10();
        assert_eq!(grid.world_to_grid(WorldPoint::new(-4.3, -4.6)), Position::new(0, 0));
        // Exactly between cells 4 and 5 on an odd-offset axis (offset 4.5):
        // 0.0 + 4.5 = 4.5 rounds half-to-even → 4.
        assert_eq!(grid.world_to_grid(WorldPoint::new(0.0, 0.0)), Position::new(4, 4));
    }

    #[test]
    fn clamp_to_bounds_clamps_each_axis() {
        let grid = grid_10x10();
        assert_eq!(grid.clamp_to_bounds(Position::new(-3, 12)), Position::new(0, 9));
        assert_eq!(grid.clamp_to_bounds(Position::new(5, 5)), Position::new(5, 5));
    }

    #[test]
    fn bounds_and_distance() {
        let grid = grid_10x10();
        assert!(grid.is_within_bounds(Position::new(9, 0)));
        assert!(!grid.is_within_bounds(Position::new(10, 0)));
        assert!(!grid.is_within_bounds(Position::new(0, -1)));
        assert_eq!(grid.distance(Position::new(1, 1), Position::new(4, 3)), 5);
    }
}

#[cfg(test)]
mod occupancy {
    use super::*;

    #[test]
    fn rebuild_registers_active_agents() {
        let (grid, roster) = registered_duel();
        assert_eq!(grid.agent_at(Position::new(0, 0)), Some(AgentId(0)));
        assert_eq!(grid.agent_at(Position::new(3, 0)), Some(AgentId(1)));
        assert!(!grid.is_walkable(Position::new(3, 0)));
        assert!(grid.is_walkable(Position::new(1, 0)));
        grid.verify(&roster).unwrap();
    }

    #[test]
    fn rebuild_skips_inactive_agents() {
        let mut roster = duel();
        let b = roster.get_mut(AgentId(1)).unwrap();
        b.set_health(0);
        b.deactivate();
        let mut grid = grid_10x10();
        grid.rebuild(&roster);
        assert_eq!(grid.occupied_count(), 1);
        assert_eq!(grid.agent_at(Position::new(3, 0)), None);
        grid.verify(&roster).unwrap();
    }

    #[test]
    fn try_move_updates_index_and_agent_together() {
        let (mut grid, mut roster) = registered_duel();
        let a = roster.get_mut(AgentId(0)).unwrap();
        assert!(grid.try_move(a, Position::new(1, 0)));
        assert_eq!(a.position(), Position::new(1, 0));
        assert_eq!(grid.agent_at(Position::new(0, 0)), None);
        assert_eq!(grid.agent_at(Position::new(1, 0)), Some(AgentId(0)));
        grid.verify(&roster).unwrap();
    }

    #[test]
    fn try_move_into_occupied_cell_fails_without_mutation() {
        let (mut grid, mut roster) = registered_duel();
        let a = roster.get_mut(AgentId(0)).unwrap();
        assert!(!grid.try_move(a, Position::new(3, 0)));
        assert_eq!(a.position(), Position::new(0, 0));
        assert_eq!(grid.agent_at(Position::new(3, 0)), Some(AgentId(1)));
        grid.verify(&roster).unwrap();
    }

    #[test]
    fn try_move_out_of_bounds_fails() {
        let (mut grid, mut roster) = registered_duel();
        let a = roster.get_mut(AgentId(0)).unwrap();
        assert!(!grid.try_move(a, Position::new(-1, 0)));
        assert_eq!(a.position(), Position::new(0, 0));
    }

    #[test]
    fn try_move_of_unregistered_agent_fails() {
        let mut roster = duel();
        let mut grid = grid_10x10();
        let a = roster.get_mut(AgentId(0)).unwrap();
        assert!(!grid.try_move(a, Position::new(1, 0)));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn register_declines_out_of_bounds_and_occupied() {
        let roster = RosterBuilder::new()
            .agent("far", Team::Ally, Position::new(20, 0), AgentStats::default())
            .agent("x", Team::Ally, Position::new(2, 2), AgentStats::default())
            .agent("y", Team::Enemy, Position::new(2, 2), AgentStats::default())
            .build()
            .unwrap();
        let mut grid = grid_10x10();
        assert!(!grid.register(roster.get(AgentId(0)).unwrap()));
        assert!(grid.register(roster.get(AgentId(1)).unwrap()));
        assert!(grid.register(roster.get(AgentId(1)).unwrap()));
        assert!(!grid.register(roster.get(AgentId(2)).unwrap()));
        assert_eq!(grid.agent_at(Position::new(2, 2)), Some(AgentId(1)));
    }

    #[test]
    fn unregister_is_noop_when_absent_or_foreign() {
        let (mut grid, roster) = registered_duel();
        let a = roster.get(AgentId(0)).unwrap();
        grid.unregister(a);
        assert_eq!(grid.occupied_count(), 1);
        grid.unregister(a);
        assert_eq!(grid.occupied_count(), 1);
        assert!(!grid.is_registered(a));
    }

    #[test]
    fn verify_detects_stale_entries() {
        let (grid, mut roster) = registered_duel();
        // Move the agent without going through the index.
        roster.get_mut(AgentId(0)).unwrap().set_position(Position::new(5, 5));
        assert!(grid.verify(&roster).is_err());
    }
}
