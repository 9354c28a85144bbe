//! Unit tests for chronos-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(AgentId(0) < AgentId(1));
        assert!(AgentId(10) > AgentId(9));
    }

    #[test]
    fn oversized_index_is_rejected() {
        assert!(AgentId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod grid_pos {
    use crate::{Position, WorldPoint};

    #[test]
    fn manhattan_distance() {
        let a = Position::new(0, 0);
        let b = Position::new(3, -2);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(b.manhattan(a), 5);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn position_arithmetic() {
        let p = Position::new(2, 3) + Position::new(1, -1);
        assert_eq!(p, Position::new(3, 2));
        assert_eq!(p - Position::new(3, 2), Position::new(0, 0));
    }

    #[test]
    fn euclidean_distance() {
        let a = WorldPoint::new(0.0, 0.0);
        let b = WorldPoint::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(1, 2).to_string(), "(1, 2)");
    }
}

#[cfg(test)]
mod team {
    use crate::Team;

    #[test]
    fn opponent_flips() {
        assert_eq!(Team::Ally.opponent(), Team::Enemy);
        assert_eq!(Team::Enemy.opponent(), Team::Ally);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Ally".parse::<Team>().unwrap(), Team::Ally);
        assert_eq!(" ENEMY ".parse::<Team>().unwrap(), Team::Enemy);
        assert!("neutral".parse::<Team>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Team::Enemy.to_string(), "enemy");
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{Pacer, PacingConfig, TurnNumber, VirtualClock};

    #[test]
    fn turn_number_advances() {
        assert_eq!(TurnNumber::ZERO.next(), TurnNumber(1));
        assert_eq!(TurnNumber(4).to_string(), "turn 4");
    }

    #[test]
    fn default_pacing_matches_loop_timings() {
        let cfg = PacingConfig::default();
        assert_eq!(cfg.start_delay, Duration::from_millis(200));
        assert_eq!(cfg.pre_action_delay(), Duration::from_millis(200));
        assert_eq!(cfg.post_action_delay(), Duration::from_millis(400));
        assert_eq!(cfg.turn_delay, Duration::from_millis(400));
    }

    #[test]
    fn scaled_pacing() {
        let cfg = PacingConfig::default().scaled(0.5);
        assert_eq!(cfg.turn_delay, Duration::from_millis(200));
        assert_eq!(PacingConfig::instant().action_delay, Duration::ZERO);
    }

    #[test]
    fn scaled_pacing_clamps_bad_factors() {
        for factor in [-1.0, 0.0, f32::NAN, f32::NEG_INFINITY] {
            let cfg = PacingConfig::default().scaled(factor);
            assert_eq!(cfg.start_delay, Duration::ZERO);
            assert_eq!(cfg.action_delay, Duration::ZERO);
            assert_eq!(cfg.turn_delay, Duration::ZERO);
        }
        let huge = PacingConfig::default().scaled(f32::MAX);
        assert_eq!(huge.turn_delay, Duration::MAX);
        assert_eq!(PacingConfig::default().scaled(f32::INFINITY).start_delay, Duration::MAX);
    }

    #[test]
    fn virtual_clock_records_pauses() {
        let mut clock = VirtualClock::new();
        clock.advance(Duration::from_millis(100));
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.elapsed(), Duration::from_millis(350));
        assert_eq!(clock.pause_count(), 2);
        assert_eq!(clock.pauses()[1], Duration::from_millis(250));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut v1: Vec<u32> = (0..50).collect();
        let mut v2 = v1.clone();
        SimRng::new(12345).shuffle(&mut v1);
        SimRng::new(12345).shuffle(&mut v2);
        assert_eq!(v1, v2);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(7);
        let mut v: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}
