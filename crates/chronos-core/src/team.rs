//! The closed set of sides an agent can fight for.

use std::fmt;
use std::str::FromStr;

use crate::ChronosError;

/// Which side an agent belongs to.  Exactly two values; targeting treats
/// "any other team" as hostile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    #[default]
    Ally,
    Enemy,
}

impl Team {
    /// The opposing side.
    #[inline]
    pub fn opponent(self) -> Team {
        match self {
            Team::Ally  => Team::Enemy,
            Team::Enemy => Team::Ally,
        }
    }

    /// Lower-case label, used in CSV rosters and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Team::Ally  => "ally",
            Team::Enemy => "enemy",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Team {
    type Err = ChronosError;

    fn from_str(s: &str) -> Result<Team, ChronosError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ally"  => Ok(Team::Ally),
            "enemy" => Ok(Team::Enemy),
            other   => Err(ChronosError::Config(format!(
                "invalid team {other:?}: expected \"ally\" or \"enemy\""
            ))),
        }
    }
}
