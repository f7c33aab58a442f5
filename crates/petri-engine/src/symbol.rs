//! Display symbol configuration.

use crate::error::InvalidSymbol;
use crate::grid::CellState;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two cell states a symbol is being chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymbolRole {
    /// The character drawn for live cells.
    Live,
    /// The character drawn for dead cells.
    Dead,
}

impl fmt::Display for SymbolRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SymbolRole::Live => "live",
            SymbolRole::Dead => "dead",
        })
    }
}

/// The pair of characters used to draw live and dead cells.
///
/// Purely a rendering concern: the stepper and the population count never
/// read it, so changing symbols mid-run cannot alter the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymbolConfig {
    live: char,
    dead: char,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            live: 'O',
            dead: '.',
        }
    }
}

impl SymbolConfig {
    /// Binds `ch` to `role`, replacing the previous binding.
    ///
    /// Accepts ASCII alphanumerics; the dead role additionally accepts a
    /// space. The character currently bound to the other role is rejected
    /// so the two states stay distinguishable on screen.
    pub fn set(&mut self, role: SymbolRole, ch: char) -> Result<(), InvalidSymbol> {
        let allowed = ch.is_ascii_alphanumeric() || (role == SymbolRole::Dead && ch == ' ');
        let other = match role {
            SymbolRole::Live => self.dead,
            SymbolRole::Dead => self.live,
        };
        if !allowed || ch == other {
            return Err(InvalidSymbol { role, ch });
        }
        match role {
            SymbolRole::Live => self.live = ch,
            SymbolRole::Dead => self.dead = ch,
        }
        Ok(())
    }

    /// Character drawn for live cells.
    pub fn live(&self) -> char {
        self.live
    }

    /// Character drawn for dead cells.
    pub fn dead(&self) -> char {
        self.dead
    }

    /// Character drawn for `state`.
    pub fn symbol(&self, state: CellState) -> char {
        match state {
            CellState::Live => self.live,
            CellState::Dead => self.dead,
        }
    }
}
