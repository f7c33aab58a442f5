//! The turn-based game session.
//!
//! [`Session`] owns the grid, the symbol bindings and the RNG, and walks a
//! small state machine driven by [`Command`] values: pick two display
//! symbols, seed the first generation randomly or by cursor, then advance
//! one generation per command until quit. Rejected input leaves the state
//! untouched and comes back as a [`SessionError`] whose message the
//! frontend can show next to a repeated prompt.

use crate::error::{InvalidSeedSelection, SessionError};
use crate::grid::Grid;
use crate::seed::{self, Cursor, Direction};
use crate::step;
use crate::symbol::{SymbolConfig, SymbolRole};
use rand::SeedableRng;
use rand::rngs::StdRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Startup parameters for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    /// Grid height in cells.
    pub height: usize,
    /// Grid width in cells.
    pub width: usize,
    /// Multiplier applied to the digit picked on the random-seed menu.
    pub seed_scale: usize,
    /// Fixed RNG seed; `None` draws one from the operating system.
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            height: 10,
            width: 40,
            seed_scale: 1,
            rng_seed: None,
        }
    }
}

/// Input events the frontend feeds into [`Session::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    /// A typed character, consumed by the symbol and seed-mode prompts.
    Input(char),
    /// Move the manual-seeding cursor one cell.
    Move(Direction),
    /// Mark the cell under the cursor live.
    PlaceSeed,
    /// Leave manual seeding and start the run.
    FinishSeeding,
    /// Advance the universe one generation.
    Advance,
    /// End the run.
    Quit,
}

/// Where in its lifecycle the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Waiting for the display symbol of `role`, live first.
    AwaitingSymbols {
        /// The role currently being prompted for.
        role: SymbolRole,
    },
    /// Waiting for the seed menu choice, a digit.
    AwaitingSeedMode,
    /// Cursor-driven seed placement.
    ManualSeeding,
    /// Seeded and stepping on demand.
    Running,
    /// Quit received, the session ignores further commands.
    Terminated,
}

/// One run of the game, from the symbol prompts to termination.
///
/// Strictly single-threaded and turn-based: nothing advances between
/// [`Session::apply`] calls, so a frontend can draw a consistent snapshot
/// at any time.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    symbols: SymbolConfig,
    cursor: Cursor,
    phase: Phase,
    rng: StdRng,
}

impl Session {
    /// Creates a session in the live-symbol prompt phase.
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            grid: Grid::new(config.height, config.width),
            symbols: SymbolConfig::default(),
            cursor: Cursor::default(),
            phase: Phase::AwaitingSymbols {
                role: SymbolRole::Live,
            },
            config,
            rng,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The grid as of the latest seeding or step.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current symbol bindings.
    pub fn symbols(&self) -> &SymbolConfig {
        &self.symbols
    }

    /// Manual-seeding cursor, meaningful in [`Phase::ManualSeeding`].
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Live-cell count of the current grid, recomputed on every call.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// True when a running universe has no live cells left.
    ///
    /// Extinction is reported, not enforced: the all-dead grid is stable
    /// under the rule and the user may keep advancing it.
    pub fn is_extinct(&self) -> bool {
        self.phase == Phase::Running && self.grid.population() == 0
    }

    /// Feeds one command through the state machine.
    ///
    /// `Err` means the input was rejected and nothing changed; the
    /// frontend repeats the active prompt with the error text. Commands
    /// that have no meaning in the current phase are tolerated and
    /// ignored.
    pub fn apply(&mut self, cmd: Command) -> Result<(), SessionError> {
        match self.phase {
            Phase::AwaitingSymbols { role } => self.apply_symbol(role, cmd),
            Phase::AwaitingSeedMode => self.apply_seed_mode(cmd),
            Phase::ManualSeeding => self.apply_manual(cmd),
            Phase::Running => self.apply_running(cmd),
            Phase::Terminated => Ok(()),
        }
    }

    fn apply_symbol(&mut self, role: SymbolRole, cmd: Command) -> Result<(), SessionError> {
        let Command::Input(ch) = cmd else {
            return Ok(());
        };
        self.symbols.set(role, ch)?;
        self.phase = match role {
            SymbolRole::Live => Phase::AwaitingSymbols {
                role: SymbolRole::Dead,
            },
            SymbolRole::Dead => Phase::AwaitingSeedMode,
        };
        Ok(())
    }

    fn apply_seed_mode(&mut self, cmd: Command) -> Result<(), SessionError> {
        let Command::Input(ch) = cmd else {
            return Ok(());
        };
        match ch {
            '0' => {
                self.cursor = Cursor::default();
                self.phase = Phase::ManualSeeding;
                Ok(())
            }
            '1'..='9' => {
                let digit = ch as usize - '0' as usize;
                let count = digit.saturating_mul(self.config.seed_scale);
                seed::random_seed_with_rng(&mut self.grid, count, &mut self.rng)?;
                self.phase = Phase::Running;
                Ok(())
            }
            _ => Err(InvalidSeedSelection { ch }.into()),
        }
    }

    fn apply_manual(&mut self, cmd: Command) -> Result<(), SessionError> {
        match cmd {
            Command::Move(dir) => {
                self.cursor.shift(dir, self.grid.height(), self.grid.width());
            }
            Command::PlaceSeed => {
                // wrap-around motion keeps the cursor on any grid that has
                // cells, so this only fails on a zero-area grid
                let _ = seed::place(&mut self.grid, self.cursor.row, self.cursor.col);
            }
            Command::FinishSeeding => self.phase = Phase::Running,
            _ => {}
        }
        Ok(())
    }

    fn apply_running(&mut self, cmd: Command) -> Result<(), SessionError> {
        match cmd {
            Command::Advance => {
                let (next, _) = step::step(&self.grid);
                self.grid = next;
            }
            Command::Quit => self.phase = Phase::Terminated,
            _ => {}
        }
        Ok(())
    }
}
