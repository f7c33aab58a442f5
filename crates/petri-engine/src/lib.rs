//! Bounded-grid Game of Life engine.
//!
//! The universe is a fixed `height x width` grid with clamped edges. Cells
//! on the boundary simply have fewer neighbors; nothing wraps around. Each
//! generation is computed from an immutable snapshot of the previous one
//! under the B3/S23 rule and only advances when asked, so the whole crate
//! is synchronous and free of I/O.
//!
//! - [`Grid`] and [`CellState`] are the cell matrix
//! - [`live_neighbors`], [`next_state`] and [`step`] are the rule
//! - [`random_seed`], [`place`] and [`Cursor`] are the two seeding modes
//! - [`SymbolConfig`] holds the display characters, a rendering-only
//!   concern
//! - [`Session`] ties it all together as a command-driven state machine
//!
//! # Example
//!
//! ```
//! use petri_engine::{Command, Phase, Session, SessionConfig};
//!
//! let config = SessionConfig {
//!     rng_seed: Some(7),
//!     ..Default::default()
//! };
//! let mut session = Session::new(config);
//! session.apply(Command::Input('O')).unwrap(); // symbol for live cells
//! session.apply(Command::Input(' ')).unwrap(); // symbol for dead cells
//! session.apply(Command::Input('5')).unwrap(); // five random seeds
//! assert_eq!(session.phase(), Phase::Running);
//! assert_eq!(session.population(), 5);
//!
//! session.apply(Command::Advance).unwrap();
//! session.apply(Command::Quit).unwrap();
//! assert_eq!(session.phase(), Phase::Terminated);
//! ```

mod error;
mod grid;
mod pattern;
mod render;
mod seed;
mod session;
mod step;
mod symbol;

pub use error::{InvalidSeedSelection, InvalidSymbol, OutOfBounds, SeedExhaustion, SessionError};
pub use grid::{CellState, Grid};
pub use pattern::{BLINKER, BLOCK, GLIDER, TUB, stamp};
pub use render::render_rows;
pub use seed::{Cursor, Direction, place, random_seed, random_seed_with_rng};
pub use session::{Command, Phase, Session, SessionConfig};
pub use step::{live_neighbors, next_state, step};
pub use symbol::{SymbolConfig, SymbolRole};
