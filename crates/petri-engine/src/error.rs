//! Error types for the simulation engine.

use crate::symbol::SymbolRole;
use thiserror::Error;

/// A coordinate fell outside the grid.
///
/// The universe is bounded and access never clamps or wraps, so an
/// out-of-range coordinate is a caller bug and is always surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("coordinate ({row}, {col}) is outside the {height}x{width} grid")]
pub struct OutOfBounds {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Grid height at the time of the access.
    pub height: usize,
    /// Grid width at the time of the access.
    pub width: usize,
}

/// A character was rejected by the symbol prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{ch:?} is not a valid symbol for {role} cells")]
pub struct InvalidSymbol {
    /// The role the character was offered for.
    pub role: SymbolRole,
    /// The rejected character.
    pub ch: char,
}

/// The seed-mode menu received something other than a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{ch:?} is not a seed selection, enter 1-9 or 0 for manual placement")]
pub struct InvalidSeedSelection {
    /// The rejected character.
    pub ch: char,
}

/// A random seed request asked for more live cells than the grid has dead
/// cells left.
///
/// Checked before any placement happens, so the grid is untouched when this
/// is returned and the rejection-sampling loop can never spin forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot place {requested} seeds, only {available} dead cells remain")]
pub struct SeedExhaustion {
    /// Number of seeds requested.
    pub requested: usize,
    /// Number of dead cells available when the request was made.
    pub available: usize,
}

/// Recoverable rejections surfaced by [`Session::apply`](crate::session::Session::apply).
///
/// Session state is unchanged whenever one of these is returned; the
/// frontend shows the message and repeats the active prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A symbol prompt rejected the character.
    #[error(transparent)]
    InvalidSymbol(#[from] InvalidSymbol),

    /// The seed-mode menu rejected the input.
    #[error(transparent)]
    InvalidSeedSelection(#[from] InvalidSeedSelection),

    /// Random seeding asked for more cells than are dead.
    #[error(transparent)]
    SeedExhaustion(#[from] SeedExhaustion),
}
