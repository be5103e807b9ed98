//! Error types for molecular operations

use thiserror::Error;

/// Errors raised while building or transforming molecular data.
#[derive(Error, Debug, Clone)]
pub enum MolError {
    /// Atom index is out of bounds
    #[error("atom index {0} is out of bounds (atom count: {1})")]
    AtomIndexOutOfBounds(u32, usize),

    /// Bond index is out of bounds
    #[error("bond index {0} is out of bounds (bond count: {1})")]
    BondIndexOutOfBounds(u32, usize),

    /// Self-loop or otherwise impossible bond
    #[error("invalid bond between atoms {0} and {1}")]
    InvalidBond(u32, u32),

    /// Conformer length does not match the atom count
    #[error("conformer position count mismatch: expected {expected}, got {actual}")]
    CoordinateMismatch { expected: usize, actual: usize },

    /// Explicit valence exceeds what the element permits
    #[error("atom {atom} ({symbol}) has explicit valence {valence}, greater than permitted")]
    AtomValence {
        atom: u32,
        symbol: &'static str,
        valence: u8,
    },
}

/// Result type for molecular operations
pub type MolResult<T> = Result<T, MolError>;
