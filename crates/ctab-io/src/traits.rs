//! Reader abstraction

use crate::error::IoResult;
use ctab_mol::Molecule;

/// Common interface for molecule readers.
pub trait MoleculeReader {
    /// Read the first molecule; error when the input holds none.
    fn read(&mut self) -> IoResult<Molecule>;

    /// Read every molecule in the input; error when the input holds none.
    fn read_all(&mut self) -> IoResult<Vec<Molecule>>;
}
