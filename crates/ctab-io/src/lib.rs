//! MDL molfile/SDF decoding
//!
//! This crate reads MDL connection tables (molfiles and multi-record SD
//! files, in both the V2000 and V3000 CTAB syntaxes) into
//! [`ctab_mol::Molecule`] graphs, with query atoms, query bonds,
//! stereochemistry hints and one conformer per record.
//!
//! # Quick start
//!
//! ```
//! use ctab_io::read_molfile_str;
//!
//! let block = "methane\n\n\n  1  0  0  0  0  0  0  0  0  0999 V2000\n    \
//!              0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\nM  END\n";
//! let mol = read_molfile_str(block).unwrap();
//! assert_eq!(mol.atom_count(), 1);
//! ```
//!
//! For streaming access or non-default options use [`MolfileReader`]
//! directly:
//!
//! ```no_run
//! use std::fs::File;
//! use ctab_io::{MolfileReader, MoleculeReader, ReadOptions};
//!
//! let file = File::open("library.sdf").unwrap();
//! let options = ReadOptions { sanitize: true, remove_hs: true };
//! let mut reader = MolfileReader::with_options(file, options);
//! while let Some(mol) = reader.read_next().unwrap() {
//!     println!("{} atoms", mol.atom_count());
//! }
//! ```

pub mod error;
pub mod molfile;
pub mod traits;

pub use error::{IoError, IoResult};
pub use molfile::{MolfileReader, ReadOptions};
pub use traits::MoleculeReader;

use std::fs::File;
use std::path::Path;

use ctab_mol::Molecule;

/// Read the first molecule from a molfile or SD file.
pub fn read_molfile(path: &Path) -> IoResult<Molecule> {
    let file = File::open(path)?;
    MolfileReader::new(file).read()
}

/// Read the first molecule from molfile text.
pub fn read_molfile_str(content: &str) -> IoResult<Molecule> {
    MolfileReader::new(content.as_bytes()).read()
}

/// Read every record from an SD file.
pub fn read_sdf(path: &Path) -> IoResult<Vec<Molecule>> {
    let file = File::open(path)?;
    MolfileReader::new(file).read_all()
}

/// Read every record from SD text.
pub fn read_sdf_str(content: &str) -> IoResult<Vec<Molecule>> {
    MolfileReader::new(content.as_bytes()).read_all()
}
