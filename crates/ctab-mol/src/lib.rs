//! Molecular data structures for CTAB/molfile processing
//!
//! This crate provides the graph a connection-table decoder drives:
//!
//! - [`Atom`] - scalar properties plus an optional query predicate tree
//! - [`Bond`] - connectivity, order, drawing direction and stereo tags
//! - [`Conformer`] - one 3D position per atom
//! - [`Molecule`] - the owning container, with adjacency, bookmarks and
//!   molecule-level properties
//! - [`ops`] - the perception passes run after decoding (valence, stereo,
//!   hydrogen removal)
//!
//! # Example
//!
//! ```rust
//! use ctab_mol::{Atom, Bond, BondOrder, Molecule};
//!
//! let mut mol = Molecule::new();
//! let o = mol.add_atom(Atom::new(8));
//! let h1 = mol.add_atom(Atom::new(1));
//! let h2 = mol.add_atom(Atom::new(1));
//! mol.add_bond(Bond::new(o, h1, BondOrder::Single)).unwrap();
//! mol.add_bond(Bond::new(o, h2, BondOrder::Single)).unwrap();
//!
//! assert_eq!(mol.atom_count(), 3);
//! assert_eq!(mol.bond_count(), 2);
//! assert_eq!(mol.degree(o), 2);
//! ```

mod atom;
mod bond;
mod conformer;
pub mod element;
mod error;
mod index;
mod molecule;
pub mod ops;
mod props;
mod query;

pub use atom::{Atom, Chirality};
pub use bond::{Bond, BondDir, BondOrder, BondStereo};
pub use conformer::Conformer;
pub use error::{MolError, MolResult};
pub use index::{AtomIndex, BondIndex, INVALID_INDEX};
pub use molecule::Molecule;
pub use props::{keys, PropValue, PropertyBag};
pub use query::{complete_atom_query, AtomField, AtomQuery, BondQuery, DEFERRED};
