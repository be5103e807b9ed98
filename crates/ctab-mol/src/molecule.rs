//! Molecular container
//!
//! [`Molecule`] owns atoms, bonds, conformers and the bookkeeping the molfile
//! decoders need while a connection table is being read: named properties,
//! V3000 bookmark tables and the deferred-query flag.

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::conformer::Conformer;
use crate::error::{MolError, MolResult};
use crate::index::{AtomIndex, BondIndex};
use crate::props::PropertyBag;
use crate::query::complete_atom_query;

/// A molecular graph with one or more conformers.
///
/// Atoms and bonds live in flat arrays addressed by [`AtomIndex`] /
/// [`BondIndex`]; per-atom adjacency is kept alongside so degree and neighbor
/// queries are cheap.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    conformers: Vec<Conformer>,

    /// Bond indices incident to each atom; inline up to the common degree.
    atom_bonds: Vec<SmallVec<[BondIndex; 4]>>,

    /// Molecule-level named properties (header lines and parse-state flags).
    pub props: PropertyBag,

    /// V3000 wire index -> internal index. Wire indices need not be dense.
    atom_bookmarks: AHashMap<i32, AtomIndex>,
    bond_bookmarks: AHashMap<i32, BondIndex>,

    /// Some query leaf holds a value that can only be computed once the whole
    /// graph is known; resolved by [`Molecule::complete_queries`].
    needs_query_scan: bool,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(atoms: usize, bonds: usize) -> Self {
        Molecule {
            atoms: Vec::with_capacity(atoms),
            bonds: Vec::with_capacity(bonds),
            atom_bonds: Vec::with_capacity(atoms),
            ..Default::default()
        }
    }

    // =========================================================================
    // Atoms
    // =========================================================================

    /// Append an atom, returning its index.
    pub fn add_atom(&mut self, atom: Atom) -> AtomIndex {
        let index = AtomIndex::new(self.atoms.len() as u32);
        self.atoms.push(atom);
        self.atom_bonds.push(SmallVec::new());
        index
    }

    #[inline]
    pub fn atom(&self, index: AtomIndex) -> Option<&Atom> {
        self.atoms.get(index.as_usize())
    }

    #[inline]
    pub fn atom_mut(&mut self, index: AtomIndex) -> Option<&mut Atom> {
        self.atoms.get_mut(index.as_usize())
    }

    /// Swap in a replacement for the atom at `index`, keeping its slot and
    /// its incident bonds.
    pub fn replace_atom(&mut self, index: AtomIndex, atom: Atom) -> MolResult<()> {
        let slot = self
            .atoms
            .get_mut(index.as_usize())
            .ok_or(MolError::AtomIndexOutOfBounds(index.0, self.atom_bonds.len()))?;
        *slot = atom;
        Ok(())
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter()
    }

    pub fn atoms_mut(&mut self) -> impl Iterator<Item = &mut Atom> {
        self.atoms.iter_mut()
    }

    pub fn atoms_indexed(&self) -> impl Iterator<Item = (AtomIndex, &Atom)> {
        self.atoms
            .iter()
            .enumerate()
            .map(|(i, a)| (AtomIndex::new(i as u32), a))
    }

    // =========================================================================
    // Bonds
    // =========================================================================

    /// Append a bond, validating that both endpoints exist and differ.
    pub fn add_bond(&mut self, bond: Bond) -> MolResult<BondIndex> {
        let n = self.atoms.len();
        if bond.begin.as_usize() >= n {
            return Err(MolError::AtomIndexOutOfBounds(bond.begin.0, n));
        }
        if bond.end.as_usize() >= n {
            return Err(MolError::AtomIndexOutOfBounds(bond.end.0, n));
        }
        if bond.begin == bond.end {
            return Err(MolError::InvalidBond(bond.begin.0, bond.end.0));
        }
        let index = BondIndex::new(self.bonds.len() as u32);
        self.atom_bonds[bond.begin.as_usize()].push(index);
        self.atom_bonds[bond.end.as_usize()].push(index);
        self.bonds.push(bond);
        Ok(index)
    }

    #[inline]
    pub fn bond(&self, index: BondIndex) -> Option<&Bond> {
        self.bonds.get(index.as_usize())
    }

    #[inline]
    pub fn bond_mut(&mut self, index: BondIndex) -> Option<&mut Bond> {
        self.bonds.get_mut(index.as_usize())
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn bonds(&self) -> impl Iterator<Item = &Bond> {
        self.bonds.iter()
    }

    pub fn bonds_mut(&mut self) -> impl Iterator<Item = &mut Bond> {
        self.bonds.iter_mut()
    }

    pub fn bonds_indexed(&self) -> impl Iterator<Item = (BondIndex, &Bond)> {
        self.bonds
            .iter()
            .enumerate()
            .map(|(i, b)| (BondIndex::new(i as u32), b))
    }

    /// Bond indices incident to `atom` (empty slice for out-of-range indices).
    pub fn bonds_of(&self, atom: AtomIndex) -> &[BondIndex] {
        self.atom_bonds
            .get(atom.as_usize())
            .map_or(&[], |v| v.as_slice())
    }

    /// Number of explicit neighbors of `atom`.
    #[inline]
    pub fn degree(&self, atom: AtomIndex) -> usize {
        self.bonds_of(atom).len()
    }

    /// Neighbor atom indices of `atom`.
    pub fn neighbors(&self, atom: AtomIndex) -> impl Iterator<Item = AtomIndex> + '_ {
        self.bonds_of(atom)
            .iter()
            .filter_map(move |&b| self.bonds[b.as_usize()].other(atom))
    }

    // =========================================================================
    // Conformers
    // =========================================================================

    /// Attach a conformer; its position count must equal the atom count.
    pub fn add_conformer(&mut self, conformer: Conformer) -> MolResult<()> {
        if conformer.len() != self.atoms.len() {
            return Err(MolError::CoordinateMismatch {
                expected: self.atoms.len(),
                actual: conformer.len(),
            });
        }
        self.conformers.push(conformer);
        Ok(())
    }

    /// The first conformer, when one has been attached.
    pub fn conformer(&self) -> Option<&Conformer> {
        self.conformers.first()
    }

    pub fn conformers(&self) -> &[Conformer] {
        &self.conformers
    }

    // =========================================================================
    // Bookmarks
    // =========================================================================

    pub fn set_atom_bookmark(&mut self, mark: i32, index: AtomIndex) {
        self.atom_bookmarks.insert(mark, index);
    }

    pub fn atom_with_bookmark(&self, mark: i32) -> Option<AtomIndex> {
        self.atom_bookmarks.get(&mark).copied()
    }

    pub fn set_bond_bookmark(&mut self, mark: i32, index: BondIndex) {
        self.bond_bookmarks.insert(mark, index);
    }

    pub fn bond_with_bookmark(&self, mark: i32) -> Option<BondIndex> {
        self.bond_bookmarks.get(&mark).copied()
    }

    pub fn clear_bookmarks(&mut self) {
        self.atom_bookmarks.clear();
        self.bond_bookmarks.clear();
    }

    // =========================================================================
    // Deferred queries
    // =========================================================================

    pub fn needs_query_scan(&self) -> bool {
        self.needs_query_scan
    }

    pub fn set_needs_query_scan(&mut self, value: bool) {
        self.needs_query_scan = value;
    }

    /// Resolve every deferred query leaf against the finished graph and clear
    /// the scan flag. Safe to call when nothing is deferred.
    pub fn complete_queries(&mut self) {
        for i in 0..self.atoms.len() {
            let idx = AtomIndex::new(i as u32);
            let Some(mut query) = self.atoms[i].take_query() else {
                continue;
            };
            complete_atom_query(&mut query, self, idx);
            self.atoms[i].set_query(query);
        }
        self.needs_query_scan = false;
    }

    // =========================================================================
    // Ring perception
    // =========================================================================

    /// Per-bond flags: true when the bond lies in a ring.
    ///
    /// A bond is a ring bond iff it is not a bridge of the graph, found with
    /// one low-link DFS per connected component. Walking back through the
    /// incoming bond id (not the parent atom) keeps parallel-edge inputs
    /// honest.
    pub fn ring_bond_mask(&self) -> Vec<bool> {
        let n = self.atoms.len();
        let mut mask = vec![true; self.bonds.len()];
        let mut disc = vec![usize::MAX; n];
        let mut low = vec![0usize; n];
        let mut timer = 0usize;
        // frame: (atom, incoming bond id, cursor into adjacency)
        let mut stack: Vec<(usize, usize, usize)> = Vec::new();

        for start in 0..n {
            if disc[start] != usize::MAX {
                continue;
            }
            disc[start] = timer;
            low[start] = timer;
            timer += 1;
            stack.push((start, usize::MAX, 0));

            while let Some(frame) = stack.last_mut() {
                let (u, in_bond, cursor) = *frame;
                if cursor < self.atom_bonds[u].len() {
                    frame.2 += 1;
                    let b = self.atom_bonds[u][cursor].as_usize();
                    if b == in_bond {
                        continue;
                    }
                    let v = self.bonds[b]
                        .other(AtomIndex::new(u as u32))
                        .map_or(u, |a| a.as_usize());
                    if disc[v] == usize::MAX {
                        disc[v] = timer;
                        low[v] = timer;
                        timer += 1;
                        stack.push((v, b, 0));
                    } else {
                        low[u] = low[u].min(disc[v]);
                    }
                } else {
                    stack.pop();
                    if let Some(&(p, _, _)) = stack.last() {
                        low[p] = low[p].min(low[u]);
                        if low[u] > disc[p] {
                            mask[in_bond] = false;
                        }
                    }
                }
            }
        }
        mask
    }

    /// Number of ring bonds incident to `atom`.
    pub fn ring_bond_count(&self, atom: AtomIndex) -> usize {
        let mask = self.ring_bond_mask();
        self.bonds_of(atom)
            .iter()
            .filter(|b| mask[b.as_usize()])
            .count()
    }
}
