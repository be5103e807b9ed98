//! Conformer: one 3D position per atom

use crate::index::AtomIndex;
use lin_alg::f64::Vec3;

/// A dense set of atomic positions for one conformation.
///
/// Positions are appended in atom order while a block is decoded; the
/// molecule validates the length when the conformer is attached.
#[derive(Debug, Clone)]
pub struct Conformer {
    positions: Vec<Vec3>,
    /// Whether the coordinates are genuinely three-dimensional. Defaults to
    /// true; the molfile header may declare the structure 2D.
    pub is_3d: bool,
}

impl Conformer {
    pub fn new() -> Self {
        Conformer {
            positions: Vec::new(),
            is_3d: true,
        }
    }

    pub fn with_capacity(n_atoms: usize) -> Self {
        Conformer {
            positions: Vec::with_capacity(n_atoms),
            is_3d: true,
        }
    }

    pub fn push(&mut self, pos: Vec3) {
        self.positions.push(pos);
    }

    pub fn position(&self, idx: AtomIndex) -> Option<Vec3> {
        self.positions.get(idx.as_usize()).copied()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Retain only the positions whose flags are set, preserving order.
    pub(crate) fn retain_by(&mut self, keep: &[bool]) {
        let mut it = keep.iter();
        self.positions.retain(|_| *it.next().unwrap_or(&true));
    }
}

impl Default for Conformer {
    fn default() -> Self {
        Conformer::new()
    }
}
