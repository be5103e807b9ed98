//! Post-parse perception passes
//!
//! The cleanup pipeline run over a freshly decoded connection table: explicit
//! valence, charge separation of miswritten nitro groups, wedge- and
//! geometry-based stereo perception, hydrogen removal and a strict sanity
//! check. Each pass is deliberately small; none of them is a full chemistry
//! kernel.

use crate::atom::Chirality;
use crate::bond::{BondDir, BondOrder, BondStereo};
use crate::element;
use crate::error::{MolError, MolResult};
use crate::index::{AtomIndex, BondIndex};
use crate::molecule::Molecule;
use crate::props::keys;

/// Fill in `explicit_valence` on every atom from the incident bond orders.
///
/// With `strict` set, an atom whose valence exceeds what its element permits
/// (adjusted for formal charge) is an error; query atoms and pseudo-atoms are
/// exempt.
pub fn calc_explicit_valence(mol: &mut Molecule, strict: bool) -> MolResult<()> {
    let valences: Vec<u8> = mol
        .atoms_indexed()
        .map(|(idx, _)| {
            let sum: f64 = mol
                .bonds_of(idx)
                .iter()
                .filter_map(|&b| mol.bond(b))
                .map(|bond| bond.order.as_float())
                .sum();
            sum.round() as u8
        })
        .collect();

    for (i, valence) in valences.into_iter().enumerate() {
        let idx = AtomIndex::new(i as u32);
        let Some(atom) = mol.atom(idx) else { continue };
        if strict && !atom.is_query() {
            if let Some(default) = element::default_valence(atom.atomic_num) {
                let allowed = default.saturating_add(atom.formal_charge.unsigned_abs());
                if valence > allowed {
                    return Err(MolError::AtomValence {
                        atom: idx.0,
                        symbol: atom.symbol(),
                        valence,
                    });
                }
            }
        }
        if let Some(atom) = mol.atom_mut(idx) {
            atom.explicit_valence = Some(valence);
        }
    }
    Ok(())
}

/// Charge-separate neutral hypervalent nitro groups written as `-N(=O)=O`.
///
/// One N=O bond becomes single, that oxygen picks up -1 and the nitrogen +1,
/// so the strict valence check downstream accepts the group.
pub fn clean_up(mol: &mut Molecule) {
    for i in 0..mol.atom_count() {
        let idx = AtomIndex::new(i as u32);
        let Some(atom) = mol.atom(idx) else { continue };
        if atom.atomic_num != 7 || atom.formal_charge != 0 {
            continue;
        }
        let terminal_oxygens: Vec<BondIndex> = mol
            .bonds_of(idx)
            .iter()
            .copied()
            .filter(|&b| {
                let Some(bond) = mol.bond(b) else { return false };
                if bond.order != BondOrder::Double {
                    return false;
                }
                bond.other(idx).map_or(false, |n| {
                    mol.degree(n) == 1
                        && mol
                            .atom(n)
                            .map_or(false, |o| o.atomic_num == 8 && o.formal_charge == 0)
                })
            })
            .collect();
        if terminal_oxygens.len() < 2 {
            continue;
        }

        let fix = terminal_oxygens[terminal_oxygens.len() - 1];
        let oxygen = mol.bond(fix).and_then(|b| b.other(idx));
        if let Some(bond) = mol.bond_mut(fix) {
            bond.order = BondOrder::Single;
        }
        if let Some(o) = oxygen.and_then(|n| mol.atom_mut(n)) {
            o.formal_charge = -1;
        }
        if let Some(n) = mol.atom_mut(idx) {
            n.formal_charge = 1;
        }
        log::debug!("charge-separated a neutral N(=O)=O group at atom {i}");
    }
}

/// Assign tetrahedral chirality tags from wedge/dash bonds and the conformer.
///
/// The planar orientation of the three lowest-index neighbors fixes the
/// handedness; a dash wedge flips it. Runs before hydrogens are removed, since
/// removal can take the wedge bond with it.
pub fn detect_atom_stereochemistry(mol: &mut Molecule) {
    let assignments: Vec<(AtomIndex, Chirality)> = {
        let Some(conf) = mol.conformer() else { return };
        let mut out = Vec::new();
        for (_, bond) in mol.bonds_indexed() {
            if bond.order != BondOrder::Single {
                continue;
            }
            let flip = match bond.dir {
                BondDir::BeginWedge => false,
                BondDir::BeginDash => true,
                _ => continue,
            };
            let center = bond.begin;
            if mol.degree(center) < 3 {
                continue;
            }
            let mut nbrs: Vec<AtomIndex> = mol.neighbors(center).collect();
            nbrs.sort();
            let (Some(p0), Some(p1), Some(p2)) = (
                conf.position(nbrs[0]),
                conf.position(nbrs[1]),
                conf.position(nbrs[2]),
            ) else {
                continue;
            };
            let orient = (p1.x - p0.x) * (p2.y - p0.y) - (p1.y - p0.y) * (p2.x - p0.x);
            if orient == 0.0 {
                continue;
            }
            let clockwise = (orient < 0.0) != flip;
            out.push((
                center,
                if clockwise {
                    Chirality::Clockwise
                } else {
                    Chirality::CounterClockwise
                },
            ));
        }
        out
    };

    for (idx, tag) in assignments {
        if let Some(atom) = mol.atom_mut(idx) {
            if atom.chirality == Chirality::None {
                atom.chirality = tag;
            }
        }
    }
}

/// Remove plain explicit hydrogens: degree one, neutral, no radical, no
/// isotope label, no query, no atom map, bonded to a heavy atom. Bonds and
/// conformer positions are remapped; bookmarks are dropped with the rebuild.
/// The surviving molecule is sanitized.
pub fn remove_hydrogens(mol: &mut Molecule) -> MolResult<()> {
    let keep: Vec<bool> = mol
        .atoms_indexed()
        .map(|(idx, atom)| {
            !(atom.atomic_num == 1
                && mol.degree(idx) == 1
                && atom.formal_charge == 0
                && atom.radical_electrons == 0
                && !atom.is_query()
                && (atom.mass - element::standard_weight(1)).abs() < 0.1
                && !atom.props.contains(keys::MOL_ATOM_MAP_NUMBER)
                && mol
                    .neighbors(idx)
                    .next()
                    .and_then(|n| mol.atom(n))
                    .map_or(false, |n| n.atomic_num != 1))
        })
        .collect();

    if keep.iter().all(|&k| k) {
        return sanitize(mol);
    }

    let mut remap = vec![AtomIndex::invalid(); keep.len()];
    let mut next = 0u32;
    for (i, &k) in keep.iter().enumerate() {
        if k {
            remap[i] = AtomIndex::new(next);
            next += 1;
        }
    }

    let mut rebuilt = Molecule::with_capacity(next as usize, mol.bond_count());
    rebuilt.props = std::mem::take(&mut mol.props);
    rebuilt.set_needs_query_scan(mol.needs_query_scan());
    for (i, &k) in keep.iter().enumerate() {
        if k {
            if let Some(atom) = mol.atom(AtomIndex::new(i as u32)) {
                rebuilt.add_atom(atom.clone());
            }
        }
    }
    for bond in mol.bonds() {
        if keep[bond.begin.as_usize()] && keep[bond.end.as_usize()] {
            let mut remapped = bond.clone();
            remapped.begin = remap[bond.begin.as_usize()];
            remapped.end = remap[bond.end.as_usize()];
            rebuilt.add_bond(remapped)?;
        }
    }
    for conf in mol.conformers() {
        let mut conf = conf.clone();
        conf.retain_by(&keep);
        rebuilt.add_conformer(conf)?;
    }

    *mol = rebuilt;
    sanitize(mol)
}

/// Strict valence check plus aromatic-flag consistency.
pub fn sanitize(mol: &mut Molecule) -> MolResult<()> {
    calc_explicit_valence(mol, true)?;

    let mut aromatic = vec![false; mol.atom_count()];
    for bond in mol.bonds() {
        if bond.is_aromatic || bond.order == BondOrder::Aromatic {
            aromatic[bond.begin.as_usize()] = true;
            aromatic[bond.end.as_usize()] = true;
        }
    }
    for (i, atom) in mol.atoms_mut().enumerate() {
        if aromatic[i] {
            atom.is_aromatic = true;
        }
    }
    Ok(())
}

/// Drop wedge/wavy marks from single bonds once atom stereo has been
/// perceived; the marks carry no further information.
pub fn clear_single_bond_dir_flags(mol: &mut Molecule) {
    for bond in mol.bonds_mut() {
        if bond.order == BondOrder::Single && bond.dir != BondDir::None {
            bond.dir = BondDir::None;
        }
    }
}

/// Assign cis/trans tags to acyclic double bonds from the conformer geometry.
pub fn detect_bond_stereochemistry(mol: &mut Molecule) {
    let ring_mask = mol.ring_bond_mask();
    let assignments: Vec<(BondIndex, BondStereo)> = {
        let Some(conf) = mol.conformer() else { return };
        let mut out = Vec::new();
        for (bidx, bond) in mol.bonds_indexed() {
            if bond.order != BondOrder::Double
                || bond.stereo != BondStereo::None
                || bond.dir == BondDir::EitherDouble
                || ring_mask[bidx.as_usize()]
            {
                continue;
            }
            let (a, b) = (bond.begin, bond.end);
            let Some(ref_a) = mol.neighbors(a).filter(|&n| n != b).min() else {
                continue;
            };
            let Some(ref_b) = mol.neighbors(b).filter(|&n| n != a).min() else {
                continue;
            };
            let (Some(pa), Some(pb), Some(pra), Some(prb)) = (
                conf.position(a),
                conf.position(b),
                conf.position(ref_a),
                conf.position(ref_b),
            ) else {
                continue;
            };
            let axis = pb - pa;
            let side_a = axis.cross(pra - pa);
            let side_b = axis.cross(prb - pb);
            let agreement = side_a.dot(side_b);
            if agreement == 0.0 {
                continue;
            }
            out.push((
                bidx,
                if agreement > 0.0 {
                    BondStereo::Cis
                } else {
                    BondStereo::Trans
                },
            ));
        }
        out
    };

    for (idx, stereo) in assignments {
        if let Some(bond) = mol.bond_mut(idx) {
            bond.stereo = stereo;
        }
    }
}

/// Final consolidation: drop stereo marks that cannot mean anything (chirality
/// on centers with fewer than three neighbors, cis/trans on non-double bonds).
pub fn assign_stereochemistry(mol: &mut Molecule) {
    let degrees: Vec<usize> = (0..mol.atom_count())
        .map(|i| mol.degree(AtomIndex::new(i as u32)))
        .collect();
    for (i, atom) in mol.atoms_mut().enumerate() {
        if degrees[i] < 3 {
            atom.chirality = Chirality::None;
        }
    }
    for bond in mol.bonds_mut() {
        if bond.order != BondOrder::Double
            && matches!(bond.stereo, BondStereo::Cis | BondStereo::Trans)
        {
            bond.stereo = BondStereo::None;
        }
    }
}
