//! V2000 connection-table decoding
//!
//! Fixed-column atom and bond lines, plus the block driver that feeds the
//! molecule and its conformer. The property block that follows the bonds is
//! handled in [`super::props`].

use std::io::Read;

use ctab_mol::{
    keys, Atom, AtomField, AtomIndex, AtomQuery, Bond, BondDir, BondOrder, BondQuery, BondStereo,
    Conformer, Molecule,
};
use lin_alg::f64::Vec3;

use super::fields::{to_double, to_int};
use super::{apply_declared_dimensionality, Counts, MolfileReader, PropertyEnd};
use crate::error::{IoError, IoResult};

/// Column slice that is empty when the line is too short (or sliced off a
/// UTF-8 boundary, which no conforming molfile contains).
fn col(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("")
}

/// Optional trailing field of a V2000 atom line: present only when the line
/// reaches it and its text differs from the all-zero placeholder.
fn optional_field(line: &str, start: usize, width: usize) -> IoResult<Option<i32>> {
    let Some(field) = line.get(start..start + width) else {
        return Ok(None);
    };
    let placeholder = if width == 2 { " 0" } else { "  0" };
    if field == placeholder {
        return Ok(None);
    }
    to_int(field, true).map(Some)
}

/// Decode one fixed-column atom line into an atom and its position.
pub(crate) fn parse_atom_line(line: &str, line_no: usize) -> IoResult<(Atom, Vec3)> {
    let at = |e: IoError| e.at_line(line_no);

    if line.len() < 34 {
        return Err(IoError::parse(
            line_no,
            format!("atom line too short: '{line}'"),
        ));
    }

    let x = to_double(col(line, 0, 10), true).map_err(at)?;
    let y = to_double(col(line, 10, 20), true).map_err(at)?;
    let z = to_double(col(line, 20, 30), true).map_err(at)?;

    let raw_symbol = col(line, 31, 34);
    let symbol = match raw_symbol.find(' ') {
        Some(i) => &raw_symbol[..i],
        None => raw_symbol,
    };

    let mass_diff = optional_field(line, 34, 2).map_err(at)?.unwrap_or(0);
    let charge_code = optional_field(line, 36, 3).map_err(at)?.unwrap_or(0);
    let h_count = optional_field(line, 42, 3).map_err(at)?.unwrap_or(0);

    let is_r_digit = symbol.len() == 2
        && symbol.starts_with('R')
        && symbol.as_bytes()[1].is_ascii_digit();

    let mut atom;
    if matches!(symbol, "L" | "A" | "Q" | "*" | "LP" | "R" | "R#") || is_r_digit {
        atom = Atom::new(0);
        match symbol {
            "*" => {
                // matches anything
                atom.set_query(AtomQuery::Null);
                atom.no_implicit_h = true;
            }
            "Q" => {
                // any atom except carbon and hydrogen
                atom.set_query(
                    AtomQuery::equals(AtomField::AtomicNumber, 6)
                        .or_with(AtomQuery::equals(AtomField::AtomicNumber, 1))
                        .negated(),
                );
                atom.no_implicit_h = true;
            }
            "A" => {
                // any atom except hydrogen
                atom.set_query(AtomQuery::equals(AtomField::AtomicNumber, 1).negated());
                atom.no_implicit_h = true;
            }
            _ => {}
        }
        if mass_diff == 0 && is_r_digit {
            let digit = (symbol.as_bytes()[1] - b'0') as f64;
            if digit >= 1.0 {
                atom.mass = digit;
            }
        }
    } else if symbol == "D" {
        atom = Atom::new(1);
        atom.mass = 2.014;
    } else if symbol == "T" {
        atom = Atom::new(1);
        atom.mass = 3.016;
    } else {
        let z = ctab_mol::element::atomic_number(symbol).ok_or_else(|| {
            IoError::parse(line_no, format!("unrecognized element symbol '{symbol}'"))
        })?;
        atom = Atom::new(z);
    }

    if charge_code != 0 {
        atom.formal_charge = (4 - charge_code) as i8;
    }

    // an hCount of 1 has long been read as "no implicit hydrogens" even
    // though the CTFile spec defines the field as a query; kept as-is for
    // compatibility
    if h_count == 1 {
        atom.no_implicit_h = true;
    }

    if mass_diff != 0 {
        atom.mass += mass_diff as f64;
        atom.props.set(keys::HAS_MASS_QUERY, true);
    }

    if let Some(parity) = optional_field(line, 39, 3).map_err(at)? {
        atom.props.set(keys::MOL_PARITY, parity);
    }
    if let Some(stereo_care) = optional_field(line, 45, 3).map_err(at)? {
        atom.props.set(keys::MOL_STEREO_CARE, stereo_care);
    }
    if let Some(tot_valence) = optional_field(line, 48, 3).map_err(at)? {
        atom.props.set(keys::MOL_TOT_VALENCE, tot_valence);
    }
    if let Some(map_number) = optional_field(line, 60, 3).map_err(at)? {
        atom.props.set(keys::MOL_ATOM_MAP_NUMBER, map_number);
    }
    if let Some(inversion) = optional_field(line, 63, 3).map_err(at)? {
        atom.props.set(keys::MOL_INVERSION_FLAG, inversion);
    }
    if let Some(exact_change) = optional_field(line, 66, 3).map_err(at)? {
        atom.props.set(keys::MOL_EXACT_CHANGE_FLAG, exact_change);
    }

    Ok((atom, Vec3::new(x, y, z)))
}

/// Build a bond of the given wire type between two already-resolved atoms.
/// Types 5-8 (and anything unrecognized) come back as query bonds.
pub(crate) fn decode_bond_type(begin: AtomIndex, end: AtomIndex, wire_type: i32) -> Bond {
    match wire_type {
        1 => Bond::new(begin, end, BondOrder::Single),
        2 => Bond::new(begin, end, BondOrder::Double),
        3 => Bond::new(begin, end, BondOrder::Triple),
        4 => Bond::new(begin, end, BondOrder::Aromatic),
        0 => {
            log::warn!("bond with order 0 found; this is not part of the MDL specification");
            Bond::new(begin, end, BondOrder::Unspecified)
        }
        other => {
            let mut bond = Bond::new(begin, end, BondOrder::Unspecified);
            match other {
                5 => bond.set_query(BondQuery::Or(vec![
                    BondQuery::OrderEquals(BondOrder::Single),
                    BondQuery::OrderEquals(BondOrder::Double),
                ])),
                6 => bond.set_query(BondQuery::Or(vec![
                    BondQuery::OrderEquals(BondOrder::Single),
                    BondQuery::OrderEquals(BondOrder::Aromatic),
                ])),
                7 => bond.set_query(BondQuery::Or(vec![
                    BondQuery::OrderEquals(BondOrder::Double),
                    BondQuery::OrderEquals(BondOrder::Aromatic),
                ])),
                8 => bond.set_query(BondQuery::Null),
                unknown => {
                    log::warn!(
                        "unrecognized query bond type {unknown} found; using an \"any\" query"
                    );
                    bond.set_query(BondQuery::Null);
                }
            }
            bond
        }
    }
}

/// Decode one fixed-column bond line.
pub(crate) fn parse_bond_line(line: &str, line_no: usize) -> IoResult<Bond> {
    let at = |e: IoError| e.at_line(line_no);

    if line.len() < 9 {
        return Err(IoError::parse(
            line_no,
            format!("bond line too short: '{line}'"),
        ));
    }

    let idx1 = to_int(col(line, 0, 3), false).map_err(at)?;
    let idx2 = to_int(col(line, 3, 6), false).map_err(at)?;
    let wire_type = to_int(col(line, 6, 9), false).map_err(at)?;
    if idx1 < 1 || idx2 < 1 {
        return Err(IoError::parse(
            line_no,
            format!("bond references atom index {}", idx1.min(idx2)),
        ));
    }

    // wire indices are 1-based
    let begin = AtomIndex::new(idx1 as u32 - 1);
    let end = AtomIndex::new(idx2 as u32 - 1);
    let mut bond = decode_bond_type(begin, end, wire_type);

    if let Some(field) = line.get(9..12) {
        if field != "  0" {
            // a malformed stereo field is ignored, not fatal
            if let Ok(stereo) = to_int(field, false) {
                match stereo {
                    0 => bond.dir = BondDir::None,
                    1 => bond.dir = BondDir::BeginWedge,
                    6 => bond.dir = BondDir::BeginDash,
                    3 => {
                        // crossed ("either") double bond
                        bond.dir = BondDir::EitherDouble;
                        bond.stereo = BondStereo::Any;
                    }
                    4 => bond.dir = BondDir::Unknown,
                    _ => {}
                }
            }
        }
    }

    if let Some(field) = line.get(15..18) {
        if field != "  0" {
            if let Ok(topology) = to_int(field, false) {
                let constraint = match topology {
                    1 => BondQuery::InRing,
                    2 => BondQuery::InRing.negated(),
                    other => {
                        return Err(IoError::parse(
                            line_no,
                            format!("unrecognized bond topology specifier: {other}"),
                        ))
                    }
                };
                if !bond.is_query() {
                    bond.set_query(BondQuery::OrderEquals(bond.order));
                }
                bond.expand_query(constraint);
            }
        }
    }

    if let Some(field) = line.get(18..21) {
        if field != "  0" {
            if let Ok(status) = to_int(field, false) {
                bond.props.set(keys::MOL_REACT_STATUS, status);
            }
        }
    }

    Ok(bond)
}

impl<R: Read> MolfileReader<R> {
    /// Drive a V2000 block: atom lines, bond lines, then the property block.
    pub(crate) fn parse_v2000_ctab(
        &mut self,
        mol: &mut Molecule,
        counts: &Counts,
        chirality_possible: &mut bool,
    ) -> IoResult<PropertyEnd> {
        if counts.n_atoms <= 0 {
            return Err(IoError::parse(self.line_number(), "molecule has no atoms"));
        }

        let mut conf = Conformer::with_capacity(counts.n_atoms as usize);
        for _ in 0..counts.n_atoms {
            let line = self.require_line("atom block")?;
            let (atom, pos) = parse_atom_line(&line, self.line_number())?;
            mol.add_atom(atom);
            conf.push(pos);
        }
        apply_declared_dimensionality(mol, &mut conf);
        mol.add_conformer(conf)?;

        for _ in 0..counts.n_bonds {
            let line = self.require_line("bond block")?;
            let bond = parse_bond_line(&line, self.line_number())?;
            if bond.dir != BondDir::None && bond.dir != BondDir::Unknown {
                *chirality_possible = true;
            }
            let aromatic = bond.is_aromatic;
            let (begin, end) = (bond.begin, bond.end);
            let line_no = self.line_number();
            mol.add_bond(bond)
                .map_err(|e| IoError::parse(line_no, e.to_string()))?;
            if aromatic {
                if let Some(atom) = mol.atom_mut(begin) {
                    atom.is_aromatic = true;
                }
                if let Some(atom) = mol.atom_mut(end) {
                    atom.is_aromatic = true;
                }
            }
        }

        self.parse_property_block(mol)
    }
}
