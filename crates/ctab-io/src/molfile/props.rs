//! V2000 property-block interpretation
//!
//! Everything after the bond block: `M  `-records, atom aliases and values,
//! legacy atom lists. Several records promote a plain atom to a query atom in
//! place; the promotion seeds the tree from the atom's scalar state so earlier
//! charge and isotope information survives.

use std::io::Read;

use ctab_mol::{
    element, keys, AtomField, AtomIndex, AtomQuery, Molecule, DEFERRED,
};

use super::fields::{strip_and_cast, to_int};
use super::{MolfileReader, PropertyEnd};
use crate::error::{IoError, IoResult};

/// Resolve a 1-based wire atom index against the molecule.
fn atom_index(mol: &Molecule, wire: i32) -> IoResult<AtomIndex> {
    let count = mol.atom_count();
    if wire < 1 || wire as usize > count {
        return Err(IoError::parse(
            0,
            format!("atom index {wire} out of range (atom count: {count})"),
        ));
    }
    Ok(AtomIndex::new(wire as u32 - 1))
}

/// Legacy atom-list line (pre-`M  ALS` syntax): atom index, T/F negation
/// flag, count, then 3-wide atomic numbers.
pub(crate) fn parse_old_atom_list(mol: &mut Molecule, text: &str) -> IoResult<()> {
    let wire: i32 = strip_and_cast(text.get(0..3).unwrap_or(""), false)?;
    let idx = atom_index(mol, wire)?;

    let modifier = text.as_bytes().get(4).map(|&b| b as char).unwrap_or(' ');
    let negated = match modifier {
        'T' => true,
        'F' => false,
        other => {
            return Err(IoError::parse(
                0,
                format!("unrecognized atom-list query modifier: '{other}'"),
            ))
        }
    };

    let n_queries = to_int(text.get(9..10).unwrap_or(""), false)?;
    if !(0..=5).contains(&n_queries) {
        return Err(IoError::parse(
            0,
            format!("bad atom-list length: {n_queries}"),
        ));
    }

    let mut children = Vec::with_capacity(n_queries as usize);
    let mut first_z = None;
    for i in 0..n_queries as usize {
        let pos = 11 + i * 4;
        let z = to_int(text.get(pos..pos + 3).unwrap_or(""), false)?;
        if !(0..=200).contains(&z) {
            return Err(IoError::parse(
                0,
                format!("atomic number {z} out of range in atom list"),
            ));
        }
        if first_z.is_none() {
            first_z = Some(z);
        }
        children.push(AtomQuery::equals(AtomField::AtomicNumber, z));
    }

    let mut replacement = mol.atom(idx).cloned().unwrap_or_default();
    if let Some(z) = first_z {
        replacement.atomic_num = z as u8;
    }
    let mut query = AtomQuery::Or(children);
    if negated {
        query = query.negated();
    }
    replacement.set_query(query);
    mol.replace_atom(idx, replacement)?;
    Ok(())
}

/// `A  aaa` record: the continuation line is stored verbatim as the atom's
/// alias.
pub(crate) fn parse_atom_alias(mol: &mut Molecule, text: &str, next_line: &str) -> IoResult<()> {
    let wire: i32 = strip_and_cast(text.get(3..6).unwrap_or(""), false)?;
    let idx = atom_index(mol, wire)?;
    if let Some(atom) = mol.atom_mut(idx) {
        atom.props.set(keys::MOL_FILE_ALIAS, next_line);
    }
    Ok(())
}

/// `V  aaa text` record.
pub(crate) fn parse_atom_value(mol: &mut Molecule, text: &str) -> IoResult<()> {
    let wire: i32 = strip_and_cast(text.get(3..6).unwrap_or(""), false)?;
    let idx = atom_index(mol, wire)?;
    if let Some(atom) = mol.atom_mut(idx) {
        atom.props
            .set(keys::MOL_FILE_VALUE, text.get(7..).unwrap_or(""));
    }
    Ok(())
}

/// `M  CHG`: on the first charge-bearing record every atom is reset to
/// neutral, then the listed charges are applied.
pub(crate) fn parse_charge_line(mol: &mut Molecule, text: &str, first_call: bool) -> IoResult<()> {
    if first_call {
        for atom in mol.atoms_mut() {
            atom.formal_charge = 0;
        }
    }
    let n_entries = to_int(text.get(6..9).unwrap_or(""), false)?;
    let mut spos = 9;
    for _ in 0..n_entries {
        let wire = to_int(text.get(spos..spos + 4).unwrap_or(""), false)?;
        spos += 4;
        let charge = to_int(text.get(spos..spos + 4).unwrap_or(""), false)?;
        spos += 4;
        let idx = atom_index(mol, wire)?;
        if let Some(atom) = mol.atom_mut(idx) {
            atom.formal_charge = charge as i8;
        }
    }
    Ok(())
}

/// `M  RAD`: shares the reset-to-neutral rule with `M  CHG`.
pub(crate) fn parse_radical_line(mol: &mut Molecule, text: &str, first_call: bool) -> IoResult<()> {
    if first_call {
        for atom in mol.atoms_mut() {
            atom.formal_charge = 0;
        }
    }
    let n_entries = to_int(text.get(6..9).unwrap_or(""), false)?;
    let mut spos = 9;
    for _ in 0..n_entries {
        let wire = to_int(text.get(spos..spos + 4).unwrap_or(""), false)?;
        spos += 4;
        let value = to_int(text.get(spos..spos + 4).unwrap_or(""), false)?;
        spos += 4;
        let idx = atom_index(mol, wire)?;
        let electrons = match value {
            1 => 2,
            2 => 1,
            3 => 2,
            other => {
                return Err(IoError::parse(
                    0,
                    format!("unrecognized radical value {other} for atom {wire}"),
                ))
            }
        };
        if let Some(atom) = mol.atom_mut(idx) {
            atom.radical_electrons = electrons;
        }
    }
    Ok(())
}

/// `M  ISO`: sets an absolute isotopic mass; a blank mass field resets the
/// atom to the standard weight of its element.
pub(crate) fn parse_isotope_line(mol: &mut Molecule, text: &str) -> IoResult<()> {
    let n_entries: u32 = strip_and_cast(text.get(6..9).unwrap_or(""), false)?;
    let mut spos = 9;
    for _ in 0..n_entries {
        let wire: i32 = strip_and_cast(text.get(spos..spos + 4).unwrap_or(""), false)?;
        spos += 4;
        let idx = atom_index(mol, wire)?;
        match text.get(spos..spos + 4) {
            Some(field) if field != "    " => {
                let mass = to_int(field, false)?;
                spos += 4;
                if let Some(atom) = mol.atom_mut(idx) {
                    atom.mass = mass as f64;
                }
            }
            _ => {
                if let Some(atom) = mol.atom_mut(idx) {
                    atom.mass = element::standard_weight(atom.atomic_num);
                }
            }
        }
    }
    Ok(())
}

/// `M  SUB`: substitution-count (explicit degree) query.
pub(crate) fn parse_substitution_count_line(mol: &mut Molecule, text: &str) -> IoResult<()> {
    let n_entries: u32 = strip_and_cast(text.get(6..9).unwrap_or(""), false)?;
    let mut spos = 9;
    for _ in 0..n_entries {
        let wire: i32 = strip_and_cast(text.get(spos..spos + 4).unwrap_or(""), false)?;
        spos += 4;
        let idx = atom_index(mol, wire)?;
        let Some(field) = text.get(spos..spos + 4) else {
            continue;
        };
        if field == "    " {
            continue;
        }
        let count = to_int(field, false)?;
        spos += 4;
        if count == 0 {
            continue;
        }
        let value = match count {
            -1 => 0,
            -2 => mol.degree(idx) as i32,
            1..=5 => count,
            6 => {
                log::warn!(
                    "atom degree query with value 6 found; this will not match degree >6, \
                     though the MDL spec says it should"
                );
                6
            }
            other => {
                return Err(IoError::parse(
                    0,
                    format!("value {other} is not supported as a degree query"),
                ))
            }
        };
        if let Some(atom) = mol.atom_mut(idx) {
            atom.promote_to_query();
            atom.expand_query(AtomQuery::equals(AtomField::ExplicitDegree, value));
        }
    }
    Ok(())
}

/// `M  UNS`: unsaturation query.
pub(crate) fn parse_unsaturation_line(mol: &mut Molecule, text: &str) -> IoResult<()> {
    let n_entries: u32 = strip_and_cast(text.get(6..9).unwrap_or(""), false)?;
    let mut spos = 9;
    for _ in 0..n_entries {
        let wire: i32 = strip_and_cast(text.get(spos..spos + 4).unwrap_or(""), false)?;
        spos += 4;
        let idx = atom_index(mol, wire)?;
        let Some(field) = text.get(spos..spos + 4) else {
            continue;
        };
        if field == "    " {
            continue;
        }
        let value = to_int(field, false)?;
        spos += 4;
        match value {
            0 => {}
            1 => {
                if let Some(atom) = mol.atom_mut(idx) {
                    atom.promote_to_query();
                    atom.expand_query(AtomQuery::Unsaturated);
                }
            }
            other => {
                return Err(IoError::parse(
                    0,
                    format!(
                        "value {other} is not supported as an unsaturation query \
                         (only 0 and 1 are allowed)"
                    ),
                ))
            }
        }
    }
    Ok(())
}

/// `M  RBC`: ring-bond-count query. A count of -2 means "as drawn": the leaf
/// keeps the deferred sentinel until the whole graph is known.
pub(crate) fn parse_ring_bond_count_line(mol: &mut Molecule, text: &str) -> IoResult<()> {
    let n_entries: u32 = strip_and_cast(text.get(6..9).unwrap_or(""), false)?;
    let mut spos = 9;
    for _ in 0..n_entries {
        let wire: i32 = strip_and_cast(text.get(spos..spos + 4).unwrap_or(""), false)?;
        spos += 4;
        let idx = atom_index(mol, wire)?;
        let Some(field) = text.get(spos..spos + 4) else {
            continue;
        };
        if field == "    " {
            continue;
        }
        let count = to_int(field, false)?;
        spos += 4;
        if count == 0 {
            continue;
        }
        let query = match count {
            -1 => AtomQuery::equals(AtomField::RingBondCount, 0),
            -2 => {
                mol.set_needs_query_scan(true);
                AtomQuery::equals(AtomField::RingBondCount, DEFERRED)
            }
            1..=3 => AtomQuery::equals(AtomField::RingBondCount, count),
            4 => AtomQuery::AtMost {
                field: AtomField::RingBondCount,
                value: 4,
            },
            other => {
                return Err(IoError::parse(
                    0,
                    format!("value {other} is not supported as a ring-bond count query"),
                ))
            }
        };
        if let Some(atom) = mol.atom_mut(idx) {
            atom.promote_to_query();
            atom.expand_query(query);
        }
    }
    Ok(())
}

/// `M  ALS`: new-style atom list.
pub(crate) fn parse_new_atom_list(mol: &mut Molecule, text: &str) -> IoResult<()> {
    if text.len() < 15 {
        return Err(IoError::parse(
            0,
            format!("atom list line too short: '{text}'"),
        ));
    }
    let wire: i32 = strip_and_cast(text.get(7..10).unwrap_or(""), false)?;
    let idx = atom_index(mol, wire)?;
    let n_queries = to_int(text.get(10..13).unwrap_or(""), false)?;
    if n_queries <= 0 {
        return Err(IoError::parse(0, "empty atom list"));
    }

    let modifier = text.as_bytes().get(14).map(|&b| b as char).unwrap_or(' ');
    let negated = match modifier {
        'T' => true,
        'F' => false,
        other => {
            return Err(IoError::parse(
                0,
                format!("unrecognized atom-list query modifier: '{other}'"),
            ))
        }
    };

    let mut children = Vec::with_capacity(n_queries as usize);
    let mut first_z = None;
    for i in 0..n_queries as usize {
        let pos = 16 + i * 4;
        let Some(field) = text.get(pos..pos + 4) else {
            return Err(IoError::parse(
                0,
                format!("atom list line too short: '{text}'"),
            ));
        };
        let symbol = field.trim();
        let z = element::atomic_number(symbol).ok_or_else(|| {
            IoError::parse(
                0,
                format!("unrecognized element symbol '{symbol}' in atom list"),
            )
        })?;
        if first_z.is_none() {
            first_z = Some(z);
        }
        children.push(AtomQuery::equals(AtomField::AtomicNumber, z as i32));
    }

    let mut replacement = mol.atom(idx).cloned().unwrap_or_default();
    if let Some(z) = first_z {
        replacement.atomic_num = z;
    }
    let mut query = AtomQuery::Or(children);
    if negated {
        query = query.negated();
    }
    replacement.set_query(query);
    mol.replace_atom(idx, replacement)?;
    Ok(())
}

/// `M  RGP`: replace each listed atom with an any-atom query carrying its
/// R-group label; small labels double as the mass so writers can round-trip
/// them.
pub(crate) fn parse_rgroup_labels(mol: &mut Molecule, text: &str) -> IoResult<()> {
    let n_labels = to_int(text.get(6..9).unwrap_or(""), false)?;
    for i in 0..n_labels.max(0) as usize {
        let pos = 10 + i * 8;
        let wire: i32 = strip_and_cast(text.get(pos..pos + 3).unwrap_or(""), false)?;
        let label: i32 = strip_and_cast(text.get(pos + 4..pos + 7).unwrap_or(""), false)?;
        let idx = atom_index(mol, wire)?;
        let mut replacement = mol.atom(idx).cloned().unwrap_or_default();
        replacement.props.set(keys::MOL_FILE_R_LABEL, label);
        // the CTFile spec only allows R labels up to 32; with three digits on
        // the wire, accept anything positive below 1000
        if label > 0 && label < 999 {
            replacement.mass = label as f64;
        }
        replacement.set_query(AtomQuery::Null);
        mol.replace_atom(idx, replacement)?;
    }
    Ok(())
}

impl<R: Read> MolfileReader<R> {
    /// Read and interpret the property block until `M  END`, a `$$$$` record
    /// separator, or end of input.
    pub(crate) fn parse_property_block(&mut self, mol: &mut Molecule) -> IoResult<PropertyEnd> {
        let Some(mut line) = self.read_line()? else {
            return Ok(PropertyEnd::Eof);
        };

        // older mol files may put a legacy atom-list line first
        if !line.is_empty()
            && !line.starts_with("$$$$")
            && !matches!(line.as_bytes()[0], b'M' | b'A' | b'V' | b'G')
        {
            parse_old_atom_list(mol, &line).map_err(|e| e.at_line(self.line_number()))?;
        }

        let mut first_charge_line = true;
        loop {
            if line.starts_with("M  END") {
                return Ok(PropertyEnd::MEnd);
            }
            if line.starts_with("$$$$") {
                return Ok(PropertyEnd::RecordSep);
            }

            let line_no = self.line_number();
            let at = |e: IoError| e.at_line(line_no);
            if line.starts_with('A') {
                let next = self.read_line()?.unwrap_or_default();
                parse_atom_alias(mol, &line, &next).map_err(at)?;
            } else if line.starts_with('G') {
                log::warn!("deprecated group abbreviation ignored");
            } else if line.starts_with('V') {
                parse_atom_value(mol, &line).map_err(at)?;
            } else if line.starts_with("S  SKP") {
                // obsolete skip record, nothing to do
            } else if line.starts_with("M  ALS") {
                parse_new_atom_list(mol, &line).map_err(at)?;
            } else if line.starts_with("M  ISO") {
                parse_isotope_line(mol, &line).map_err(at)?;
            } else if line.starts_with("M  RGP") {
                parse_rgroup_labels(mol, &line).map_err(at)?;
            } else if line.starts_with("M  RBC") {
                parse_ring_bond_count_line(mol, &line).map_err(at)?;
            } else if line.starts_with("M  SUB") {
                parse_substitution_count_line(mol, &line).map_err(at)?;
            } else if line.starts_with("M  UNS") {
                parse_unsaturation_line(mol, &line).map_err(at)?;
            } else if line.starts_with("M  CHG") {
                parse_charge_line(mol, &line, first_charge_line).map_err(at)?;
                first_charge_line = false;
            } else if line.starts_with("M  RAD") {
                parse_radical_line(mol, &line, first_charge_line).map_err(at)?;
                first_charge_line = false;
            }
            // anything else (including unknown M records) is skipped

            line = match self.read_line()? {
                Some(next) => next,
                None => return Ok(PropertyEnd::Eof),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctab_mol::{Atom, Bond, BondOrder};

    fn mol_with_atoms(symbols: &[u8]) -> Molecule {
        let mut mol = Molecule::new();
        for &z in symbols {
            mol.add_atom(Atom::new(z));
        }
        mol
    }

    #[test]
    fn test_charge_line_resets_on_first_call() {
        let mut mol = mol_with_atoms(&[7, 8, 8, 6]);
        mol.atom_mut(AtomIndex::new(3)).unwrap().formal_charge = 2;
        parse_charge_line(&mut mol, "M  CHG  2   1   1   2  -1", true).unwrap();
        let charges: Vec<i8> = mol.atoms().map(|a| a.formal_charge).collect();
        assert_eq!(charges, vec![1, -1, 0, 0]);
    }

    #[test]
    fn test_charge_line_out_of_range_atom() {
        let mut mol = mol_with_atoms(&[6]);
        assert!(parse_charge_line(&mut mol, "M  CHG  1   9   1", true).is_err());
    }

    #[test]
    fn test_radical_line_mapping() {
        let mut mol = mol_with_atoms(&[6, 6, 6]);
        parse_radical_line(&mut mol, "M  RAD  3   1   1   2   2   3   3", true).unwrap();
        let electrons: Vec<u8> = mol.atoms().map(|a| a.radical_electrons).collect();
        assert_eq!(electrons, vec![2, 1, 2]);
        assert!(parse_radical_line(&mut mol, "M  RAD  1   1   4", false).is_err());
    }

    #[test]
    fn test_isotope_line() {
        let mut mol = mol_with_atoms(&[6, 6]);
        parse_isotope_line(&mut mol, "M  ISO  1   1  13").unwrap();
        assert!((mol.atom(AtomIndex::new(0)).unwrap().mass - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_isotope_blank_field_resets_weight() {
        let mut mol = mol_with_atoms(&[6]);
        mol.atom_mut(AtomIndex::new(0)).unwrap().mass = 14.0;
        parse_isotope_line(&mut mol, "M  ISO  1   1").unwrap();
        assert!((mol.atom(AtomIndex::new(0)).unwrap().mass - 12.011).abs() < 1e-6);
    }

    #[test]
    fn test_substitution_count() {
        let mut mol = mol_with_atoms(&[6, 6]);
        mol.add_bond(Bond::new(
            AtomIndex::new(0),
            AtomIndex::new(1),
            BondOrder::Single,
        ))
        .unwrap();
        parse_substitution_count_line(&mut mol, "M  SUB  1   1   2").unwrap();
        let atom = mol.atom(AtomIndex::new(0)).unwrap();
        let expected = AtomQuery::equals(AtomField::AtomicNumber, 6)
            .and_with(AtomQuery::equals(AtomField::ExplicitDegree, 2));
        assert_eq!(atom.query(), Some(&expected));
    }

    #[test]
    fn test_substitution_count_as_drawn() {
        let mut mol = mol_with_atoms(&[6, 6]);
        mol.add_bond(Bond::new(
            AtomIndex::new(0),
            AtomIndex::new(1),
            BondOrder::Single,
        ))
        .unwrap();
        // -2 means "equal to the current degree", resolved immediately
        parse_substitution_count_line(&mut mol, "M  SUB  1   1  -2").unwrap();
        let atom = mol.atom(AtomIndex::new(0)).unwrap();
        let expected = AtomQuery::equals(AtomField::AtomicNumber, 6)
            .and_with(AtomQuery::equals(AtomField::ExplicitDegree, 1));
        assert_eq!(atom.query(), Some(&expected));
    }

    #[test]
    fn test_substitution_count_rejects_bad_value() {
        let mut mol = mol_with_atoms(&[6]);
        assert!(parse_substitution_count_line(&mut mol, "M  SUB  1   1   7").is_err());
    }

    #[test]
    fn test_unsaturation() {
        let mut mol = mol_with_atoms(&[6]);
        parse_unsaturation_line(&mut mol, "M  UNS  1   1   1").unwrap();
        let expected =
            AtomQuery::equals(AtomField::AtomicNumber, 6).and_with(AtomQuery::Unsaturated);
        assert_eq!(mol.atom(AtomIndex::new(0)).unwrap().query(), Some(&expected));
        assert!(parse_unsaturation_line(&mut mol, "M  UNS  1   1   2").is_err());
    }

    #[test]
    fn test_ring_bond_count_deferred() {
        let mut mol = mol_with_atoms(&[6]);
        parse_ring_bond_count_line(&mut mol, "M  RBC  1   1  -2").unwrap();
        assert!(mol.needs_query_scan());
        let atom = mol.atom(AtomIndex::new(0)).unwrap();
        assert!(atom.query().unwrap().has_deferred());
    }

    #[test]
    fn test_ring_bond_count_le_four() {
        let mut mol = mol_with_atoms(&[6]);
        parse_ring_bond_count_line(&mut mol, "M  RBC  1   1   4").unwrap();
        let expected = AtomQuery::equals(AtomField::AtomicNumber, 6).and_with(AtomQuery::AtMost {
            field: AtomField::RingBondCount,
            value: 4,
        });
        assert_eq!(mol.atom(AtomIndex::new(0)).unwrap().query(), Some(&expected));
        assert!(parse_ring_bond_count_line(&mut mol, "M  RBC  1   1   5").is_err());
    }

    #[test]
    fn test_promotion_preserves_charge() {
        let mut mol = mol_with_atoms(&[7]);
        mol.atom_mut(AtomIndex::new(0)).unwrap().formal_charge = 1;
        parse_substitution_count_line(&mut mol, "M  SUB  1   1   3").unwrap();
        let atom = mol.atom(AtomIndex::new(0)).unwrap();
        assert_eq!(atom.formal_charge, 1);
        let expected = AtomQuery::equals(AtomField::AtomicNumber, 7)
            .and_with(AtomQuery::equals(AtomField::FormalCharge, 1))
            .and_with(AtomQuery::equals(AtomField::ExplicitDegree, 3));
        assert_eq!(atom.query(), Some(&expected));
    }

    #[test]
    fn test_new_atom_list() {
        let mut mol = mol_with_atoms(&[6]);
        parse_new_atom_list(&mut mol, "M  ALS   1  2 F F   Cl  ").unwrap();
        let atom = mol.atom(AtomIndex::new(0)).unwrap();
        assert_eq!(atom.atomic_num, 9);
        let expected = AtomQuery::Or(vec![
            AtomQuery::equals(AtomField::AtomicNumber, 9),
            AtomQuery::equals(AtomField::AtomicNumber, 17),
        ]);
        assert_eq!(atom.query(), Some(&expected));
    }

    #[test]
    fn test_new_atom_list_negated() {
        let mut mol = mol_with_atoms(&[6]);
        parse_new_atom_list(&mut mol, "M  ALS   1  2 T O   N   ").unwrap();
        let atom = mol.atom(AtomIndex::new(0)).unwrap();
        let expected = AtomQuery::Or(vec![
            AtomQuery::equals(AtomField::AtomicNumber, 8),
            AtomQuery::equals(AtomField::AtomicNumber, 7),
        ])
        .negated();
        assert_eq!(atom.query(), Some(&expected));
    }

    #[test]
    fn test_old_atom_list() {
        let mut mol = mol_with_atoms(&[6]);
        //   aid T/F  count  entries (3 wide at 11 + i*4)
        parse_old_atom_list(&mut mol, "  1 F    2   8   7").unwrap();
        let atom = mol.atom(AtomIndex::new(0)).unwrap();
        assert_eq!(atom.atomic_num, 8);
        let expected = AtomQuery::Or(vec![
            AtomQuery::equals(AtomField::AtomicNumber, 8),
            AtomQuery::equals(AtomField::AtomicNumber, 7),
        ]);
        assert_eq!(atom.query(), Some(&expected));
    }

    #[test]
    fn test_rgroup_labels() {
        let mut mol = mol_with_atoms(&[6, 6]);
        parse_rgroup_labels(&mut mol, "M  RGP  1   1   5").unwrap();
        let atom = mol.atom(AtomIndex::new(0)).unwrap();
        assert_eq!(atom.query(), Some(&AtomQuery::Null));
        assert_eq!(atom.props.get_int(keys::MOL_FILE_R_LABEL), Some(5));
        assert!((atom.mass - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_atom_value() {
        let mut mol = mol_with_atoms(&[6]);
        parse_atom_value(&mut mol, "V    1 some text").unwrap();
        assert_eq!(
            mol.atom(AtomIndex::new(0)).unwrap().props.get_str(keys::MOL_FILE_VALUE),
            Some("some text")
        );
    }
}
