//! V3000 connection-table decoding
//!
//! V3000 blocks are token-oriented rather than column-oriented: every line
//! carries an `M  V30 ` prefix, long lines continue with a trailing `-`, and
//! records are whitespace-separated tokens with single- or double-quoting.
//! Atoms and bonds carry user-assigned indices ("bookmarks") that later
//! records reference, so the wire indices need not be dense.

use std::io::Read;

use ctab_mol::{
    element, keys, Atom, AtomField, AtomIndex, AtomQuery, BondDir, BondQuery, BondStereo,
    Conformer, Molecule,
};
use lin_alg::f64::Vec3;

use super::fields::{to_double, to_int};
use super::v2000::decode_bond_type;
use super::{apply_declared_dimensionality, MolfileReader};
use crate::error::{IoError, IoResult};

/// Split a record into whitespace-separated tokens, honoring `'` and `"`
/// quoting (quotes group, and are stripped).
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                } else {
                    current.push(c);
                }
            }
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_token = true;
                }
                ' ' | '\t' => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                _ => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }
    if in_token {
        tokens.push(current);
    }
    tokens
}

/// Split a `KEY=value` token; the key is uppercased. `None` when the token is
/// not a single assignment.
fn split_assign(token: &str) -> Option<(String, &str)> {
    let (key, value) = token.split_once('=')?;
    if value.contains('=') {
        return None;
    }
    Some((key.to_ascii_uppercase(), value))
}

/// Decode a V3000 atom-symbol token: a bracketed atom list (optionally
/// negated), or the standard symbol vocabulary.
fn parse_atom_symbol(token: &str, negate: bool, line_no: usize) -> IoResult<Atom> {
    if let Some(inner) = token.strip_prefix('[') {
        let Some(inner) = inner.strip_suffix(']') else {
            return Err(IoError::parse(
                line_no,
                format!("bad atom token '{token}'"),
            ));
        };
        let mut children = Vec::new();
        let mut first_z = None;
        for entry in inner.split(',') {
            let symbol = entry.trim();
            if symbol.is_empty() {
                continue;
            }
            let z = element::atomic_number(symbol).ok_or_else(|| {
                IoError::parse(
                    line_no,
                    format!("unrecognized element symbol '{symbol}' in atom list"),
                )
            })?;
            if first_z.is_none() {
                first_z = Some(z);
            }
            children.push(AtomQuery::equals(AtomField::AtomicNumber, z as i32));
        }
        if children.is_empty() {
            return Err(IoError::parse(line_no, format!("empty atom list '{token}'")));
        }
        let mut atom = Atom::new(first_z.unwrap_or(0));
        let mut query = AtomQuery::Or(children);
        if negate {
            query = query.negated();
        }
        atom.set_query(query);
        return Ok(atom);
    }

    if negate {
        return Err(IoError::parse(
            line_no,
            "NOT tokens are only supported for atom lists",
        ));
    }

    let mut atom;
    match token {
        "A" | "Q" | "*" => {
            atom = Atom::new(0);
            match token {
                "*" => atom.set_query(AtomQuery::Null),
                "Q" => atom.set_query(
                    AtomQuery::equals(AtomField::AtomicNumber, 6)
                        .or_with(AtomQuery::equals(AtomField::AtomicNumber, 1))
                        .negated(),
                ),
                _ => atom.set_query(AtomQuery::equals(AtomField::AtomicNumber, 1).negated()),
            }
            atom.no_implicit_h = true;
        }
        "R#" => {
            atom = Atom::new(0);
        }
        "D" => {
            atom = Atom::new(1);
            atom.mass = 2.014;
        }
        "T" => {
            atom = Atom::new(1);
            atom.mass = 3.016;
        }
        _ => {
            let z = element::atomic_number(token).ok_or_else(|| {
                IoError::parse(line_no, format!("unrecognized element symbol '{token}'"))
            })?;
            atom = Atom::new(z);
        }
    }
    Ok(atom)
}

/// Apply one `KEY=value` token to an atom already added to the molecule.
/// Scalar keys turn into query predicates when the atom is already a query
/// atom; `HCOUNT`/`UNSAT`/`RBCNT` force the promotion themselves.
fn apply_atom_keyval(
    mol: &mut Molecule,
    idx: AtomIndex,
    token: &str,
    line_no: usize,
) -> IoResult<()> {
    let at = |e: IoError| e.at_line(line_no);
    let Some((key, value)) = split_assign(token) else {
        return Err(IoError::parse(
            line_no,
            format!("invalid atom property '{token}'"),
        ));
    };
    let Some(atom) = mol.atom_mut(idx) else {
        return Ok(());
    };

    match key.as_str() {
        "CHG" => {
            let charge = to_int(value, false).map_err(at)?;
            if atom.is_query() {
                atom.expand_query(AtomQuery::equals(AtomField::FormalCharge, charge));
            } else {
                atom.formal_charge = charge as i8;
            }
        }
        "RAD" => match to_int(value, false).map_err(at)? {
            0 => {}
            1 => atom.radical_electrons = 2,
            2 => atom.radical_electrons = 1,
            3 => atom.radical_electrons = 2,
            other => {
                return Err(IoError::parse(
                    line_no,
                    format!("unrecognized RAD value {other}"),
                ))
            }
        },
        "MASS" => {
            let mass = to_double(value, false).map_err(at)?;
            if mass <= 0.0 {
                return Err(IoError::parse(
                    line_no,
                    format!("bad value for MASS: '{value}'"),
                ));
            }
            if atom.is_query() {
                atom.expand_query(AtomQuery::equals(AtomField::Mass, mass as i32));
            } else {
                atom.mass = mass;
            }
        }
        "CFG" => match to_int(value, false).map_err(at)? {
            0 => {}
            cfg @ 1..=3 => atom.props.set(keys::MOL_PARITY, cfg),
            other => {
                return Err(IoError::parse(
                    line_no,
                    format!("unrecognized CFG value {other}"),
                ))
            }
        },
        "HCOUNT" => {
            if value != "0" {
                let mut h_count = to_int(value, false).map_err(at)?;
                if h_count == -1 {
                    h_count = 0;
                }
                atom.promote_to_query();
                atom.expand_query(AtomQuery::equals(AtomField::HCount, h_count));
            }
        }
        "UNSAT" => {
            if value == "1" {
                atom.promote_to_query();
                atom.expand_query(AtomQuery::Unsaturated);
            }
        }
        "RBCNT" => {
            if value != "0" {
                let mut count = to_int(value, false).map_err(at)?;
                if count == -1 {
                    count = 0;
                }
                atom.promote_to_query();
                atom.expand_query(AtomQuery::equals(AtomField::RingBondCount, count));
            }
        }
        "AAMAP" => {
            if value != "0" {
                let map_num = to_int(value, false).map_err(at)?;
                atom.props.set(keys::MOL_ATOM_MAP_NUMBER, map_num);
            }
        }
        _ => {} // unrecognized keys are skipped
    }
    Ok(())
}

impl<R: Read> MolfileReader<R> {
    /// Read one V3000 logical line: the `M  V30 ` prefix is stripped and a
    /// trailing `-` joins the next physical line onto the payload.
    pub(crate) fn read_v30_line(&mut self) -> IoResult<String> {
        let mut result = String::new();
        loop {
            let line = self.require_line("V3000 block")?;
            if !line.starts_with("M  V30 ") {
                return Err(IoError::parse(
                    self.line_number(),
                    "line does not start with 'M  V30 '",
                ));
            }
            let payload = &line[7..];
            match payload.strip_suffix('-') {
                Some(continued) => result.push_str(continued),
                None => {
                    result.push_str(payload);
                    return Ok(result);
                }
            }
        }
    }

    fn parse_v3000_atom_block(
        &mut self,
        mol: &mut Molecule,
        conf: &mut Conformer,
        n_atoms: usize,
    ) -> IoResult<()> {
        let line = self.read_v30_line()?;
        if !line.starts_with("BEGIN ATOM") {
            return Err(IoError::parse(self.line_number(), "BEGIN ATOM line not found"));
        }

        for _ in 0..n_atoms {
            let line = self.read_v30_line()?;
            let line_no = self.line_number();
            let at = |e: IoError| e.at_line(line_no);
            let tokens = tokenize(line.trim());
            let mut it = tokens.iter();
            let bad = || IoError::parse(line_no, format!("bad atom line: '{line}'"));

            let wire_idx = to_int(it.next().ok_or_else(bad)?, false).map_err(at)?;

            let mut symbol = it.next().ok_or_else(bad)?;
            let mut negate = false;
            if symbol.as_str() == "NOT" {
                negate = true;
                symbol = it.next().ok_or_else(bad)?;
            }
            let mut atom = parse_atom_symbol(symbol, negate, line_no)?;

            let x = to_double(it.next().ok_or_else(bad)?, false).map_err(at)?;
            let y = to_double(it.next().ok_or_else(bad)?, false).map_err(at)?;
            let z = to_double(it.next().ok_or_else(bad)?, false).map_err(at)?;

            let map_num = to_int(it.next().ok_or_else(bad)?, false).map_err(at)?;
            atom.props.set(keys::MOL_ATOM_MAP_NUMBER, map_num);

            let idx = mol.add_atom(atom);
            for token in it {
                apply_atom_keyval(mol, idx, token, line_no)?;
            }
            mol.set_atom_bookmark(wire_idx, idx);
            conf.push(Vec3::new(x, y, z));
        }

        let line = self.read_v30_line()?;
        if !line.starts_with("END ATOM") {
            return Err(IoError::parse(self.line_number(), "END ATOM line not found"));
        }
        apply_declared_dimensionality(mol, conf);
        Ok(())
    }

    fn parse_v3000_bond_block(
        &mut self,
        mol: &mut Molecule,
        n_bonds: usize,
        chirality_possible: &mut bool,
    ) -> IoResult<()> {
        let line = self.read_v30_line()?;
        if !line.starts_with("BEGIN BOND") {
            return Err(IoError::parse(self.line_number(), "BEGIN BOND line not found"));
        }

        for _ in 0..n_bonds {
            let line = self.read_v30_line()?;
            let line_no = self.line_number();
            let at = |e: IoError| e.at_line(line_no);
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 4 {
                return Err(IoError::parse(line_no, format!("bond line too short: '{line}'")));
            }

            let wire_idx = to_int(tokens[0], false).map_err(at)?;
            let wire_type = to_int(tokens[1], false).map_err(at)?;
            let mark1 = to_int(tokens[2], false).map_err(at)?;
            let mark2 = to_int(tokens[3], false).map_err(at)?;

            let begin = mol.atom_with_bookmark(mark1).ok_or_else(|| {
                IoError::parse(line_no, format!("bond references unknown atom index {mark1}"))
            })?;
            let end = mol.atom_with_bookmark(mark2).ok_or_else(|| {
                IoError::parse(line_no, format!("bond references unknown atom index {mark2}"))
            })?;

            let mut bond = decode_bond_type(begin, end, wire_type);

            for token in &tokens[4..] {
                let Some((key, value)) = split_assign(token) else {
                    return Err(IoError::parse(
                        line_no,
                        format!("bad bond property '{token}'"),
                    ));
                };
                match key.as_str() {
                    "CFG" => match to_int(value, false).map_err(at)? {
                        0 => {}
                        1 => {
                            bond.dir = BondDir::BeginWedge;
                            *chirality_possible = true;
                        }
                        2 => {
                            if wire_type == 1 {
                                bond.dir = BondDir::Unknown;
                            } else if wire_type == 2 {
                                bond.dir = BondDir::EitherDouble;
                                bond.stereo = BondStereo::Any;
                            }
                        }
                        3 => {
                            bond.dir = BondDir::BeginDash;
                            *chirality_possible = true;
                        }
                        other => {
                            return Err(IoError::parse(
                                line_no,
                                format!("bad bond CFG {other}"),
                            ))
                        }
                    },
                    "TOPO" => {
                        if value != "0" {
                            if !bond.is_query() {
                                bond.set_query(BondQuery::OrderEquals(bond.order));
                            }
                            let constraint = match value {
                                "1" => BondQuery::InRing,
                                "2" => BondQuery::InRing.negated(),
                                other => {
                                    return Err(IoError::parse(
                                        line_no,
                                        format!("bad bond TOPO '{other}'"),
                                    ))
                                }
                            };
                            bond.expand_query(constraint);
                        }
                    }
                    "RXCTR" => {
                        let status = to_int(value, false).map_err(at)?;
                        bond.props.set(keys::MOL_REACT_STATUS, status);
                    }
                    "STBOX" => {}
                    _ => {} // unrecognized keys are skipped
                }
            }

            let aromatic = bond.is_aromatic;
            let (b_begin, b_end) = (bond.begin, bond.end);
            let idx = mol
                .add_bond(bond)
                .map_err(|e| IoError::parse(line_no, e.to_string()))?;
            if aromatic {
                if let Some(atom) = mol.atom_mut(b_begin) {
                    atom.is_aromatic = true;
                }
                if let Some(atom) = mol.atom_mut(b_end) {
                    atom.is_aromatic = true;
                }
            }
            mol.set_bond_bookmark(wire_idx, idx);
        }

        let line = self.read_v30_line()?;
        if !line.starts_with("END BOND") {
            return Err(IoError::parse(self.line_number(), "END BOND line not found"));
        }
        Ok(())
    }

    /// Drive a whole V3000 CTAB: counts, atom and bond blocks, then the
    /// optional blocks we skip (SGROUP, OBJ3D, LINKNODE, unknown `BEGIN`
    /// blocks) up to `END CTAB`.
    pub(crate) fn parse_v3000_ctab(
        &mut self,
        mol: &mut Molecule,
        chirality_possible: &mut bool,
    ) -> IoResult<()> {
        let line = self.read_v30_line()?;
        if !line.starts_with("BEGIN CTAB") {
            return Err(IoError::parse(self.line_number(), "BEGIN CTAB line not found"));
        }

        let line = self.read_v30_line()?;
        let line_no = self.line_number();
        let at = |e: IoError| e.at_line(line_no);
        let Some(rest) = line.strip_prefix("COUNTS ") else {
            return Err(IoError::parse(line_no, format!("bad counts line: '{line}'")));
        };
        let fields: Vec<&str> = rest.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(IoError::parse(line_no, format!("bad counts line: '{line}'")));
        }
        let n_atoms = to_int(fields[0], false).map_err(at)?;
        let n_bonds = to_int(fields[1], false).map_err(at)?;
        if n_atoms <= 0 {
            return Err(IoError::parse(line_no, "molecule has no atoms"));
        }
        let n_sgroups = match fields.get(2) {
            Some(f) => to_int(f, false).map_err(at)?,
            None => 0,
        };
        let n_3d_constraints = match fields.get(3) {
            Some(f) => to_int(f, false).map_err(at)?,
            None => 0,
        };
        let _chiral_flag = match fields.get(4) {
            Some(f) => to_int(f, false).map_err(at)?,
            None => 0,
        };

        let mut conf = Conformer::with_capacity(n_atoms as usize);
        self.parse_v3000_atom_block(mol, &mut conf, n_atoms as usize)?;
        if n_bonds > 0 {
            self.parse_v3000_bond_block(mol, n_bonds as usize, chirality_possible)?;
        }

        if n_sgroups > 0 {
            log::warn!("S-group information in mol block ignored");
            let line = self.read_v30_line()?;
            if !line.starts_with("BEGIN SGROUP") {
                return Err(IoError::parse(
                    self.line_number(),
                    "BEGIN SGROUP line not found",
                ));
            }
            loop {
                let line = self.read_v30_line()?;
                if line.starts_with("END SGROUP") {
                    break;
                }
            }
        }

        if n_3d_constraints > 0 {
            log::warn!("3D constraint information in mol block ignored");
            let line = self.read_v30_line()?;
            if !line.starts_with("BEGIN OBJ3D") {
                return Err(IoError::parse(
                    self.line_number(),
                    "BEGIN OBJ3D line not found",
                ));
            }
            for _ in 0..n_3d_constraints {
                self.read_v30_line()?;
            }
            let line = self.read_v30_line()?;
            if !line.starts_with("END OBJ3D") {
                return Err(IoError::parse(
                    self.line_number(),
                    "END OBJ3D line not found",
                ));
            }
        }

        let mut line = self.read_v30_line()?;
        while line.starts_with("LINKNODE") {
            line = self.read_v30_line()?;
        }
        while line.starts_with("BEGIN") {
            log::warn!("skipping unknown V3000 block: {line}");
            loop {
                line = self.read_v30_line()?;
                if line.starts_with("END") {
                    break;
                }
            }
            line = self.read_v30_line()?;
        }

        if !line.starts_with("END CTAB") {
            return Err(IoError::parse(self.line_number(), "END CTAB line not found"));
        }

        mol.add_conformer(conf)?;
        Ok(())
    }
}
