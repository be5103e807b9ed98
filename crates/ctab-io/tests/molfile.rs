//! End-to-end molfile parsing tests against literal blocks.

use ctab_io::{read_molfile_str, read_sdf_str, IoError, MolfileReader, MoleculeReader, ReadOptions};
use ctab_mol::{
    keys, AtomField, AtomIndex, AtomQuery, BondIndex, BondOrder, BondQuery, BondStereo, Molecule,
};

fn parse_with(content: &str, options: ReadOptions) -> Molecule {
    MolfileReader::with_options(content.as_bytes(), options).read().unwrap()
}

fn assert_mols_equal(a: &Molecule, b: &Molecule) {
    assert_eq!(a.atom_count(), b.atom_count());
    assert_eq!(a.bond_count(), b.bond_count());
    assert!(a.atoms().eq(b.atoms()));
    assert!(a.bonds().eq(b.bonds()));
    assert_eq!(a.props, b.props);
    let (ca, cb) = (a.conformer().unwrap(), b.conformer().unwrap());
    assert_eq!(ca.is_3d, cb.is_3d);
    assert_eq!(ca.len(), cb.len());
    for (pa, pb) in ca.positions().iter().zip(cb.positions()) {
        assert_eq!(pa.x.to_bits(), pb.x.to_bits());
        assert_eq!(pa.y.to_bits(), pb.y.to_bits());
        assert_eq!(pa.z.to_bits(), pb.z.to_bits());
    }
}

const METHANE: &str = "methane\n\n\n  1  0  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\nM  END\n";

#[test]
fn methane_v2000() {
    let mol = read_molfile_str(METHANE).unwrap();
    assert_eq!(mol.atom_count(), 1);
    assert_eq!(mol.bond_count(), 0);
    assert_eq!(mol.props.get_str(keys::NAME), Some("methane"));

    let atom = mol.atom(AtomIndex::new(0)).unwrap();
    assert_eq!(atom.atomic_num, 6);

    let conf = mol.conformer().unwrap();
    assert_eq!(conf.len(), 1);
    let p = conf.position(AtomIndex::new(0)).unwrap();
    assert_eq!((p.x, p.y, p.z), (0.0, 0.0, 0.0));
}

#[test]
fn explicit_valence_set_after_parse() {
    let mol = read_molfile_str(METHANE).unwrap();
    assert_eq!(mol.atom(AtomIndex::new(0)).unwrap().explicit_valence, Some(0));
}

fn benzene_block() -> String {
    let coords = [
        (1.2990, 0.7500),
        (1.2990, -0.7500),
        (0.0000, -1.5000),
        (-1.2990, -0.7500),
        (-1.2990, 0.7500),
        (0.0000, 1.5000),
    ];
    let mut block = String::from("benzene\n\n\n  6  6  0  0  0  0  0  0  0  0999 V2000\n");
    for (x, y) in coords {
        block.push_str(&format!(
            "{x:>10.4}{y:>10.4}    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n"
        ));
    }
    for i in 1..=6 {
        let j = i % 6 + 1;
        block.push_str(&format!("{i:>3}{j:>3}  4  0  0  0  0\n"));
    }
    block.push_str("M  END\n");
    block
}

#[test]
fn benzene_aromatic_flags() {
    let mol = read_molfile_str(&benzene_block()).unwrap();
    assert_eq!(mol.atom_count(), 6);
    assert_eq!(mol.bond_count(), 6);
    for bond in mol.bonds() {
        assert_eq!(bond.order, BondOrder::Aromatic);
        assert!(bond.is_aromatic);
    }
    for atom in mol.atoms() {
        assert!(atom.is_aromatic);
    }
}

const NITRO: &str = "nitromethane\n\n\n  4  3  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 N   0  0  0  0  0  0  0  0  0  0  0  0\n    1.2000    0.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0\n   -0.6000    1.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0\n   -0.6000   -1.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n  1  2  1  0  0  0  0\n  1  3  2  0  0  0  0\n  1  4  1  0  0  0  0\nM  CHG  2   1   1   2  -1\nM  END\n";

#[test]
fn charge_record() {
    let mol = read_molfile_str(NITRO).unwrap();
    let charges: Vec<i8> = mol.atoms().map(|a| a.formal_charge).collect();
    assert_eq!(charges, vec![1, -1, 0, 0]);
}

#[test]
fn first_charge_line_resets_atom_block_charges() {
    // atom 1 carries charge code 5 (-1) in the atom block; the M  CHG line
    // only mentions atom 2, so atom 1 must come out neutral
    let block = "reset\n\n\n  2  1  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 O   0  5  0  0  0  0  0  0  0  0  0  0\n    1.0000    0.0000    0.0000 N   0  0  0  0  0  0  0  0  0  0  0  0\n  1  2  1  0  0  0  0\nM  CHG  1   2   1\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    let charges: Vec<i8> = mol.atoms().map(|a| a.formal_charge).collect();
    assert_eq!(charges, vec![0, 1]);
}

#[test]
fn atom_block_charge_codes_stand_without_chg_record() {
    let block = "anion\n\n\n  1  0  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 Cl  0  5  0  0  0  0  0  0  0  0  0  0\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    assert_eq!(mol.atom(AtomIndex::new(0)).unwrap().formal_charge, -1);
}

#[test]
fn rgroup_label() {
    let block = "rgroup\n\n\n  2  1  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n    1.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n  1  2  1  0  0  0  0\nM  RGP  1   1   5\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    let atom = mol.atom(AtomIndex::new(0)).unwrap();
    assert_eq!(atom.query(), Some(&AtomQuery::Null));
    assert_eq!(atom.props.get_int(keys::MOL_FILE_R_LABEL), Some(5));
    assert_eq!(atom.mass, 5.0);
}

const V3000_WATER: &str = "water\n\n\n  0  0  0  0  0  0  0  0  0  0999 V3000\nM  V30 BEGIN CTAB\nM  V30 COUNTS 3 2 0 0 0\nM  V30 BEGIN ATOM\nM  V30 1 O 0 0 0 0\nM  V30 2 H 0 1 0 0\nM  V30 3 H 1 0 0 0\nM  V30 END ATOM\nM  V30 BEGIN BOND\nM  V30 1 1 1 2\nM  V30 2 1 1 3\nM  V30 END BOND\nM  V30 END CTAB\nM  END\n";

#[test]
fn v3000_water() {
    let mol = read_molfile_str(V3000_WATER).unwrap();
    assert_eq!(mol.atom_count(), 3);
    assert_eq!(mol.bond_count(), 2);
    let numbers: Vec<u8> = mol.atoms().map(|a| a.atomic_num).collect();
    assert_eq!(numbers, vec![8, 1, 1]);
    for (i, bond) in mol.bonds().enumerate() {
        assert_eq!(bond.order, BondOrder::Single);
        assert_eq!(bond.begin, AtomIndex::new(0));
        assert_eq!(bond.end, AtomIndex::new(i as u32 + 1));
    }
    assert_eq!(mol.conformer().unwrap().len(), 3);
    // wire indices resolve through bookmarks
    assert_eq!(mol.atom_with_bookmark(1), Some(AtomIndex::new(0)));
    assert_eq!(mol.atom_with_bookmark(3), Some(AtomIndex::new(2)));
}

#[test]
fn v3000_counts_must_be_zeroed_in_header() {
    let bad = V3000_WATER.replace(
        "  0  0  0  0  0  0  0  0  0  0999 V3000",
        "  3  2  0  0  0  0  0  0  0  0999 V3000",
    );
    assert!(read_molfile_str(&bad).is_err());
}

#[test]
fn v3000_sparse_bookmarks() {
    // wire atom indices 10/20/30: bonds must still resolve
    let block = "sparse\n\n\n  0  0  0  0  0  0  0  0  0  0999 V3000\nM  V30 BEGIN CTAB\nM  V30 COUNTS 3 2 0 0 0\nM  V30 BEGIN ATOM\nM  V30 10 O 0 0 0 0\nM  V30 20 H 0 1 0 0\nM  V30 30 H 1 0 0 0\nM  V30 END ATOM\nM  V30 BEGIN BOND\nM  V30 1 1 10 20\nM  V30 2 1 10 30\nM  V30 END BOND\nM  V30 END CTAB\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    assert_eq!(mol.bond_count(), 2);
    assert_eq!(mol.bond(BondIndex::new(1)).unwrap().end, AtomIndex::new(2));
}

#[test]
fn v3000_continuation_lines() {
    let block = "cont\n\n\n  0  0  0  0  0  0  0  0  0  0999 V3000\nM  V30 BEGIN CTAB\nM  V30 COUNTS 1 0 -\nM  V30 0 0 0\nM  V30 BEGIN ATOM\nM  V30 1 C 0 0 0 0 -\nM  V30  CHG=-1\nM  V30 END ATOM\nM  V30 END CTAB\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    assert_eq!(mol.atom_count(), 1);
    assert_eq!(mol.atom(AtomIndex::new(0)).unwrap().formal_charge, -1);
}

#[test]
fn v3000_atom_list_and_keyvals() {
    let block = "list\n\n\n  0  0  0  0  0  0  0  0  0  0999 V3000\nM  V30 BEGIN CTAB\nM  V30 COUNTS 2 1 0 0 0\nM  V30 BEGIN ATOM\nM  V30 1 [F,Cl] 0 0 0 0\nM  V30 2 C 1 0 0 3 CHG=1 MASS=13\nM  V30 END ATOM\nM  V30 BEGIN BOND\nM  V30 1 1 1 2\nM  V30 END BOND\nM  V30 END CTAB\nM  END\n";
    let mol = read_molfile_str(block).unwrap();

    let list_atom = mol.atom(AtomIndex::new(0)).unwrap();
    let expected = AtomQuery::Or(vec![
        AtomQuery::equals(AtomField::AtomicNumber, 9),
        AtomQuery::equals(AtomField::AtomicNumber, 17),
    ]);
    assert_eq!(list_atom.query(), Some(&expected));

    let carbon = mol.atom(AtomIndex::new(1)).unwrap();
    assert_eq!(carbon.formal_charge, 1);
    assert_eq!(carbon.mass, 13.0);
    assert_eq!(carbon.props.get_int(keys::MOL_ATOM_MAP_NUMBER), Some(3));
}

#[test]
fn v3000_hcount_promotes_to_query() {
    let block = "hcount\n\n\n  0  0  0  0  0  0  0  0  0  0999 V3000\nM  V30 BEGIN CTAB\nM  V30 COUNTS 1 0 0 0 0\nM  V30 BEGIN ATOM\nM  V30 1 N 0 0 0 0 HCOUNT=-1\nM  V30 END ATOM\nM  V30 END CTAB\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    let atom = mol.atom(AtomIndex::new(0)).unwrap();
    let expected = AtomQuery::equals(AtomField::AtomicNumber, 7)
        .and_with(AtomQuery::equals(AtomField::HCount, 0));
    assert_eq!(atom.query(), Some(&expected));
}

#[test]
fn v3000_unknown_block_is_skipped() {
    let block = "unknown\n\n\n  0  0  0  0  0  0  0  0  0  0999 V3000\nM  V30 BEGIN CTAB\nM  V30 COUNTS 1 0 0 0 0\nM  V30 BEGIN ATOM\nM  V30 1 C 0 0 0 0\nM  V30 END ATOM\nM  V30 BEGIN WEIRD\nM  V30 stuff nobody reads\nM  V30 END WEIRD\nM  V30 END CTAB\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    assert_eq!(mol.atom_count(), 1);
}

#[test]
fn ring_bond_count_as_drawn() {
    let mut block = String::from("cyclohexane\n\n\n  6  6  0  0  0  0  0  0  0  0999 V2000\n");
    for i in 0..6 {
        let angle = std::f64::consts::PI / 3.0 * i as f64;
        block.push_str(&format!(
            "{:>10.4}{:>10.4}    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n",
            1.5 * angle.cos(),
            1.5 * angle.sin()
        ));
    }
    for i in 1..=6 {
        let j = i % 6 + 1;
        block.push_str(&format!("{i:>3}{j:>3}  1  0  0  0  0\n"));
    }
    block.push_str("M  RBC  1   1  -2\nM  END\n");

    let mol = read_molfile_str(&block).unwrap();
    // the deferred leaf is resolved against the finished ring
    assert!(!mol.needs_query_scan());
    let atom = mol.atom(AtomIndex::new(0)).unwrap();
    let query = atom.query().unwrap();
    assert!(!query.has_deferred());
    let expected = AtomQuery::equals(AtomField::AtomicNumber, 6)
        .and_with(AtomQuery::equals(AtomField::RingBondCount, 2));
    assert_eq!(query, &expected);
    // and the completed query matches its own atom
    assert!(query.matches(&mol, AtomIndex::new(0)));
}

#[test]
fn query_bond_types() {
    let block = "qbonds\n\n\n  3  2  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n    1.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n    2.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n  1  2  5  0  0  0  0\n  2  3  8  0  0  0  0\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    assert_eq!(
        mol.bond(BondIndex::new(0)).unwrap().query(),
        Some(&BondQuery::Or(vec![
            BondQuery::OrderEquals(BondOrder::Single),
            BondQuery::OrderEquals(BondOrder::Double),
        ]))
    );
    assert_eq!(
        mol.bond(BondIndex::new(1)).unwrap().query(),
        Some(&BondQuery::Null)
    );
}

#[test]
fn bond_topology_constraint() {
    let block = "topo\n\n\n  2  1  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n    1.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n  1  2  1  0  0  2  0\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    let bond = mol.bond(BondIndex::new(0)).unwrap();
    let expected =
        BondQuery::OrderEquals(BondOrder::Single).and_with(BondQuery::InRing.negated());
    assert_eq!(bond.query(), Some(&expected));
    // chain bond is not in a ring, so the constraint holds
    assert!(expected.matches(&mol, BondIndex::new(0)));
}

#[test]
fn either_double_bond_keeps_stereo_any() {
    let block = "either\n\n\n  2  1  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n    1.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n  1  2  2  3  0  0  0\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    assert_eq!(mol.bond(BondIndex::new(0)).unwrap().stereo, BondStereo::Any);
}

#[test]
fn atom_alias_record() {
    let block = "alias\n\n\n  1  0  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\nA    1\nCOOH\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    assert_eq!(
        mol.atom(AtomIndex::new(0)).unwrap().props.get_str(keys::MOL_FILE_ALIAS),
        Some("COOH")
    );
}

#[test]
fn isotope_record() {
    let block = "c13\n\n\n  1  0  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\nM  ISO  1   1  13\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    assert_eq!(mol.atom(AtomIndex::new(0)).unwrap().mass, 13.0);
}

#[test]
fn two_d_header_flag_sets_conformer() {
    let block = "flat\n                    2D\n\n  1  0  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    assert!(!mol.conformer().unwrap().is_3d);
    // marker properties are consumed
    assert!(!mol.props.contains(keys::CONF_2D));
}

#[test]
fn wedge_bond_visible_without_sanitize() {
    let block = "wedge\n\n\n  2  1  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n    1.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n  1  2  1  1  0  0  0\nM  END\n";
    let mol = parse_with(
        block,
        ReadOptions {
            sanitize: false,
            remove_hs: false,
        },
    );
    assert_eq!(
        mol.bond(BondIndex::new(0)).unwrap().dir,
        ctab_mol::BondDir::BeginWedge
    );

    // with sanitize on, perceived wedges are cleared afterwards
    let mol = read_molfile_str(block).unwrap();
    assert_eq!(mol.bond(BondIndex::new(0)).unwrap().dir, ctab_mol::BondDir::None);
}

#[test]
fn remove_hs_option() {
    let block = "water\n\n\n  3  2  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0\n    0.9572    0.0000    0.0000 H   0  0  0  0  0  0  0  0  0  0  0  0\n   -0.2400    0.9266    0.0000 H   0  0  0  0  0  0  0  0  0  0  0  0\n  1  2  1  0  0  0  0\n  1  3  1  0  0  0  0\nM  END\n";
    let kept = read_molfile_str(block).unwrap();
    assert_eq!(kept.atom_count(), 3);

    let stripped = parse_with(
        block,
        ReadOptions {
            sanitize: true,
            remove_hs: true,
        },
    );
    assert_eq!(stripped.atom_count(), 1);
    assert_eq!(stripped.bond_count(), 0);
    assert_eq!(stripped.conformer().unwrap().len(), 1);
}

#[test]
fn eof_before_name_is_no_molecule() {
    let mut reader = MolfileReader::new("".as_bytes());
    assert!(reader.read_next().unwrap().is_none());
    assert!(matches!(read_molfile_str(""), Err(IoError::EmptyFile)));
}

#[test]
fn eof_mid_block_is_an_error() {
    let truncated = "broken\n\n\n  2  1  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n";
    let err = read_molfile_str(truncated).unwrap_err();
    assert!(matches!(err, IoError::Parse { .. }));
}

#[test]
fn missing_m_end_is_an_error() {
    let block = "noend\n\n\n  1  0  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n";
    let err = read_molfile_str(block).unwrap_err();
    match err {
        IoError::Parse { message, .. } => assert!(message.contains("M  END")),
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn record_separator_terminates_without_m_end() {
    let block = "sep\n\n\n  1  0  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n$$$$\n";
    let mol = read_molfile_str(block).unwrap();
    assert_eq!(mol.atom_count(), 1);
}

#[test]
fn unsupported_version_is_fatal() {
    let block = "bad\n\n\n  1  0  0  0  0  0  0  0  0  0999 V4000\n";
    assert!(read_molfile_str(block).is_err());
}

#[test]
fn bond_index_out_of_range_is_fatal() {
    let block = "range\n\n\n  2  1  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n    1.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n  1  9  1  0  0  0  0\nM  END\n";
    assert!(read_molfile_str(block).is_err());
}

#[test]
fn legacy_atom_list_line() {
    let block = "legacy\n\n\n  2  1  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n    1.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n  1  2  1  0  0  0  0\n  1 F    2   8   7\nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    let atom = mol.atom(AtomIndex::new(0)).unwrap();
    assert_eq!(atom.atomic_num, 8);
    let expected = AtomQuery::Or(vec![
        AtomQuery::equals(AtomField::AtomicNumber, 8),
        AtomQuery::equals(AtomField::AtomicNumber, 7),
    ]);
    assert_eq!(atom.query(), Some(&expected));
}

#[test]
fn new_style_atom_list() {
    let block = "als\n\n\n  2  1  0  0  0  0  0  0  0  0999 V2000\n    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n    1.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0\n  1  2  1  0  0  0  0\nM  ALS   1  2 F F   Cl  \nM  END\n";
    let mol = read_molfile_str(block).unwrap();
    let atom = mol.atom(AtomIndex::new(0)).unwrap();
    assert_eq!(atom.atomic_num, 9);
    assert!(atom.is_query());
}

#[test]
fn multi_record_sd_stream() {
    let sd = format!(
        "{METHANE}> <LOGP>\n0.6\n\n$$$$\nethane-ish\n\n\n  1  0  0  0  0  0  0  0  0  0999 V2000\n    1.0000    1.0000    1.0000 N   0  0  0  0  0  0  0  0  0  0  0  0\nM  END\n$$$$\n"
    );
    let mols = read_sdf_str(&sd).unwrap();
    assert_eq!(mols.len(), 2);
    assert_eq!(mols[0].props.get_str(keys::NAME), Some("methane"));
    assert_eq!(mols[1].atom(AtomIndex::new(0)).unwrap().atomic_num, 7);
}

#[test]
fn dollar_data_values_do_not_split_records() {
    let sd = format!("{METHANE}> <TIER>\n$$$$\n\n$$$$\n");
    let mols = read_sdf_str(&sd).unwrap();
    assert_eq!(mols.len(), 1);
}

#[test]
fn leading_record_separators_are_skipped() {
    let sd = format!("$$$$\n$$$$\n{METHANE}");
    let mols = read_sdf_str(&sd).unwrap();
    assert_eq!(mols.len(), 1);
}

#[test]
fn parse_twice_is_observationally_equal() {
    for block in [METHANE, NITRO, V3000_WATER] {
        let a = read_molfile_str(block).unwrap();
        let b = read_molfile_str(block).unwrap();
        assert_mols_equal(&a, &b);
    }
    let benzene = benzene_block();
    let a = read_molfile_str(&benzene).unwrap();
    let b = read_molfile_str(&benzene).unwrap();
    assert_mols_equal(&a, &b);
}

#[test]
fn counts_line_invariants_hold() {
    for block in [METHANE, NITRO, V3000_WATER] {
        let mol = read_molfile_str(block).unwrap();
        assert_eq!(mol.conformer().unwrap().len(), mol.atom_count());
        for bond in mol.bonds() {
            assert!(bond.begin.as_usize() < mol.atom_count());
            assert!(bond.end.as_usize() < mol.atom_count());
            assert_ne!(bond.begin, bond.end);
        }
    }
}
