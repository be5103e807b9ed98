//! MDL molfile / SD file parser
//!
//! Parses MDL connection tables, both the fixed-column V2000 syntax and the
//! token-oriented V3000 syntax, into [`ctab_mol::Molecule`] graphs. Multiple
//! records separated by `$$$$` stream through [`MolfileReader::read_next`].

pub(crate) mod fields;
mod props;
mod v2000;
mod v3000;

use std::io::{BufRead, BufReader, Read};

use ctab_mol::{keys, ops, Conformer, Molecule};

use crate::error::{IoError, IoResult};
use fields::to_int;

/// How a V2000 property block (or a whole record) ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PropertyEnd {
    /// Terminated by `M  END`.
    MEnd,
    /// Terminated by a `$$$$` record separator; the record simply has no
    /// `M  END`, which SD files in the wild do produce.
    RecordSep,
    /// Input ran out first.
    Eof,
}

/// CTAB syntax version from the counts line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CtabVersion {
    V2000,
    V3000,
}

/// Decoded counts line. Only the atom and bond counts are load-bearing; the
/// rest of the tail is carried for completeness and parsed best-effort.
#[derive(Debug, Clone)]
pub(crate) struct Counts {
    pub n_atoms: i32,
    pub n_bonds: i32,
    pub n_lists: i32,
    pub chiral_flag: i32,
    pub ns_text: i32,
    pub n_rxn_components: i32,
    pub n_reactants: i32,
    pub n_products: i32,
    pub n_intermediates: i32,
    pub version: CtabVersion,
}

/// Parse the counts line: atom and bond counts are mandatory, the optional
/// tail swallows conversion failures (some SD producers omit or garble it),
/// and the version column dispatches the syntax.
pub(crate) fn parse_counts_line(line: &str, line_no: usize) -> IoResult<Counts> {
    if line.len() < 6 {
        return Err(IoError::parse(
            line_no,
            format!("counts line too short: '{line}'"),
        ));
    }
    let n_atoms =
        to_int(line.get(0..3).unwrap_or(""), false).map_err(|e| e.at_line(line_no))?;
    let n_bonds =
        to_int(line.get(3..6).unwrap_or(""), false).map_err(|e| e.at_line(line_no))?;

    let optional = |start: usize| -> i32 {
        line.get(start..start + 3)
            .and_then(|field| to_int(field, false).ok())
            .unwrap_or(0)
    };

    let mut counts = Counts {
        n_atoms,
        n_bonds,
        n_lists: optional(6),
        chiral_flag: optional(12),
        ns_text: optional(15),
        n_rxn_components: optional(18),
        n_reactants: optional(21),
        n_products: optional(24),
        n_intermediates: optional(27),
        version: CtabVersion::V2000,
    };

    // version literal at columns 34..39; a short line defaults to V2000
    if line.len() > 35 {
        match line.get(34..39) {
            Some("V2000") => {}
            Some("V3000") => counts.version = CtabVersion::V3000,
            Some(other) if other.starts_with('V') => {
                return Err(IoError::parse(
                    line_no,
                    format!("unsupported CTAB version: '{other}'"),
                ))
            }
            _ => {
                return Err(IoError::parse(line_no, "CTAB version string invalid"));
            }
        }
    }

    Ok(counts)
}

/// Move the header's declared dimensionality onto the conformer and drop the
/// marker properties.
pub(crate) fn apply_declared_dimensionality(mol: &mut Molecule, conf: &mut Conformer) {
    if mol.props.remove(keys::CONF_2D).is_some() {
        conf.is_3d = false;
    } else if mol.props.remove(keys::CONF_3D).is_some() {
        conf.is_3d = true;
    }
}

/// Parse behavior knobs.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    /// Run the post-parse cleanup pipeline (stereo perception, strict valence
    /// check).
    pub sanitize: bool,
    /// Remove plain explicit hydrogens after stereo perception. Only
    /// meaningful together with `sanitize`.
    pub remove_hs: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            sanitize: true,
            remove_hs: false,
        }
    }
}

/// Streaming molfile/SD reader.
///
/// Tracks the number of physical lines consumed, including on error paths, so
/// diagnostics can point at the offending line.
pub struct MolfileReader<R> {
    reader: BufReader<R>,
    line_number: usize,
    options: ReadOptions,
}

impl<R: Read> MolfileReader<R> {
    /// Create a reader with default options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ReadOptions::default())
    }

    /// Create a reader with explicit options.
    pub fn with_options(reader: R, options: ReadOptions) -> Self {
        MolfileReader {
            reader: BufReader::new(reader),
            line_number: 0,
            options,
        }
    }

    /// Number of physical lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read a single line, stripping the trailing newline.
    pub(crate) fn read_line(&mut self) -> IoResult<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => {
                self.line_number += 1;
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Ok(Some(line))
            }
            Err(e) => Err(IoError::Io(e)),
        }
    }

    /// Read a line or fail with a location-bearing EOF error.
    pub(crate) fn require_line(&mut self, context: &str) -> IoResult<String> {
        self.read_line()?.ok_or_else(|| {
            IoError::parse(
                self.line_number,
                format!("unexpected end of file while reading {context}"),
            )
        })
    }

    /// Parse the next record from the stream.
    ///
    /// Returns `Ok(None)` at a clean end of input (before a name line); EOF
    /// anywhere inside a record is an error. On any error the partially built
    /// molecule is dropped before the error propagates.
    pub fn read_next(&mut self) -> IoResult<Option<Molecule>> {
        // Molecule name. Loop over stray leading record separators; $$$$ is
        // not a legal name and recursing per separator would not fly on large
        // files.
        let name = loop {
            match self.read_line()? {
                None => return Ok(None),
                Some(line) => {
                    if line.trim() != "$$$$" {
                        break line;
                    }
                }
            }
        };
        let mut mol = Molecule::new();
        mol.props.set(keys::NAME, name);

        // info line; columns 20..22 may declare the dimensionality
        let info = self.read_line()?.unwrap_or_default();
        if let Some(dim) = info.get(20..22) {
            if dim.eq_ignore_ascii_case("2d") {
                mol.props.set(keys::CONF_2D, 1);
            } else if dim.eq_ignore_ascii_case("3d") {
                mol.props.set(keys::CONF_3D, 1);
            }
        }
        mol.props.set(keys::MOL_FILE_INFO, info);

        let comments = self.read_line()?.unwrap_or_default();
        mol.props.set(keys::MOL_FILE_COMMENTS, comments);

        let counts_line = self.require_line("counts line")?;
        let counts = parse_counts_line(&counts_line, self.line_number)?;
        log::debug!(
            "counts: {} atoms, {} bonds (lists {}, chiral {}, stext {}, rxn {}/{}/{}/{})",
            counts.n_atoms,
            counts.n_bonds,
            counts.n_lists,
            counts.chiral_flag,
            counts.ns_text,
            counts.n_rxn_components,
            counts.n_reactants,
            counts.n_products,
            counts.n_intermediates,
        );

        let mut chirality_possible = false;
        let end = match counts.version {
            CtabVersion::V2000 => {
                self.parse_v2000_ctab(&mut mol, &counts, &mut chirality_possible)?
            }
            CtabVersion::V3000 => {
                if counts.n_atoms != 0 || counts.n_bonds != 0 {
                    return Err(IoError::parse(
                        self.line_number,
                        "V3000 mol blocks should have 0s in the initial counts line",
                    ));
                }
                self.parse_v3000_ctab(&mut mol, &mut chirality_possible)?;
                PropertyEnd::MEnd
            }
        };
        if end == PropertyEnd::Eof {
            return Err(IoError::parse(
                self.line_number,
                "unexpected end of input; no M  END found",
            ));
        }

        ops::calc_explicit_valence(&mut mol, false)?;

        if self.options.sanitize {
            // Stereo must be perceived before hydrogens go away: removing an
            // H can remove the only wedge bond that carried the information.
            // cleanUp first, so charge-miswritten groups don't make the
            // perception stumble.
            if chirality_possible {
                ops::clean_up(&mut mol);
                ops::detect_atom_stereochemistry(&mut mol);
            }
            if self.options.remove_hs {
                ops::remove_hydrogens(&mut mol)?;
            } else {
                ops::sanitize(&mut mol)?;
            }
            ops::clear_single_bond_dir_flags(&mut mol);
            ops::detect_bond_stereochemistry(&mut mol);
            ops::assign_stereochemistry(&mut mol);
        }

        if mol.needs_query_scan() {
            mol.complete_queries();
        }

        // leave the stream at the start of the next record
        if end == PropertyEnd::MEnd {
            self.skip_data_section()?;
        }

        Ok(Some(mol))
    }

    /// Skip the SD data section following `M  END`, up to the `$$$$` record
    /// separator or end of input.
    ///
    /// `$$$$` can legitimately appear as a data *value* inside a data item, so
    /// a two-state walk is required: between items, `$$$$` separates records
    /// and `>` opens an item; inside an item only a blank line ends it.
    fn skip_data_section(&mut self) -> IoResult<()> {
        let mut in_data_item = false;
        loop {
            let Some(line) = self.read_line()? else {
                // EOF without $$$$: treat as end of record
                return Ok(());
            };
            if in_data_item {
                if line.trim().is_empty() {
                    in_data_item = false;
                }
            } else {
                if line.starts_with("$$$$") {
                    return Ok(());
                }
                if line.starts_with('>') {
                    in_data_item = true;
                }
            }
        }
    }
}

impl<R: Read> crate::traits::MoleculeReader for MolfileReader<R> {
    fn read(&mut self) -> IoResult<Molecule> {
        match self.read_next()? {
            Some(mol) => Ok(mol),
            None => Err(IoError::EmptyFile),
        }
    }

    fn read_all(&mut self) -> IoResult<Vec<Molecule>> {
        let mut molecules = Vec::new();
        while let Some(mol) = self.read_next()? {
            molecules.push(mol);
        }
        if molecules.is_empty() {
            Err(IoError::EmptyFile)
        } else {
            Ok(molecules)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counts_line() {
        let line = "  3  2  0  0  0  0  0  0  0  0999 V2000";
        let counts = parse_counts_line(line, 4).unwrap();
        assert_eq!(counts.n_atoms, 3);
        assert_eq!(counts.n_bonds, 2);
        assert_eq!(counts.version, CtabVersion::V2000);
    }

    #[test]
    fn test_parse_counts_line_v3000() {
        let line = "  0  0  0  0  0  0  0  0  0  0999 V3000";
        let counts = parse_counts_line(line, 4).unwrap();
        assert_eq!(counts.version, CtabVersion::V3000);
    }

    #[test]
    fn test_parse_counts_line_missing_version_defaults_to_v2000() {
        let counts = parse_counts_line("  1  0  0  0  0", 4).unwrap();
        assert_eq!(counts.version, CtabVersion::V2000);
    }

    #[test]
    fn test_parse_counts_line_bad_version() {
        let line = "  1  0  0  0  0  0  0  0  0  0999 V4000";
        assert!(parse_counts_line(line, 4).is_err());
        let line = "  1  0  0  0  0  0  0  0  0  0999 XXXXX";
        assert!(parse_counts_line(line, 4).is_err());
    }

    #[test]
    fn test_parse_counts_line_too_short() {
        assert!(parse_counts_line("  1", 4).is_err());
        assert!(parse_counts_line("", 4).is_err());
    }

    #[test]
    fn test_parse_counts_line_garbled_tail_is_tolerated() {
        // some SD producers write junk in the optional fields
        let line = "  2  1  0  0  x  0  0  0  0  0999 V2000";
        let counts = parse_counts_line(line, 4).unwrap();
        assert_eq!(counts.n_atoms, 2);
        assert_eq!(counts.ns_text, 0);
    }

    #[test]
    fn test_line_counter_tracks_reads() {
        let data = "one\ntwo\nthree\n";
        let mut reader = MolfileReader::new(data.as_bytes());
        assert_eq!(reader.line_number(), 0);
        reader.read_line().unwrap();
        reader.read_line().unwrap();
        assert_eq!(reader.line_number(), 2);
    }
}
