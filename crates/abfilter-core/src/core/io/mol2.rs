use crate::core::io::traits::TopologyFile;
use crate::core::models::atom::Atom;
use crate::core::models::ids::AtomSerial;
use crate::core::models::structure::Structure;
use crate::core::models::topology::{Bond, BondOrder};
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

const SECTION_PREFIX: &str = "@<TRIPOS>";

const MIN_ATOM_FIELDS: usize = 6;
const MIN_BOND_FIELDS: usize = 4;

#[derive(Debug, Error)]
pub enum Mol2Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Atom,
    Bond,
    Ignored,
}

impl Section {
    /// Recognizes a `@<TRIPOS>` header line. Unknown section names map to `Ignored`.
    fn from_header(line: &str) -> Option<Self> {
        let name = line.strip_prefix(SECTION_PREFIX)?;
        Some(if name.starts_with("ATOM") {
            Self::Atom
        } else if name.starts_with("BOND") {
            Self::Bond
        } else {
            Self::Ignored
        })
    }
}

/// Reader for the atom and bond sections of Tripos MOL2 files.
///
/// The reader is lenient: records with too few fields or non-integer serials
/// are skipped, symbolic bond types are read as single bonds, and every section
/// other than `ATOM` and `BOND` is ignored. Only I/O failures are errors.
pub struct Mol2File;

impl TopologyFile for Mol2File {
    type Error = Mol2Error;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut structure = Structure::new();
        let mut section = Section::Ignored;
        let mut skipped = 0usize;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if let Some(next) = Section::from_header(&line) {
                section = next;
                continue;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            let accepted = match section {
                Section::Ignored => continue,
                Section::Atom => parse_atom_record(&parts).map(|atom| {
                    if let Some(previous) = structure.insert_atom(atom) {
                        trace!(
                            line = line_num,
                            serial = previous.serial,
                            "Atom serial redefined; keeping the later record."
                        );
                    }
                }),
                Section::Bond => parse_bond_record(&parts).map(|bond| structure.add_bond(bond)),
            };

            if accepted.is_none() {
                skipped += 1;
                trace!(line = line_num, ?section, "Skipping malformed record: {}", trimmed);
            }
        }

        debug!(
            atoms = structure.atom_count(),
            bonds = structure.bond_count(),
            skipped,
            "MOL2 structure parsed."
        );
        Ok(structure)
    }
}

fn parse_atom_record(parts: &[&str]) -> Option<Atom> {
    if parts.len() < MIN_ATOM_FIELDS {
        return None;
    }
    let serial: AtomSerial = parts[0].parse().ok()?;
    // parts[2..5] are coordinates, which carry no connectivity information.
    Some(Atom::new(serial, parts[1], parts[5]))
}

fn parse_bond_record(parts: &[&str]) -> Option<Bond> {
    if parts.len() < MIN_BOND_FIELDS {
        return None;
    }
    let a1: AtomSerial = parts[1].parse().ok()?;
    let a2: AtomSerial = parts[2].parse().ok()?;
    Some(Bond::new(a1, a2, BondOrder::from_mol2_token(parts[3])))
}
