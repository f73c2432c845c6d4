use super::ids::AtomSerial;
use phf::{Map, phf_map};
use std::fmt;

/// Chemical element of an atom, as far as the classifier needs to know it.
///
/// Only the elements that take part in backbone and side-chain inference get a
/// dedicated variant. Everything else is carried as [`Element::Other`] with its
/// single-letter symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Hydrogen,
    Carbon,
    Nitrogen,
    Oxygen,
    Phosphorus,
    Sulfur,
    /// Any other symbol, stored as the uppercased character it was derived from.
    Other(char),
}

#[rustfmt::skip]
static ELEMENT_SYMBOLS: Map<&'static str, Element> = phf_map! {
    "H" => Element::Hydrogen,
    "C" => Element::Carbon,
    "N" => Element::Nitrogen,
    "O" => Element::Oxygen,
    "P" => Element::Phosphorus,
    "S" => Element::Sulfur,
};

impl Element {
    /// Derives the element from a force-field atom type token.
    ///
    /// The element is the uppercased first character of the type (`C.3` → C,
    /// `ha` → H, `N.am` → N). This is only correct for single-letter elements:
    /// `Cl` is read as carbon and `Na` as nitrogen. Every element lookup in the
    /// crate goes through this function, so replacing it with an explicit
    /// type → element table does not touch the classifier.
    ///
    /// # Return
    ///
    /// Returns `None` only for an empty type token.
    pub fn from_atom_type(atom_type: &str) -> Option<Self> {
        let first = atom_type.chars().next()?;
        let symbol = first.to_uppercase().next().unwrap_or(first);
        Some(Self::from_symbol(symbol))
    }

    /// Maps a single-letter symbol to an element.
    pub fn from_symbol(symbol: char) -> Self {
        let mut buf = [0u8; 4];
        ELEMENT_SYMBOLS
            .get(symbol.encode_utf8(&mut buf))
            .copied()
            .unwrap_or(Element::Other(symbol))
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Hydrogen => 'H',
            Self::Carbon => 'C',
            Self::Nitrogen => 'N',
            Self::Oxygen => 'O',
            Self::Phosphorus => 'P',
            Self::Sulfur => 'S',
            Self::Other(c) => *c,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single atom record of a structure file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// The serial number of the atom within its structure.
    pub serial: AtomSerial,
    /// The display name of the atom (e.g., "CA", "HB2").
    pub name: String,
    /// The force field atom type (e.g., "C.3", "H").
    pub atom_type: String,
    /// The element derived from `atom_type`.
    pub element: Option<Element>,
}

impl Atom {
    /// Creates a new `Atom`, deriving its element from the atom type.
    ///
    /// # Arguments
    ///
    /// * `serial` - The serial number of the atom.
    /// * `name` - The display name of the atom.
    /// * `atom_type` - The force field type token.
    pub fn new(serial: AtomSerial, name: &str, atom_type: &str) -> Self {
        Self {
            serial,
            name: name.to_string(),
            atom_type: atom_type.to_string(),
            element: Element::from_atom_type(atom_type),
        }
    }

    pub fn is(&self, element: Element) -> bool {
        self.element == Some(element)
    }
}
