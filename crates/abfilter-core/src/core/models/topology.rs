use super::ids::AtomSerial;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Integer bond order as read from a structure file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BondOrder(pub i64);

impl BondOrder {
    pub const SINGLE: Self = Self(1);
    pub const DOUBLE: Self = Self(2);
    pub const TRIPLE: Self = Self(3);

    /// Reads a MOL2 bond-type token.
    ///
    /// Numeric tokens are taken literally. Symbolic tokens such as `am`, `ar`,
    /// `du` or `un` carry no integer order and are read as single bonds.
    pub fn from_mol2_token(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }

    pub fn is_double(&self) -> bool {
        *self == Self::DOUBLE
    }
}

impl Default for BondOrder {
    fn default() -> Self {
        Self::SINGLE
    }
}

#[derive(Debug, Error)]
#[error("Invalid bond order string")]
pub struct ParseBondOrderError;

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self).map_err(|_| ParseBondOrderError)
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1: AtomSerial, // Serial of the first endpoint
    pub atom2: AtomSerial, // Serial of the second endpoint
    pub order: BondOrder,
}

impl Bond {
    pub fn new(atom1: AtomSerial, atom2: AtomSerial, order: BondOrder) -> Self {
        Self {
            atom1,
            atom2,
            order,
        }
    }

    pub fn contains(&self, serial: AtomSerial) -> bool {
        self.atom1 == serial || self.atom2 == serial
    }

    /// The endpoint pair with the smaller serial first.
    pub fn canonical_key(&self) -> (AtomSerial, AtomSerial) {
        (self.atom1.min(self.atom2), self.atom1.max(self.atom2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_tokens_are_read_literally() {
        assert_eq!(BondOrder::from_mol2_token("1"), BondOrder::SINGLE);
        assert_eq!(BondOrder::from_mol2_token("2"), BondOrder::DOUBLE);
        assert_eq!(BondOrder::from_mol2_token("3"), BondOrder::TRIPLE);
        assert_eq!(BondOrder::from_mol2_token("4"), BondOrder(4));
    }

    #[test]
    fn symbolic_tokens_default_to_single() {
        for token in ["am", "ar", "du", "un", "nc", "2a"] {
            assert_eq!(BondOrder::from_mol2_token(token), BondOrder::SINGLE);
        }
    }

    #[test]
    fn from_str_rejects_symbolic_tokens() {
        assert!("ar".parse::<BondOrder>().is_err());
        assert!("".parse::<BondOrder>().is_err());
        assert_eq!("2".parse::<BondOrder>().unwrap(), BondOrder::DOUBLE);
    }

    #[test]
    fn display_outputs_the_integer_order() {
        assert_eq!(BondOrder::DOUBLE.to_string(), "2");
        assert_eq!(BondOrder::default().to_string(), "1");
    }

    #[test]
    fn canonical_key_orders_endpoints() {
        let bond = Bond::new(9, 4, BondOrder::DOUBLE);
        assert_eq!(bond.canonical_key(), (4, 9));
        assert_eq!(Bond::new(4, 9, BondOrder::DOUBLE).canonical_key(), (4, 9));
    }

    #[test]
    fn bond_contains_returns_true_only_for_endpoints() {
        let bond = Bond::new(10, 20, BondOrder::SINGLE);
        assert!(bond.contains(10));
        assert!(bond.contains(20));
        assert!(!bond.contains(30));
    }
}
