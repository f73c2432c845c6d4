use super::ids::AtomSerial;
use std::collections::BTreeMap;
use std::fmt;

/// Position of a hydrogen relative to the residue backbone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Attached to the alpha carbon.
    Alpha,
    /// Attached to a beta carbon.
    Beta,
}

impl Role {
    /// The letter that prefixes labels in the rewritten peak list.
    pub fn letter(&self) -> char {
        match self {
            Self::Alpha => 'A',
            Self::Beta => 'B',
        }
    }

    /// Alpha-over-beta precedence.
    ///
    /// A hydrogen that qualifies for both roles is labeled alpha. Returns `true`
    /// if `self` takes precedence over `other` for the same hydrogen.
    pub fn outranks(&self, other: Role) -> bool {
        matches!((self, other), (Self::Alpha, Self::Beta))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Mapping from hydrogen serial to its role.
///
/// Built once through [`LabelMap::assign`] or [`FromIterator`]; consumers only
/// ever see it by shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    labels: BTreeMap<AtomSerial, Role>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a role, keeping the existing one if it outranks the new one.
    ///
    /// # Return
    ///
    /// Returns the role that lost, if the serial was already labeled with a
    /// different role.
    pub(crate) fn assign(&mut self, serial: AtomSerial, role: Role) -> Option<Role> {
        match self.labels.get(&serial).copied() {
            Some(existing) if existing == role => None,
            Some(existing) if existing.outranks(role) => Some(role),
            Some(existing) => {
                self.labels.insert(serial, role);
                Some(existing)
            }
            None => {
                self.labels.insert(serial, role);
                None
            }
        }
    }

    pub fn get(&self, serial: AtomSerial) -> Option<Role> {
        self.labels.get(&serial).copied()
    }

    /// Formats the peak-list label for a serial, e.g. `A42`.
    pub fn label_for(&self, serial: AtomSerial) -> Option<String> {
        self.get(serial)
            .map(|role| format!("{}{}", role.letter(), serial))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates labels in ascending serial order.
    pub fn iter(&self) -> impl Iterator<Item = (AtomSerial, Role)> + '_ {
        self.labels.iter().map(|(&serial, &role)| (serial, role))
    }

    pub fn count_of(&self, role: Role) -> usize {
        self.labels.values().filter(|&&r| r == role).count()
    }
}

impl FromIterator<(AtomSerial, Role)> for LabelMap {
    fn from_iter<I: IntoIterator<Item = (AtomSerial, Role)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (serial, role) in iter {
            map.assign(serial, role);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_match_roles() {
        assert_eq!(Role::Alpha.letter(), 'A');
        assert_eq!(Role::Beta.letter(), 'B');
        assert_eq!(Role::Beta.to_string(), "B");
    }

    #[test]
    fn alpha_outranks_beta_only() {
        assert!(Role::Alpha.outranks(Role::Beta));
        assert!(!Role::Beta.outranks(Role::Alpha));
        assert!(!Role::Alpha.outranks(Role::Alpha));
    }

    #[test]
    fn alpha_wins_regardless_of_assignment_order() {
        let beta_first: LabelMap = [(5, Role::Beta), (5, Role::Alpha)].into_iter().collect();
        let alpha_first: LabelMap = [(5, Role::Alpha), (5, Role::Beta)].into_iter().collect();

        assert_eq!(beta_first.get(5), Some(Role::Alpha));
        assert_eq!(alpha_first.get(5), Some(Role::Alpha));
    }

    #[test]
    fn assign_reports_the_losing_role() {
        let mut map = LabelMap::new();
        assert_eq!(map.assign(8, Role::Beta), None);
        assert_eq!(map.assign(8, Role::Beta), None);
        assert_eq!(map.assign(8, Role::Alpha), Some(Role::Beta));
        assert_eq!(map.assign(8, Role::Beta), Some(Role::Beta));
        assert_eq!(map.get(8), Some(Role::Alpha));
    }

    #[test]
    fn label_for_prefixes_the_serial_with_the_role_letter() {
        let map: LabelMap = [(42, Role::Alpha), (7, Role::Beta)].into_iter().collect();
        assert_eq!(map.label_for(42).as_deref(), Some("A42"));
        assert_eq!(map.label_for(7).as_deref(), Some("B7"));
        assert_eq!(map.label_for(9), None);
        assert_eq!(map.count_of(Role::Beta), 1);
    }
}
