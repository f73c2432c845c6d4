use crate::core::models::atom::Element;
use crate::core::models::ids::AtomSerial;
use crate::core::models::structure::Structure;
use std::collections::BTreeSet;
use tracing::debug;

/// Atom sets derived from the connectivity of a single residue.
///
/// Every set is a pure function of the structure: classifying the same
/// structure twice gives identical sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSets {
    /// Carbons double-bonded to an oxygen.
    pub carbonyl_carbons: BTreeSet<AtomSerial>,
    /// Carbons bonded to both a nitrogen and a carbonyl carbon.
    pub alpha_carbons: BTreeSet<AtomSerial>,
    /// Non-carbonyl, non-alpha carbons bonded to an alpha carbon.
    pub beta_carbons: BTreeSet<AtomSerial>,
    pub alpha_hydrogens: BTreeSet<AtomSerial>,
    pub beta_hydrogens: BTreeSet<AtomSerial>,
}

impl RoleSets {
    /// Runs the carbonyl → alpha → beta inference over a structure.
    ///
    /// No geometry is used. Bond endpoints without an atom record have no
    /// element and never enter any set. A structure without an alpha carbon
    /// yields empty alpha and beta sets.
    pub fn classify(structure: &Structure) -> Self {
        let carbonyl_carbons = find_carbonyl_carbons(structure);
        let alpha_carbons = find_alpha_carbons(structure, &carbonyl_carbons);
        let beta_carbons = find_beta_carbons(structure, &alpha_carbons, &carbonyl_carbons);
        let alpha_hydrogens = attached_hydrogens(structure, &alpha_carbons);
        let beta_hydrogens = attached_hydrogens(structure, &beta_carbons);

        let sets = Self {
            carbonyl_carbons,
            alpha_carbons,
            beta_carbons,
            alpha_hydrogens,
            beta_hydrogens,
        };
        debug!(
            carbonyl = ?sets.carbonyl_carbons,
            alpha = ?sets.alpha_carbons,
            beta = ?sets.beta_carbons,
            alpha_h = ?sets.alpha_hydrogens,
            beta_h = ?sets.beta_hydrogens,
            "Role sets computed."
        );
        sets
    }

    /// Hydrogens that are attached to both an alpha and a beta carbon.
    pub fn ambiguous_hydrogens(&self) -> impl Iterator<Item = AtomSerial> + '_ {
        self.alpha_hydrogens
            .intersection(&self.beta_hydrogens)
            .copied()
    }
}

fn find_carbonyl_carbons(structure: &Structure) -> BTreeSet<AtomSerial> {
    let mut carbonyls = BTreeSet::new();
    for bond in structure.graph().bonds() {
        if !bond.order.is_double() {
            continue;
        }
        let e1 = structure.element_of(bond.atom1);
        let e2 = structure.element_of(bond.atom2);
        match (e1, e2) {
            (Some(Element::Carbon), Some(Element::Oxygen)) => {
                carbonyls.insert(bond.atom1);
            }
            (Some(Element::Oxygen), Some(Element::Carbon)) => {
                carbonyls.insert(bond.atom2);
            }
            _ => {}
        }
    }
    carbonyls
}

fn find_alpha_carbons(
    structure: &Structure,
    carbonyl_carbons: &BTreeSet<AtomSerial>,
) -> BTreeSet<AtomSerial> {
    structure
        .atoms()
        .filter(|atom| atom.is(Element::Carbon))
        .filter(|atom| {
            let neighbors = structure.graph().neighbors(atom.serial);
            let has_nitrogen = neighbors
                .iter()
                .any(|&(nb, _)| structure.is_element(nb, Element::Nitrogen));
            let has_carbonyl = neighbors
                .iter()
                .any(|(nb, _)| carbonyl_carbons.contains(nb));
            has_nitrogen && has_carbonyl
        })
        .map(|atom| atom.serial)
        .collect()
}

fn find_beta_carbons(
    structure: &Structure,
    alpha_carbons: &BTreeSet<AtomSerial>,
    carbonyl_carbons: &BTreeSet<AtomSerial>,
) -> BTreeSet<AtomSerial> {
    alpha_carbons
        .iter()
        .flat_map(|&ca| structure.graph().neighbors(ca))
        .map(|&(nb, _)| nb)
        .filter(|nb| {
            structure.is_element(*nb, Element::Carbon)
                && !carbonyl_carbons.contains(nb)
                && !alpha_carbons.contains(nb)
        })
        .collect()
}

fn attached_hydrogens(
    structure: &Structure,
    carbons: &BTreeSet<AtomSerial>,
) -> BTreeSet<AtomSerial> {
    carbons
        .iter()
        .flat_map(|&c| structure.graph().neighbors(c))
        .map(|&(nb, _)| nb)
        .filter(|&nb| structure.is_element(nb, Element::Hydrogen))
        .collect()
}
