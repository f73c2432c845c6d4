use super::error::EngineError;
use super::roles::RoleSets;
use crate::core::models::label::{LabelMap, Role};
use tracing::{info, warn};

/// Merges the hydrogen role sets into a single label map.
///
/// Beta hydrogens are labeled first, then alpha hydrogens; a hydrogen in both
/// sets ends up alpha through [`Role::outranks`]. Such hydrogens should not
/// occur in a well-formed single residue, so each one is reported as a warning
/// but still resolved.
///
/// # Errors
///
/// Returns [`EngineError::NoLabeledHydrogens`] if neither set contains any atom.
pub fn resolve_labels(roles: &RoleSets) -> Result<LabelMap, EngineError> {
    let mut labels = LabelMap::new();

    for &serial in &roles.beta_hydrogens {
        labels.assign(serial, Role::Beta);
    }
    for &serial in &roles.alpha_hydrogens {
        if let Some(overridden) = labels.assign(serial, Role::Alpha) {
            warn!(
                serial,
                "Hydrogen is attached to both an alpha and a beta carbon; labeling it {} instead of {}.",
                Role::Alpha,
                overridden
            );
        }
    }

    if labels.is_empty() {
        return Err(EngineError::NoLabeledHydrogens);
    }

    info!(
        alpha = labels.count_of(Role::Alpha),
        beta = labels.count_of(Role::Beta),
        "Hydrogen labels resolved."
    );
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sets(alpha_h: &[usize], beta_h: &[usize]) -> RoleSets {
        RoleSets {
            alpha_hydrogens: alpha_h.iter().copied().collect::<BTreeSet<_>>(),
            beta_hydrogens: beta_h.iter().copied().collect::<BTreeSet<_>>(),
            ..Default::default()
        }
    }

    #[test]
    fn alpha_and_beta_hydrogens_get_their_letters() {
        let labels = resolve_labels(&sets(&[7], &[8, 9, 10])).unwrap();

        assert_eq!(labels.len(), 4);
        assert_eq!(labels.get(7), Some(Role::Alpha));
        assert_eq!(labels.get(8), Some(Role::Beta));
        assert_eq!(labels.get(10), Some(Role::Beta));
    }

    #[test]
    fn hydrogen_in_both_sets_is_alpha() {
        let labels = resolve_labels(&sets(&[5, 6], &[5, 9])).unwrap();

        assert_eq!(labels.get(5), Some(Role::Alpha));
        assert_eq!(labels.get(6), Some(Role::Alpha));
        assert_eq!(labels.get(9), Some(Role::Beta));
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn beta_only_map_is_not_empty() {
        let labels = resolve_labels(&sets(&[], &[4])).unwrap();
        assert_eq!(labels.get(4), Some(Role::Beta));
    }

    #[test]
    fn empty_sets_are_fatal() {
        let result = resolve_labels(&RoleSets::default());
        assert!(matches!(result, Err(EngineError::NoLabeledHydrogens)));
    }
}
