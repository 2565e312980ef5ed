/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Capability checks and component type patterns.
//!
//! A field's grammar carries a compact type pattern such as `"DCI"` with one
//! letter per component. Resolvers use it to find the components carrying a
//! given kind of value instead of special-casing field identifiers.

use std::iter;
use swiftfin_core::error::ResolveError;
use swiftfin_core::types::Capability;
use swiftfin_dictionary::ComponentType;
use swiftfin_tagvalue::Field;

/// Returns the 1-based indices of components whose pattern letter matches one of `kinds`.
///
/// Components past the end of the pattern read as `S` and never match.
/// Presence of the component is not checked.
///
/// # Arguments
/// * `pattern` - Type pattern, one letter per component
/// * `components` - The field's components, in order
/// * `kinds` - Component types to select
#[must_use]
pub fn resolve_components_pattern<'a, I>(
    pattern: &str,
    components: I,
    kinds: &[ComponentType],
) -> Vec<usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    pattern
        .chars()
        .map(ComponentType::from_char)
        .chain(iter::repeat(ComponentType::String))
        .zip(components)
        .enumerate()
        .filter(|(_, (kind, _))| kinds.contains(kind))
        .map(|(i, _)| i + 1)
        .collect()
}

/// Fails unless the field's grammar exposes the capability.
///
/// # Errors
/// Returns `ResolveError::MissingCapability` if the grammar lacks it.
pub fn require(field: &Field, capability: Capability) -> Result<(), ResolveError> {
    if field.def().has_capability(capability) {
        Ok(())
    } else {
        Err(ResolveError::MissingCapability {
            field: field.id().to_string(),
            capability,
        })
    }
}

/// Returns the present components of the given kinds, in component order.
pub(crate) fn typed_components<'a>(
    field: &'a Field,
    kinds: &[ComponentType],
) -> impl Iterator<Item = Option<&'a str>> + 'a {
    resolve_components_pattern(field.def().types, field.components(), kinds)
        .into_iter()
        .map(move |n| field.component(n).ok().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftfin_dictionary::fields::{FIELD_20, FIELD_32A};

    #[test]
    fn test_resolve_components_pattern() {
        let components = [Some("A"), None, Some("C"), Some("D")];
        assert_eq!(
            resolve_components_pattern("SCS", components, &[ComponentType::Currency]),
            vec![2]
        );
        assert_eq!(
            resolve_components_pattern("CICI", components, &[ComponentType::Amount]),
            vec![2, 4]
        );
        assert!(resolve_components_pattern("", components, &[ComponentType::Amount]).is_empty());
    }

    #[test]
    fn test_pattern_longer_than_components() {
        let components = [Some("EUR")];
        assert_eq!(
            resolve_components_pattern(
                "CI",
                components,
                &[ComponentType::Currency, ComponentType::Amount]
            ),
            vec![1]
        );
    }

    #[test]
    fn test_require_capability() {
        let amount = Field::parse(&FIELD_32A, "091019EUR1,");
        assert!(require(&amount, Capability::Amount).is_ok());
        let reference = Field::parse(&FIELD_20, "REF");
        assert_eq!(
            require(&reference, Capability::Amount),
            Err(ResolveError::MissingCapability {
                field: "20".to_string(),
                capability: Capability::Amount,
            })
        );
    }
}
