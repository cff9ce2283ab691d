//! Lookup variants for user-supplied identifiers.
//!
//! Stored ids are inconsistent about separators (`PRJ-001` vs `PRJ001`),
//! so every lookup expands the typed id into the plausible stored forms.

use std::collections::HashSet;

/// Prefix of project identifiers (`PRJ-003`, `PRJ003`).
pub const PROJECT_PREFIX: &str = "PRJ";
/// Prefix of customer identifiers (`CI001`).
pub const CUSTOMER_PREFIX: &str = "CI";
/// Prefix of developer identifiers (`DEV-003`).
pub const DEVELOPER_PREFIX: &str = "DEV";

/// Expand a user-typed identifier into every form it may be stored as.
///
/// The canonical uppercased-trimmed form always comes first; derived
/// forms follow in a fixed declared order, so the exact-match loop
/// downstream resolves ties deterministically toward the user's own
/// spelling. The `PRJ` separator rewrites are applied blindly whether or
/// not a hyphen is present, so they may be no-ops or produce variants
/// that match nothing. Duplicates keep their first occurrence.
///
/// There is no error path: any input yields at least its canonical form.
#[must_use]
pub fn id_variants(input: &str) -> Vec<String> {
    let canonical = input.trim().to_uppercase();
    let mut variants = vec![canonical.clone()];
    if canonical.contains('-') {
        variants.push(canonical.replace('-', ""));
    }
    if canonical.starts_with(PROJECT_PREFIX) {
        variants.push(canonical.replace("PRJ", "PRJ-"));
        variants.push(canonical.replace("PRJ-", "PRJ"));
    }
    let mut seen = HashSet::new();
    variants.retain(|v| seen.insert(v.clone()));
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_project_id_expands_to_bare_form() {
        let variants = id_variants("prj-001");
        assert!(variants.contains(&"PRJ-001".to_string()));
        assert!(variants.contains(&"PRJ001".to_string()));
    }

    #[test]
    fn bare_project_id_expands_to_hyphenated_form() {
        let variants = id_variants("prj001");
        assert!(variants.contains(&"PRJ001".to_string()));
        assert!(variants.contains(&"PRJ-001".to_string()));
    }

    #[test]
    fn canonical_form_always_present_and_first() {
        for input in ["  prj-003 ", "ci001", "dev-007", "vortex", ""] {
            let variants = id_variants(input);
            assert_eq!(variants[0], input.trim().to_uppercase());
        }
    }

    #[test]
    fn order_is_deterministic() {
        assert_eq!(id_variants("prj-001"), id_variants("PRJ-001"));
        assert_eq!(
            id_variants("prj001"),
            vec!["PRJ001".to_string(), "PRJ-001".to_string()]
        );
    }

    #[test]
    fn blind_rewrite_keeps_junk_variant_but_no_duplicates() {
        let variants = id_variants("prj-001");
        // blind PRJ -> PRJ- rewrite on an already-hyphenated id
        assert!(variants.contains(&"PRJ--001".to_string()));
        let unique: std::collections::HashSet<_> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len());
    }

    #[test]
    fn non_project_ids_get_only_hyphen_handling() {
        assert_eq!(
            id_variants("dev-003"),
            vec!["DEV-003".to_string(), "DEV003".to_string()]
        );
        assert_eq!(id_variants("CI001"), vec!["CI001".to_string()]);
    }
}
