//! Pure form validity computation.
//!
//! Keeps the enable/disable decision for the submit action out of the
//! component layer so it can be exercised without a live document. The
//! event-handling shell feeds it the current field values and renders
//! whatever comes back.

use crate::utils::id_token;

/// Aggregate validity of one category's field group.
///
/// Recomputed on every input change and discarded on the next; nothing here
/// is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Canonical identifier token currently in the field.
    pub id_token: String,
    /// Token is non-empty, well-formed and within range.
    pub id_valid: bool,
    /// Decoded identifier matches a server-known one. Cosmetic only.
    pub conflict: bool,
    /// Every other required field in the group is filled.
    pub other_fields_valid: bool,
    /// Submit action is available.
    pub submit_enabled: bool,
}

/// The three observable states of a field group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// A required field is still empty.
    Incomplete,
    /// Everything valid, submit enabled.
    Ready,
    /// A field-level validity failure (identifier out of range).
    Invalid,
}

impl FormState {
    pub fn phase(&self) -> FormPhase {
        if !self.id_token.is_empty() && !self.id_valid {
            FormPhase::Invalid
        } else if self.id_valid && self.other_fields_valid {
            FormPhase::Ready
        } else {
            FormPhase::Incomplete
        }
    }
}

/// Compute the validity of a field group.
///
/// `id_token` must already be canonical. `other_required_filled` carries one
/// flag per non-identifier required field in the group (file selected,
/// forward target present, contents present). The conflict flag never
/// disables submission; only range failures and empty required fields do.
pub fn compute_form_state(
    id_token: &str,
    used_ids: &[i64],
    other_required_filled: &[bool],
) -> FormState {
    let decoded = id_token::decode(id_token);
    let id_valid = decoded.is_ok();
    let conflict = matches!(decoded, Ok(id) if used_ids.contains(&id));
    let other_fields_valid = other_required_filled.iter().all(|filled| *filled);
    let submit_enabled = id_valid && other_fields_valid;

    FormState {
        id_token: id_token.to_string(),
        id_valid,
        conflict,
        other_fields_valid,
        submit_enabled,
    }
}

/// Range validity message for the identifier field, if it applies.
pub fn id_range_error(id_token: &str) -> Option<&'static str> {
    id_token::validity_message(id_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_id_keeps_submit_disabled() {
        let state = compute_form_state("", &[], &[true]);
        assert!(!state.id_valid);
        assert!(!state.conflict);
        assert!(!state.submit_enabled);
        assert_eq!(state.phase(), FormPhase::Incomplete);
    }

    #[test]
    fn test_links_scenario_enables_once_forward_filled() {
        // "abc def" canonicalizes to "abcdef", which is within range.
        let token = crate::utils::id_token::canonicalize("abc def");
        assert_eq!(token, "abcdef");

        let without_forward = compute_form_state(&token, &[], &[false]);
        assert!(without_forward.id_valid);
        assert!(!without_forward.submit_enabled);

        let with_forward = compute_form_state(&token, &[], &[true]);
        assert!(with_forward.submit_enabled);
        assert_eq!(with_forward.phase(), FormPhase::Ready);
    }

    #[test]
    fn test_out_of_range_id_forces_invalid() {
        let state = compute_form_state("zik0zk", &[], &[true]);
        assert!(!state.id_valid);
        assert!(!state.submit_enabled);
        assert_eq!(state.phase(), FormPhase::Invalid);
        assert!(id_range_error("zik0zk").is_some());
    }

    #[test]
    fn test_conflict_is_cosmetic() {
        let used = vec![crate::utils::id_token::decode("abcdef").unwrap()];
        let state = compute_form_state("abcdef", &used, &[true]);
        assert!(state.conflict);
        assert!(state.submit_enabled);
        assert_eq!(state.phase(), FormPhase::Ready);
    }

    #[test]
    fn test_no_conflict_when_unused() {
        let used = vec![1, 2, 3];
        let state = compute_form_state("abcdef", &used, &[true]);
        assert!(!state.conflict);
    }

    #[test]
    fn test_any_empty_required_field_disables_submit() {
        let state = compute_form_state("abc", &[], &[true, false]);
        assert!(state.id_valid);
        assert!(!state.other_fields_valid);
        assert!(!state.submit_enabled);
        assert_eq!(state.phase(), FormPhase::Incomplete);
    }
}
