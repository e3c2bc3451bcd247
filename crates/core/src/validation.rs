//! Identifier format validation.
//!
//! A stateless predicate plus an error-raising guard, meant to be the single
//! hook a forms/web validation layer calls before an identifier is
//! reconstructed from untrusted text.

use crate::error::{DomainError, DomainResult};

/// Offsets of the group separators in the canonical `8-4-4-4-12` form.
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Returns `true` if `value` is an acceptable textual UUID.
///
/// - `None` is valid: an optional identifier field that is unset is not a
///   format error; absence checking is a separate concern.
/// - A present value must be exactly 36 characters. Anything else,
///   including the 38-character braced form `{...}`, is rejected before
///   pattern matching; only the unbraced canonical form is accepted.
/// - The whole string must then match the `8-4-4-4-12` hyphenated hex
///   shape. Hex digits are case-insensitive.
///
/// ```
/// use domainid_core::is_valid_uuid;
///
/// assert!(is_valid_uuid(Some("550e8400-e29b-41d4-a716-446655440000")));
/// assert!(is_valid_uuid(None));
/// assert!(!is_valid_uuid(Some("not-a-uuid")));
/// ```
pub fn is_valid_uuid(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return true;
    };
    if value.len() != 36 {
        return false;
    }
    value.bytes().enumerate().all(|(i, b)| {
        if HYPHEN_OFFSETS.contains(&i) {
            b == b'-'
        } else {
            b.is_ascii_hexdigit()
        }
    })
}

/// Verifies that `value` can be converted into a UUID-backed identifier.
///
/// `name` identifies the offending argument in the error. The failure is a
/// rejected-input error for a calling layer to translate into a user-facing
/// message, not a defect.
pub fn require_valid_uuid(name: &str, value: &str) -> DomainResult<()> {
    if !is_valid_uuid(Some(value)) {
        return Err(DomainError::constraint_violation(name, value));
    }
    Ok(())
}
