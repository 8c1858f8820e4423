//! Session addressing
//!
//! Aliases and generated session ids share one 128-bit keyspace. A lookup
//! string that parses as a UUID literal always addresses by id; anything else
//! is hashed into a name-based UUID under a fixed crate namespace, so the
//! same alias maps to the same id on every call.

use uuid::Uuid;

/// Namespace for name-based (alias-derived) session ids.
pub const ALIAS_NAMESPACE: Uuid = Uuid::from_u128(0x9a8f1c2e_4b5d_4f60_8a7b_3c2d1e0f9a8b);

/// Deterministic session id for an alias.
pub fn alias_id(alias: &str) -> Uuid {
    Uuid::new_v3(&ALIAS_NAMESPACE, alias.as_bytes())
}

/// Session id for a new registration: alias-derived when an alias is given,
/// random otherwise.
pub fn new_session_id(alias: &str) -> Uuid {
    if alias.is_empty() {
        Uuid::new_v4()
    } else {
        alias_id(alias)
    }
}

/// Resolve a caller-supplied session id or alias to a lookup key.
///
/// UUID literals take precedence over alias hashing, so an alias that happens
/// to be a well-formed UUID string addresses by id. Returns `None` for an
/// empty string.
pub fn resolve(id_or_alias: &str) -> Option<Uuid> {
    if id_or_alias.is_empty() {
        return None;
    }
    match Uuid::parse_str(id_or_alias) {
        Ok(id) => Some(id),
        Err(_) => Some(alias_id(id_or_alias)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_id_is_deterministic() {
        assert_eq!(alias_id("Test"), alias_id("Test"));
        assert_ne!(alias_id("Test"), alias_id("AnotherTest"));
    }

    #[test]
    fn test_new_session_id_without_alias_is_random() {
        assert_ne!(new_session_id(""), new_session_id(""));
    }

    #[test]
    fn test_new_session_id_with_alias_matches_alias_id() {
        assert_eq!(new_session_id("Test"), alias_id("Test"));
    }

    #[test]
    fn test_resolve_empty_is_none() {
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn test_resolve_alias_hashes() {
        assert_eq!(resolve("Test"), Some(alias_id("Test")));
    }

    #[test]
    fn test_resolve_uuid_literal_bypasses_hashing() {
        let id = Uuid::new_v4();
        assert_eq!(resolve(&id.to_string()), Some(id));

        // An alias that is itself a well-formed UUID addresses by id.
        let alias = id.to_string();
        assert_ne!(resolve(&alias), Some(alias_id(&alias)));
    }

    #[test]
    fn test_resolve_roundtrips_alias_registration() {
        let registered = new_session_id("reporting-db");
        assert_eq!(resolve("reporting-db"), Some(registered));
        assert_eq!(resolve(&registered.to_string()), Some(registered));
    }
}
