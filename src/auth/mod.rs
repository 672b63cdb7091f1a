//! Bearer token normalization.

/// Normalizes a raw token into an `Authorization` header value.
///
/// Users paste tokens from browser devtools with or without the scheme
/// prefix; either form yields exactly `Bearer <token>`. Reapplying the
/// normalization is a no-op.
pub fn normalize_token(raw: &str) -> String {
    let trimmed = raw.trim();

    // Byte-wise prefix check: slicing the str would panic when byte 7
    // falls inside a multibyte character.
    let has_prefix = trimmed
        .as_bytes()
        .get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(b"bearer "));

    if has_prefix {
        trimmed.to_string()
    } else {
        format!("Bearer {trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_prefix_to_bare_token() {
        assert_eq!(normalize_token("eyJabc"), "Bearer eyJabc");
    }

    #[test]
    fn test_keeps_existing_prefix() {
        assert_eq!(normalize_token("Bearer eyJabc"), "Bearer eyJabc");
    }

    #[test]
    fn test_prefix_check_is_case_insensitive() {
        assert_eq!(normalize_token("bearer eyJabc"), "bearer eyJabc");
        assert_eq!(normalize_token("BEARER eyJabc"), "BEARER eyJabc");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize_token("  eyJabc \n"), "Bearer eyJabc");
    }

    #[test]
    fn test_multibyte_token_does_not_panic() {
        // "bearer" followed by a two-byte char puts byte 7 mid-character
        assert_eq!(normalize_token("bearerö-token"), "Bearer bearerö-token");
        assert_eq!(normalize_token("ö"), "Bearer ö");
        assert_eq!(normalize_token("bearer ö"), "bearer ö");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_token("eyJabc");
        assert_eq!(normalize_token(&once), once);
    }
}
