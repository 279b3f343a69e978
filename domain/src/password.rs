/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! One-way password hashing (argon2, PHC string format).

use password_auth::{generate_hash, verify_password as verify_hash};
use std::sync::LazyLock;

/// Hash verified against when no stored hash exists, so a login attempt for an
/// unknown account costs the same as one with a wrong password.
static DUMMY_HASH: LazyLock<String> =
    LazyLock::new(|| generate_hash("systemdesk-timing-equaliser"));

/// Builds the dummy digest up front so the first unknown-account login is not
/// slower than later ones.
pub fn prepare_dummy_hash() {
    LazyLock::force(&DUMMY_HASH);
}

/// Produces a salted digest. Two calls with the same input yield different
/// strings that both verify.
pub fn hash_password(plaintext: &str) -> String {
    generate_hash(plaintext)
}

/// Returns `false` for a mismatch and for any digest that cannot be parsed.
pub fn verify_password(plaintext: &str, digest: &str) -> bool {
    verify_hash(plaintext, digest).is_ok()
}

/// Burns one verification against a fixed digest. The result is discarded.
pub fn verify_dummy(plaintext: &str) {
    let _ = verify_hash(plaintext, &DUMMY_HASH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_against_its_plaintext() {
        let digest = hash_password("correct horse battery");
        assert!(verify_password("correct horse battery", &digest));
    }

    #[test]
    fn hash_rejects_other_plaintext() {
        let digest = hash_password("correct horse battery");
        assert!(!verify_password("correct horse battery!", &digest));
        assert!(!verify_password("", &digest));
    }

    #[test]
    fn hash_is_salted() {
        let a = hash_password("same input");
        let b = hash_password("same input");

        assert_ne!(a, b);
        assert!(verify_password("same input", &a));
        assert!(verify_password("same input", &b));
    }

    #[test]
    fn hash_uses_argon2() {
        assert!(hash_password("whatever123").starts_with("$argon2"));
    }

    #[test]
    fn malformed_digest_is_rejected() {
        assert!(!verify_password("secret", ""));
        assert!(!verify_password("secret", "not-a-phc-string"));
        assert!(!verify_password("secret", "$argon2id$v=19$broken"));
    }

    #[test]
    fn dummy_verification_does_not_panic() {
        verify_dummy("anything");
    }

    #[test]
    fn dummy_hash_is_ready_after_prepare() {
        prepare_dummy_hash();
        assert!(DUMMY_HASH.starts_with("$argon2"));
        assert!(!verify_password("anything", &DUMMY_HASH));
    }
}
