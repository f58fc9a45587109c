//! Salted, iterated SHA-256 password hashing.
//!
//! Stored format: `sha256$<iterations>$<salt hex>$<digest hex>`. The salt is
//! 16 random bytes; each round hashes the previous digest with the salt and
//! password. Hashing is CPU-bound, so async callers run it on the blocking
//! pool.

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;

use rand::Rng;
use sha2::{Digest, Sha256};

use super::session::bytes_to_hex;

const SCHEME: &str = "sha256";
pub const DEFAULT_ITERATIONS: u32 = 100_000;

fn derive(password: &str, salt_hex: &str, iterations: u32) -> String {
    let mut digest = Sha256::new()
        .chain_update(salt_hex.as_bytes())
        .chain_update(password.as_bytes())
        .finalize();
    for _ in 1..iterations {
        digest = Sha256::new()
            .chain_update(digest)
            .chain_update(salt_hex.as_bytes())
            .chain_update(password.as_bytes())
            .finalize();
    }
    bytes_to_hex(&digest)
}

/// Hash a password with a fresh random salt.
#[must_use]
pub fn hash_password(password: &str, iterations: u32) -> String {
    let salt: [u8; 16] = rand::rng().random();
    let salt_hex = bytes_to_hex(&salt);
    let iterations = iterations.max(1);
    let digest = derive(password, &salt_hex, iterations);
    format!("{SCHEME}${iterations}${salt_hex}${digest}")
}

/// Check a password against a stored hash. Malformed hashes never verify.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(scheme), Some(iterations), Some(salt_hex), Some(expected), None) =
        (parts.next(), parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if scheme != SCHEME || salt_hex.is_empty() {
        return false;
    }
    let Ok(iterations) = iterations.parse::<u32>() else {
        return false;
    };
    if iterations == 0 {
        return false;
    }
    constant_time_eq(derive(password, salt_hex, iterations).as_bytes(), expected.as_bytes())
}

/// Compare without early exit on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
