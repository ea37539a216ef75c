use std::fmt::Write;

use rand::Rng;

/// Number of random bytes backing a CSRF state nonce.
const NONCE_BYTES: usize = 16;

/// Generate a random lowercase hex string using the thread-local RNG.
///
/// Used as the CSRF `state` parameter on authorize redirects.
pub fn random_hex() -> String {
    let mut rng = rand::rng();
    random_hex_with_rng(&mut rng)
}

/// Generate a random hex nonce using the provided RNG.
pub fn random_hex_with_rng<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; NONCE_BYTES];
    rng.fill(&mut bytes[..]);
    bytes.iter().fold(
        String::with_capacity(NONCE_BYTES * 2),
        |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        },
    )
}
