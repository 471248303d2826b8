use sha2::{Digest, Sha256};

/// Fold an identity string (and optional auxiliary data) into the 32-bit
/// seed that drives scene generation.
///
/// The auxiliary string is joined to the identity with a `-` before hashing.
/// Only the first 8 hex characters of the SHA-256 digest survive, so the
/// seed space is 32 bits and distinct identities can collide; that is fine
/// for a visual fingerprint.
pub fn derive_seed(identity: &str, auxiliary: Option<&str>) -> u32 {
    let input = match auxiliary {
        Some(data) => format!("{}-{}", identity, data),
        None => identity.to_owned(),
    };

    let digest = hex::encode(Sha256::digest(input.as_bytes()));

    u32::from_str_radix(&digest[..8], 16).expect("digest prefix is valid hex")
}
