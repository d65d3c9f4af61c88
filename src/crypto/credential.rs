use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::config::PBKDF2_ITERATIONS;

pub const HASH_LENGTH: usize = 32;
pub const SALT_LENGTH: usize = 16;

const SCHEME: &str = "pbkdf2-sha256";

/// One-way credential hashing plus verification.
pub trait CredentialVerifier: Send + Sync {
    /// Hash a plaintext credential into a self-describing string.
    fn hash(&self, password: &str) -> String;

    /// Check a plaintext credential against a stored hash. Malformed hashes never verify.
    fn verify(&self, password: &str, stored: &str) -> bool;
}

/// PBKDF2-HMAC-SHA256 with a random salt per credential.
///
/// Stored form: `pbkdf2-sha256$<iterations>$<salt>$<digest>` (base64, no padding).
/// Verification reads the iteration count from the stored string, so hashes made
/// with a different work factor stay valid.
#[derive(Debug, Clone)]
pub struct Pbkdf2Verifier {
    iterations: u32,
}

impl Pbkdf2Verifier {
    pub fn new(iterations: u32) -> Self {
        Self { iterations: iterations.max(1) }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Default for Pbkdf2Verifier {
    fn default() -> Self {
        Self::new(PBKDF2_ITERATIONS)
    }
}

fn derive(password: &str, salt: &[u8], iterations: u32) -> Zeroizing<[u8; HASH_LENGTH]> {
    let mut out = Zeroizing::new([0u8; HASH_LENGTH]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut out[..]);
    out
}

/// Generate a cryptographically random salt
pub fn generate_salt() -> [u8; SALT_LENGTH] {
    use rand::RngCore;
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

impl CredentialVerifier for Pbkdf2Verifier {
    fn hash(&self, password: &str) -> String {
        let salt = generate_salt();
        let digest = derive(password, &salt, self.iterations);
        format!(
            "{SCHEME}${}${}${}",
            self.iterations,
            STANDARD_NO_PAD.encode(salt),
            STANDARD_NO_PAD.encode(&digest[..])
        )
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        let mut parts = stored.split('$');
        let (Some(scheme), Some(iterations), Some(salt), Some(expected), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return false;
        };
        if scheme != SCHEME {
            return false;
        }
        let Ok(iterations) = iterations.parse::<u32>() else {
            return false;
        };
        let (Ok(salt), Ok(expected)) = (STANDARD_NO_PAD.decode(salt), STANDARD_NO_PAD.decode(expected))
        else {
            return false;
        };
        if iterations == 0 || expected.len() != HASH_LENGTH {
            return false;
        }

        let digest = derive(password, &salt, iterations);
        digest[..].ct_eq(&expected[..]).into()
    }
}
