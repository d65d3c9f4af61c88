//! Credential hashing. Passwords are never stored, only salted PBKDF2 digests.

pub mod credential;

pub use credential::*;
