//! Credential handling
//!
//! Authentication primitives for the taskboard service:
//!
//! - [`password`]: Argon2id password hashing and verification
//! - [`token`]: Bearer token (JWT) issuance and verification
//!
//! # Security
//!
//! - Passwords are stored only as salted Argon2id hashes; a fresh salt is
//!   drawn on every hash, so the same password never hashes the same twice.
//! - Tokens are HS256-signed and expire 24 hours after issuance. There is no
//!   server-side revocation list; a token is valid until it expires.
//! - Token verification failures are reported as a single opaque kind so
//!   callers cannot distinguish expired from malformed credentials.

pub mod password;
pub mod token;
