//! Constants for the ECIES construction

/// PBKDF2-HMAC-SHA256 iteration count used to stretch the ECDH shared point
pub const PBKDF2_ITERATIONS: u32 = 10_000;
