//! One-time display code shown in the header
//!
//! Codes look like `XXXX-XXXX` and use an alphabet without the easily confused
//! `I`, `O`, `0` and `1`.

use rand::Rng;

pub const ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
pub const GROUP_LEN: usize = 4;

/// Generate a code from the thread-local RNG
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Generate a code from the given RNG
pub fn generate_with<R: Rng>(rng: &mut R) -> String {
    let mut group = || {
        (0..GROUP_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect::<String>()
    };
    let first = group();
    let second = group();
    format!("{first}-{second}")
}

#[cfg(test)]
#[path = "device_code_tests.rs"]
mod device_code_tests;
