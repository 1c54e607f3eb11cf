//! Eleven-proof checksum for Dutch citizen service numbers (BSN).
//!
//! A BSN has nine digits `d1..d9` (eight-digit numbers are read with a
//! leading zero) and is valid when
//! `9·d1 + 8·d2 + 7·d3 + 6·d4 + 5·d5 + 4·d6 + 3·d7 + 2·d8 − d9`
//! is a non-zero multiple of 11.

use crate::foundation::ValidationError;

const WEIGHTS: [i32; 9] = [9, 8, 7, 6, 5, 4, 3, 2, -1];

/// Whether `input` is an 8- or 9-digit string passing the eleven-proof.
#[must_use]
pub fn is_eleven_proof(input: &str) -> bool {
    let bytes = input.as_bytes();
    if !(8..=9).contains(&bytes.len()) || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let padding = WEIGHTS.len() - bytes.len();
    let sum: i32 = bytes
        .iter()
        .zip(&WEIGHTS[padding..])
        .map(|(digit, weight)| i32::from(digit - b'0') * weight)
        .sum();

    sum != 0 && sum.rem_euclid(11) == 0
}

crate::validator! {
    /// Citizen service number (BSN) passing the eleven-proof.
    pub ElevenProof for str => eleven_proof,
    accept |input| is_eleven_proof(input),
    reject |input| ValidationError::new("invalid_bsn", "Must be a valid citizen service number")
        .with_param("length", input.len().to_string()),
}
