// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Turning verified beacon signatures into winning ticket indices.

use crate::utils::encoding::blake2b_256;
use num_bigint::BigUint;
use sha2::Digest as _;

/// Width of a derived digest, in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Hashes verified signature bytes into a uniform digest. The raw signature
/// is a curve point and carries structure; the digest does not.
pub trait RandomnessHasher {
    fn derive(&self, signature: &[u8]) -> [u8; DIGEST_LENGTH];
}

impl<H: RandomnessHasher + ?Sized> RandomnessHasher for &H {
    fn derive(&self, signature: &[u8]) -> [u8; DIGEST_LENGTH] {
        (**self).derive(signature)
    }
}

/// `SHA-256(signature)`, the randomness drand itself publishes for a round.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl RandomnessHasher for Sha256Hasher {
    fn derive(&self, signature: &[u8]) -> [u8; DIGEST_LENGTH] {
        let mut ret = [0u8; DIGEST_LENGTH];
        ret.copy_from_slice(&sha2::Sha256::digest(signature));
        ret
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Blake2bHasher;

impl RandomnessHasher for Blake2bHasher {
    fn derive(&self, signature: &[u8]) -> [u8; DIGEST_LENGTH] {
        blake2b_256(signature)
    }
}

/// Maps `digest` onto `[0, no_of_tickets)`.
///
/// The digest is read as a big-endian 256-bit integer `D` and scaled as
/// `floor(D * n / 2^256)`, so every index owns either `floor(2^256 / n)` or
/// `ceil(2^256 / n)` digests. Returns `None` when no tickets exist.
pub fn select_ticket(no_of_tickets: u64, digest: &[u8; DIGEST_LENGTH]) -> Option<u64> {
    if no_of_tickets == 0 {
        return None;
    }
    let scaled = BigUint::from_bytes_be(digest) * no_of_tickets;
    let index: BigUint = scaled >> (DIGEST_LENGTH * 8);
    // n * D < n * 2^256, so the quotient fits back into n's width
    u64::try_from(index).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use rand::{RngCore as _, SeedableRng as _};
    use rstest::rstest;

    fn digest_from(bytes: &[u8]) -> [u8; DIGEST_LENGTH] {
        let mut digest = [0u8; DIGEST_LENGTH];
        for (d, b) in digest.iter_mut().zip(bytes) {
            *d = *b;
        }
        digest
    }

    #[rstest]
    #[case([0x00; 32], 5, 0)]
    #[case([0xff; 32], 5, 4)]
    #[case([0xff; 32], 1, 0)]
    #[case([0x80; 32], 2, 1)]
    #[case([0x7f; 32], 2, 0)]
    #[case([0xff; 32], u64::MAX, u64::MAX - 1)]
    fn select_boundaries(#[case] digest: [u8; 32], #[case] n: u64, #[case] expected: u64) {
        assert_eq!(select_ticket(n, &digest), Some(expected));
    }

    #[test]
    fn select_three_of_five() {
        // 0x99.. is 3/5 of the digest space, one past it lands in bucket 3
        let mut digest = [0x99; 32];
        digest[31] = 0x9a;
        assert_eq!(select_ticket(5, &digest), Some(3));
        assert_eq!(select_ticket(5, &[0x99; 32]), Some(2));
    }

    #[test]
    fn select_without_tickets() {
        assert_eq!(select_ticket(0, &[0xab; 32]), None);
    }

    #[quickcheck]
    fn select_in_range(n: u64, bytes: Vec<u8>) -> bool {
        let digest = digest_from(&bytes);
        match select_ticket(n, &digest) {
            None => n == 0,
            Some(index) => index < n,
        }
    }

    #[quickcheck]
    fn select_is_monotonic(n: u64, a: Vec<u8>, b: Vec<u8>) -> bool {
        let (a, b) = (digest_from(&a), digest_from(&b));
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        select_ticket(n, &lo) <= select_ticket(n, &hi)
    }

    #[test]
    fn select_is_uniform() {
        // a range that does not divide 2^k, where naive modulo of a short
        // word would visibly favour low indices
        const N: u64 = 7;
        const SAMPLES: usize = 70_000;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0x1077_e47);
        let mut buckets = [0usize; N as usize];
        for _ in 0..SAMPLES {
            let mut digest = [0u8; DIGEST_LENGTH];
            rng.fill_bytes(&mut digest);
            let index = select_ticket(N, &digest).unwrap();
            buckets[index as usize] += 1;
        }
        let expected = SAMPLES as f64 / N as f64;
        let chi_squared: f64 = buckets
            .iter()
            .map(|&observed| (observed as f64 - expected).powi(2) / expected)
            .sum();
        // 6 degrees of freedom, p = 0.001
        assert!(chi_squared < 22.46, "chi^2 = {chi_squared}, buckets = {buckets:?}");
    }

    #[test]
    fn hashers_are_deterministic_and_distinct() {
        let signature = [7u8; 48];
        assert_eq!(Sha256Hasher.derive(&signature), Sha256Hasher.derive(&signature));
        assert_ne!(Sha256Hasher.derive(&signature), Blake2bHasher.derive(&signature));
        assert_ne!(Sha256Hasher.derive(&signature), Sha256Hasher.derive(&[8u8; 48]));
    }
}
