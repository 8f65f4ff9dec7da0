// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! BLS12-381 types for unchained drand networks, where signatures live on G1
//! and the group public key on G2.

use blstrs::{G1Affine, G1Projective, G2Affine, G2Projective};
use group::{Curve, prime::PrimeCurveAffine};

pub use bls_signatures::Error;

mod public_key_impls;
mod signature_impls;

/// Domain separation tag of the `bls-unchained-g1-rfc9380` scheme.
pub const DST_G1: &[u8] = b"BLS_SIG_BLS12381G1_XMD:SHA-256_SSWU_RO_NUL_";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignatureOnG1(pub(crate) G1Affine);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKeyOnG2(pub(crate) G2Projective);

/// Checks `e(sig, g2) == e(H(message), pk)`.
pub fn verify_unchained(
    public_key: &PublicKeyOnG2,
    message: &[u8],
    signature: &SignatureOnG1,
) -> bool {
    let hashed = G1Projective::hash_to_curve(message, DST_G1, &[]).to_affine();
    blstrs::pairing(&signature.0, &G2Affine::generator())
        == blstrs::pairing(&hashed, &public_key.as_affine())
}
