//! Shared helpers for the ecgost integration tests

use ecgost_params::traditional::gost::CurveDomain;
use ecgost_sign::{GostSigner, SignatureBits};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Engine on `domain` with a fixed key, seeded for reproducibility
pub fn seeded_signer(domain: CurveDomain, d: u64, seed: u64) -> GostSigner {
    GostSigner::builder()
        .domain(domain)
        .private_key(d)
        .build_with_rng(ChaCha20Rng::seed_from_u64(seed))
        .expect("test domain must build")
}

/// Engine on a randomly drawn domain with a key derived from `key_seed`
///
/// Returns the engine and its private key.
pub fn random_signer(seed: u64, key_seed: u64) -> (GostSigner, u64) {
    let probe = GostSigner::builder()
        .build_with_rng(ChaCha20Rng::seed_from_u64(seed))
        .expect("random domain must build");
    let domain = probe.domain();
    let d = 1 + key_seed % (domain.q - 1);
    let signer = seeded_signer(
        CurveDomain {
            p: domain.p,
            a: domain.a,
            b: domain.b,
        },
        d,
        seed,
    );
    (signer, d)
}

/// Flip one bit of a signature
pub fn flip_bit(signature: &SignatureBits, index: usize) -> SignatureBits {
    signature
        .as_str()
        .char_indices()
        .map(|(i, c)| match (i == index, c) {
            (false, c) => c,
            (true, '0') => '1',
            (true, _) => '0',
        })
        .collect::<String>()
        .into()
}

/// Check `(r, s)` against the signing equation directly
///
/// A pair is valid for `message` under key `d` exactly when
/// `k = (s - r·d)·e⁻¹ mod q` is non-zero and `x(k·P) ≡ r (mod q)`.
pub fn signing_equation_holds(signer: &mut GostSigner, d: u64, message: &str, r: u64, s: u64) -> bool {
    let q = signer.domain().q;
    if r == 0 || r >= q || s == 0 || s >= q {
        return false;
    }

    let e = match signer.hash_function().hash_message(message, q).value % q {
        0 => 1,
        e => e,
    };
    let e_inv = ecgost_common::math_common::mod_inv(e as i64, q as i64)
        .expect("e is invertible mod prime q") as u128;
    let q128 = q as u128;
    let rd = (r as u128 * d as u128) % q128;
    let k = ((s as u128 + q128 - rd) % q128 * e_inv % q128) as u64;
    if k == 0 {
        return false;
    }

    let kp = signer.point_multiple(k).expect("k·P is computable");
    !kp.is_identity() && kp.x().rem_euclid(q as i64) as u64 == r
}
