//! End-to-end tests of the signing protocol on random and fixed domains

use ecgost::prelude::*;
use ecgost_params::traditional::gost::{CurveDomain, GOST_TEST_101};
use ecgost_tests::{flip_bit, random_signer, seeded_signer, signing_equation_holds};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn round_trip<S: SignatureScheme>(scheme: &mut S, message: &str) -> bool {
    match scheme.sign(message) {
        Ok(signature) => scheme.verify(message, &signature),
        Err(_) => false,
    }
}

#[test]
fn reference_walkthrough() {
    let mut signer = seeded_signer(GOST_TEST_101, 1, 0);
    let signature = signer.sign_with_ephemeral("APR", 3).unwrap();
    assert_eq!(signature.as_str(), "010110");
    assert!(signer.verify(None));
    assert_eq!(signer.state(), EngineState::Verified);
}

#[test]
fn generic_round_trip() {
    for seed in 0..8 {
        let (mut signer, _) = random_signer(seed, seed * 31 + 5);
        assert!(round_trip(&mut signer, "APR"));
        assert!(round_trip(&mut signer, "The quick brown fox"));
    }
}

#[test]
fn twin_engines_agree() {
    let domain = CurveDomain { p: 1999, a: 499, b: 150 };
    let mut signer = seeded_signer(domain, 5, 11);
    let mut verifier = seeded_signer(domain, 5, 99);
    assert_eq!(signer.public_key(), verifier.public_key());

    let signature = signer.sign("hello world").unwrap();
    assert!(verifier.verify_message("hello world", &signature));
    assert_eq!(verifier.bound_message(), "APR");
}

#[test]
fn lookup_and_combination_agree_on_random_domains() {
    for seed in 0..4 {
        let (probe, d) = random_signer(seed, 3);
        let domain = probe.domain();
        let table = CurveDomain {
            p: domain.p,
            a: domain.a,
            b: domain.b,
        };
        let mut combination = seeded_signer(table, d, seed);
        let mut lookup = GostSigner::builder()
            .domain(table)
            .private_key(d)
            .subgroup_mode(SubgroupMode::Materialize)
            .verify_strategy(VerifyStrategy::SubgroupLookup)
            .build_with_rng(ChaCha20Rng::seed_from_u64(seed))
            .unwrap();

        let signature = combination.sign("APR").unwrap();
        let width = combination.signature_width();
        for bit in 0..2 * width as usize {
            let candidate = flip_bit(&signature, bit);
            assert_eq!(
                combination.verify_message("APR", &candidate),
                lookup.verify_message("APR", &candidate),
                "seed {} signature {}",
                seed,
                candidate
            );
        }
    }
}

#[test]
fn errors_surface_through_the_api_type() {
    let mut signer = GostSigner::builder()
        .domain(GOST_TEST_101)
        .private_key(2)
        .retry_limit(1)
        .build_with_rng(ChaCha20Rng::seed_from_u64(0))
        .unwrap();

    let mut saw_failure = false;
    for _ in 0..64 {
        match SignatureScheme::sign(&mut signer, "APR") {
            Ok(signature) => assert!(SignatureScheme::verify(&mut signer, "APR", &signature)),
            Err(err) => {
                assert!(matches!(err, Error::SignatureGeneration { .. }));
                assert!(!err.is_setup_error());
                saw_failure = true;
            }
        }
    }
    assert!(saw_failure);

    let err: Error = GostSigner::new(Some(100), Some(4), Some(1)).unwrap_err().into();
    assert!(matches!(err, Error::Domain { .. }));
    assert!(err.is_setup_error());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn sign_then_verify(seed in any::<u64>(), key_seed in any::<u64>(), message in "\\PC{0,40}") {
        let (mut signer, _) = random_signer(seed, key_seed);
        let signature = signer.sign(&message).unwrap();
        prop_assert_eq!(signature.len(), 2 * signer.signature_width() as usize);
        prop_assert!(signer.verify(Some(&signature)));
        prop_assert!(signer.verify_message(&message, &signature));
    }

    #[test]
    fn flipped_bits_match_the_signing_equation(
        seed in any::<u64>(),
        key_seed in any::<u64>(),
        message in "[a-zA-Z ]{0,24}",
    ) {
        let (mut signer, d) = random_signer(seed, key_seed);
        let width = signer.signature_width();
        let signature = signer.sign(&message).unwrap();
        let original = signature.decode(width).unwrap();

        for bit in 0..signature.len() {
            let flipped = flip_bit(&signature, bit);
            let (r, s) = flipped.decode(width).unwrap();
            prop_assert_ne!((r, s), original);

            let accepted = signer.verify_message(&message, &flipped);
            let expected = signing_equation_holds(&mut signer, d, &message, r, s);
            prop_assert_eq!(accepted, expected, "flipped bit {} of {}", bit, signature);
        }
    }

    #[test]
    fn other_message_matches_the_signing_equation(
        seed in any::<u64>(),
        key_seed in any::<u64>(),
        message in "[a-z]{1,16}",
        other in "[a-z]{1,16}",
    ) {
        let (mut signer, d) = random_signer(seed, key_seed);
        let width = signer.signature_width();
        let signature = signer.sign(&message).unwrap();
        let (r, s) = signature.decode(width).unwrap();

        let accepted = signer.verify_message(&other, &signature);
        prop_assert_eq!(accepted, signing_equation_holds(&mut signer, d, &other, r, s));
    }
}
