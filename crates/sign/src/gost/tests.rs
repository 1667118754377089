//! Signature engine tests on `y² = x³ + 4x + 1 (mod 101)`, `q = 7`

use super::*;
use ecgost_algorithms::ec::SubgroupMode;
use ecgost_params::traditional::gost::{GOST_TEST_101, SMALL_PRIMES};
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

fn engine(d: u64) -> GostSigner {
    GostSigner::builder()
        .domain(GOST_TEST_101)
        .private_key(d)
        .build_with_rng(ChaCha20Rng::seed_from_u64(d))
        .unwrap()
}

fn flip(bits: &SignatureBits, index: usize) -> SignatureBits {
    let flipped: String = bits
        .as_str()
        .chars()
        .enumerate()
        .map(|(i, c)| match (i == index, c) {
            (true, '0') => '1',
            (true, _) => '0',
            (false, c) => c,
        })
        .collect();
    SignatureBits::new(flipped)
}

mod setup_tests {
    use super::*;

    #[test]
    fn test_reference_domain() {
        let signer = engine(6);
        assert_eq!(
            *signer.domain(),
            DomainParameters {
                p: 101,
                a: 4,
                b: 1,
                m: 112,
                q: 7
            }
        );
        assert_eq!(*signer.base_point(), Point::new(4, 9));
        assert_eq!(*signer.public_key().point(), Point::new(4, 92));
        assert_eq!(signer.signature_width(), 3);
        assert_eq!(signer.state(), EngineState::KeysSet);
        assert_eq!(signer.bound_message(), "APR");
        assert!(signer.last_signing().is_none());
    }

    #[test]
    fn test_new_with_explicit_domain() {
        let signer = GostSigner::new(Some(101), Some(4), Some(1)).unwrap();
        assert_eq!(signer.domain().q, 7);
        let d_point = *signer.public_key().point();
        assert!(signer.curve_group().curve().contains(&d_point));
        assert!(!d_point.is_identity());
    }

    #[test]
    fn test_random_domain() {
        for seed in 0..4 {
            let signer = GostSigner::builder()
                .build_with_rng(ChaCha20Rng::seed_from_u64(seed))
                .unwrap();
            let domain = signer.domain();
            assert!(SMALL_PRIMES.contains(&domain.p));
            assert!(domain.q >= 11);
            assert_eq!(domain.m % domain.q, 0);
            assert_eq!(signer.curve_group().order(), domain.m);
        }
    }

    #[test]
    fn test_random_coefficients_with_fixed_modulus() {
        let signer = GostSigner::builder()
            .modulus(1009)
            .build_with_rng(ChaCha20Rng::seed_from_u64(42))
            .unwrap();
        assert_eq!(signer.domain().p, 1009);
        assert!(signer.domain().q >= 11);
    }

    #[test]
    fn test_rejects_bad_domains() {
        let not_prime = GostSigner::new(Some(100), Some(4), Some(1)).unwrap_err();
        assert!(matches!(not_prime, Error::Domain { .. }));

        let singular = GostSigner::new(Some(101), Some(0), Some(0)).unwrap_err();
        assert!(matches!(singular, Error::Domain { .. }));

        // random coefficients cannot rescue a bad modulus
        let err = GostSigner::builder()
            .modulus(91)
            .build_with_rng(ChaCha20Rng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, Error::Domain { .. }));
    }

    #[test]
    fn test_rejects_bad_private_key() {
        for d in [0, 7, 100] {
            let err = GostSigner::builder()
                .domain(GOST_TEST_101)
                .private_key(d)
                .build_with_rng(ChaCha20Rng::seed_from_u64(0))
                .unwrap_err();
            assert!(matches!(err, Error::KeyGeneration { .. }), "d = {}", d);
        }
    }

    #[test]
    fn test_rejects_bad_configuration() {
        let err = GostSigner::builder()
            .domain(GOST_TEST_101)
            .retry_limit(0)
            .build_with_rng(ChaCha20Rng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));

        let err = GostSigner::builder()
            .domain(GOST_TEST_101)
            .verify_strategy(VerifyStrategy::SubgroupLookup)
            .build_with_rng(ChaCha20Rng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_state_transitions() {
        let mut signer = engine(1);
        assert!(signer.state().is_ready());
        assert!(!EngineState::ParamsSet.is_ready());

        signer.sign_with_ephemeral("APR", 3).unwrap();
        assert_eq!(signer.state(), EngineState::Signed);
        assert!(signer.verify(None));
        assert_eq!(signer.state(), EngineState::Verified);
        assert!(!signer.verify(Some(&SignatureBits::from("000000"))));
        assert_eq!(signer.state(), EngineState::Rejected);
        assert_eq!(signer.state().step(), None);

        assert_eq!(EngineState::Verifying(4).step(), Some(4));
        assert_eq!(EngineState::Signing(2).to_string(), "signing, step 2");
    }

    #[test]
    fn test_private_key_debug_is_redacted() {
        let key = PrivateKey::new(5, 7).unwrap();
        assert_eq!(format!("{:?}", key), "PrivateKey([REDACTED])");
        assert_eq!(key.value(), 5);
    }
}

mod sign_tests {
    use super::*;

    #[test]
    fn test_known_answers() {
        let cases = [(1, 3, "010110"), (6, 1, "100010"), (1, 4, "010101"), (6, 3, "010010")];
        for (d, k, expected) in cases {
            let mut signer = engine(d);
            let sig = signer.sign_with_ephemeral("APR", k).unwrap();
            assert_eq!(sig.as_str(), expected, "d = {}, k = {}", d, k);
            assert_eq!(signer.state(), EngineState::Signed);
        }
    }

    #[test]
    fn test_signing_context() {
        let mut signer = engine(1);
        signer.sign_with_ephemeral("APR", 3).unwrap();

        let ctx = signer.last_signing().unwrap();
        assert_eq!(ctx.message, "APR");
        assert_eq!(ctx.blocks, vec![2, 0, 2, 5, 0, 1, 2, 2]);
        assert_eq!(ctx.digest.map(|d| (d.value, d.sum)), Some((6, 14)));
        assert_eq!(ctx.e, 6);
        assert_eq!(ctx.k, Some(3));
        assert_eq!((ctx.r, ctx.s), (2, 6));
        assert_eq!(ctx.attempts, 1);
        assert_eq!(ctx.signature.as_ref().map(|s| s.as_str()), Some("010110"));
    }

    #[test]
    fn test_zero_s_is_an_error_for_fixed_ephemeral() {
        // d = 2, k = 1: r = 4, s = (8 + 6) mod 7 = 0
        let mut signer = engine(2);
        let err = signer.sign_with_ephemeral("APR", 1).unwrap_err();
        assert!(matches!(err, Error::SignatureGeneration { .. }));
        assert_eq!(signer.state(), EngineState::KeysSet);
    }

    #[test]
    fn test_ephemeral_out_of_range() {
        let mut signer = engine(1);
        assert!(matches!(
            signer.sign_with_ephemeral("APR", 0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            signer.sign_with_ephemeral("APR", 7),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_random_signing_retries() {
        // with d = 2, k ∈ {1, 4} gives s = 0 and must be redrawn
        for seed in 0..20 {
            let mut signer = GostSigner::builder()
                .domain(GOST_TEST_101)
                .private_key(2)
                .build_with_rng(ChaCha20Rng::seed_from_u64(seed))
                .unwrap();
            let sig = signer.sign("APR").unwrap();
            assert_eq!(sig.len(), 6);
            let k = signer.last_signing().unwrap().k.unwrap();
            assert!(![1, 4].contains(&k));
            assert!(signer.verify(None));
        }
    }

    #[test]
    fn test_retry_limit_exhaustion() {
        let mut failures = 0;
        for seed in 0..64 {
            let mut signer = GostSigner::builder()
                .domain(GOST_TEST_101)
                .private_key(2)
                .retry_limit(1)
                .build_with_rng(ChaCha20Rng::seed_from_u64(seed))
                .unwrap();
            match signer.sign("APR") {
                Ok(sig) => assert!(signer.verify(Some(&sig))),
                Err(Error::SignatureGeneration { details, .. }) => {
                    assert!(details.contains("retry limit"));
                    assert_eq!(signer.state(), EngineState::KeysSet);
                    failures += 1;
                }
                Err(other) => panic!("unexpected error: {}", other),
            }
        }
        assert!(failures > 0);
    }

    #[test]
    fn test_sign_rebinds_message() {
        let mut signer = engine(1);
        signer.sign("hello world").unwrap();
        assert_eq!(signer.bound_message(), "hello world");
        assert!(signer.verify(None));
    }
}

mod verify_tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for d in 1..7 {
            let mut signer = engine(d);
            for _ in 0..10 {
                let sig = signer.sign("APR").unwrap();
                assert!(signer.verify(Some(&sig)), "d = {}, ζ = {}", d, sig);
                assert_eq!(signer.state(), EngineState::Verified);
            }
        }
    }

    #[test]
    fn test_verification_context() {
        let mut signer = engine(1);
        let sig = signer.sign_with_ephemeral("APR", 3).unwrap();
        assert!(signer.verify(Some(&sig)));

        let ctx = signer.last_verification().unwrap();
        assert!(ctx.accepted);
        assert!(ctx.rejection.is_none());
        assert_eq!((ctx.r, ctx.s), (Some(2), Some(6)));
        assert_eq!(ctx.e, Some(6));
        assert_eq!(ctx.v, Some(6));
        assert_eq!((ctx.z1, ctx.z2), (Some(1), Some(2)));
        assert_eq!(ctx.point, Some(Point::new(37, 10)));
        assert_eq!(ctx.recovered_r, Some(2));
    }

    #[test]
    fn test_tamper_detection() {
        let cases = [(1, 3), (1, 4), (1, 6), (6, 1), (6, 3), (6, 4)];
        for (d, k) in cases {
            let mut signer = engine(d);
            let sig = signer.sign_with_ephemeral("APR", k).unwrap();
            for bit in 0..sig.len() {
                let tampered = flip(&sig, bit);
                assert!(
                    !signer.verify(Some(&tampered)),
                    "d = {}, k = {}, flipped bit {} of {}",
                    d,
                    k,
                    bit,
                    sig
                );
                assert_eq!(signer.state(), EngineState::Rejected);
            }
        }
    }

    #[test]
    fn test_idempotent_verify() {
        let mut signer = engine(1);
        let good = signer.sign_with_ephemeral("APR", 3).unwrap();
        let bad = flip(&good, 0);
        for sig in [&good, &bad] {
            let first = signer.verify(Some(sig));
            let second = signer.verify(Some(sig));
            assert_eq!(first, second);
        }
        assert!(signer.verify(None));
        assert!(signer.verify(None));
    }

    #[test]
    fn test_verify_without_signature() {
        let mut signer = engine(1);
        assert!(!signer.verify(None));
        let ctx = signer.last_verification().unwrap();
        assert!(matches!(
            ctx.rejection,
            Some(ApiError::SignatureRejected { step: 1, .. })
        ));
        assert_eq!(signer.state(), EngineState::Rejected);
    }

    #[test]
    fn test_failed_signing_keeps_previous_signature() {
        let mut signer = engine(2);
        let sig = signer.sign_with_ephemeral("APR", 3).unwrap();
        assert_eq!(sig.as_str(), "010001");

        // k = 1 gives s = 0 for d = 2
        assert!(signer.sign_with_ephemeral("APR", 1).is_err());
        assert!(signer.last_signing().unwrap().signature.is_none());
        assert_eq!(signer.last_signature(), Some(&sig));
        assert!(signer.verify(None));

        let mut exhausted = false;
        for seed in 0..64 {
            let mut signer = GostSigner::builder()
                .domain(GOST_TEST_101)
                .private_key(2)
                .retry_limit(1)
                .build_with_rng(ChaCha20Rng::seed_from_u64(seed))
                .unwrap();
            let sig = signer.sign_with_ephemeral("APR", 3).unwrap();
            if signer.sign("APR").is_err() {
                exhausted = true;
                assert_eq!(signer.last_signature(), Some(&sig));
                assert!(signer.verify(None));
            }
        }
        assert!(exhausted);
    }

    #[test]
    fn test_verify_before_signing_uses_default_message() {
        let mut signer = engine(1);
        assert!(signer.verify(Some(&SignatureBits::from("010110"))));
    }

    #[test]
    fn test_malformed_signatures() {
        let mut signer = engine(1);
        for bits in ["", "01011", "0101100", "01x110", "000110", "010000", "111110", "010111"] {
            assert!(!signer.verify(Some(&SignatureBits::from(bits))), "{:?}", bits);
            let ctx = signer.last_verification().unwrap();
            assert!(matches!(
                ctx.rejection,
                Some(ApiError::SignatureRejected { step: 1, .. })
            ));
        }
    }

    #[test]
    fn test_wrong_message_is_rejected() {
        let mut signer = engine(1);
        let sig = signer.sign_with_ephemeral("APR", 3).unwrap();
        assert!(!signer.verify_message("B", &sig));
        assert_eq!(signer.bound_message(), "APR");
        let ctx = signer.last_verification().unwrap();
        assert!(matches!(
            ctx.rejection,
            Some(ApiError::SignatureRejected { step: 7, .. })
        ));
    }

    #[test]
    fn test_accepted_pairs() {
        let mut signer = engine(1);
        let mut accepted = Vec::new();
        for r in 1..7 {
            for s in 1..7 {
                if signer.verify(Some(&SignatureBits::encode(r, s, 3))) {
                    accepted.push((r, s));
                }
            }
        }
        assert_eq!(accepted, vec![(2, 5), (2, 6), (4, 2), (4, 3), (4, 5), (4, 6)]);
    }

    #[test]
    fn test_lookup_strategy_agrees() {
        let mut combination = engine(1);
        let mut lookup = GostSigner::builder()
            .domain(GOST_TEST_101)
            .private_key(1)
            .subgroup_mode(SubgroupMode::Materialize)
            .verify_strategy(VerifyStrategy::SubgroupLookup)
            .build_with_rng(ChaCha20Rng::seed_from_u64(1))
            .unwrap();
        assert!(lookup.subgroup().is_complete());

        for r in 0..8 {
            for s in 0..8 {
                let sig = SignatureBits::encode(r, s, 3);
                assert_eq!(
                    combination.verify(Some(&sig)),
                    lookup.verify(Some(&sig)),
                    "ζ = {}",
                    sig
                );
            }
        }
    }

    #[test]
    fn test_floor_log2_hash_round_trip() {
        let mut signer = GostSigner::builder()
            .domain(GOST_TEST_101)
            .private_key(3)
            .hash(BlockHash::FloorLog2BlockSum)
            .build_with_rng(ChaCha20Rng::seed_from_u64(9))
            .unwrap();
        let sig = signer.sign("APR").unwrap();
        assert!(signer.verify(None));
        assert_eq!(signer.last_signing().unwrap().e, 2);
        assert!(signer.verify(Some(&sig)));
    }
}

mod trait_tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<(String, StyleHint)>>>);

    impl Narrator for Recorder {
        fn narrate(&self, message: fmt::Arguments<'_>, style: StyleHint) {
            self.0.lock().unwrap().push((message.to_string(), style));
        }
    }

    #[test]
    fn test_signature_scheme_trait() {
        let mut signer = engine(6);
        assert_eq!(<GostSigner as SignatureScheme>::name(), "GOST R 34.10-2012");
        let sig = SignatureScheme::sign(&mut signer, "APR").unwrap();
        assert!(SignatureScheme::verify(&mut signer, "APR", &sig));
        assert_eq!(
            SignatureScheme::public_key(&signer).point(),
            &Point::new(4, 92)
        );
    }

    #[test]
    fn test_narration_does_not_change_results() {
        let recorder = Recorder::default();
        let mut narrated = GostSigner::builder()
            .domain(GOST_TEST_101)
            .private_key(4)
            .narrator(recorder.clone())
            .build_with_rng(ChaCha20Rng::seed_from_u64(77))
            .unwrap();
        let mut silent = GostSigner::builder()
            .domain(GOST_TEST_101)
            .private_key(4)
            .narrator(ecgost_api::SilentNarrator)
            .build_with_rng(ChaCha20Rng::seed_from_u64(77))
            .unwrap();

        for message in ["APR", "", "hello world"] {
            let a = narrated.sign(message).unwrap();
            let b = silent.sign(message).unwrap();
            assert_eq!(a, b);
            assert_eq!(narrated.verify(None), silent.verify(None));
        }

        let lines = recorder.0.lock().unwrap();
        assert!(lines.iter().any(|(_, style)| *style == StyleHint::Heading));
        assert!(lines
            .iter()
            .any(|(line, style)| *style == StyleHint::Step && line.starts_with("Step 1.")));
    }
}
