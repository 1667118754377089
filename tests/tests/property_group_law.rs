//! Property-based tests for the curve group law and its helpers

use ecgost_algorithms::ec::{exact_division_search, summands, Curve, CurveGroup, Point};
use ecgost_algorithms::hash::{message_blocks, BlockHash};
use ecgost_common::math_common::{bit_length, mod_inv, mod_mul};
use ecgost_params::traditional::gost::SMALL_PRIMES;
use proptest::prelude::*;

/// A non-singular curve over a prime from the parameter table
fn curve() -> impl Strategy<Value = Curve> {
    (prop::sample::select(SMALL_PRIMES[..40].to_vec()), 0i64..500, 0i64..500)
        .prop_filter_map("singular curve", |(p, a, b)| Curve::new(p, a, b).ok())
}

/// A curve with its full point list
fn curve_group() -> impl Strategy<Value = (CurveGroup, Vec<Point>)> {
    curve().prop_map(|curve| {
        let group = CurveGroup::build(curve).unwrap();
        let points: Vec<Point> = group.all_points().collect();
        (group, points)
    })
}

fn pick(points: &[Point], index: prop::sample::Index) -> Point {
    *index.get(points)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn enumeration_matches_curve_equation((group, points) in curve_group()) {
        let curve = group.curve();
        prop_assert_eq!(points.len() as u64, group.order());
        for point in &points {
            prop_assert!(curve.contains(point));
        }
    }

    #[test]
    fn addition_is_closed_and_commutative(
        (group, points) in curve_group(),
        i in any::<prop::sample::Index>(),
        j in any::<prop::sample::Index>(),
    ) {
        let curve = group.curve();
        let (a, b) = (pick(&points, i), pick(&points, j));
        let sum = curve.add(&a, &b);
        prop_assert!(curve.contains(&sum));
        prop_assert_eq!(sum, curve.add(&b, &a));
    }

    #[test]
    fn identity_and_inverse(
        (group, points) in curve_group(),
        i in any::<prop::sample::Index>(),
    ) {
        let curve = group.curve();
        let a = pick(&points, i);
        prop_assert_eq!(curve.add(&a, &Point::identity()), a);
        prop_assert_eq!(curve.add(&Point::identity(), &a), a);
        prop_assert!(curve.add(&a, &curve.negate(&a)).is_identity());
    }

    #[test]
    fn addition_is_associative(
        (group, points) in curve_group(),
        i in any::<prop::sample::Index>(),
        j in any::<prop::sample::Index>(),
        k in any::<prop::sample::Index>(),
    ) {
        let curve = group.curve();
        let (a, b, c) = (pick(&points, i), pick(&points, j), pick(&points, k));
        let left = curve.add(&curve.add(&a, &b), &c);
        let right = curve.add(&a, &curve.add(&b, &c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn group_order_annihilates_every_point(
        (group, points) in curve_group(),
        i in any::<prop::sample::Index>(),
    ) {
        let curve = group.curve();
        let a = pick(&points, i);
        prop_assert!(curve.multiply_unsigned(&a, group.order()).unwrap().is_identity());
    }

    #[test]
    fn multiplication_distributes(
        (group, points) in curve_group(),
        i in any::<prop::sample::Index>(),
        j in 0u64..300,
        k in 0u64..300,
    ) {
        let curve = group.curve();
        let a = pick(&points, i);
        let split = curve.add(
            &curve.multiply_unsigned(&a, j).unwrap(),
            &curve.multiply_unsigned(&a, k).unwrap(),
        );
        prop_assert_eq!(curve.multiply_unsigned(&a, j + k).unwrap(), split);
    }

    #[test]
    fn negative_multiplier_negates(
        (group, points) in curve_group(),
        i in any::<prop::sample::Index>(),
        k in 1i64..300,
    ) {
        let curve = group.curve();
        let a = pick(&points, i);
        let negated = curve.multiply(&a, -k).unwrap();
        prop_assert_eq!(negated, curve.negate(&curve.multiply(&a, k).unwrap()));
    }

    #[test]
    fn summands_are_reachable(k in 1u64..100_000) {
        let mut reached = vec![1u64];
        let sequence = summands(k);
        prop_assert_eq!(sequence[0], 1);
        let mut total = 1u64;
        for &step in &sequence[1..] {
            prop_assert!(reached.contains(&step), "summand {} not yet reached", step);
            total += step;
            reached.push(total);
        }
        prop_assert_eq!(total, k);
    }

    #[test]
    fn exact_division_matches_inverse(
        p in prop::sample::select(SMALL_PRIMES.to_vec()),
        dividend in any::<i32>(),
        divisor in 1i64..2000,
    ) {
        let dividend = dividend as i64;
        let found = exact_division_search(dividend, divisor, p);
        match mod_inv(divisor, p) {
            Some(inv) => {
                let found = found.unwrap();
                prop_assert_eq!(found.quotient, mod_mul(dividend.rem_euclid(p), inv, p));
                prop_assert_eq!(mod_mul(found.quotient, divisor.rem_euclid(p), p), dividend.rem_euclid(p));
                prop_assert!(found.multiplier < divisor.rem_euclid(p));
            }
            None => prop_assert!(found.is_none()),
        }
    }

    #[test]
    fn hash_is_deterministic_and_bounded(message in "\\PC{0,64}", q in 2u64..5000) {
        for hash in [BlockHash::BlockSum, BlockHash::FloorLog2BlockSum] {
            let first = hash.hash_message(&message, q);
            prop_assert_eq!(first, hash.hash_message(&message, q));
            prop_assert!(first.value < 1u64 << hash.digest_bits(q));
        }

        let blocks = message_blocks(&message, bit_length(q));
        let digest = BlockHash::BlockSum.digest(&blocks, q);
        prop_assert_eq!(digest.sum, blocks.iter().sum::<u64>());
    }
}
