use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_uniform_int_stays_in_range() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut seen = [false; 6];
    for _ in 0..500 {
        let v = uniform_int(&mut rng, 1u64, 6).unwrap();
        assert!((1..=6).contains(&v));
        seen[(v - 1) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_uniform_int_degenerate_ranges() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    assert_eq!(uniform_int(&mut rng, 5i64, 5), Some(5));
    assert_eq!(uniform_int(&mut rng, 6i64, 5), None);
}

#[test]
fn test_choice_from() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let table = [101i64, 103, 107];
    for _ in 0..50 {
        let v = choice_from(&mut rng, &table).unwrap();
        assert!(table.contains(v));
    }
    let empty: [i64; 0] = [];
    assert!(choice_from(&mut rng, &empty).is_none());
}
