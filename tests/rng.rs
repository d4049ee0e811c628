use num_bigint::BigUint;
use num_traits::ToPrimitive;
use primechain::rng::WitnessRng;

#[test]
fn deterministic_from_seed() {
    let mut a = WitnessRng::from_seed([0x42u8; 32]);
    let mut b = WitnessRng::from_seed([0x42u8; 32]);

    let mut x = [0u8; 150];
    let mut y = [0u8; 150];
    a.fill_bytes(&mut x);
    b.fill_bytes(&mut y);

    assert_eq!(x, y);
}

#[test]
fn different_seeds_diverge() {
    let mut a = WitnessRng::from_seed([1u8; 32]);
    let mut b = WitnessRng::from_seed([2u8; 32]);

    let mut x = [0u8; 64];
    let mut y = [0u8; 64];
    a.fill_bytes(&mut x);
    b.fill_bytes(&mut y);

    assert_ne!(x, y);
}

#[test]
fn rekey_changes_output() {
    let mut rng = WitnessRng::from_seed([0xAAu8; 32]);

    let mut x = [0u8; 64];
    let mut y = [0u8; 64];
    rng.fill_bytes(&mut x);
    rng.fill_bytes(&mut y);

    assert_ne!(x, y);
}

#[test]
fn os_seeded_generators_differ() {
    let mut a = WitnessRng::from_os();
    let mut b = WitnessRng::default();

    let mut x = [0u8; 32];
    let mut y = [0u8; 32];
    a.fill_bytes(&mut x);
    b.fill_bytes(&mut y);

    assert_ne!(x, y);
}

#[test]
fn below_stays_in_range() {
    let mut rng = WitnessRng::from_seed([7u8; 32]);

    for bound in [1u64, 2, 3, 255, 256, 257, 1_000_003] {
        let bound = BigUint::from(bound);
        for _ in 0..200 {
            assert!(rng.below(&bound) < bound);
        }
    }
}

#[test]
fn below_covers_small_range() {
    let mut rng = WitnessRng::from_seed([9u8; 32]);
    let bound = BigUint::from(5u32);

    let mut seen = [false; 5];
    for _ in 0..500 {
        let v = rng.below(&bound).to_usize().unwrap();
        seen[v] = true;
    }

    assert!(seen.iter().all(|&s| s));
}

#[test]
fn bases_lie_in_witness_range() {
    let mut rng = WitnessRng::from_seed([3u8; 32]);
    let n: BigUint = "618970019642690137449678251".parse().unwrap();
    let upper = &n - 2u32;

    for _ in 0..200 {
        let base = rng.base_for(&n);
        assert!(base >= BigUint::from(2u32));
        assert!(base <= upper);
    }

    let five = BigUint::from(5u32);
    for _ in 0..50 {
        let base = rng.base_for(&five).to_u32().unwrap();
        assert!(base == 2 || base == 3);
    }
}

#[test]
#[should_panic(expected = "sampling bound must be non-zero")]
fn zero_bound_panics() {
    WitnessRng::from_seed([0u8; 32]).below(&BigUint::from(0u32));
}
