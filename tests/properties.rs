use num_bigint::{BigInt, BigUint};
use primechain::chain::{CandidateChain, ChainError, ChainValidator, Kind};
use primechain::primality::PrimalityParams;
use proptest::prelude::*;

const KNOWN: &[(&[u64], Kind)] = &[
    (&[2, 5, 11, 23, 47], Kind::First),
    (&[89, 179, 359, 719, 1439, 2879], Kind::First),
    (&[1531, 3061, 6121, 12241, 24481], Kind::Second),
    (&[151, 301, 601, 1201], Kind::NotAChain),
    (&[19, 37, 73, 145], Kind::NotAChain),
    (&[41, 83, 167, 335], Kind::NotAChain),
];

fn validator() -> ChainValidator {
    ChainValidator::with_params(PrimalityParams::seeded([0xC3u8; 32])).unwrap()
}

fn shuffled_known() -> impl Strategy<Value = (Vec<u64>, Kind)> {
    prop::sample::select(KNOWN.to_vec())
        .prop_flat_map(|(values, kind)| (Just(values.to_vec()).prop_shuffle(), Just(kind)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn input_order_does_not_matter((values, kind) in shuffled_known()) {
        let mut chain = CandidateChain::new(values).unwrap();

        prop_assert_eq!(validator().classify(&mut chain), kind != Kind::NotAChain);
        prop_assert_eq!(chain.kind(), Some(kind));
    }

    #[test]
    fn stored_ascending(values in prop::collection::vec(1u64..u64::MAX, 2..32)) {
        let chain = CandidateChain::new(values.clone()).unwrap();

        let mut sorted = values;
        sorted.sort_unstable();
        let stored: Vec<BigUint> = chain.candidates().iter().map(|c| c.value().clone()).collect();
        let expected: Vec<BigUint> = sorted.into_iter().map(BigUint::from).collect();

        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn short_input_is_rejected(values in prop::collection::vec(any::<i64>(), 0..2)) {
        let len = values.len();
        prop_assert_eq!(CandidateChain::new(values), Err(ChainError::TooShort { len }));
    }

    #[test]
    fn non_positive_is_rejected(
        mut values in prop::collection::vec(1i64..1_000_000, 2..16),
        bad in i64::MIN..=0,
        at in any::<prop::sample::Index>(),
    ) {
        let index = at.index(values.len());
        values[index] = bad;

        prop_assert_eq!(
            CandidateChain::new(values),
            Err(ChainError::NonPositive { index, value: BigInt::from(bad) })
        );
    }

    #[test]
    fn checked_flag_and_idempotence(values in prop::collection::vec(1u64..100_000, 2..8)) {
        let mut chain = CandidateChain::new(values).unwrap();
        let mut validator = validator();

        prop_assert!(!chain.is_checked());

        let first = validator.diagnose(&mut chain);
        prop_assert!(chain.is_checked());
        let after_first = chain.clone();

        let second = validator.diagnose(&mut chain);
        prop_assert_eq!(first, second);
        prop_assert_eq!(chain, after_first);
    }
}
