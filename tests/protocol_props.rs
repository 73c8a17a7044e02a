use he_battleship::{BfvConfig, BfvKeyPair, Evaluator, KeyPair};
use proptest::prelude::*;

fn blinded_value(keys: &mut BfvKeyPair, v: u64, r: u64) -> u64 {
    let pt = keys.evaluator().encode(v).unwrap();
    let ct = keys.encrypt(&pt).unwrap();
    let blind = keys.evaluator().encode(r).unwrap();
    let blinded = keys.evaluator().multiply_plain(&ct, &blind).unwrap();
    let pt = keys.decrypt(&blinded).unwrap();
    keys.decode_first_slot(&pt).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn blinding_preserves_zero_and_nonzero(seed in any::<[u8; 32]>(), v in 0u64..=20, r in 1u64..=100) {
        let mut keys = BfvKeyPair::new(&BfvConfig::default(), seed).unwrap();
        let m = blinded_value(&mut keys, v, r);
        prop_assert_eq!(m == 0, v == 0);
        prop_assert_eq!(m, v * r);
    }
}

#[test]
fn blinded_value_is_not_the_ship_id() {
    let mut keys = BfvKeyPair::new(&BfvConfig::default(), [11; 32]).unwrap();
    for r in 2..=100 {
        assert_ne!(blinded_value(&mut keys, 3, r), 3);
    }
}
