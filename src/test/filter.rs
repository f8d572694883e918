use crate::{test::TestRng, Filter, Hash, Sha1};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn seed_scenario_1_minimal_filter() {
    let mut f = Filter::new_with_prng(1, 1, &mut TestRng::seeded(1)).unwrap();
    f.insert_bytes(b"");
    assert!(f.query_bytes(b""));
}

#[test]
fn seed_scenario_2_all_inserted_members_query_true() {
    let mut f = Filter::new_with_prng(5, 10, &mut TestRng::seeded(2)).unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    let strings = crate::test::random_strings(&mut rng, 50, 100);

    for s in &strings {
        f.insert_bytes(s.as_bytes());
    }
    for s in &strings {
        assert!(f.query_bytes(s.as_bytes()), "missing member: {s:?}");
    }
}

#[test]
fn no_false_negatives() {
    let mut f = Filter::new_with_prng(4, 12, &mut TestRng::seeded(3)).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let strings = crate::test::random_strings(&mut rng, 200, 64);

    for s in &strings {
        f.insert_bytes(s.as_bytes());
        assert!(f.query_bytes(s.as_bytes()));
    }
}

#[test]
fn variant_equivalence() {
    let mut f = Filter::new_with_prng(4, 12, &mut TestRng::seeded(4)).unwrap();
    let s = "correct horse battery staple";
    f.insert_str(s);

    let digest = Sha1::default().hash(s.as_bytes());
    assert!(f.query_bytes(s.as_bytes()));
    assert!(f.query_sha(&digest));
    assert!(f.query_str(s));
}

#[test]
fn insert_is_commutative() {
    let strings = ["alpha", "bravo", "charlie", "delta", "echo"];

    let mut forward = Filter::new_with_prng(4, 12, &mut TestRng::seeded(5)).unwrap();
    for s in strings {
        forward.insert_str(s);
    }

    let mut reversed = Filter::new_with_prng(4, 12, &mut TestRng::seeded(5)).unwrap();
    for s in strings.iter().rev() {
        reversed.insert_str(s);
    }

    for s in strings {
        assert_eq!(forward.query_str(s), reversed.query_str(s));
    }
}

#[test]
fn insert_is_idempotent() {
    let mut once = Filter::new_with_prng(4, 12, &mut TestRng::seeded(6)).unwrap();
    once.insert_str("repeated");

    let mut twice = Filter::new_with_prng(4, 12, &mut TestRng::seeded(6)).unwrap();
    twice.insert_str("repeated");
    twice.insert_str("repeated");

    assert!(once.query_str("repeated"));
    assert!(twice.query_str("repeated"));
}

#[test]
fn empirical_false_positive_rate_is_bounded() {
    let (k, b) = crate::optimal_params(20_000, 0.01);
    let mut f = Filter::new_with_prng(k, b, &mut TestRng::seeded(7)).unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let members = crate::test::random_strings(&mut rng, 20_000, 40);
    for s in &members {
        f.insert_str(s);
    }

    let members: std::collections::HashSet<_> = members.into_iter().collect();
    let probes = crate::test::random_strings(&mut rng, 5_000, 40);
    let false_positives = probes
        .iter()
        .filter(|s| !members.contains(*s) && f.query_str(s))
        .count();

    let rate = false_positives as f64 / probes.len() as f64;
    assert!(rate <= 0.02, "observed false positive rate {rate} exceeds 2%");
}

#[test]
fn default_prng_end_to_end() {
    let mut f = Filter::new(3, 10).unwrap();
    f.insert_str("hunter2");
    assert!(f.query_str("hunter2"));
}

#[test]
fn zero_k_is_param_error() {
    assert!(matches!(
        Filter::new_with_prng(0, 10, &mut TestRng::seeded(8)),
        Err(crate::BloomError::ParamError)
    ));
}

#[test]
fn zero_b_is_param_error() {
    assert!(matches!(
        Filter::new_with_prng(10, 0, &mut TestRng::seeded(8)),
        Err(crate::BloomError::ParamError)
    ));
}

#[test]
fn accepts_a_closure_as_prng() {
    let mut counter = 0u64;
    let mut prng = move |upper: u64| {
        counter = counter.wrapping_add(1);
        counter % upper
    };
    let f = Filter::new_with_prng(3, 8, &mut prng).unwrap();
    assert_eq!(f.k(), 3);
    assert_eq!(f.b(), 8);
}

#[test]
fn b_over_limit_is_too_big() {
    let over = (crate::B_MAX + 1) as u8;
    assert!(matches!(
        Filter::new_with_prng(10, over, &mut TestRng::seeded(8)),
        Err(crate::BloomError::TooBig)
    ));
}
