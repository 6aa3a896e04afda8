//! FixedOrderRanking invariants
//!
//! - ranks follow presentation order; aliases compare equal
//! - the first comparison locks the ranking for good
//! - unranked elements follow the configured policy

use crate::test_utils::*;
use constrained::{CollectionsConfig, Registration};
use std::cmp::Ordering;

fn s(value: &str) -> String {
    value.to_string()
}

#[test]
fn invariant_planet_ordering() {
    let mut ranking = planet_ranking();
    assert_eq!(ranking.compare(&s("Mercury"), &s("Earth")).unwrap(), Ordering::Less);
    assert_eq!(ranking.compare(&s("Mars"), &s("Venus")).unwrap(), Ordering::Greater);
    assert_eq!(ranking.compare(&s("Venus"), &s("Earth")).unwrap(), Ordering::Equal);
}

#[test]
fn invariant_comparison_locks_registration() {
    let mut ranking = planet_ranking();
    assert_eq!(ranking.register(s("Jupiter")).unwrap(), Registration::Added);

    ranking.compare(&s("Mercury"), &s("Jupiter")).unwrap();

    assert_eq!(ranking.register(s("Saturn")), Err(CollectionError::LockedRanking));
    assert_eq!(
        ranking.register(s("Mercury")),
        Err(CollectionError::LockedRanking)
    );
    assert!(!ranking.contains(&s("Saturn")));
}

#[test]
fn invariant_before_policy() {
    let mut ranking = planet_ranking();
    ranking.set_unranked_policy(UnrankedPolicy::Before).unwrap();
    for planet in ["Mercury", "Venus", "Earth", "Mars"] {
        assert_eq!(ranking.compare(&s("Pluto"), &s(planet)).unwrap(), Ordering::Less);
    }
    assert_eq!(ranking.compare(&s("Pluto"), &s("Eris")).unwrap(), Ordering::Equal);
}

#[test]
fn invariant_after_policy() {
    let mut ranking = planet_ranking();
    ranking.set_unranked_policy(UnrankedPolicy::After).unwrap();
    for planet in ["Mercury", "Venus", "Earth", "Mars"] {
        assert_eq!(ranking.compare(&s("Pluto"), &s(planet)).unwrap(), Ordering::Greater);
        assert_eq!(ranking.compare(&s(planet), &s("Pluto")).unwrap(), Ordering::Less);
    }
}

#[test]
fn invariant_error_policy_rejects_unranked() {
    let mut ranking = planet_ranking();
    assert_eq!(ranking.unranked_policy(), UnrankedPolicy::Error);
    assert_eq!(
        ranking.compare(&s("Pluto"), &s("Mars")),
        Err(CollectionError::unknown_element(&s("Pluto")))
    );
    assert_eq!(
        ranking.compare(&s("Mars"), &s("Pluto")),
        Err(CollectionError::unknown_element(&s("Pluto")))
    );
}

#[test]
fn invariant_policy_from_config_file_text() {
    let config = CollectionsConfig::from_toml_str("unranked_policy = \"after\"").unwrap();
    let mut ranking = FixedOrderRanking::from_config([1, 2, 3], &config).unwrap();
    assert_eq!(ranking.compare(&99, &1).unwrap(), Ordering::Greater);
}

#[test]
fn invariant_sort_matches_pairwise_compare() {
    let mut ranking = planet_ranking();
    let mut planets = ["Mars", "Venus", "Mercury", "Earth"].map(String::from).to_vec();
    ranking.sort(&mut planets).unwrap();

    for pair in planets.windows(2) {
        assert_ne!(
            ranking.compare(&pair[0], &pair[1]).unwrap(),
            Ordering::Greater
        );
    }
}
