use std::collections::BTreeSet;

use reposync::core::matcher::{match_repos, Connector, Term};

fn names() -> Vec<&'static str> {
    vec!["foo-a", "foo-b", "bar-a"]
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn single_term_seeds_the_accumulator() {
    let terms = vec![Term::new("foo-*", Connector::And)];
    let matched = match_repos(&terms, names()).unwrap();
    assert_eq!(matched, set(&["foo-a", "foo-b"]));
}

#[test]
fn first_connector_is_ignored() {
    // an Or on the first term must not union with an empty accumulator
    let and_first = match_repos(&[Term::new("foo-*", Connector::And)], names()).unwrap();
    let or_first = match_repos(&[Term::new("foo-*", Connector::Or)], names()).unwrap();
    assert_eq!(and_first, or_first);
}

#[test]
fn and_fold_is_intersection() {
    let terms = vec![
        Term::new("foo-*", Connector::And),
        Term::new("*-a", Connector::And),
    ];
    let matched = match_repos(&terms, names()).unwrap();
    assert_eq!(matched, set(&["foo-a"]));
}

#[test]
fn or_fold_is_union() {
    let terms = vec![
        Term::new("foo-*", Connector::And),
        Term::new("*-a", Connector::Or),
    ];
    let matched = match_repos(&terms, names()).unwrap();
    assert_eq!(matched, set(&["foo-a", "foo-b", "bar-a"]));
}

#[test]
fn mixed_fold_is_order_dependent() {
    // (foo-* ∪ bar-*) ∩ *-b
    let union_first = vec![
        Term::new("foo-*", Connector::And),
        Term::new("bar-*", Connector::Or),
        Term::new("*-b", Connector::And),
    ];
    // (foo-* ∩ *-b) ∪ bar-*
    let intersection_first = vec![
        Term::new("foo-*", Connector::And),
        Term::new("*-b", Connector::And),
        Term::new("bar-*", Connector::Or),
    ];

    let left = match_repos(&union_first, names()).unwrap();
    let right = match_repos(&intersection_first, names()).unwrap();

    assert_eq!(left, set(&["foo-b"]));
    assert_eq!(right, set(&["foo-b", "bar-a"]));
    assert_ne!(left, right);
}

#[test]
fn bare_pattern_matches_as_substring() {
    let terms = vec![Term::new("oo", Connector::And)];
    let matched = match_repos(&terms, names()).unwrap();
    assert_eq!(matched, set(&["foo-a", "foo-b"]));
}

#[test]
fn zero_matches_is_not_an_error() {
    let terms = vec![Term::new("qux-*", Connector::And)];
    let matched = match_repos(&terms, names()).unwrap();
    assert!(matched.is_empty());
}

#[test]
fn empty_term_list_is_an_error() {
    assert!(match_repos(&[], names()).is_err());
}

#[test]
fn duplicate_names_collapse_into_a_set() {
    let terms = vec![Term::new("foo-*", Connector::And)];
    let matched = match_repos(&terms, vec!["foo-a", "foo-a", "foo-b"]).unwrap();
    assert_eq!(matched, set(&["foo-a", "foo-b"]));
}
