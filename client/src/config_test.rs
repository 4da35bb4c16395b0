use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn from_lookup_defaults_when_missing() {
    assert_eq!(ClientConfig::from_lookup(|_| None), ClientConfig::default());
}

#[test]
fn from_lookup_reads_and_trims_values() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        (META_API_BASE, " https://id.example.com/v1/ "),
        (META_MIN_SECRET_LEN, "12"),
    ]));
    assert_eq!(cfg.api_base, "https://id.example.com/v1");
    assert_eq!(cfg.min_secret_len, 12);
}

#[test]
fn from_lookup_ignores_malformed_values() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[(META_API_BASE, "  "), (META_MIN_SECRET_LEN, "0")]));
    assert_eq!(cfg, ClientConfig::default());

    let cfg = ClientConfig::from_lookup(lookup_from(&[(META_MIN_SECRET_LEN, "eight")]));
    assert_eq!(cfg.min_secret_len, DEFAULT_MIN_SECRET_LEN);
}

#[test]
fn meta_tags_round_trip_through_lookup() {
    let cfg = ClientConfig { api_base: "/auth".to_owned(), min_secret_len: 10 };
    let tags = cfg.meta_tags();
    let pairs: Vec<(&str, &str)> = tags.iter().map(|(k, v)| (*k, v.as_str())).collect();
    assert_eq!(ClientConfig::from_lookup(lookup_from(&pairs)), cfg);
}
