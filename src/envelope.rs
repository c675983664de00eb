//! Per-endpoint reshaping of decoded response envelopes.
//!
//! Each function takes the decoded top-level JSON value and pulls out the
//! sub-structure its endpoint documents. A missing key, a node of the wrong
//! shape, or an empty container yields [`Lookup::Empty`]; these functions
//! never produce [`Lookup::Unavailable`].

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::Lookup;

/// A generic JSON object returned by the service.
pub type Record = Map<String, Value>;

const CENSUS_BLOCK_KEYS: [&str; 3] = ["Block", "County", "State"];

/// `SpeedTestCounty` object from `/api/speedtest/find`.
pub fn speed_test_county(envelope: Value) -> Lookup<Record> {
    object_at(envelope, "SpeedTestCounty")
}

/// `Block`, `County` and `State` from `/api/block/find`; every other key is dropped.
pub fn census_block(envelope: Value) -> Lookup<Record> {
    let Value::Object(mut object) = envelope else {
        return Lookup::Empty;
    };

    let block: Record = CENSUS_BLOCK_KEYS
        .iter()
        .filter_map(|key| object.remove(*key).map(|value| ((*key).to_owned(), value)))
        .collect();
    non_empty_record(block)
}

/// `Frns.Frn` from `/api/frn/getList`, keyed by each record's `frn`.
///
/// Records without an `frn` are skipped; a repeated FRN keeps the last record.
pub fn frn_list(envelope: Value) -> Lookup<BTreeMap<String, Record>> {
    let by_frn: BTreeMap<String, Record> = records_at(envelope, "Frns", "Frn")
        .into_iter()
        .filter_map(|record| frn_key(&record).map(|frn| (frn, record)))
        .collect();

    if by_frn.is_empty() {
        Lookup::Empty
    } else {
        Lookup::Found(by_frn)
    }
}

/// `Info` object from `/api/frn/getInfo`.
pub fn frn_info(envelope: Value) -> Lookup<Record> {
    object_at(envelope, "Info")
}

/// `Licenses.License` from the license search endpoint.
pub fn licenses(envelope: Value) -> Lookup<Vec<Record>> {
    non_empty_records(records_at(envelope, "Licenses", "License"))
}

/// `Stats.Stat` shared by every license statistics endpoint.
pub fn stats(envelope: Value) -> Lookup<Vec<Record>> {
    non_empty_records(records_at(envelope, "Stats", "Stat"))
}

fn take(value: Value, key: &str) -> Option<Value> {
    match value {
        Value::Object(mut object) => object.remove(key),
        _ => None,
    }
}

fn object_at(envelope: Value, key: &str) -> Lookup<Record> {
    match take(envelope, key) {
        Some(Value::Object(record)) => non_empty_record(record),
        _ => Lookup::Empty,
    }
}

// The service renders a one-element list as a bare object.
fn records_at(envelope: Value, outer: &str, inner: &str) -> Vec<Record> {
    match take(envelope, outer).and_then(|node| take(node, inner)) {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(record) => Some(record),
                _ => None,
            })
            .collect(),
        Some(Value::Object(record)) => vec![record],
        _ => Vec::new(),
    }
}

fn frn_key(record: &Record) -> Option<String> {
    match record.get("frn")? {
        Value::String(frn) => Some(frn.clone()),
        Value::Number(frn) => Some(frn.to_string()),
        _ => None,
    }
}

fn non_empty_record(record: Record) -> Lookup<Record> {
    if record.is_empty() {
        Lookup::Empty
    } else {
        Lookup::Found(record)
    }
}

fn non_empty_records(records: Vec<Record>) -> Lookup<Vec<Record>> {
    if records.is_empty() {
        Lookup::Empty
    } else {
        Lookup::Found(records)
    }
}
