//! Range query assembly tests
//!
//! The range query must produce one syntactically valid JSON array whose
//! elements follow cursor delivery order, with stored record bytes embedded
//! as JSON rather than re-escaped strings. A cursor error aborts the whole
//! query, returns no partial array, and still releases the cursor.

use std::cell::Cell;
use std::rc::Rc;

use lpnstore::contract::ContractHandler;
use lpnstore::ledger::{Ledger, LedgerError, LedgerResult, MemoryLedger, RangeCursor};
use lpnstore::schema::catalog;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn lpn_handler() -> ContractHandler {
    ContractHandler::new(catalog::lpn()).unwrap()
}

fn parse_array(payload: &[u8]) -> Vec<serde_json::Value> {
    let parsed: serde_json::Value =
        serde_json::from_slice(payload).expect("range payload must be valid JSON");
    parsed.as_array().expect("range payload must be an array").clone()
}

// =============================================================================
// Array shape and ordering
// =============================================================================

#[test]
fn test_empty_ledger_yields_empty_array() {
    let handler = lpn_handler();
    let mut ledger = MemoryLedger::new();

    let resp = handler.invoke(&mut ledger, "queryAllLPNs", &[]);
    assert!(resp.is_success());
    assert_eq!(resp.payload(), Some(&b"[]"[..]));
}

#[test]
fn test_seeded_ledger_yields_all_records_in_cursor_order() {
    let handler = lpn_handler();
    let mut ledger = MemoryLedger::new();
    handler.invoke(&mut ledger, "initLedger", &[]);

    let resp = handler.invoke(&mut ledger, "queryAllLPNs", &[]);
    let elements = parse_array(resp.payload().unwrap());

    assert_eq!(elements.len(), 4);
    let keys: Vec<&str> = elements.iter().map(|e| e["Key"].as_str().unwrap()).collect();
    assert_eq!(keys, ["LPN0", "LPN1", "LPN2", "LPN3"]);
    assert_eq!(elements[0]["Record"]["GTIN"], "0030591255012");
}

#[test]
fn test_order_is_lexicographic_not_numeric() {
    let handler = lpn_handler();
    let mut ledger = MemoryLedger::new();
    handler.invoke(&mut ledger, "initLedger", &[]);
    handler.invoke(&mut ledger, "createLPN", &args(&["LPN10", "g", "s", "l", "e"]));

    let resp = handler.invoke(&mut ledger, "queryAllLPNs", &[]);
    let elements = parse_array(resp.payload().unwrap());

    // The ledger iterates lexicographically, so LPN10 lands between LPN1 and LPN2.
    let keys: Vec<&str> = elements.iter().map(|e| e["Key"].as_str().unwrap()).collect();
    assert_eq!(keys, ["LPN0", "LPN1", "LPN10", "LPN2", "LPN3"]);
}

#[test]
fn test_record_embedded_as_json_object_not_string() {
    let handler = lpn_handler();
    let mut ledger = MemoryLedger::new();
    handler.invoke(&mut ledger, "createLPN", &args(&["LPN5", "g", "s", "l", "e"]));

    let resp = handler.invoke(&mut ledger, "queryAllLPNs", &[]);
    let elements = parse_array(resp.payload().unwrap());
    assert!(
        elements[0]["Record"].is_object(),
        "stored bytes must be embedded as JSON, not re-escaped"
    );
}

// =============================================================================
// Bound behavior
// =============================================================================

#[test]
fn test_keys_at_or_beyond_999_are_excluded() {
    let handler = lpn_handler();
    let mut ledger = MemoryLedger::new();
    handler.invoke(&mut ledger, "createLPN", &args(&["LPN998", "g", "s", "l", "e"]));
    handler.invoke(&mut ledger, "createLPN", &args(&["LPN999", "g", "s", "l", "e"]));
    handler.invoke(&mut ledger, "createLPN", &args(&["LPNZZZ", "g", "s", "l", "e"]));

    let resp = handler.invoke(&mut ledger, "queryAllLPNs", &[]);
    let elements = parse_array(resp.payload().unwrap());

    // Documented lexicographic bound: LPN998 is the last key the scan covers.
    let keys: Vec<&str> = elements.iter().map(|e| e["Key"].as_str().unwrap()).collect();
    assert_eq!(keys, ["LPN998"]);
}

#[test]
fn test_foreign_prefix_keys_are_excluded() {
    let handler = lpn_handler();
    let mut ledger = MemoryLedger::new();
    handler.invoke(&mut ledger, "initLedger", &[]);
    handler.invoke(&mut ledger, "createLPN", &args(&["CRATE7", "g", "s", "l", "e"]));

    let resp = handler.invoke(&mut ledger, "queryAllLPNs", &[]);
    assert_eq!(parse_array(resp.payload().unwrap()).len(), 4);
}

#[test]
fn test_element_count_matches_in_range_entries() {
    let handler = lpn_handler();
    let mut ledger = MemoryLedger::new();
    handler.invoke(&mut ledger, "initLedger", &[]);
    for i in 0..20 {
        let key = format!("LPN{}", 100 + i);
        handler.invoke(&mut ledger, "createLPN", &args(&[&key, "g", "s", "l", "e"]));
    }

    let resp = handler.invoke(&mut ledger, "queryAllLPNs", &[]);
    assert_eq!(parse_array(resp.payload().unwrap()).len(), 24);
}

// =============================================================================
// Cursor failure: abort, no partial output, cursor released
// =============================================================================

/// Accessor whose cursor yields one entry and then fails, recording release.
struct FlakyLedger {
    released: Rc<Cell<bool>>,
}

struct FlakyCursor {
    yielded: bool,
    released: Rc<Cell<bool>>,
}

impl Ledger for FlakyLedger {
    fn get(&self, _key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(None)
    }

    fn put(&mut self, _key: &str, _value: Vec<u8>) -> LedgerResult<()> {
        Ok(())
    }

    fn range_scan(&self, _start: &str, _end: &str) -> LedgerResult<Box<dyn RangeCursor + '_>> {
        Ok(Box::new(FlakyCursor {
            yielded: false,
            released: Rc::clone(&self.released),
        }))
    }
}

impl RangeCursor for FlakyCursor {
    fn has_next(&self) -> bool {
        true
    }

    fn next(&mut self) -> LedgerResult<(String, Vec<u8>)> {
        if !self.yielded {
            self.yielded = true;
            return Ok(("LPN0".to_string(), br#"{"GTIN":"g"}"#.to_vec()));
        }
        Err(LedgerError::new("snapshot released during iteration"))
    }

    fn close(&mut self) {
        self.released.set(true);
    }
}

#[test]
fn test_cursor_error_aborts_and_releases() {
    let handler = lpn_handler();
    let released = Rc::new(Cell::new(false));
    let mut ledger = FlakyLedger {
        released: Rc::clone(&released),
    };

    let resp = handler.invoke(&mut ledger, "queryAllLPNs", &[]);

    assert!(!resp.is_success(), "a cursor error must fail the whole query");
    assert_eq!(
        resp.message(),
        Some("snapshot released during iteration"),
        "the accessor's own error text passes through verbatim"
    );
    assert_eq!(resp.payload(), None, "no partial array on failure");
    assert!(released.get(), "the cursor must be released on the error path");
}

/// Accessor that refuses to open a range at all.
struct ClosedLedger;

impl Ledger for ClosedLedger {
    fn get(&self, _key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Err(LedgerError::new("ledger handle closed"))
    }

    fn put(&mut self, _key: &str, _value: Vec<u8>) -> LedgerResult<()> {
        Err(LedgerError::new("ledger handle closed"))
    }

    fn range_scan(&self, _start: &str, _end: &str) -> LedgerResult<Box<dyn RangeCursor + '_>> {
        Err(LedgerError::new("ledger handle closed"))
    }
}

#[test]
fn test_accessor_failures_surface_as_failure_responses() {
    let handler = lpn_handler();
    let mut ledger = ClosedLedger;

    for (name, call_args) in [
        ("queryAllLPNs", vec![]),
        ("queryLPN", args(&["LPN0"])),
        ("initLedger", vec![]),
        ("changeLPNExpiry", args(&["LPN0", "20401231"])),
    ] {
        let resp = handler.invoke(&mut ledger, name, &call_args);
        assert!(!resp.is_success(), "{} must fail", name);
        assert_eq!(resp.message(), Some("ledger handle closed"));
    }
}
