//! Contract handler
//!
//! One handler serves one contract definition against whatever ledger the
//! host passes in. Each invocation is a single synchronous call: validate
//! arity, touch the ledger in written order, build a payload. The handler
//! keeps no cross-invocation state; the ledger is the only shared resource.
//!
//! Every error is recovered here and converted to a failure [`Response`];
//! nothing propagates to the host as a panic or process exit.

use crate::keys;
use crate::ledger::Ledger;
use crate::observability::{Event, Logger};
use crate::record::Record;
use crate::schema::{ContractDefinition, DefinitionError};

use super::errors::{ContractError, ContractResult};
use super::response::Response;
use super::router::{Operation, Router};

/// Executes a contract's operations against a ledger.
pub struct ContractHandler {
    /// The contract served by this handler
    definition: ContractDefinition,

    /// Static operation-name table
    router: Router,
}

impl ContractHandler {
    /// Creates a handler for a definition, validating it first.
    pub fn new(definition: ContractDefinition) -> Result<Self, DefinitionError> {
        definition
            .validate_structure()
            .map_err(|reason| DefinitionError::invalid(&definition.contract_id, reason))?;
        let router = Router::from_definition(&definition);
        Ok(Self { definition, router })
    }

    /// The definition this handler serves.
    pub fn definition(&self) -> &ContractDefinition {
        &self.definition
    }

    /// Instantiation entry point. Always succeeds; touches no ledger state.
    pub fn init(&self) -> Response {
        Response::ok()
    }

    /// Invocation entry point: dispatch by exact operation name.
    pub fn invoke(&self, ledger: &mut dyn Ledger, function: &str, args: &[String]) -> Response {
        let result = match self.router.resolve(function) {
            Some(Operation::Seed) => self.handle_seed(ledger),
            Some(Operation::Create) => self.handle_create(ledger, args),
            Some(Operation::PointQuery) => self.handle_point_query(ledger, args),
            Some(Operation::RangeQueryAll) => self.handle_range_query_all(ledger),
            Some(Operation::FieldUpdate { field_index }) => {
                self.handle_field_update(ledger, args, field_index)
            }
            None => Err(ContractError::UnknownOperation),
        };

        match result {
            Ok(payload) => Response::success(payload),
            Err(e) => {
                let reason = e.to_string();
                Logger::warn(
                    Event::InvokeRejected.as_str(),
                    &[("function", function), ("reason", reason.as_str())],
                );
                Response::failure(&e)
            }
        }
    }

    /// Seed: write the definition's rows under sequential index keys.
    ///
    /// Arity 0; stray arguments are ignored rather than rejected. Writes occur
    /// in ascending index order, one put per row. Re-running overwrites the
    /// same keys with the same values.
    fn handle_seed(&self, ledger: &mut dyn Ledger) -> ContractResult<Vec<u8>> {
        for (index, row) in self.definition.seed_rows.iter().enumerate() {
            let key = keys::index_key(&self.definition.key_prefix, index);
            let record = Record::from_values(&self.definition, row);
            ledger.put(&key, record.to_bytes(&self.definition))?;

            let index_field = index.to_string();
            Logger::info(
                Event::SeedRecordWritten.as_str(),
                &[("index", index_field.as_str()), ("key", key.as_str())],
            );
        }

        let rows = self.definition.seed_rows.len().to_string();
        Logger::info(Event::SeedComplete.as_str(), &[("rows", rows.as_str())]);
        Ok(Vec::new())
    }

    /// Create: write one record under a caller-supplied key.
    ///
    /// Expects the key plus one value per schema field, in declared order.
    /// Values are accepted as-is; an existing entry under the key is
    /// overwritten.
    fn handle_create(&self, ledger: &mut dyn Ledger, args: &[String]) -> ContractResult<Vec<u8>> {
        let expected = self.definition.create_arity();
        if args.len() != expected {
            return Err(ContractError::argument_count(expected));
        }

        let record = Record::from_values(&self.definition, &args[1..]);
        ledger.put(&args[0], record.to_bytes(&self.definition))?;
        Ok(Vec::new())
    }

    /// Point query: return the raw stored bytes for a key.
    ///
    /// A read miss is success with an empty payload, not a failure — callers
    /// distinguish "absent" by the empty payload. Stored bytes come back
    /// unmodified, with no re-serialization round trip.
    fn handle_point_query(&self, ledger: &mut dyn Ledger, args: &[String]) -> ContractResult<Vec<u8>> {
        if args.len() != 1 {
            return Err(ContractError::argument_count(1));
        }

        let stored = ledger.get(&args[0])?;
        Ok(stored.unwrap_or_default())
    }

    /// Range query: assemble every in-range entry into one JSON array.
    ///
    /// Elements appear in cursor delivery order; the handler does not sort.
    /// The cursor is released on every exit path. A cursor error aborts the
    /// whole query — no partial array is ever returned.
    fn handle_range_query_all(&self, ledger: &mut dyn Ledger) -> ContractResult<Vec<u8>> {
        let (start, end) = keys::full_scan_bounds(&self.definition.key_prefix);
        let mut cursor = ledger.range_scan(&start, &end)?;

        let mut fragments: Vec<Vec<u8>> = Vec::new();
        while cursor.has_next() {
            let (key, value) = match cursor.next() {
                Ok(entry) => entry,
                Err(e) => {
                    cursor.close();
                    return Err(e.into());
                }
            };
            fragments.push(entry_fragment(&key, &value));
        }
        cursor.close();

        let elements = fragments.len().to_string();
        let body = fragments.join(&b","[..]);
        let mut payload = Vec::with_capacity(body.len() + 2);
        payload.push(b'[');
        payload.extend_from_slice(&body);
        payload.push(b']');

        Logger::info(
            Event::RangeScanComplete.as_str(),
            &[("elements", elements.as_str())],
        );
        Ok(payload)
    }

    /// Field update: rewrite the designated field of one record.
    ///
    /// Reads whatever is under the key with no existence check: an absent key
    /// decodes to the zero record, so the update materializes a record with
    /// only the designated field populated.
    fn handle_field_update(
        &self,
        ledger: &mut dyn Ledger,
        args: &[String],
        field_index: usize,
    ) -> ContractResult<Vec<u8>> {
        if args.len() != 2 {
            return Err(ContractError::argument_count(2));
        }

        let stored = ledger.get(&args[0])?.unwrap_or_default();
        let mut record = Record::from_bytes(&self.definition, &stored)?;
        record.set_field(field_index, args[1].clone());
        ledger.put(&args[0], record.to_bytes(&self.definition))?;
        Ok(Vec::new())
    }
}

/// One range-query array element: `{"Key":<key>,"Record":<stored bytes>}`.
///
/// The stored value is already serialized JSON and is embedded as-is, not
/// re-escaped. The key goes through JSON string escaping so the array stays
/// well-formed for any key a caller chose.
fn entry_fragment(key: &str, value: &[u8]) -> Vec<u8> {
    let escaped_key = serde_json::to_string(key).expect("key serialization cannot fail");

    let mut fragment = Vec::with_capacity(escaped_key.len() + value.len() + 12);
    fragment.extend_from_slice(b"{\"Key\":");
    fragment.extend_from_slice(escaped_key.as_bytes());
    fragment.extend_from_slice(b",\"Record\":");
    fragment.extend_from_slice(value);
    fragment.push(b'}');
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;
    use crate::schema::catalog;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn lpn_handler() -> ContractHandler {
        ContractHandler::new(catalog::lpn()).unwrap()
    }

    #[test]
    fn test_init_succeeds_without_ledger() {
        let handler = lpn_handler();
        let resp = handler.init();
        assert!(resp.is_success());
        assert_eq!(resp.payload(), Some(&b""[..]));
    }

    #[test]
    fn test_invalid_definition_rejected_at_construction() {
        let mut def = catalog::lpn();
        def.key_prefix = String::new();
        assert!(ContractHandler::new(def).is_err());
    }

    #[test]
    fn test_unknown_function_name() {
        let handler = lpn_handler();
        let mut ledger = MemoryLedger::new();

        let resp = handler.invoke(&mut ledger, "transferLPN", &[]);
        assert!(!resp.is_success());
        assert_eq!(resp.message(), Some("Invalid Smart Contract function name."));
    }

    #[test]
    fn test_seed_writes_rows_in_index_order() {
        let handler = lpn_handler();
        let mut ledger = MemoryLedger::new();

        let resp = handler.invoke(&mut ledger, "initLedger", &[]);
        assert!(resp.is_success());
        assert_eq!(ledger.len(), 4);

        let keys: Vec<&String> = ledger.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, ["LPN0", "LPN1", "LPN2", "LPN3"]);
    }

    #[test]
    fn test_point_query_returns_stored_bytes_unmodified() {
        let handler = lpn_handler();
        let mut ledger = MemoryLedger::new();

        // Bytes that are not canonical record JSON still come back as-is.
        ledger.put("LPN7", b"{\"GTIN\":\"g\"}".to_vec()).unwrap();
        let resp = handler.invoke(&mut ledger, "queryLPN", &args(&["LPN7"]));
        assert_eq!(resp.payload(), Some(&b"{\"GTIN\":\"g\"}"[..]));
    }

    #[test]
    fn test_field_update_on_absent_key_materializes_partial_record() {
        let handler = lpn_handler();
        let mut ledger = MemoryLedger::new();

        let resp = handler.invoke(&mut ledger, "changeLPNExpiry", &args(&["LPN42", "20991231"]));
        assert!(resp.is_success());

        // The quirk: only the designated field is populated.
        let stored = ledger.get("LPN42").unwrap().unwrap();
        assert_eq!(
            String::from_utf8(stored).unwrap(),
            r#"{"GTIN":"","Serial":"","Lot":"","Expiry":"20991231"}"#
        );
    }

    #[test]
    fn test_field_update_on_corrupt_bytes_fails() {
        let handler = lpn_handler();
        let mut ledger = MemoryLedger::new();
        ledger.put("LPN1", b"not json".to_vec()).unwrap();

        let resp = handler.invoke(&mut ledger, "changeLPNExpiry", &args(&["LPN1", "20991231"]));
        assert!(!resp.is_success());
        assert!(resp.message().unwrap().contains("Malformed record"));

        // The corrupt bytes were not overwritten.
        assert_eq!(ledger.get("LPN1").unwrap(), Some(b"not json".to_vec()));
    }

    #[test]
    fn test_entry_fragment_escapes_key_and_embeds_value_raw() {
        let fragment = entry_fragment("LPN\"0", br#"{"Barcode":"b"}"#);
        let text = String::from_utf8(fragment).unwrap();
        assert_eq!(text, r#"{"Key":"LPN\"0","Record":{"Barcode":"b"}}"#);
    }
}
