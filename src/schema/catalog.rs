//! Built-in contract definitions
//!
//! The two production contracts. Both seed under the `LPN` key prefix; they
//! differ in record shape and operation names. The LPN contract tracks the
//! four DSCSA serialization fields and allows expiry rewrites; the Barcode
//! contract stores the whole GS1 application-identifier string as one field
//! and has no selective update.

use super::types::{ContractDefinition, OperationNames};

fn row(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The four-field LPN trace contract.
pub fn lpn() -> ContractDefinition {
    ContractDefinition {
        contract_id: "lpn".to_string(),
        key_prefix: "LPN".to_string(),
        fields: vec![
            "GTIN".to_string(),
            "Serial".to_string(),
            "Lot".to_string(),
            "Expiry".to_string(),
        ],
        update_field: Some("Expiry".to_string()),
        seed_rows: vec![
            row(&["0030591255012", "102010203333", "APQPM15", "20171030"]),
            row(&["0030591255029", "102010203334", "APQPM15", "20171030"]),
            row(&["0030591255013", "102010203335", "APQPM15", "20171030"]),
            row(&["0030591255015", "102010203336", "APQPM15", "20171030"]),
        ],
        operations: OperationNames {
            seed: "initLedger".to_string(),
            create: "createLPN".to_string(),
            point_query: "queryLPN".to_string(),
            range_query: "queryAllLPNs".to_string(),
            field_update: Some("changeLPNExpiry".to_string()),
        },
    }
}

/// The single-field Barcode contract.
pub fn barcode() -> ContractDefinition {
    ContractDefinition {
        contract_id: "barcode".to_string(),
        key_prefix: "LPN".to_string(),
        fields: vec!["Barcode".to_string()],
        update_field: None,
        seed_rows: vec![
            row(&["(01)00356891234567(21)1000000000(10)APN3457(17)201231"]),
            row(&["(01)00356891234567(21)1000000003(10)APN3457(17)201231"]),
            row(&["(01)00356891234567(21)1000000004(10)APN3457(17)201231"]),
            row(&["(01)00356891234567(21)1000000005(10)APN3457(17)201231"]),
            row(&["(01)00356891234567(21)1000000006(10)APN3457(17)201231"]),
            row(&["(01)00356891234567(21)1000000007(10)APN3457(17)201231"]),
        ],
        operations: OperationNames {
            seed: "initLedger".to_string(),
            create: "createLpn".to_string(),
            point_query: "queryLpn".to_string(),
            range_query: "queryAllLpns".to_string(),
            field_update: None,
        },
    }
}
