use crate::{Store, StoreError};
use chrono::{FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const INVENTORY_FILE: &str = "rm-inventory.json";

/// One raw-material stock row as pushed by the external system. Field
/// names mirror that system's JSON keys exactly. The pusher derives its
/// rows from spreadsheets, so a "numeric" column can just as well carry
/// a string ("", "1,200") - every known column holds the raw JSON value
/// untouched, and unrecognized keys survive the round trip through
/// `extra`. Absent columns stay absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct InventoryItem {
    #[serde(rename = "MATERIAL GROUP", default, skip_serializing_if = "Value::is_null")]
    pub material_group: Value,
    #[serde(rename = "SKU Code", default, skip_serializing_if = "Value::is_null")]
    pub sku_code: Value,
    #[serde(rename = "Material Description", default, skip_serializing_if = "Value::is_null")]
    pub description: Value,
    #[serde(rename = "UOM", default, skip_serializing_if = "Value::is_null")]
    pub uom: Value,
    #[serde(rename = "Opening Stock", default, skip_serializing_if = "Value::is_null")]
    pub opening_stock: Value,
    #[serde(rename = "Today's In", default, skip_serializing_if = "Value::is_null")]
    pub today_in: Value,
    #[serde(rename = "Today's Out", default, skip_serializing_if = "Value::is_null")]
    pub today_out: Value,
    #[serde(rename = "Closing Stock", default, skip_serializing_if = "Value::is_null")]
    pub closing_stock: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The most recent inventory push. Replaced wholesale on every push; no
/// history is kept.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub last_updated: Option<String>,
    pub items: Vec<InventoryItem>,
}

/// Wall-clock timestamp in Pakistan Standard Time (fixed UTC+5, no DST),
/// e.g. "30 Aug 2026 14:05".
fn pkt_timestamp() -> String {
    let pkt = FixedOffset::east_opt(5 * 3600).expect("valid offset");
    Utc::now().with_timezone(&pkt).format("%d %b %Y %H:%M").to_string()
}

impl Store {
    /// Returns the last-pushed snapshot, or the empty snapshot (null
    /// timestamp, no items) before the first push.
    pub fn load_inventory(&self) -> Result<InventorySnapshot, StoreError> {
        Ok(self.read_document(INVENTORY_FILE)?.unwrap_or_default())
    }

    /// Overwrites the snapshot with the given items under a freshly
    /// generated timestamp, and returns what was stored.
    pub fn store_inventory(
        &self,
        items: Vec<InventoryItem>,
    ) -> Result<InventorySnapshot, StoreError> {
        let snapshot = InventorySnapshot {
            last_updated: Some(pkt_timestamp()),
            items,
        };
        self.write_document(INVENTORY_FILE, &snapshot)?;
        tracing::info!(items = snapshot.items.len(), "inventory snapshot replaced");
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_snapshot_is_empty_with_null_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let snapshot = store.load_inventory().unwrap();
        assert_eq!(snapshot.last_updated, None);
        assert!(snapshot.items.is_empty());
    }

    #[test]
    fn push_stamps_timestamp_and_round_trips_items() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let items = vec![InventoryItem {
            material_group: json!("CHEMICALS"),
            sku_code: json!("RM-0113"),
            description: json!("Caustic Soda Flakes"),
            uom: json!("KG"),
            opening_stock: json!(1200.0),
            today_in: json!(300.0),
            today_out: json!(150.5),
            closing_stock: json!(1349.5),
            extra: Map::new(),
        }];
        let stored = store.store_inventory(items.clone()).unwrap();
        assert!(stored.last_updated.is_some());

        let loaded = store.load_inventory().unwrap();
        assert_eq!(loaded.items, items);
        assert_eq!(loaded.last_updated, stored.last_updated);
    }

    #[test]
    fn unknown_keys_survive_the_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let raw = json!({
            "MATERIAL GROUP": "PACKAGING",
            "SKU Code": "PK-22",
            "row_number": 7,
            "Remarks": "short-dated"
        });
        let item: InventoryItem = serde_json::from_value(raw).unwrap();
        assert_eq!(item.extra.get("row_number"), Some(&json!(7)));
        // Absent columns stay absent rather than defaulting to a value.
        assert_eq!(item.opening_stock, Value::Null);

        store.store_inventory(vec![item.clone()]).unwrap();
        let loaded = store.load_inventory().unwrap();
        assert_eq!(loaded.items[0].extra.get("Remarks"), Some(&json!("short-dated")));
        let raw = serde_json::to_value(&loaded.items[0]).unwrap();
        assert!(raw.get("Opening Stock").is_none());
    }

    #[test]
    fn string_valued_stock_columns_round_trip_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        // Spreadsheet-derived pushes routinely carry blanks or formatted
        // numbers in the stock columns; they are stored as pushed.
        let raw = json!({
            "MATERIAL GROUP": "CHEMICALS",
            "SKU Code": 40113,
            "Opening Stock": "",
            "Today's In": "1,200",
            "Closing Stock": 980.5
        });
        let item: InventoryItem = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(item.today_in, json!("1,200"));
        assert_eq!(item.sku_code, json!(40113));

        store.store_inventory(vec![item]).unwrap();
        let loaded = store.load_inventory().unwrap();
        assert_eq!(serde_json::to_value(&loaded.items[0]).unwrap(), raw);
    }

    #[test]
    fn timestamp_has_the_expected_shape() {
        let ts = pkt_timestamp();
        // "30 Aug 2026 14:05" - day, month abbreviation, year, time.
        let parts: Vec<&str> = ts.split(' ').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0].len(), 2);
        assert_eq!(parts[1].len(), 3);
        assert_eq!(parts[2].len(), 4);
        assert!(parts[3].contains(':'));
    }
}
