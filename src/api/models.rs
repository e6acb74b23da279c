//! Data models for the property-management REST API.
//!
//! Contains tenant, property and transaction records plus the normalization
//! of list responses into one canonical shape.

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tenant record as returned by the backend.
///
/// Only `id` and `name` are guaranteed to be present; every other field may
/// be null or missing depending on how the record was created.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Tenant {
    /// Server-assigned identifier
    pub id: i64,
    /// Tenant name
    pub name: String,
    /// Foreign key into the property table
    #[serde(default)]
    pub property_id: Option<i64>,
    /// Human-readable address, resolved server-side
    #[serde(default)]
    pub property_address: Option<String>,
    #[serde(default)]
    pub passport: Option<String>,
    /// ISO date string, possibly with an embedded time component
    #[serde(default)]
    pub passport_validity: Option<String>,
    #[serde(default)]
    pub aadhar_no: Option<String>,
    #[serde(default)]
    pub employment_details: Option<String>,
    #[serde(default)]
    pub permanent_address: Option<String>,
    #[serde(default)]
    pub contact_no: Option<String>,
    #[serde(default)]
    pub emergency_contact_no: Option<String>,
    /// Monthly rent amount
    #[serde(default)]
    pub rent: Option<f64>,
    /// Security deposit amount
    #[serde(default)]
    pub security: Option<f64>,
    #[serde(default)]
    pub move_in_date: Option<String>,
    #[serde(default)]
    pub contract_start_date: Option<String>,
    #[serde(default)]
    pub contract_expiry_date: Option<String>,
}

impl Tenant {
    /// Whether the contract expiry falls inside the warning window.
    ///
    /// # Arguments
    /// * `now` - The reference instant, injected for testability
    pub fn expires_soon(&self, now: DateTime<Utc>) -> bool {
        expires_soon(self.contract_expiry_date.as_deref(), now)
    }

    /// Label/value pairs for every attribute, in wire-field order.
    ///
    /// Used by the detail view, which renders underscores in the labels as
    /// spaces. Missing values become empty strings.
    pub fn field_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.to_string()),
            ("name", self.name.clone()),
            (
                "property_id",
                self.property_id.map(|id| id.to_string()).unwrap_or_default(),
            ),
            ("property_address", text(&self.property_address)),
            ("passport", text(&self.passport)),
            ("passport_validity", text(&self.passport_validity)),
            ("aadhar_no", text(&self.aadhar_no)),
            ("employment_details", text(&self.employment_details)),
            ("permanent_address", text(&self.permanent_address)),
            ("contact_no", text(&self.contact_no)),
            ("emergency_contact_no", text(&self.emergency_contact_no)),
            ("rent", number(self.rent)),
            ("security", number(self.security)),
            ("move_in_date", text(&self.move_in_date)),
            ("contract_start_date", text(&self.contract_start_date)),
            ("contract_expiry_date", text(&self.contract_expiry_date)),
        ]
    }
}

/// Render an optional string field, empty when missing.
pub fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Render an optional numeric field, empty when missing.
pub fn number(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// A property record, used to populate the selector and resolve addresses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: i64,
    pub address: String,
    #[serde(default)]
    pub rent: Option<f64>,
    #[serde(default)]
    pub maintenance: Option<f64>,
}

/// The body sent on tenant create and update calls.
///
/// Free-text fields are submitted as entered, empty strings included; the
/// identifier is never part of the body (create is server-assigned, update
/// keys by path).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TenantPayload {
    pub name: String,
    pub property_id: i64,
    pub passport: String,
    pub passport_validity: String,
    pub aadhar_no: String,
    pub employment_details: String,
    pub permanent_address: String,
    pub contact_no: String,
    pub emergency_contact_no: String,
    pub rent: Option<f64>,
    pub security: Option<f64>,
    pub move_in_date: String,
    pub contract_start_date: String,
    pub contract_expiry_date: String,
}

/// One canonical page of tenants, regardless of the response shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TenantPage {
    pub tenants: Vec<Tenant>,
    /// Total page count reported by the server, at least 1
    pub pages: u32,
    /// Total record count across all pages
    pub total: u64,
}

impl Default for TenantPage {
    fn default() -> Self {
        Self {
            tenants: Vec::new(),
            pages: 1,
            total: 0,
        }
    }
}

/// A transaction row from the per-tenant transactions endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    /// Transaction kind, e.g. "payment_received"
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    #[serde(default)]
    pub for_month: Option<String>,
    #[serde(default)]
    pub transaction_date: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

/// Transactions for one tenant plus the server-computed running balance.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TransactionReport {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub total: f64,
}

/// Record counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub tenants: u64,
    pub properties: u64,
    pub transactions: u64,
}

/// Normalize a tenant list response into one canonical page.
///
/// # Details
/// List endpoints may return a bare array or an envelope object with a
/// `tenants` array plus `pages`/`total` metadata. Anything else degrades to
/// an empty page with a page count of 1, never an error.
pub fn normalize_tenant_page(value: Value) -> TenantPage {
    match value {
        Value::Array(items) => {
            let tenants = parse_rows(items);
            TenantPage {
                total: tenants.len() as u64,
                tenants,
                pages: 1,
            }
        }
        Value::Object(mut map) => {
            let tenants = match map.remove("tenants") {
                Some(Value::Array(items)) => parse_rows(items),
                _ => Vec::new(),
            };
            let pages = map
                .get("pages")
                .and_then(Value::as_u64)
                .map(|p| p.max(1) as u32)
                .unwrap_or(1);
            let total = map
                .get("total")
                .and_then(Value::as_u64)
                .unwrap_or(tenants.len() as u64);
            TenantPage {
                tenants,
                pages,
                total,
            }
        }
        _ => TenantPage::default(),
    }
}

/// Normalize a property list response, bare or enveloped under `properties`.
pub fn normalize_property_list(value: Value) -> Vec<Property> {
    match value {
        Value::Array(_) => serde_json::from_value(value).unwrap_or_default(),
        Value::Object(mut map) => map
            .remove("properties")
            .map(|v| serde_json::from_value(v).unwrap_or_default())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Record count of an unpaged list response.
///
/// Prefers `total` metadata, then the length of the named list, then the
/// length of a bare array. Unrecognized shapes count as zero.
pub fn normalize_count(value: &Value, list_key: &str) -> u64 {
    match value {
        Value::Array(items) => items.len() as u64,
        Value::Object(map) => map
            .get("total")
            .and_then(Value::as_u64)
            .or_else(|| {
                map.get(list_key)
                    .and_then(Value::as_array)
                    .map(|items| items.len() as u64)
            })
            .unwrap_or(0),
        _ => 0,
    }
}

fn parse_rows(items: Vec<Value>) -> Vec<Tenant> {
    serde_json::from_value(Value::Array(items)).unwrap_or_default()
}

/// Truncate an ISO date-time string to its date-only prefix.
///
/// # Details
/// The edit form and the expiry check both work on the first 10 characters
/// of whatever the server sent, so `2024-05-01T00:00:00Z` becomes
/// `2024-05-01`. Shorter strings pass through unchanged.
pub fn date_only(value: &str) -> String {
    value.chars().take(10).collect()
}

/// Whether `expiry` falls strictly between `now` and two calendar months
/// ahead of `now`.
///
/// # Details
/// Dates at or before `now`, at or past the window end, absent, or
/// unparseable are never flagged. The window end is computed with calendar
/// month arithmetic; chrono clamps the day-of-month at month ends.
pub fn expires_soon(expiry: Option<&str>, now: DateTime<Utc>) -> bool {
    let Some(raw) = expiry else {
        return false;
    };
    let Ok(date) = NaiveDate::parse_from_str(&date_only(raw), "%Y-%m-%d") else {
        return false;
    };
    let Some(expiry_at) = date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()) else {
        return false;
    };
    let Some(window_end) = now.checked_add_months(Months::new(2)) else {
        return false;
    };
    expiry_at > now && expiry_at < window_end
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_normalize_bare_array() {
        let value = json!([
            {"id": 1, "name": "Jane Doe"},
            {"id": 2, "name": "Raj Patel"}
        ]);
        let page = normalize_tenant_page(value);
        assert_eq!(page.tenants.len(), 2);
        assert_eq!(page.pages, 1);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_normalize_envelope() {
        let value = json!({
            "tenants": [{"id": 7, "name": "Jane Doe", "rent": 1200.0}],
            "pages": 4,
            "total": 31,
            "current_page": 2
        });
        let page = normalize_tenant_page(value);
        assert_eq!(page.tenants.len(), 1);
        assert_eq!(page.tenants[0].rent, Some(1200.0));
        assert_eq!(page.pages, 4);
        assert_eq!(page.total, 31);
    }

    #[test]
    fn test_normalize_envelope_without_pages() {
        let value = json!({"tenants": [{"id": 1, "name": "Jane Doe"}]});
        let page = normalize_tenant_page(value);
        assert_eq!(page.tenants.len(), 1);
        assert_eq!(page.pages, 1);
    }

    #[test]
    fn test_normalize_unrecognized_shape() {
        for value in [json!("nope"), json!(42), json!({"rows": [1, 2]})] {
            let page = normalize_tenant_page(value);
            assert!(page.tenants.is_empty());
            assert_eq!(page.pages, 1);
        }
    }

    #[test]
    fn test_normalize_property_list_shapes() {
        let bare = json!([{"id": 1, "address": "12 Hill Road"}]);
        assert_eq!(normalize_property_list(bare).len(), 1);

        let enveloped = json!({"properties": [{"id": 1, "address": "12 Hill Road"}]});
        assert_eq!(normalize_property_list(enveloped).len(), 1);

        assert!(normalize_property_list(json!("nope")).is_empty());
    }

    #[test]
    fn test_normalize_count() {
        assert_eq!(normalize_count(&json!([1, 2, 3]), "tenants"), 3);
        assert_eq!(normalize_count(&json!({"total": 42}), "tenants"), 42);
        assert_eq!(
            normalize_count(&json!({"tenants": [{}, {}]}), "tenants"),
            2
        );
        assert_eq!(normalize_count(&json!(null), "tenants"), 0);
    }

    #[test]
    fn test_date_only() {
        assert_eq!(date_only("2024-05-01T00:00:00Z"), "2024-05-01");
        assert_eq!(date_only("2024-05-01"), "2024-05-01");
        assert_eq!(date_only(""), "");
    }

    #[test]
    fn test_expires_soon_inside_window() {
        assert!(expires_soon(Some("2024-02-01"), fixed_now()));
    }

    #[test]
    fn test_expires_soon_past_window() {
        assert!(!expires_soon(Some("2024-04-01"), fixed_now()));
    }

    #[test]
    fn test_expires_soon_already_expired() {
        assert!(!expires_soon(Some("2023-12-01"), fixed_now()));
    }

    #[test]
    fn test_expires_soon_absent_or_invalid() {
        assert!(!expires_soon(None, fixed_now()));
        assert!(!expires_soon(Some("not-a-date"), fixed_now()));
    }

    #[test]
    fn test_expires_soon_boundaries_are_exclusive() {
        // Exactly now and exactly the window end are both unflagged.
        assert!(!expires_soon(Some("2024-01-15"), fixed_now()));
        assert!(!expires_soon(Some("2024-03-15"), fixed_now()));
    }

    #[test]
    fn test_field_pairs_substitute_empty() {
        let tenant = Tenant {
            id: 3,
            name: "Jane Doe".to_string(),
            ..Tenant::default()
        };
        let pairs = tenant.field_pairs();
        assert_eq!(pairs[0], ("id", "3".to_string()));
        assert_eq!(pairs[1], ("name", "Jane Doe".to_string()));
        assert!(pairs[4].1.is_empty());
        assert!(pairs[11].1.is_empty());
    }
}
