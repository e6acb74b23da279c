//! File output for CSV exports and backup downloads.
//!
//! Serializes the currently filtered tenant set to `tenants.csv` and writes
//! backup artifacts fetched from the server.

use crate::api::models::{Tenant, number, text};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Column headers for the tenant CSV export, in output order.
pub const CSV_HEADER: [&str; 15] = [
    "ID",
    "Name",
    "Property",
    "Passport",
    "Passport Validity",
    "Aadhar No",
    "Employment",
    "Permanent Address",
    "Contact",
    "Emergency Contact",
    "Rent",
    "Security",
    "Move In",
    "Contract Start",
    "Contract Expiry",
];

/// Serialize tenants to CSV text.
///
/// # Details
/// Every field is double-quoted (embedded quotes doubled) and missing values
/// become empty strings. The first line is the header row.
pub fn tenants_to_csv(tenants: &[Tenant]) -> String {
    let mut lines = Vec::with_capacity(tenants.len() + 1);
    lines.push(csv_row(CSV_HEADER.iter().map(|h| (*h).to_string())));
    for tenant in tenants {
        lines.push(csv_row(tenant_row(tenant)));
    }
    lines.join("\n")
}

/// Write the filtered tenant set to `tenants.csv` in `dir`.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the written file or error
pub fn export_tenants(tenants: &[Tenant], dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;
    let path = dir.join("tenants.csv");
    fs::write(&path, tenants_to_csv(tenants))
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(path)
}

/// Write a downloaded backup artifact to a timestamped file in `dir`.
pub fn write_backup(bytes: &[u8], dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;
    let filename = format!("backup-{}.db", chrono::Utc::now().format("%Y%m%d-%H%M%S"));
    let path = dir.join(filename);
    fs::write(&path, bytes)
        .with_context(|| format!("Failed to write backup file: {}", path.display()))?;
    Ok(path)
}

fn tenant_row(tenant: &Tenant) -> Vec<String> {
    vec![
        tenant.id.to_string(),
        tenant.name.clone(),
        text(&tenant.property_address),
        text(&tenant.passport),
        text(&tenant.passport_validity),
        text(&tenant.aadhar_no),
        text(&tenant.employment_details),
        text(&tenant.permanent_address),
        text(&tenant.contact_no),
        text(&tenant.emergency_contact_no),
        number(tenant.rent),
        number(tenant.security),
        text(&tenant.move_in_date),
        text(&tenant.contract_start_date),
        text(&tenant.contract_expiry_date),
    ]
}

fn csv_row<I>(fields: I) -> String
where
    I: IntoIterator<Item = String>,
{
    fields
        .into_iter()
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_tenant(id: i64, name: &str) -> Tenant {
        Tenant {
            id,
            name: name.to_string(),
            property_address: Some("12 Hill Road".to_string()),
            rent: Some(1200.0),
            ..Tenant::default()
        }
    }

    #[test]
    fn test_csv_line_count() {
        let tenants = vec![test_tenant(1, "Jane Doe"), test_tenant(2, "Raj Patel")];
        let csv = tenants_to_csv(&tenants);
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_csv_header_order() {
        let csv = tenants_to_csv(&[]);
        let header = csv.lines().next().unwrap();
        assert!(header.starts_with("\"ID\",\"Name\",\"Property\""));
        assert!(header.ends_with("\"Contract Expiry\""));
    }

    #[test]
    fn test_csv_every_field_quoted_and_missing_empty() {
        let csv = tenants_to_csv(&[test_tenant(1, "Jane Doe")]);
        let row = csv.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), CSV_HEADER.len());
        for field in &fields {
            assert!(field.starts_with('"') && field.ends_with('"'), "{field}");
        }
        // Passport was never set and serializes as an empty quoted field.
        assert_eq!(fields[3], "\"\"");
        // Rent serializes without a trailing fraction.
        assert_eq!(fields[10], "\"1200\"");
    }

    #[test]
    fn test_csv_escapes_embedded_quotes() {
        let mut tenant = test_tenant(1, "Jane \"JD\" Doe");
        tenant.property_address = None;
        let csv = tenants_to_csv(&[tenant]);
        assert!(csv.contains("\"Jane \"\"JD\"\" Doe\""));
    }

    #[test]
    fn test_export_writes_tenants_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = export_tenants(&[test_tenant(1, "Jane Doe")], temp_dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "tenants.csv");
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 2);
    }

    #[test]
    fn test_write_backup() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_backup(b"sqlite artifact", temp_dir.path()).unwrap();
        assert!(path.exists());
        assert_eq!(fs::read(&path).unwrap(), b"sqlite artifact");
    }
}
