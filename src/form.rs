//! Tenant form state.
//!
//! One field set shared by the create and edit flows. The form works on a
//! detached copy of the record; nothing touches the backend until submit.

use crate::api::models::{Property, Tenant, TenantPayload, date_only, number, text};

/// Number of form fields, property selector included.
pub const FIELD_COUNT: usize = 14;

/// Index of the property selector within the field order.
pub const PROPERTY_FIELD: usize = 1;

/// Field labels in focus order.
pub const FIELD_LABELS: [&str; FIELD_COUNT] = [
    "Name",
    "Property",
    "Passport",
    "Passport Validity",
    "Aadhar No",
    "Employment Details",
    "Permanent Address",
    "Contact No",
    "Emergency Contact No",
    "Rent",
    "Security",
    "Move In Date",
    "Contract Start Date",
    "Contract Expiry Date",
];

/// Working values for the add/edit tenant modal.
///
/// All values are kept as entered text; `rent` and `security` are parsed to
/// numbers only when the payload is built. Date fields hold date-only
/// strings (YYYY-MM-DD).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TenantForm {
    /// Identifier of the record being edited, None in create mode
    pub editing_id: Option<i64>,
    /// Index of the focused field
    pub focus: usize,
    pub name: String,
    /// Index into the loaded property set, None until chosen
    pub property_idx: Option<usize>,
    pub passport: String,
    pub passport_validity: String,
    pub aadhar_no: String,
    pub employment_details: String,
    pub permanent_address: String,
    pub contact_no: String,
    pub emergency_contact_no: String,
    pub rent: String,
    pub security: String,
    pub move_in_date: String,
    pub contract_start_date: String,
    pub contract_expiry_date: String,
}

impl TenantForm {
    /// Empty form for the create flow.
    pub fn for_create() -> Self {
        Self::default()
    }

    /// Form seeded from an existing record for the edit flow.
    ///
    /// # Details
    /// Date fields are normalized to their date-only prefix, so an embedded
    /// time component is stripped before the user sees the value. The
    /// property selector is positioned on the record's current property if
    /// that property is loaded.
    pub fn for_edit(tenant: &Tenant, properties: &[Property]) -> Self {
        let property_idx = tenant
            .property_id
            .and_then(|id| properties.iter().position(|p| p.id == id));
        Self {
            editing_id: Some(tenant.id),
            focus: 0,
            name: tenant.name.clone(),
            property_idx,
            passport: text(&tenant.passport),
            passport_validity: date_only(&text(&tenant.passport_validity)),
            aadhar_no: text(&tenant.aadhar_no),
            employment_details: text(&tenant.employment_details),
            permanent_address: text(&tenant.permanent_address),
            contact_no: text(&tenant.contact_no),
            emergency_contact_no: text(&tenant.emergency_contact_no),
            rent: number(tenant.rent),
            security: number(tenant.security),
            move_in_date: date_only(&text(&tenant.move_in_date)),
            contract_start_date: date_only(&text(&tenant.contract_start_date)),
            contract_expiry_date: date_only(&text(&tenant.contract_expiry_date)),
        }
    }

    /// Whether the form is in edit mode.
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Whether the field at `idx` is required input.
    pub fn is_required(idx: usize) -> bool {
        idx == 0 || idx == PROPERTY_FIELD
    }

    /// Text value of the field at `idx`; None for the property selector.
    pub fn field_text(&self, idx: usize) -> Option<&str> {
        self.field(idx).map(|s| s.as_str())
    }

    fn field(&self, idx: usize) -> Option<&String> {
        match idx {
            0 => Some(&self.name),
            2 => Some(&self.passport),
            3 => Some(&self.passport_validity),
            4 => Some(&self.aadhar_no),
            5 => Some(&self.employment_details),
            6 => Some(&self.permanent_address),
            7 => Some(&self.contact_no),
            8 => Some(&self.emergency_contact_no),
            9 => Some(&self.rent),
            10 => Some(&self.security),
            11 => Some(&self.move_in_date),
            12 => Some(&self.contract_start_date),
            13 => Some(&self.contract_expiry_date),
            _ => None,
        }
    }

    fn field_mut(&mut self, idx: usize) -> Option<&mut String> {
        match idx {
            0 => Some(&mut self.name),
            2 => Some(&mut self.passport),
            3 => Some(&mut self.passport_validity),
            4 => Some(&mut self.aadhar_no),
            5 => Some(&mut self.employment_details),
            6 => Some(&mut self.permanent_address),
            7 => Some(&mut self.contact_no),
            8 => Some(&mut self.emergency_contact_no),
            9 => Some(&mut self.rent),
            10 => Some(&mut self.security),
            11 => Some(&mut self.move_in_date),
            12 => Some(&mut self.contract_start_date),
            13 => Some(&mut self.contract_expiry_date),
            _ => None,
        }
    }

    /// Move focus to the next field, wrapping at the end.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FIELD_COUNT;
    }

    /// Move focus to the previous field, wrapping at the start.
    pub fn focus_prev(&mut self) {
        self.focus = if self.focus == 0 {
            FIELD_COUNT - 1
        } else {
            self.focus - 1
        };
    }

    /// Append a character to the focused text field.
    pub fn insert_char(&mut self, ch: char) {
        let idx = self.focus;
        if let Some(field) = self.field_mut(idx) {
            field.push(ch);
        }
    }

    /// Remove the last character from the focused text field.
    pub fn delete_char(&mut self) {
        let idx = self.focus;
        if let Some(field) = self.field_mut(idx) {
            field.pop();
        }
    }

    /// Step the property selector by `step`, wrapping over the loaded set.
    pub fn cycle_property(&mut self, step: isize, property_count: usize) {
        if property_count == 0 {
            return;
        }
        self.property_idx = Some(match self.property_idx {
            None if step >= 0 => 0,
            None => property_count - 1,
            Some(current) => {
                let count = property_count as isize;
                (((current as isize + step) % count + count) % count) as usize
            }
        });
    }

    /// Check the input-level requirements: name and property.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            Err("Name is required")
        } else if self.property_idx.is_none() {
            Err("Property is required")
        } else {
            Ok(())
        }
    }

    /// Build the request body from the entered values.
    ///
    /// # Details
    /// Free-text and date fields are submitted exactly as entered, empty
    /// strings included. Rent and security parse to numbers; blank or
    /// unparseable amounts are submitted as null. Returns None when no
    /// property is selected or the selection no longer resolves.
    pub fn payload(&self, properties: &[Property]) -> Option<TenantPayload> {
        let property = properties.get(self.property_idx?)?;
        Some(TenantPayload {
            name: self.name.clone(),
            property_id: property.id,
            passport: self.passport.clone(),
            passport_validity: self.passport_validity.clone(),
            aadhar_no: self.aadhar_no.clone(),
            employment_details: self.employment_details.clone(),
            permanent_address: self.permanent_address.clone(),
            contact_no: self.contact_no.clone(),
            emergency_contact_no: self.emergency_contact_no.clone(),
            rent: parse_amount(&self.rent),
            security: parse_amount(&self.security),
            move_in_date: self.move_in_date.clone(),
            contract_start_date: self.contract_start_date.clone(),
            contract_expiry_date: self.contract_expiry_date.clone(),
        })
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_properties() -> Vec<Property> {
        vec![
            Property {
                id: 11,
                address: "12 Hill Road".to_string(),
                rent: None,
                maintenance: None,
            },
            Property {
                id: 12,
                address: "4 Lake View".to_string(),
                rent: None,
                maintenance: None,
            },
        ]
    }

    #[test]
    fn test_edit_seed_strips_time_component() {
        let tenant = Tenant {
            id: 5,
            name: "Jane Doe".to_string(),
            property_id: Some(12),
            passport_validity: Some("2024-05-01T00:00:00Z".to_string()),
            ..Tenant::default()
        };
        let form = TenantForm::for_edit(&tenant, &test_properties());
        assert_eq!(form.editing_id, Some(5));
        assert_eq!(form.passport_validity, "2024-05-01");
        assert_eq!(form.property_idx, Some(1));
    }

    #[test]
    fn test_edit_seed_with_unloaded_property() {
        let tenant = Tenant {
            id: 5,
            name: "Jane Doe".to_string(),
            property_id: Some(99),
            ..Tenant::default()
        };
        let form = TenantForm::for_edit(&tenant, &test_properties());
        assert_eq!(form.property_idx, None);
    }

    #[test]
    fn test_validate_requires_name_and_property() {
        let mut form = TenantForm::for_create();
        assert_eq!(form.validate(), Err("Name is required"));

        form.name = "Jane Doe".to_string();
        assert_eq!(form.validate(), Err("Property is required"));

        form.property_idx = Some(0);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_create_payload_with_blank_optionals() {
        let mut form = TenantForm::for_create();
        form.name = "Jane Doe".to_string();
        form.property_idx = Some(0);

        let payload = form.payload(&test_properties()).unwrap();
        assert_eq!(payload.name, "Jane Doe");
        assert_eq!(payload.property_id, 11);
        assert_eq!(payload.passport, "");
        assert_eq!(payload.rent, None);
        assert_eq!(payload.contract_expiry_date, "");
    }

    #[test]
    fn test_payload_parses_amounts() {
        let mut form = TenantForm::for_create();
        form.name = "Jane Doe".to_string();
        form.property_idx = Some(1);
        form.rent = "1200".to_string();
        form.security = "not a number".to_string();

        let payload = form.payload(&test_properties()).unwrap();
        assert_eq!(payload.rent, Some(1200.0));
        assert_eq!(payload.security, None);
    }

    #[test]
    fn test_payload_requires_selected_property() {
        let mut form = TenantForm::for_create();
        form.name = "Jane Doe".to_string();
        assert!(form.payload(&test_properties()).is_none());
    }

    #[test]
    fn test_cycle_property_wraps() {
        let mut form = TenantForm::for_create();
        form.cycle_property(1, 2);
        assert_eq!(form.property_idx, Some(0));
        form.cycle_property(1, 2);
        assert_eq!(form.property_idx, Some(1));
        form.cycle_property(1, 2);
        assert_eq!(form.property_idx, Some(0));
        form.cycle_property(-1, 2);
        assert_eq!(form.property_idx, Some(1));
    }

    #[test]
    fn test_cycle_property_empty_set() {
        let mut form = TenantForm::for_create();
        form.cycle_property(1, 0);
        assert_eq!(form.property_idx, None);
    }

    #[test]
    fn test_insert_and_delete_char() {
        let mut form = TenantForm::for_create();
        form.insert_char('J');
        form.insert_char('o');
        assert_eq!(form.name, "Jo");
        form.delete_char();
        assert_eq!(form.name, "J");

        // The property selector ignores typed characters.
        form.focus = PROPERTY_FIELD;
        form.insert_char('x');
        assert_eq!(form.property_idx, None);
    }
}
