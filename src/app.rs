//! Application state management.
//!
//! Owns the current tenant page, search filter, form state and UI mode. The
//! tenant list here is exactly one page of server-side pagination; it is
//! never a cumulative cache, and every mutation is followed by a refetch.

use crate::api::models::{DashboardStats, Property, Tenant, TenantPage, TransactionReport};
use crate::form::TenantForm;
use std::cmp;

/// Interaction mode of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal list navigation
    List,
    /// Search input captures keystrokes
    Search,
    /// Add/edit tenant modal
    Form,
    /// Read-only tenant details modal
    Details,
    /// Per-tenant transactions modal
    Transactions,
    /// Delete confirmation prompt
    ConfirmDelete,
}

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Tenants,
    /// Placeholder screen
    Properties,
    /// Placeholder screen
    Transactions,
}

impl Tab {
    /// Next tab in cycling order.
    pub fn next(self) -> Self {
        match self {
            Tab::Dashboard => Tab::Tenants,
            Tab::Tenants => Tab::Properties,
            Tab::Properties => Tab::Transactions,
            Tab::Transactions => Tab::Dashboard,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Tenants on the current server page
    pub tenants: Vec<Tenant>,
    /// Tenants matching the search filter (subset of the current page)
    pub filtered_tenants: Vec<Tenant>,
    /// Properties for the selector and address resolution
    pub properties: Vec<Property>,
    /// Selected row index in filtered_tenants
    pub selected_index: usize,
    /// Search query string
    pub search_query: String,
    /// Current 1-based page number
    pub page: u32,
    /// Total page count reported by the server
    pub total_pages: u32,
    /// Page size for tenant fetches
    pub per_page: u32,
    /// Total tenant count across all pages
    pub total_tenants: u64,
    /// Whether the primary list fetch is in flight
    pub loading: bool,
    /// Current UI mode
    pub mode: UiMode,
    /// Active tab
    pub active_tab: Tab,
    /// Status message shown in the bottom bar
    pub status_message: Option<String>,
    /// Working values for the add/edit modal
    pub form: TenantForm,
    /// Record shown in the details modal
    pub details: Option<Tenant>,
    /// Record awaiting delete confirmation
    pub pending_delete: Option<Tenant>,
    /// Hand-off to the transactions view: tenant id and name
    pub tx_tenant: Option<(i64, String)>,
    /// Transactions for the handed-off tenant
    pub tx_report: TransactionReport,
    /// Dashboard record counts
    pub stats: DashboardStats,
}

impl App {
    /// Create a new application state.
    pub fn new(per_page: u32) -> Self {
        Self {
            tenants: Vec::new(),
            filtered_tenants: Vec::new(),
            properties: Vec::new(),
            selected_index: 0,
            search_query: String::new(),
            page: 1,
            total_pages: 1,
            per_page,
            total_tenants: 0,
            loading: false,
            mode: UiMode::List,
            active_tab: Tab::Dashboard,
            status_message: None,
            form: TenantForm::default(),
            details: None,
            pending_delete: None,
            tx_tenant: None,
            tx_report: TransactionReport::default(),
            stats: DashboardStats::default(),
        }
    }

    /// Replace the current page with a fetched one and reapply the filter.
    pub fn set_tenant_page(&mut self, page: TenantPage) {
        self.tenants = page.tenants;
        self.total_pages = page.pages.max(1);
        self.total_tenants = page.total;
        self.apply_filter();
    }

    /// Replace the loaded property set.
    pub fn set_properties(&mut self, properties: Vec<Property>) {
        self.properties = properties;
    }

    /// Apply the search query to the current page.
    ///
    /// # Details
    /// Case-insensitive substring match over the tenant name and the
    /// resolved property address. Filtering never crosses page boundaries
    /// and never triggers a refetch.
    pub fn apply_filter(&mut self) {
        let mut filtered: Vec<Tenant> = self.tenants.clone();

        if !self.search_query.is_empty() {
            let query = self.search_query.to_lowercase();
            filtered.retain(|tenant| {
                tenant.name.to_lowercase().contains(&query)
                    || tenant
                        .property_address
                        .as_deref()
                        .is_some_and(|address| address.to_lowercase().contains(&query))
            });
        }

        self.filtered_tenants = filtered;
        self.selected_index = cmp::min(
            self.selected_index,
            self.filtered_tenants.len().saturating_sub(1),
        );
    }

    /// Move selection up, wrapping to the bottom.
    pub fn move_up(&mut self) {
        if self.filtered_tenants.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_tenants.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down, wrapping to the top.
    pub fn move_down(&mut self) {
        if self.filtered_tenants.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_tenants.len();
    }

    /// Advance to the next page if one exists; the caller refetches.
    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages {
            self.page += 1;
            self.selected_index = 0;
            true
        } else {
            false
        }
    }

    /// Go back to the previous page if one exists; the caller refetches.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            self.selected_index = 0;
            true
        } else {
            false
        }
    }

    /// Add a character to the search query and reapply the filter.
    pub fn add_search_char(&mut self, ch: char) {
        if self.mode == UiMode::Search {
            self.search_query.push(ch);
            self.apply_filter();
        }
    }

    /// Remove the last character from the search query.
    pub fn remove_search_char(&mut self) {
        if self.mode == UiMode::Search {
            self.search_query.pop();
            self.apply_filter();
        }
    }

    /// Get the currently selected tenant.
    pub fn selected_tenant(&self) -> Option<&Tenant> {
        self.filtered_tenants.get(self.selected_index)
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Open the form modal in create mode.
    pub fn open_create_form(&mut self) {
        self.form = TenantForm::for_create();
        self.mode = UiMode::Form;
    }

    /// Open the form modal seeded from the given record.
    pub fn open_edit_form(&mut self, tenant: &Tenant) {
        self.form = TenantForm::for_edit(tenant, &self.properties);
        self.mode = UiMode::Form;
    }

    /// Close the form modal and discard its working values.
    pub fn close_form(&mut self) {
        self.form = TenantForm::default();
        self.mode = UiMode::List;
    }

    /// Open the details modal for the given record.
    pub fn open_details(&mut self, tenant: Tenant) {
        self.details = Some(tenant);
        self.mode = UiMode::Details;
    }

    /// Close the details modal.
    pub fn close_details(&mut self) {
        self.details = None;
        self.mode = UiMode::List;
    }

    /// Ask for confirmation before deleting the selected tenant.
    ///
    /// # Details
    /// No network call happens here; the delete is issued only after an
    /// explicit confirmation.
    pub fn request_delete(&mut self) {
        if let Some(tenant) = self.selected_tenant() {
            self.pending_delete = Some(tenant.clone());
            self.mode = UiMode::ConfirmDelete;
        }
    }

    /// Decline the pending delete; nothing is sent to the backend.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.mode = UiMode::List;
    }

    /// Open the transactions modal for one tenant.
    ///
    /// # Arguments
    /// * `id` - Tenant identifier handed off to the viewer
    /// * `name` - Tenant name, used for the modal title
    pub fn open_transactions(&mut self, id: i64, name: String) {
        self.tx_tenant = Some((id, name));
        self.tx_report = TransactionReport::default();
        self.mode = UiMode::Transactions;
    }

    /// Store the fetched transaction report.
    pub fn set_transaction_report(&mut self, report: TransactionReport) {
        self.tx_report = report;
    }

    /// Close the transactions modal.
    pub fn close_transactions(&mut self) {
        self.tx_tenant = None;
        self.tx_report = TransactionReport::default();
        self.mode = UiMode::List;
    }

    /// Switch to a different tab and reset the selection.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.selected_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::normalize_tenant_page;
    use serde_json::json;

    fn test_tenant(id: i64, name: &str, address: &str) -> Tenant {
        Tenant {
            id,
            name: name.to_string(),
            property_address: Some(address.to_string()),
            ..Tenant::default()
        }
    }

    fn app_with_tenants(tenants: Vec<Tenant>) -> App {
        let mut app = App::new(10);
        let total = tenants.len() as u64;
        app.set_tenant_page(TenantPage {
            tenants,
            pages: 1,
            total,
        });
        app
    }

    #[test]
    fn test_app_new() {
        let app = App::new(10);
        assert_eq!(app.tenants.len(), 0);
        assert_eq!(app.page, 1);
        assert_eq!(app.total_pages, 1);
        assert_eq!(app.mode, UiMode::List);
        assert_eq!(app.active_tab, Tab::Dashboard);
    }

    #[test]
    fn test_set_tenant_page_from_envelope() {
        let mut app = App::new(10);
        let page = normalize_tenant_page(json!({
            "tenants": [{"id": 1, "name": "Jane Doe"}, {"id": 2, "name": "Raj Patel"}],
            "pages": 3
        }));
        app.set_tenant_page(page);
        assert_eq!(app.filtered_tenants.len(), 2);
        assert_eq!(app.total_pages, 3);
    }

    #[test]
    fn test_set_tenant_page_from_bare_list() {
        let mut app = App::new(10);
        let page = normalize_tenant_page(json!([{"id": 1, "name": "Jane Doe"}]));
        app.set_tenant_page(page);
        assert_eq!(app.filtered_tenants.len(), 1);
        assert_eq!(app.total_pages, 1);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut app = app_with_tenants(vec![
            test_tenant(1, "Jane Doe", "12 Hill Road"),
            test_tenant(2, "Raj Patel", "4 Lake View"),
        ]);
        app.mode = UiMode::Search;
        app.search_query = "jane".to_string();
        app.apply_filter();
        assert_eq!(app.filtered_tenants.len(), 1);
        assert_eq!(app.filtered_tenants[0].name, "Jane Doe");
    }

    #[test]
    fn test_filter_matches_property_address() {
        let mut app = app_with_tenants(vec![
            test_tenant(1, "Jane Doe", "12 Hill Road"),
            test_tenant(2, "Raj Patel", "4 Lake View"),
        ]);
        app.search_query = "LAKE".to_string();
        app.apply_filter();
        assert_eq!(app.filtered_tenants.len(), 1);
        assert_eq!(app.filtered_tenants[0].id, 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut app = app_with_tenants(vec![
            test_tenant(1, "Jane Doe", "12 Hill Road"),
            test_tenant(2, "Raj Patel", "4 Lake View"),
        ]);
        app.search_query = "doe".to_string();
        app.apply_filter();
        let first = app.filtered_tenants.clone();
        app.apply_filter();
        assert_eq!(app.filtered_tenants, first);
    }

    #[test]
    fn test_filter_no_match_yields_zero_rows() {
        let mut app = app_with_tenants(vec![test_tenant(1, "Jane Doe", "12 Hill Road")]);
        app.search_query = "zzz".to_string();
        app.apply_filter();
        assert!(app.filtered_tenants.is_empty());
    }

    #[test]
    fn test_move_selection_wraps() {
        let mut app = app_with_tenants(vec![
            test_tenant(1, "Jane Doe", "a"),
            test_tenant(2, "Raj Patel", "b"),
            test_tenant(3, "Li Wei", "c"),
        ]);
        assert_eq!(app.selected_index, 0);
        app.move_down();
        assert_eq!(app.selected_index, 1);
        app.move_up();
        assert_eq!(app.selected_index, 0);
        app.move_up();
        assert_eq!(app.selected_index, 2);
    }

    #[test]
    fn test_page_navigation_bounds() {
        let mut app = App::new(10);
        app.total_pages = 2;
        assert!(!app.prev_page());
        assert!(app.next_page());
        assert_eq!(app.page, 2);
        assert!(!app.next_page());
        assert!(app.prev_page());
        assert_eq!(app.page, 1);
    }

    #[test]
    fn test_delete_requires_confirmation_step() {
        let mut app = app_with_tenants(vec![test_tenant(1, "Jane Doe", "a")]);
        app.request_delete();
        assert_eq!(app.mode, UiMode::ConfirmDelete);
        assert_eq!(app.pending_delete.as_ref().map(|t| t.id), Some(1));

        // Declining drops the pending record without any call having been made.
        app.cancel_delete();
        assert_eq!(app.mode, UiMode::List);
        assert!(app.pending_delete.is_none());
    }

    #[test]
    fn test_request_delete_without_selection() {
        let mut app = App::new(10);
        app.request_delete();
        assert_eq!(app.mode, UiMode::List);
        assert!(app.pending_delete.is_none());
    }

    #[test]
    fn test_transactions_hand_off() {
        let mut app = app_with_tenants(vec![test_tenant(9, "Jane Doe", "a")]);
        app.open_transactions(9, "Jane Doe".to_string());
        assert_eq!(app.mode, UiMode::Transactions);
        assert_eq!(app.tx_tenant, Some((9, "Jane Doe".to_string())));
        app.close_transactions();
        assert_eq!(app.mode, UiMode::List);
        assert!(app.tx_tenant.is_none());
    }

    #[test]
    fn test_close_form_discards_values() {
        let mut app = app_with_tenants(vec![test_tenant(1, "Jane Doe", "a")]);
        let tenant = app.filtered_tenants[0].clone();
        app.open_edit_form(&tenant);
        assert_eq!(app.mode, UiMode::Form);
        assert!(app.form.is_editing());
        app.close_form();
        assert_eq!(app.mode, UiMode::List);
        assert!(!app.form.is_editing());
        assert!(app.form.name.is_empty());
    }
}
