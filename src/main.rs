//! Property Management TUI - terminal console for a property/tenant REST backend.
//!
//! Main entry point and event loop for the application.

mod api;
mod app;
mod config;
mod export;
mod form;
mod ui;

use api::ApiClient;
use app::{App, Tab, UiMode};
use config::Config;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

use anyhow::{Context, Result};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Main application entry point.
///
/// # Details
/// Loads configuration, performs the initial fetches, then enters the event
/// loop. Every fetch failure surfaces as a status notification rather than
/// aborting startup; the console stays usable against a dead backend.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load(None)?;
    let client = ApiClient::new(&config).context("Failed to create API client")?;

    let mut app = App::new(config.per_page.max(1));

    match client.fetch_tenants(app.page, app.per_page).await {
        Ok(page) => {
            let count = page.tenants.len();
            app.set_tenant_page(page);
            app.set_status(format!("Loaded {} tenants", count));
        }
        Err(_) => app.set_status("Failed to fetch tenants".to_string()),
    }
    match client.fetch_properties().await {
        Ok(properties) => app.set_properties(properties),
        Err(_) => app.set_status("Failed to fetch properties".to_string()),
    }
    match client.fetch_stats().await {
        Ok(stats) => app.stats = stats,
        Err(_) => app.set_status("Failed to fetch dashboard statistics".to_string()),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let result = run_app(&mut terminal, &mut app, &client, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Render the complete UI.
///
/// # Details
/// Lays out the tabs, the active screen and the status bar, then draws the
/// active modal (if any) over the screen.
fn render_ui(f: &mut ratatui::Frame, app: &App) {
    let chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Length(3), // Tabs
            ratatui::layout::Constraint::Min(0),    // Active screen
            ratatui::layout::Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    ui::render_tabs(app, chunks[0], f.buffer_mut());

    match app.active_tab {
        Tab::Dashboard => ui::render_dashboard(app, chunks[1], f.buffer_mut()),
        Tab::Tenants => {
            let tenant_chunks = ratatui::layout::Layout::default()
                .direction(ratatui::layout::Direction::Vertical)
                .constraints([
                    ratatui::layout::Constraint::Length(3), // Search bar
                    ratatui::layout::Constraint::Min(0),    // Tenant table
                ])
                .split(chunks[1]);
            ui::render_search(app, tenant_chunks[0], f.buffer_mut());
            ui::render_list(app, tenant_chunks[1], f.buffer_mut());
        }
        Tab::Properties | Tab::Transactions => {
            ui::render_placeholder(app.active_tab, chunks[1], f.buffer_mut());
        }
    }

    match app.mode {
        UiMode::Form => ui::render_form(app, f.area(), f.buffer_mut()),
        UiMode::Details => ui::render_details(app, f.area(), f.buffer_mut()),
        UiMode::Transactions => ui::render_transactions(app, f.area(), f.buffer_mut()),
        UiMode::ConfirmDelete => ui::render_confirm_delete(app, f.area(), f.buffer_mut()),
        UiMode::List | UiMode::Search => {}
    }

    let status_text = app.status_message.as_deref().unwrap_or(
        "q: quit  Tab: switch screen  /: search  a: add  e: edit  d: delete  t: transactions  x: export CSV",
    );
    let status = ratatui::widgets::Paragraph::new(ratatui::text::Line::from(status_text));
    f.render_widget(status, chunks[2]);
}

/// Main event loop.
///
/// # Details
/// Handles keyboard events per UI mode, issues backend calls at the event
/// site and renders after every iteration. Calls are awaited inline, so a
/// page change can never race an earlier in-flight fetch.
async fn run_app(terminal: &mut Term, app: &mut App, client: &ApiClient, config: &Config) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Non-blocking event polling keeps the UI responsive
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.mode {
            UiMode::List => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                KeyCode::Char('c')
                    if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                {
                    break;
                }
                KeyCode::Tab => app.switch_tab(app.active_tab.next()),
                KeyCode::Char('1') => app.switch_tab(Tab::Dashboard),
                KeyCode::Char('2') => app.switch_tab(Tab::Tenants),
                KeyCode::Char('3') => app.switch_tab(Tab::Properties),
                KeyCode::Char('4') => app.switch_tab(Tab::Transactions),
                _ => match app.active_tab {
                    Tab::Tenants => {
                        handle_tenant_key(key.code, terminal, app, client, config).await?;
                    }
                    Tab::Dashboard => match key.code {
                        KeyCode::Char('r') => refresh_stats(app, client).await,
                        KeyCode::Char('b') => download_backup(app, client, config).await,
                        _ => {}
                    },
                    _ => {}
                },
            },
            UiMode::Search => match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    app.mode = UiMode::List;
                }
                KeyCode::Backspace => {
                    app.remove_search_char();
                }
                KeyCode::Char(c) => {
                    app.add_search_char(c);
                }
                _ => {}
            },
            UiMode::Form => match key.code {
                KeyCode::Esc => app.close_form(),
                KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
                KeyCode::Left if app.form.focus == form::PROPERTY_FIELD => {
                    app.form.cycle_property(-1, app.properties.len());
                }
                KeyCode::Right if app.form.focus == form::PROPERTY_FIELD => {
                    app.form.cycle_property(1, app.properties.len());
                }
                KeyCode::Backspace => app.form.delete_char(),
                KeyCode::Enter => submit_form(terminal, app, client).await?,
                KeyCode::Char(c) => app.form.insert_char(c),
                _ => {}
            },
            UiMode::Details => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_details(),
                _ => {}
            },
            UiMode::Transactions => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => app.close_transactions(),
                _ => {}
            },
            UiMode::ConfirmDelete => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    confirm_delete(terminal, app, client).await?;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
                _ => {}
            },
        }
    }

    Ok(())
}

/// Handle a key press on the tenant list.
async fn handle_tenant_key(
    code: KeyCode,
    terminal: &mut Term,
    app: &mut App,
    client: &ApiClient,
    config: &Config,
) -> Result<()> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Right | KeyCode::Char('n') => {
            if app.next_page() {
                refresh_tenants(terminal, app, client).await?;
            }
        }
        KeyCode::Left | KeyCode::Char('p') => {
            if app.prev_page() {
                refresh_tenants(terminal, app, client).await?;
            }
        }
        KeyCode::Char('/') => {
            app.mode = UiMode::Search;
        }
        KeyCode::Char('r') => {
            refresh_tenants(terminal, app, client).await?;
        }
        KeyCode::Char('a') => app.open_create_form(),
        KeyCode::Char('e') => {
            if let Some(tenant) = app.selected_tenant().cloned() {
                app.open_edit_form(&tenant);
            }
        }
        KeyCode::Enter | KeyCode::Char('v') => {
            if let Some(tenant) = app.selected_tenant().cloned() {
                app.open_details(tenant);
            }
        }
        KeyCode::Char('t') => {
            if let Some(tenant) = app.selected_tenant().cloned() {
                app.open_transactions(tenant.id, tenant.name.clone());
                match client.fetch_tenant_transactions(tenant.id).await {
                    Ok(report) => app.set_transaction_report(report),
                    Err(_) => {
                        app.set_status(format!("Failed to fetch transactions for {}", tenant.name));
                    }
                }
            }
        }
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('x') => {
            match export::export_tenants(&app.filtered_tenants, &config.export_dir_path()) {
                Ok(path) => app.set_status(format!(
                    "Exported {} tenants to {}",
                    app.filtered_tenants.len(),
                    path.display()
                )),
                Err(_) => app.set_status("Export failed".to_string()),
            }
        }
        _ => {}
    }
    Ok(())
}

/// Refetch the current tenant page.
///
/// # Details
/// Draws one loading frame before awaiting so the indicator is visible while
/// the request is in flight. A failed fetch leaves the prior page untouched.
async fn refresh_tenants(terminal: &mut Term, app: &mut App, client: &ApiClient) -> Result<()> {
    app.loading = true;
    terminal.draw(|f| render_ui(f, app))?;
    match client.fetch_tenants(app.page, app.per_page).await {
        Ok(page) => app.set_tenant_page(page),
        Err(_) => app.set_status("Failed to fetch tenants".to_string()),
    }
    app.loading = false;
    Ok(())
}

/// Validate and submit the form, creating or updating per its mode.
///
/// # Details
/// On success the form is cleared, the modal closes and the current page is
/// refetched. On failure the modal stays open with the entered values intact.
async fn submit_form(terminal: &mut Term, app: &mut App, client: &ApiClient) -> Result<()> {
    if let Err(reason) = app.form.validate() {
        app.set_status(reason.to_string());
        return Ok(());
    }
    let Some(payload) = app.form.payload(&app.properties) else {
        app.set_status("Property is required".to_string());
        return Ok(());
    };

    let was_edit = app.form.is_editing();
    let result = match app.form.editing_id {
        Some(id) => client.update_tenant(id, &payload).await,
        None => client.create_tenant(&payload).await,
    };

    match result {
        Ok(()) => {
            app.set_status(if was_edit { "Tenant updated" } else { "Tenant added" }.to_string());
            app.close_form();
            refresh_tenants(terminal, app, client).await?;
        }
        Err(_) => app.set_status("Save failed".to_string()),
    }
    Ok(())
}

/// Issue the confirmed delete, then refetch unconditionally.
///
/// # Details
/// The page is refetched whether the delete succeeded or not; the server's
/// current state is the authority either way. No page-count correction is
/// attempted when the last row of a page disappears.
async fn confirm_delete(terminal: &mut Term, app: &mut App, client: &ApiClient) -> Result<()> {
    let Some(tenant) = app.pending_delete.take() else {
        app.mode = UiMode::List;
        return Ok(());
    };

    match client.delete_tenant(tenant.id).await {
        Ok(()) => app.set_status("Tenant deleted".to_string()),
        Err(_) => app.set_status("Delete failed".to_string()),
    }
    app.mode = UiMode::List;
    refresh_tenants(terminal, app, client).await
}

/// Refetch the dashboard record counts.
async fn refresh_stats(app: &mut App, client: &ApiClient) {
    match client.fetch_stats().await {
        Ok(stats) => {
            app.stats = stats;
            app.set_status("Dashboard statistics refreshed".to_string());
        }
        Err(_) => app.set_status("Failed to fetch dashboard statistics".to_string()),
    }
}

/// Download the database backup and write it to the export directory.
async fn download_backup(app: &mut App, client: &ApiClient, config: &Config) {
    match client.download_backup().await {
        Ok(bytes) => match export::write_backup(&bytes, &config.export_dir_path()) {
            Ok(path) => app.set_status(format!("Backup saved to {}", path.display())),
            Err(_) => app.set_status("Failed to save backup".to_string()),
        },
        Err(_) => app.set_status("Failed to download backup".to_string()),
    }
}
