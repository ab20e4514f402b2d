use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::PathBuf;
use std::time::Instant;

use crate::config::AppConfig;
use crate::grid::{Draft, Person, RowStore};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    AddEntry,
    Confirm,
    Help,
}

pub struct App {
    pub popup: Popup,

    // Row state
    pub store: RowStore,
    pub selected: usize,

    // Draft entry dialog state
    pub draft: Draft,
    pub draft_field: usize, // 0 = name, 1 = age, 2 = email

    // Grid view options (config, possibly overridden by CLI)
    pub page_size: usize,
    pub striped: bool,
    pub loading: bool,
    pub theme: Theme,

    // Config
    pub config: AppConfig,

    // Where rows were seeded from; None = built-in sample set
    pub data_path: Option<PathBuf>,
    reload_pending: bool,

    // Delete confirmation target
    pending_delete: Option<u64>,

    // Status message (shown in info line, auto-clears after timeout)
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,
}

impl App {
    pub fn new(config: AppConfig, data_path: Option<PathBuf>) -> Result<Self> {
        let store = match &data_path {
            Some(path) => RowStore::from_rows(crate::grid::rows_from_file(path)?),
            None => RowStore::sample(),
        };
        let theme = Theme::load(&config.theme, &config.colors);

        Ok(Self {
            popup: Popup::None,
            store,
            selected: 0,
            draft: Draft::default(),
            draft_field: 0,
            page_size: config.page_size.max(1),
            striped: config.striped,
            loading: false,
            theme,
            config,
            data_path,
            reload_pending: false,
            pending_delete: None,
            status_message: None,
            status_message_time: None,
        })
    }

    /// Set a status message (auto-clears after 3 seconds)
    fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
    }

    // Pagination is derived from the selection, so moving the cursor
    // across a page boundary flips the page.
    pub fn page(&self) -> usize {
        self.selected / self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.store.len().div_ceil(self.page_size).max(1)
    }

    /// Rows on the current page, with their indices into the full store
    pub fn page_rows(&self) -> &[Person] {
        let start = self.page() * self.page_size;
        let end = (start + self.page_size).min(self.store.len());
        &self.store.rows()[start..end]
    }

    /// Selection offset within the current page
    pub fn selected_on_page(&self) -> usize {
        self.selected % self.page_size
    }

    pub fn selected_row(&self) -> Option<&Person> {
        self.store.rows().get(self.selected)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.popup != Popup::None {
            return self.handle_popup_key(key);
        }
        self.handle_normal_key(key)
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Vertical navigation within the row list
            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),

            // Page navigation
            KeyCode::Left | KeyCode::PageUp => self.page_back(),
            KeyCode::Right | KeyCode::PageDown => self.page_forward(),

            // Open the add-entry dialog
            KeyCode::Char('a') => {
                self.popup = Popup::AddEntry;
                self.draft_field = 0;
            }

            // Row click: report the selected row
            KeyCode::Enter => self.row_click(),

            // Delete selected row
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selection(),

            // Reload rows from the data source
            KeyCode::Char('R') => {
                self.loading = true;
                self.reload_pending = true;
            }

            // Help
            KeyCode::Char('?') => self.popup = Popup::Help,

            _ => {}
        }
        Ok(())
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.popup {
            Popup::AddEntry => self.handle_add_entry_key(key),
            Popup::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Char('q')
                ) {
                    self.popup = Popup::None;
                }
                Ok(())
            }
            Popup::Confirm => {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => {
                        self.confirm_delete();
                        self.popup = Popup::None;
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        self.pending_delete = None;
                        self.popup = Popup::None;
                    }
                    _ => {}
                }
                Ok(())
            }
            Popup::None => Ok(()),
        }
    }

    /// Key input for the add-entry dialog. Tab cycles fields, Enter
    /// advances and commits from the last field, Esc discards the draft.
    fn handle_add_entry_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.popup = Popup::None;
                self.draft.clear();
                self.draft_field = 0;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.draft_field = (self.draft_field + 1) % 3;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.draft_field = self.draft_field.checked_sub(1).unwrap_or(2);
            }
            KeyCode::Enter => {
                if self.draft_field < 2 {
                    self.draft_field += 1;
                } else {
                    self.commit_draft();
                }
            }
            KeyCode::Backspace => {
                self.draft_buffer_mut().pop();
            }
            KeyCode::Char(c) => {
                self.draft_buffer_mut().push(c);
            }
            _ => {}
        }
        Ok(())
    }

    fn draft_buffer_mut(&mut self) -> &mut String {
        match self.draft_field {
            0 => &mut self.draft.name,
            1 => &mut self.draft.age,
            _ => &mut self.draft.email,
        }
    }

    /// Try to commit the draft. On failure the dialog stays open, the
    /// draft is kept, and the store is untouched.
    fn commit_draft(&mut self) {
        match self.store.add(&self.draft) {
            Ok(row) => {
                let id = row.id;
                let name = row.name.clone();
                tracing::info!(id = id, name = %name, "row added");
                self.set_status(format!("Added '{}'", name));
                self.selected = self.store.len() - 1;
                self.draft.clear();
                self.draft_field = 0;
                self.popup = Popup::None;
            }
            Err(e) => {
                self.set_status(format!("Error: {}", e));
            }
        }
    }

    fn row_click(&mut self) {
        if let Some(row) = self.selected_row() {
            tracing::info!(id = row.id, name = %row.name, "row clicked");
            self.set_status(format!("{} <{}>", row.name, row.email));
        }
    }

    fn delete_selection(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let (id, name) = (row.id, row.name.clone());
        if self.config.confirm_delete {
            self.pending_delete = Some(id);
            self.set_status(format!("Delete '{}'? (y/n)", name));
            self.popup = Popup::Confirm;
        } else {
            self.pending_delete = Some(id);
            self.confirm_delete();
        }
    }

    fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        let name = self
            .store
            .rows()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.name.clone());
        if self.store.remove(id) {
            tracing::info!(id, "row removed");
            self.set_status(format!("Deleted '{}'", name.unwrap_or_default()));
            // Adjust selection if needed
            if self.selected >= self.store.len() && !self.store.is_empty() {
                self.selected = self.store.len() - 1;
            }
        }
    }

    fn move_down(&mut self) {
        if !self.store.is_empty() {
            self.selected = (self.selected + 1) % self.store.len();
        }
    }

    fn move_up(&mut self) {
        if !self.store.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.store.len() - 1);
        }
    }

    fn page_back(&mut self) {
        self.selected = self.selected.saturating_sub(self.page_size);
    }

    fn page_forward(&mut self) {
        if !self.store.is_empty() {
            self.selected = (self.selected + self.page_size).min(self.store.len() - 1);
        }
    }

    pub fn tick(&mut self) {
        // Finish a pending reload; the loading frame has been drawn once
        if self.reload_pending {
            self.reload_pending = false;
            match self.reload_rows() {
                Ok(count) => self.set_status(format!("Reloaded {} rows", count)),
                Err(e) => self.set_status(format!("Reload failed: {}", e)),
            }
            self.loading = false;
        }

        // Clear status message after 3 seconds
        if let Some(time) = self.status_message_time {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    fn reload_rows(&mut self) -> Result<usize> {
        self.store = match &self.data_path {
            Some(path) => RowStore::from_rows(crate::grid::rows_from_file(path)?),
            None => RowStore::sample(),
        };
        self.selected = 0;
        Ok(self.store.len())
    }
}
