//! The user table's state container.
//!
//! [`UserListState`] owns the loaded rows, the checkbox selection and the
//! search/paging position. Every mutation goes through one of its
//! transition methods, which either apply completely or return a
//! [`ListError`] and leave the state untouched. After each successful
//! transition:
//!
//! - at most one row is in edit mode
//! - the selection only holds ids of loaded rows
//! - `1 <= current_page <= max(1, total_pages)`
//!
//! The visible slice is derived on demand: rows are filtered by the applied
//! search term first, and the filtered sequence is then paginated.

use crate::config::{EmptySelectionPolicy, ListConfig, SearchTrigger, SelectAllScope};
use crate::error::{ListError, ListResult};
use crate::ids::UserId;
use crate::query::pagination::{self, PageRequest, Pager};
use crate::query::search;
use crate::row::UiRow;
use crate::selection::Selection;
use crate::user::{UserField, UserRecord};

/// Search and paging position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Text currently in the search box.
    pub search_input: String,
    /// Term the rows are filtered by.
    pub search_term: String,
    /// 1-based.
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            search_term: String::new(),
            current_page: 1,
        }
    }
}

/// Loaded rows, the checkbox selection and the view position.
///
/// All mutation goes through the transition methods, which keep
/// `current_page` inside `1..=max(1, total_pages)` and the selection a
/// subset of the loaded ids.
#[derive(Debug, Clone, Default)]
pub struct UserListState {
    config: ListConfig,
    rows: Vec<UiRow>,
    selection: Selection,
    view: ViewState,
}

impl UserListState {
    /// An empty list.
    pub fn new(config: ListConfig) -> Self {
        Self {
            config,
            rows: Vec::new(),
            selection: Selection::default(),
            view: ViewState::default(),
        }
    }

    /// A list already holding `records`, on page 1.
    pub fn with_records<I>(config: ListConfig, records: I) -> Self
    where
        I: IntoIterator<Item = UserRecord>,
    {
        let mut state = Self::new(config);
        state.load(records);
        state
    }

    /// Replace the collection with freshly loaded records. Clears the
    /// selection and returns to page 1; the search term is kept.
    pub fn load<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = UserRecord>,
    {
        self.rows = records.into_iter().map(UiRow::new).collect();
        self.selection.clear();
        self.view.current_page = 1;
        log::info!("Loaded {} rows into the user list", self.rows.len());
    }

    // Accessors

    /// The configuration the list was built with.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Every loaded row, ignoring the search.
    pub fn rows(&self) -> &[UiRow] {
        &self.rows
    }

    /// Number of loaded rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Nothing loaded, or everything deleted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look a row up by id.
    pub fn row(&self, id: &UserId) -> Option<&UiRow> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Search text and page position.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// 1-based page being shown.
    pub fn current_page(&self) -> usize {
        self.view.current_page
    }

    /// Checked rows.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether the row `id` is checked.
    pub fn is_selected(&self, id: &UserId) -> bool {
        self.selection.contains(id)
    }

    /// The row in edit mode, if any. There is at most one.
    pub fn editing_row(&self) -> Option<&UiRow> {
        self.rows.iter().find(|row| row.is_editing())
    }

    // Derived views

    /// Rows matching the applied search term, in collection order.
    pub fn filtered(&self) -> Vec<&UiRow> {
        search::filter_rows(&self.rows, &self.view.search_term)
    }

    /// Number of rows matching the applied search term.
    pub fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    /// Pages in the filtered set.
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered_len(), self.config.page_size)
    }

    /// Rows on the current page of the filtered set.
    pub fn visible_rows(&self) -> Vec<&UiRow> {
        let filtered = self.filtered();
        pagination::page_slice(
            &filtered,
            self.view.current_page,
            self.config.page_size,
        )
        .to_vec()
    }

    /// Summary for the pagination controls.
    pub fn pager(&self) -> Pager {
        Pager::new(self.view.current_page, self.total_pages())
    }

    // Search

    /// Update the search box text. With [`SearchTrigger::Live`] the term is
    /// applied straight away.
    pub fn set_search_input(&mut self, input: impl Into<String>) {
        self.view.search_input = input.into();
        if self.config.search_trigger == SearchTrigger::Live {
            self.view.search_term = self.view.search_input.clone();
            self.clamp_page();
        }
    }

    /// The search control was pressed: apply the typed text and go back to
    /// the first page.
    pub fn submit_search(&mut self) {
        self.view.search_term = self.view.search_input.clone();
        self.view.current_page = 1;
        log::debug!(
            "Search '{}' matched {} of {} rows",
            self.view.search_term,
            self.filtered_len(),
            self.rows.len()
        );
    }

    // Paging

    /// Move to another page. Out-of-range requests follow the configured
    /// [`crate::PagePolicy`]. Returns the page now shown.
    pub fn go_to(&mut self, request: PageRequest) -> ListResult<usize> {
        let page = request.resolve(
            self.view.current_page,
            self.total_pages(),
            self.config.page_policy,
        )?;
        self.view.current_page = page;
        Ok(page)
    }

    // Editing

    /// Put `id` into edit mode. Any other row in edit mode drops its
    /// uncommitted changes and returns to viewing.
    pub fn begin_edit(&mut self, id: &UserId) -> ListResult<()> {
        let index = self.index_of(id)?;
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i == index {
                row.begin_edit();
            } else if row.is_editing() {
                row.abandon_edit();
            }
        }
        Ok(())
    }

    /// Buffer a new value for `field` on the row being edited.
    pub fn edit_field(
        &mut self,
        id: &UserId,
        field: UserField,
        value: impl Into<String>,
    ) -> ListResult<()> {
        let index = self.index_of(id)?;
        self.rows[index].buffer_edit(field, value.into())
    }

    /// Commit the buffered edits of `id`. Returns the fields written.
    pub fn save(&mut self, id: &UserId) -> ListResult<Vec<UserField>> {
        let index = self.index_of(id)?;
        let written = self.rows[index].commit()?;
        // Committed values may no longer match the search.
        self.clamp_page();
        Ok(written)
    }

    // Deletion

    /// Remove one row, whatever its edit state, and drop it from the
    /// selection.
    pub fn delete(&mut self, id: &UserId) -> ListResult<UserRecord> {
        let index = self.index_of(id)?;
        let row = self.rows.remove(index);
        self.selection.remove(id);
        self.clamp_page();
        Ok(row.into_record())
    }

    /// Remove every selected row and empty the selection. Returns how many
    /// rows were removed.
    pub fn delete_selected(&mut self) -> ListResult<usize> {
        if self.selection.is_empty() {
            return match self.config.empty_selection {
                EmptySelectionPolicy::Notify => Err(ListError::EmptySelection),
                EmptySelectionPolicy::Ignore => Ok(0),
            };
        }
        let before = self.rows.len();
        let selection = &self.selection;
        self.rows.retain(|row| !selection.contains(row.id()));
        self.selection.clear();
        self.clamp_page();
        Ok(before - self.rows.len())
    }

    // Selection

    /// Flip the checkbox of `id`. Returns whether it is now selected.
    pub fn toggle_selected(&mut self, id: &UserId) -> ListResult<bool> {
        self.index_of(id)?;
        Ok(self.selection.toggle(id))
    }

    /// Select every row in the configured [`SelectAllScope`].
    pub fn select_all(&mut self) {
        let ids: Vec<UserId> = self.scope_ids().into_iter().cloned().collect();
        self.selection.replace(ids);
    }

    /// Uncheck every row.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The scope is non-empty and fully selected.
    pub fn all_selected(&self) -> bool {
        let ids = self.scope_ids();
        !ids.is_empty() && self.selection.covers(ids)
    }

    fn scope_ids(&self) -> Vec<&UserId> {
        match self.config.select_all_scope {
            SelectAllScope::Filtered => {
                self.filtered().into_iter().map(UiRow::id).collect()
            }
            SelectAllScope::Page => {
                self.visible_rows().into_iter().map(UiRow::id).collect()
            }
            SelectAllScope::Everything => self.rows.iter().map(UiRow::id).collect(),
        }
    }

    fn index_of(&self, id: &UserId) -> ListResult<usize> {
        self.rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or_else(|| ListError::UnknownUser(id.clone()))
    }

    fn clamp_page(&mut self) {
        let max = pagination::last_page(self.total_pages());
        self.view.current_page = self.view.current_page.clamp(1, max);
    }
}
