//! Behaviour knobs of the user table.
//!
//! The table has shipped in more than one flavour (different page sizes,
//! paging strictness, select-all reach and empty bulk-delete handling).
//! Each difference is a value here instead of a separate component.

use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(15) {
    Some(size) => size,
    None => unreachable!(),
};

/// What happens when a page outside `1..=max(1, total)` is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagePolicy {
    /// Move to the nearest valid page.
    #[default]
    Clamp,
    /// Refuse the request and stay on the current page.
    Reject,
}

/// Which rows the header checkbox selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectAllScope {
    /// Every row matching the current search.
    #[default]
    Filtered,
    /// Only the rows on the current page.
    Page,
    /// Every loaded row, ignoring the search.
    Everything,
}

/// Bulk delete with nothing selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptySelectionPolicy {
    /// Report [`crate::ListError::EmptySelection`] so the caller can tell
    /// the user.
    #[default]
    Notify,
    /// Do nothing.
    Ignore,
}

/// When typed search text starts filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTrigger {
    /// On every keystroke.
    #[default]
    Live,
    /// Only when the search control is pressed.
    #[serde(alias = "on_submit")]
    Submit,
}

/// Everything that tunes how the table behaves. Missing keys fall back to
/// the defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Rows per page.
    pub page_size: NonZeroUsize,
    /// Out-of-range page handling.
    pub page_policy: PagePolicy,
    /// Rows the header checkbox covers.
    pub select_all_scope: SelectAllScope,
    /// Bulk delete with nothing selected.
    pub empty_selection: EmptySelectionPolicy,
    /// When typed search text applies.
    pub search_trigger: SearchTrigger,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_policy: PagePolicy::default(),
            select_all_scope: SelectAllScope::default(),
            empty_selection: EmptySelectionPolicy::default(),
            search_trigger: SearchTrigger::default(),
        }
    }
}

impl ListConfig {
    /// Fails with [`ConfigError::ZeroPageSize`] for 0.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, ConfigError> {
        self.page_size =
            NonZeroUsize::new(page_size).ok_or(ConfigError::ZeroPageSize)?;
        Ok(self)
    }

    /// Replace the out-of-range page policy.
    pub fn with_page_policy(mut self, policy: PagePolicy) -> Self {
        self.page_policy = policy;
        self
    }

    /// Replace the select-all scope.
    pub fn with_select_all_scope(mut self, scope: SelectAllScope) -> Self {
        self.select_all_scope = scope;
        self
    }

    /// Replace the empty bulk delete policy.
    pub fn with_empty_selection(mut self, policy: EmptySelectionPolicy) -> Self {
        self.empty_selection = policy;
        self
    }

    /// Replace the search trigger.
    pub fn with_search_trigger(mut self, trigger: SearchTrigger) -> Self {
        self.search_trigger = trigger;
        self
    }
}

fn unknown(setting: &'static str, value: &str) -> ConfigError {
    ConfigError::UnknownValue {
        setting,
        value: value.to_string(),
    }
}

impl FromStr for PagePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(PagePolicy::Clamp),
            "reject" => Ok(PagePolicy::Reject),
            _ => Err(unknown("page policy", s)),
        }
    }
}

impl FromStr for SelectAllScope {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filtered" => Ok(SelectAllScope::Filtered),
            "page" => Ok(SelectAllScope::Page),
            "everything" | "all" => Ok(SelectAllScope::Everything),
            _ => Err(unknown("select-all scope", s)),
        }
    }
}

impl FromStr for EmptySelectionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "notify" => Ok(EmptySelectionPolicy::Notify),
            "ignore" => Ok(EmptySelectionPolicy::Ignore),
            _ => Err(unknown("empty-selection policy", s)),
        }
    }
}

impl FromStr for SearchTrigger {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(SearchTrigger::Live),
            "submit" | "on_submit" => Ok(SearchTrigger::Submit),
            _ => Err(unknown("search trigger", s)),
        }
    }
}
