//! # Roster Core
//!
//! UI-free domain layer for the Roster admin table. Everything the table
//! does to its data lives here so it can be exercised without a window:
//!
//! - [`user`]: the [`UserRecord`] fetched from the member feed and the closed
//!   set of [`UserField`]s the table searches and edits
//! - [`row`]: [`UiRow`], a record plus its transient edit state
//! - [`query`]: case-insensitive search and page slicing
//! - [`selection`]: the checkbox [`Selection`] used for bulk deletes
//! - [`config`]: [`ListConfig`] and the behaviour policies it carries
//! - [`state`]: [`UserListState`], the container the view reads from and the
//!   update loop mutates through its transition methods
//!
//! ## Example
//!
//! ```
//! use roster_core::{ListConfig, PageRequest, UserListState, UserRecord};
//!
//! let records: Vec<UserRecord> = serde_json::from_str(
//!     r#"[{"id":"1","name":"Alice","email":"a@x.io","role":"admin"},
//!         {"id":"2","name":"Bob","email":"b@x.io","role":"member"}]"#,
//! )
//! .unwrap();
//!
//! let mut list = UserListState::with_records(ListConfig::default(), records);
//! list.set_search_input("bob");
//! assert_eq!(list.filtered_len(), 1);
//! assert_eq!(list.go_to(PageRequest::Last).unwrap(), 1);
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod query;
pub mod row;
pub mod selection;
pub mod state;
pub mod user;

pub use config::{
    EmptySelectionPolicy, ListConfig, PagePolicy, SearchTrigger, SelectAllScope,
};
pub use error::{ConfigError, ListError, ListResult};
pub use ids::UserId;
pub use query::pagination::{PageRequest, Pager};
pub use row::{EditBuffer, RowMode, UiRow};
pub use selection::Selection;
pub use state::{UserListState, ViewState};
pub use user::{UserField, UserRecord};
