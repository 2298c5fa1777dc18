//! Roster Admin library
//!
//! Library surface behind the `roster-admin` binary in `src/main.rs`: the
//! iced application shell, the user-list and feedback domains, the table
//! views, and the HTTP loader for the member feed.
//!
//! Notes
//! - The list logic itself lives in `roster-core`; this crate wires it to
//!   messages, tasks and widgets.
//! - Exposed as a library mainly so integration tests can drive `update`.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod update;
pub mod view;
