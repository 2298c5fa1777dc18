//! Shared message plumbing used across domains

pub mod messages;
