//! In-memory stand-ins for the network services

pub mod stubs;

pub use stubs::StaticUserDirectory;
