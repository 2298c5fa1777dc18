//! Look and layout of the admin table

pub mod theme;
pub mod views;
