//! HTML rendering helpers shared by the page handlers

pub mod layout;
pub mod listing;
pub mod share;
