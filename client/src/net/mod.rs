//! Network access for pages.

pub mod api;
