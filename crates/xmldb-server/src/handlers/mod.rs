//! HTTP request handlers.

pub(crate) mod docs;
pub(crate) mod home;
pub(crate) mod theme;
