//! Server-side product search and catalog access.

pub mod api;
pub mod db_utils;
pub mod server_extra;
