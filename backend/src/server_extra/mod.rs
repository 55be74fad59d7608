//! Plain REST routes mounted next to the server functions.

pub mod products_rest;
