//! HTTP handlers for the admin service.

pub mod admin;
