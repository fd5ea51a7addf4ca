//! Admin record service: serves one administrative document from Cloud
//! Firestore over a single HTTP route.
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
