//! Tradeboard Dashboard Backend Library
//!
//! Core components for the tradeboard stock-dashboard backend: the
//! holdings/positions/orders collections, the order placement flow, and
//! the HTTP handlers serving the dashboard tables.

pub mod application;
pub mod config;
pub mod domain;
pub mod persistence;
