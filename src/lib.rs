//! RepScan - a blockchain explorer dashboard for the terminal
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Datasets & Pages
//! - [`dataset`] - Table filtering and CSV assembly
//! - [`pages`] - One dataset module per explorer page
//!
//! ## Charts & View State
//! - [`charts`] - Static time series behind the dashboards
//! - [`view`] - Time ranges, rows-per-page, pagination, tabs
//!
//! ## Caching & Export
//! - [`cache`] - LRU memo for filter results
//! - [`export`] - CSV download analog
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//! - [`cli`] - Terminal rendering utilities
//! - [`format`] - Display formatting helpers

#![forbid(unsafe_code)]

// ============================================================================
// Datasets & Pages
// ============================================================================
pub mod dataset;
pub mod pages;

// ============================================================================
// Charts & View State
// ============================================================================
pub mod charts;
pub mod view;

// ============================================================================
// Caching & Export
// ============================================================================
pub mod cache;
pub mod export;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
