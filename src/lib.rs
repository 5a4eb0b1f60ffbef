//! Linkshelf - save, shorten and share links, even offline
//!
//! This library provides the core functionality for Linkshelf: the persisted
//! link collection, URL acceptance, in-app short links, the server-rendered
//! UI, and an offline asset cache worker.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: Command-line interface
//! - **qr**: QR code rendering for the web UI and the terminal
//!
//! # Architecture
//! - `storage`: Key-value stores and the persisted link collection
//! - `services`: Link book, redirect resolver, sharing, QR codes
//! - `ui`: Page components and UI events
//! - `worker`: Versioned, cache-first static asset worker
//! - `api`: HTTP services
//! - `interfaces`: User interfaces (CLI)
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging

#[cfg(feature = "server")]
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod ui;
pub mod utils;
pub mod worker;
