//! HTTP layer

pub mod services;
