#[cfg(feature = "server")]
pub mod startup;
