//! Diagnostics for the Avro composition engine.

pub mod commands;
