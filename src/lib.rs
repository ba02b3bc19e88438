//! Numa Care - Care Journey Status Model
//!
//! This crate implements the status model behind the Numa Care patient
//! portal dashboard: lifecycle-tagged payment steps and delivery
//! checkpoints, aggregate progress metrics, and per-item presentation
//! directives consumed by a rendering layer.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
