//! Decision Support - Multi-criteria decision and risk scoring engines
//!
//! This crate ranks options by weighted-sum multi-criteria analysis, scores
//! independent risk factors by probability × impact, and lays out milestones
//! for SMART goals. The engines are pure; the HTTP surface is stateless.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod server;
pub mod telemetry;
