//! Payroll calculation engine.
//!
//! This crate provides the pure computation core of a payroll
//! administration system: converting clock-in/clock-out schedules into
//! payable hours, rolling work records up into summaries, and producing
//! deterministic payslip pay breakdowns.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
