//! Core types and trait definitions for the Roster employee service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod employee;
pub mod store;

pub use employee::{Employee, EmployeeDraft};
pub use store::EmployeeStore;
