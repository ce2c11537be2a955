//! core
//!
//! Core domain types and configuration for gitflags.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Family, FlagSet, Discriminant, etc.
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing keeps families apart at compile time where possible and
//!   at run time where not
//! - Schemas are strict and self-describing

pub mod config;
pub mod types;
