//! Domain layer for the bob2build agency site.
//!
//! Holds everything that does not touch the network: the catalog of case
//! studies, services and team data with its query operations, the contact
//! lead schema and its validation rules, the submission status machine, and
//! the site color scheme.

pub mod catalog;
pub mod error;
pub mod lead;
pub mod submission;
pub mod theme;
pub mod types;
pub mod validation;
