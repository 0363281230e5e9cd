//! Core domain layer for the cinelog catalog service.
//!
//! Zero-I/O building blocks shared by the repository and API layers:
//! ID/timestamp aliases, the domain error taxonomy, pagination
//! normalization, and rating-score rules.

pub mod error;
pub mod pagination;
pub mod rating;
pub mod types;
