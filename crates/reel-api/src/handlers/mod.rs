//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod engagement;
pub mod feed;
pub mod health;
pub mod postings;
