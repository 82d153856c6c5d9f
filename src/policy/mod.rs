//! Replacement policies.
//!
//! - [`adaptive`]: recency/frequency lists with ghost-driven split adaptation.

pub mod adaptive;
