//! Two-party Downsian competition on a one-dimensional policy line.
//!
//! A synthetic electorate is drawn with [`electorate::generate`], then
//! [`voting::evaluate`] assigns each voter to the nearer party and reports
//! the median voter and both vote shares.

pub mod commands;
pub mod config;
pub mod electorate;
pub mod error;
pub mod models;
pub mod report;
pub mod voting;

pub use error::{DownsianError, Result};
