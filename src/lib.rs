//! This crate provides the date and recurrence handling of a community event listing.
//!
//! Visitors submit events for one or several local dates. The [`builder`] turns a submission into per-date [`Occurrence`]s,
//! converting wall-clock times to UTC with the [`convert`] module (which knows about daylight saving time changes). \
//! When a series of events is edited, the [`reconcile`] module computes which stored occurrences have to be deleted, updated or inserted.
//!
//! These components do not store anything. A [`SeriesManager`](manager::SeriesManager) applies their results to any
//! [`PersistenceGateway`](traits::PersistenceGateway), and reports what could (or could not) be saved. \
//! An in-memory gateway is provided in the [`store`] module.

pub mod error;
pub use error::{EventError, EventResult, PersistenceError};
pub mod config;
pub mod timezone;
pub use timezone::TimezoneRule;
pub mod convert;

pub mod item;
mod occurrence;
pub use occurrence::{ApprovalState, Occurrence};
mod series;
pub use series::Series;
pub mod submission;

pub mod builder;
pub mod reconcile;
pub mod approval;
pub mod moderation;

pub mod traits;
pub mod store;
pub mod mock_behaviour;
pub mod manager;
pub use manager::SeriesManager;

pub mod utils;
