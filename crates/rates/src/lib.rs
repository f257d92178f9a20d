//! Pipcalc Rates Crate
//!
//! This crate resolves exchange rates between ISO-4217 currency codes for
//! the pipcalc application.
//!
//! # Overview
//!
//! Rate resolution is a two-step ladder with a guaranteed floor:
//!
//! ```text
//! +--------------------+
//! |  convert endpoint  |  (direct base -> target quote)
//! +--------------------+
//!           | malformed payload
//!           v
//! +--------------------+
//! |  latest endpoint   |  (rates-for-base, filtered to target)
//! +--------------------+
//!           | any failure
//!           v
//! +--------------------+
//! |  StaticRateTable   |  (USD-anchored snapshot, rebased arithmetically)
//! +--------------------+
//! ```
//!
//! The public [`RateProvider`] contract is infallible: every transport
//! failure, timeout, or malformed payload is absorbed into the static
//! fallback, and the returned [`ExchangeRate`] carries a [`RateSource`]
//! marker so callers can tell a live quote from an estimated one.
//!
//! # Core Types
//!
//! - [`RateProvider`] - the resolution contract implemented by providers
//! - [`ExchangeRate`] - a single source-tagged rate between two currencies
//! - [`RatesSnapshot`] - a full latest-rates table for one base currency
//! - [`ExchangeHostProvider`] - HTTP implementation with fallback
//! - [`StaticRateTable`] - the deterministic offline floor

pub mod errors;
pub mod fallback;
pub mod models;
pub mod provider;

pub use errors::RateError;
pub use fallback::StaticRateTable;
pub use models::{ExchangeRate, RateSource, RatesSnapshot};
pub use provider::{ExchangeHostProvider, RateProvider};
