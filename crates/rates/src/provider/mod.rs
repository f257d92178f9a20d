//! Rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `RateProvider` trait that all rate sources implement
//! - The HTTP implementation against an exchangerate.host-style API
//!
//! Resolution never fails: implementations absorb transport errors,
//! timeouts, and malformed payloads into the static fallback table and
//! tag the returned rate with its source instead.

mod traits;

pub mod exchange_host;

pub use exchange_host::ExchangeHostProvider;
pub use traits::RateProvider;
