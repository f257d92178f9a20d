//! Pip valuation - domain models, services, and traits.

mod valuation_model;
mod valuation_service;
mod valuation_traits;


pub use valuation_model::PipCalculationResult;
pub use valuation_service::PipValuationService;
pub use valuation_traits::PipValuationServiceTrait;
