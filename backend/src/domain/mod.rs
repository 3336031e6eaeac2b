//! # Domain Module
//!
//! Business rules of CowManager: farmer login, herd management, insemination
//! records, the derived pregnancy and heat-check views, and the advisory
//! assistant.
//!
//! Services work on the domain models and commands defined here and reach
//! storage only through the traits in `crate::storage::traits`. The derived
//! views come from `shared::herd`, which the frontend uses as well, so both
//! sides compute them the same way.
//!
//! ## Business Rules
//!
//! - Every cow and insemination record belongs to exactly one farmer
//! - Deleting a cow deletes its insemination records
//! - A record starts unconfirmed and, once confirmed, stays confirmed
//! - A pending record needs a heat check 22 days after insemination

pub mod advisory_service;
pub mod commands;
pub mod cow_service;
pub mod errors;
pub mod farmer_service;
pub mod herd_service;
pub mod insemination_service;
pub mod models;

pub use advisory_service::{AdvisoryService, TextGenerator};
pub use cow_service::CowService;
pub use errors::{AdvisoryError, DomainError};
pub use farmer_service::FarmerService;
pub use herd_service::HerdService;
pub use insemination_service::InseminationService;
