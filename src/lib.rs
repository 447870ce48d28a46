//! # Object-Oriented Concepts in Rust
//!
//! Small, self-contained models of the classic OOP teaching examples,
//! rewritten the way Rust expresses them:
//!
//! ## Encapsulation
//! - [`account::BankAccount`] keeps its balance private behind guarded methods
//!
//! ## Inheritance
//! - [`inheritance`] replaces public/private/protected bases with composition
//!   and a trait that only the "public" specialization implements
//!
//! ## Polymorphism
//! - [`polymorphism::Vehicle`] trait objects (overriding)
//! - `start` / `start_in` as the overloading counterpart
//!
//! ## Abstraction
//! - [`abstraction::Drivable`] as a pure interface behind `Box<dyn _>`
//!
//! ## Relationships
//! - association, aggregation (borrowed members) and composition (owned members)
//!
//! ## Builder
//! - [`http_request::HttpRequestBuilder`] with a [`http_request::RequestDirector`]
//!
//! Every concept has a binary: `cargo run --bin <concept>`.

pub mod abstraction;
pub mod account;
pub mod config;
pub mod console;
pub mod error;
pub mod http_request;
pub mod inheritance;
pub mod logging;
pub mod polymorphism;
pub mod relationships;
pub mod scenarios;

pub use config::ShowcaseConfig;
pub use error::Error;
pub use scenarios::{Line, Transcript};

/// Loads the configuration and installs logging and console styling.
///
/// Every binary calls this before running its scenario.
pub fn bootstrap() -> Result<ShowcaseConfig, Error> {
    let config = ShowcaseConfig::discover()?;
    logging::init(&config.logging)?;
    console::apply_color_choice(config.color);
    tracing::debug!(color = config.color, level = %config.logging.level, "showcase bootstrapped");
    Ok(config)
}
