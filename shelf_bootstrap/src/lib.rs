//! # Shelf Bootstrap
//!
//! Contracts for wiring a hosted service into a shelf, and the registry
//! that discovers which bootstrapper to use.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: candidates are registered by the hosting
//!   process, not discovered by scanning loaded code
//! - **Ambiguity is a hard failure**: zero or many candidates abort
//!   initialization; the resolver never picks silently
//! - **Mechanism not policy**: the configurator collects lifecycle handlers;
//!   what they do is the hosted application's business

pub mod registry;
pub mod service;

pub use registry::{
    BootstrapperDescriptor, BootstrapperRegistry, RegistryError, ResolveError,
};
pub use service::{Bootstrapper, ServiceConfigurator, ServiceController, ServiceError};
