//! Bootstrapper registry and resolution
//!
//! The hosting process registers a finite set of candidate bootstrappers;
//! resolution deterministically selects exactly one or fails. There is no
//! heuristic tie-break: zero candidates and more than one candidate are
//! both hard failures.

use crate::service::Bootstrapper;
use std::fmt;
use thiserror::Error;

/// Constructor for a registered bootstrapper.
pub type BootstrapperConstructor = Box<dyn Fn() -> Box<dyn Bootstrapper> + Send + Sync>;

/// Descriptor for a registered bootstrapper candidate
pub struct BootstrapperDescriptor {
    /// Stable name used for explicit selection and error reporting
    pub name: String,
    /// Constructor for the bootstrapper
    pub construct: BootstrapperConstructor,
}

impl BootstrapperDescriptor {
    /// Creates a descriptor for a candidate bootstrapper.
    pub fn new<F>(name: impl Into<String>, construct: F) -> Self
    where
        F: Fn() -> Box<dyn Bootstrapper> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            construct: Box::new(construct),
        }
    }
}

impl fmt::Debug for BootstrapperDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapperDescriptor")
            .field("name", &self.name)
            .finish()
    }
}

/// Error types for registry operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A candidate with this name is already registered
    #[error("Bootstrapper already registered: {0}")]
    AlreadyRegistered(String),
}

/// Error types for bootstrapper resolution
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Explicitly requested bootstrapper is not a registered candidate
    #[error("Bootstrapper '{0}' is not a registered candidate")]
    UnknownBootstrapper(String),

    /// No candidate is registered
    #[error("The bootstrapper was not found")]
    NotFound,

    /// More than one candidate is registered and none was named explicitly
    #[error("Unable to identify the bootstrapper, more than one found: {}", .0.join(", "))]
    Ambiguous(Vec<String>),
}

/// Finite set of candidate bootstrappers supplied by the hosting process
#[derive(Debug, Default)]
pub struct BootstrapperRegistry {
    candidates: Vec<BootstrapperDescriptor>,
}

impl BootstrapperRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    /// Registers a candidate bootstrapper
    pub fn register(&mut self, descriptor: BootstrapperDescriptor) -> Result<(), RegistryError> {
        if self.candidates.iter().any(|c| c.name == descriptor.name) {
            return Err(RegistryError::AlreadyRegistered(descriptor.name));
        }
        self.candidates.push(descriptor);
        Ok(())
    }

    /// Returns the registered candidates in registration order.
    pub fn descriptors(&self) -> &[BootstrapperDescriptor] {
        &self.candidates
    }

    /// Returns the number of registered candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns whether no candidate is registered.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Resolves exactly one bootstrapper.
    ///
    /// With an explicit name, that candidate is returned if registered and
    /// no further search occurs. Without one, resolution requires exactly
    /// one registered candidate.
    pub fn resolve(&self, explicit: Option<&str>) -> Result<&BootstrapperDescriptor, ResolveError> {
        if let Some(name) = explicit {
            return self
                .candidates
                .iter()
                .find(|c| c.name == name)
                .ok_or_else(|| ResolveError::UnknownBootstrapper(name.to_string()));
        }

        match self.candidates.len() {
            0 => Err(ResolveError::NotFound),
            1 => Ok(&self.candidates[0]),
            _ => Err(ResolveError::Ambiguous(
                self.candidates.iter().map(|c| c.name.clone()).collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ServiceConfigurator;

    struct BootstrapperA;
    struct BootstrapperB;

    impl Bootstrapper for BootstrapperA {
        fn initialize_hosted_service(&self, config: &mut ServiceConfigurator) {
            config.on_start(|| Ok(()));
        }
    }

    impl Bootstrapper for BootstrapperB {
        fn initialize_hosted_service(&self, _config: &mut ServiceConfigurator) {}
    }

    fn descriptor_a() -> BootstrapperDescriptor {
        BootstrapperDescriptor::new("a", || Box::new(BootstrapperA))
    }

    fn descriptor_b() -> BootstrapperDescriptor {
        BootstrapperDescriptor::new("b", || Box::new(BootstrapperB))
    }

    #[test]
    fn test_resolve_single_candidate() {
        let mut registry = BootstrapperRegistry::new();
        registry.register(descriptor_a()).unwrap();

        let resolved = registry.resolve(None).unwrap();
        assert_eq!(resolved.name, "a");
    }

    #[test]
    fn test_resolve_empty_registry_not_found() {
        let registry = BootstrapperRegistry::new();
        assert_eq!(registry.resolve(None).unwrap_err(), ResolveError::NotFound);
    }

    #[test]
    fn test_resolve_two_candidates_ambiguous_names_both() {
        let mut registry = BootstrapperRegistry::new();
        registry.register(descriptor_a()).unwrap();
        registry.register(descriptor_b()).unwrap();

        let err = registry.resolve(None).unwrap_err();
        assert_eq!(
            err,
            ResolveError::Ambiguous(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_explicit_name_skips_search() {
        let mut registry = BootstrapperRegistry::new();
        registry.register(descriptor_a()).unwrap();
        registry.register(descriptor_b()).unwrap();

        // Ambiguous without an explicit name, resolvable with one.
        let resolved = registry.resolve(Some("b")).unwrap();
        assert_eq!(resolved.name, "b");
    }

    #[test]
    fn test_explicit_unknown_name_fails() {
        let mut registry = BootstrapperRegistry::new();
        registry.register(descriptor_a()).unwrap();

        let err = registry.resolve(Some("missing")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownBootstrapper("missing".to_string())
        );
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = BootstrapperRegistry::new();
        registry.register(descriptor_a()).unwrap();

        let err = registry.register(descriptor_a()).unwrap_err();
        assert_eq!(err, RegistryError::AlreadyRegistered("a".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolved_descriptor_constructs_bootstrapper() {
        let mut registry = BootstrapperRegistry::new();
        registry.register(descriptor_a()).unwrap();

        let resolved = registry.resolve(None).unwrap();
        let bootstrapper = (resolved.construct)();
        let mut config = ServiceConfigurator::new();
        bootstrapper.initialize_hosted_service(&mut config);
        let mut controller = config.create();
        controller.start().unwrap();
    }
}
