//! Hosted-service contracts: bootstrapper, configurator, controller

use thiserror::Error;

/// Errors raised by a hosted service's lifecycle operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Service failed to start: {0}")]
    StartFailed(String),

    #[error("Service failed to stop: {0}")]
    StopFailed(String),

    #[error("Service failed to pause: {0}")]
    PauseFailed(String),

    #[error("Service failed to continue: {0}")]
    ContinueFailed(String),
}

/// Control surface of the hosted service
///
/// Exactly one controller exists per shelf, created during initialization
/// and owned exclusively by the shelf. `resume` carries the protocol's
/// Continue semantics (`continue` is a reserved word).
pub trait ServiceController {
    fn start(&mut self) -> Result<(), ServiceError>;
    fn stop(&mut self) -> Result<(), ServiceError>;
    fn pause(&mut self) -> Result<(), ServiceError>;
    fn resume(&mut self) -> Result<(), ServiceError>;
}

type LifecycleHandler = Box<dyn FnMut() -> Result<(), ServiceError> + Send>;

/// Collects lifecycle handlers registered by a bootstrapper
///
/// Starts empty; a bootstrapper registers any subset of handlers, then the
/// shelf calls `create` exactly once to obtain the controller. Unregistered
/// operations are no-ops.
#[derive(Default)]
pub struct ServiceConfigurator {
    on_start: Option<LifecycleHandler>,
    on_stop: Option<LifecycleHandler>,
    on_pause: Option<LifecycleHandler>,
    on_resume: Option<LifecycleHandler>,
}

impl ServiceConfigurator {
    /// Creates an empty configurator
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the start handler
    pub fn on_start<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut() -> Result<(), ServiceError> + Send + 'static,
    {
        self.on_start = Some(Box::new(handler));
        self
    }

    /// Registers the stop handler
    pub fn on_stop<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut() -> Result<(), ServiceError> + Send + 'static,
    {
        self.on_stop = Some(Box::new(handler));
        self
    }

    /// Registers the pause handler
    pub fn on_pause<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut() -> Result<(), ServiceError> + Send + 'static,
    {
        self.on_pause = Some(Box::new(handler));
        self
    }

    /// Registers the continue handler
    pub fn on_resume<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut() -> Result<(), ServiceError> + Send + 'static,
    {
        self.on_resume = Some(Box::new(handler));
        self
    }

    /// Consumes the configurator and builds the service controller.
    pub fn create(self) -> Box<dyn ServiceController + Send> {
        Box::new(HandlerController {
            on_start: self.on_start,
            on_stop: self.on_stop,
            on_pause: self.on_pause,
            on_resume: self.on_resume,
        })
    }
}

/// Controller backed by the handlers a bootstrapper registered
struct HandlerController {
    on_start: Option<LifecycleHandler>,
    on_stop: Option<LifecycleHandler>,
    on_pause: Option<LifecycleHandler>,
    on_resume: Option<LifecycleHandler>,
}

fn invoke(handler: &mut Option<LifecycleHandler>) -> Result<(), ServiceError> {
    match handler {
        Some(handler) => handler(),
        None => Ok(()),
    }
}

impl ServiceController for HandlerController {
    fn start(&mut self) -> Result<(), ServiceError> {
        invoke(&mut self.on_start)
    }

    fn stop(&mut self) -> Result<(), ServiceError> {
        invoke(&mut self.on_stop)
    }

    fn pause(&mut self) -> Result<(), ServiceError> {
        invoke(&mut self.on_pause)
    }

    fn resume(&mut self) -> Result<(), ServiceError> {
        invoke(&mut self.on_resume)
    }
}

/// Hosting-configuration contract implemented by the hosted application
///
/// The shelf constructs the resolved bootstrapper and hands it a fresh
/// configurator; the bootstrapper is free to register any lifecycle
/// handlers it needs.
pub trait Bootstrapper {
    fn initialize_hosted_service(&self, config: &mut ServiceConfigurator);
}
