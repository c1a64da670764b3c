//! Shelf orchestrator: command dispatch and event emission

use crate::audit::DispatchRecord;
use shelf_bootstrap::{
    BootstrapperRegistry, ResolveError, ServiceConfigurator, ServiceController, ServiceError,
};
use shelf_channel::{ChannelError, InboundChannel, OutboundChannel};
use shelf_messages::{
    host_endpoint_id, shelf_endpoint_id, DecodeError, EndpointId, LifecycleCommand, LifecycleEvent,
};
use thiserror::Error;

/// Errors that can occur while running a shelf
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShelfError {
    /// Bootstrapper resolution failed
    #[error("Bootstrapper resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    /// Channel operation failed
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    /// Inbound envelope could not be decoded as a lifecycle command
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The hosted service's controller reported a failure
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// A command other than ReadyService arrived before initialization
    #[error("Received {0} before the shelf was initialized")]
    NotInitialized(LifecycleCommand),

    /// A second ReadyService arrived after initialization
    #[error("Shelf is already initialized")]
    AlreadyInitialized,
}

/// Channel addressing for a shelf, fixed for the process lifetime
///
/// Passed in explicitly at construction; the default uses the well-known
/// endpoint identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfAddressing {
    /// Outbound target: where the host listens for events
    pub host: EndpointId,
    /// Inbound source: where this shelf listens for commands
    pub shelf: EndpointId,
}

impl Default for ShelfAddressing {
    fn default() -> Self {
        Self {
            host: host_endpoint_id(),
            shelf: shelf_endpoint_id(),
        }
    }
}

/// The isolated service host shim
///
/// Owns one outbound channel to the host and one inbound channel from it,
/// resolves the bootstrapper on `ReadyService`, and mirrors every
/// controller transition as outbound events. Commands are processed
/// strictly one at a time through `run`.
pub struct Shelf<O: OutboundChannel, I: InboundChannel> {
    registry: BootstrapperRegistry,
    explicit: Option<String>,
    addressing: ShelfAddressing,
    // Declared before `outbound` so teardown drops the inbound receiver
    // first: no further command can be dispatched once the shelf is gone.
    inbound: I,
    outbound: O,
    controller: Option<Box<dyn ServiceController + Send>>,
    audit: Vec<DispatchRecord>,
}

impl<O: OutboundChannel, I: InboundChannel> Shelf<O, I> {
    /// Opens a shelf on the given channel endpoints.
    ///
    /// The inbound receiver is owned from the first instant, so no command
    /// can be missed, and exactly one `ShelfReady` event is sent before
    /// this returns. `explicit` names a registered bootstrapper to use
    /// instead of discovery.
    pub fn open(
        registry: BootstrapperRegistry,
        explicit: Option<String>,
        addressing: ShelfAddressing,
        outbound: O,
        inbound: I,
    ) -> Result<Self, ShelfError> {
        let shelf = Self {
            registry,
            explicit,
            addressing,
            inbound,
            outbound,
            controller: None,
            audit: Vec::new(),
        };
        shelf.emit(LifecycleEvent::ShelfReady)?;
        Ok(shelf)
    }

    /// Returns whether the hosted service has been bootstrapped.
    pub fn is_initialized(&self) -> bool {
        self.controller.is_some()
    }

    /// Returns the audit trail of dispatched commands.
    pub fn audit(&self) -> &[DispatchRecord] {
        &self.audit
    }

    /// Processes inbound commands until the channel closes.
    ///
    /// Commands are handled strictly one at a time, in arrival order. The
    /// first decode or dispatch error aborts the loop and surfaces to the
    /// caller; a closed inbound channel is a normal shutdown.
    pub fn run(&mut self) -> Result<(), ShelfError> {
        loop {
            let envelope = match self.inbound.receive() {
                Ok(envelope) => envelope,
                Err(ChannelError::Closed) => return Ok(()),
                Err(err) => return Err(err.into()),
            };
            let command = LifecycleCommand::from_envelope(&envelope)?;
            self.dispatch(command)?;
        }
    }

    /// Dispatches a single lifecycle command to its handler.
    pub fn dispatch(&mut self, command: LifecycleCommand) -> Result<(), ShelfError> {
        let result = match command {
            LifecycleCommand::ReadyService => self.initialize(),
            LifecycleCommand::StartService => self.handle_start(),
            LifecycleCommand::StopService => self.handle_stop(),
            LifecycleCommand::PauseService => self.handle_pause(),
            LifecycleCommand::ContinueService => self.handle_continue(),
        };
        self.audit.push(match &result {
            Ok(()) => DispatchRecord::completed(command),
            Err(err) => DispatchRecord::failed(command, err.to_string()),
        });
        result
    }

    /// Consumes the shelf, releasing the inbound subscription and then the
    /// outbound channel.
    pub fn shutdown(self) {
        // Field declaration order performs the release: inbound first.
    }

    /// Bootstraps the hosted service.
    ///
    /// Resolution failure propagates before a controller is ever created
    /// and no `ServiceReady` is sent; the host treats the silence after
    /// `ReadyService` as an initialization failure.
    fn initialize(&mut self) -> Result<(), ShelfError> {
        if self.controller.is_some() {
            return Err(ShelfError::AlreadyInitialized);
        }

        let descriptor = self.registry.resolve(self.explicit.as_deref())?;
        let bootstrapper = (descriptor.construct)();

        let mut config = ServiceConfigurator::new();
        bootstrapper.initialize_hosted_service(&mut config);
        self.controller = Some(config.create());

        self.emit(LifecycleEvent::ServiceReady)
    }

    /// Starts the hosted service, bracketed by Starting/Started events.
    ///
    /// A controller failure suppresses the trailing `ShelfStarted`: the
    /// host reads an unclosed bracket as a failed start.
    fn handle_start(&mut self) -> Result<(), ShelfError> {
        self.require_initialized(LifecycleCommand::StartService)?;
        self.emit(LifecycleEvent::ShelfStarting)?;
        if let Some(controller) = self.controller.as_mut() {
            controller.start()?;
        }
        self.emit(LifecycleEvent::ShelfStarted)
    }

    /// Stops the hosted service, bracketed by Stopping/Stopped events.
    fn handle_stop(&mut self) -> Result<(), ShelfError> {
        self.require_initialized(LifecycleCommand::StopService)?;
        self.emit(LifecycleEvent::ShelfStopping)?;
        if let Some(controller) = self.controller.as_mut() {
            controller.stop()?;
        }
        self.emit(LifecycleEvent::ShelfStopped)
    }

    /// Pauses the hosted service. No bracketing events by protocol.
    fn handle_pause(&mut self) -> Result<(), ShelfError> {
        let Some(controller) = self.controller.as_mut() else {
            return Err(ShelfError::NotInitialized(LifecycleCommand::PauseService));
        };
        controller.pause().map_err(ShelfError::from)
    }

    /// Continues a paused hosted service. No bracketing events by protocol.
    fn handle_continue(&mut self) -> Result<(), ShelfError> {
        let Some(controller) = self.controller.as_mut() else {
            return Err(ShelfError::NotInitialized(
                LifecycleCommand::ContinueService,
            ));
        };
        controller.resume().map_err(ShelfError::from)
    }

    fn require_initialized(&self, command: LifecycleCommand) -> Result<(), ShelfError> {
        if self.controller.is_none() {
            return Err(ShelfError::NotInitialized(command));
        }
        Ok(())
    }

    fn emit(&self, event: LifecycleEvent) -> Result<(), ShelfError> {
        let envelope = event.into_envelope(self.addressing.host)?;
        self.outbound.send(envelope)?;
        Ok(())
    }
}
