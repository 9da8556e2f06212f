use devspace_core::RuntimeIdentity;
use tokio::sync::mpsc;

/// The infrastructure observed a runtime die outside a client-initiated
/// stop. The runtime is already gone when this fires.
#[derive(Debug, Clone)]
pub struct RuntimeAbnormalStoppedEvent {
    pub identity: RuntimeIdentity,
    pub error_message: String,
}

/// The infrastructure is tearing a runtime down after an unrecoverable
/// failure; a stopped event follows.
#[derive(Debug, Clone)]
pub struct RuntimeAbnormalStoppingEvent {
    pub identity: RuntimeIdentity,
    pub error_message: String,
}

#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    AbnormalStopping(RuntimeAbnormalStoppingEvent),
    AbnormalStopped(RuntimeAbnormalStoppedEvent),
}

/// Channel pair connecting infrastructure backends to the orchestrator's
/// event loop.
pub fn event_channel(capacity: usize) -> (mpsc::Sender<RuntimeEvent>, mpsc::Receiver<RuntimeEvent>) {
    mpsc::channel(capacity)
}
