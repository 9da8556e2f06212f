//! Well-known workspace attribute keys persisted through the dao.

/// Millisecond timestamp of the last stop, normal or abnormal.
pub const STOPPED_ATTRIBUTE: &str = "stoppedAt";

/// "true" when the last stop was caused by an infrastructure failure
/// rather than a user request.
pub const STOPPED_ABNORMALLY_ATTRIBUTE: &str = "stoppedAbnormally";

/// Human-readable cause recorded alongside an abnormal stop.
pub const ERROR_MESSAGE_ATTRIBUTE: &str = "errorMessage";

/// The infrastructure namespace the workspace last (or currently) runs in.
pub const INFRASTRUCTURE_NAMESPACE_ATTRIBUTE: &str = "infrastructureNamespace";
