use devspace_core::{Command, Environment, Recipe, Result, Warning};

/// Recipe type dispatched to when a workspace has no environment at all.
pub const NO_ENVIRONMENT_RECIPE_TYPE: &str = "no-environment";

/// Resolved, infrastructure-ready form of an environment spec.
#[derive(Debug, Clone, Default)]
pub struct InternalEnvironment {
    pub recipe: Option<Recipe>,
    pub warnings: Vec<Warning>,
    pub commands: Vec<Command>,
}

/// One factory is registered per recipe type; the orchestrator dispatches
/// on the recipe type of the environment being resolved.
pub trait InternalEnvironmentFactory: Send + Sync {
    /// `environment` is `None` for the no-environment case.
    fn create(&self, environment: Option<&Environment>) -> Result<InternalEnvironment>;
}
