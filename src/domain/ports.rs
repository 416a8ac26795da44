use crate::domain::model::Registry;
use crate::utils::error::Result;

/// Where the registry lives between runs.
pub trait Storage {
    /// Returns an empty registry when nothing has been saved yet.
    fn load(&self) -> Result<Registry>;

    /// Replaces the stored registry with `registry`.
    fn save(&self, registry: &Registry) -> Result<()>;
}
