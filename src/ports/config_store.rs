use std::path::Path;

use crate::domain::{AppError, ReviewConfig};

/// Port for the persisted configuration file.
pub trait ConfigStore {
    /// Location of the backing file.
    fn path(&self) -> &Path;

    /// Load the whole configuration. A missing file yields an empty one.
    fn load(&self) -> Result<ReviewConfig, AppError>;

    /// Rewrite the whole configuration.
    fn save(&self, config: &ReviewConfig) -> Result<(), AppError>;
}
