use crate::{config::ConfigError, index::BuildError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Every failure keyspec can report. Key computation itself never fails;
/// only building an index or loading its layout can.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}
