use thiserror::Error;

/// Failures surfaced by the deployment operations.
///
/// Commands hold `anyhow::Result` and attach context; these variants are the
/// typed failures that cross the library boundary so callers can tell a
/// provisioning failure from a transport failure from a local-project problem.
#[derive(Debug, Error)]
pub enum Error {
    /// A resource group or ARM deployment call failed.
    #[error("provisioning {resource} failed: {message}")]
    Provisioning { resource: String, message: String },

    /// The zip upload (or building the archive for it) failed.
    #[error("upload failed: {0}")]
    Upload(String),

    /// package.json declares no usable start script and none of the
    /// conventional entry files exist in the working directory.
    #[error("no start file found: add a \"start\" script to package.json or create server.js, app.js, or index.js")]
    StartFileNotFound,

    /// Git remote wiring could not complete. Informational: the remote URL
    /// is still printed and the process does not abort.
    #[error("{0}")]
    GitRemote(String),

    /// A delegated remote call (restart, sync, service, remote command) failed.
    #[error("{action} failed: {message}")]
    Operation { action: String, message: String },
}

impl Error {
    pub fn provisioning(resource: impl Into<String>, message: impl ToString) -> Self {
        Error::Provisioning {
            resource: resource.into(),
            message: message.to_string(),
        }
    }

    pub fn operation(action: impl Into<String>, message: impl ToString) -> Self {
        Error::Operation {
            action: action.into(),
            message: message.to_string(),
        }
    }
}
