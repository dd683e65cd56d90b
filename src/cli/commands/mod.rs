mod browse;
mod cat;
mod deploy;
mod down;
mod export;
mod init;
mod install;
mod logpoint;
mod logs;
mod push;
mod remote;
mod reset;
mod restart;
mod service;
mod sync;
mod up;

pub use browse::execute_browse;
pub use cat::execute_cat;
pub use deploy::execute_deploy;
pub use down::execute_down;
pub use export::execute_export;
pub use init::execute_init;
pub use install::execute_install;
pub use logpoint::execute_logpoint;
pub use logs::execute_logs;
pub use push::execute_push;
pub use remote::execute_remote;
pub use reset::execute_reset;
pub use restart::execute_restart;
pub use service::execute_service;
pub use sync::execute_sync;
pub use up::execute_up;

use anyhow::{Context, Result};

use crate::azure::auth::{self, Credentials};
use crate::cli::config::{Settings, SETTINGS_FILENAME};
use crate::cli::context::DeployContext;

/// Load settings and credentials and build the immutable deploy context.
/// Every command that talks to the cloud starts here.
pub(crate) fn resolve_context() -> Result<(Credentials, DeployContext)> {
    let settings = Settings::load().with_context(|| {
        format!("No {} found. Run 'azup init' first.", SETTINGS_FILENAME)
    })?;
    let creds = auth::resolve_credentials()?;
    let ctx = DeployContext::resolve(&creds, &settings)?;
    Ok((creds, ctx))
}
