use anyhow::Result;

use super::resolve_context;
use crate::azure::KuduClient;
use crate::cli::progress::print_success;

pub async fn execute_logs() -> Result<()> {
    let (creds, ctx) = resolve_context()?;
    let kudu = KuduClient::new(&ctx, &creds.token)?;

    print_success("Starting log stream. Press CTRL+C to exit\n");
    kudu.log_stream().await
}
