use anyhow::Result;

use super::resolve_context;
use crate::azure::KuduClient;
use crate::cli::CatArgs;

pub async fn execute_cat(args: CatArgs) -> Result<()> {
    let (creds, ctx) = resolve_context()?;
    let kudu = KuduClient::new(&ctx, &creds.token)?;

    let contents = kudu.file_contents(&args.path).await?;
    print!("{}", contents);

    Ok(())
}
