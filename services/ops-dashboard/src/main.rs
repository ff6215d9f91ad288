//! ops-dashboard Service

use opsdash_bootstrap::run;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run("config", |config| {
        info!(sample_dir = %config.data.sample_dir, "Initializing ops-dashboard service...");
        Ok(ops_dashboard::build_service(config))
    })
    .await
}
