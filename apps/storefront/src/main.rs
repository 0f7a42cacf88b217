//! GLOW storefront entry point.

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    glow_storefront::init_tracing();

    match glow_storefront::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "storefront stopped");
            eprintln!("glow-storefront: {}", err);
            ExitCode::FAILURE
        }
    }
}
