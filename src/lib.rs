//! Library root for `crayfish-bot`.
//!
//! Crayfish-bot is a small Slack companion that:
//! - Greets anyone who @-mentions it, with a warmer greeting for one designated user
//! - Answers every message from that designated user with a keyword-selected reply
//! - Ignores messages posted by bots, including its own
//!
//! The Slack transport sits behind the `GenericChatClient` trait, so routing and
//! reply selection can be exercised without a live connection.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod prelude;
pub mod runtime;
pub mod service;

use prelude::*;
use rustls::crypto;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the crayfish-bot runtime:
/// - Initializes the crypto provider
/// - Connects the Slack client
/// - Listens for events until shutdown
pub async fn start(config: Config) -> Void {
    info!("Starting crayfish-bot ...");
    info!("Target user: {}", config.target_user_id);

    // Start the crypto provider.
    crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("Failed to install the default crypto provider."))?;

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
