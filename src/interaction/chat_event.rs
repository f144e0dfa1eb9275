//! Turns routed events into sent replies.

use tracing::{Instrument, error, info, instrument};

use crate::{
    base::{
        config::Config,
        types::{ChatEvent, OutboundReply, Res},
    },
    interaction::router,
    service::chat::ChatClient,
};

/// Handles a chat event in the background.
///
/// The transport callback returns immediately; failures are logged and never
/// reach the sender.
pub fn handle_chat_event(event: ChatEvent, config: Config, chat: ChatClient) {
    tokio::spawn(
        async move {
            // Process the event.
            let result = process_chat_event(&event, &config, &chat).await;

            // Log any errors.
            if let Err(err) = &result {
                error!("Error while handling: {}", err);
            }
        }
        .in_current_span(),
    );
}

/// Routes `event` and sends the resulting reply, if any.
///
/// Returns the reply that was sent.
#[instrument(skip_all, fields(kind = event.kind()))]
pub async fn process_chat_event(event: &ChatEvent, config: &Config, chat: &ChatClient) -> Res<Option<OutboundReply>> {
    let inner = event.inner();

    info!("Received {} from user {} in channel {}: {}", event.kind(), inner.user_id, inner.channel_id, inner.text);

    let Some(reply) = router::route_event(event, config) else {
        return Ok(None);
    };

    chat.send_reply(&reply).await?;

    info!("Replied in channel {} (thread {:?}) with: {}", reply.channel_id, reply.thread_ts, reply.text);

    Ok(Some(reply))
}
