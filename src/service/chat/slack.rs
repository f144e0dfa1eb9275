//! Chat service integration for crayfish-bot.
//!
//! This module provides the Slack implementation of `GenericChatClient`:
//! - Receiving app mentions and messages over socket mode
//! - Converting them into transport-neutral `ChatEvent`s
//! - Posting threaded replies

use crate::{
    base::{
        config::Config,
        types::{ChatEvent, InboundEvent, OutboundReply, Res, Void},
    },
    interaction,
};
use async_trait::async_trait;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use serde::Serialize;
use slack_morphism::prelude::*;
use tracing::{info, instrument, warn};

use std::sync::Arc;

use super::{ChatClient, GenericChatClient};

// Type aliases.

type FullClient = slack_morphism::SlackClient<SlackClientHyperConnector<HttpsConnector<HttpConnector>>>;

// Extra methods on `ChatClient` applied by the slack implementation.

impl ChatClient {
    /// Creates a new Slack chat client.
    pub async fn slack(config: &Config) -> Res<Self> {
        let client = SlackChatClient::new(config).await?;
        Ok(Self { inner: Arc::new(client) })
    }
}

impl From<SlackChatClient> for ChatClient {
    fn from(client: SlackChatClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Structs.

/// User state for the slack socket client.
struct SlackUserState {
    config: Config,
    chat: ChatClient,
}

/// Slack client implementation.
#[derive(Clone)]
struct SlackChatClient {
    pub config: Config,
    pub app_token: SlackApiToken,
    pub bot_token: SlackApiToken,
    pub client: Arc<FullClient>,
}

impl SlackChatClient {
    /// Create a new Slack chat client.
    #[instrument(name = "SlackChatClient::new", skip_all)]
    pub async fn new(config: &Config) -> Res<Self> {
        // Initialize tokens.

        let app_token = SlackApiToken::new(SlackApiTokenValue(config.slack_app_token.clone()));
        let bot_token = SlackApiToken::new(SlackApiTokenValue(config.slack_bot_token.clone()));

        // Initialize the Slack client.

        let https_connector = HttpsConnector::<HttpConnector>::builder().with_native_roots()?.https_only().enable_all_versions().build();
        let connector = SlackClientHyperConnector::with_connector(https_connector);
        let client = Arc::new(slack_morphism::SlackClient::new(connector));

        // Check the bot token, and note who we are.

        let session = client.open_session(&bot_token);
        let bot_user = session.auth_test().await?;

        info!("Slack bot user ID: {}", bot_user.user_id.0);

        Ok(Self {
            config: config.clone(),
            app_token,
            bot_token,
            client,
        })
    }
}

#[async_trait]
impl GenericChatClient for SlackChatClient {
    async fn start(&self) -> Void {
        // Initialize the socket mode listener.

        let socket_mode_callbacks = SlackSocketModeListenerCallbacks::new().with_push_events(handle_push_event);

        // Initialize the socket mode listener environment.

        let listener_environment = Arc::new(SlackClientEventsListenerEnvironment::new(self.client.clone()).with_user_state(SlackUserState {
            config: self.config.clone(),
            chat: ChatClient::from(self.clone()),
        }));

        let socket_mode_listener = Arc::new(SlackClientSocketModeListener::new(
            &SlackClientSocketModeConfig::new(),
            listener_environment.clone(),
            socket_mode_callbacks,
        ));

        // Register the app token to listen for events.
        socket_mode_listener.listen_for(&self.app_token).await?;

        // Open the WS connections and wait for Ctrl-C to shut down.
        socket_mode_listener.serve().await;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn send_reply(&self, reply: &OutboundReply) -> Void {
        let message = SlackMessageContent::new().with_text(reply.text.clone());

        let mut request = SlackApiChatPostMessageRequest::new(SlackChannelId(reply.channel_id.clone()), message)
            .with_as_user(true)
            .with_link_names(true);

        if let Some(thread_ts) = &reply.thread_ts {
            request = request.with_thread_ts(SlackTs(thread_ts.clone()));
        }

        let session = self.client.open_session(&self.bot_token);

        let _ = session.chat_post_message(&request).await.map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?;

        Ok(())
    }
}

// Event conversion.

/// Wire name of a serde-tagged enum value, e.g. `bot_message`.
fn wire_name<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_value(value).ok()?.as_str().map(str::to_owned)
}

impl From<&SlackMessageEvent> for InboundEvent {
    fn from(event: &SlackMessageEvent) -> Self {
        Self {
            user_id: event.sender.user.as_ref().map(|u| u.0.clone()).unwrap_or_default(),
            text: event.content.as_ref().and_then(|c| c.text.clone()).unwrap_or_default(),
            channel_id: event.origin.channel.as_ref().map(|c| c.0.clone()).unwrap_or_default(),
            ts: event.origin.ts.0.clone(),
            thread_ts: event.origin.thread_ts.as_ref().map(|ts| ts.0.clone()),
            subtype: event.subtype.as_ref().and_then(wire_name),
        }
    }
}

impl From<&SlackAppMentionEvent> for InboundEvent {
    fn from(event: &SlackAppMentionEvent) -> Self {
        Self {
            user_id: event.user.0.clone(),
            text: event.content.text.clone().unwrap_or_default(),
            channel_id: event.channel.0.clone(),
            ts: event.origin.ts.0.clone(),
            thread_ts: event.origin.thread_ts.as_ref().map(|ts| ts.0.clone()),
            subtype: None,
        }
    }
}

// Socket mode listener callbacks for Slack.

/// Handles push events from Slack.
#[instrument(skip_all)]
async fn handle_push_event(event_callback: SlackPushEventCallback, _client: Arc<SlackHyperClient>, states: SlackClientEventsUserState) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let states = states.read().await;
    let user_state = states.get_user_state::<SlackUserState>().ok_or(anyhow::anyhow!("Failed to get user state"))?;

    let event = match &event_callback.event {
        SlackEventCallbackBody::Message(slack_message_event) => ChatEvent::Message(slack_message_event.into()),
        SlackEventCallbackBody::AppMention(slack_app_mention_event) => ChatEvent::Mention(slack_app_mention_event.into()),
        _ => {
            warn!("Received unhandled push event.");
            return Ok(());
        }
    };

    interaction::chat_event::handle_chat_event(event, user_state.config.clone(), user_state.chat.clone());

    Ok(())
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_subtype_uses_wire_name() {
        assert_eq!(wire_name(&SlackMessageEventType::BotMessage).as_deref(), Some("bot_message"));
    }

    #[test]
    fn bot_message_event_converts_to_filtered_event() {
        let event: SlackMessageEvent = serde_json::from_value(serde_json::json!({
            "type": "message",
            "subtype": "bot_message",
            "text": "hello",
            "bot_id": "B01",
            "channel": "C01TEST",
            "ts": "100.1",
        }))
        .unwrap();

        let inbound = InboundEvent::from(&event);

        assert!(inbound.is_bot_message());
        assert_eq!(inbound.user_id, "");
        assert_eq!(inbound.channel_id, "C01TEST");
        assert_eq!(inbound.reply_thread_ts(), "100.1");
    }

    #[test]
    fn user_message_event_keeps_thread() {
        let event: SlackMessageEvent = serde_json::from_value(serde_json::json!({
            "type": "message",
            "user": "U08CF634LSH",
            "text": "help me?",
            "channel": "C01TEST",
            "ts": "101.1",
            "thread_ts": "100.1",
        }))
        .unwrap();

        let inbound = InboundEvent::from(&event);

        assert_eq!(inbound.user_id, "U08CF634LSH");
        assert_eq!(inbound.text, "help me?");
        assert_eq!(inbound.subtype, None);
        assert_eq!(inbound.reply_thread_ts(), "100.1");
    }

    #[test]
    fn channel_join_from_target_gets_no_reply() {
        let event: SlackMessageEvent = serde_json::from_value(serde_json::json!({
            "type": "message",
            "subtype": "channel_join",
            "user": "U08CF634LSH",
            "text": "<@U08CF634LSH> has joined the channel",
            "channel": "C01TEST",
            "ts": "102.1",
        }))
        .unwrap();

        let inbound = InboundEvent::from(&event);

        assert_eq!(inbound.subtype.as_deref(), Some("channel_join"));
        assert!(!inbound.is_user_message());
        assert!(interaction::router::handle_message(&inbound, "U08CF634LSH").is_none());
    }

    #[test]
    fn app_mention_event_converts() {
        let event: SlackAppMentionEvent = serde_json::from_value(serde_json::json!({
            "type": "app_mention",
            "user": "U54321",
            "text": "<@U12345> hi",
            "ts": "100",
            "channel": "C01TEST",
            "event_ts": "100",
        }))
        .unwrap();

        let inbound = InboundEvent::from(&event);

        assert_eq!(inbound.user_id, "U54321");
        assert_eq!(inbound.text, "<@U12345> hi");
        assert_eq!(inbound.thread_ts, None);
        assert_eq!(inbound.reply_thread_ts(), "100");
    }
}
