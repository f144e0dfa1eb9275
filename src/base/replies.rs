//! Fixed reply texts.

/// Reply to a greeting.
pub const GREETING_REPLY: &str = "你好！很高興見到你！有什麼我可以幫忙的嗎？";

/// Reply to thanks.
pub const THANKS_REPLY: &str = "不客氣！隨時樂意幫忙！";

/// Reply to a request for help.
pub const HELP_REPLY: &str = "當然！請告訴我你需要什麼幫助，我會盡力協助你。";

/// Reply to a question.
pub const QUESTION_REPLY: &str = "這是個好問題！讓我想想... 我會盡力回答你的問題。";

/// Reply to anything else.
pub const GENERIC_REPLY: &str = "我收到你的訊息了！我在這裡隨時準備協助你。";

/// Formats a Slack user mention.
pub fn mention(user_id: &str) -> String {
    format!("<@{user_id}>")
}

/// Greeting for an @-mention from the target user.
pub fn target_mention_greeting(user_id: &str) -> String {
    format!("嗨 {}！我看到你的訊息了！有什麼我可以幫助你的嗎？ 😊", mention(user_id))
}

/// Greeting for an @-mention from anyone else.
pub fn mention_greeting(user_id: &str) -> String {
    format!("你好 {}！", mention(user_id))
}
