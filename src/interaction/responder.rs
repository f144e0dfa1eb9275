//! Keyword-based reply selection.
//!
//! Text is checked against a fixed, ordered list of keyword groups and the
//! first group that matches picks the reply. Matching is a plain substring
//! test on the lowercased text, so short keywords also hit inside longer
//! words (`"this"` contains `"hi"`).

use crate::base::replies;

/// Which kind of reply a message calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Greeting,
    Thanks,
    Help,
    Question,
    Generic,
}

/// Keyword groups in priority order.
const RULES: &[(ReplyKind, &[&str])] = &[
    (ReplyKind::Greeting, &["你好", "hello", "hi"]),
    (ReplyKind::Thanks, &["謝謝", "thank"]),
    (ReplyKind::Help, &["幫助", "help"]),
    (ReplyKind::Question, &["?", "？", "how", "什麼", "怎麼"]),
];

impl ReplyKind {
    /// The fixed reply text for this kind.
    pub fn reply(self) -> &'static str {
        match self {
            ReplyKind::Greeting => replies::GREETING_REPLY,
            ReplyKind::Thanks => replies::THANKS_REPLY,
            ReplyKind::Help => replies::HELP_REPLY,
            ReplyKind::Question => replies::QUESTION_REPLY,
            ReplyKind::Generic => replies::GENERIC_REPLY,
        }
    }
}

/// Classifies `text`; the first matching keyword group wins.
pub fn classify(text: &str) -> ReplyKind {
    let lowered = text.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(kind, _)| *kind)
        .unwrap_or(ReplyKind::Generic)
}

/// Picks the reply text for `text`.
pub fn generate_response(text: &str) -> &'static str {
    classify(text).reply()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greetings_in_any_case() {
        for text in ["你好", "Hello there", "HI", "oh hi!", "hELLo?"] {
            assert_eq!(classify(text), ReplyKind::Greeting, "{text}");
        }
        assert_eq!(generate_response("hello"), replies::GREETING_REPLY);
    }

    #[test]
    fn greeting_outranks_everything_below_it() {
        assert_eq!(classify("hello, 謝謝"), ReplyKind::Greeting);
        assert_eq!(classify("hi, can you help?"), ReplyKind::Greeting);
        assert_eq!(classify("你好 how are you?"), ReplyKind::Greeting);
    }

    #[test]
    fn thanks() {
        assert_eq!(classify("謝謝你"), ReplyKind::Thanks);
        assert_eq!(classify("THANKS a lot"), ReplyKind::Thanks);
        assert_eq!(classify("thank you, need help?"), ReplyKind::Thanks);
        assert_eq!(generate_response("Thank you"), replies::THANKS_REPLY);
    }

    #[test]
    fn help_outranks_question() {
        assert_eq!(classify("help me?"), ReplyKind::Help);
        assert_eq!(classify("需要幫助"), ReplyKind::Help);
        assert_eq!(generate_response("HELP"), replies::HELP_REPLY);
    }

    #[test]
    fn questions() {
        for text in ["what?", "真的？", "How come", "這是什麼", "怎麼做"] {
            assert_eq!(classify(text), ReplyKind::Question, "{text}");
        }
        assert_eq!(generate_response("why?"), replies::QUESTION_REPLY);
    }

    #[test]
    fn everything_else_is_generic() {
        assert_eq!(classify(""), ReplyKind::Generic);
        assert_eq!(classify("deploy done"), ReplyKind::Generic);
        assert_eq!(classify("好的"), ReplyKind::Generic);
        assert_eq!(generate_response(""), replies::GENERIC_REPLY);
    }

    #[test]
    fn keywords_match_inside_words() {
        assert_eq!(classify("ship it"), ReplyKind::Greeting);
        assert_eq!(classify("somehow"), ReplyKind::Question);
    }

    #[test]
    fn same_input_same_output() {
        let text = "Any update? thanks";
        assert_eq!(generate_response(text), generate_response(text));
    }
}
