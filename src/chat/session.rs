//! Chat session state
//!
//! Holds the conversation for one chat. Sending messages to a provider is
//! left to the caller; the session only records turns and builds prompts.

use serde::{Deserialize, Serialize};

use super::context::{compose_prompt, FinancialContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// One conversation with the assistant
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    user_name: Option<String>,
    context: Option<FinancialContext>,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Start a session; a known user gets a greeting as the first message
    pub fn new(user_name: Option<String>, context: Option<FinancialContext>) -> Self {
        let mut session = Self {
            user_name,
            context,
            messages: Vec::new(),
        };
        session.greet();
        session
    }

    fn greet(&mut self) {
        if !self.messages.is_empty() {
            return;
        }
        if let Some(name) = &self.user_name {
            self.messages.push(ChatMessage {
                role: Role::Assistant,
                content: greeting(name),
            });
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn context(&self) -> Option<&FinancialContext> {
        self.context.as_ref()
    }

    /// Record a user question and return the prompt to send
    pub fn ask(&mut self, question: &str) -> String {
        self.messages.push(ChatMessage {
            role: Role::User,
            content: question.to_string(),
        });
        compose_prompt(self.context.as_ref(), question)
    }

    pub fn record_reply(&mut self, answer: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: answer.into(),
        });
    }

    /// Clear the conversation, keeping the user and context
    pub fn reset(&mut self) {
        self.messages.clear();
        self.greet();
    }
}

pub fn greeting(name: &str) -> String {
    format!(
        "Hi {}! I'm your personal finance assistant. I've looked at your finances \
         and I'm ready to help. What would you like to ask?",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_for_known_user() {
        let session = ChatSession::new(Some("Lina".into()), None);

        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert!(session.messages()[0].content.starts_with("Hi Lina!"));
    }

    #[test]
    fn test_no_greeting_without_profile() {
        let session = ChatSession::new(None, None);
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_ask_without_context_sends_bare_question() {
        let mut session = ChatSession::new(Some("Lina".into()), None);
        let prompt = session.ask("Should I buy gold?");

        assert_eq!(prompt, "Should I buy gold?");
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].role, Role::User);
    }

    #[test]
    fn test_reset_restores_greeting() {
        let mut session = ChatSession::new(Some("Lina".into()), None);
        session.ask("one");
        session.record_reply("two");
        assert_eq!(session.messages().len(), 3);

        session.reset();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].content, greeting("Lina"));
    }
}
