//! Mock Conversation Agent for testing.
//!
//! Lets handler and HTTP tests script entire reasoning passes without a
//! provider: each queued turn either appends a batch of messages to the
//! incoming history or fails with a configured error.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::interview::Message;
use crate::ports::{AgentError, ConversationAgent};

/// A scripted agent turn.
#[derive(Debug, Clone)]
pub enum MockTurn {
    /// Append these messages to the incoming history.
    Messages(Vec<Message>),
    /// Fail the pass with this error.
    Error(AgentError),
}

/// Mock conversation agent with scripted turns.
#[derive(Debug, Clone, Default)]
pub struct MockConversationAgent {
    turns: Arc<Mutex<VecDeque<MockTurn>>>,
    invocations: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockConversationAgent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a turn that appends the given messages.
    pub fn with_turn(self, messages: Vec<Message>) -> Self {
        self.turns
            .lock()
            .unwrap()
            .push_back(MockTurn::Messages(messages));
        self
    }

    /// Queues a turn that fails with the given error.
    pub fn with_failure(self, error: AgentError) -> Self {
        self.turns.lock().unwrap().push_back(MockTurn::Error(error));
        self
    }

    /// Histories this agent was invoked with, in order.
    pub fn invocations(&self) -> Vec<Vec<Message>> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConversationAgent for MockConversationAgent {
    async fn invoke(&self, mut history: Vec<Message>) -> Result<Vec<Message>, AgentError> {
        self.invocations.lock().unwrap().push(history.clone());

        let turn = self.turns.lock().unwrap().pop_front();
        match turn {
            Some(MockTurn::Messages(messages)) => {
                history.extend(messages);
                Ok(history)
            }
            Some(MockTurn::Error(error)) => Err(error),
            None => {
                history.push(Message::assistant("Mock response"));
                Ok(history)
            }
        }
    }
}
