// Shared test doubles for the completion service

#![allow(dead_code)]

use anyhow::Result;
use mock_interview::feedback::{CompletionBackend, CompletionRequest, FeedbackGenerator, Role};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How the stub answers a completion request
#[derive(Debug, Clone)]
pub enum Reply {
    /// "Feedback #n" where n counts calls from 1
    Numbered,
    Fail,
    Blank,
    Hang,
}

pub struct StubBackend {
    reply: Reply,
    fail_next: AtomicBool,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubBackend {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            fail_next: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Make only the next call fail
    pub fn fail_once(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// User turn of the most recent request
    pub fn last_user_message(&self) -> Option<String> {
        let requests = self.requests.lock().unwrap();
        requests
            .last()
            .and_then(|r| r.messages.iter().find(|m| m.role == Role::User))
            .map(|m| m.content.clone())
    }
}

#[async_trait::async_trait]
impl CompletionBackend for StubBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        if self.fail_next.swap(false, Ordering::SeqCst) {
            anyhow::bail!("service unavailable");
        }

        match self.reply {
            Reply::Numbered => Ok(format!("  Feedback #{}  ", n)),
            Reply::Fail => anyhow::bail!("service unavailable"),
            Reply::Blank => Ok("   ".to_string()),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok("too late".to_string())
            }
        }
    }

    fn name(&self) -> &str {
        "stub"
    }
}

pub fn generator(backend: Arc<StubBackend>) -> FeedbackGenerator {
    FeedbackGenerator::new(backend, Duration::from_millis(200))
}
