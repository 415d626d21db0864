//! Scripted in-memory backend for tests.
//!
//! Every call is recorded (prompt and options) and answered by a responder
//! closure, so tests can assert both what was sent and how the caller
//! reacted to a given answer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use zikcut_core::prompt::PromptDocument;

use crate::backend::{BackendError, GenerateOptions, GenerateResponse, GenerativeBackend};

/// One recorded backend call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: PromptDocument,
    pub options: GenerateOptions,
}

type Responder =
    dyn Fn(&PromptDocument, &GenerateOptions) -> Result<GenerateResponse, BackendError> + Send + Sync;

type Latency = dyn Fn(&PromptDocument) -> Duration + Send + Sync;

pub struct ScriptedBackend {
    responder: Box<Responder>,
    latency: Option<Box<Latency>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedBackend {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&PromptDocument, &GenerateOptions) -> Result<GenerateResponse, BackendError>
            + Send
            + Sync
            + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            latency: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Like [`ScriptedBackend::new`], but each call sleeps for
    /// `latency(prompt)` before answering. Calls are recorded on arrival.
    pub fn with_latency<F, L>(responder: F, latency: L) -> Arc<Self>
    where
        F: Fn(&PromptDocument, &GenerateOptions) -> Result<GenerateResponse, BackendError>
            + Send
            + Sync
            + 'static,
        L: Fn(&PromptDocument) -> Duration + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            latency: Some(Box::new(latency)),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Answer every call with the same response.
    pub fn always(response: GenerateResponse) -> Arc<Self> {
        Self::new(move |_, _| Ok(response.clone()))
    }

    /// Fail every call with an API error.
    pub fn failing(status: u16, body: &str) -> Arc<Self> {
        let body = body.to_string();
        Self::new(move |_, _| {
            Err(BackendError::Api {
                status,
                body: body.clone(),
            })
        })
    }

    /// Calls received so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn generate(
        &self,
        prompt: &PromptDocument,
        options: &GenerateOptions,
    ) -> Result<GenerateResponse, BackendError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.clone(),
            options: options.clone(),
        });
        if let Some(latency) = &self.latency {
            tokio::time::sleep(latency(prompt)).await;
        }
        (self.responder)(prompt, options)
    }
}
