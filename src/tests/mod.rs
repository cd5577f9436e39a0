//! Unit tests for the telemetry policy crate
//!
//! This module contains tests for the policy, the collectors, and the
//! error envelope handling, plus shared test doubles.


use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Request, StatusCode};

use crate::collector::RequestCollector;
use crate::error::{ArmError, PipelineError, Result};
use crate::pipeline::{PipelineStage, Response};

/// Lifecycle notification captured by `RecordingCollector`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectorEvent {
    Started {
        url: String,
    },
    Completed {
        url: String,
        status: u16,
    },
    Failed {
        url: String,
        status: Option<u16>,
        error: ArmError,
    },
}

/// Collector double that records every notification in order.
#[derive(Debug, Default)]
pub struct RecordingCollector {
    events: Mutex<Vec<CollectorEvent>>,
}

impl RecordingCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CollectorEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl RequestCollector for RecordingCollector {
    fn request_started(&self, request: &Request) {
        self.events.lock().unwrap().push(CollectorEvent::Started {
            url: request.url().to_string(),
        });
    }

    fn request_completed(&self, request: &Request, response: &Response) {
        self.events.lock().unwrap().push(CollectorEvent::Completed {
            url: request.url().to_string(),
            status: response.status().as_u16(),
        });
    }

    fn request_failed(&self, request: &Request, response: Option<&Response>, error: &ArmError) {
        self.events.lock().unwrap().push(CollectorEvent::Failed {
            url: request.url().to_string(),
            status: response.map(|r| r.status().as_u16()),
            error: error.clone(),
        });
    }
}

/// Stage double that returns a canned response.
pub struct StaticStage {
    status: StatusCode,
    body: Vec<u8>,
}

impl StaticStage {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.into(),
        }
    }
}

#[async_trait]
impl PipelineStage for StaticStage {
    async fn send(&self, _request: &Request) -> Result<Response> {
        Ok(Response::new(
            self.status,
            HeaderMap::new(),
            self.body.clone(),
        ))
    }
}

/// Stage double that fails with the error produced by the given closure.
pub struct FailingStage {
    make_error: Box<dyn Fn() -> PipelineError + Send + Sync>,
}

impl FailingStage {
    pub fn new(make_error: impl Fn() -> PipelineError + Send + Sync + 'static) -> Self {
        Self {
            make_error: Box::new(make_error),
        }
    }
}

#[async_trait]
impl PipelineStage for FailingStage {
    async fn send(&self, _request: &Request) -> Result<Response> {
        Err((self.make_error)())
    }
}

/// Build a simple GET request for tests.
pub fn test_request(url: &str) -> Request {
    Client::new().get(url).build().expect("valid test request")
}
