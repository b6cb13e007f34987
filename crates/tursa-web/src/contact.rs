//! Contact form delivery to the external form intake.
//!
//! `ContactService::submit` drives a `ContactForm` through one submission:
//! it claims the form instance, hands the payload to a detached delivery
//! task and applies the result. The task runs to completion even if the
//! request that started it goes away; its result is then simply dropped.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info};
use tursa_config::ContactConfig;
use tursa_ui::{ContactFields, ContactForm, FormError, Submission};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Form intake unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Form intake rejected the submission: HTTP {0}")]
    Rejected(StatusCode),
}

/// Somewhere a contact submission can be sent.
#[async_trait]
pub trait ContactEndpoint: Send + Sync {
    /// One attempt, no retry. Ok only for a 2xx answer.
    async fn deliver(&self, fields: &ContactFields) -> Result<(), DeliveryError>;
}

/// Posts `{name, email, message}` as JSON to a fixed URL.
pub struct HttpContactEndpoint {
    url: String,
    client: Client,
}

impl HttpContactEndpoint {
    pub fn new(config: &ContactConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            url: config.endpoint.clone(),
            client: builder.build()?,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ContactEndpoint for HttpContactEndpoint {
    async fn deliver(&self, fields: &ContactFields) -> Result<(), DeliveryError> {
        let resp = self.client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .json(fields)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(DeliveryError::Rejected(resp.status()));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────
//  In-flight tracking
// ─────────────────────────────────────────────

/// Form instances with a delivery in progress.
#[derive(Debug, Clone, Default)]
pub struct InFlightForms {
    ids: Arc<Mutex<HashSet<Uuid>>>,
}

impl InFlightForms {
    /// Mark `id` as sending. `None` if it already is.
    pub fn claim(&self, id: Uuid) -> Option<InFlightGuard> {
        let mut ids = self.ids.lock().unwrap_or_else(|e| e.into_inner());
        if !ids.insert(id) {
            return None;
        }
        Some(InFlightGuard { ids: Arc::clone(&self.ids), id })
    }

    pub fn is_in_flight(&self, id: Uuid) -> bool {
        self.ids.lock().unwrap_or_else(|e| e.into_inner()).contains(&id)
    }
}

/// Releases the form instance when dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    ids: Arc<Mutex<HashSet<Uuid>>>,
    id: Uuid,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.ids.lock().unwrap_or_else(|e| e.into_inner()).remove(&self.id);
    }
}

// ─────────────────────────────────────────────
//  Service
// ─────────────────────────────────────────────

#[derive(Clone)]
pub struct ContactService {
    endpoint: Arc<dyn ContactEndpoint>,
    in_flight: InFlightForms,
}

impl ContactService {
    pub fn new(endpoint: Arc<dyn ContactEndpoint>) -> Self {
        Self { endpoint, in_flight: InFlightForms::default() }
    }

    pub fn in_flight(&self) -> &InFlightForms {
        &self.in_flight
    }

    /// Run one submission of `form` (identified by `form_id`) to completion.
    ///
    /// On `Err` nothing was sent and the form is untouched: still idle with
    /// its fields, whether a field was missing or another request for the
    /// same form instance is already delivering.
    pub async fn submit(&self, form: &mut ContactForm, form_id: Uuid) -> Result<(), FormError> {
        let Some(guard) = self.in_flight.claim(form_id) else {
            debug!(%form_id, "Submission refused: form already sending");
            return Err(FormError::AlreadySending);
        };

        let Submission { ticket, payload } = form.submit()?;

        let endpoint = Arc::clone(&self.endpoint);
        let task = tokio::spawn(async move {
            let _guard = guard;
            endpoint.deliver(&payload).await
        });

        let delivered = match task.await {
            Ok(Ok(())) => {
                info!(%form_id, "Contact message delivered");
                true
            }
            Ok(Err(e)) => {
                debug!(%form_id, "Contact delivery failed: {}", e);
                false
            }
            Err(e) => {
                debug!(%form_id, "Contact delivery task did not finish: {}", e);
                false
            }
        };

        form.resolve(ticket, delivered);
        Ok(())
    }
}

// ─────────────────────────────────────────────
//  Tests
// ─────────────────────────────────────────────
