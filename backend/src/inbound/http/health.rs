//! Orchestrator probes for the complaint service.
//!
//! Readiness turns on once migrations have run, the pool and mail relay are
//! configured and the listener is bound. Liveness turns off after the server
//! stops accepting requests. Probe replies are never cached.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde_json::json;

/// Startup and shutdown flags shared with the probe handlers.
pub struct HealthState {
    serving: AtomicBool,
    draining: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            serving: AtomicBool::new(false),
            draining: AtomicBool::new(false),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once the complaint store and mail relay are wired and bound.
    pub fn mark_ready(&self) {
        self.serving.store(true, Ordering::Release);
    }

    /// Called after the server future completes.
    pub fn mark_unhealthy(&self) {
        self.draining.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.serving.load(Ordering::Acquire) && self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        !self.draining.load(Ordering::Acquire)
    }
}

fn probe_reply(up: bool, state: &'static str) -> HttpResponse {
    let mut reply = if up {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    reply
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(json!({ "status": state }))
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Complaint endpoints are accepting requests"),
        (status = 503, description = "Still starting up or already draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    if !state.is_alive() {
        probe_reply(false, "draining")
    } else if state.is_ready() {
        probe_reply(true, "ready")
    } else {
        probe_reply(false, "starting")
    }
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is running"),
        (status = 503, description = "Process is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    if state.is_alive() {
        probe_reply(true, "live")
    } else {
        probe_reply(false, "draining")
    }
}
