//! Complaint HTTP handlers.
//!
//! ```text
//! POST /submit_complaint
//! PUT  /resolve_complaint/{ticket_number}
//! GET  /check_status/{ticket_number}
//! ```
//!
//! Response bodies keep the established `message` / `ticket_number` shape.
//! A path segment that is not a well-formed ticket cannot name a stored
//! complaint, so it is answered with the operation's not-found error.

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CheckStatusRequest, ResolveComplaintRequest, SubmitComplaintRequest};
use crate::domain::{COMPLAINT_NOT_FOUND, Error, TICKET_NOT_FOUND, TicketNumber};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

const EMAIL_FIELD: FieldName = FieldName::new("email");
const COMPLAINT_FIELD: FieldName = FieldName::new("complaint");

/// Request payload for submitting a complaint.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SubmitComplaintBody {
    #[schema(example = "a@x.com")]
    pub email: Option<String>,
    #[schema(example = "broken widget")]
    pub complaint: Option<String>,
}

/// Response returned after a successful submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitComplaintReply {
    #[schema(example = "Complaint submitted")]
    pub message: String,
    #[schema(example = "Q7W2E9")]
    pub ticket_number: String,
}

/// Plain message response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageReply {
    #[schema(example = "Status: pending")]
    pub message: String,
}

impl MessageReply {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn parse_submission(body: SubmitComplaintBody) -> Result<SubmitComplaintRequest, Error> {
    Ok(SubmitComplaintRequest {
        email: require(body.email, EMAIL_FIELD)?,
        complaint: require(body.complaint, COMPLAINT_FIELD)?,
    })
}

fn parse_ticket(raw: &str, not_found: &str) -> Result<TicketNumber, Error> {
    raw.parse::<TicketNumber>()
        .map_err(|_| Error::not_found(not_found))
}

/// Submit a complaint and receive its ticket number.
#[utoipa::path(
    post,
    path = "/submit_complaint",
    request_body = SubmitComplaintBody,
    responses(
        (status = 200, description = "Complaint stored and receipt sent", body = SubmitComplaintReply),
        (status = 400, description = "Missing or empty field", body = ErrorSchema),
        (status = 409, description = "No free ticket number could be allocated", body = ErrorSchema),
        (status = 502, description = "Complaint stored but receipt email failed", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["complaints"],
    operation_id = "submitComplaint"
)]
#[post("/submit_complaint")]
pub async fn submit_complaint(
    state: web::Data<HttpState>,
    payload: web::Json<SubmitComplaintBody>,
) -> ApiResult<web::Json<SubmitComplaintReply>> {
    let request = parse_submission(payload.into_inner())?;
    let response = state.complaints.submit(request).await?;

    Ok(web::Json(SubmitComplaintReply {
        message: "Complaint submitted".to_owned(),
        ticket_number: response.ticket_number.into(),
    }))
}

/// Mark a complaint resolved and email the submitter.
#[utoipa::path(
    put,
    path = "/resolve_complaint/{ticket_number}",
    params(("ticket_number" = String, Path, description = "Six-symbol ticket number")),
    responses(
        (status = 200, description = "Complaint resolved", body = MessageReply),
        (status = 404, description = "Complaint not found", body = ErrorSchema),
        (status = 502, description = "Complaint resolved but email failed", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["complaints"],
    operation_id = "resolveComplaint"
)]
#[put("/resolve_complaint/{ticket_number}")]
pub async fn resolve_complaint(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageReply>> {
    let ticket_number = parse_ticket(&path, COMPLAINT_NOT_FOUND)?;
    state
        .complaints
        .resolve(ResolveComplaintRequest { ticket_number })
        .await?;

    Ok(web::Json(MessageReply::new("Complaint resolved")))
}

/// Report the status of a complaint.
#[utoipa::path(
    get,
    path = "/check_status/{ticket_number}",
    params(("ticket_number" = String, Path, description = "Six-symbol ticket number")),
    responses(
        (status = 200, description = "Current status", body = MessageReply),
        (status = 404, description = "Ticket not found", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["complaints"],
    operation_id = "checkStatus"
)]
#[get("/check_status/{ticket_number}")]
pub async fn check_status(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageReply>> {
    let ticket_number = parse_ticket(&path, TICKET_NOT_FOUND)?;
    let response = state
        .complaints_query
        .check_status(CheckStatusRequest { ticket_number })
        .await?;

    Ok(web::Json(MessageReply::new(format!(
        "Status: {}",
        response.status
    ))))
}

/// Register the complaint routes on an Actix service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_complaint)
        .service(resolve_complaint)
        .service(check_status);
}

#[cfg(test)]
#[path = "complaints_tests.rs"]
mod tests;
