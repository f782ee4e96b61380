//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the complaint endpoints, the health probes and the
//! error schema wrappers from the inbound layer. Swagger UI serves it in
//! debug builds.

use utoipa::OpenApi;

use crate::inbound::http::complaints::{MessageReply, SubmitComplaintBody, SubmitComplaintReply};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Complaints API",
        description = "Submit complaints, resolve them and check their status by ticket number."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::complaints::submit_complaint,
        crate::inbound::http::complaints::resolve_complaint,
        crate::inbound::http::complaints::check_status,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        SubmitComplaintBody,
        SubmitComplaintReply,
        MessageReply,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "complaints", description = "Complaint ticket lifecycle"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
