//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use complaints::Trace;
#[cfg(debug_assertions)]
use complaints::doc::ApiDoc;
use complaints::domain::{ComplaintService, RandomTicketGenerator};
use complaints::inbound::http::complaints::configure as configure_complaints;
use complaints::inbound::http::health::{HealthState, live, ready};
use complaints::inbound::http::state::HttpState;
use complaints::inbound::http::validation::json_config;
use complaints::outbound::persistence::DieselComplaintRepository;

/// Wire the production adapters into the complaint service.
fn build_http_state(config: &ServerConfig) -> HttpState {
    let service = Arc::new(ComplaintService::new(
        Arc::new(DieselComplaintRepository::new(config.db_pool.clone())),
        Arc::new(config.notifier.clone()),
        Arc::new(RandomTicketGenerator),
    ));
    HttpState::new(service.clone(), service)
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .configure(configure_complaints)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
