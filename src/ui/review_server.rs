use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use serde::Serialize;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::Filter;
use crate::config::constants::{MAX_CHANGE_ID_LENGTH, MAX_SESSION_ID_LENGTH, SERVER_SHUTDOWN_GRACE_PERIOD_MS, sleep_duration_millis};
use crate::errors::{TrackError, TrackResult};
use crate::structs::api_response::ApiResponse;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::review::activate_request::ActivateRequest;
use crate::structs::review::create_manuscript_request::CreateManuscriptRequest;
use crate::structs::review::resolve_change_request::ResolveChangeRequest;
use crate::structs::review::tracking_request::TrackingRequest;
use crate::structs::review::transaction_request::TransactionRequest;
use crate::ui::session_manager::SessionManager;

type JsonReply = warp::reply::WithStatus<warp::reply::Json>;

pub struct ReviewServer {
    session_manager: Arc<SessionManager>,
    config: ServerConfig,
    port: Option<u16>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ReviewServer {
    pub fn new(session_manager: Arc<SessionManager>, config: ServerConfig) -> Self {
        Self {
            session_manager,
            config,
            port: None,
            shutdown_tx: None,
        }
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub async fn start(&mut self, port: Option<u16>) -> TrackResult<u16> {
        let ip: IpAddr = self.config.bind_address.parse().map_err(|_| {
            TrackError::config_error(
                &format!("invalid bind address '{}'", self.config.bind_address),
                Some("server.bind_address"),
                Some("Use an IP address such as 127.0.0.1"),
            )
        })?;
        let port = match port {
            Some(port) => port,
            None => self.find_available_port().await?,
        };
        self.port = Some(port);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let routes = routes(Arc::clone(&self.session_manager)).with(
            warp::cors()
                .allow_origin("http://127.0.0.1")
                .allow_origin("http://localhost")
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "POST", "PUT", "DELETE"]),
        );

        let addr: SocketAddr = (ip, port).into();
        let (_, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| TrackError::system_error("bind review server", &e.to_string()))?;

        tokio::spawn(server);

        log::info!("🌐 Review server started on http://{}", addr);
        Ok(port)
    }

    pub async fn shutdown(&mut self) -> TrackResult<()> {
        log::info!("🛑 Shutting down review server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx
                .send(())
                .map_err(|_| TrackError::system_error("shutdown", "Failed to send shutdown signal"))?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Review server shutdown complete");

        Ok(())
    }

    async fn find_available_port(&self) -> TrackResult<u16> {
        for port in self.config.port_range_start..self.config.port_range_end {
            if let Ok(listener) = tokio::net::TcpListener::bind((self.config.bind_address.as_str(), port)).await {
                drop(listener);
                return Ok(port);
            }
        }
        Err(TrackError::system_error(
            "find available port",
            &format!("no free port in {}..{}", self.config.port_range_start, self.config.port_range_end),
        ))
    }
}

pub fn routes(
    session_manager: Arc<SessionManager>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let manager = warp::any().map(move || Arc::clone(&session_manager));

    let create = warp::path!("api" / "manuscripts")
        .and(warp::post())
        .and(warp::body::json())
        .and(manager.clone())
        .and_then(create_manuscript_handler);

    let get = warp::path!("api" / "manuscripts" / String)
        .and(warp::get())
        .and(manager.clone())
        .and_then(get_manuscript_handler);

    let close = warp::path!("api" / "manuscripts" / String)
        .and(warp::delete())
        .and(manager.clone())
        .and_then(close_manuscript_handler);

    let transactions = warp::path!("api" / "manuscripts" / String / "transactions")
        .and(warp::post())
        .and(warp::body::json())
        .and(manager.clone())
        .and_then(transaction_handler);

    let tracking = warp::path!("api" / "manuscripts" / String / "tracking")
        .and(warp::post())
        .and(warp::body::json())
        .and(manager.clone())
        .and_then(tracking_handler);

    let changes = warp::path!("api" / "manuscripts" / String / "changes")
        .and(warp::get())
        .and(manager.clone())
        .and_then(list_changes_handler);

    let accept_all = warp::path!("api" / "manuscripts" / String / "changes" / "accept-all")
        .and(warp::post())
        .and(manager.clone())
        .and_then(accept_all_handler);

    let reject_all = warp::path!("api" / "manuscripts" / String / "changes" / "reject-all")
        .and(warp::post())
        .and(manager.clone())
        .and_then(reject_all_handler);

    let resolve = warp::path!("api" / "manuscripts" / String / "changes" / String)
        .and(warp::put())
        .and(warp::body::json())
        .and(manager.clone())
        .and_then(resolve_change_handler);

    let activate = warp::path!("api" / "manuscripts" / String / "activate")
        .and(warp::post())
        .and(warp::body::json())
        .and(manager.clone())
        .and_then(activate_handler);

    let events = warp::path!("api" / "manuscripts" / String / "events")
        .and(warp::get())
        .and(manager)
        .and_then(events_handler);

    create
        .or(get)
        .or(close)
        .or(transactions)
        .or(tracking)
        .or(changes)
        .or(accept_all)
        .or(reject_all)
        .or(resolve)
        .or(activate)
        .or(events)
}

fn sanitize_id(id: &str, max_length: usize) -> String {
    id.chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .take(max_length)
        .collect()
}

fn status_for(error: &TrackError) -> StatusCode {
    match error {
        TrackError::SessionNotFound { .. } => StatusCode::NOT_FOUND,
        TrackError::StaleTransaction { .. } => StatusCode::CONFLICT,
        TrackError::InvalidRange { .. }
        | TrackError::InvalidStatusTransition { .. }
        | TrackError::ParseError { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn respond<T: Serialize>(result: TrackResult<T>, message: &str) -> JsonReply {
    match result {
        Ok(data) => warp::reply::with_status(warp::reply::json(&ApiResponse::ok(data, message)), StatusCode::OK),
        Err(e) => {
            log::warn!("⚠️ Review API request failed: {}", e);
            warp::reply::with_status(warp::reply::json(&ApiResponse::<()>::error(&e.to_string())), status_for(&e))
        }
    }
}

fn invalid_id(kind: &str) -> JsonReply {
    warp::reply::with_status(
        warp::reply::json(&ApiResponse::<()>::error(&format!("Invalid {} ID", kind))),
        StatusCode::BAD_REQUEST,
    )
}

async fn create_manuscript_handler(
    body: CreateManuscriptRequest,
    session_manager: Arc<SessionManager>,
) -> Result<JsonReply, Infallible> {
    let id = session_manager.create_session(body);
    let snapshot = session_manager.snapshot(&id);
    Ok(match snapshot {
        Ok(snapshot) => warp::reply::with_status(
            warp::reply::json(&ApiResponse::ok(snapshot, "Manuscript session created")),
            StatusCode::CREATED,
        ),
        Err(e) => respond::<()>(Err(e), ""),
    })
}

async fn get_manuscript_handler(session_id: String, session_manager: Arc<SessionManager>) -> Result<JsonReply, Infallible> {
    let session_id = sanitize_id(&session_id, MAX_SESSION_ID_LENGTH);
    if session_id.is_empty() {
        return Ok(invalid_id("session"));
    }
    Ok(respond(session_manager.snapshot(&session_id), "Manuscript loaded"))
}

async fn close_manuscript_handler(session_id: String, session_manager: Arc<SessionManager>) -> Result<JsonReply, Infallible> {
    let session_id = sanitize_id(&session_id, MAX_SESSION_ID_LENGTH);
    if session_id.is_empty() {
        return Ok(invalid_id("session"));
    }
    Ok(respond(session_manager.close_session(&session_id), "Manuscript session closed"))
}

async fn transaction_handler(
    session_id: String,
    body: TransactionRequest,
    session_manager: Arc<SessionManager>,
) -> Result<JsonReply, Infallible> {
    let session_id = sanitize_id(&session_id, MAX_SESSION_ID_LENGTH);
    if session_id.is_empty() {
        return Ok(invalid_id("session"));
    }
    Ok(respond(session_manager.apply_transaction(&session_id, body), "Transaction applied"))
}

async fn tracking_handler(
    session_id: String,
    body: TrackingRequest,
    session_manager: Arc<SessionManager>,
) -> Result<JsonReply, Infallible> {
    let session_id = sanitize_id(&session_id, MAX_SESSION_ID_LENGTH);
    if session_id.is_empty() {
        return Ok(invalid_id("session"));
    }
    Ok(respond(session_manager.set_tracking(&session_id, body.enabled), "Tracking updated"))
}

async fn list_changes_handler(session_id: String, session_manager: Arc<SessionManager>) -> Result<JsonReply, Infallible> {
    let session_id = sanitize_id(&session_id, MAX_SESSION_ID_LENGTH);
    if session_id.is_empty() {
        return Ok(invalid_id("session"));
    }
    Ok(respond(session_manager.pending_changes(&session_id), "Pending changes"))
}

async fn resolve_change_handler(
    session_id: String,
    change_id: String,
    body: ResolveChangeRequest,
    session_manager: Arc<SessionManager>,
) -> Result<JsonReply, Infallible> {
    let session_id = sanitize_id(&session_id, MAX_SESSION_ID_LENGTH);
    let change_id = sanitize_id(&change_id, MAX_CHANGE_ID_LENGTH);
    if session_id.is_empty() {
        return Ok(invalid_id("session"));
    }
    if change_id.is_empty() {
        return Ok(invalid_id("change"));
    }

    let result = session_manager.resolve_change(&session_id, &change_id, body.status);
    let message = match &result {
        Ok(true) => "Change resolved",
        _ => "Change not pending",
    };
    Ok(respond(result, message))
}

async fn accept_all_handler(session_id: String, session_manager: Arc<SessionManager>) -> Result<JsonReply, Infallible> {
    let session_id = sanitize_id(&session_id, MAX_SESSION_ID_LENGTH);
    if session_id.is_empty() {
        return Ok(invalid_id("session"));
    }
    Ok(respond(session_manager.accept_all(&session_id), "Changes accepted"))
}

async fn reject_all_handler(session_id: String, session_manager: Arc<SessionManager>) -> Result<JsonReply, Infallible> {
    let session_id = sanitize_id(&session_id, MAX_SESSION_ID_LENGTH);
    if session_id.is_empty() {
        return Ok(invalid_id("session"));
    }
    Ok(respond(session_manager.reject_all(&session_id), "Changes rejected"))
}

async fn activate_handler(
    session_id: String,
    body: ActivateRequest,
    session_manager: Arc<SessionManager>,
) -> Result<JsonReply, Infallible> {
    let session_id = sanitize_id(&session_id, MAX_SESSION_ID_LENGTH);
    if session_id.is_empty() {
        return Ok(invalid_id("session"));
    }
    Ok(respond(session_manager.activate(&session_id, body.position), "Position resolved"))
}

async fn events_handler(session_id: String, session_manager: Arc<SessionManager>) -> Result<JsonReply, Infallible> {
    let session_id = sanitize_id(&session_id, MAX_SESSION_ID_LENGTH);
    if session_id.is_empty() {
        return Ok(invalid_id("session"));
    }
    Ok(respond(session_manager.take_events(&session_id), "Tracking events"))
}
