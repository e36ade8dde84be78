use std::{
    future,
    sync::{Mutex, MutexGuard},
};

use axum::{
    http::{header, StatusCode},
    routing::post,
    Json, Router,
};
use tokio::{
    net::TcpListener,
    sync::mpsc::{self, UnboundedReceiver},
};

use crate::query::wire::QueryRequest;

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().expect("env lock should not be poisoned")
}

/// Serves `POST /query` on a random local port with a canned reply.
///
/// Returns the base URL and a receiver yielding every decoded request.
pub async fn serve_query(
    status: StatusCode,
    body: &'static str,
) -> (String, UnboundedReceiver<QueryRequest>) {
    let (requests_tx, requests_rx) = mpsc::unbounded_channel();

    let app = Router::new().route(
        "/query",
        post(move |Json(request): Json<QueryRequest>| {
            let _ = requests_tx.send(request);
            async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }
        }),
    );

    (spawn_server(app).await, requests_rx)
}

/// Serves `POST /query` but never answers.
pub async fn serve_silence() -> String {
    let app = Router::new().route(
        "/query",
        post(|| async { future::pending::<StatusCode>().await }),
    );

    spawn_server(app).await
}

async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("test listener should bind");
    let addr = listener
        .local_addr()
        .expect("listener should have an address");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}
