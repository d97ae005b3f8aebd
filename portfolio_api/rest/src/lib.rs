use std::{
    future::Future,
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::Router;
use portfolio_core_contact_contracts::ContactFeatureService;
use portfolio_di::Build;
use tokio::net::TcpListener;
use tracing::{error, info};

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Contact> {
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub real_ip_config: Option<Arc<RestServerRealIpConfig>>,
}

/// Trust `header` to contain the client ip for connections from `set_from`,
/// usually a reverse proxy.
#[derive(Debug)]
pub struct RestServerRealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactFeatureService,
{
    /// Serve the REST API on the configured address until a shutdown signal
    /// is received.
    pub async fn serve(self) -> anyhow::Result<()> {
        let (host, port) = (self.config.host, self.config.port);
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;

        info!("Starting http server on {host}:{port}");
        self.serve_with_listener(listener, shutdown_signal()).await
    }

    pub async fn serve_with_listener(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        axum::serve(
            listener,
            self.router()
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown)
        .await
        .context("Failed to run http server")
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::contact::router(self.contact.into()))
            .fallback(routes::not_found);

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::client_ip::add(self.config.real_ip_config)(router);
        middlewares::request_id::add(router)
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("Failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutting down http server");
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use axum::{
        body::Body,
        extract::ConnectInfo,
        http::{Request, StatusCode},
        Extension,
    };
    use portfolio_core_contact_contracts::MockContactFeatureService;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;

    pub(crate) fn make_router(contact: MockContactFeatureService) -> Router<()> {
        RestServer {
            contact,
            config: RestServerConfig {
                host: Ipv4Addr::LOCALHOST.into(),
                port: 0,
                real_ip_config: None,
            },
        }
        .router()
        .layer(Extension(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4711)))))
    }

    pub(crate) async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn not_found() {
        // Arrange
        let sut = make_router(MockContactFeatureService::new());

        // Act
        let response = sut
            .oneshot(Request::get("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key("X-Request-Id"));
        assert_eq!(body_json(response).await, json!({"message": "Not found"}));
    }

    #[tokio::test]
    async fn serve_until_shutdown() {
        // Arrange
        let sut = RestServer {
            contact: MockContactFeatureService::new(),
            config: RestServerConfig {
                host: Ipv4Addr::LOCALHOST.into(),
                port: 0,
                real_ip_config: None,
            },
        };
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();

        // Act
        let result = sut
            .serve_with_listener(listener, std::future::ready(()))
            .await;

        // Assert
        result.unwrap();
    }
}
