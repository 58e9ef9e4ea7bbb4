//! Connector service used by the pooled hyper client

use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::future::BoxFuture;
use http::Uri;
use http::uri::Scheme;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::connect::proxy::Tunnel;
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use tower_service::Service;

use super::proxy::ProxyPolicy;
use super::stream::MaybeTlsStream;
use crate::config::ClientSettings;
use crate::error::{BoxError, HostMissing, TimedOut};

/// Dials destinations for one transport.
///
/// TCP dialing goes through hyper-util's `HttpConnector` with the connect
/// timeout and keep-alive interval from the settings; `https` destinations
/// then get a rustls handshake bounded by the TLS handshake timeout.
#[derive(Clone)]
pub struct TransportConnector {
    http: HttpConnector,
    tls: TlsConnector,
    proxy: ProxyPolicy,
    tls_handshake_timeout: Option<Duration>,
}

impl TransportConnector {
    #[must_use]
    pub fn new(
        settings: &ClientSettings,
        tls: Arc<rustls::ClientConfig>,
        proxy: ProxyPolicy,
    ) -> Self {
        let mut http = HttpConnector::new();
        http.enforce_http(false);
        http.set_nodelay(true);
        http.set_connect_timeout(settings.connect_timeout());
        http.set_keepalive(settings.keep_alive_interval());

        Self {
            http,
            tls: TlsConnector::from(tls),
            proxy,
            tls_handshake_timeout: settings.tls_handshake_timeout(),
        }
    }

    async fn connect(mut self, dst: Uri) -> Result<MaybeTlsStream, BoxError> {
        let secure = dst.scheme() == Some(&Scheme::HTTPS);

        match self.proxy.intercept(&dst) {
            Some(intercept) if secure => {
                tracing::trace!(
                    target: "hostpool::connect",
                    proxy = %intercept.uri(),
                    destination = %dst,
                    "Tunnelling through proxy"
                );
                let mut tunnel = Tunnel::new(intercept.uri().clone(), self.http.clone());
                if let Some(auth) = intercept.basic_auth() {
                    tunnel = tunnel.with_auth(auth.clone());
                }
                let tcp = tunnel.call(dst.clone()).await?;
                self.handshake(&dst, tcp.into_inner()).await
            }
            Some(intercept) => {
                tracing::trace!(
                    target: "hostpool::connect",
                    proxy = %intercept.uri(),
                    destination = %dst,
                    "Forwarding through proxy"
                );
                let tcp = self.http.call(intercept.uri().clone()).await?;
                Ok(MaybeTlsStream::proxied(tcp))
            }
            None => {
                let tcp = self.http.call(dst.clone()).await?;
                if secure {
                    self.handshake(&dst, tcp.into_inner()).await
                } else {
                    Ok(MaybeTlsStream::plain(tcp))
                }
            }
        }
    }

    async fn handshake(&self, dst: &Uri, tcp: TcpStream) -> Result<MaybeTlsStream, BoxError> {
        let host = dst.host().ok_or(HostMissing)?;
        let host = host.trim_start_matches('[').trim_end_matches(']');
        let server_name = ServerName::try_from(host.to_owned())?;

        let handshake = self.tls.connect(server_name, tcp);
        let stream = match self.tls_handshake_timeout {
            Some(limit) => match tokio::time::timeout(limit, handshake).await {
                Ok(result) => result?,
                Err(_) => return Err(Box::new(TimedOut)),
            },
            None => handshake.await?,
        };

        Ok(MaybeTlsStream::tls(stream))
    }
}

impl std::fmt::Debug for TransportConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportConnector")
            .field("proxy", &self.proxy)
            .field("tls_handshake_timeout", &self.tls_handshake_timeout)
            .finish_non_exhaustive()
    }
}

impl Service<Uri> for TransportConnector {
    type Response = MaybeTlsStream;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<MaybeTlsStream, BoxError>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.http.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, dst: Uri) -> Self::Future {
        Box::pin(self.clone().connect(dst))
    }
}
