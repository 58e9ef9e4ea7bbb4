//! Byte stream handed to the connection pool

use std::fmt;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use hyper::rt::{Read, ReadBufCursor, Write};
use hyper_util::client::legacy::connect::{Connected, Connection};
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;

use super::tls::ALPN_H2;

/// A plain or TLS-wrapped TCP connection.
pub enum MaybeTlsStream {
    /// Cleartext connection; `proxied` marks a connection to a forward proxy,
    /// which makes the pool send absolute-form request targets.
    Plain {
        io: TokioIo<TcpStream>,
        proxied: bool,
    },
    Tls(TokioIo<TlsStream<TcpStream>>),
}

impl MaybeTlsStream {
    pub(crate) fn plain(io: TokioIo<TcpStream>) -> Self {
        Self::Plain { io, proxied: false }
    }

    pub(crate) fn proxied(io: TokioIo<TcpStream>) -> Self {
        Self::Plain { io, proxied: true }
    }

    pub(crate) fn tls(stream: TlsStream<TcpStream>) -> Self {
        Self::Tls(TokioIo::new(stream))
    }

    /// True when ALPN settled on HTTP/2.
    #[must_use]
    pub fn negotiated_h2(&self) -> bool {
        match self {
            Self::Plain { .. } => false,
            Self::Tls(io) => {
                let (_, session) = io.inner().get_ref();
                session.alpn_protocol() == Some(ALPN_H2)
            }
        }
    }
}

impl fmt::Debug for MaybeTlsStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain { proxied, .. } => f
                .debug_struct("MaybeTlsStream::Plain")
                .field("proxied", proxied)
                .finish(),
            Self::Tls(_) => f
                .debug_struct("MaybeTlsStream::Tls")
                .field("h2", &self.negotiated_h2())
                .finish(),
        }
    }
}

impl Connection for MaybeTlsStream {
    fn connected(&self) -> Connected {
        match self {
            Self::Plain { proxied, .. } => Connected::new().proxy(*proxied),
            Self::Tls(_) if self.negotiated_h2() => Connected::new().negotiated_h2(),
            Self::Tls(_) => Connected::new(),
        }
    }
}

impl Read for MaybeTlsStream {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: ReadBufCursor<'_>,
    ) -> Poll<io::Result<()>> {
        match self.get_mut() {
            Self::Plain { io, .. } => Pin::new(io).poll_read(cx, buf),
            Self::Tls(io) => Pin::new(io).poll_read(cx, buf),
        }
    }
}

impl Write for MaybeTlsStream {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        match self.get_mut() {
            Self::Plain { io, .. } => Pin::new(io).poll_write(cx, buf),
            Self::Tls(io) => Pin::new(io).poll_write(cx, buf),
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.get_mut() {
            Self::Plain { io, .. } => Pin::new(io).poll_flush(cx),
            Self::Tls(io) => Pin::new(io).poll_flush(cx),
        }
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.get_mut() {
            Self::Plain { io, .. } => Pin::new(io).poll_shutdown(cx),
            Self::Tls(io) => Pin::new(io).poll_shutdown(cx),
        }
    }

    fn is_write_vectored(&self) -> bool {
        match self {
            Self::Plain { io, .. } => io.is_write_vectored(),
            Self::Tls(io) => io.is_write_vectored(),
        }
    }

    fn poll_write_vectored(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        bufs: &[io::IoSlice<'_>],
    ) -> Poll<io::Result<usize>> {
        match self.get_mut() {
            Self::Plain { io, .. } => Pin::new(io).poll_write_vectored(cx, bufs),
            Self::Tls(io) => Pin::new(io).poll_write_vectored(cx, bufs),
        }
    }
}
