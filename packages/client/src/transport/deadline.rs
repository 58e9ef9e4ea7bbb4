//! Response-header deadline
//!
//! The wait for response headers starts once the request body has been
//! fully handed to the connection. Dialing, the TLS handshake and a slow
//! upload are bounded by their own limits, not by this one.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use bytes::Bytes;
use http_body::{Body as HttpBody, Frame, SizeHint};
use http_body_util::BodyExt;
use tokio::sync::watch;

use crate::error::BoxError;
use crate::http::{Body, HttpRequest};

/// Body wrapper that reports when its last frame has been taken.
///
/// hyper asks `is_end_stream` when it writes the request head and after each
/// data frame, and polls to `None` for bodies of unknown length, so either
/// path marks the request as written.
struct WrittenSignal {
    inner: Body,
    written: watch::Sender<bool>,
}

impl WrittenSignal {
    fn mark(&self) {
        if !*self.written.borrow() {
            self.written.send_replace(true);
        }
    }
}

impl HttpBody for WrittenSignal {
    type Data = Bytes;
    type Error = BoxError;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Bytes>, BoxError>>> {
        let this = self.get_mut();
        let polled = Pin::new(&mut this.inner).poll_frame(cx);
        if matches!(polled, Poll::Ready(None)) {
            this.mark();
        }
        polled
    }

    fn is_end_stream(&self) -> bool {
        let end = self.inner.is_end_stream();
        if end {
            self.mark();
        }
        end
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

/// Handle resolving when the response-header wait has run out.
pub(crate) struct HeaderDeadline {
    written: watch::Receiver<bool>,
    limit: Duration,
}

impl HeaderDeadline {
    /// Wrap `request`'s body so the deadline can see when it is written.
    pub(crate) fn attach(request: HttpRequest, limit: Duration) -> (HttpRequest, Self) {
        let (tx, rx) = watch::channel(false);
        let request = request.map(|inner| {
            WrittenSignal {
                inner,
                written: tx,
            }
            .boxed_unsync()
        });
        (request, Self { written: rx, limit })
    }

    /// Resolves `limit` after the request was written. Never resolves if the
    /// body is dropped before it ends; the request itself fails in that case.
    pub(crate) async fn expired(mut self) {
        let written = self.written.wait_for(|done| *done).await.is_ok();
        if !written {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(self.limit).await;
    }
}
