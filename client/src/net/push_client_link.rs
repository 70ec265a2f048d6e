//! Transport-independent connection lifecycle extracted from `push_client`.
//!
//! `run_push_loop` owns the reconnect policy and `run_link` owns a single
//! connection. The browser supplies a websocket-backed [`Transport`]; tests
//! drive the same code with in-memory channels.

#[cfg(test)]
#[path = "push_client_link_test.rs"]
mod push_client_link_test;

#[cfg(any(test, feature = "csr"))]
use std::fmt::Display;
#[cfg(any(test, feature = "csr"))]
use std::future::Future;
#[cfg(any(test, feature = "csr"))]
use std::time::Duration;

#[cfg(any(test, feature = "csr"))]
use futures::channel::mpsc::UnboundedReceiver;
#[cfg(any(test, feature = "csr"))]
use futures::{Sink, SinkExt, Stream, StreamExt};

#[cfg(any(test, feature = "csr"))]
use crate::state::connection::ConnectionStatus;
#[cfg(any(test, feature = "csr"))]
use crate::util::reconnect::ReconnectSchedule;

/// One side of a push channel: how to connect, wait, and report.
#[cfg(any(test, feature = "csr"))]
pub(super) trait Transport {
    type Error: Display;
    type Inbound: Stream<Item = Result<String, Self::Error>> + Unpin;
    type Outbound: Sink<String> + Unpin;

    /// Open a connection. `None` ends the loop; the browser transport never
    /// returns it.
    fn connect(&mut self) -> impl Future<Output = Option<Result<(Self::Inbound, Self::Outbound), Self::Error>>>;

    fn sleep(&mut self, delay: Duration) -> impl Future<Output = ()>;

    fn on_status(&mut self, status: ConnectionStatus);

    fn on_text(&mut self, text: String);
}

/// Connect, run until the connection ends, wait the fixed delay, repeat.
///
/// A command whose write failed is kept in `retry` and sent first on the
/// next connection.
#[cfg(any(test, feature = "csr"))]
pub(super) async fn run_push_loop<T: Transport>(
    transport: &mut T,
    name: &str,
    schedule: &mut ReconnectSchedule,
    rx: &mut UnboundedReceiver<String>,
) {
    let mut retry: Option<String> = None;

    loop {
        if let Some(attempt) = schedule.on_retry() {
            leptos::logging::log!("[{name}] reconnect attempt {attempt}");
        }
        transport.on_status(ConnectionStatus::Connecting);

        let Some(connected) = transport.connect().await else {
            return;
        };
        match connected {
            Ok((inbound, outbound)) => {
                transport.on_status(ConnectionStatus::Connected);
                match run_link(transport, inbound, outbound, rx, &mut retry).await {
                    Ok(()) => leptos::logging::log!("[{name}] socket closed"),
                    Err(e) => leptos::logging::warn!("[{name}] socket error: {e}"),
                }
            }
            Err(e) => leptos::logging::warn!("[{name}] connect failed: {e}"),
        }

        transport.on_status(ConnectionStatus::Disconnected);

        if let Some(delay) = schedule.on_close() {
            leptos::logging::log!("[{name}] reconnecting in {}ms", delay.as_millis());
            transport.sleep(delay).await;
        }
    }
}

/// Pump one connection until the inbound stream ends, errors, or a write fails.
///
/// The connection lives as long as the inbound side does; an idle or closed
/// command queue never ends it.
///
/// # Errors
///
/// Returns the inbound error text, or a message when a write failed.
#[cfg(any(test, feature = "csr"))]
pub(super) async fn run_link<T: Transport>(
    transport: &mut T,
    mut inbound: T::Inbound,
    mut outbound: T::Outbound,
    rx: &mut UnboundedReceiver<String>,
    retry: &mut Option<String>,
) -> Result<(), String> {
    // Forward queued commands. `retry` holds the frame in flight until the
    // write completes.
    let send_task = async {
        loop {
            if retry.is_none() {
                match rx.next().await {
                    Some(text) => *retry = Some(text),
                    None => futures::future::pending::<()>().await,
                }
            }
            let Some(text) = retry.clone() else {
                continue;
            };
            if outbound.send(text).await.is_err() {
                return Err("write failed".to_owned());
            }
            *retry = None;
        }
    };

    let recv_task = async {
        while let Some(item) = inbound.next().await {
            match item {
                Ok(text) => transport.on_text(text),
                Err(e) => return Err(e.to_string()),
            }
        }
        Ok(())
    };

    match futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await {
        futures::future::Either::Left((result, _)) | futures::future::Either::Right((result, _)) => result,
    }
}
