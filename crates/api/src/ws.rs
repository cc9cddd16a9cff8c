//! Websocket endpoint for the realtime channel.
//!
//! The socket authenticates in-band: an `authenticate` signal binds the
//! connection to its user's room, and server-initiated events addressed to
//! that user are forwarded as JSON text frames. Transport keepalive
//! (ping/pong) is the client's concern; the server answers pings.

use std::sync::Arc;

use axum::{
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::IntoResponse,
};
use tokio::sync::mpsc::unbounded_channel;

use staffhub_realtime::{RealtimeEvent, RealtimeRegistry, RealtimeSession};

use crate::app::AppServices;

pub async fn ws_handler(
    State(services): State<AppServices>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    let registry = services.registry.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, registry))
}

async fn handle_socket(mut socket: WebSocket, registry: Arc<RealtimeRegistry>) {
    let (tx, mut rx) = unbounded_channel::<RealtimeEvent>();
    let mut session = RealtimeSession::new(registry, tx);
    tracing::debug!(conn_id = %session.id(), "realtime connection opened");

    loop {
        tokio::select! {
            inbound = socket.recv() => {
                let msg = match inbound {
                    Some(Ok(msg)) => msg,
                    Some(Err(e)) => {
                        tracing::debug!(conn_id = %session.id(), "websocket receive error: {e}");
                        break;
                    }
                    None => break,
                };

                match msg {
                    Message::Text(text) => session.handle_text(&text),
                    Message::Ping(data) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Message::Close(_) => break,
                    Message::Pong(_) | Message::Binary(_) => {}
                }
            }
            outbound = rx.recv() => {
                // Sender side lives in the registry; None means unbound.
                let Some(event) = outbound else { break };
                let Ok(frame) = serde_json::to_string(&event) else { continue };
                if socket.send(Message::Text(frame)).await.is_err() {
                    break;
                }
            }
        }
    }

    session.disconnect();
    tracing::debug!(conn_id = %session.id(), "realtime connection closed");
}
