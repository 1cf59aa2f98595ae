// PathVectorD: a BGP-style path-vector routing daemon written in Rust
// Copyright 2025-2026 The pathvectord developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! UDP transport: per-neighbor sockets, the receive channel, and the event loop.
//!
//! Every neighbor is reached through its own connected UDP socket, bound to an ephemeral
//! localhost port. A reader task per socket pushes received datagrams, tagged with the
//! neighbor they arrived from, into a single channel. The consumer end owns the router and
//! processes one datagram to completion before taking the next, so all routing state is
//! mutated from exactly one task and messages from one neighbor keep their arrival order.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;

use log::{debug, trace, warn};
use tokio::net::UdpSocket;
use tokio::sync::mpsc;

use crate::msg::Message;
use crate::neighbor::NeighborTable;
use crate::router::Router;
use crate::types::{ConfigError, DaemonError};

/// Maximum size of one datagram: the UDP payload limit.
const MAX_DATAGRAM: usize = 65535;

/// A datagram received from a neighbor.
#[derive(Debug)]
struct Datagram {
    /// The neighbor whose socket the datagram arrived on.
    neighbor: Ipv4Addr,
    /// The raw payload.
    bytes: Vec<u8>,
}

/// The per-neighbor UDP endpoints.
#[derive(Debug)]
pub struct Transport {
    sockets: HashMap<Ipv4Addr, Arc<UdpSocket>>,
}

impl Transport {
    /// Bind an ephemeral localhost socket towards every neighbor.
    pub async fn open(neighbors: &NeighborTable) -> Result<Self, ConfigError> {
        let mut sockets = HashMap::new();
        for neighbor in neighbors.iter() {
            let socket = connect(neighbor.port)
                .await
                .map_err(|source| ConfigError::Socket {
                    neighbor: neighbor.addr,
                    source,
                })?;
            sockets.insert(neighbor.addr, Arc::new(socket));
        }
        Ok(Self { sockets })
    }

    /// Run the router over this transport until the process is terminated.
    ///
    /// Spawns one reader task per neighbor socket, greets every neighbor with a handshake,
    /// then decodes and dispatches datagrams one at a time.
    pub async fn run(self, mut router: Router) -> Result<(), DaemonError> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        for (addr, socket) in &self.sockets {
            tokio::spawn(read_loop(*addr, socket.clone(), tx.clone()));
        }
        drop(tx);

        for (target, msg) in router.startup_messages() {
            self.send(target, &msg).await;
        }

        while let Some(Datagram { neighbor, bytes }) = rx.recv().await {
            let msg: Message = match serde_json::from_slice(&bytes) {
                Ok(msg) => msg,
                Err(error) => {
                    warn!("cannot decode datagram from {neighbor}: {error}");
                    continue;
                }
            };
            for (target, out) in router.handle_message(neighbor, msg) {
                self.send(target, &out).await;
            }
        }

        Err(DaemonError::ChannelClosed)
    }

    /// Encode and send one message. Unknown targets and transport failures drop the message.
    async fn send(&self, target: Ipv4Addr, msg: &Message) {
        let Some(socket) = self.sockets.get(&target) else {
            debug!("no endpoint towards {target}; message dropped");
            return;
        };
        match serde_json::to_vec(msg) {
            Ok(bytes) => {
                trace!("sending a {} message to {target}", msg.kind());
                if let Err(error) = socket.send(&bytes).await {
                    warn!("cannot send to {target}: {error}");
                }
            }
            Err(error) => warn!("cannot encode a {} message: {error}", msg.kind()),
        }
    }
}

/// Bind an ephemeral localhost socket and connect it to the neighbor's port.
async fn connect(port: u16) -> std::io::Result<UdpSocket> {
    let socket = UdpSocket::bind("127.0.0.1:0").await?;
    socket.connect(("127.0.0.1", port)).await?;
    Ok(socket)
}

/// Receive datagrams from one neighbor socket and push them into the channel.
async fn read_loop(
    neighbor: Ipv4Addr,
    socket: Arc<UdpSocket>,
    tx: mpsc::UnboundedSender<Datagram>,
) {
    let mut buf = vec![0u8; MAX_DATAGRAM];
    loop {
        let len = match socket.recv(&mut buf).await {
            Ok(len) => len,
            Err(error) => {
                warn!("receive error on the socket towards {neighbor}: {error}");
                continue;
            }
        };
        let datagram = Datagram {
            neighbor,
            bytes: buf[..len].to_vec(),
        };
        if tx.send(datagram).is_err() {
            return;
        }
    }
}
