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

//! Process bootstrap for the `pathvectord` binary.

use clap::Parser;
use log::error;

use pathvectord::config::Cli;
use pathvectord::neighbor::NeighborTable;
use pathvectord::net::Transport;
use pathvectord::router::Router;
use pathvectord::types::Asn;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        error!("{error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let neighbors = NeighborTable::new(cli.neighbors.into_iter().map(Into::into))?;
    let router = Router::new(Asn(cli.asn), neighbors);
    let transport = Transport::open(router.neighbors()).await?;
    transport.run(router).await?;
    Ok(())
}
