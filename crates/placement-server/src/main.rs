//! placement-server binary
//!
//! Serves the furniture-placement engine over HTTP.
//!
//! | Flag     | Env              | Default     |
//! |----------|------------------|-------------|
//! | `--host` | `PLACEMENT_HOST` | `127.0.0.1` |
//! | `--port` | `PLACEMENT_PORT` | `3000`      |

use std::net::{IpAddr, SocketAddr};

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "placement-server", about = "Furniture placement service", version)]
struct Args {
    /// Interface to bind
    #[arg(long, env = "PLACEMENT_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PLACEMENT_PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("placement_server=debug".parse()?),
        )
        .init();

    let args = Args::parse();
    let address = SocketAddr::from((args.host, args.port));
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(%address, "furniture-placement service listening");
    axum::serve(listener, placement_server::app()).await?;
    Ok(())
}
