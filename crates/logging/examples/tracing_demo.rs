//! Routes driver diagnostics through the tracing ecosystem.
//!
//! Run with:
//!
//! ```text
//! RUST_LOG=debug cargo run -p logging --example tracing_demo --features tracing
//! ```

use logging::{init_tracing, Level, Logger, LoggingContext};

fn main() -> std::io::Result<()> {
    let context = LoggingContext::global();
    init_tracing(&context);
    context.set_level(Level::Debug);

    let connection = Logger::new("Connection");
    connection.info("connected to primary")?;
    connection.debug_with(
        "server heartbeat",
        serde_json::json!({ "roundTripTimeMillis": 3 }),
    )?;

    let topology = Logger::new("Topology");
    topology.warn("primary stepped down")?;
    topology.error("no reachable servers")?;

    Ok(())
}
