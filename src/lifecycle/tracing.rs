//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG` (falling back to `info`).
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: startup, shutdown, and final record count
//! - **Store Operations**: `Saved`, `Replaced`, `Deleted` at info; reads at debug
//! - **Service Calls**: one span per operation via `#[instrument]`
//! - **HTTP Requests**: `tower-http`'s `TraceLayer`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show payloads and reads
//! RUST_LOG=debug cargo run
//!
//! # Only the store task
//! RUST_LOG=product_catalog::framework=debug cargo run
//! ```
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! DEBUG create_product:store: Sending request
//! DEBUG Save entity_type="Product" entity=Product { id: None, name: "Widget", price: 9.99 }
//! INFO Saved entity_type="Product" id=1 replaced=false size=1
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
