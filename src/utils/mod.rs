pub mod paths;

use std::{io::IsTerminal, sync::Once};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "shop_ledger=warn";

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default,
/// which stays quiet so logs do not interleave with shell output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .try_init();
    });
}
