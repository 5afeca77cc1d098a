use std::env;

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

/// Filter directives for the atom registry, e.g. `a11y_atom=debug`.
pub const LOG_ENV: &str = "A11Y_ATOMS_LOG";

struct LoggerConfig {
    filter: Option<String>,
}

impl LoggerConfig {
    fn from_env() -> Self {
        let filter = env::var(LOG_ENV).ok().filter(|f| !f.trim().is_empty());
        Self { filter }
    }

    fn subscriber(self) -> Option<impl tracing::Subscriber + Send + Sync + 'static> {
        let filter = EnvFilter::new(self.filter?);
        let layer = tracing_tree::HierarchicalLayer::default()
            .with_indent_lines(true)
            .with_writer(std::io::stderr);
        Some(tracing_subscriber::Registry::default().with(filter).with(layer))
    }
}

/// Install a hierarchical stderr subscriber filtered by `A11Y_ATOMS_LOG`.
///
/// Does nothing when the variable is unset or blank. Returns whether a
/// subscriber was installed by this call.
pub fn init_tracing() -> bool {
    let Some(subscriber) = LoggerConfig::from_env().subscriber() else {
        return false;
    };
    // a global subscriber may only be set once per process
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
