//! Check command - validates the configuration and reports the result

use tracing::info;

/// Run the check command
///
/// Any initialization error is returned unchanged, so the process exits
/// non-zero with the error chain on stderr.
pub fn run() -> anyhow::Result<()> {
    let registry = super::bootstrap()?;

    for namespace in registry.namespaces() {
        info!(namespace = %namespace, "Configuration namespace is valid");
    }

    println!("ok: {} namespace(s) registered", registry.len());

    Ok(())
}
