use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vaultcheck_kernel::Manifest;
use vaultcheck_suite::DEFAULT_REPORT_FILE;

pub const LOG_ENV: &str = "VAULTCHECK_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

/// Diagnostics go to stderr so `--json` stdout stays machine-readable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn load_manifest_or_exit(manifest_arg: Option<&str>) -> Manifest {
    let loaded = match manifest_arg {
        Some(path) => Manifest::load(path),
        None => Manifest::builtin(),
    };
    loaded.unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(2);
    })
}

pub fn report_path(root: &str, report_arg: Option<&str>) -> PathBuf {
    match report_arg {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(root).join(DEFAULT_REPORT_FILE),
    }
}

pub fn render_json_or_exit<T: serde::Serialize>(value: &T, what: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| {
        eprintln!("error: failed to render {what} JSON: {err}");
        std::process::exit(2);
    })
}
