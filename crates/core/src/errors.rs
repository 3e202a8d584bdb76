use thiserror::Error;

/// Unified error type for the entire portfolio-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// The valuation engine itself never fails; these errors come from the
/// data providers and from strict input validation.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Data Providers ──────────────────────────────────────────────
    #[error("API error ({provider}, status {status}): {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}
