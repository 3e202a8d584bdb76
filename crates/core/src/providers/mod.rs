pub mod traits;

// Provider implementations
#[cfg(not(target_arch = "wasm32"))]
pub mod json_file;
pub mod static_data;
