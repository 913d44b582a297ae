use candle_core::Device;
use tracing::debug;

/// Picks the compute device for embedding inference.
///
/// GPU backends are tried only when their feature is compiled in; failure
/// to open one falls through to the next option and ultimately to CPU.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            tracing::info!("Using Metal GPU for embedding inference");
            return device;
        }
        Err(e) => tracing::warn!(error = %e, "Metal device unavailable, falling back"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            tracing::info!("Using CUDA GPU for embedding inference");
            return device;
        }
        Err(e) => tracing::warn!(error = %e, "CUDA device unavailable, falling back"),
    }

    debug!("Using CPU device for embedding inference");
    Device::Cpu
}
