//! Diagnostics emitted when an emulated code path is taken.

cfg_if::cfg_if! {
    if #[cfg(feature = "trace-fallbacks")] {
        macro_rules! trace_fallback {
            ($operation:literal, $offset:expr, $misalignment:expr) => {
                tracing::trace!(
                    target: "cryptovec::load",
                    offset = $offset,
                    misalignment = $misalignment,
                    "emulated unaligned {}",
                    $operation,
                )
            };
        }
    } else {
        macro_rules! trace_fallback {
            ($operation:literal, $offset:expr, $misalignment:expr) => {{
                let _ = ($offset, $misalignment);
            }};
        }
    }
}

pub(crate) use trace_fallback;
