// SPDX-License-Identifier: MPL-2.0
//! Download progress reports.

/// Bytes received so far for one fetch, and the expected total if the
/// server announced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DownloadProgress {
    pub bytes_received: u64,
    pub total_bytes: Option<u64>,
}

impl DownloadProgress {
    #[must_use]
    pub fn new(bytes_received: u64, total_bytes: Option<u64>) -> Self {
        Self {
            bytes_received,
            total_bytes,
        }
    }

    /// Completed fraction in `[0, 1]`, or `None` when the total is unknown.
    ///
    /// A known total of zero counts as complete. Servers that send fewer
    /// bytes than announced, or more, still yield a value inside the range.
    #[must_use]
    pub fn ratio(&self) -> Option<f32> {
        let total = self.total_bytes?;
        if total == 0 {
            return Some(1.0);
        }
        let ratio = self.bytes_received as f64 / total as f64;
        Some(ratio.clamp(0.0, 1.0) as f32)
    }

    /// Returns this report advanced by `chunk` bytes.
    #[must_use]
    pub fn advanced(self, chunk: u64) -> Self {
        Self {
            bytes_received: self.bytes_received.saturating_add(chunk),
            ..self
        }
    }
}
