//! Single in-flight export gate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Exporting flag of one form. At most one [`ExportGuard`] exists at a time.
#[derive(Debug, Clone, Default)]
pub struct ExportGate {
    exporting: Arc<AtomicBool>,
}

impl ExportGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate, or `None` if an export is already running.
    pub fn try_begin(&self) -> Option<ExportGuard> {
        self.exporting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ExportGuard {
                exporting: Arc::clone(&self.exporting),
            })
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting.load(Ordering::Acquire)
    }
}

/// Clears the exporting flag when dropped.
#[derive(Debug)]
pub struct ExportGuard {
    exporting: Arc<AtomicBool>,
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        self.exporting.store(false, Ordering::Release);
    }
}
