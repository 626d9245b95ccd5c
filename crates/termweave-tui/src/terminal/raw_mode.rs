//! RAII guard for raw terminal mode

use crate::error::{Error, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use tracing::{debug, warn};

/// RAII guard for raw terminal mode
///
/// Dropping the guard restores the mode that was active when it was
/// acquired, including during unwinding. If the terminal was already raw
/// the guard leaves it alone.
#[derive(Debug)]
pub struct RawModeGuard {
    restore: bool,
}

impl RawModeGuard {
    pub(crate) fn acquire() -> Result<Self> {
        if is_raw_mode_enabled().map_err(Error::RawMode)? {
            debug!("terminal already in raw mode");
            return Ok(Self { restore: false });
        }

        enable_raw_mode().map_err(Error::RawMode)?;
        debug!("entered raw mode");
        Ok(Self { restore: true })
    }

    /// Restore the previous mode now and report failures
    pub fn release(mut self) -> Result<()> {
        if std::mem::take(&mut self.restore) {
            disable_raw_mode().map_err(Error::RawMode)?;
            debug!("left raw mode");
        }
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.restore {
            if let Err(err) = disable_raw_mode() {
                warn!(error = %err, "failed to restore terminal mode");
            }
        }
    }
}
