//! First-visit gate for the welcome overlay.

use crate::error::ChesedResult;
use crate::storage::Storage;

/// Flag key marking that this device has already seen the welcome overlay.
pub const VISITED_FLAG: &str = "hasVisitedChessedMachine";

/// Decides whether the welcome overlay opens on its own.
#[derive(Clone)]
pub struct WelcomeGate {
    storage: Storage,
}

impl WelcomeGate {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// `true` exactly once per device; marks the device as visited when it is.
    pub fn check_first_visit(&self) -> ChesedResult<bool> {
        if self.storage.flag(VISITED_FLAG)? {
            return Ok(false);
        }
        self.storage.set_flag(VISITED_FLAG, true)?;
        tracing::info!("First visit; showing welcome");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_visit_only_once() {
        let temp_dir = TempDir::new().unwrap();
        let gate = WelcomeGate::new(Storage::in_dir(temp_dir.path()).unwrap());

        assert!(gate.check_first_visit().unwrap());
        assert!(!gate.check_first_visit().unwrap());
    }

    #[test]
    fn test_visit_remembered_after_restart() {
        let temp_dir = TempDir::new().unwrap();
        {
            let gate = WelcomeGate::new(Storage::in_dir(temp_dir.path()).unwrap());
            assert!(gate.check_first_visit().unwrap());
        }
        let gate = WelcomeGate::new(Storage::in_dir(temp_dir.path()).unwrap());
        assert!(!gate.check_first_visit().unwrap());
    }
}
