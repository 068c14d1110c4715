//! Train trigger state and its busy guard.

use crate::consts::cli_consts::controls::TRAIN_TRIGGER_LABEL;
use std::sync::{Arc, Mutex, MutexGuard};

/// Enabled/label state of the control that starts a training run. Shared
/// between the controller (which flips it busy) and the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerControl {
    pub enabled: bool,
    pub label: String,
}

impl Default for TriggerControl {
    fn default() -> Self {
        Self {
            enabled: true,
            label: TRAIN_TRIGGER_LABEL.to_string(),
        }
    }
}

impl TriggerControl {
    /// Copy of the current trigger state for rendering.
    pub fn snapshot(control: &Arc<Mutex<TriggerControl>>) -> TriggerControl {
        lock_ignoring_poison(control).clone()
    }
}

/// Scoped acquisition of the trigger's busy state.
///
/// The original label is captured before any other step of the operation runs,
/// and `Drop` restores both fields, so the trigger is re-enabled on every exit
/// path, including panics.
pub struct BusyGuard {
    control: Arc<Mutex<TriggerControl>>,
    original_label: String,
}

// A panic while the lock is held poisons the mutex; the restore must still
// happen, so poisoned locks are entered anyway.
fn lock_ignoring_poison(control: &Mutex<TriggerControl>) -> MutexGuard<'_, TriggerControl> {
    match control.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl BusyGuard {
    pub fn acquire(control: &Arc<Mutex<TriggerControl>>, busy_label: &str) -> Self {
        let original_label = {
            let mut state = lock_ignoring_poison(control);
            let original = state.label.clone();
            state.enabled = false;
            state.label = busy_label.to_string();
            original
        };
        Self {
            control: Arc::clone(control),
            original_label,
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let mut state = lock_ignoring_poison(&self.control);
        state.enabled = true;
        state.label = std::mem::take(&mut self.original_label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_flips_trigger_busy_and_restores() {
        let control = Arc::new(Mutex::new(TriggerControl::default()));

        {
            let _guard = BusyGuard::acquire(&control, "Training...");
            let state = control.lock().unwrap();
            assert!(!state.enabled);
            assert_eq!(state.label, "Training...");
        }

        let state = control.lock().unwrap();
        assert!(state.enabled);
        assert_eq!(state.label, TRAIN_TRIGGER_LABEL);
    }

    #[test]
    // A panic between acquire and drop must still restore the trigger.
    fn test_guard_restores_after_panic() {
        let control = Arc::new(Mutex::new(TriggerControl::default()));
        let control_clone = Arc::clone(&control);

        let result = std::panic::catch_unwind(move || {
            let _guard = BusyGuard::acquire(&control_clone, "Training...");
            panic!("training blew up");
        });
        assert!(result.is_err());

        let state = lock_ignoring_poison(&control);
        assert!(state.enabled);
        assert_eq!(state.label, TRAIN_TRIGGER_LABEL);
    }

    #[test]
    // The label restored is the one present at acquisition time, not a default.
    fn test_guard_restores_custom_label() {
        let control = Arc::new(Mutex::new(TriggerControl {
            enabled: true,
            label: "Retrain".to_string(),
        }));

        {
            let _guard = BusyGuard::acquire(&control, "Training...");
        }

        assert_eq!(control.lock().unwrap().label, "Retrain");
    }
}
