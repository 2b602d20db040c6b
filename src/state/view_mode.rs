/// Per-target optical/thermal display flags
use std::collections::HashMap;

/// Session store of thermal-mode flags, keyed by `Location.id`
///
/// An id with no entry is in optical mode. Entries are created on first
/// toggle and never removed.
#[derive(Debug, Clone, Default)]
pub struct ViewModeStore {
    thermal: HashMap<String, bool>,
}

impl ViewModeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the target is currently shown in thermal mode
    pub fn is_thermal(&self, id: &str) -> bool {
        self.thermal.get(id).copied().unwrap_or(false)
    }

    /// Flip the flag for `id` only, returning the new value
    pub fn toggle(&mut self, id: &str) -> bool {
        let flag = self.thermal.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_id_is_optical() {
        let store = ViewModeStore::new();
        assert!(!store.is_thermal("lagos"));
    }

    #[test]
    fn test_toggle_parity() {
        let mut store = ViewModeStore::new();
        for n in 1..=7 {
            store.toggle("tokyo");
            assert_eq!(store.is_thermal("tokyo"), n % 2 == 1, "after {} toggles", n);
        }
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut store = ViewModeStore::new();
        assert!(store.toggle("delta"));
        assert!(!store.toggle("delta"));
        assert!(!store.is_thermal("delta"));
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut store = ViewModeStore::new();
        store.toggle("lagos");
        store.toggle("tokyo");
        store.toggle("tokyo");

        assert!(store.is_thermal("lagos"));
        assert!(!store.is_thermal("tokyo"));
        assert!(!store.is_thermal("delta"));
    }

    #[test]
    fn test_toggle_order_commutes() {
        let mut ab = ViewModeStore::new();
        ab.toggle("a");
        ab.toggle("b");

        let mut ba = ViewModeStore::new();
        ba.toggle("b");
        ba.toggle("a");

        for id in ["a", "b", "c"] {
            assert_eq!(ab.is_thermal(id), ba.is_thermal(id));
        }
    }
}
