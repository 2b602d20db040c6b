/// "Add target" dialog state
///
/// Holds whether the dialog is open and the three free-text fields of the
/// pending draft. No validation happens here.

use super::data::TargetDraft;

/// One editable field of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Lat,
    Lon,
}

/// Dialog visibility plus the in-progress draft
///
/// Closing the dialog (cancel or after a submission) discards the draft, so
/// the next `open()` always starts from empty fields.
#[derive(Debug, Clone, Default)]
pub struct TargetDraftController {
    open: bool,
    draft: TargetDraft,
}

impl TargetDraftController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the dialog. Opening an already open dialog keeps its draft.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the dialog without submitting and discard the draft
    pub fn close(&mut self) {
        self.open = false;
        self.draft = TargetDraft::default();
    }

    /// Replace exactly one field, leaving the others untouched
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.draft.name = value,
            DraftField::Lat => self.draft.lat = value,
            DraftField::Lon => self.draft.lon = value,
        }
    }

    /// Latest field values as typed
    pub fn current_draft(&self) -> &TargetDraft {
        &self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed_and_empty() {
        let controller = TargetDraftController::new();
        assert!(!controller.is_open());
        assert_eq!(controller.current_draft(), &TargetDraft::default());
    }

    #[test]
    fn test_set_field_touches_one_field() {
        let mut controller = TargetDraftController::new();
        controller.open();
        controller.set_field(DraftField::Name, "Groom Lake".to_string());
        controller.set_field(DraftField::Lat, "37.23".to_string());

        let draft = controller.current_draft();
        assert_eq!(draft.name, "Groom Lake");
        assert_eq!(draft.lat, "37.23");
        assert_eq!(draft.lon, "");

        controller.set_field(DraftField::Lat, "37.24".to_string());
        assert_eq!(controller.current_draft().name, "Groom Lake");
        assert_eq!(controller.current_draft().lat, "37.24");
    }

    #[test]
    fn test_edits_apply_in_order() {
        let mut controller = TargetDraftController::new();
        controller.open();
        for value in ["-", "-1", "-11", "-115.8"] {
            controller.set_field(DraftField::Lon, value.to_string());
        }
        assert_eq!(controller.current_draft().lon, "-115.8");
    }

    #[test]
    fn test_close_discards_draft() {
        let mut controller = TargetDraftController::new();
        controller.open();
        controller.set_field(DraftField::Name, "Area 51".to_string());
        controller.set_field(DraftField::Lon, "-115.80".to_string());
        controller.close();
        assert!(!controller.is_open());

        controller.open();
        assert!(controller.is_open());
        assert_eq!(controller.current_draft(), &TargetDraft::default());
    }

    #[test]
    fn test_open_close_without_edits_leaves_nothing_behind() {
        let mut controller = TargetDraftController::new();
        controller.open();
        controller.close();
        controller.open();
        assert_eq!(controller.current_draft(), &TargetDraft::default());
    }

    #[test]
    fn test_reopen_while_open_keeps_draft() {
        let mut controller = TargetDraftController::new();
        controller.open();
        controller.set_field(DraftField::Name, "Delta".to_string());
        controller.open();
        assert_eq!(controller.current_draft().name, "Delta");
    }
}
