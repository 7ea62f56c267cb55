// src/controller.rs
//! The exporter's single state container.
//!
//! Every front-end action goes through [`ExporterController`]: it owns the
//! node source, the sinks, the collected list and the notice board. Nothing
//! else holds mutable exporter state.

use crate::collect::collect_entries;
use crate::error::AppError;
use crate::notice::NoticeBoard;
use crate::output::{deliver, Delivery, Sink, SinkProvider};
use crate::selection::{SelectionCount, SelectionStore};
use crate::serialize::render;
use crate::source::NodeSource;
use crate::types::{Entry, ExportFormat, PublishedFileId};

/// Where a one-shot run sends the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Pipe mode.
    Stdout,
    /// `steam_mods.<format>`, or the `--output` path.
    File,
    Clipboard,
}

/// What an export, copy or pipe action ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Delivered { items: usize, delivery: Delivery },
    /// Zero entries were selected; nothing was rendered.
    NothingSelected { action: &'static str },
    /// The sink refused the payload; a notice says so.
    Failed,
}

impl ActionOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    /// The error a one-shot run exits with when this action had nothing to do.
    pub fn nothing_selected_error(&self) -> Option<AppError> {
        match self {
            Self::NothingSelected { action } => {
                Some(AppError::NothingSelected { action: *action })
            }
            _ => None,
        }
    }
}

pub struct ExporterController<S, P> {
    source: S,
    sinks: P,
    store: Option<SelectionStore>,
    list_visible: bool,
    format: ExportFormat,
    filter: String,
    notices: NoticeBoard,
}

impl<S: NodeSource, P: SinkProvider> ExporterController<S, P> {
    pub fn new(source: S, sinks: P, format: ExportFormat) -> Self {
        Self {
            source,
            sinks,
            store: None,
            list_visible: false,
            format,
            filter: String::new(),
            notices: NoticeBoard::default(),
        }
    }

    /// Best-effort early scan. Finding nothing is silent and leaves any
    /// existing list in place.
    pub fn prefetch(&mut self) -> bool {
        match collect_entries(&self.source) {
            Some(entries) => {
                log::debug!("Prefetched {} entries", entries.len());
                self.store = Some(SelectionStore::new(entries));
                true
            }
            None => {
                log::debug!("Prefetch found no subscription nodes");
                false
            }
        }
    }

    /// Full re-scan. Replaces the list and resets every entry to selected.
    ///
    /// Returns the number of entries found, or `None` (with a notice) when the
    /// page has no subscription nodes at all; the list is then left undefined.
    pub fn rescan(&mut self) -> Option<usize> {
        match collect_entries(&self.source) {
            Some(entries) => {
                let found = entries.len();
                self.store = Some(SelectionStore::new(entries));
                Some(found)
            }
            None => {
                self.store = None;
                self.notices.warn(AppError::NoSubscriptions.to_string());
                None
            }
        }
    }

    /// Shows or hides the checklist. The first opening collects the list if
    /// it is missing or empty, and aborts when nothing is found.
    pub fn toggle_list(&mut self) -> bool {
        let needs_scan = self.store.as_ref().map_or(true, SelectionStore::is_empty);
        if !self.list_visible && needs_scan && self.rescan().is_none() {
            return false;
        }
        self.list_visible = !self.list_visible;
        self.list_visible
    }

    pub fn is_list_visible(&self) -> bool {
        self.list_visible
    }

    pub fn store(&self) -> Option<&SelectionStore> {
        self.store.as_ref()
    }

    fn store_mut(&mut self) -> Result<&mut SelectionStore, AppError> {
        self.store.as_mut().ok_or(AppError::NotCollected)
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) -> Result<(), AppError> {
        self.store_mut()?.set_selected(index, selected)?;
        Ok(())
    }

    pub fn toggle(&mut self, index: usize) -> Result<bool, AppError> {
        Ok(self.store_mut()?.toggle(index)?)
    }

    pub fn select_all(&mut self, selected: bool) {
        if let Some(store) = self.store.as_mut() {
            store.select_all(selected);
        }
    }

    /// Applies `--select` / `--deselect` style ID lists. Returns the IDs that
    /// are not on the page.
    pub fn set_selected_by_id(
        &mut self,
        ids: &[PublishedFileId],
        selected: bool,
    ) -> Result<Vec<PublishedFileId>, AppError> {
        let unknown = self.store_mut()?.set_selected_by_id(ids, selected);
        for id in &unknown {
            log::warn!("ID {} is not in the subscription list", id);
        }
        Ok(unknown)
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn set_format(&mut self, format: ExportFormat) {
        self.format = format;
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
    }

    /// Entries shown under the current filter, with store indexes.
    pub fn visible_entries(&self) -> Vec<(usize, &Entry)> {
        self.store
            .as_ref()
            .map(|s| s.filter(&self.filter))
            .unwrap_or_default()
    }

    pub fn count(&self) -> Option<SelectionCount> {
        self.store.as_ref().map(SelectionStore::count)
    }

    /// The `3/5 mods` badge, once a list exists.
    pub fn badge(&self) -> Option<String> {
        self.count().map(|c| c.to_string())
    }

    pub fn selected_entries(&self) -> Vec<&Entry> {
        self.store
            .as_ref()
            .map(SelectionStore::selected)
            .unwrap_or_default()
    }

    /// Renders the selection in the current format, or `None` when nothing
    /// is selected.
    pub fn render_selection(&self) -> Option<(usize, String)> {
        let selected = self.selected_entries();
        if selected.is_empty() {
            return None;
        }
        Some((selected.len(), render(self.format, selected)))
    }

    /// Saves the selection under the format's default file name.
    pub fn export(&mut self) -> Result<ActionOutcome, AppError> {
        let Some((items, content)) = self.render_selection() else {
            return Ok(self.nothing_selected("export"));
        };

        let sink = self.sinks.download(&self.format.default_filename());
        let delivery = deliver(sink.as_ref(), &content)?;
        self.notices.info(format!(
            "Exported {} selected items as {}",
            items,
            self.format.label()
        ));
        Ok(ActionOutcome::Delivered { items, delivery })
    }

    /// Copies the selection. Failures end up as a notice, never as an error.
    pub fn copy(&mut self) -> ActionOutcome {
        let Some((items, content)) = self.render_selection() else {
            return self.nothing_selected("copy");
        };

        let sink = self.sinks.clipboard();
        match deliver(sink.as_ref(), &content) {
            Ok(delivery) => {
                self.notices
                    .info(format!("Copied {} selected items to clipboard", items));
                ActionOutcome::Delivered { items, delivery }
            }
            Err(e) => {
                log::error!("Failed to copy: {}", e);
                self.notices.error("Failed to copy to clipboard");
                ActionOutcome::Failed
            }
        }
    }

    /// Pipe mode: writes the selection to stdout without a notice.
    pub fn emit(&mut self) -> Result<ActionOutcome, AppError> {
        let Some((items, content)) = self.render_selection() else {
            return Ok(self.nothing_selected("export"));
        };

        let sink: Box<dyn Sink> = self.sinks.stdout();
        let delivery = deliver(sink.as_ref(), &content)?;
        Ok(ActionOutcome::Delivered { items, delivery })
    }

    /// Runs the action behind one destination. Clipboard failures stay
    /// outcomes; file and stdout failures are errors.
    pub fn deliver_to(&mut self, destination: Destination) -> Result<ActionOutcome, AppError> {
        match destination {
            Destination::Stdout => self.emit(),
            Destination::File => self.export(),
            Destination::Clipboard => Ok(self.copy()),
        }
    }

    fn nothing_selected(&mut self, action: &'static str) -> ActionOutcome {
        self.notices
            .warn(AppError::NothingSelected { action }.to_string());
        ActionOutcome::NothingSelected { action }
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::CandidateNode;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakePage(Vec<CandidateNode>);

    impl NodeSource for FakePage {
        fn query(&self, selector: &str) -> Vec<CandidateNode> {
            if selector == ".workshopItem" {
                self.0.clone()
            } else {
                Vec::new()
            }
        }
    }

    #[derive(Clone, Default)]
    struct Recorder {
        writes: Rc<RefCell<Vec<(String, String)>>>,
        refuse: bool,
    }

    struct RecordingSink {
        name: String,
        recorder: Recorder,
    }

    impl Sink for RecordingSink {
        fn describe(&self) -> String {
            self.name.clone()
        }

        fn write(&self, content: &str) -> Result<usize, AppError> {
            if self.recorder.refuse {
                return Err(AppError::Clipboard("denied".into()));
            }
            self.recorder
                .writes
                .borrow_mut()
                .push((self.name.clone(), content.to_string()));
            Ok(content.len())
        }
    }

    impl SinkProvider for Recorder {
        fn download(&self, filename: &str) -> Box<dyn Sink> {
            Box::new(RecordingSink {
                name: filename.to_string(),
                recorder: self.clone(),
            })
        }

        fn clipboard(&self) -> Box<dyn Sink> {
            Box::new(RecordingSink {
                name: "clipboard".into(),
                recorder: self.clone(),
            })
        }

        fn stdout(&self) -> Box<dyn Sink> {
            Box::new(RecordingSink {
                name: "stdout".into(),
                recorder: self.clone(),
            })
        }
    }

    fn page() -> FakePage {
        FakePage(vec![
            CandidateNode::new(Some("Foo"), &["https://x.test/filedetails/?id=123"]),
            CandidateNode::new(Some("Bar"), &["https://x.test/456/"]),
        ])
    }

    #[test]
    fn test_export_writes_default_filename() {
        let recorder = Recorder::default();
        let mut controller = ExporterController::new(page(), recorder.clone(), ExportFormat::Csv);
        controller.rescan();

        let outcome = controller.export().unwrap();
        assert!(outcome.is_delivered());

        let writes = recorder.writes.borrow();
        assert_eq!(writes[0].0, "steam_mods.csv");
        assert!(writes[0].1.contains("\"Bar\",456.sbm,456,Steam"));
        assert_eq!(
            controller.notices().latest().unwrap().message,
            "Exported 2 selected items as CSV"
        );
    }

    #[test]
    fn test_nothing_selected_aborts() {
        let recorder = Recorder::default();
        let mut controller = ExporterController::new(page(), recorder.clone(), ExportFormat::Xml);
        controller.rescan();
        controller.select_all(false);

        assert_eq!(
            controller.export().unwrap(),
            ActionOutcome::NothingSelected { action: "export" }
        );
        assert_eq!(
            controller.copy(),
            ActionOutcome::NothingSelected { action: "copy" }
        );
        assert!(recorder.writes.borrow().is_empty());
        assert_eq!(
            controller.notices().latest().unwrap().message,
            "No items selected to copy"
        );
    }

    #[test]
    fn test_copy_failure_becomes_notice() {
        let recorder = Recorder {
            refuse: true,
            ..Recorder::default()
        };
        let mut controller = ExporterController::new(page(), recorder, ExportFormat::Xml);
        controller.rescan();

        assert_eq!(controller.copy(), ActionOutcome::Failed);
        assert_eq!(
            controller.notices().latest().unwrap().message,
            "Failed to copy to clipboard"
        );
    }

    #[test]
    fn test_rescan_resets_selection() {
        let mut controller =
            ExporterController::new(page(), Recorder::default(), ExportFormat::Xml);
        controller.rescan();
        controller.set_selected(0, false).unwrap();
        assert_eq!(controller.badge().as_deref(), Some("1/2 mods"));

        controller.rescan();
        assert_eq!(controller.badge().as_deref(), Some("2/2 mods"));
    }

    #[test]
    fn test_empty_page() {
        let mut controller =
            ExporterController::new(FakePage(Vec::new()), Recorder::default(), ExportFormat::Xml);

        assert!(!controller.prefetch());
        assert!(controller.notices().latest().is_none());

        assert!(!controller.toggle_list());
        assert!(!controller.is_list_visible());
        assert_eq!(
            controller.notices().latest().unwrap().message,
            "No subscribed items found. Make sure you are on the subscriptions page."
        );
        assert!(matches!(
            controller.set_selected(0, true),
            Err(AppError::NotCollected)
        ));
    }

    #[test]
    fn test_toggle_list_flips_visibility() {
        let mut controller =
            ExporterController::new(page(), Recorder::default(), ExportFormat::Xml);
        assert!(controller.toggle_list());
        controller.set_selected(1, false).unwrap();
        assert!(!controller.toggle_list());
        assert!(controller.toggle_list());
        // Reopening does not rescan
        assert_eq!(controller.badge().as_deref(), Some("1/2 mods"));
    }

    #[test]
    fn test_emit_writes_selection_to_stdout() {
        let recorder = Recorder::default();
        let mut controller = ExporterController::new(page(), recorder.clone(), ExportFormat::Xml);
        controller.rescan();
        controller.set_selected(0, false).unwrap();

        let outcome = controller.emit().unwrap();
        assert!(matches!(outcome, ActionOutcome::Delivered { items: 1, .. }));

        let writes = recorder.writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, "stdout");
        assert!(writes[0].1.contains("<PublishedFileId>456</PublishedFileId>"));
        assert!(!writes[0].1.contains("<PublishedFileId>123</PublishedFileId>"));
        // Pipe mode posts no success notice
        assert!(controller.notices().latest().is_none());
    }

    #[test]
    fn test_emit_with_nothing_selected() {
        let recorder = Recorder::default();
        let mut controller = ExporterController::new(page(), recorder.clone(), ExportFormat::Csv);
        controller.rescan();
        controller.select_all(false);

        let outcome = controller.emit().unwrap();
        assert_eq!(outcome, ActionOutcome::NothingSelected { action: "export" });
        assert!(recorder.writes.borrow().is_empty());
    }

    #[test]
    fn test_deliver_to_each_destination() {
        let recorder = Recorder::default();
        let mut controller = ExporterController::new(page(), recorder.clone(), ExportFormat::Csv);
        controller.rescan();

        for destination in [Destination::Stdout, Destination::File, Destination::Clipboard] {
            assert!(controller.deliver_to(destination).unwrap().is_delivered());
        }

        let targets: Vec<String> = recorder
            .writes
            .borrow()
            .iter()
            .map(|(target, _)| target.clone())
            .collect();
        assert_eq!(targets, vec!["stdout", "steam_mods.csv", "clipboard"]);
    }

    #[test]
    fn test_exit_error_names_the_empty_action() {
        let mut controller =
            ExporterController::new(page(), Recorder::default(), ExportFormat::Xml);
        controller.rescan();
        controller.select_all(false);

        let outcome = controller.deliver_to(Destination::Clipboard).unwrap();
        let err = outcome.nothing_selected_error().expect("empty selection");
        assert_eq!(err.to_string(), "No items selected to copy");

        let outcome = controller.deliver_to(Destination::File).unwrap();
        assert_eq!(
            outcome.nothing_selected_error().map(|e| e.to_string()).as_deref(),
            Some("No items selected to export")
        );

        controller.select_all(true);
        let delivered = controller.deliver_to(Destination::Clipboard).unwrap();
        assert!(delivered.nothing_selected_error().is_none());
    }
}
