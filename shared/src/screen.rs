//! Finite states behind every list/detail screen.
//!
//! A screen owns one [`ResourceScreen`]; components render from it and
//! feed user intents and mutation outcomes back in. Transitions that
//! would fire a network call return what to do instead of doing it, so
//! the view layer stays a thin interpreter.

use crate::error::ApiError;

/// Lifecycle of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    Idle,
    /// Request in flight.
    Loading,
    /// Data arrived.
    Loaded(T),
    /// The lookup legitimately found nothing.
    NotFound,
    /// The request failed; the text is for display.
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    /// Fold a detail fetch into a state: `Ok(None)` and 404 are not-found,
    /// other errors are failures.
    pub fn from_lookup(result: Result<Option<T>, ApiError>) -> Self {
        match result {
            Ok(Some(value)) => Self::Loaded(value),
            Ok(None) => Self::NotFound,
            Err(err) if err.is_not_found() => Self::NotFound,
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// Fold a collection fetch into a state. An empty collection is still
    /// `Loaded`.
    pub fn from_fetch(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// `true` while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Which modal, if any, is open on a screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    /// No modal.
    #[default]
    Closed,
    /// Create form.
    Create,
    /// Edit form for the resource with this id.
    Edit(String),
    /// Delete confirmation for the resource with this id.
    Delete(String),
}

/// Lifecycle of a create/update/delete call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationState {
    /// Nothing submitted.
    #[default]
    Idle,
    /// Call in flight.
    Pending,
    /// Last call failed with this message.
    Failed(String),
}

impl MutationState {
    /// `true` while the call is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Text.
    pub message: String,
}

impl Notice {
    /// Success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// What the view must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the delete call for this id.
    Delete(String),
    /// Reload the collection (and detail, if shown).
    Refetch,
    /// Show a toast.
    Notify(Notice),
}

/// Modal and mutation state of one resource screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceScreen {
    modal: ModalState,
    mutation: MutationState,
}

impl ResourceScreen {
    /// Closed modal, idle mutation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current modal.
    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Current mutation state.
    pub fn mutation(&self) -> &MutationState {
        &self.mutation
    }

    /// Id awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&str> {
        match &self.modal {
            ModalState::Delete(id) => Some(id),
            _ => None,
        }
    }

    /// Row the open edit or delete modal is about.
    pub fn target(&self) -> Option<&str> {
        match &self.modal {
            ModalState::Edit(id) | ModalState::Delete(id) => Some(id),
            ModalState::Closed | ModalState::Create => None,
        }
    }

    /// Open the create form. Ignored while a call is in flight.
    pub fn open_create(&mut self) {
        if !self.mutation.is_pending() {
            self.modal = ModalState::Create;
            self.mutation = MutationState::Idle;
        }
    }

    /// Open the edit form for `id`. Ignored while a call is in flight.
    pub fn open_edit(&mut self, id: impl Into<String>) {
        if !self.mutation.is_pending() {
            self.modal = ModalState::Edit(id.into());
            self.mutation = MutationState::Idle;
        }
    }

    /// Ask for confirmation before deleting `id`. No call is made yet.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        if !self.mutation.is_pending() {
            self.modal = ModalState::Delete(id.into());
            self.mutation = MutationState::Idle;
        }
    }

    /// Dismiss the current modal without any call.
    pub fn cancel(&mut self) {
        self.modal = ModalState::Closed;
        if !self.mutation.is_pending() {
            self.mutation = MutationState::Idle;
        }
    }

    /// The user confirmed the delete dialog. Returns the delete effect
    /// only when a delete is actually pending and no call is in flight.
    pub fn confirm_delete(&mut self) -> Option<Effect> {
        if self.mutation.is_pending() {
            return None;
        }
        let id = self.pending_delete()?.to_string();
        self.mutation = MutationState::Pending;
        Some(Effect::Delete(id))
    }

    /// A create/edit form passed validation and its call started.
    pub fn submit_started(&mut self) {
        self.mutation = MutationState::Pending;
    }

    /// The in-flight call succeeded: close the modal, which also drops its
    /// target row, announce, refetch.
    pub fn mutation_succeeded(&mut self, message: impl Into<String>) -> Vec<Effect> {
        self.modal = ModalState::Closed;
        self.mutation = MutationState::Idle;
        vec![Effect::Notify(Notice::success(message)), Effect::Refetch]
    }

    /// The in-flight call failed: keep the modal open for another try.
    pub fn mutation_failed(&mut self, error: &ApiError, fallback: &str) -> Vec<Effect> {
        let message = error.user_message(fallback);
        tracing::warn!(%error, "resource mutation failed");
        self.mutation = MutationState::Failed(message.clone());
        vec![Effect::Notify(Notice::error(message))]
    }
}

/// Show-all / show-less state for a capped association preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociationPreview {
    cap: usize,
    expanded: bool,
}

/// Items shown before "view all" on detail panels.
pub const PREVIEW_CAP: usize = 5;

/// Label of the preview toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewToggle {
    /// Collapsed; expands to show all of this many.
    ViewAll(usize),
    /// Expanded; collapses back.
    ShowLess,
}

impl Default for AssociationPreview {
    fn default() -> Self {
        Self::new(PREVIEW_CAP)
    }
}

impl AssociationPreview {
    /// Collapsed preview showing at most `cap` items.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            expanded: false,
        }
    }

    /// Whether all items are shown.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between collapsed and expanded.
    pub fn toggle(self) -> Self {
        Self {
            expanded: !self.expanded,
            ..self
        }
    }

    /// Items to render.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.expanded {
            items
        } else {
            &items[..items.len().min(self.cap)]
        }
    }

    /// Toggle to render, or `None` when everything already fits.
    pub fn toggle_label(&self, total: usize) -> Option<PreviewToggle> {
        if total <= self.cap {
            None
        } else if self.expanded {
            Some(PreviewToggle::ShowLess)
        } else {
            Some(PreviewToggle::ViewAll(total))
        }
    }
}

/// Shorten long key ids to `first10...last6`; ids up to 20 chars are kept.
pub fn abbreviate_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 20 {
        return id.to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_distinguishes_not_found_from_failure() {
        assert_eq!(LoadState::<u8>::from_lookup(Ok(None)), LoadState::NotFound);
        assert_eq!(
            LoadState::<u8>::from_lookup(Err(ApiError::from_response(404, ""))),
            LoadState::NotFound
        );
        assert!(matches!(
            LoadState::<u8>::from_lookup(Err(ApiError::Network("down".into()))),
            LoadState::Failed(_)
        ));
        assert_eq!(LoadState::from_lookup(Ok(Some(3))), LoadState::Loaded(3));
    }

    #[test]
    fn empty_collection_is_loaded_not_error() {
        let state = LoadState::from_fetch(Ok(Vec::<u8>::new()));
        assert_eq!(state.loaded().map(Vec::len), Some(0));
    }

    #[test]
    fn cancel_never_produces_delete() {
        let mut screen = ResourceScreen::new();
        screen.request_delete("ag_1");
        assert_eq!(screen.pending_delete(), Some("ag_1"));
        screen.cancel();
        assert_eq!(screen.modal(), &ModalState::Closed);
        assert_eq!(screen.confirm_delete(), None);
    }

    #[test]
    fn confirm_fires_once_and_success_clears_target() {
        let mut screen = ResourceScreen::new();
        screen.request_delete("ag_1");
        assert_eq!(screen.target(), Some("ag_1"));
        assert_eq!(screen.confirm_delete(), Some(Effect::Delete("ag_1".into())));
        assert!(screen.mutation().is_pending());
        assert_eq!(screen.confirm_delete(), None, "double confirm while pending");

        let effects = screen.mutation_succeeded("Deleted");
        assert_eq!(effects, vec![Effect::Notify(Notice::success("Deleted")), Effect::Refetch]);
        assert_eq!(screen.target(), None);
        assert_eq!(screen.modal(), &ModalState::Closed);
        assert_eq!(screen.confirm_delete(), None, "deleted row cannot be confirmed again");
    }

    #[test]
    fn target_follows_the_open_modal() {
        let mut screen = ResourceScreen::new();
        assert_eq!(screen.target(), None);
        screen.open_create();
        assert_eq!(screen.target(), None);
        screen.open_edit("ag_2");
        assert_eq!(screen.target(), Some("ag_2"));
        screen.cancel();
        assert_eq!(screen.target(), None);
    }

    #[test]
    fn failure_keeps_modal_open_with_backend_message() {
        let mut screen = ResourceScreen::new();
        screen.open_create();
        screen.submit_started();
        let err = ApiError::from_response(400, r#"{"detail":{"error":"duplicate name"}}"#);
        let effects = screen.mutation_failed(&err, "Failed");
        assert_eq!(effects, vec![Effect::Notify(Notice::error("duplicate name"))]);
        assert_eq!(screen.modal(), &ModalState::Create);
        assert_eq!(screen.mutation(), &MutationState::Failed("duplicate name".into()));
    }

    #[test]
    fn modals_do_not_switch_while_pending() {
        let mut screen = ResourceScreen::new();
        screen.open_edit("ag_2");
        screen.submit_started();
        screen.request_delete("ag_3");
        assert_eq!(screen.modal(), &ModalState::Edit("ag_2".into()));
    }

    #[test]
    fn preview_of_twelve_keys() {
        let keys: Vec<String> = (1..=12).map(|i| format!("sk-{i}")).collect();
        let preview = AssociationPreview::default();
        assert_eq!(preview.visible(&keys).len(), 5);
        assert_eq!(preview.toggle_label(keys.len()), Some(PreviewToggle::ViewAll(12)));

        let preview = preview.toggle();
        assert_eq!(preview.visible(&keys).len(), 12);
        assert_eq!(preview.toggle_label(keys.len()), Some(PreviewToggle::ShowLess));
    }

    #[test]
    fn preview_without_overflow_has_no_toggle() {
        let teams = vec!["t1".to_string(), "t2".to_string()];
        let preview = AssociationPreview::default();
        assert_eq!(preview.visible(&teams).len(), 2);
        assert_eq!(preview.toggle_label(teams.len()), None);
        assert_eq!(preview.toggle_label(5), None);
    }

    #[test]
    fn abbreviates_long_ids_only() {
        assert_eq!(abbreviate_id("sk-short"), "sk-short");
        assert_eq!(abbreviate_id("sk-1234567890abcdefghijkl"), "sk-1234567...ghijkl");
    }
}
