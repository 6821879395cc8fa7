//! Component and modal custom id routing.
//!
//! Buttons carry `pod:<action>:<nonce>` custom ids. The nonce is regenerated on
//! every render and never stored; interactions are resolved through the message
//! they arrived on, so a button press on a card that still exists always finds
//! its pod.
//!
//! Modals carry `pod-modal:<kind>:<issued-at>` custom ids. Submissions older
//! than five minutes are dropped without a reply.

use uuid::Uuid;

/// Seconds a modal stays valid after being opened.
const MODAL_TTL_SECONDS: i64 = 5 * 60;

/// A pod card button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodAction {
    Join,
    Leave,
    Edit,
    Delete,
}

impl PodAction {
    /// Builds the custom id for this action with the given render nonce.
    pub fn custom_id(self, nonce: Uuid) -> String {
        format!("pod:{}:{}", self.as_str(), nonce)
    }

    fn as_str(self) -> &'static str {
        match self {
            PodAction::Join => "join",
            PodAction::Leave => "leave",
            PodAction::Edit => "edit",
            PodAction::Delete => "delete",
        }
    }

    /// Parses a component custom id back into an action.
    ///
    /// # Returns
    /// - `Some(PodAction)` - A pod card button
    /// - `None` - Some other component
    pub fn parse(custom_id: &str) -> Option<Self> {
        let mut parts = custom_id.splitn(3, ':');
        if parts.next() != Some("pod") {
            return None;
        }
        let action = match parts.next()? {
            "join" => PodAction::Join,
            "leave" => PodAction::Leave,
            "edit" => PodAction::Edit,
            "delete" => PodAction::Delete,
            _ => return None,
        };
        parts.next()?;
        Some(action)
    }
}

/// What a submitted pod modal was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Create,
    Edit,
}

/// A parsed pod modal custom id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalId {
    pub kind: ModalKind,
    pub issued_at: i64,
}

impl ModalId {
    pub fn new(kind: ModalKind, issued_at: i64) -> Self {
        Self { kind, issued_at }
    }

    /// Encodes the modal custom id.
    pub fn encode(&self) -> String {
        let kind = match self.kind {
            ModalKind::Create => "create",
            ModalKind::Edit => "edit",
        };
        format!("pod-modal:{}:{}", kind, self.issued_at)
    }

    /// Parses a modal custom id.
    ///
    /// # Returns
    /// - `Some(ModalId)` - A pod modal submission
    /// - `None` - Some other modal
    pub fn parse(custom_id: &str) -> Option<Self> {
        let mut parts = custom_id.splitn(3, ':');
        if parts.next() != Some("pod-modal") {
            return None;
        }
        let kind = match parts.next()? {
            "create" => ModalKind::Create,
            "edit" => ModalKind::Edit,
            _ => return None,
        };
        let issued_at = parts.next()?.parse::<i64>().ok()?;
        Some(Self { kind, issued_at })
    }

    /// Whether the modal was open longer than the five minute window.
    pub fn is_expired(&self, now_ts: i64) -> bool {
        now_ts - self.issued_at > MODAL_TTL_SECONDS
    }
}
