//! Pod card rendering.
//!
//! Builds the Discord embed and button rows for a pod's announcement message.
//! The same card is re-rendered after every roster or field change; buttons get
//! fresh custom id nonces each render so stale interactions cannot match.

use rand::Rng;
use serenity::all::{ButtonStyle, CreateActionRow, CreateButton, CreateEmbed};
use uuid::Uuid;

use crate::bot::router::PodAction;
use crate::model::pod::Pod;

/// Accent colors picked at random per render.
const CARD_COLORS: [u32; 2] = [0x63009C, 0xA0CF05];

/// How a pod card is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardView {
    /// Interactive card with join/leave/edit/delete buttons.
    Live,
    /// Card of an expired pod; no buttons remain.
    ReadOnly,
}

/// The textual content of a pod card, separated from serenity builders so the
/// layout can be asserted in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodCard {
    pub title: String,
    pub max_players: String,
    pub format: String,
    pub location: String,
    pub schedule: String,
    pub roster_heading: String,
    pub roster_body: String,
}

impl PodCard {
    /// Lays out the card content for a pod.
    ///
    /// # Arguments
    /// - `pod` - The pod with its roster; the first participant names the host
    pub fn from_pod(pod: &Pod) -> Self {
        let host_name = pod
            .host()
            .map(|h| h.display_name.as_str())
            .unwrap_or("unknown");

        let roster_body = pod
            .participants
            .iter()
            .map(|p| format!("> {}", p.display_name))
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            title: format!("New kitchen table pod by {}", host_name),
            max_players: pod.max_players.to_string(),
            format: pod.format.clone(),
            location: pod.location.clone(),
            schedule: format!("{} {}", pod.scheduled_date, pod.scheduled_time),
            roster_heading: format!(
                "Current players ({}/{})",
                pod.current_players(),
                pod.max_players
            ),
            roster_body,
        }
    }

    /// Builds the Discord embed for this card with a random accent color.
    pub fn to_embed(&self) -> CreateEmbed {
        let mut rng = rand::rng();
        let color = CARD_COLORS[rng.random_range(0..CARD_COLORS.len())];

        CreateEmbed::new()
            .title(&self.title)
            .color(color)
            .field("Max players", &self.max_players, true)
            .field("MTG Format", &self.format, true)
            .field("City + Area", &self.location, true)
            .field("Date & Time", &self.schedule, true)
            .field(&self.roster_heading, &self.roster_body, false)
    }
}

/// Builds the button rows for a pod card.
///
/// # Arguments
/// - `view` - Live cards get the four control buttons, read-only cards none
///
/// # Returns
/// - `Vec<CreateActionRow>` - Component rows for the message; empty strips any
///   existing buttons when passed to an edit
pub fn control_rows(view: CardView) -> Vec<CreateActionRow> {
    match view {
        CardView::Live => {
            let nonce = Uuid::new_v4();
            vec![CreateActionRow::Buttons(vec![
                CreateButton::new(PodAction::Join.custom_id(nonce))
                    .label("Join")
                    .style(ButtonStyle::Primary),
                CreateButton::new(PodAction::Leave.custom_id(nonce))
                    .label("Leave")
                    .style(ButtonStyle::Primary),
                CreateButton::new(PodAction::Edit.custom_id(nonce))
                    .label("Edit")
                    .style(ButtonStyle::Secondary),
                CreateButton::new(PodAction::Delete.custom_id(nonce))
                    .label("Delete")
                    .style(ButtonStyle::Danger),
            ])]
        }
        CardView::ReadOnly => Vec::new(),
    }
}
