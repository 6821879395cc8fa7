//! Slash command definitions, pod modals, and the `/info` embed.

use chrono::{DateTime, Utc};
use serenity::all::{
    ActionRowComponent, CreateActionRow, CreateCommand, CreateEmbed, CreateInputText, CreateModal,
    InputTextStyle, ModalInteraction,
};

use crate::bot::router::{ModalId, ModalKind};
use crate::model::pod::Pod;
use crate::util::time::default_modal_date;

const FIELD_PLAYERS: &str = "players";
const FIELD_FORMAT: &str = "format";
const FIELD_LOCATION: &str = "location";
const FIELD_DATE: &str = "date";
const FIELD_TIME: &str = "time";

/// The slash commands registered on startup.
pub fn command_definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("pod")
            .description("Create a new at home kitchentable pod.")
            .dm_permission(false),
        CreateCommand::new("alert").description("Opt in or out of alerts for new pods."),
        CreateCommand::new("info")
            .description("Show bot version and uptime.")
            .dm_permission(false),
    ]
}

/// The raw text fields of a submitted pod modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodModalFields {
    pub players: String,
    pub format: String,
    pub location: String,
    pub date: String,
    pub time: String,
}

/// Builds the modal shown by `/pod`.
pub fn create_pod_modal(issued_at: DateTime<Utc>) -> CreateModal {
    let custom_id = ModalId::new(ModalKind::Create, issued_at.timestamp()).encode();

    CreateModal::new(custom_id, "Create a new pod").components(field_rows(
        None,
        None,
        None,
        Some(default_modal_date()),
        Some("12:00".to_string()),
    ))
}

/// Builds the edit modal, prefilled with the pod's current fields.
pub fn edit_pod_modal(issued_at: DateTime<Utc>, pod: &Pod) -> CreateModal {
    let custom_id = ModalId::new(ModalKind::Edit, issued_at.timestamp()).encode();

    CreateModal::new(custom_id, "Edit pod").components(field_rows(
        Some(pod.max_players.to_string()),
        Some(pod.format.clone()),
        Some(pod.location.clone()),
        Some(pod.scheduled_date.clone()),
        Some(pod.scheduled_time.clone()),
    ))
}

fn field_rows(
    players: Option<String>,
    format: Option<String>,
    location: Option<String>,
    date: Option<String>,
    time: Option<String>,
) -> Vec<CreateActionRow> {
    let mut players_input =
        CreateInputText::new(InputTextStyle::Short, "Number of players", FIELD_PLAYERS)
            .placeholder("How many players are in the pod?")
            .required(true)
            .min_length(1)
            .max_length(2);
    if let Some(value) = players {
        players_input = players_input.value(value);
    }

    let mut format_input =
        CreateInputText::new(InputTextStyle::Short, "What MTG format?", FIELD_FORMAT)
            .placeholder("What MTG format will be played?")
            .required(true)
            .min_length(1)
            .max_length(255);
    if let Some(value) = format {
        format_input = format_input.value(value);
    }

    let mut location_input =
        CreateInputText::new(InputTextStyle::Short, "Where? -> City + Area", FIELD_LOCATION)
            .placeholder("Example: Tilburg Zuid (do not leave your address here!)")
            .required(true)
            .min_length(1)
            .max_length(255);
    if let Some(value) = location {
        location_input = location_input.value(value);
    }

    let mut date_input = CreateInputText::new(InputTextStyle::Short, "Date", FIELD_DATE)
        .placeholder("When is the pod being held?")
        .required(true)
        .min_length(1)
        .max_length(255);
    if let Some(value) = date {
        date_input = date_input.value(value);
    }

    let mut time_input = CreateInputText::new(InputTextStyle::Short, "Time", FIELD_TIME)
        .placeholder("What time does it start?")
        .required(true)
        .min_length(1)
        .max_length(255);
    if let Some(value) = time {
        time_input = time_input.value(value);
    }

    vec![
        CreateActionRow::InputText(players_input),
        CreateActionRow::InputText(format_input),
        CreateActionRow::InputText(location_input),
        CreateActionRow::InputText(date_input),
        CreateActionRow::InputText(time_input),
    ]
}

/// Extracts the pod fields from a modal submission.
///
/// # Returns
/// - `Some(PodModalFields)` - Every field present and non-blank
/// - `None` - A field was missing or blank; the submission is dropped the way
///   a dismissed modal is
pub fn parse_modal_fields(modal: &ModalInteraction) -> Option<PodModalFields> {
    let mut players = None;
    let mut format = None;
    let mut location = None;
    let mut date = None;
    let mut time = None;

    for row in &modal.data.components {
        for component in &row.components {
            if let ActionRowComponent::InputText(input) = component {
                let value = input.value.as_deref().unwrap_or("").trim().to_string();
                match input.custom_id.as_str() {
                    FIELD_PLAYERS => players = Some(value),
                    FIELD_FORMAT => format = Some(value),
                    FIELD_LOCATION => location = Some(value),
                    FIELD_DATE => date = Some(value),
                    FIELD_TIME => time = Some(value),
                    _ => {}
                }
            }
        }
    }

    let fields = PodModalFields {
        players: players?,
        format: format?,
        location: location?,
        date: date?,
        time: time?,
    };

    if fields.players.is_empty()
        || fields.format.is_empty()
        || fields.location.is_empty()
        || fields.date.is_empty()
        || fields.time.is_empty()
    {
        return None;
    }

    Some(fields)
}

/// Builds the `/info` embed with version and uptime details.
pub fn info_embed(started_at: DateTime<Utc>) -> CreateEmbed {
    let version = env!("CARGO_PKG_VERSION");
    let uptime = format_uptime((Utc::now() - started_at).num_seconds().max(0));

    CreateEmbed::new()
        .title(format!("HomeGame v{}", version))
        .field("Uptime", uptime, true)
        .field("Version", format!("```\n{}\n```", version_block()), false)
}

/// The lines of the `/info` version code block.
fn version_block() -> String {
    format!(
        "HomeGame: {}\nGateway: v{}\nHost: {}",
        env!("CARGO_PKG_VERSION"),
        serenity::constants::GATEWAY_VERSION,
        std::env::consts::OS,
    )
}

/// Formats an uptime in seconds as its two most significant units.
fn format_uptime(total_seconds: i64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    let unit = |value: i64, name: &str| {
        if value == 1 {
            format!("1 {}", name)
        } else {
            format!("{} {}s", value, name)
        }
    };

    if days > 0 {
        format!("{}, {}", unit(days, "day"), unit(hours, "hour"))
    } else if hours > 0 {
        format!("{}, {}", unit(hours, "hour"), unit(minutes, "minute"))
    } else if minutes > 0 {
        format!("{}, {}", unit(minutes, "minute"), unit(seconds, "second"))
    } else {
        unit(seconds, "second")
    }
}
