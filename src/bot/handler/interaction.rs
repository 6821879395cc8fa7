//! Interaction dispatch for slash commands, pod card buttons, and modals.

use chrono::Utc;
use serenity::all::{
    ChannelId, CommandInteraction, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, CreateMessage,
    EditMessage, MessageId, ModalInteraction,
};
use tracing::{info, warn};

use crate::bot::commands;
use crate::bot::handler::Handler;
use crate::bot::router::{ModalId, ModalKind, PodAction};
use crate::data::user::UserRepository;
use crate::error::AppError;
use crate::model::pod::{CreatePodParam, Pod, PodError, UpdatePodParam};
use crate::model::user::UpsertUserParam;
use crate::service::alert::AlertService;
use crate::service::card::{control_rows, CardView, PodCard};
use crate::service::pod::{PodService, PodServiceError};
use crate::util::parse::parse_max_players;

const ALERT_OPTED_IN_REPLY: &str = "You have opted into receiving alerts for new pods!";
const ALERT_OPTED_OUT_REPLY: &str = "You have opted out of receiving alerts for new pods.";
const UNCONFIGURED_GUILD_REPLY: &str = "This server isn't configured for pods yet.";
const GENERIC_FAILURE_REPLY: &str = "Something went wrong. Please try again.";

pub async fn handle_command(
    handler: &Handler,
    ctx: &Context,
    cmd: CommandInteraction,
) -> Result<(), AppError> {
    info!("/{} invoked by {}", cmd.data.name, cmd.user.id);

    match cmd.data.name.as_str() {
        "pod" => handle_pod_command(handler, ctx, cmd).await,
        "alert" => handle_alert_command(handler, ctx, cmd).await,
        "info" => handle_info_command(handler, ctx, cmd).await,
        other => {
            warn!("Received unknown command /{}", other);
            Ok(())
        }
    }
}

/// `/pod` opens the create modal, provided the guild has a pod channel.
async fn handle_pod_command(
    handler: &Handler,
    ctx: &Context,
    cmd: CommandInteraction,
) -> Result<(), AppError> {
    let configured = cmd
        .guild_id
        .and_then(|guild_id| handler.config.guild(guild_id.get()))
        .is_some();
    if !configured {
        cmd.create_response(
            &ctx.http,
            ephemeral_message(UNCONFIGURED_GUILD_REPLY),
        )
        .await?;
        return Ok(());
    }

    cmd.create_response(
        &ctx.http,
        CreateInteractionResponse::Modal(commands::create_pod_modal(Utc::now())),
    )
    .await?;

    Ok(())
}

/// `/alert` flips the caller's DM opt-in flag.
async fn handle_alert_command(
    handler: &Handler,
    ctx: &Context,
    cmd: CommandInteraction,
) -> Result<(), AppError> {
    let display_name = cmd
        .member
        .as_deref()
        .map(|m| m.display_name().to_string())
        .unwrap_or_else(|| cmd.user.name.clone());

    let enabled = UserRepository::new(&handler.db)
        .toggle_alert(UpsertUserParam {
            discord_id: cmd.user.id.get().to_string(),
            display_name,
        })
        .await?;

    let reply = if enabled {
        ALERT_OPTED_IN_REPLY
    } else {
        ALERT_OPTED_OUT_REPLY
    };
    cmd.create_response(&ctx.http, ephemeral_message(reply)).await?;

    Ok(())
}

/// `/info` shows version and uptime.
async fn handle_info_command(
    handler: &Handler,
    ctx: &Context,
    cmd: CommandInteraction,
) -> Result<(), AppError> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().embed(commands::info_embed(handler.started_at)),
    );
    cmd.create_response(&ctx.http, response).await?;

    Ok(())
}

pub async fn handle_component(
    handler: &Handler,
    ctx: &Context,
    component: ComponentInteraction,
) -> Result<(), AppError> {
    let Some(action) = PodAction::parse(&component.data.custom_id) else {
        return Ok(());
    };

    info!(
        "Pod card {:?} pressed by {} on message {}",
        action, component.user.id, component.message.id
    );

    match action {
        PodAction::Join => handle_join(handler, ctx, component).await,
        PodAction::Leave => handle_leave(handler, ctx, component).await,
        PodAction::Edit => handle_edit_button(handler, ctx, component).await,
        PodAction::Delete => handle_delete(handler, ctx, component).await,
    }
}

async fn handle_join(
    handler: &Handler,
    ctx: &Context,
    component: ComponentInteraction,
) -> Result<(), AppError> {
    component
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await?;

    let message_id = component.message.id.get().to_string();
    let display_name = component
        .member
        .as_ref()
        .map(|m| m.display_name().to_string())
        .unwrap_or_else(|| component.user.name.clone());
    let user = UpsertUserParam {
        discord_id: component.user.id.get().to_string(),
        display_name,
    };

    let service = PodService::new(&handler.db);
    match service.join_pod(&message_id, user).await {
        Ok(pod) => {
            rerender_card(
                ctx,
                component.message.channel_id,
                component.message.id,
                &pod,
                CardView::Live,
            )
            .await?;
            followup(ctx, &component, crate::service::pod::JOINED_REPLY).await?;
        }
        Err(e) => {
            handle_card_rejection(handler, ctx, &component, &message_id, e).await?;
        }
    }

    Ok(())
}

async fn handle_leave(
    handler: &Handler,
    ctx: &Context,
    component: ComponentInteraction,
) -> Result<(), AppError> {
    component
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await?;

    let message_id = component.message.id.get().to_string();
    let discord_id = component.user.id.get().to_string();

    let service = PodService::new(&handler.db);
    match service.leave_pod(&message_id, &discord_id).await {
        Ok(pod) => {
            rerender_card(
                ctx,
                component.message.channel_id,
                component.message.id,
                &pod,
                CardView::Live,
            )
            .await?;
            followup(ctx, &component, crate::service::pod::LEFT_REPLY).await?;
        }
        Err(e) => {
            handle_card_rejection(handler, ctx, &component, &message_id, e).await?;
        }
    }

    Ok(())
}

/// The edit button answers with a prefilled modal, so rejections have to be
/// direct responses instead of followups.
async fn handle_edit_button(
    handler: &Handler,
    ctx: &Context,
    component: ComponentInteraction,
) -> Result<(), AppError> {
    let message_id = component.message.id.get().to_string();
    let discord_id = component.user.id.get().to_string();

    let service = PodService::new(&handler.db);
    let Some(pod) = service.get_by_message_id(&message_id).await? else {
        component
            .create_response(&ctx.http, ephemeral_message(&PodError::NotFound.to_string()))
            .await?;
        return Ok(());
    };

    if pod.has_expired(crate::util::time::amsterdam_now()) {
        component
            .create_response(&ctx.http, ephemeral_message(&PodError::Expired.to_string()))
            .await?;
        downgrade_card(ctx, component.message.channel_id, component.message.id, &pod).await;
        return Ok(());
    }

    if !pod.is_host(&discord_id) {
        component
            .create_response(
                &ctx.http,
                ephemeral_message(&PodError::NotHostEdit.to_string()),
            )
            .await?;
        return Ok(());
    }

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Modal(commands::edit_pod_modal(Utc::now(), &pod)),
        )
        .await?;

    Ok(())
}

async fn handle_delete(
    handler: &Handler,
    ctx: &Context,
    component: ComponentInteraction,
) -> Result<(), AppError> {
    component
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await?;

    let message_id = component.message.id.get().to_string();
    let discord_id = component.user.id.get().to_string();

    let service = PodService::new(&handler.db);
    match service.delete_pod(&message_id, &discord_id).await {
        Ok(pod) => {
            if let Err(e) = component.message.delete(&ctx.http).await {
                warn!("Failed to delete message of pod {}: {}", pod.id, e);
            }
            followup(ctx, &component, crate::service::pod::DELETED_REPLY).await?;
        }
        Err(PodServiceError::Rule(rule)) => {
            followup(ctx, &component, &rule.to_string()).await?;
        }
        Err(PodServiceError::Db(e)) => {
            warn!("Delete failed with database error: {}", e);
            followup(ctx, &component, GENERIC_FAILURE_REPLY).await?;
        }
    }

    Ok(())
}

pub async fn handle_modal(
    handler: &Handler,
    ctx: &Context,
    modal: ModalInteraction,
) -> Result<(), AppError> {
    let Some(modal_id) = ModalId::parse(&modal.data.custom_id) else {
        return Ok(());
    };

    // A submission past the window behaves like a dismissed modal.
    if modal_id.is_expired(Utc::now().timestamp()) {
        info!("Dropping pod modal submitted after the timeout window");
        return Ok(());
    }

    let Some(fields) = commands::parse_modal_fields(&modal) else {
        return Ok(());
    };

    match modal_id.kind {
        ModalKind::Create => handle_create_modal(handler, ctx, modal, fields).await,
        ModalKind::Edit => handle_edit_modal(handler, ctx, modal, fields).await,
    }
}

async fn handle_create_modal(
    handler: &Handler,
    ctx: &Context,
    modal: ModalInteraction,
    fields: commands::PodModalFields,
) -> Result<(), AppError> {
    let channel_id = modal
        .guild_id
        .and_then(|guild_id| handler.config.guild(guild_id.get()))
        .map(|guild| guild.channel_id);
    let Some(channel_id) = channel_id else {
        modal
            .create_response(&ctx.http, ephemeral_message(UNCONFIGURED_GUILD_REPLY))
            .await?;
        return Ok(());
    };

    modal
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(
                CreateInteractionResponseMessage::new().ephemeral(true),
            ),
        )
        .await?;

    let Some(max_players) = parse_max_players(&fields.players) else {
        modal_followup(ctx, &modal, &PodError::BelowMinimum.to_string()).await?;
        return Ok(());
    };

    let display_name = modal
        .member
        .as_ref()
        .map(|m| m.display_name().to_string())
        .unwrap_or_else(|| modal.user.name.clone());
    let host = UpsertUserParam {
        discord_id: modal.user.id.get().to_string(),
        display_name,
    };

    let service = PodService::new(&handler.db);
    let mut pod = match service
        .create_pod(
            host,
            CreatePodParam {
                location: fields.location,
                format: fields.format,
                max_players,
                scheduled_date: fields.date,
                scheduled_time: fields.time,
            },
        )
        .await
    {
        Ok(pod) => pod,
        Err(PodServiceError::Rule(rule)) => {
            modal_followup(ctx, &modal, &rule.to_string()).await?;
            return Ok(());
        }
        Err(PodServiceError::Db(e)) => {
            warn!("Pod creation failed with database error: {}", e);
            modal_followup(ctx, &modal, GENERIC_FAILURE_REPLY).await?;
            return Ok(());
        }
    };

    let card = PodCard::from_pod(&pod);
    let message = ChannelId::new(channel_id)
        .send_message(
            &ctx.http,
            CreateMessage::new()
                .embed(card.to_embed())
                .components(control_rows(CardView::Live)),
        )
        .await?;

    service
        .attach_message(pod.id, &message.id.get().to_string())
        .await?;
    pod.message_id = Some(message.id.get().to_string());

    info!("Pod {} created with card message {}", pod.id, message.id);
    modal_followup(ctx, &modal, crate::service::pod::CREATED_REPLY).await?;

    // Fan-out happens after the reply; the pod is already committed.
    if let Err(e) = AlertService::new(&handler.db)
        .notify_new_pod(&ctx.http, &pod)
        .await
    {
        warn!("Failed to dispatch new pod alerts: {}", e);
    }

    Ok(())
}

async fn handle_edit_modal(
    handler: &Handler,
    ctx: &Context,
    modal: ModalInteraction,
    fields: commands::PodModalFields,
) -> Result<(), AppError> {
    // Edit modals are opened from a card button, so the card message rides
    // along with the submission.
    let Some(message) = modal.message.as_deref() else {
        return Ok(());
    };
    let message_id = message.id.get().to_string();
    let discord_id = modal.user.id.get().to_string();

    modal
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await?;

    let Some(max_players) = parse_max_players(&fields.players) else {
        modal_followup(ctx, &modal, &PodError::BelowMinimum.to_string()).await?;
        return Ok(());
    };

    let service = PodService::new(&handler.db);
    match service
        .edit_pod(
            &message_id,
            &discord_id,
            UpdatePodParam {
                location: fields.location,
                format: fields.format,
                max_players,
                scheduled_date: fields.date,
                scheduled_time: fields.time,
            },
        )
        .await
    {
        Ok(pod) => {
            rerender_card(ctx, message.channel_id, message.id, &pod, CardView::Live).await?;
            modal_followup(ctx, &modal, crate::service::pod::UPDATED_REPLY).await?;
        }
        Err(PodServiceError::Rule(rule)) => {
            modal_followup(ctx, &modal, &rule.to_string()).await?;
        }
        Err(PodServiceError::Db(e)) => {
            warn!("Pod edit failed with database error: {}", e);
            modal_followup(ctx, &modal, GENERIC_FAILURE_REPLY).await?;
        }
    }

    Ok(())
}

/// Replies to a rejected join or leave press.
///
/// An expiry rejection additionally downgrades the card to read-only, since
/// the press is the first moment the bot notices the schedule has passed.
async fn handle_card_rejection(
    handler: &Handler,
    ctx: &Context,
    component: &ComponentInteraction,
    message_id: &str,
    error: PodServiceError,
) -> Result<(), AppError> {
    match error {
        PodServiceError::Rule(PodError::Expired) => {
            let service = PodService::new(&handler.db);
            if let Some(pod) = service.get_by_message_id(message_id).await? {
                downgrade_card(ctx, component.message.channel_id, component.message.id, &pod)
                    .await;
            }
            followup(ctx, component, &PodError::Expired.to_string()).await?;
        }
        PodServiceError::Rule(rule) => {
            followup(ctx, component, &rule.to_string()).await?;
        }
        PodServiceError::Db(e) => {
            warn!("Pod mutation failed with database error: {}", e);
            followup(ctx, component, GENERIC_FAILURE_REPLY).await?;
        }
    }

    Ok(())
}

async fn rerender_card(
    ctx: &Context,
    channel_id: ChannelId,
    message_id: MessageId,
    pod: &Pod,
    view: CardView,
) -> Result<(), AppError> {
    let card = PodCard::from_pod(pod);
    channel_id
        .edit_message(
            &ctx.http,
            message_id,
            EditMessage::new()
                .embed(card.to_embed())
                .components(control_rows(view)),
        )
        .await?;

    Ok(())
}

/// Strips the controls from an expired pod's card. Failures are logged; the
/// user still gets their reply.
async fn downgrade_card(ctx: &Context, channel_id: ChannelId, message_id: MessageId, pod: &Pod) {
    if let Err(e) = rerender_card(ctx, channel_id, message_id, pod, CardView::ReadOnly).await {
        warn!("Failed to downgrade card of pod {}: {}", pod.id, e);
    }
}

fn ephemeral_message(content: &str) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

async fn followup(
    ctx: &Context,
    component: &ComponentInteraction,
    content: &str,
) -> Result<(), AppError> {
    component
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(content)
                .ephemeral(true),
        )
        .await?;

    Ok(())
}

async fn modal_followup(
    ctx: &Context,
    modal: &ModalInteraction,
    content: &str,
) -> Result<(), AppError> {
    modal
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(content)
                .ephemeral(true),
        )
        .await?;

    Ok(())
}
