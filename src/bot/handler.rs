use serenity::all::{ActivityData, Context, EventHandler, Message, Ready};
use serenity::async_trait;

use crate::error::giveaway::GiveawayError;
use crate::service::giveaway::{GiveawayService, StartGiveawayParams};

/// Discord bot event handler.
pub struct Handler {
    service: GiveawayService,
    command_prefix: String,
    staff_role_ids: Vec<u64>,
}

impl Handler {
    pub fn new(service: GiveawayService, command_prefix: String, staff_role_ids: Vec<u64>) -> Self {
        Self {
            service,
            command_prefix,
            staff_role_ids,
        }
    }

    /// Returns whether the message author may start giveaways: one of the
    /// configured staff roles, or a role carrying Administrator.
    ///
    /// Gateway message events carry the member's role ids but not computed
    /// permissions, so the Administrator check resolves the guild's roles
    /// over the REST API. The configured-role check runs first and needs no
    /// fetch.
    async fn is_staff(&self, ctx: &Context, msg: &Message) -> bool {
        let Some(member) = msg.member.as_ref() else {
            return false;
        };
        let member_roles: Vec<u64> = member.roles.iter().map(|role| role.get()).collect();

        if member_roles
            .iter()
            .any(|role| self.staff_role_ids.contains(role))
        {
            return true;
        }

        let Some(guild_id) = msg.guild_id else {
            return false;
        };
        let admin_roles: Vec<u64> = match ctx.http.get_guild_roles(guild_id).await {
            Ok(roles) => roles
                .iter()
                .filter(|role| role.permissions.administrator())
                .map(|role| role.id.get())
                .collect(),
            Err(e) => {
                tracing::error!("Failed to fetch roles for guild {}: {}", guild_id, e);
                return false;
            }
        };

        member_is_staff(&self.staff_role_ids, &member_roles, &admin_roles)
    }

    async fn gstart(&self, ctx: &Context, msg: &Message, args: &[&str]) {
        if !self.is_staff(ctx, msg).await {
            reply(ctx, msg, "\u{274C} Only staff can start giveaways.").await;
            return;
        }

        let Some(parsed) = parse_gstart(args) else {
            reply(ctx, msg, "Usage: gstart <duration> <winners> <prize>").await;
            return;
        };

        let result = self
            .service
            .start(StartGiveawayParams {
                origin_channel_id: msg.channel_id.get(),
                duration_spec: parsed.duration_spec,
                winners: parsed.winners,
                prize: parsed.prize,
                host_id: msg.author.id.get(),
            })
            .await;

        match result {
            Ok(_) => reply(ctx, msg, "\u{1F389} Giveaway started!").await,
            Err(GiveawayError::InvalidDuration(_)) => {
                reply(ctx, msg, "Invalid duration format.").await
            }
            Err(GiveawayError::ChannelUnavailable(_)) => {
                reply(ctx, msg, "Giveaway channel not found.").await
            }
            Err(e) => {
                tracing::error!("Failed to start giveaway: {}", e);
                reply(ctx, msg, "Failed to start giveaway.").await
            }
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);

        ctx.set_activity(Some(ActivityData::watching("for giveaways")));
    }

    /// Called for every message the bot can see; dispatches prefix commands
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot || msg.guild_id.is_none() {
            return;
        }

        let Some(rest) = msg.content.strip_prefix(&self.command_prefix) else {
            return;
        };

        let parts: Vec<&str> = rest.split_whitespace().collect();
        match parts.split_first() {
            Some((&"gstart", args)) => self.gstart(&ctx, &msg, args).await,
            _ => {}
        }
    }
}

async fn reply(ctx: &Context, msg: &Message, content: &str) {
    if let Err(e) = msg.reply(&ctx.http, content).await {
        tracing::error!("Failed to reply to command: {}", e);
    }
}

/// Decides staff access from resolved role sets.
///
/// A member qualifies by holding a configured staff role or any role that
/// carries the Administrator permission.
pub(crate) fn member_is_staff(
    staff_role_ids: &[u64],
    member_roles: &[u64],
    admin_roles: &[u64],
) -> bool {
    member_roles
        .iter()
        .any(|role| staff_role_ids.contains(role) || admin_roles.contains(role))
}

/// Parsed arguments of the gstart command.
#[derive(Debug, PartialEq)]
pub(crate) struct GstartArgs {
    pub duration_spec: String,
    pub winners: u32,
    pub prize: String,
}

/// Parses `<duration> <winners> <prize...>`; `None` means show usage.
///
/// Duration validation itself is the service's job; this only checks shape.
pub(crate) fn parse_gstart(args: &[&str]) -> Option<GstartArgs> {
    let (duration_spec, rest) = args.split_first()?;
    let (winners_raw, prize_parts) = rest.split_first()?;

    let winners = winners_raw.parse().ok()?;
    if prize_parts.is_empty() {
        return None;
    }

    Some(GstartArgs {
        duration_spec: duration_spec.to_string(),
        winners,
        prize: prize_parts.join(" "),
    })
}
