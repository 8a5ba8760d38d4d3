use std::sync::Arc;

use serenity::all::{
    ChannelId, Colour, CreateEmbed, CreateEmbedFooter, CreateMessage, MessageId, Timestamp, UserId,
};
use serenity::http::Http;

use crate::channel::{AnnouncementChannel, GiveawayAnnouncement};
use crate::error::channel::ChannelError;
use serenity::async_trait;

/// Emoji participants react with to enter a giveaway.
pub const ENTRY_REACTION: char = '\u{1F389}'; // 🎉

/// Reaction-user fetches page at most this many users per request.
const REACTION_PAGE_SIZE: u8 = 100;

/// Serenity-backed announcement channel.
///
/// All operations go over Discord's REST API; none require gateway state.
pub struct DiscordChannel {
    http: Arc<Http>,
}

impl DiscordChannel {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AnnouncementChannel for DiscordChannel {
    async fn resolve(&self, channel_id: u64) -> bool {
        self.http.get_channel(ChannelId::new(channel_id)).await.is_ok()
    }

    async fn announce(
        &self,
        channel_id: u64,
        announcement: &GiveawayAnnouncement,
    ) -> Result<u64, ChannelError> {
        let embed = CreateEmbed::new()
            .title("\u{1F389} New Giveaway!")
            .description(format!(
                "**Prize:** {}\n**Winners:** {}\nReact with {} to enter!",
                announcement.prize, announcement.winners, ENTRY_REACTION
            ))
            .colour(Colour::GOLD)
            .footer(CreateEmbedFooter::new(format!(
                "Hosted by <@{}>",
                announcement.host_id
            )))
            .timestamp(Timestamp::from(announcement.ends_at));

        let message = ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        message.react(&self.http, ENTRY_REACTION).await?;

        Ok(message.id.get())
    }

    async fn fetch_entrants(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<Vec<u64>, ChannelError> {
        let message = self
            .http
            .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
            .await?;

        let mut entrants = Vec::new();
        let mut after: Option<UserId> = None;

        loop {
            let users = message
                .reaction_users(
                    &self.http,
                    ENTRY_REACTION,
                    Some(REACTION_PAGE_SIZE),
                    after,
                )
                .await?;

            let page_full = users.len() == REACTION_PAGE_SIZE as usize;
            after = users.last().map(|u| u.id);

            entrants.extend(users.into_iter().filter(|u| !u.bot).map(|u| u.id.get()));

            if !page_full {
                break;
            }
        }

        Ok(entrants)
    }

    async fn post_no_entries(&self, channel_id: u64) -> Result<(), ChannelError> {
        ChannelId::new(channel_id)
            .say(&self.http, "No valid entries.")
            .await?;

        Ok(())
    }

    async fn post_result(
        &self,
        channel_id: u64,
        prize: &str,
        winner_ids: &[u64],
    ) -> Result<(), ChannelError> {
        let mentions = winner_ids
            .iter()
            .map(|id| format!("<@{}>", id))
            .collect::<Vec<_>>()
            .join(", ");

        let embed = CreateEmbed::new()
            .title("\u{1F389} Giveaway Ended")
            .description(format!("Prize: {}\nWinners: {}", prize, mentions))
            .colour(Colour::DARK_GREEN);

        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(())
    }
}
