use erangel_common::BOT_ID;
use tracing::debug;
use twilight_http::request::channel::reaction::RequestReactionType;
use twilight_model::channel::message::ReactionType;
use twilight_model::gateway::payload::incoming::ReactionAdd;

use crate::command::pubg::matches::{render_view, MatchesView};
use crate::erangel::ThreadSafeErangel;

/// Handle a [ReactionAdd] event received from the Discord gateway.
///
/// Reactions only matter on replies with a live interactive session, and only
/// from the user who invoked the command; everything else is ignored. A
/// recognized reaction transitions the session's view state machine and
/// re-renders the reply from the stored season snapshot.
pub async fn handle(erangel: ThreadSafeErangel, ReactionAdd(reaction): ReactionAdd) {
    if reaction.user_id.get() == BOT_ID {
        return;
    }

    let Some(session) = erangel.replies.get_matches_session(reaction.message_id.get()) else {
        return;
    };

    if session.invoker != reaction.user_id.get() {
        return;
    }

    let ReactionType::Unicode { name } = &reaction.emoji else {
        return;
    };

    let Some(view) = MatchesView::from_reaction(name) else {
        return;
    };

    // remove the user's reaction so the affordance can be pressed again;
    // missing permissions just degrade the experience
    let request = RequestReactionType::Unicode { name };
    if let Err(error) = erangel
        .http_client
        .delete_reaction(reaction.channel_id, reaction.message_id, &request, reaction.user_id)
        .await
    {
        debug!("failed to remove reaction: {error}");
    }

    let embed = [render_view(&erangel, &session, view).await];

    let update = match erangel
        .http_client
        .update_message(reaction.channel_id, reaction.message_id)
        .embeds(Some(&embed))
    {
        Ok(update) => update,
        Err(error) => {
            debug!("re-rendered embed failed validation: {error}");
            return;
        },
    };

    if let Err(error) = update.await {
        debug!("failed to re-render matches view: {error}");
    }
}
