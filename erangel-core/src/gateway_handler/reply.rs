use twilight_model::channel::message::AllowedMentions;
use twilight_model::id::Id;

use crate::command::messagebuilder::MessageBuilder;
use crate::command::CommandCtxt;
use crate::replies::ReplyInUse;

/// Trims a `String` in-place such that it fits in Discord's 2000 character message limit.
fn trim_content_fits(content: &mut String) {
    if let Some((truncated_byte_index, _)) = content.char_indices().nth(2000) {
        content.truncate(truncated_byte_index);
    }
}

async fn edit(ctxt: &CommandCtxt<'_>, mut builder: MessageBuilder, reply: ReplyInUse) -> anyhow::Result<()> {
    let allowed_mentions = AllowedMentions::default();

    let mut message = ctxt
        .data
        .erangel
        .http_client
        .update_message(Id::new(ctxt.data.channel_id), Id::new(reply.message_id))
        .allowed_mentions(Some(&allowed_mentions));

    // a missing content clears whatever placeholder text the reply carried
    match &mut builder.content {
        Some(content) => {
            trim_content_fits(content);
            message = message.content(Some(content))?;
        },
        None => {
            message = message.content(None)?;
        },
    }

    let embeds;
    if let Some(embed) = builder.embed {
        embeds = [embed];
        message = message.embeds(Some(&embeds))?;
    }

    message.await?;
    Ok(())
}

async fn create_message(ctxt: &CommandCtxt<'_>, mut builder: MessageBuilder) -> anyhow::Result<()> {
    let allowed_mentions = AllowedMentions::default();

    let mut message = ctxt
        .data
        .erangel
        .http_client
        .create_message(Id::new(ctxt.data.channel_id))
        .allowed_mentions(Some(&allowed_mentions));

    if let Some(content) = &mut builder.content {
        trim_content_fits(content);
        message = message.content(content)?;
    }

    let embeds;
    if let Some(embed) = builder.embed {
        embeds = [embed];
        message = message.embeds(&embeds)?;
    }

    let reply = message.await?.model().await?;
    ctxt.data.erangel.replies.insert_reply(
        ctxt.data.message_id,
        ReplyInUse {
            message_id: reply.id.get(),
        },
    );

    Ok(())
}

/// Sends a reply to the invocation, editing the previously sent reply in
/// place when this invocation already has one (the "Processing..." pattern).
pub async fn reply(ctxt: &CommandCtxt<'_>, builder: MessageBuilder) -> anyhow::Result<()> {
    let reply_in_use = ctxt.data.erangel.replies.get_reply(ctxt.data.message_id);

    if let Some(reply_in_use) = reply_in_use {
        edit(ctxt, builder, reply_in_use).await
    } else {
        create_message(ctxt, builder).await
    }
}
