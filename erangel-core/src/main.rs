use std::sync::Arc;

use erangel_common::config::CONFIG;
use futures_util::stream::StreamExt;
use tokio::sync::Mutex;
use tracing::info;
use twilight_gateway::stream::{create_recommended, ShardMessageStream};
use twilight_gateway::{Config as GatewayConfig, EventTypeFlags, Intents, Message};
use twilight_model::gateway::payload::outgoing::update_presence::UpdatePresencePayload;
use twilight_model::gateway::presence::{Activity, ActivityType, Status};

use crate::erangel::{Erangel, ThreadSafeErangel};
use crate::gateway_handler::handle_raw_event;
use crate::gateway_handler::incoming_event::IncomingEvent;

mod command;
mod erangel;
mod gateway_handler;
mod replies;
mod rest;

lazy_static::lazy_static! {
    static ref ACTIVITY: Activity = Activity {
        application_id: None,
        assets: None,
        created_at: None,
        details: None,
        emoji: None,
        flags: None,
        id: None,
        instance: None,
        kind: ActivityType::Playing,
        name: format!("Use {}help", CONFIG.prefix.default),
        party: None,
        secrets: None,
        state: None,
        timestamps: None,
        url: None,
        buttons: Vec::new(),
    };
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    info!("Initialising");

    let erangel: ThreadSafeErangel = Arc::new(Erangel::new().await.unwrap());

    let presence =
        UpdatePresencePayload::new(vec![ACTIVITY.to_owned()], false, None, Status::Online).unwrap();

    let gateway_config = GatewayConfig::builder(
        CONFIG.authentication.discord_token.clone(),
        Intents::MESSAGE_CONTENT
            | Intents::GUILDS
            | Intents::GUILD_MESSAGES
            | Intents::DIRECT_MESSAGES
            | Intents::GUILD_MESSAGE_REACTIONS
            | Intents::DIRECT_MESSAGE_REACTIONS,
    )
    .presence(presence)
    .build();

    info!("Calculating recommended number of shards...");

    let mut shards = create_recommended(&erangel.http_client, gateway_config.clone(), |_, _| {
        gateway_config.clone()
    })
    .await
    .unwrap()
    .collect::<Vec<_>>();

    info!("Spawning {} shard(s)", shards.len());

    let stream = Arc::new(Mutex::new(ShardMessageStream::new(shards.iter_mut())));

    while let Some((_, event)) = stream.lock().await.next().await {
        if let Ok(Message::Text(event)) = event {
            let parsed_event = twilight_gateway::parse(
                event,
                EventTypeFlags::GUILD_CREATE
                    | EventTypeFlags::GUILD_DELETE
                    | EventTypeFlags::MESSAGE_CREATE
                    | EventTypeFlags::REACTION_ADD
                    | EventTypeFlags::READY,
            )
            .ok()
            .flatten();

            if let Some(parsed_event) = parsed_event {
                let try_incoming_event: Result<IncomingEvent, _> = parsed_event.try_into();
                if let Ok(incoming_event) = try_incoming_event {
                    let erangel = erangel.clone();
                    tokio::spawn(async move {
                        handle_raw_event(erangel, incoming_event).await;
                    });
                }
            }
        }
    }
}
