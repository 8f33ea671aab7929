use std::time::Duration;

use moka::sync::Cache;

use crate::command::pubg::matches::MatchesSession;

/// How long an invocation keeps editing the same reply before a fresh message
/// is sent instead, and how long reaction affordances stay live.
static REPLY_TTL: Duration = Duration::from_secs(60 * 5);

#[derive(Clone)]
pub struct ReplyInUse {
    pub message_id: u64,
}

/// Tracks the replies the bot has in flight.
///
/// `replies` maps an invocation message ID to the reply sent for it, so a
/// command can post a placeholder and later edits land on the same message.
/// `matches_sessions` maps a sent reply's message ID to the interactive
/// session rendered onto it, routing ReactionAdd events back to the view
/// state machine. Both expire on their own; dropped entries just mean the
/// affordance goes dead, which is fine.
pub struct Replies {
    replies: Cache<u64, ReplyInUse>,
    matches_sessions: Cache<u64, MatchesSession>,
}
impl Replies {
    pub fn new() -> Self {
        Replies {
            replies: Cache::builder().max_capacity(10000).time_to_live(REPLY_TTL).build(),
            matches_sessions: Cache::builder().max_capacity(1000).time_to_live(REPLY_TTL).build(),
        }
    }

    pub fn get_reply(&self, invocation_message_id: u64) -> Option<ReplyInUse> {
        self.replies.get(&invocation_message_id)
    }

    pub fn insert_reply(&self, invocation_message_id: u64, reply: ReplyInUse) {
        self.replies.insert(invocation_message_id, reply);
    }

    pub fn get_matches_session(&self, reply_message_id: u64) -> Option<MatchesSession> {
        self.matches_sessions.get(&reply_message_id)
    }

    pub fn insert_matches_session(&self, reply_message_id: u64, session: MatchesSession) {
        self.matches_sessions.insert(reply_message_id, session);
    }
}
