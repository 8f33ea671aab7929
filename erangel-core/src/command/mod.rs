//! The command system.
//!
//! The key things that make up the command system are:
//!
//! - The [`Command`] trait: one implementor per command, exposing its static
//!   [`CommandMetadata`] and the `run` method that executes it. Commands are
//!   stored as trait objects (`TCommand`) in the registry, which maps
//!   canonical names and aliases to handlers (see registry.rs).
//!
//! - The tokenizer (tokenizer.rs): splits the raw argument text into tokens,
//!   honoring double-quoted multi-word tokens.
//!
//! - The parameter resolver (parameters.rs): turns tokens into a typed
//!   [`parameters::ResolvedParameters`], applying stored per-guild and
//!   per-user defaults where the user omitted a value.
//!
//! - The validation service (validation.rs): checks resolved values against
//!   the known region/mode enumerations and the live per-region season list.

use std::fmt::Display;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use twilight_model::user::User;

use erangel_database::model::guild_settings::GuildSettings;

use self::errors::MetadataCheckError;
use self::messagebuilder::MessageBuilder;
use crate::erangel::ThreadSafeErangel;
use crate::gateway_handler::reply as gateway_reply;
use crate::rest::pubg_fetcher::PubgFetcher;

pub mod errors;
pub mod messagebuilder;
pub mod misc;
pub mod parameters;
pub mod pubg;
pub mod registry;
pub mod tokenizer;
pub mod validation;

/// The default elevation of any user.
pub static PERM_DEFAULT: u8 = 0;
/// Granted to guild administrators and configured bot admins.
pub static PERM_ADMIN: u8 = 4;

/// The listing group a command is shown under in help output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Pubg,
    Server,
    User,
    Utility,
}
impl Group {
    pub const ALL: &'static [Group] = &[Group::Pubg, Group::Server, Group::User, Group::Utility];
}
impl Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Pubg => "PUBG",
                Self::Server => "Server",
                Self::User => "User",
                Self::Utility => "Utility",
            }
        )
    }
}

#[derive(Debug)]
pub struct CommandMetadata {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub group: Group,
    pub usage: &'static str,
    pub examples: &'static [&'static str],
    pub enabled: bool,
    pub guild_only: bool,
    pub permission_level: u8,
}

/// A command that can be executed.
///
/// Implementors are unit structs registered in registry.rs; arguments arrive
/// pre-tokenized, and everything else a command needs hangs off the context.
// This trait is used as a trait object and AFIT makes traits not object safe,
// so we need #[async_trait] here.
#[async_trait]
pub trait Command {
    fn metadata(&self) -> &'static CommandMetadata;

    async fn run(&self, ctxt: CommandCtxt<'_>, args: Vec<String>) -> anyhow::Result<()>;
}

/// Just a type alias for a command as a trait object with other necessary bounds.
/// See [Command] for more documentation.
pub type TCommand = &'static (dyn Command + Send + Sync);

/// A set of timings used to diagnose slow areas of parsing for commands.
#[derive(Clone)]
pub struct ExecutionTimings {
    /// Total time spent on the preprocessing phase.
    pub preprocess_total: Duration,
    /// Total time spent on the parsing phase.
    pub parse_total: Duration,
    /// Instant full command processing started.
    pub processing_time_start: Instant,
}

/// Static data shared by every subcontext of one command invocation.
pub struct CommandData<'a> {
    pub erangel: &'a ThreadSafeErangel,
    pub message_id: u64,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
    pub author: &'a User,
    pub calling_prefix: String,
    pub permission_level: u8,
    /// The invoking guild's stored settings, when the command runs in one.
    /// Fetched once during preprocessing so resolution does not re-query.
    pub guild_settings: Option<GuildSettings>,
    pub execution_timings: ExecutionTimings,
}

#[derive(Clone, Copy)]
pub struct CommandCtxt<'a> {
    pub data: &'a CommandData<'a>,
}

impl<'a> CommandCtxt<'a> {
    pub fn new(data: &'a CommandData<'a>) -> Self {
        Self { data }
    }

    pub async fn reply(&self, builder: impl Into<MessageBuilder>) -> anyhow::Result<()> {
        gateway_reply::reply(self, builder.into()).await
    }

    pub fn erangel(&self) -> &'a ThreadSafeErangel {
        self.data.erangel
    }

    pub fn fetcher(&self) -> &'a PubgFetcher {
        &self.data.erangel.pubg
    }
}

/// Enforces a command's metadata against the invocation context: the command
/// must be enabled, must be in a guild if it is guild-only, and the invoker's
/// elevation must meet the command's bar.
pub fn check_metadata(
    metadata: &'static CommandMetadata,
    in_guild: bool,
    permission_level: u8,
) -> Result<(), MetadataCheckError> {
    if !metadata.enabled {
        return Err(MetadataCheckError::CommandDisabled);
    }

    if metadata.guild_only && !in_guild {
        return Err(MetadataCheckError::GuildOnlyCommand);
    }

    if permission_level < metadata.permission_level {
        return Err(MetadataCheckError::InsufficientPermissions);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_METADATA: CommandMetadata = CommandMetadata {
        name: "test",
        aliases: &[],
        description: "a test command",
        group: Group::Utility,
        usage: "",
        examples: &[],
        enabled: true,
        guild_only: true,
        permission_level: 4,
    };

    static DISABLED_METADATA: CommandMetadata = CommandMetadata {
        name: "disabled",
        aliases: &[],
        description: "a disabled command",
        group: Group::Utility,
        usage: "",
        examples: &[],
        enabled: false,
        guild_only: false,
        permission_level: 0,
    };

    #[test]
    fn disabled_command_rejected() {
        assert!(matches!(
            check_metadata(&DISABLED_METADATA, true, 4),
            Err(MetadataCheckError::CommandDisabled)
        ));
    }

    #[test]
    fn guild_only_command_rejected_in_dms() {
        assert!(matches!(
            check_metadata(&TEST_METADATA, false, 4),
            Err(MetadataCheckError::GuildOnlyCommand)
        ));
    }

    #[test]
    fn insufficient_permissions_rejected() {
        assert!(matches!(
            check_metadata(&TEST_METADATA, true, 0),
            Err(MetadataCheckError::InsufficientPermissions)
        ));
    }

    #[test]
    fn qualifying_invocation_accepted() {
        assert!(check_metadata(&TEST_METADATA, true, 4).is_ok());
    }
}
