use std::fmt::Display;

use crate::gateway_handler::message_parser::error::{ErrorSeverity, GetErrorSeverity};

/// A command failed one of its metadata checks before running.
#[derive(Debug)]
pub enum MetadataCheckError {
    /// The command is switched off in its metadata. Ignored silently.
    CommandDisabled,
    /// A guild-only command was invoked outside of a guild.
    GuildOnlyCommand,
    /// The invoker's elevation is below the command's required level.
    InsufficientPermissions,
}
impl Display for MetadataCheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandDisabled => f.write_str("This command is disabled."),
            Self::GuildOnlyCommand => f.write_str("Guild only command"),
            Self::InsufficientPermissions => f.write_str("Invalid permissions"),
        }
    }
}
impl std::error::Error for MetadataCheckError {}
impl GetErrorSeverity for MetadataCheckError {
    fn get_severity(&self) -> ErrorSeverity {
        match self {
            Self::CommandDisabled => ErrorSeverity::Low,
            _ => ErrorSeverity::High,
        }
    }
}
