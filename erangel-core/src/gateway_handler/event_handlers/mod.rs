pub mod guild_create;
pub mod guild_delete;
pub mod message_create;
pub mod reaction_add;
pub mod ready;
