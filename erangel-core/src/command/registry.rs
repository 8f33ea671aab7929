use std::collections::HashMap;
use std::sync::OnceLock;

use super::{misc, pubg, Command, TCommand};

macro_rules! declare_commands {
    ($($name:expr),* $(,)?) => {
        const RAW_COMMANDS: &[TCommand] = &[
            $(&$name as TCommand),*
        ];
    }
}

declare_commands!(
    misc::help::HelpCommand,
    misc::ping::PingCommand,
    misc::prefix::PrefixCommand,
    misc::register::RegisterCommand,
    misc::register::UnregisterCommand,
    misc::setup::SetupCommand,
    pubg::matches::MatchesCommand,
    pubg::modes::ModesCommand,
    pubg::regions::RegionsCommand,
    pubg::seasons::SeasonsCommand,
    pubg::stats::StatsCommand,
);

static COMMANDS: OnceLock<HashMap<&'static str, TCommand>> = OnceLock::new();
static ALIASES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

pub fn get_or_init_commands() -> &'static HashMap<&'static str, TCommand> {
    COMMANDS.get_or_init(|| {
        let mut map = HashMap::new();

        for &command in RAW_COMMANDS {
            map.insert(command.metadata().name, command);
        }

        map
    })
}

fn get_or_init_aliases() -> &'static HashMap<&'static str, &'static str> {
    ALIASES.get_or_init(|| {
        let mut map = HashMap::new();

        for &command in RAW_COMMANDS {
            let meta = command.metadata();
            for alias in meta.aliases {
                map.insert(*alias, meta.name);
            }
        }

        map
    })
}

/// Finds a command by its canonical name, following one alias indirection.
pub fn find_command_by_name(name: &str) -> Option<TCommand> {
    let commands = get_or_init_commands();

    commands.get(name).copied().or_else(|| {
        get_or_init_aliases()
            .get(name)
            .and_then(|canonical| commands.get(canonical))
            .copied()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_canonical_name() {
        let command = find_command_by_name("help").unwrap();
        assert_eq!(command.metadata().name, "help");
    }

    #[test]
    fn resolves_one_alias_indirection() {
        let command = find_command_by_name("h").unwrap();
        assert_eq!(command.metadata().name, "help");

        let command = find_command_by_name("rank").unwrap();
        assert_eq!(command.metadata().name, "stats");
    }

    #[test]
    fn unknown_commands_resolve_to_none() {
        assert!(find_command_by_name("unknown").is_none());
    }

    #[test]
    fn every_alias_points_at_a_registered_command() {
        for (alias, canonical) in get_or_init_aliases() {
            assert!(
                get_or_init_commands().contains_key(canonical),
                "alias {alias} points at unregistered command {canonical}"
            );
        }
    }
}
