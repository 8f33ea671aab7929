use std::collections::HashMap;

use async_trait::async_trait;
use erangel_common::markdown::Markdown;
use erangel_common::util::join_list;

use crate::command::registry::{find_command_by_name, get_or_init_commands};
use crate::command::{Command, CommandCtxt, CommandMetadata, Group, TCommand};

static METADATA: CommandMetadata = CommandMetadata {
    name: "help",
    aliases: &["h"],
    description: "Returns help topics.",
    group: Group::Utility,
    usage: "[command]",
    examples: &["", "matches", "setup"],
    enabled: true,
    guild_only: false,
    permission_level: 0,
};

fn command_detail(prefix: &str, command: TCommand) -> String {
    let meta = command.metadata();

    let aliases = if meta.aliases.is_empty() {
        "[none]".to_owned()
    } else {
        join_list(meta.aliases)
    };

    let examples = meta
        .examples
        .iter()
        .map(|e| format!("\t{prefix}{} {e}", meta.name))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "= {} =\n{}\n\nAliases:: {aliases}\nUsage:: {prefix}{} {}\n\nExamples::\n{examples}",
        meta.name, meta.description, meta.name, meta.usage
    )
}

fn command_overview(prefix: &str) -> String {
    // group commands under their listing group, stable ordering within each
    let mut groups: HashMap<Group, Vec<&'static CommandMetadata>> = HashMap::new();
    for command in get_or_init_commands().values() {
        groups.entry(command.metadata().group).or_default().push(command.metadata());
    }

    let mut out = String::new();
    for group in Group::ALL {
        let Some(list) = groups.get_mut(group) else {
            continue;
        };
        list.sort_by(|a, b| a.name.cmp(b.name));

        out.push_str(&format!("= {group} Commands =\n"));
        for meta in list {
            out.push_str(&format!("{}:: {}\n", meta.name, meta.description));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "Use \"{prefix}help [command]\" for details on each command.\n\
        If a parameter has a space in it you will need to surround it with quotation marks (\")."
    ));

    out
}

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn metadata(&self) -> &'static CommandMetadata {
        &METADATA
    }

    async fn run(&self, ctxt: CommandCtxt<'_>, args: Vec<String>) -> anyhow::Result<()> {
        let prefix = &ctxt.data.calling_prefix;

        let reply = match args.first() {
            Some(name) => match find_command_by_name(&name.to_ascii_lowercase()) {
                Some(command) => command_detail(prefix, command),
                None => format!("No command named \"{name}\" found."),
            },
            None => command_overview(prefix),
        };

        ctxt.reply(reply.codeblock("asciidoc")).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_substitutes_calling_prefix() {
        let command = find_command_by_name("matches").unwrap();
        let detail = command_detail("!", command);
        assert!(detail.contains("!matches"));
        assert!(detail.contains("Aliases:: [none]"));
    }

    #[test]
    fn overview_lists_every_group_with_commands() {
        let overview = command_overview("!");
        assert!(overview.contains("= PUBG Commands ="));
        assert!(overview.contains("= Utility Commands ="));
        assert!(overview.contains("matches::"));
        assert!(overview.contains("help::"));
    }
}
