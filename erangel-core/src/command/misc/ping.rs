use std::time::Instant;

use async_trait::async_trait;
use erangel_common::markdown::Markdown;
use erangel_common::util::{format_duration, get_memory_usage};

use crate::command::{Command, CommandCtxt, CommandMetadata, Group};

static METADATA: CommandMetadata = CommandMetadata {
    name: "ping",
    aliases: &[],
    description: "Measures processing and response timings.",
    group: Group::Utility,
    usage: "",
    examples: &[""],
    enabled: true,
    guild_only: false,
    permission_level: 0,
};

pub struct PingCommand;

#[async_trait]
impl Command for PingCommand {
    fn metadata(&self) -> &'static CommandMetadata {
        &METADATA
    }

    async fn run(&self, ctxt: CommandCtxt<'_>, _args: Vec<String>) -> anyhow::Result<()> {
        let timings = &ctxt.data.execution_timings;
        let preprocess_time = format_duration(&timings.preprocess_total);
        let parse_time = format_duration(&timings.parse_total);
        let processing_time = format_duration(&timings.processing_time_start.elapsed());

        let memory = get_memory_usage()
            .map(|bytes| format!("{}MB", bytes / 1024 / 1024))
            .unwrap_or_else(|| "unknown".to_owned());

        let ping_start = Instant::now();
        ctxt.reply("ping!").await?;
        let response_time = format_duration(&ping_start.elapsed());

        ctxt.reply(format!(
            "Pong!\n{}",
            format!(
                "Preprocessing Time:: {preprocess_time}\nFull Parsing Time:: {parse_time}\n\
                Processing Time:: {processing_time}\nResponse Time:: {response_time}\n\
                Memory Usage:: {memory}"
            )
            .codeblock("asciidoc")
        ))
        .await?;

        Ok(())
    }
}
