use std::fmt::Display;

/// Discord markdown formatting for reply content.
pub trait Markdown {
    fn escape_codestring(&self) -> String;
    fn escape_codeblock(&self) -> String;

    fn bold(&self) -> String;
    fn codestring(&self) -> String;
    fn codeblock(&self, language: impl Display) -> String;
    fn url(&self, url: impl Display, comment: Option<impl Display>) -> String;
}

fn cut(t: impl Display, to: usize) -> String {
    t.to_string().chars().take(to).collect::<String>()
}

impl<T> Markdown for T
where
    T: Display,
{
    fn escape_codestring(&self) -> String {
        cut(self, 1998).replace('`', "'")
    }

    fn escape_codeblock(&self) -> String {
        cut(self, 1988).replace("```", "`\u{200b}`\u{200b}`")
    }

    fn bold(&self) -> String {
        format!("**{self}**")
    }

    fn codestring(&self) -> String {
        format!("`{}`", self.escape_codestring())
    }

    fn codeblock(&self, language: impl Display) -> String {
        let t = self.escape_codeblock();
        format!("```{language}\n{t}\n```")
    }

    fn url(&self, url: impl Display, comment: Option<impl Display>) -> String {
        format!(
            "[{self}]({url}{})",
            match comment {
                Some(c) => format!(" '{c}'"),
                None => "".to_string(),
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codestring_escapes_backticks() {
        assert_eq!("a`b".codestring(), "`a'b`");
    }

    #[test]
    fn codeblock_language() {
        assert_eq!("x".codeblock("asciidoc"), "```asciidoc\nx\n```");
    }

    #[test]
    fn url_with_comment() {
        assert_eq!(
            "Match".url("https://example.com", Some("hover")),
            "[Match](https://example.com 'hover')"
        );
    }
}
