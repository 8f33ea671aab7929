use twilight_model::channel::message::Embed;

#[derive(Debug)]
pub struct MessageBuilder {
    pub content: Option<String>,
    pub embed: Option<Embed>,
}

impl From<&str> for MessageBuilder {
    fn from(value: &str) -> Self {
        Self {
            content: Some(value.into()),
            embed: None,
        }
    }
}
impl From<String> for MessageBuilder {
    fn from(value: String) -> Self {
        Self {
            content: Some(value),
            embed: None,
        }
    }
}

impl From<Embed> for MessageBuilder {
    fn from(value: Embed) -> Self {
        Self {
            content: None,
            embed: Some(value),
        }
    }
}
impl From<(String, Embed)> for MessageBuilder {
    fn from((content, embed): (String, Embed)) -> Self {
        Self {
            content: Some(content),
            embed: Some(embed),
        }
    }
}
