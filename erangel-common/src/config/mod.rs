pub mod config;

static CONFIG_LOCATION: &str = "./config.toml";

use lazy_static::lazy_static;
use toml::from_str;

use crate::config::config::ErangelConfig;

lazy_static! {
    pub static ref CONFIG: ErangelConfig = {
        let raw = std::fs::read_to_string(CONFIG_LOCATION)
            .unwrap_or_else(|e| panic!("failed to read {CONFIG_LOCATION}: {e}"));
        from_str::<ErangelConfig>(&raw).unwrap()
    };
}
