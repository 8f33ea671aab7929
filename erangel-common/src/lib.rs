pub mod config;
pub mod macros;
pub mod markdown;
pub mod util;

/// User ID of the Erangel bot account, used for mention-prefix detection.
pub static BOT_ID: u64 = 1143628334596772931;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::util::{format_duration, join_list};

    #[test]
    fn join_list_many() {
        assert_eq!(join_list(&["solo", "duo", "squad"]), "solo, duo, squad");
    }

    #[test]
    fn join_list_single() {
        assert_eq!(join_list(&["solo"]), "solo");
    }

    #[test]
    fn join_list_empty() {
        assert_eq!(join_list::<&str>(&[]), "");
    }

    #[test]
    fn format_duration_millis() {
        assert_eq!(format_duration(&Duration::from_millis(250)), "250ms");
    }

    #[test]
    fn format_duration_secs() {
        assert_eq!(format_duration(&Duration::from_millis(2500)), "2.5s");
    }
}
