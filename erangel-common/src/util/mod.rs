use std::fmt::Display;
use std::time::Duration;

/// Joins items with ", ", leaving the last item without a trailing separator.
pub fn join_list<T: Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Formats a duration as millis below one second, otherwise as fractional seconds.
pub fn format_duration(duration: &Duration) -> String {
    if duration.as_millis() < 1000 {
        format!("{}ms", duration.as_millis())
    } else {
        format!("{}s", duration.as_secs_f32())
    }
}

/// Attempts to extract memory usage in bytes of the current process.
pub fn get_memory_usage() -> Option<usize> {
    let field = 1;
    let contents = std::fs::read("/proc/self/statm").ok()?;
    let contents = String::from_utf8(contents).ok()?;
    let s = contents.split_whitespace().nth(field)?;
    let npages = s.parse::<usize>().ok()?;
    Some(npages * 4096)
}
