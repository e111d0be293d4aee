use log::Level;

/// Console log level, read at build time. Accepts any `log::Level` name.
pub const LOG_LEVEL: Option<&str> = option_env!("JJK_LOG_LEVEL");

pub fn log_level() -> Level {
    parse_log_level(LOG_LEVEL)
}

fn parse_log_level(raw: Option<&str>) -> Level {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names() {
        assert_eq!(parse_log_level(Some("debug")), Level::Debug);
        assert_eq!(parse_log_level(Some(" WARN ")), Level::Warn);
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(parse_log_level(None), Level::Info);
        assert_eq!(parse_log_level(Some("chatty")), Level::Info);
        assert_eq!(parse_log_level(Some("off")), Level::Info);
    }
}
