//! Settings shared by the server and the CLI.

use chrono_tz::Tz;

pub static DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Stockholm;
pub static DEFAULT_SPAN: u16 = 10;
pub static DEFAULT_MAX_SPAN: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// the zone the 08:00 to 12:00 windows are anchored in
    pub timezone: Tz,
    /// years added to the current year when no range is requested
    pub default_span: u16,
    /// the longest range a request may ask for, in years after the start year
    pub max_span: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            default_span: DEFAULT_SPAN,
            max_span: DEFAULT_MAX_SPAN,
        }
    }
}

/// Parse an IANA timezone name, e.g. `Europe/Stockholm`.
pub fn parse_timezone(name: &str) -> Result<Tz, String> {
    name.parse::<Tz>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timezone() {
        assert_eq!(
            parse_timezone("Europe/Berlin").unwrap(),
            chrono_tz::Europe::Berlin
        );
        assert_eq!(parse_timezone("UTC").unwrap(), chrono_tz::UTC);
        assert!(parse_timezone("Mars/Olympus_Mons").is_err());
        assert!(parse_timezone("").is_err());
    }

    #[test]
    fn test_default() {
        let settings = Settings::default();
        assert_eq!(settings.timezone, chrono_tz::Europe::Stockholm);
        assert_eq!(settings.default_span, 10);
        assert_eq!(settings.max_span, 100);
    }
}
