//! Client configuration.

use std::time::Duration;

pub const DEFAULT_RELAY_URL: &str = "http://localhost:3000";
pub const DEFAULT_TTS_COMMAND: &str = "espeak-ng -v es";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the relay service.
    pub relay_url: String,
    /// TTS program and its leading arguments; the utterance text is appended.
    pub tts_command: Vec<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: DEFAULT_RELAY_URL.into(),
            tts_command: split_command(DEFAULT_TTS_COMMAND),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load from `POKEVOZ_RELAY_URL` and `POKEVOZ_TTS_COMMAND`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let relay_url = lookup("POKEVOZ_RELAY_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or(defaults.relay_url);
        let tts_command = lookup("POKEVOZ_TTS_COMMAND")
            .map(|c| split_command(&c))
            .filter(|c| !c.is_empty())
            .unwrap_or(defaults.tts_command);

        Self {
            relay_url,
            tts_command,
            ..defaults
        }
    }
}

fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_vars(|_| None);
        assert_eq!(config.relay_url, DEFAULT_RELAY_URL);
        assert_eq!(config.tts_command, vec!["espeak-ng", "-v", "es"]);
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_vars(|k| match k {
            "POKEVOZ_RELAY_URL" => Some("https://relay.example/".into()),
            "POKEVOZ_TTS_COMMAND" => Some("say -v Monica".into()),
            _ => None,
        });
        assert_eq!(config.relay_url, "https://relay.example");
        assert_eq!(config.tts_command, vec!["say", "-v", "Monica"]);
    }

    #[test]
    fn test_blank_command_keeps_default() {
        let config =
            ClientConfig::from_vars(|k| (k == "POKEVOZ_TTS_COMMAND").then(|| "   ".into()));
        assert_eq!(config.tts_command[0], "espeak-ng");
    }
}
