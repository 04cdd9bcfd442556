//! Client configuration and loaders.

use std::env;
use std::time::Duration;

use pokeclash_protocol::POKEAPI_URL;

/// Top-level client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API root, without the `/pokemon` suffix
    pub api_url: String,

    /// How many creatures to load
    pub roster_limit: usize,

    pub sounds: SoundConfig,
    pub timing: TimingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: POKEAPI_URL.to_string(),
            roster_limit: 151,
            sounds: SoundConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POKECLASH_API_URL` - API root (default: `https://pokeapi.co/api/v2`)
    /// - `POKECLASH_ROSTER_LIMIT` - Creatures to load (default: 151, minimum: 2)
    /// - `POKECLASH_SOUND_DIR` - Sound asset directory (default: `sounds`)
    /// - `POKECLASH_FLASH_MS` - Flash message duration (default: 3000)
    /// - `POKECLASH_RESTART_MS` - Delay before a new game starts (default: 3000)
    /// - `POKECLASH_AUTO_RESTART` - Start a new game after game over (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("POKECLASH_API_URL")
            && !url.trim().is_empty()
        {
            config.api_url = url.trim().to_string();
        }
        if let Some(limit) = read_env::<usize>("POKECLASH_ROSTER_LIMIT") {
            config.roster_limit = limit.max(2);
        }
        if let Ok(dir) = env::var("POKECLASH_SOUND_DIR") {
            config.sounds.dir = dir;
        }
        if let Some(ms) = read_env::<u64>("POKECLASH_FLASH_MS") {
            config.timing.flash_duration = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("POKECLASH_RESTART_MS") {
            config.timing.restart_delay = Duration::from_millis(ms);
        }
        if let Some(restart) = read_env_bool("POKECLASH_AUTO_RESTART") {
            config.timing.auto_restart = restart;
        }

        config
    }
}

/// Where sound assets live.
#[derive(Clone, Debug)]
pub struct SoundConfig {
    pub dir: String,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            dir: "sounds".to_string(),
        }
    }
}

/// UI timer settings.
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// How long a flash message stays up
    pub flash_duration: Duration,

    /// Pause between game over and the next game
    pub restart_delay: Duration,

    /// Whether a new game starts after game over; the loop exits otherwise
    pub auto_restart: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            flash_duration: Duration::from_millis(3000),
            restart_delay: Duration::from_millis(3000),
            auto_restart: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.roster_limit, 151);
        assert_eq!(config.sounds.dir, "sounds");
        assert_eq!(config.timing.flash_duration, Duration::from_secs(3));
        assert_eq!(config.timing.restart_delay, Duration::from_secs(3));
        assert!(config.timing.auto_restart);
    }

    #[test]
    fn test_read_env_missing() {
        assert_eq!(read_env::<u64>("POKECLASH_TEST_UNSET_VARIABLE"), None);
        assert_eq!(read_env_bool("POKECLASH_TEST_UNSET_VARIABLE"), None);
    }
}
