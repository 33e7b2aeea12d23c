//! Host configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::dealing::hand_size_for;
use crate::error::HostError;

/// Everything tunable about one host process. Defaults suit a local
/// three-player session; every knob has a `MOONDIAL_*` override.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Total seats in the game, bots included. Must divide the deal evenly.
    pub participants: usize,
    /// Local participant's display name.
    pub host_name: String,
    /// Pause before a bot seat acts.
    pub bot_think_delay: Duration,
    /// Interval between resolution verdicts.
    pub resolution_tick: Duration,
    /// How long the start banner stays up.
    pub banner_duration: Duration,
    /// Fixed deal seed; `None` draws one from OS entropy per mission.
    pub deal_seed: Option<u64>,
    /// Run the local seat as a bot too (unattended demo / soak mode).
    pub autoplay: bool,
    /// Where the recovery snapshot lives.
    pub recovery_path: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            participants: 3,
            host_name: "Host".to_string(),
            bot_think_delay: Duration::from_millis(1000),
            resolution_tick: Duration::from_millis(2000),
            banner_duration: Duration::from_millis(3000),
            deal_seed: None,
            autoplay: false,
            recovery_path: PathBuf::from("moondial-game.json"),
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self, HostError> {
        let mut config = Self::default();

        if let Some(raw) = read_var("MOONDIAL_PARTICIPANTS") {
            let count = parse_var("MOONDIAL_PARTICIPANTS", &raw)?;
            if hand_size_for(count).is_none() {
                return Err(HostError::config(format!(
                    "MOONDIAL_PARTICIPANTS must be one of 2, 3, 4, 6 (got {count})"
                )));
            }
            config.participants = count;
        }
        if let Some(name) = read_var("MOONDIAL_HOST_NAME") {
            config.host_name = name;
        }
        if let Some(raw) = read_var("MOONDIAL_BOT_DELAY_MS") {
            config.bot_think_delay = Duration::from_millis(parse_var("MOONDIAL_BOT_DELAY_MS", &raw)?);
        }
        if let Some(raw) = read_var("MOONDIAL_RESOLUTION_TICK_MS") {
            config.resolution_tick =
                Duration::from_millis(parse_var("MOONDIAL_RESOLUTION_TICK_MS", &raw)?);
        }
        if let Some(raw) = read_var("MOONDIAL_BANNER_MS") {
            config.banner_duration = Duration::from_millis(parse_var("MOONDIAL_BANNER_MS", &raw)?);
        }
        if let Some(raw) = read_var("MOONDIAL_DEAL_SEED") {
            config.deal_seed = Some(parse_var("MOONDIAL_DEAL_SEED", &raw)?);
        }
        if let Some(raw) = read_var("MOONDIAL_AUTOPLAY") {
            config.autoplay = matches!(raw.as_str(), "1" | "true" | "yes");
        }
        if let Some(path) = read_var("MOONDIAL_RECOVERY_PATH") {
            config.recovery_path = PathBuf::from(path);
        }

        Ok(config)
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, HostError> {
    raw.parse()
        .map_err(|_| HostError::config(format!("{name} is not a valid number: '{raw}'")))
}
