use std::str::FromStr;

use moondial_host::domain::MissionId;
use moondial_host::{FileRecoveryStore, GameHost, HostConfig, RandomBot};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    moondial_host::telemetry::init_tracing();

    let config = match HostConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let mission = match std::env::var("MOONDIAL_MISSION") {
        Ok(raw) => match MissionId::from_str(&raw) {
            Ok(mission) => mission,
            Err(e) => {
                eprintln!("invalid MOONDIAL_MISSION: {e}");
                std::process::exit(1);
            }
        },
        Err(_) => MissionId::ClockI,
    };

    let store = Box::new(FileRecoveryStore::new(config.recovery_path.clone()));
    let bot = Box::new(RandomBot::new(None));
    let autoplay = config.autoplay;
    let host = GameHost::new(config, store, bot);

    // Re-arm timers for a restored mid-game state.
    host.resume();

    if autoplay && host.current_state().phase == moondial_host::domain::Phase::Lobby {
        if let Err(e) = host.start_mission(mission) {
            eprintln!("failed to start mission: {e}");
            std::process::exit(1);
        }
    }

    tracing::info!(%mission, autoplay, "host running, ctrl-c to stop");
    tokio::signal::ctrl_c().await?;
    Ok(())
}
