//! Headless demo: plays the campaign under the seeded autopilot
//!
//! Usage: `shadow-runner [LEVELS.json] [SEED]`

use shadow_runner::autopilot::Autopilot;
use shadow_runner::consts::DEMO_MAX_TICKS;
use shadow_runner::sim::{LevelDef, SessionEvent};
use shadow_runner::{Campaign, CampaignPhase, ConfigError, Tuning, levels};

const DEFAULT_SEED: u64 = 0x5eed;

fn load_levels(path: Option<&str>) -> Result<Vec<LevelDef>, ConfigError> {
    match path {
        Some(path) => {
            log::info!("loading levels from {path}");
            let json = std::fs::read_to_string(path)?;
            LevelDef::list_from_json(&json)
        }
        None => Ok(levels::builtin()),
    }
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next();
    let seed = match args.next() {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("ignoring invalid seed '{raw}'");
            DEFAULT_SEED
        }),
        None => DEFAULT_SEED,
    };

    let defs = load_levels(path.as_deref())?;
    let mut campaign = Campaign::new(defs, Tuning::default())?;
    let mut pilot = Autopilot::new(seed);
    log::info!("Shadow Runner (headless) starting with seed {seed}");

    let mut deaths = 0u32;
    let mut ticks = 0u64;
    while ticks < DEMO_MAX_TICKS {
        match campaign.phase() {
            CampaignPhase::Complete => break,
            CampaignPhase::LevelFailed => campaign.retry(),
            CampaignPhase::Playing => {}
        }

        let input = pilot.step();
        let level = campaign.current_index();
        for event in campaign.tick(&input) {
            match event {
                SessionEvent::Died { .. } => deaths += 1,
                SessionEvent::Jumped | SessionEvent::Fired => continue,
                _ => {}
            }
            log::info!("tick {ticks}: level {} {event:?}", level + 1);
        }
        ticks += 1;
    }

    let seconds = ticks as f32 * campaign.session().tuning().tick_seconds();
    println!(
        "{:?} after {ticks} ticks ({seconds:.1}s simulated): level {}/{}, {} unlocked, {deaths} deaths",
        campaign.phase(),
        campaign.current_index() + 1,
        campaign.level_count(),
        campaign.unlocked(),
    );
    println!("{}", serde_json::to_string_pretty(&campaign.session().view())?);
    Ok(())
}
