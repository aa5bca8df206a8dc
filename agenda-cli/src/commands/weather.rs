use std::time::Duration;

use agenda_core::config::GlobalConfig;
use agenda_core::weather::{self, WeatherState};
use anyhow::Result;
use indicatif::ProgressBar;

use crate::render::Render;

pub async fn run(config: &GlobalConfig) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Récupération de la météo pour {}...", config.city));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut state = WeatherState::default();
    state.begin_fetch();

    let reading = weather::simulate_fetch(&config.city).await;
    state.complete(reading);

    spinner.finish_and_clear();

    // begin_fetch/complete guarantee a reading once loading is done
    if let Some(reading) = &state.reading {
        println!("{}", reading.render());
    }

    Ok(())
}
