//! Simulated weather with clothing advice.
//!
//! There is no real provider integration: a fetch is a single artificial
//! delay followed by a randomized reading. The advice generator is the real
//! logic here, a rule table keyed on temperature bands with a condition
//! suffix.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Artificial delay before a simulated reading arrives.
pub const FETCH_DELAY: Duration = Duration::from_secs(2);

/// Sky conditions the simulation can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    PartlyCloudy,
    Rainy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Sunny,
        WeatherCondition::Cloudy,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Rainy,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "☀️",
            WeatherCondition::Cloudy => "⛅",
            WeatherCondition::PartlyCloudy => "🌤️",
            WeatherCondition::Rainy => "🌧️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "ensoleillé",
            WeatherCondition::Cloudy => "nuageux",
            WeatherCondition::PartlyCloudy => "partiellement nuageux",
            WeatherCondition::Rainy => "pluvieux",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Immutable snapshot of one weather fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Degrees Celsius.
    pub temperature: i32,
    pub condition: WeatherCondition,
    /// Percent.
    pub humidity: u32,
    /// km/h.
    pub wind_speed: u32,
    pub city: String,
    pub advice: String,
}

/// Clothing advice for a condition and temperature.
///
/// Eight temperature bands, plus a reminder suffix when the condition label
/// mentions rain or snow.
pub fn advice_for(condition: WeatherCondition, temperature: i32) -> String {
    let mut advice = String::from(match temperature {
        t if t < 0 => {
            "Attention au verglas ! Manteau d'hiver, écharpe, gants et chaussures antidérapantes."
        }
        t if t < 5 => "Il fait très froid ! Manteau chaud, écharpe et gants indispensables.",
        t if t < 10 => "Il fait froid ! Manteau chaud et écharpe recommandés.",
        t if t < 15 => "Il fait frais, une veste ou un pull sera parfait.",
        t if t < 20 => "Température agréable, une tenue normale convient.",
        t if t < 25 => "Temps agréable ! Idéal pour sortir avec des vêtements légers.",
        t if t < 30 => "Il fait chaud ! Vêtements légers et restez à l'ombre.",
        _ => "Il fait très chaud ! Restez à l'ombre, buvez beaucoup d'eau et portez un chapeau.",
    });

    let label = condition.label();
    if label.contains("pluv") {
        advice.push_str(" N'oubliez pas votre parapluie !");
    } else if label.contains("neig") {
        advice.push_str(" Attention, routes glissantes !");
    }

    advice
}

/// Wait out the artificial delay, then produce a randomized reading.
///
/// Temperature 5..35 °C, humidity 40..80 %, wind 5..25 km/h. Only one fetch
/// is ever in flight per session; a later reading simply replaces an earlier
/// one (last write wins).
pub async fn simulate_fetch(city: &str) -> WeatherReading {
    tokio::time::sleep(FETCH_DELAY).await;

    let condition = WeatherCondition::ALL[fastrand::usize(..WeatherCondition::ALL.len())];
    let temperature = fastrand::i32(5..35);

    WeatherReading {
        temperature,
        condition,
        humidity: fastrand::u32(40..80),
        wind_speed: fastrand::u32(5..25),
        city: city.to_string(),
        advice: advice_for(condition, temperature),
    }
}

/// Host-side fetch state: a loading flag plus the latest snapshot.
#[derive(Debug, Clone, Default)]
pub struct WeatherState {
    pub loading: bool,
    pub reading: Option<WeatherReading>,
}

impl WeatherState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Last write wins.
    pub fn complete(&mut self, reading: WeatherReading) {
        self.loading = false;
        self.reading = Some(reading);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- advice bands ---

    #[test]
    fn advice_covers_every_temperature_band() {
        let sunny = WeatherCondition::Sunny;
        assert!(advice_for(sunny, -3).contains("verglas"));
        assert!(advice_for(sunny, 2).contains("très froid"));
        assert!(advice_for(sunny, 7).contains("froid"));
        assert!(advice_for(sunny, 12).contains("veste ou un pull"));
        assert!(advice_for(sunny, 17).contains("tenue normale"));
        assert!(advice_for(sunny, 22).contains("vêtements légers"));
        assert!(advice_for(sunny, 27).contains("chaud"));
        assert!(advice_for(sunny, 33).contains("très chaud"));
    }

    #[test]
    fn band_boundaries_round_down() {
        let sunny = WeatherCondition::Sunny;
        // 0 is "très froid", not "verglas"; 30 is already "très chaud".
        assert!(!advice_for(sunny, 0).contains("verglas"));
        assert!(advice_for(sunny, 30).contains("très chaud"));
    }

    #[test]
    fn rain_appends_the_umbrella_reminder() {
        let advice = advice_for(WeatherCondition::Rainy, 12);
        assert!(advice.contains("veste ou un pull"));
        assert!(advice.ends_with("N'oubliez pas votre parapluie !"));
    }

    #[test]
    fn dry_conditions_get_no_suffix() {
        for condition in [
            WeatherCondition::Sunny,
            WeatherCondition::Cloudy,
            WeatherCondition::PartlyCloudy,
        ] {
            assert!(!advice_for(condition, 12).contains("parapluie"));
        }
    }

    // --- simulation ---

    #[tokio::test(start_paused = true)]
    async fn simulated_reading_stays_in_range() {
        let reading = simulate_fetch("Paris").await;
        assert!((5..35).contains(&reading.temperature));
        assert!((40..80).contains(&reading.humidity));
        assert!((5..25).contains(&reading.wind_speed));
        assert_eq!(reading.city, "Paris");
        assert_eq!(reading.advice, advice_for(reading.condition, reading.temperature));
    }

    // --- state ---

    #[test]
    fn fetch_state_last_write_wins() {
        let mut state = WeatherState::default();
        state.begin_fetch();
        assert!(state.loading);

        let first = WeatherReading {
            temperature: 10,
            condition: WeatherCondition::Cloudy,
            humidity: 50,
            wind_speed: 10,
            city: "Paris".into(),
            advice: advice_for(WeatherCondition::Cloudy, 10),
        };
        let second = WeatherReading {
            temperature: 22,
            ..first.clone()
        };

        state.complete(first);
        state.complete(second.clone());
        assert!(!state.loading);
        assert_eq!(state.reading, Some(second));
    }
}
