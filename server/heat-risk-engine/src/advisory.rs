//! Plain-language weather advisory shown next to the risk badge.

use crate::types::WeatherReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
  VeryHot,
  Warm,
  Mild,
  Cool,
  Chilly,
  Cold,
  Freezing,
}

impl TemperatureBand {
  pub fn from_celsius(t: f64) -> Self {
    if t >= 30.0 {
      Self::VeryHot
    } else if t >= 25.0 {
      Self::Warm
    } else if t >= 20.0 {
      Self::Mild
    } else if t >= 15.0 {
      Self::Cool
    } else if t >= 10.0 {
      Self::Chilly
    } else if t >= 0.0 {
      Self::Cold
    } else {
      Self::Freezing
    }
  }

  fn message(self) -> &'static str {
    match self {
      Self::VeryHot => "Very hot. Drink water often and rest in shade or a cooling shelter.",
      Self::Warm => "Warm. Good for outdoor activity; wear sunscreen.",
      Self::Mild => "Pleasant temperature for outdoor activity.",
      Self::Cool => "Cool. Bring a light jacket.",
      Self::Chilly => "Chilly. Dress warmly.",
      Self::Cold => "Cold. Wear a heavy coat, scarf and gloves.",
      Self::Freezing => "Freezing. Limit time outdoors.",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryNote {
  MuggyHeat,
  Humid,
  DryAir,
  Rain,
  Snow,
  Thunderstorm,
  Overcast,
  ClearSky,
}

impl AdvisoryNote {
  fn message(self) -> &'static str {
    match self {
      Self::MuggyHeat => "High humidity makes it feel even hotter.",
      Self::Humid => "Humidity is on the high side.",
      Self::DryAir => "Dry air; keep skin moisturized.",
      Self::Rain => "Rain: bring an umbrella and watch for slippery roads.",
      Self::Snow => "Snow: watch your footing.",
      Self::Thunderstorm => "Thunderstorms: stay indoors.",
      Self::Overcast => "Overcast with little UV.",
      Self::ClearSky => "Clear sky: UV may be strong, use sunscreen.",
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherAdvisory {
  pub band: TemperatureBand,
  pub notes: Vec<AdvisoryNote>,
}

impl WeatherAdvisory {
  pub fn message(&self) -> String {
    std::iter::once(self.band.message())
      .chain(self.notes.iter().map(|n| n.message()))
      .collect::<Vec<_>>()
      .join(" ")
  }
}

fn sky_note(description: &str) -> Option<AdvisoryNote> {
  let d = description.to_lowercase();
  if d.contains("rain") || d.contains("shower") {
    Some(AdvisoryNote::Rain)
  } else if d.contains("snow") {
    Some(AdvisoryNote::Snow)
  } else if d.contains("thunderstorm") {
    Some(AdvisoryNote::Thunderstorm)
  } else if d.contains("cloud") || d.contains("overcast") {
    Some(AdvisoryNote::Overcast)
  } else if d.contains("clear") {
    Some(AdvisoryNote::ClearSky)
  } else {
    None
  }
}

/// Advisory for the current conditions; `None` without a usable temperature.
pub fn weather_advisory(weather: &WeatherReading) -> Option<WeatherAdvisory> {
  let t = weather.temperature_c.filter(|t| t.is_finite())?;
  let band = TemperatureBand::from_celsius(t);
  let humidity = weather.relative_humidity_percent.filter(|h| h.is_finite());

  let mut notes = Vec::new();
  match (band, humidity) {
    (TemperatureBand::VeryHot, Some(h)) if h > 70.0 => notes.push(AdvisoryNote::MuggyHeat),
    (TemperatureBand::Warm, Some(h)) if h > 60.0 => notes.push(AdvisoryNote::Humid),
    (TemperatureBand::Mild, Some(h)) if h < 40.0 => notes.push(AdvisoryNote::DryAir),
    _ => {}
  }
  if let Some(note) = weather.description.as_deref().and_then(sky_note) {
    notes.push(note);
  }

  Some(WeatherAdvisory { band, notes })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn weather(t: Option<f64>, rh: Option<f64>, desc: Option<&str>) -> WeatherReading {
    WeatherReading {
      temperature_c: t,
      relative_humidity_percent: rh,
      uv_index: None,
      description: desc.map(str::to_string),
    }
  }

  #[test]
  fn band_boundaries() {
    assert_eq!(TemperatureBand::from_celsius(30.0), TemperatureBand::VeryHot);
    assert_eq!(TemperatureBand::from_celsius(29.9), TemperatureBand::Warm);
    assert_eq!(TemperatureBand::from_celsius(0.0), TemperatureBand::Cold);
    assert_eq!(TemperatureBand::from_celsius(-0.1), TemperatureBand::Freezing);
  }

  #[test]
  fn muggy_heat_with_rain() {
    let a = weather_advisory(&weather(Some(32.0), Some(85.0), Some("light rain"))).unwrap();
    assert_eq!(a.band, TemperatureBand::VeryHot);
    assert_eq!(a.notes, vec![AdvisoryNote::MuggyHeat, AdvisoryNote::Rain]);
    assert!(a.message().contains("umbrella"));
  }

  #[test]
  fn dry_mild_clear_day() {
    let a = weather_advisory(&weather(Some(22.0), Some(30.0), Some("clear sky"))).unwrap();
    assert_eq!(a.notes, vec![AdvisoryNote::DryAir, AdvisoryNote::ClearSky]);
  }

  #[test]
  fn humidity_note_only_in_matching_band() {
    let a = weather_advisory(&weather(Some(12.0), Some(90.0), None)).unwrap();
    assert!(a.notes.is_empty());
  }

  #[test]
  fn no_temperature_no_advisory() {
    assert!(weather_advisory(&weather(None, Some(50.0), Some("clear sky"))).is_none());
  }
}
