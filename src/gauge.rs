use crate::models::{GaugeResponse, Reading, RecentEntry};

/// Maximum number of entries in the recent-readings log.
pub const RECENT_LIMIT: usize = 5;

/// Classification of the community average into one of three fixed bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Calm,
    Moderate,
    Elevated,
}

impl Band {
    pub fn classify(average: f64) -> Self {
        if average <= 2.5 {
            Band::Calm
        } else if average <= 3.5 {
            Band::Moderate
        } else {
            Band::Elevated
        }
    }

    pub fn status_suffix(self) -> &'static str {
        match self {
            Band::Calm => " 😊 The community temperature is very calm.",
            Band::Moderate => " 🟡 The community temperature is at a moderate level.",
            Band::Elevated => " 🚨 The community temperature is high! A short pause is needed.",
        }
    }

    pub fn mission(self) -> &'static str {
        match self {
            Band::Calm => {
                "✨ Mission: say one nice thing to the classmate you talk to the least."
            }
            Band::Moderate => {
                "🤝 Mission: find the classmate who laughed the most today and ask them why."
            }
            Band::Elevated => {
                "🙏 Mission: turn to the person next to you right now and ask \"are you okay?\""
            }
        }
    }
}

pub fn build_gauge(readings: &[Reading]) -> GaugeResponse {
    if readings.is_empty() {
        return GaugeResponse {
            participant_count: 0,
            average: 0.0,
            fill_percent: 0.0,
            status: "No student readings recorded yet.".to_string(),
            mission: "Leave the very first reading right now!".to_string(),
            recent: Vec::new(),
        };
    }

    let total: f64 = readings.iter().map(|reading| normalize_level(reading.level)).sum();
    let average = total / readings.len() as f64;
    // Maps the 1-5 level scale onto a 0-100% thermometer fill.
    let fill_percent = (((average - 1.0) / 4.0) * 100.0).clamp(0.0, 100.0);
    let band = Band::classify(average);

    GaugeResponse {
        participant_count: readings.len(),
        average,
        fill_percent,
        status: format!(
            "{} participating. Average emotion temperature: {average:.1}.{}",
            readings.len(),
            band.status_suffix()
        ),
        mission: band.mission().to_string(),
        recent: recent_log(readings),
    }
}

/// Levels arrive from an unvalidated sheet; anything that is not a finite
/// number counts as 0 but still counts toward the participant total.
pub fn normalize_level(level: f64) -> f64 {
    if level.is_finite() { level } else { 0.0 }
}

pub fn display_name(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => "anonymous".to_string(),
    }
}

fn recent_log(readings: &[Reading]) -> Vec<RecentEntry> {
    readings
        .iter()
        .rev()
        .take(RECENT_LIMIT)
        .map(|reading| RecentEntry {
            timestamp: reading.timestamp.clone(),
            name: display_name(reading.name.as_deref()),
            level: normalize_level(reading.level),
            keywords: reading.keywords.clone(),
        })
        .collect()
}
