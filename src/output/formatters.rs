//! Formatting utilities for terminal output

/// Closeness band of a position, used to colour guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closeness {
    /// Position 1..=300
    Close,
    /// Position 301..=1500
    Near,
    /// Anything further
    Far,
}

impl Closeness {
    #[must_use]
    pub const fn from_position(position: u32) -> Self {
        match position {
            0..=300 => Self::Close,
            301..=1500 => Self::Near,
            _ => Self::Far,
        }
    }
}

/// Relative bar length (percent of full width) for a position
///
/// Close guesses get long bars that shrink quickly with distance; far guesses
/// keep a short stub so they stay visible.
#[must_use]
pub fn bar_width_percent(position: u32) -> f64 {
    let position = f64::from(position);
    if position <= 300.0 {
        (80.0 - (position / 300.0) * 50.0).max(10.0)
    } else if position <= 1500.0 {
        (40.0 - ((position - 300.0) / 1200.0) * 30.0).max(5.0)
    } else {
        (15.0 - (position / 5000.0).min(10.0)).max(2.0)
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).round().max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Proximity bar for a guess at `position`
#[must_use]
pub fn proximity_bar(position: u32, width: usize) -> String {
    create_progress_bar(bar_width_percent(position), 100.0, width)
}
