//! Filter configuration — the per-request knobs and the hand-tuned density
//! step tables. The tables are configuration data validated by fixtures,
//! not derived values; change them only together with their tests.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_DENSITY: u8 = 10;
pub const MAX_DENSITY: u8 = 100;

/// Recommendations disappear entirely below this density.
pub const RECOMMENDATIONS_MIN_DENSITY: u8 = 30;

/// Personal interests (activities section) show only at or above this.
pub const PERSONAL_INTERESTS_MIN_DENSITY: u8 = 90;

/// Ephemeral per-assembly configuration. Built fresh for every request;
/// never persisted, never shared across requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FilterConfig {
    /// 10–100; 100 shows everything.
    pub density: u8,
    /// Recency window in years; 0 = unbounded.
    pub timeframe_years: u32,
    /// Fixed "now" for the whole assembly so repeated filters agree.
    pub now: NaiveDate,
}

impl FilterConfig {
    pub fn new(density: u8, timeframe_years: u32, now: NaiveDate) -> Self {
        Self {
            density: density.clamp(MIN_DENSITY, MAX_DENSITY),
            timeframe_years,
            now,
        }
    }

    pub fn current(density: u8, timeframe_years: u32) -> Self {
        Self::new(density, timeframe_years, Utc::now().date_naive())
    }

    /// Recency cutoff date, or `None` when the timeframe is unbounded.
    pub fn cutoff_date(&self) -> Option<NaiveDate> {
        if self.timeframe_years == 0 {
            return None;
        }
        let cutoff_year = self.now.year() - self.timeframe_years as i32;
        NaiveDate::from_ymd_opt(cutoff_year, self.now.month(), self.now.day())
            .or_else(|| NaiveDate::from_ymd_opt(cutoff_year, self.now.month(), 28))
    }
}

/// Density → bullet-priority cutoff. Bullets with priority below the cutoff
/// are dropped. `None` means keep every bullet (full density).
///
/// Step table: [90,100]→6, [80,89]→7, [60,79]→8, [10,59]→9.
pub fn bullet_cutoff(density: u8) -> Option<u8> {
    match density {
        100.. => None,
        90..=99 => Some(6),
        80..=89 => Some(7),
        60..=79 => Some(8),
        _ => Some(9),
    }
}

/// Recommendations carry their own coarser step table applied against each
/// recommendation's entry priority: ≥90→6, ≥70→8, everything else→9.
pub fn recommendation_cutoff(density: u8) -> u8 {
    match density {
        90.. => 6,
        70..=89 => 8,
        _ => 9,
    }
}

/// Section-wide kill switch: a section with configured priority P is shown
/// only when `density >= P * 10`. Evaluated before any entry-level filter.
pub fn section_visible(density: u8, section_priority: u8) -> bool {
    density as u16 >= section_priority as u16 * 10
}
