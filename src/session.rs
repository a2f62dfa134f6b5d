//! Session clock: maps wall-clock `HH:MM` to a compressed trading-day axis.
//!
//! The trading day is made of one or more sessions. Time before the first open clamps to
//! `0`, time after the last close clamps to `span()`, and every break between two sessions
//! collapses to a single point, so consecutive sessions sit next to each other on the axis.

use chrono::{NaiveTime, Timelike};
use eyre::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::gaps::{GapIndex, GapSegment};
use crate::utils::date_formatter::format_clock;

/// Position on the compressed trading-day axis, in trading minutes since the first open.
pub type SessionMinute = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingSession {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl TradingSession {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// Builds a session from `(hour, minute)` pairs.
    pub fn from_hm(open: (u32, u32), close: (u32, u32)) -> Option<Self> {
        Some(Self {
            open: NaiveTime::from_hms_opt(open.0, open.1, 0)?,
            close: NaiveTime::from_hms_opt(close.0, close.1, 0)?,
        })
    }

    /// Morning 09:30-11:30 and afternoon 13:00-15:00.
    pub fn defaults() -> Vec<Self> {
        [((9, 30), (11, 30)), ((13, 0), (15, 0))]
            .into_iter()
            .filter_map(|(open, close)| Self::from_hm(open, close))
            .collect()
    }

    fn open_minute(&self) -> i64 {
        minute_of_day(self.open)
    }

    fn close_minute(&self) -> i64 {
        minute_of_day(self.close)
    }
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight() / 60)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionClock {
    sessions: Vec<TradingSession>,
    gaps: GapIndex,
    open: i64,
    span: i64,
}

impl SessionClock {
    /// Sessions must be non-empty, each opening before it closes, in order and not overlapping.
    pub fn new(sessions: &[TradingSession]) -> Result<Self> {
        if sessions.is_empty() {
            bail!("at least one trading session is required");
        }
        for (idx, session) in sessions.iter().enumerate() {
            if session.open >= session.close {
                bail!(
                    "session {} closes at {} before it opens at {}",
                    idx,
                    session.close,
                    session.open
                );
            }
        }
        for pair in sessions.windows(2) {
            if pair[1].open < pair[0].close {
                bail!(
                    "session opening at {} overlaps the one closing at {}",
                    pair[1].open,
                    pair[0].close
                );
            }
        }
        Ok(Self::from_validated(sessions.to_vec()))
    }

    fn from_validated(sessions: Vec<TradingSession>) -> Self {
        let gaps = GapIndex::new(
            sessions
                .windows(2)
                .filter(|pair| pair[1].open > pair[0].close)
                .map(|pair| GapSegment::new(pair[0].close_minute(), pair[1].open_minute()))
                .collect(),
        );
        let open = sessions.first().map_or(0, TradingSession::open_minute);
        let close = sessions.last().map_or(0, TradingSession::close_minute);
        let span = close - open - gaps.total();

        Self {
            sessions,
            gaps,
            open,
            span,
        }
    }

    pub fn sessions(&self) -> &[TradingSession] {
        &self.sessions
    }

    /// Length of the axis in trading minutes.
    pub fn span(&self) -> SessionMinute {
        self.span as SessionMinute
    }

    /// Maps `HH:MM` (trailing `:SS` ignored) to its session minute.
    ///
    /// Returns `None` when the hour or minute is missing or not an integer.
    pub fn minutes_of(&self, time: &str) -> Option<SessionMinute> {
        let (hour, minute) = parse_hour_minute(time)?;
        let total = hour.checked_mul(60)?.checked_add(minute)?;
        Some(self.position(total))
    }

    fn position(&self, minute_of_day: i64) -> SessionMinute {
        (self.gaps.to_logical(minute_of_day) - self.open).clamp(0, self.span) as SessionMinute
    }

    /// Inverse of [`Self::minutes_of`]. A collapsed break resolves to the next session's open.
    pub fn time_at(&self, minute: SessionMinute) -> Option<NaiveTime> {
        let minute = i64::from(minute);
        if minute > self.span {
            return None;
        }
        let real = self.gaps.to_real(self.open + minute);
        NaiveTime::from_hms_opt(u32::try_from(real / 60).ok()?, (real % 60) as u32, 0)
    }

    /// Whether the wall-clock time falls strictly between one session's close and the next open.
    pub fn in_break(&self, time: &str) -> Option<bool> {
        let (hour, minute) = parse_hour_minute(time)?;
        Some(self.gaps.is_inside(hour.checked_mul(60)?.checked_add(minute)?))
    }

    /// Axis positions of the first open, every session boundary, and the last close.
    pub fn boundaries(&self) -> Vec<SessionMinute> {
        let mut positions = vec![0];
        positions.extend(
            self.sessions
                .windows(2)
                .map(|pair| self.position(pair[0].close_minute())),
        );
        positions.push(self.span());
        positions
    }

    /// Static labels matching [`Self::boundaries`], e.g. `09:30`, `11:30/13:00`, `15:00`.
    pub fn boundary_labels(&self) -> Vec<String> {
        let (Some(first), Some(last)) = (self.sessions.first(), self.sessions.last()) else {
            return Vec::new();
        };

        let mut labels = vec![format_clock(first.open)];
        labels.extend(self.sessions.windows(2).map(|pair| {
            if pair[0].close == pair[1].open {
                format_clock(pair[0].close)
            } else {
                format!("{}/{}", format_clock(pair[0].close), format_clock(pair[1].open))
            }
        }));
        labels.push(format_clock(last.close));
        labels
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::from_validated(TradingSession::defaults())
    }
}

fn parse_hour_minute(time: &str) -> Option<(i64, i64)> {
    let mut parts = time.split(':');
    let hour = parts.next()?.trim().parse::<i64>().ok()?;
    let minute = parts.next()?.trim().parse::<i64>().ok()?;
    Some((hour, minute))
}

/// Session minute of `time` on the default trading day.
pub fn minutes_of(time: &str) -> Option<SessionMinute> {
    SessionClock::default().minutes_of(time)
}
