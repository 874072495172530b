use crate::base;

/// Interval defined by the inclusive bound of two dates. If `start` is greater
/// than `end`, the interval is considered empty. All empty intervals are
/// equivalent.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Interval {
    pub start: base::Date,
    pub end: base::Date,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() && other.is_empty() || self.start == other.start && self.end == other.end
    }
}

impl std::hash::Hash for Interval {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let interval = if self.is_empty() { Self::EMPTY } else { *self };
        interval.start.hash(state);
        interval.end.hash(state);
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::MAX
    }
}

impl Interval {
    /// The largest possible interval.
    pub const MAX: Self = Self {
        start: base::Date::MIN,
        end: base::Date::MAX,
    };

    pub const EMPTY: Self = Self {
        start: base::Date::MAX,
        end: base::Date::MIN,
    };

    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    pub fn contains(self, dt: base::Date) -> bool {
        self.start <= dt && dt <= self.end
    }

    pub fn intersection(self, other: Self) -> Self {
        Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        }
    }

    /// Returns an iterator over the start dates of every calendar week that
    /// overlaps the interval, in ascending order. Week starts are Mondays, so
    /// the first item may precede `self.start`.
    pub fn weeks(self) -> impl Iterator<Item = base::Date> {
        let end = self.end;
        let first = match self.is_empty() {
            true => None,
            false => Some(self.start.week_start()),
        };
        std::iter::successors(first, move |dt| {
            dt.week_end().shift_days(1).filter(|next| *next <= end)
        })
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Date(#[from] base::date::ParseError),
    #[error("invalid left side")]
    Left(#[source] base::date::ParseError),
    #[error("invalid right side")]
    Right(#[source] base::date::ParseError),
}

impl std::str::FromStr for Interval {
    type Err = ParseError;

    /// Parses `A:B` where either side may be empty (unbounded), or a single
    /// date. A single relative week date (`wn` or `Wn`) expands to the whole
    /// of that week; any other single date is a one-day interval.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = match s.split_once(':') {
            Some((left, right)) => (
                if left.is_empty() {
                    base::Date::MIN
                } else {
                    left.parse::<base::Date>().map_err(Self::Err::Left)?
                },
                if right.is_empty() {
                    base::Date::MAX
                } else {
                    right.parse::<base::Date>().map_err(Self::Err::Right)?
                },
            ),
            None => {
                let dt = s.parse::<base::Date>()?;
                match s.as_bytes()[0] as char {
                    'w' | 'W' => (dt.week_start(), dt.week_end()),
                    _ => (dt, dt),
                }
            }
        };
        Ok(Self { start, end })
    }
}
