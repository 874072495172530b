/// A date type without time or timezone information. Values are guaranteed to
/// be between `0000-01-01` and `9999-12-31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(time::Date);

const ISO8601: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

impl Date {
    /// 0000-01-01
    pub const MIN: Self = match time::Date::from_calendar_date(0, time::Month::January, 1) {
        Ok(dt) => Self(dt),
        Err(_) => panic!("0000-01-01 should be a valid date"),
    };

    /// 9999-12-31
    pub const MAX: Self = match time::Date::from_calendar_date(9999, time::Month::December, 31) {
        Ok(dt) => Self(dt),
        Err(_) => panic!("9999-12-31 should be a valid date"),
    };

    fn new(inner: time::Date) -> Option<Self> {
        let dt = Self(inner);
        if dt >= Self::MIN && dt <= Self::MAX {
            Some(dt)
        } else {
            None
        }
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .and_then(Self::new)
    }

    /// Returns the local date.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self(now.date())
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self::from_ymd(2024, 1, 10).expect("'today' for tests should be valid")
    }

    pub fn format(
        self,
        fmt: &[time::format_description::BorrowedFormatItem<'_>],
    ) -> Result<String, time::error::Format> {
        self.0.format(fmt)
    }

    /// Returns the Monday of the calendar week containing this date.
    ///
    /// [`Date::MIN`] is a Saturday, so 0000-01-01 and 0000-01-02 both map to
    /// [`Date::MIN`] rather than to a Monday. Every later date maps to a
    /// Monday.
    pub fn week_start(self) -> Self {
        let offset = self.0.weekday().number_days_from_monday();
        self.shift_days(-i64::from(offset)).unwrap_or(Self::MIN)
    }

    /// Returns the Sunday of the calendar week containing this date.
    ///
    /// [`Date::MAX`] is a Friday, so the dates of its week map to
    /// [`Date::MAX`] rather than to a Sunday.
    pub fn week_end(self) -> Self {
        let offset = 6 - self.0.weekday().number_days_from_monday();
        self.shift_days(i64::from(offset)).unwrap_or(Self::MAX)
    }

    /// Offsets the date by the given number of days, returning `None` if the
    /// resultant date is out of bounds.
    pub fn shift_days(self, offset: i64) -> Option<Self> {
        self.0
            .checked_add(time::Duration::days(offset))
            .and_then(Self::new)
    }

    /// Offsets the date by the given number of weeks, returning `None` if the
    /// resultant date is out of bounds.
    pub fn shift_weeks(self, offset: i64) -> Option<Self> {
        self.shift_days(offset.checked_mul(7)?)
    }

    /// Parses a date as stored on a transaction. Accepts `yyyy-mm-dd`,
    /// optionally followed by a time part separated by `T` or a space, which
    /// is ignored. Relative dates are not accepted.
    pub fn from_record_str(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        let day = match s.find(['T', ' ']) {
            Some(i) => &s[..i],
            None => s,
        };
        if day.is_empty() {
            return Err(ParseError::Empty);
        }
        Self::parse_iso(day)
    }

    fn parse_iso(s: &str) -> Result<Self, ParseError> {
        time::Date::parse(s, ISO8601)
            .map_err(ParseError::BadFormat)
            .and_then(|x| Self::new(x).ok_or(ParseError::OutOfRange))
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self.format(ISO8601).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::parse_iso(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error(transparent)]
    BadFormat(#[from] time::error::Parse),
    #[error("date is before 0000-01-01 or after 9999-12-31")]
    OutOfRange,
    #[error("first character is not one of {{d, D, w, W}}")]
    InvalidFirstChar,
    #[error(transparent)]
    InvalidOffset(#[from] std::num::ParseIntError),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a string to a date. Inputs must be in one of the following formats:
    /// - `yyyy-mm-dd`
    /// - `xn` where `x` is one of `{d, D, w, W}` and `n` is an integer
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        if s.as_bytes()[0].is_ascii_digit() {
            return Self::parse_iso(s);
        }

        let bytes = s.as_bytes();
        let offset: i64 = if bytes.len() == 1 {
            0
        } else {
            std::str::from_utf8(&bytes[1..])
                .map_err(|_| Self::Err::InvalidFirstChar)?
                .parse::<i64>()?
        };
        let today = Self::today();
        match bytes[0] as char {
            'd' | 'D' => today.shift_days(offset).ok_or(Self::Err::OutOfRange),
            'w' => today
                .week_start()
                .shift_weeks(offset)
                .ok_or(Self::Err::OutOfRange),
            'W' => today
                .week_end()
                .shift_weeks(offset)
                .ok_or(Self::Err::OutOfRange),
            _ => Err(Self::Err::InvalidFirstChar),
        }
    }
}
