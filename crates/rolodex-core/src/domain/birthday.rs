use crate::error::CoreError;
use chrono::NaiveDate;
use std::fmt;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str, today: NaiveDate) -> Result<Self, CoreError> {
        validate_birthday(raw, today)
    }

    /// Rebuilds a previously accepted birthday. The not-in-the-future rule is
    /// only enforced for user input.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

pub fn validate_birthday(raw: &str, today: NaiveDate) -> Result<Birthday, CoreError> {
    let date = parse_day_month_year(raw)
        .ok_or_else(|| CoreError::InvalidDateFormat(raw.to_string()))?;
    if date > today {
        return Err(CoreError::BirthdayInFuture(raw.to_string()));
    }
    Ok(Birthday(date))
}

// DD.MM.YYYY with exact widths; chrono's %d/%m accept single digits.
fn parse_day_month_year(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
        return None;
    }
    let day = digits(&raw[0..2])?;
    let month = digits(&raw[3..5])?;
    let year = digits(&raw[6..10])?;
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

fn digits(part: &str) -> Option<u32> {
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
