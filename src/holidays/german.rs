//! German statutory public holidays.
//!
//! Holidays are derived from fixed calendar dates and the Gregorian Easter
//! date, with the state-specific rules of each Bundesland.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::EngineError;
use crate::models::PublicHoliday;

use super::HolidayCalendar;

/// A German holiday region.
///
/// The sixteen states use their two-letter codes. `BUND` selects only the
/// nationwide holidays, `AUGSBURG` is Bavaria plus the Augsburger
/// Friedensfest, and `ALL` matches a holiday of any state.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GermanRegion {
    /// Baden-Württemberg.
    BW,
    /// Bayern.
    BY,
    /// Berlin.
    BE,
    /// Brandenburg.
    BB,
    /// Bremen.
    HB,
    /// Hessen.
    HE,
    /// Hamburg.
    HH,
    /// Mecklenburg-Vorpommern.
    MV,
    /// Niedersachsen.
    NI,
    /// Nordrhein-Westfalen.
    NW,
    /// Rheinland-Pfalz.
    RP,
    /// Saarland.
    SL,
    /// Sachsen.
    SN,
    /// Sachsen-Anhalt.
    ST,
    /// Schleswig-Holstein.
    SH,
    /// Thüringen.
    TH,
    /// Nationwide holidays only.
    Bund,
    /// The city of Augsburg.
    Augsburg,
    /// Holidays of any region.
    All,
}

impl GermanRegion {
    /// Returns the region code as used in configuration.
    pub fn code(&self) -> &'static str {
        match self {
            GermanRegion::BW => "BW",
            GermanRegion::BY => "BY",
            GermanRegion::BE => "BE",
            GermanRegion::BB => "BB",
            GermanRegion::HB => "HB",
            GermanRegion::HE => "HE",
            GermanRegion::HH => "HH",
            GermanRegion::MV => "MV",
            GermanRegion::NI => "NI",
            GermanRegion::NW => "NW",
            GermanRegion::RP => "RP",
            GermanRegion::SL => "SL",
            GermanRegion::SN => "SN",
            GermanRegion::ST => "ST",
            GermanRegion::SH => "SH",
            GermanRegion::TH => "TH",
            GermanRegion::Bund => "BUND",
            GermanRegion::Augsburg => "AUGSBURG",
            GermanRegion::All => "ALL",
        }
    }

    fn is_any_of(self, regions: &[GermanRegion]) -> bool {
        self == GermanRegion::All || regions.contains(&self)
    }
}

impl fmt::Display for GermanRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for GermanRegion {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let region = match s.trim().to_ascii_uppercase().as_str() {
            "BW" => GermanRegion::BW,
            "BY" => GermanRegion::BY,
            "BE" => GermanRegion::BE,
            "BB" => GermanRegion::BB,
            "HB" => GermanRegion::HB,
            "HE" => GermanRegion::HE,
            "HH" => GermanRegion::HH,
            "MV" => GermanRegion::MV,
            "NI" => GermanRegion::NI,
            "NW" => GermanRegion::NW,
            "RP" => GermanRegion::RP,
            "SL" => GermanRegion::SL,
            "SN" => GermanRegion::SN,
            "ST" => GermanRegion::ST,
            "SH" => GermanRegion::SH,
            "TH" => GermanRegion::TH,
            "BUND" => GermanRegion::Bund,
            "AUGSBURG" => GermanRegion::Augsburg,
            "ALL" => GermanRegion::All,
            _ => {
                return Err(EngineError::UnknownRegion {
                    code: s.to_string(),
                });
            }
        };
        Ok(region)
    }
}

/// Computes Easter Sunday of `year` in the Gregorian calendar.
///
/// # Example
///
/// ```
/// use overtime_engine::holidays::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2024), NaiveDate::from_ymd_opt(2024, 3, 31));
/// assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20));
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Wednesday before 23 November.
fn repentance_day(year: i32) -> Option<NaiveDate> {
    let nov_22 = NaiveDate::from_ymd_opt(year, 11, 22)?;
    let wednesday = Weekday::Wed.num_days_from_monday();
    let days_back = (nov_22.weekday().num_days_from_monday() + 7 - wednesday) % 7;
    nov_22.checked_sub_signed(Duration::days(i64::from(days_back)))
}

/// The German statutory holiday calendar.
///
/// # Example
///
/// ```
/// use overtime_engine::holidays::{GermanHolidays, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let calendar = GermanHolidays;
/// // Epiphany is a holiday in Bavaria but not in Berlin
/// let epiphany = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// assert!(calendar.is_holiday(epiphany, "BY"));
/// assert!(!calendar.is_holiday(epiphany, "BE"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanHolidays;

impl GermanHolidays {
    /// Lists the holidays of `year` in `region`, ordered by date.
    pub fn holidays(&self, year: i32, region: GermanRegion) -> Vec<(NaiveDate, &'static str)> {
        use GermanRegion::*;

        let mut holidays: Vec<(NaiveDate, &'static str)> = Vec::new();
        let mut fixed = |month: u32, day: u32, name: &'static str| {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                holidays.push((date, name));
            }
        };

        fixed(1, 1, "Neujahrstag");
        if region.is_any_of(&[BW, BY, ST, Augsburg]) {
            fixed(1, 6, "Heilige Drei Könige");
        }
        if (region.is_any_of(&[BE]) && year >= 2019) || (region.is_any_of(&[MV]) && year >= 2023)
        {
            fixed(3, 8, "Internationaler Frauentag");
        }
        fixed(5, 1, "Tag der Arbeit");
        if region.is_any_of(&[Augsburg]) {
            fixed(8, 8, "Augsburger Friedensfest");
        }
        if region.is_any_of(&[SL, BY, Augsburg]) {
            fixed(8, 15, "Mariä Himmelfahrt");
        }
        if region.is_any_of(&[TH]) && year >= 2019 {
            fixed(9, 20, "Weltkindertag");
        }
        fixed(10, 3, "Tag der Deutschen Einheit");
        let reformation = year == 2017
            || region.is_any_of(&[BB, MV, SN, ST, TH])
            || (region.is_any_of(&[HB, HH, NI, SH]) && year >= 2018);
        if reformation {
            fixed(10, 31, "Reformationstag");
        }
        if region.is_any_of(&[BW, BY, NW, RP, SL, Augsburg]) {
            fixed(11, 1, "Allerheiligen");
        }
        fixed(12, 25, "1. Weihnachtsfeiertag");
        fixed(12, 26, "2. Weihnachtsfeiertag");

        if let Some(easter) = easter_sunday(year) {
            let mut movable = |offset: i64, name: &'static str| {
                if let Some(date) = easter.checked_add_signed(Duration::days(offset)) {
                    holidays.push((date, name));
                }
            };
            movable(-2, "Karfreitag");
            if region.is_any_of(&[BB]) {
                movable(0, "Ostersonntag");
            }
            movable(1, "Ostermontag");
            movable(39, "Christi Himmelfahrt");
            if region.is_any_of(&[BB]) {
                movable(49, "Pfingstsonntag");
            }
            movable(50, "Pfingstmontag");
            if region.is_any_of(&[BW, BY, HE, NW, RP, SL, Augsburg]) {
                movable(60, "Fronleichnam");
            }
        }

        if region.is_any_of(&[SN]) {
            if let Some(date) = repentance_day(year) {
                holidays.push((date, "Buß- und Bettag"));
            }
        }

        holidays.sort_by(|a, b| a.0.cmp(&b.0));
        holidays
    }
}

impl HolidayCalendar for GermanHolidays {
    fn is_holiday(&self, date: NaiveDate, region: &str) -> bool {
        match region.parse::<GermanRegion>() {
            Ok(region) => self
                .holidays(date.year(), region)
                .iter()
                .any(|(holiday, _)| *holiday == date),
            Err(_) => false,
        }
    }

    fn holidays_in_year(&self, year: i32, region: &str) -> Vec<PublicHoliday> {
        let Ok(parsed) = region.parse::<GermanRegion>() else {
            return Vec::new();
        };
        self.holidays(year, parsed)
            .into_iter()
            .map(|(date, name)| PublicHoliday {
                date,
                name: name.to_string(),
                region: parsed.code().to_string(),
            })
            .collect()
    }

    fn supports_region(&self, region: &str) -> bool {
        region.parse::<GermanRegion>().is_ok()
    }
}
