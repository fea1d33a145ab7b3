//! Locale-aware display formatting for dates and times.
//!
//! The app ships with Brazilian Portuguese as the default locale, matching
//! the catalog content, with an English fallback for other environments.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    PtBr,
    EnUs,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    /// Resolves a BCP-47-ish tag; unknown tags fall back to the default.
    pub fn from_tag(tag: &str) -> Locale {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" => Locale::EnUs,
            _ => Locale::PtBr,
        }
    }
}

const WEEKDAYS_PT: [(&str, &str); 7] = [
    ("segunda-feira", "seg"),
    ("terça-feira", "ter"),
    ("quarta-feira", "qua"),
    ("quinta-feira", "qui"),
    ("sexta-feira", "sex"),
    ("sábado", "sáb"),
    ("domingo", "dom"),
];

const MONTHS_PT: [(&str, &str); 12] = [
    ("janeiro", "jan"),
    ("fevereiro", "fev"),
    ("março", "mar"),
    ("abril", "abr"),
    ("maio", "mai"),
    ("junho", "jun"),
    ("julho", "jul"),
    ("agosto", "ago"),
    ("setembro", "set"),
    ("outubro", "out"),
    ("novembro", "nov"),
    ("dezembro", "dez"),
];

const WEEKDAYS_EN: [(&str, &str); 7] = [
    ("Monday", "Mon"),
    ("Tuesday", "Tue"),
    ("Wednesday", "Wed"),
    ("Thursday", "Thu"),
    ("Friday", "Fri"),
    ("Saturday", "Sat"),
    ("Sunday", "Sun"),
];

const MONTHS_EN: [(&str, &str); 12] = [
    ("January", "Jan"),
    ("February", "Feb"),
    ("March", "Mar"),
    ("April", "Apr"),
    ("May", "May"),
    ("June", "Jun"),
    ("July", "Jul"),
    ("August", "Aug"),
    ("September", "Sep"),
    ("October", "Oct"),
    ("November", "Nov"),
    ("December", "Dec"),
];

fn weekday_names(locale: Locale, weekday: Weekday) -> (&'static str, &'static str) {
    let index = weekday.num_days_from_monday() as usize;
    match locale {
        Locale::PtBr => WEEKDAYS_PT[index],
        Locale::EnUs => WEEKDAYS_EN[index],
    }
}

fn month_names(locale: Locale, month: u32) -> (&'static str, &'static str) {
    let index = (month.clamp(1, 12) - 1) as usize;
    match locale {
        Locale::PtBr => MONTHS_PT[index],
        Locale::EnUs => MONTHS_EN[index],
    }
}

/// Long-form date used in the booking summary, e.g.
/// `sábado, 27 de setembro de 2025`.
pub fn long_date(date: NaiveDate, locale: Locale) -> String {
    let (weekday, _) = weekday_names(locale, date.weekday());
    let (month, _) = month_names(locale, date.month());
    match locale {
        Locale::PtBr => format!(
            "{}, {:02} de {} de {}",
            weekday,
            date.day(),
            month,
            date.year()
        ),
        Locale::EnUs => format!("{}, {} {}, {}", weekday, month, date.day(), date.year()),
    }
}

/// Compact date used on picker cards, with relative labels for the current
/// and next day, e.g. `Hoje`, `Amanhã`, `sáb., 27 set`.
pub fn short_date(date: NaiveDate, today: NaiveDate, locale: Locale) -> String {
    if date == today {
        return match locale {
            Locale::PtBr => "Hoje".into(),
            Locale::EnUs => "Today".into(),
        };
    }
    if date == today.succ_opt().unwrap_or(today) {
        return match locale {
            Locale::PtBr => "Amanhã".into(),
            Locale::EnUs => "Tomorrow".into(),
        };
    }
    let (_, weekday) = weekday_names(locale, date.weekday());
    let (_, month) = month_names(locale, date.month());
    format!("{}., {:02} {}", weekday, date.day(), month)
}

/// 24-hour slot label, e.g. `10:00`.
pub fn time_label(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn long_date_in_portuguese() {
        assert_eq!(
            long_date(date(2025, 9, 27), Locale::PtBr),
            "sábado, 27 de setembro de 2025"
        );
        assert_eq!(
            long_date(date(2025, 9, 25), Locale::PtBr),
            "quinta-feira, 25 de setembro de 2025"
        );
    }

    #[test]
    fn long_date_in_english() {
        assert_eq!(
            long_date(date(2025, 10, 1), Locale::EnUs),
            "Wednesday, October 1, 2025"
        );
    }

    #[test]
    fn short_date_uses_relative_labels() {
        let today = date(2025, 9, 25);
        assert_eq!(short_date(today, today, Locale::PtBr), "Hoje");
        assert_eq!(short_date(date(2025, 9, 26), today, Locale::PtBr), "Amanhã");
        assert_eq!(
            short_date(date(2025, 9, 27), today, Locale::PtBr),
            "sáb., 27 set"
        );
    }

    #[test]
    fn time_labels_are_zero_padded() {
        assert_eq!(
            time_label(NaiveTime::from_hms_opt(8, 0, 0).unwrap()),
            "08:00"
        );
    }
}
