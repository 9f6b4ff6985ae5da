use chrono::{DateTime, Datelike, TimeZone, Timelike};

use super::Locale;
use crate::capture::{Address, Coordinates};

const ES_WEEKDAYS: [&str; 7] = [
    "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
];
const ES_MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];

const EN_WEEKDAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];
const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const PT_WEEKDAYS: [&str; 7] = [
    "segunda-feira", "terça-feira", "quarta-feira", "quinta-feira", "sexta-feira", "sábado",
    "domingo",
];
const PT_MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

/// Full date with short time, in the time zone carried by `at`.
pub fn format_datetime<Tz: TimeZone>(locale: Locale, at: &DateTime<Tz>) -> String {
    let weekday = at.weekday().num_days_from_monday() as usize;
    let month = at.month0() as usize;
    let (day, year) = (at.day(), at.year());
    match locale {
        Locale::EsAr => format!(
            "{}, {} de {} de {}, {:02}:{:02}",
            ES_WEEKDAYS[weekday],
            day,
            ES_MONTHS[month],
            year,
            at.hour(),
            at.minute()
        ),
        Locale::EnUs => {
            let (pm, hour) = at.hour12();
            format!(
                "{}, {} {}, {} at {}:{:02} {}",
                EN_WEEKDAYS[weekday],
                EN_MONTHS[month],
                day,
                year,
                hour,
                at.minute(),
                if pm { "PM" } else { "AM" }
            )
        }
        Locale::PtBr => format!(
            "{}, {} de {} de {} às {:02}:{:02}",
            PT_WEEKDAYS[weekday],
            day,
            PT_MONTHS[month],
            year,
            at.hour(),
            at.minute()
        ),
    }
}

pub fn format_coords(coords: Coordinates) -> String {
    format!(
        "Lat {:.6} · Lon {:.6}",
        coords.latitude, coords.longitude
    )
}

/// Non-empty city, region and country joined with ", ", or "—".
pub fn format_place(address: &Address) -> String {
    let parts: Vec<&str> = [&address.city, &address.region, &address.country]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        "—".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn afternoon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 14, 5, 0)
            .single()
            .unwrap()
    }

    #[test]
    fn formats_full_date_per_locale() {
        let at = afternoon();
        assert_eq!(
            format_datetime(Locale::EsAr, &at),
            "lunes, 19 de octubre de 2026, 14:05"
        );
        assert_eq!(
            format_datetime(Locale::EnUs, &at),
            "Monday, October 19, 2026 at 2:05 PM"
        );
        assert_eq!(
            format_datetime(Locale::PtBr, &at),
            "segunda-feira, 19 de outubro de 2026 às 14:05"
        );
    }

    #[test]
    fn uses_the_carried_time_zone() {
        let buenos_aires = FixedOffset::west_opt(3 * 3600).unwrap();
        let at = afternoon().with_timezone(&buenos_aires);
        assert_eq!(
            format_datetime(Locale::EsAr, &at),
            "lunes, 19 de octubre de 2026, 11:05"
        );
    }

    #[test]
    fn midnight_is_twelve_am_in_english() {
        let at = Utc.with_ymd_and_hms(2026, 1, 4, 0, 7, 0).single().unwrap();
        assert_eq!(
            format_datetime(Locale::EnUs, &at),
            "Sunday, January 4, 2026 at 12:07 AM"
        );
    }

    #[test]
    fn coords_have_six_decimals() {
        let coords = Coordinates::new(-34.6037, -58.3816);
        assert_eq!(format_coords(coords), "Lat -34.603700 · Lon -58.381600");
    }

    #[test]
    fn place_skips_missing_parts() {
        let address = Address {
            city: Some("Rosario".into()),
            region: None,
            country: Some("Argentina".into()),
        };
        assert_eq!(format_place(&address), "Rosario, Argentina");

        let blank = Address {
            city: Some(" ".into()),
            ..Address::default()
        };
        assert_eq!(format_place(&blank), "—");
        assert_eq!(format_place(&Address::default()), "—");
    }
}
