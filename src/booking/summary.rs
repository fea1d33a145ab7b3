use serde::Serialize;

use crate::booking::selection::BookingSelection;
use crate::catalog::Catalog;
use crate::format::{self, Locale};

/// Human-readable projection of a fully-populated selection, shown on the
/// review step and returned by a successful confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    pub service: String,
    pub facility: String,
    pub date: String,
    pub time: String,
}

/// Projects display labels for a complete selection.
///
/// Returns `None` while any field is unset. Catalog lookups that miss
/// produce blank labels rather than errors: the catalogs are closed and
/// ids originate from catalog iteration, so a miss cannot happen through
/// the supported entry points.
pub fn summarize(
    selection: &BookingSelection,
    catalog: &Catalog,
    locale: Locale,
) -> Option<BookingSummary> {
    let service = selection.service?;
    let facility_id = selection.facility.as_deref()?;
    let date = selection.date?;
    let time = selection.time?;

    Some(BookingSummary {
        service: catalog
            .service(service)
            .map(|option| option.title.clone())
            .unwrap_or_default(),
        facility: catalog
            .facility(facility_id)
            .map(|option| option.name.clone())
            .unwrap_or_default(),
        date: format::long_date(date, locale),
        time: format::time_label(time),
    })
}
