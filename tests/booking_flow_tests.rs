use booking_core::{
    booking::{BookingError, BookingSelection, BookingWizard},
    catalog::Catalog,
    domain::ServiceKind,
};
use chrono::{NaiveDate, NaiveTime};
use insta::assert_snapshot;

fn wizard() -> BookingWizard {
    BookingWizard::new(Catalog::default())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

#[test]
fn step_tracks_contiguously_set_fields() {
    let mut wizard = wizard();
    assert_eq!(wizard.step().number(), 1);

    wizard.select_service(ServiceKind::Consultation);
    assert_eq!(wizard.step().number(), 2);

    assert!(wizard.select_facility("2"));
    assert_eq!(wizard.step().number(), 3);
    assert_eq!(wizard.selection().date, None);
    assert_eq!(wizard.selection().time, None);

    assert!(wizard.select_date(date(2025, 9, 27)));
    assert_eq!(wizard.step().number(), 4);
    assert_eq!(wizard.selection().time, None);

    assert!(wizard.select_time(time(10, 0)));
    assert_eq!(wizard.step().number(), 5);
}

#[test]
fn full_scenario_confirms_and_cycles_back() {
    let mut wizard = wizard();
    wizard.select_service(ServiceKind::Consultation);
    assert!(wizard.select_facility("2"));
    assert!(wizard.select_date(date(2025, 9, 27)));
    assert!(wizard.select_time(time(10, 0)));

    let summary = wizard.confirm().expect("confirmation succeeds");
    assert_snapshot!(format!("{summary:#?}"), @r###"
    BookingSummary {
        service: "Consulta médica",
        facility: "Hospital Santa Maria",
        date: "sábado, 27 de setembro de 2025",
        time: "10:00",
    }
    "###);

    assert_eq!(wizard.step().number(), 1);
    assert_eq!(wizard.selection(), &BookingSelection::default());
}

#[test]
fn switching_service_resets_downstream_choices() {
    let mut wizard = wizard();
    wizard.select_service(ServiceKind::Exam);
    assert_eq!(wizard.step().number(), 2);

    wizard.select_service(ServiceKind::Procedure);
    assert_eq!(wizard.step().number(), 2);
    assert_eq!(wizard.selection().facility, None);
    assert_eq!(wizard.selection().date, None);
    assert_eq!(wizard.selection().time, None);
}

#[test]
fn upstream_change_invalidates_later_steps() {
    let mut wizard = wizard();
    wizard.select_service(ServiceKind::Consultation);
    assert!(wizard.select_facility("1"));
    assert!(wizard.select_date(date(2025, 9, 25)));
    assert!(wizard.select_time(time(8, 0)));
    assert_eq!(wizard.step().number(), 5);

    // Picking another facility drops the date and time.
    assert!(wizard.select_facility("3"));
    assert_eq!(wizard.step().number(), 3);
    assert_eq!(wizard.selection().date, None);
    assert_eq!(wizard.selection().time, None);

    // Picking a date again only drops the time.
    assert!(wizard.select_date(date(2025, 9, 30)));
    assert!(wizard.select_time(time(16, 0)));
    assert!(wizard.select_date(date(2025, 10, 1)));
    assert_eq!(wizard.step().number(), 4);
}

#[test]
fn confirm_requires_every_field() {
    let mut wizard = wizard();
    assert_eq!(wizard.confirm(), Err(BookingError::IncompleteSelection));

    wizard.select_service(ServiceKind::Consultation);
    assert!(wizard.select_facility("1"));
    assert!(wizard.select_date(date(2025, 9, 26)));
    let snapshot = wizard.selection().clone();

    assert_eq!(wizard.confirm(), Err(BookingError::IncompleteSelection));
    assert_eq!(wizard.selection(), &snapshot, "failed confirm must not touch state");
}

#[test]
fn summary_is_only_available_on_review_step() {
    let mut wizard = wizard();
    assert!(wizard.summary().is_none());

    wizard.select_service(ServiceKind::Exam);
    assert!(wizard.select_facility("1"));
    assert!(wizard.select_date(date(2025, 9, 25)));
    assert!(wizard.summary().is_none());

    assert!(wizard.select_time(time(14, 0)));
    let summary = wizard.summary().expect("review step has a summary");
    assert_eq!(summary.service, "Exames e diagnósticos");
    assert_eq!(summary.facility, "Hospital São Lucas");
}
