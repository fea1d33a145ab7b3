use booking_core::{
    catalog::{seed_appointments, Catalog},
    domain::{AppointmentStatus, FacilityKind},
    services::{AppointmentService, DirectoryFilter, DirectoryService},
};

#[test]
fn seed_agenda_partitions_into_tabs() {
    let agenda = seed_appointments();
    let upcoming = AppointmentService::upcoming(&agenda);
    let history = AppointmentService::history(&agenda);

    assert_eq!(upcoming.len(), 2);
    assert_eq!(history.len(), 2);
    assert!(upcoming
        .iter()
        .all(|a| a.status.is_upcoming()));
    assert!(history.iter().all(|a| !a.status.is_upcoming()));
}

#[test]
fn cancelling_an_upcoming_appointment_updates_both_tabs() {
    let mut agenda = seed_appointments();
    AppointmentService::cancel(&mut agenda, "1").expect("cancel upcoming");

    let cancelled = agenda
        .iter()
        .find(|a| a.id == "1")
        .expect("entry still present");
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
    assert_eq!(AppointmentService::upcoming(&agenda).len(), 1);
    assert_eq!(AppointmentService::history(&agenda).len(), 3);
}

#[test]
fn completed_appointments_cannot_be_cancelled() {
    let mut agenda = seed_appointments();
    let err = AppointmentService::cancel(&mut agenda, "3").expect_err("history is immutable");
    assert!(err.to_string().contains("futuros"));
}

#[test]
fn directory_search_matches_names_and_specialties() {
    let catalog = Catalog::default();

    let by_name = DirectoryService::search(&catalog, "santa", DirectoryFilter::All);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Hospital Santa Maria");

    let by_specialty = DirectoryService::search(&catalog, "dermatologia", DirectoryFilter::All);
    assert_eq!(by_specialty.len(), 1);

    let labs = DirectoryService::search(
        &catalog,
        "",
        DirectoryFilter::Kind(FacilityKind::Laboratory),
    );
    assert_eq!(labs.len(), 1);
    assert_eq!(labs[0].name, "Laboratório Diagnóstica");

    let none = DirectoryService::search(&catalog, "oncologia", DirectoryFilter::All);
    assert!(none.is_empty());
}
