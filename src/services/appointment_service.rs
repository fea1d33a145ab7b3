use crate::domain::{Appointment, AppointmentStatus};

use super::{ServiceError, ServiceResult};

pub struct AppointmentService;

impl AppointmentService {
    /// Scheduled and confirmed entries, soonest first.
    pub fn upcoming(agenda: &[Appointment]) -> Vec<&Appointment> {
        let mut entries: Vec<_> = agenda.iter().filter(|a| a.is_upcoming()).collect();
        entries.sort_by_key(|a| (a.date, a.time));
        entries
    }

    /// Completed and cancelled entries, most recent first.
    pub fn history(agenda: &[Appointment]) -> Vec<&Appointment> {
        let mut entries: Vec<_> = agenda.iter().filter(|a| !a.is_upcoming()).collect();
        entries.sort_by_key(|a| std::cmp::Reverse((a.date, a.time)));
        entries
    }

    /// Cancels an upcoming appointment in place. History entries and
    /// unknown ids are rejected.
    pub fn cancel(agenda: &mut [Appointment], id: &str) -> ServiceResult<()> {
        let appointment = agenda
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| ServiceError::Invalid(format!("Agendamento `{}` não encontrado", id)))?;
        if !appointment.is_cancellable() {
            return Err(ServiceError::Invalid(
                "Somente agendamentos futuros podem ser cancelados".into(),
            ));
        }
        appointment.status = AppointmentStatus::Cancelled;
        tracing::info!(id, "appointment cancelled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_appointments;

    #[test]
    fn upcoming_is_sorted_soonest_first() {
        let agenda = seed_appointments();
        let upcoming = AppointmentService::upcoming(&agenda);
        let ids: Vec<_> = upcoming.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn history_is_sorted_most_recent_first() {
        let agenda = seed_appointments();
        let history = AppointmentService::history(&agenda);
        let ids: Vec<_> = history.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["3", "4"]);
    }

    #[test]
    fn cancel_moves_entry_to_history() {
        let mut agenda = seed_appointments();
        AppointmentService::cancel(&mut agenda, "2").unwrap();
        assert_eq!(AppointmentService::upcoming(&agenda).len(), 1);
        assert_eq!(AppointmentService::history(&agenda).len(), 3);
    }

    #[test]
    fn cancel_rejects_history_and_unknown_ids() {
        let mut agenda = seed_appointments();
        assert!(AppointmentService::cancel(&mut agenda, "3").is_err());
        assert!(AppointmentService::cancel(&mut agenda, "99").is_err());
    }
}
