use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::{io, output};
use crate::domain::Appointment;
use crate::format;
use crate::services::AppointmentService;
use crate::time::{Clock, SystemClock};

/// `appointments [upcoming | history | cancel <id>]`.
pub fn appointments(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_session()?;

    match args {
        [] | ["upcoming"] => {
            let entries = AppointmentService::upcoming(&context.appointments);
            render_tab(context, "Próximos agendamentos", &entries, true);
            Ok(())
        }
        ["history"] => {
            let entries = AppointmentService::history(&context.appointments);
            render_tab(context, "Histórico", &entries, false);
            Ok(())
        }
        ["cancel", id] => cancel(context, id),
        _ => Err(CommandError::InvalidArguments(
            "Usage: appointments [upcoming | history | cancel <id>]".into(),
        )),
    }
}

fn cancel(context: &mut ShellContext, id: &str) -> CommandResult {
    let title = context
        .appointments
        .iter()
        .find(|appointment| appointment.id == id)
        .map(|appointment| appointment.title.clone());
    if let Some(title) = title {
        let prompt = format!("Cancelar `{}`?", title);
        if !context.confirm_or_default(&prompt, true)? {
            io::print_info("Agendamento mantido.");
            return Ok(());
        }
    }
    AppointmentService::cancel(&mut context.appointments, id)?;
    io::print_success("Agendamento cancelado.");
    Ok(())
}

fn render_tab(context: &ShellContext, title: &str, entries: &[&Appointment], upcoming: bool) {
    output::section(title);
    if entries.is_empty() {
        let message = if upcoming {
            "Nenhum compromisso próximo."
        } else {
            "Sem registros anteriores."
        };
        io::print_info(message);
        return;
    }

    let today = SystemClock.today();
    let locale = context.locale();
    for appointment in entries {
        io::print_info(format!(
            "[{}] {} · {} · {} {} · {}",
            appointment.id,
            appointment.title,
            appointment.status.label(),
            format::short_date(appointment.date, today, locale),
            format::time_label(appointment.time),
            appointment.facility
        ));
        if let Some(doctor) = &appointment.doctor {
            let specialty = appointment.specialty.as_deref().unwrap_or("");
            io::print_info(format!("    {} · {}", doctor, specialty));
        }
        io::print_info(format!("    {}", appointment.address));
    }
    if upcoming {
        io::print_hint("Use `appointments cancel <id>` para desmarcar.");
    }
}
