use chrono::{NaiveDate, NaiveTime};
use dialoguer::Select;

use crate::booking::{BookingError, BookingSummary, WizardStep};
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::{io, output};
use crate::domain::{Displayable, ServiceKind};
use crate::format;
use crate::time::{Clock, SystemClock};

/// `book`: the five-step booking wizard.
///
/// Without arguments it runs the guided flow (interactive mode only); with
/// a subcommand it applies a single transition, which is what script mode
/// and power users drive directly.
pub fn book(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_session()?;

    match args {
        [] => {
            if context.mode == CliMode::Interactive {
                guided_flow(context)
            } else {
                print_status(context);
                Ok(())
            }
        }
        ["service", id] => select_service(context, id),
        ["facility", id] => select_facility(context, id),
        ["date", value] => select_date(context, value),
        ["time", value] => select_time(context, value),
        ["status"] => {
            print_status(context);
            Ok(())
        }
        ["summary"] => match context.wizard.summary() {
            Some(summary) => {
                print_summary(&summary);
                Ok(())
            }
            None => Err(CommandError::Message(
                BookingError::IncompleteSelection.to_string(),
            )),
        },
        ["confirm"] => confirm(context),
        ["restart"] => {
            context.wizard.restart();
            io::print_info("Agendamento reiniciado.");
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "Usage: book [service <id> | facility <id> | date <YYYY-MM-DD> | time <HH:MM> | status | summary | confirm | restart]"
                .into(),
        )),
    }
}

fn select_service(context: &mut ShellContext, id: &str) -> CommandResult {
    let kind = ServiceKind::parse(id).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "Serviço `{}` não existe (opções: consulta, exame, procedimento)",
            id
        ))
    })?;
    context.wizard.select_service(kind);
    report_progress(context);
    Ok(())
}

fn select_facility(context: &mut ShellContext, id: &str) -> CommandResult {
    let known = context
        .catalog
        .facility(id)
        .filter(|facility| facility.is_bookable())
        .is_some();
    if !known {
        return Err(CommandError::InvalidArguments(format!(
            "Unidade `{}` não está disponível para agendamento",
            id
        )));
    }
    if !context.wizard.select_facility(id) {
        return Err(CommandError::Message(
            "Escolha o tipo de serviço antes da unidade (`book service <id>`).".into(),
        ));
    }
    report_progress(context);
    Ok(())
}

fn select_date(context: &mut ShellContext, value: &str) -> CommandResult {
    let date = parse_date(value)?;
    if !context.catalog.has_date(date) {
        return Err(CommandError::InvalidArguments(format!(
            "Data `{}` fora da agenda disponível",
            value
        )));
    }
    if !context.wizard.select_date(date) {
        return Err(CommandError::Message(
            "Escolha a unidade antes da data (`book facility <id>`).".into(),
        ));
    }
    report_progress(context);
    Ok(())
}

fn select_time(context: &mut ShellContext, value: &str) -> CommandResult {
    let time = parse_time(value)?;
    if !context.catalog.has_time(time) {
        return Err(CommandError::InvalidArguments(format!(
            "Horário `{}` indisponível",
            value
        )));
    }
    if !context.wizard.select_time(time) {
        return Err(CommandError::Message(
            "Escolha a data antes do horário (`book date <YYYY-MM-DD>`).".into(),
        ));
    }
    report_progress(context);
    Ok(())
}

fn confirm(context: &mut ShellContext) -> CommandResult {
    match context.wizard.confirm() {
        Ok(summary) => {
            print_summary(&summary);
            io::print_success("Agendamento confirmado");
            io::print_info("Você receberá os detalhes no seu e-mail cadastrado.");
            Ok(())
        }
        Err(err @ BookingError::IncompleteSelection) => Err(CommandError::Message(err.to_string())),
    }
}

fn report_progress(context: &ShellContext) {
    let step = context.wizard.step();
    io::print_success(format!(
        "Passo {} de {} — {}",
        step.number(),
        WizardStep::COUNT,
        step.title()
    ));
}

fn print_status(context: &ShellContext) {
    let wizard = &context.wizard;
    let selection = wizard.selection();
    let step = wizard.step();
    let locale = context.locale();

    output::section("Novo agendamento");
    io::print_info(format!("Passo {} de {}", step.number(), WizardStep::COUNT));

    let service = selection
        .service
        .and_then(|kind| context.catalog.service(kind))
        .map(|option| option.title.clone());
    io::print_info(format!("Serviço:  {}", service.unwrap_or_else(|| "—".into())));

    let facility = selection
        .facility
        .as_deref()
        .and_then(|id| context.catalog.facility(id))
        .map(|option| option.name.clone());
    io::print_info(format!("Unidade:  {}", facility.unwrap_or_else(|| "—".into())));

    let date = selection
        .date
        .map(|date| format::long_date(date, locale))
        .unwrap_or_else(|| "—".into());
    io::print_info(format!("Data:     {}", date));

    let time = selection
        .time
        .map(format::time_label)
        .unwrap_or_else(|| "—".into());
    io::print_info(format!("Horário:  {}", time));

    if step == WizardStep::Review {
        io::print_hint("Tudo pronto. Use `book confirm` para finalizar.");
    }
}

fn print_summary(summary: &BookingSummary) {
    output::section("Resumo do agendamento");
    io::print_info(format!("Serviço:  {}", summary.service));
    io::print_info(format!("Local:    {}", summary.facility));
    io::print_info(format!("Data:     {}", summary.date));
    io::print_info(format!("Horário:  {}", summary.time));
}

/// Dialog-driven walk through the five steps. ESC at any picker leaves the
/// wizard as-is and returns to the shell.
fn guided_flow(context: &mut ShellContext) -> CommandResult {
    let today = SystemClock.today();
    let locale = context.locale();

    loop {
        match context.wizard.step() {
            WizardStep::Service => {
                let titles: Vec<String> = context
                    .catalog
                    .services()
                    .iter()
                    .map(|option| option.display_label())
                    .collect();
                let Some(index) = pick(context, WizardStep::Service.title(), &titles)? else {
                    break;
                };
                let kind = context.catalog.services()[index].kind;
                context.wizard.select_service(kind);
            }
            WizardStep::Facility => {
                let facilities: Vec<_> = context.catalog.bookable_facilities().collect();
                let labels: Vec<String> =
                    facilities.iter().map(|f| f.display_label()).collect();
                let Some(index) = pick(context, WizardStep::Facility.title(), &labels)? else {
                    break;
                };
                let id = facilities[index].id.clone();
                context.wizard.select_facility(&id);
            }
            WizardStep::Date => {
                let labels: Vec<String> = context
                    .catalog
                    .dates()
                    .iter()
                    .map(|&date| format::short_date(date, today, locale))
                    .collect();
                let Some(index) = pick(context, WizardStep::Date.title(), &labels)? else {
                    break;
                };
                let date = context.catalog.dates()[index];
                context.wizard.select_date(date);
            }
            WizardStep::Time => {
                let labels: Vec<String> = context
                    .catalog
                    .times()
                    .iter()
                    .map(|&time| format::time_label(time))
                    .collect();
                let Some(index) = pick(context, WizardStep::Time.title(), &labels)? else {
                    break;
                };
                let time = context.catalog.times()[index];
                context.wizard.select_time(time);
            }
            WizardStep::Review => {
                if let Some(summary) = context.wizard.summary() {
                    print_summary(&summary);
                }
                let actions = [
                    "Confirmar agendamento".to_string(),
                    "Recomeçar".to_string(),
                    "Voltar ao shell".to_string(),
                ];
                let choice = pick(context, WizardStep::Review.title(), &actions)?;
                match choice {
                    Some(0) => return confirm(context),
                    Some(1) => context.wizard.restart(),
                    _ => break,
                }
            }
        }
    }

    io::print_info("Agendamento guardado no passo atual. Retome com `book`.");
    Ok(())
}

fn pick(
    context: &ShellContext,
    title: &str,
    options: &[String],
) -> Result<Option<usize>, CommandError> {
    let step = context.wizard.step();
    let prompt = format!("[{}/{}] {}", step.number(), WizardStep::COUNT, title);
    Select::with_theme(&context.theme)
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact_opt()
        .map_err(CommandError::from)
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("Data inválida `{}` (use YYYY-MM-DD)", input))
    })
}

pub(crate) fn parse_time(input: &str) -> Result<NaiveTime, CommandError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|_| {
        CommandError::InvalidArguments(format!("Horário inválido `{}` (use HH:MM)", input))
    })
}
