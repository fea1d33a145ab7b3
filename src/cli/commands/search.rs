use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::{io, output};
use crate::services::{DirectoryFilter, DirectoryService};

/// `search [texto] [--kind <k>]`: the facility directory.
///
/// Unlike the booking commands this works without a session, matching the
/// public search screen.
pub fn search(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (query, filter) = parse_args(args)?;

    let results = DirectoryService::search(&context.catalog, &query, filter);
    output::section("Unidades de atendimento");
    if results.is_empty() {
        io::print_info("Nenhuma unidade encontrada.");
        return Ok(());
    }

    for facility in results {
        io::print_info(format!(
            "[{}] {} ({}) · ★ {:.1} · {}",
            facility.id,
            facility.name,
            facility.kind.label(),
            facility.rating,
            facility.distance
        ));
        io::print_info(format!("    {} · {} · {}", facility.address, facility.phone, facility.hours));
        io::print_info(format!("    {}", facility.specialties.join(", ")));
    }
    Ok(())
}

fn parse_args(args: &[&str]) -> Result<(String, DirectoryFilter), CommandError> {
    let mut query_terms: Vec<&str> = Vec::new();
    let mut filter = DirectoryFilter::All;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if *arg == "--kind" {
            let value = iter.next().ok_or_else(|| {
                CommandError::InvalidArguments("`--kind` requer um valor".into())
            })?;
            filter = DirectoryFilter::parse(value).ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "Filtro `{}` desconhecido (opções: todos, hospital, clinica, laboratorio)",
                    value
                ))
            })?;
        } else {
            query_terms.push(arg);
        }
    }

    Ok((query_terms.join(" "), filter))
}
