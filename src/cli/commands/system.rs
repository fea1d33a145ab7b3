use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::menus::{MainMenu, MenuError};
use crate::cli::{help as help_screen, io};
use crate::format::Locale;
use crate::utils::build_info;

/// `home`: full-screen menu over the registered commands.
pub fn home(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode != CliMode::Interactive {
        io::print_info("O menu está disponível apenas no modo interativo.");
        return Ok(());
    }

    let banner = match context.session.current() {
        Some(patient) => format!("Olá, {}! Como podemos ajudá-lo hoje?", patient.name),
        None => "Bem-vindo! Entre na sua conta para agendar.".to_string(),
    };

    let selected = match MainMenu::new().show(&banner) {
        Ok(selected) => selected,
        Err(MenuError::Interrupted) | Err(MenuError::EndOfInput) => return Ok(()),
        Err(MenuError::Io(err)) => return Err(CommandError::Io(err)),
    };

    if let Some(command) = selected {
        match context.dispatch(&command, &command, &[])? {
            crate::cli::core::LoopControl::Exit => {
                context.running = false;
            }
            crate::cli::core::LoopControl::Continue => {}
        }
    }
    Ok(())
}

/// `config [locale <tag>]`.
pub fn config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            io::print_info(format!("locale: {}", context.config.locale));
            io::print_info(format!(
                "config file: {}",
                context.config_manager.path().display()
            ));
            Ok(())
        }
        ["locale", tag] => {
            let locale = match *tag {
                "pt-BR" | "en-US" => Locale::from_tag(tag),
                _ => {
                    return Err(CommandError::InvalidArguments(
                        "Locales suportados: pt-BR, en-US".into(),
                    ))
                }
            };
            context.config.locale = locale.tag().to_string();
            context.persist_config()?;
            context.wizard.set_locale(locale);
            io::print_success(format!("Locale definido para {}.", locale.tag()));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "Usage: config [locale <pt-BR|en-US>]".into(),
        )),
    }
}

/// `help [comando]`.
pub fn help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    help_screen::show(&context.registry, args.first().copied());
    Ok(())
}

/// `version`.
pub fn version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info(build_info::full_report());
    Ok(())
}

/// `exit`.
pub fn exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info("Até logo!");
    Err(CommandError::ExitRequested)
}
