//! Core CLI loop state, dispatch, and shell context helpers.

use std::io;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;

use crate::booking::BookingWizard;
use crate::catalog::{seed_appointments, Catalog};
use crate::cli::io as cli_io;
use crate::cli::registry::CommandRegistry;
use crate::config::{Config, ConfigManager};
use crate::domain::{Appointment, Patient};
use crate::errors::CoreError;
use crate::format::Locale;
use crate::services::ServiceError;
use crate::session::SessionStore;
use crate::storage::JsonStorage;

use super::commands;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Faça login primeiro com `login` ou crie uma conta com `register`.")]
    NotSignedIn,
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(err) => CommandError::Core(err),
            ServiceError::Invalid(message) => CommandError::InvalidArguments(message),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("{0}")]
    Command(String),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

/// Shared CLI runtime state.
///
/// Owns the session store, the booking wizard, and the in-memory agenda for
/// the lifetime of the shell.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub session: SessionStore,
    pub catalog: Catalog,
    pub wizard: BookingWizard,
    pub appointments: Vec<Appointment>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let storage = JsonStorage::new_default()?;
        let config_manager = ConfigManager::with_base_dir(storage.base_dir().to_path_buf())?;
        let config = config_manager.load()?;
        let locale = Locale::from_tag(&config.locale);

        let mut session = SessionStore::new(Box::new(storage));
        let restored = session.restore()?;

        let catalog = Catalog::default();
        let wizard = BookingWizard::new(catalog.clone()).with_locale(locale);

        let context = ShellContext {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            session,
            catalog,
            wizard,
            appointments: seed_appointments(),
            last_command: None,
            running: true,
        };

        if restored && mode == CliMode::Interactive {
            if let Some(patient) = context.session.current() {
                cli_io::print_success(format!("Bem-vindo de volta, {}!", patient.name));
            }
        }

        Ok(context)
    }

    pub fn locale(&self) -> Locale {
        Locale::from_tag(&self.config.locale)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Gate for commands that only make sense with an active session.
    pub(crate) fn require_session(&self) -> Result<&Patient, CommandError> {
        self.session.current().ok_or(CommandError::NotSignedIn)
    }

    pub(crate) fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_hint(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    /// Interactive prompts are skipped in script mode; scripts are expected
    /// to pass explicit arguments instead.
    pub(crate) fn confirm_or_default(
        &self,
        prompt: &str,
        default: bool,
    ) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(default);
        }
        cli_io::confirm_action(&self.theme, prompt, default)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::NotSignedIn => {
                cli_io::print_error(CommandError::NotSignedIn.to_string());
                Ok(())
            }
            other => {
                cli_io::print_error(other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn prompt(&self) -> String {
        match self.session.current() {
            Some(patient) => format!("{}@booking> ", first_name(&patient.name).to_lowercase()),
            None => "booking> ".to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }
}

pub(crate) fn first_name(full: &str) -> &str {
    full.split_whitespace().next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::TempDir;

    // `BOOKING_CORE_HOME` is process-wide; keep context tests serialized.
    static ENV_GUARD: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn scripted_context(temp: &TempDir) -> ShellContext {
        std::env::set_var("BOOKING_CORE_HOME", temp.path());
        ShellContext::new(CliMode::Script).expect("shell context")
    }

    #[test]
    fn unknown_command_is_not_fatal() {
        let _guard = ENV_GUARD.lock().expect("env guard");
        let temp = TempDir::new().expect("temp dir");
        let mut context = scripted_context(&temp);
        let control = context.process_line("definitely-not-a-command").expect("ok");
        assert_eq!(control, LoopControl::Continue);
    }

    #[test]
    fn exit_command_requests_loop_exit() {
        let _guard = ENV_GUARD.lock().expect("env guard");
        let temp = TempDir::new().expect("temp dir");
        let mut context = scripted_context(&temp);
        let control = context.process_line("exit").expect("ok");
        assert_eq!(control, LoopControl::Exit);
    }

    #[test]
    fn session_gate_blocks_booking_commands() {
        let _guard = ENV_GUARD.lock().expect("env guard");
        let temp = TempDir::new().expect("temp dir");
        let mut context = scripted_context(&temp);
        let err = context
            .dispatch("book", "book", &["status"])
            .expect_err("requires session");
        assert!(matches!(err, CommandError::NotSignedIn));
    }

    #[test]
    fn login_then_book_flow_progresses() {
        let _guard = ENV_GUARD.lock().expect("env guard");
        let temp = TempDir::new().expect("temp dir");
        let mut context = scripted_context(&temp);
        for line in [
            "login teste@email.com 123456",
            "book service consulta",
            "book facility 2",
            "book date 2025-09-27",
            "book time 10:00",
        ] {
            context.process_line(line).expect("command runs");
        }
        assert_eq!(context.wizard.step().number(), 5);
        context.process_line("book confirm").expect("confirm");
        assert_eq!(context.wizard.step().number(), 1);
    }

    #[test]
    fn first_name_takes_leading_word() {
        assert_eq!(first_name("João Silva"), "João");
        assert_eq!(first_name(""), "");
    }
}
