use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::domain::Registration;

/// `login [email senha]`: prompts interactively when arguments are omitted.
pub fn login(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if context.session.is_signed_in() {
        io::print_info("Você já está conectado. Use `logout` para trocar de conta.");
        return Ok(());
    }

    let (email, password) = match args {
        [email, password] => (email.to_string(), password.to_string()),
        [] => {
            if context.mode == crate::cli::core::CliMode::Script {
                return Err(CommandError::InvalidArguments(
                    "Usage: login <email> <senha>".into(),
                ));
            }
            let email = io::prompt_text(&context.theme, "Email")?;
            let password = io::prompt_text(&context.theme, "Senha")?;
            (email, password)
        }
        _ => {
            return Err(CommandError::InvalidArguments(
                "Usage: login <email> <senha>".into(),
            ))
        }
    };

    let patient = context.session.sign_in(&email, &password)?;
    context.config.last_signed_in = Some(patient.email.clone());
    context.persist_config()?;
    io::print_success(format!("Olá, {}!", patient.name));
    Ok(())
}

/// `register [nome email telefone cpf senha [confirmação]]`.
pub fn register(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if context.session.is_signed_in() {
        io::print_info("Você já está conectado. Use `logout` antes de criar outra conta.");
        return Ok(());
    }

    let registration = match args {
        [] if context.mode == crate::cli::core::CliMode::Interactive => prompt_registration(context)?,
        [name, email, phone, document, password] => Registration {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            document: document.to_string(),
            password: password.to_string(),
            password_confirmation: password.to_string(),
        },
        [name, email, phone, document, password, confirmation] => Registration {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            document: document.to_string(),
            password: password.to_string(),
            password_confirmation: confirmation.to_string(),
        },
        _ => {
            return Err(CommandError::InvalidArguments(
                "Usage: register <nome> <email> <telefone> <cpf> <senha> [confirmação]".into(),
            ))
        }
    };

    let patient = context.session.sign_up(&registration)?;
    context.config.last_signed_in = Some(patient.email.clone());
    context.persist_config()?;
    io::print_success(format!("Conta criada. Bem-vindo, {}!", patient.name));
    Ok(())
}

fn prompt_registration(context: &ShellContext) -> Result<Registration, CommandError> {
    Ok(Registration {
        name: io::prompt_text(&context.theme, "Nome completo")?,
        email: io::prompt_text(&context.theme, "Email")?,
        phone: io::prompt_text(&context.theme, "Telefone")?,
        document: io::prompt_text(&context.theme, "CPF")?,
        password: io::prompt_text(&context.theme, "Senha")?,
        password_confirmation: io::prompt_text(&context.theme, "Confirme a senha")?,
    })
}

/// `logout`: tears the session down and clears the cached profile.
pub fn logout(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.session.is_signed_in() {
        io::print_info("Nenhuma sessão ativa.");
        return Ok(());
    }
    if !context.confirm_or_default("Encerrar a sessão?", true)? {
        return Ok(());
    }
    context.session.sign_out()?;
    // A fresh visitor should not inherit a half-built booking.
    context.wizard.restart();
    io::print_success("Sessão encerrada.");
    Ok(())
}

/// `profile`: the cached patient data.
pub fn profile(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let patient = context.require_session()?;
    crate::cli::output::section("Meu perfil");
    io::print_info(format!("Nome:     {}", patient.name));
    io::print_info(format!("Email:    {}", patient.email));
    io::print_info(format!("Telefone: {}", patient.phone));
    io::print_info(format!("CPF:      {}", patient.document));
    Ok(())
}
