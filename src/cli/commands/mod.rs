mod appointments;
mod auth;
mod booking;
mod search;
mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};

/// Registers every shell command, in the order shown by `help`.
pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "home",
        "Menu principal",
        "home",
        system::home,
    ));
    registry.register(CommandEntry::new(
        "book",
        "Agendamento guiado em cinco passos",
        "book [service <id> | facility <id> | date <YYYY-MM-DD> | time <HH:MM> | status | summary | confirm | restart]",
        booking::book,
    ));
    registry.register(CommandEntry::new(
        "appointments",
        "Agendamentos marcados e histórico",
        "appointments [upcoming | history | cancel <id>]",
        appointments::appointments,
    ));
    registry.register(CommandEntry::new(
        "search",
        "Busca de unidades de atendimento",
        "search [texto] [--kind todos|hospital|clinica|laboratorio]",
        search::search,
    ));
    registry.register(CommandEntry::new(
        "profile",
        "Dados do perfil conectado",
        "profile",
        auth::profile,
    ));
    registry.register(CommandEntry::new(
        "login",
        "Entrar com email e senha",
        "login [email senha]",
        auth::login,
    ));
    registry.register(CommandEntry::new(
        "register",
        "Criar uma nova conta",
        "register [nome email telefone cpf senha [confirmação]]",
        auth::register,
    ));
    registry.register(CommandEntry::new(
        "logout",
        "Encerrar a sessão atual",
        "logout",
        auth::logout,
    ));
    registry.register(CommandEntry::new(
        "config",
        "Preferências do aplicativo",
        "config [locale <pt-BR|en-US>]",
        system::config,
    ));
    registry.register(CommandEntry::new(
        "help",
        "Ajuda sobre os comandos",
        "help [comando]",
        system::help,
    ));
    registry.register(CommandEntry::new(
        "version",
        "Informações de versão",
        "version",
        system::version,
    ));
    registry.register(CommandEntry::new(
        "exit",
        "Sair do shell",
        "exit",
        system::exit,
    ));
}
