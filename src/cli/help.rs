use crate::cli::output;
use crate::cli::registry::CommandRegistry;

/// Renders the command overview or the usage block of a single command.
pub fn show(registry: &CommandRegistry, topic: Option<&str>) {
    match topic {
        Some(name) => show_command(registry, name),
        None => show_overview(registry),
    }
}

fn show_overview(registry: &CommandRegistry) {
    output::section("Comandos");
    let width = registry
        .names()
        .map(str::len)
        .max()
        .unwrap_or(0);
    for entry in registry.list() {
        output::info(format!(
            "  {:<width$}  {}",
            entry.name,
            entry.description,
            width = width
        ));
    }
    output::hint("Use `help <command>` for usage details.");
}

fn show_command(registry: &CommandRegistry, name: &str) {
    let normalized = name.to_ascii_lowercase();
    match registry.get(&normalized) {
        Some(entry) => {
            output::section(entry.name);
            output::info(entry.description);
            output::info(format!("Usage: {}", entry.usage));
        }
        None => {
            output::warning(format!("No help available for `{}`.", name));
        }
    }
}
