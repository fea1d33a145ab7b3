use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    style::{Attribute, SetAttribute},
    terminal::{self, ClearType},
    ExecutableCommand,
};

const NAV_HINT: &str = "Use ↑/↓ para navegar · Enter para abrir · ESC para voltar ao shell";

#[derive(Clone)]
struct MenuEntry {
    command: &'static str,
    description: &'static str,
}

#[derive(Debug)]
pub enum MenuError {
    Interrupted,
    EndOfInput,
    Io(io::Error),
}

impl From<io::Error> for MenuError {
    fn from(err: io::Error) -> Self {
        MenuError::Io(err)
    }
}

/// Full-screen home menu rendered inside the CLI shell loop, standing in
/// for the app's home screen with its quick actions.
pub struct MainMenu {
    entries: Vec<MenuEntry>,
    selected_index: usize,
    max_command_len: usize,
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenu {
    pub fn new() -> Self {
        let entries = vec![
            MenuEntry {
                command: "book",
                description: "Novo agendamento guiado",
            },
            MenuEntry {
                command: "appointments",
                description: "Meus agendamentos",
            },
            MenuEntry {
                command: "search",
                description: "Buscar hospitais e clínicas",
            },
            MenuEntry {
                command: "profile",
                description: "Meu perfil",
            },
            MenuEntry {
                command: "login",
                description: "Entrar na conta",
            },
            MenuEntry {
                command: "register",
                description: "Criar conta",
            },
            MenuEntry {
                command: "logout",
                description: "Sair da conta",
            },
            MenuEntry {
                command: "help",
                description: "Ajuda",
            },
            MenuEntry {
                command: "exit",
                description: "Encerrar",
            },
        ];

        let max_command_len = entries
            .iter()
            .map(|entry| entry.command.len())
            .max()
            .unwrap_or(0);

        Self {
            entries,
            selected_index: 0,
            max_command_len,
        }
    }

    /// Renders the menu, captures keyboard navigation, and returns the
    /// chosen command. Typing aligns the highlight with the first matching
    /// entry; Enter on a typed prefix runs the highlighted command.
    pub fn show(&mut self, banner: &str) -> Result<Option<String>, MenuError> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        stdout.execute(cursor::Hide)?;

        let mut buffer = String::new();
        let loop_result = loop {
            self.render(&mut stdout, banner, &buffer)?;

            let event = event::read()?;
            let Event::Key(key) = event else { continue };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('c') | KeyCode::Char('C') => break Err(MenuError::Interrupted),
                    KeyCode::Char('d') | KeyCode::Char('D') => break Err(MenuError::EndOfInput),
                    _ => continue,
                }
            }

            match key.code {
                KeyCode::Up => self.move_selection(-1),
                KeyCode::Down => self.move_selection(1),
                KeyCode::Home => self.selected_index = 0,
                KeyCode::End => self.selected_index = self.entries.len().saturating_sub(1),
                KeyCode::Esc => break Ok(None),
                KeyCode::Backspace => {
                    buffer.pop();
                    self.align_selection(&buffer);
                }
                KeyCode::Enter => {
                    let command = self.entries[self.selected_index].command.to_string();
                    break Ok(Some(command));
                }
                KeyCode::Char(ch) => {
                    if key.modifiers.contains(KeyModifiers::ALT) {
                        continue;
                    }
                    buffer.push(ch);
                    self.align_selection(&buffer);
                }
                _ => continue,
            }
        };

        let clear_outcome = self.clear_screen(&mut stdout);
        stdout.execute(cursor::Show).ok();
        terminal::disable_raw_mode().ok();

        clear_outcome?;
        loop_result
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.entries.len() as isize;
        if len == 0 {
            return;
        }
        let current = self.selected_index as isize;
        self.selected_index = (current + delta).rem_euclid(len) as usize;
    }

    fn align_selection(&mut self, buffer: &str) {
        let needle = buffer.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return;
        }
        if let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.command.starts_with(&needle))
        {
            self.selected_index = index;
        }
    }

    fn render(&self, stdout: &mut Stdout, banner: &str, buffer: &str) -> Result<(), io::Error> {
        self.clear_screen(stdout)?;
        writeln!(stdout, "{banner}")?;
        writeln!(stdout, "{NAV_HINT}")?;
        writeln!(stdout)?;

        for (index, entry) in self.entries.iter().enumerate() {
            if index == self.selected_index {
                stdout.execute(SetAttribute(Attribute::Reverse))?;
            } else {
                stdout.execute(SetAttribute(Attribute::Reset))?;
            }
            write!(
                stdout,
                "  {:<width$}  {}",
                entry.command,
                entry.description,
                width = self.max_command_len + 2
            )?;
            stdout.execute(SetAttribute(Attribute::Reset))?;
            writeln!(stdout)?;
        }

        writeln!(stdout)?;
        writeln!(stdout, "Comando ▶ {}", buffer)?;
        stdout.flush()?;
        Ok(())
    }

    fn clear_screen(&self, stdout: &mut Stdout) -> Result<(), io::Error> {
        stdout.execute(terminal::Clear(ClearType::All))?;
        stdout.execute(cursor::MoveTo(0, 0))?;
        Ok(())
    }
}
