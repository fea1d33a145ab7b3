use assert_cmd::Command;
use predicates::str::contains;
use regex::Regex;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("booking_core_cli").expect("binary builds");
    cmd.env("BOOKING_CORE_CLI_SCRIPT", "1")
        .env("BOOKING_CORE_HOME", home.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn script_mode_runs_the_full_booking_flow() {
    let home = TempDir::new().expect("temp home");
    let input = "login teste@email.com 123456\n\
                 book service consulta\n\
                 book facility 2\n\
                 book date 2025-09-27\n\
                 book time 10:00\n\
                 book confirm\n\
                 exit\n";

    let assert = script_command(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Olá, João Silva!"))
        .stdout(contains("Agendamento confirmado"))
        .stdout(contains("Hospital Santa Maria"))
        .stdout(contains("sábado, 27 de setembro de 2025"));

    // The wizard announces each forward step exactly once.
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let step_pattern = Regex::new(r"Passo (\d) de 5").expect("valid pattern");
    let steps: Vec<String> = step_pattern
        .captures_iter(&stdout)
        .map(|captures| captures[1].to_string())
        .collect();
    assert_eq!(steps, ["2", "3", "4", "5"], "stdout was:\n{stdout}");
}

#[test]
fn booking_requires_a_session() {
    let home = TempDir::new().expect("temp home");
    script_command(&home)
        .write_stdin("book status\nexit\n")
        .assert()
        .success()
        .stdout(contains("Faça login primeiro"));
}

#[test]
fn incomplete_confirm_is_reported_not_fatal() {
    let home = TempDir::new().expect("temp home");
    script_command(&home)
        .write_stdin(
            "login teste@email.com 123456\n\
             book service exame\n\
             book confirm\n\
             book status\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(contains("Finalize as etapas do agendamento"))
        .stdout(contains("Exames e diagnósticos"));
}

#[test]
fn cached_session_survives_between_runs() {
    let home = TempDir::new().expect("temp home");
    script_command(&home)
        .write_stdin("login teste@email.com 123456\nexit\n")
        .assert()
        .success();

    script_command(&home)
        .write_stdin("profile\nexit\n")
        .assert()
        .success()
        .stdout(contains("João Silva"));

    script_command(&home)
        .write_stdin("logout\nprofile\nexit\n")
        .assert()
        .success()
        .stdout(contains("Sessão encerrada."))
        .stdout(contains("Faça login primeiro"));
}

#[test]
fn unknown_commands_suggest_the_closest_match() {
    let home = TempDir::new().expect("temp home");
    script_command(&home)
        .write_stdin("serch\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `serch`"))
        .stdout(contains("Suggestion: `search`?"));
}
