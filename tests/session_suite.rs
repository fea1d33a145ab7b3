mod common;

use std::fs;

use assert_fs::TempDir;
use booking_core::{
    domain::Registration,
    session::SessionStore,
    storage::{JsonStorage, StorageBackend},
};
use common::setup_test_env;

fn registration() -> Registration {
    Registration {
        name: "Maria Souza".into(),
        email: "maria@email.com".into(),
        phone: "(11) 98888-7777".into(),
        document: "987.654.321-00".into(),
        password: "segredo".into(),
        password_confirmation: "segredo".into(),
    }
}

#[test]
fn sign_in_round_trips_through_the_cache() {
    let (mut session, _config) = setup_test_env();
    assert!(!session.restore().expect("restore empty cache"));

    let patient = session
        .sign_in("teste@email.com", "123456")
        .expect("demo credentials sign in");
    assert_eq!(patient.name, "João Silva");
    assert!(session.is_signed_in());
}

#[test]
fn registered_profile_survives_a_restart() {
    let temp = TempDir::new().expect("temp dir");
    let base = temp.path().to_path_buf();

    {
        let storage = JsonStorage::new(Some(base.clone())).expect("storage");
        let mut session = SessionStore::new(Box::new(storage));
        session.sign_up(&registration()).expect("sign up");
    }

    // Simulates the app starting again over the same cache directory.
    let storage = JsonStorage::new(Some(base)).expect("storage");
    let mut session = SessionStore::new(Box::new(storage));
    assert!(session.restore().expect("restore cached profile"));
    assert_eq!(
        session.current().map(|p| p.email.as_str()),
        Some("maria@email.com")
    );
}

#[test]
fn sign_out_clears_the_cache_file() {
    let temp = TempDir::new().expect("temp dir");
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("storage");
    let profile_path = storage.profile_path().to_path_buf();

    let mut session = SessionStore::new(Box::new(storage));
    session.sign_in("teste@email.com", "123456").expect("sign in");
    assert!(profile_path.exists());

    session.sign_out().expect("sign out");
    assert!(!profile_path.exists());
    assert!(!session.is_signed_in());
}

#[test]
fn atomic_save_failure_preserves_original_profile() {
    let temp = TempDir::new().expect("temp dir");
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("storage");

    let first = booking_core::domain::Patient::new(
        "Ana Lima",
        "ana@email.com",
        "(11) 91234-5678",
        "111.222.333-44",
    );
    storage.save_profile(&first).expect("initial save");
    let original = fs::read_to_string(storage.profile_path()).expect("read original");

    // Collide with the staging file name to force the temp write to fail.
    let tmp_path = storage.profile_path().with_extension("json.tmp");
    fs::create_dir_all(&tmp_path).expect("create colliding dir");

    let second = booking_core::domain::Patient::new(
        "Outra Pessoa",
        "outra@email.com",
        "(11) 90000-0000",
        "000.000.000-00",
    );
    let result = storage.save_profile(&second);
    assert!(
        result.is_err(),
        "expected save to fail when the staging path is a directory"
    );

    let current = fs::read_to_string(storage.profile_path()).expect("read after failure");
    assert_eq!(
        current, original,
        "atomic save failure must not corrupt the cached profile"
    );

    let _ = fs::remove_dir_all(&tmp_path);
}
