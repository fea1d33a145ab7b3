use crate::domain::{Patient, Registration};

use super::{ServiceError, ServiceResult};

/// Fixed demo credentials; there is no backend to check against.
const DEMO_EMAIL: &str = "teste@email.com";
const DEMO_PASSWORD: &str = "123456";

const MIN_PASSWORD_LEN: usize = 6;

pub struct AuthService;

impl AuthService {
    /// Resolves the mock credential pair to the demo patient profile.
    pub fn authenticate(email: &str, password: &str) -> ServiceResult<Patient> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ServiceError::Invalid(
                "Preencha todos os campos".into(),
            ));
        }
        if email.eq_ignore_ascii_case(DEMO_EMAIL) && password == DEMO_PASSWORD {
            Ok(demo_patient())
        } else {
            Err(ServiceError::Invalid("Email ou senha inválidos".into()))
        }
    }

    /// Validates a registration form and mints the new patient profile.
    pub fn register(registration: &Registration) -> ServiceResult<Patient> {
        let Registration {
            name,
            email,
            phone,
            document,
            password,
            password_confirmation,
        } = registration;

        if [name, email, phone, document, password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ServiceError::Invalid(
                "Preencha todos os campos".into(),
            ));
        }
        if !email.contains('@') {
            return Err(ServiceError::Invalid("Email inválido".into()));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(ServiceError::Invalid(format!(
                "A senha deve ter pelo menos {} caracteres",
                MIN_PASSWORD_LEN
            )));
        }
        if password != password_confirmation {
            return Err(ServiceError::Invalid("As senhas não coincidem".into()));
        }

        Ok(Patient::new(
            name.trim(),
            email.trim(),
            phone.trim(),
            document.trim(),
        ))
    }
}

fn demo_patient() -> Patient {
    Patient {
        id: uuid::Uuid::nil(),
        name: "João Silva".into(),
        email: DEMO_EMAIL.into(),
        phone: "(11) 99999-9999".into(),
        document: "123.456.789-00".into(),
    }
}
