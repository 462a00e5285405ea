// contacts-core-client/contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::{ExposeSecret, SecretString};

use super::{AuthError, RequiredField};

pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: SecretString,
}

impl RegistrationRequest {
    /// Returns the first blank field, in the order in which the form presents them.
    pub fn validate(&self) -> Result<(), AuthError> {
        let fields = [
            (RequiredField::Name, self.name.as_str()),
            (RequiredField::Email, self.email.as_str()),
            (RequiredField::Phone, self.phone.as_str()),
            (RequiredField::Password, self.password.expose_secret().as_str()),
        ];

        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(AuthError::ValidationFailed { field: *field }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_reports_first_blank_field() {
        let mut request = RegistrationRequest {
            name: "Jane".to_string(),
            email: " ".to_string(),
            phone: "".to_string(),
            password: SecretString::new("secret".to_string()),
        };

        assert_eq!(
            request.validate(),
            Err(AuthError::ValidationFailed {
                field: RequiredField::Email
            })
        );

        request.email = "jane@example.org".to_string();
        request.phone = "555".to_string();
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn test_error_names_field() {
        let error = AuthError::ValidationFailed {
            field: RequiredField::Password,
        };
        assert_eq!(error.to_string(), "The password must not be empty.");
    }
}
