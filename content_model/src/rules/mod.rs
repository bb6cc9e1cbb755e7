//! Registration and login form rules.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use thiserror::Error;

use crate::accounts::User;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimum age, in calendar years, to register.
pub const MIN_AGE_YEARS: i32 = 15;

/// Form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Email,
    Nickname,
    Password,
    ConfirmPassword,
    BirthDate,
    AgreeToTerms,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Nickname => "nickname",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirmPassword",
            FormField::BirthDate => "birthDate",
            FormField::AgreeToTerms => "agreeToTerms",
        }
    }
}

/// One message per failing field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(pub Vec<(FormField, String)>);

impl ValidationErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, field: FormField, message: &str) {
        self.0.push((field, message.to_string()));
    }
}

/// Rough password strength shown under the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    None,
    Weak,
    Medium,
    Strong,
}

pub fn password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    if len == 0 {
        PasswordStrength::None
    } else if len < 6 {
        PasswordStrength::Weak
    } else if len < MIN_PASSWORD_LEN {
        PasswordStrength::Medium
    } else if password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
    {
        PasswordStrength::Strong
    } else {
        PasswordStrength::Medium
    }
}

/// `local@domain.tld` with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// 3 to 20 ASCII letters, digits, `_` or `-`.
pub fn is_valid_nickname(nickname: &str) -> bool {
    (3..=20).contains(&nickname.len())
        && nickname
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Age by calendar-year difference, ignoring month and day.
pub fn is_old_enough(birth_date: NaiveDate, today: NaiveDate) -> bool {
    today.year() - birth_date.year() >= MIN_AGE_YEARS
}

/// The registration form as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub nickname: String,
    pub password: String,
    pub confirm_password: String,
    pub birth_date: Option<NaiveDate>,
    pub agree_to_terms: bool,
}

impl RegistrationForm {
    /// Check every field, collecting a message for each that fails.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.email.is_empty() {
            errors.push(FormField::Email, "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.push(FormField::Email, "Invalid email");
        }

        if self.nickname.is_empty() {
            errors.push(FormField::Nickname, "Nickname is required");
        } else if !is_valid_nickname(&self.nickname) {
            errors.push(
                FormField::Nickname,
                "Nickname must be 3-20 characters: letters, digits, _ and -",
            );
        }

        if self.password.is_empty() {
            errors.push(FormField::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FormField::Password, "Password must be at least 8 characters");
        }

        if self.confirm_password.is_empty() {
            errors.push(FormField::ConfirmPassword, "Confirm your password");
        } else if self.password != self.confirm_password {
            errors.push(FormField::ConfirmPassword, "Passwords do not match");
        }

        match self.birth_date {
            None => errors.push(FormField::BirthDate, "Birth date is required"),
            Some(birth) if !is_old_enough(birth, today) => {
                errors.push(FormField::BirthDate, "You must be at least 15 years old")
            }
            Some(_) => {}
        }

        if !self.agree_to_terms {
            errors.push(FormField::AgreeToTerms, "You must accept the terms");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build the account record this form registers.
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User::new(self.email, self.nickname, self.password, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            email: "dobrynya@example.com".to_string(),
            nickname: "Dobrynya_1".to_string(),
            password: "Zmey2Gorynych".to_string(),
            confirm_password: "Zmey2Gorynych".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 6, 15),
            agree_to_terms: true,
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid_form().validate(today()).is_ok());
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("a@x.com"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("a x@y.com"));
        assert!(!is_valid_email("@y.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_nickname_rules() {
        assert!(is_valid_nickname("Bob"));
        assert!(is_valid_nickname("night-wolf_99"));
        assert!(!is_valid_nickname("Bo"));
        assert!(!is_valid_nickname("has space"));
        assert!(!is_valid_nickname(&"x".repeat(21)));
    }

    #[test]
    fn test_collects_every_failure() {
        let form = RegistrationForm {
            email: "broken".to_string(),
            password: "short".to_string(),
            confirm_password: "other".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2015, 1, 1),
            ..Default::default()
        };

        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.get(FormField::Email), Some("Invalid email"));
        assert_eq!(errors.get(FormField::Nickname), Some("Nickname is required"));
        assert!(errors.get(FormField::Password).is_some());
        assert_eq!(
            errors.get(FormField::ConfirmPassword),
            Some("Passwords do not match")
        );
        assert!(errors.get(FormField::BirthDate).is_some());
        assert!(errors.get(FormField::AgreeToTerms).is_some());
        assert_eq!(errors.0.len(), 6);
    }

    #[test]
    fn test_age_uses_calendar_year() {
        // Born late in the year still counts once the year ticks over
        let birth = NaiveDate::from_ymd_opt(2011, 12, 31).unwrap();
        assert!(is_old_enough(birth, today()));

        let birth = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
        assert!(!is_old_enough(birth, today()));
    }

    #[test]
    fn test_password_strength() {
        assert_eq!(password_strength(""), PasswordStrength::None);
        assert_eq!(password_strength("abc"), PasswordStrength::Weak);
        assert_eq!(password_strength("abcdefg"), PasswordStrength::Medium);
        assert_eq!(password_strength("abcdefgh"), PasswordStrength::Medium);
        assert_eq!(password_strength("Abcdefg1"), PasswordStrength::Strong);
    }

    #[test]
    fn test_into_user() {
        let now = chrono::Utc::now();
        let user = valid_form().into_user(now);
        assert_eq!(user.nickname, "Dobrynya_1");
        assert_eq!(user.password.as_deref(), Some("Zmey2Gorynych"));
        assert!(user.characters.is_empty());
    }
}
