//! User domain types and account rules.

use std::fmt::{Display, Formatter};

use sedapal_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Unique identifier for a user record, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    /// Creates a user identifier from a stored value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Surrounding whitespace is trimmed; the text is otherwise kept as given.
    /// The address must contain exactly one `@` with a non-empty local part and
    /// a domain containing at least one `.`.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_owned();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        };

        if domain.contains('@') {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        }

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        if trimmed.len() > 254 {
            return Err(AppError::Validation(
                "email address must not exceed 254 characters".to_owned(),
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl Display for EmailAddress {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

/// Account role. The wire and storage names are `superadmin`, `admin` and `usuario`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Institution-wide administrator.
    #[serde(rename = "superadmin")]
    SuperAdmin,
    /// Administrator of one or more systems.
    #[serde(rename = "admin")]
    Admin,
    /// Regular user who receives activities.
    #[serde(rename = "usuario")]
    User,
}

impl UserRole {
    /// Returns the storage string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "superadmin",
            Self::Admin => "admin",
            Self::User => "usuario",
        }
    }

    /// Parses a storage string into a role.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "superadmin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "usuario" => Ok(Self::User),
            _ => Err(AppError::Validation(format!("unknown user role '{value}'"))),
        }
    }

    /// Returns the label shown to people in emails.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Administrador",
            Self::Admin => "Administrador",
            Self::User => "Usuario",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Normalizes a person name for storage.
///
/// Trims, lowercases, collapses whitespace runs and uppercases the first
/// character of every word: `" juan  PEREZ "` becomes `"Juan Perez"`.
#[must_use]
pub fn normalize_person_name(value: Option<&str>) -> Option<String> {
    let value = value?;
    let lowered = value.trim().to_lowercase();

    let words: Vec<String> = lowered.split_whitespace().map(capitalize).collect();
    Some(words.join(" "))
}

fn capitalize(word: &str) -> String {
    let mut characters = word.chars();
    match characters.next() {
        Some(first) => std::iter::once(upper_single(first)).chain(characters).collect(),
        None => String::new(),
    }
}

/// Uppercases one character, keeping it as is when the mapping would expand it.
fn upper_single(character: char) -> char {
    let mut upper = character.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => character,
    }
}

/// Smallest two-digit suffix appended to temporary passwords.
pub const PASSWORD_SUFFIX_MIN: u8 = 10;

/// Largest two-digit suffix appended to temporary passwords.
pub const PASSWORD_SUFFIX_MAX: u8 = 99;

/// Builds a temporary password from the caller-supplied names.
///
/// The format is `User` followed by the uppercased first character of the
/// given name, the uppercased first character of the family name and a
/// two-digit suffix. Initials come from the names exactly as received.
pub fn temporary_password(given_name: &str, family_name: &str, suffix: u8) -> AppResult<String> {
    if !(PASSWORD_SUFFIX_MIN..=PASSWORD_SUFFIX_MAX).contains(&suffix) {
        return Err(AppError::Validation(format!(
            "password suffix must be between {PASSWORD_SUFFIX_MIN} and {PASSWORD_SUFFIX_MAX}, got {suffix}"
        )));
    }

    let given_initial = initial(given_name, "given name")?;
    let family_initial = initial(family_name, "family name")?;

    Ok(format!("User{given_initial}{family_initial}{suffix}"))
}

fn initial(name: &str, label: &str) -> AppResult<char> {
    name.chars()
        .next()
        .map(upper_single)
        .ok_or_else(|| AppError::Validation(format!("{label} must not be empty")))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn valid_email_keeps_its_case() {
        let email = EmailAddress::new("  USER@Example.COM ");
        assert!(email.is_ok());
        assert_eq!(
            email.unwrap_or_else(|_| panic!("test")).as_str(),
            "USER@Example.COM"
        );
    }

    #[test]
    fn email_without_at_is_rejected() {
        assert!(EmailAddress::new("noatsign").is_err());
    }

    #[test]
    fn email_with_two_at_signs_is_rejected() {
        assert!(EmailAddress::new("a@b@example.com").is_err());
    }

    #[test]
    fn email_without_domain_dot_is_rejected() {
        assert!(EmailAddress::new("user@nodot").is_err());
    }

    #[test]
    fn empty_email_is_rejected() {
        assert!(EmailAddress::new("   ").is_err());
    }

    #[test]
    fn role_round_trips_through_storage_names() {
        for role in [UserRole::SuperAdmin, UserRole::Admin, UserRole::User] {
            let parsed = UserRole::parse(role.as_str());
            assert!(matches!(parsed, Ok(value) if value == role));
        }
        assert!(UserRole::parse("root").is_err());
    }

    #[test]
    fn role_labels_are_spanish() {
        assert_eq!(UserRole::SuperAdmin.display_name(), "Super Administrador");
        assert_eq!(UserRole::Admin.display_name(), "Administrador");
        assert_eq!(UserRole::User.display_name(), "Usuario");
    }

    #[test]
    fn normalizes_spacing_and_case() {
        assert_eq!(
            normalize_person_name(Some(" juan  PEREZ ")).as_deref(),
            Some("Juan Perez")
        );
        assert_eq!(
            normalize_person_name(Some("maría\tdel  CARMEN")).as_deref(),
            Some("María Del Carmen")
        );
    }

    #[test]
    fn absent_name_stays_absent() {
        assert_eq!(normalize_person_name(None), None);
    }

    #[test]
    fn blank_name_normalizes_to_empty() {
        assert_eq!(normalize_person_name(Some("   ")).as_deref(), Some(""));
    }

    #[test]
    fn password_uses_raw_initials() {
        let password = temporary_password("ana", "lopez", 42);
        assert!(matches!(password.as_deref(), Ok("UserAL42")));
    }

    #[test]
    fn expanding_uppercase_keeps_the_original_character() {
        assert!(matches!(
            temporary_password("ßara", "ölz", 17).as_deref(),
            Ok("UserßÖ17")
        ));
        assert_eq!(
            normalize_person_name(Some("ßara  ÖLZ")).as_deref(),
            Some("ßara Ölz")
        );
    }

    #[test]
    fn password_rejects_out_of_range_suffix() {
        assert!(temporary_password("ana", "lopez", 9).is_err());
        assert!(temporary_password("ana", "lopez", 100).is_err());
    }

    #[test]
    fn password_rejects_empty_names() {
        assert!(temporary_password("", "lopez", 42).is_err());
        assert!(temporary_password("ana", "", 42).is_err());
    }

    fn is_temporary_password(value: &str) -> bool {
        let Some(rest) = value.strip_prefix("User") else {
            return false;
        };
        let bytes = rest.as_bytes();
        bytes.len() == 4
            && bytes[0].is_ascii_uppercase()
            && bytes[1].is_ascii_uppercase()
            && bytes[2].is_ascii_digit()
            && bytes[3].is_ascii_digit()
    }

    proptest! {
        #[test]
        fn ascii_names_produce_well_formed_passwords(
            given in "[A-Za-z][A-Za-z ]{0,15}",
            family in "[A-Za-z][A-Za-z ]{0,15}",
            suffix in PASSWORD_SUFFIX_MIN..=PASSWORD_SUFFIX_MAX,
        ) {
            let password = temporary_password(&given, &family, suffix);
            prop_assert!(password.is_ok());
            let password = password.unwrap_or_default();
            prop_assert!(is_temporary_password(&password), "unexpected password {}", password);
            prop_assert!(password.ends_with(&suffix.to_string()));
        }

        #[test]
        fn normalized_names_have_single_spaces(raw in "[ a-zA-ZáéíóúñÑ\t]{0,32}") {
            let normalized = normalize_person_name(Some(&raw)).unwrap_or_default();
            prop_assert_eq!(normalized.trim(), normalized.as_str());
            prop_assert!(!normalized.contains("  "));
            prop_assert!(!normalized.contains('\t'));
        }

        #[test]
        fn normalization_is_idempotent(raw in "[ a-zA-Z]{0,32}") {
            let once = normalize_person_name(Some(&raw));
            let twice = normalize_person_name(once.as_deref());
            prop_assert_eq!(once, twice);
        }
    }
}
