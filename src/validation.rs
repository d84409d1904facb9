use once_cell::sync::Lazy;
use regex::Regex;

/// The signup inputs, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Password];

    /// The `name` attribute of the matching input element.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
        }
    }

    /// Capitalized form used in labels and required-field messages.
    pub fn title(self) -> String {
        capitalize(self.name())
    }
}

/// One declarative validation rule: a pattern plus the message shown
/// when a non-empty value fails to match it.
pub struct FieldRule {
    pub field: Field,
    pub pattern: Regex,
    pub message: &'static str,
}

static RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule {
            field: Field::Name,
            pattern: Regex::new(r"^[A-Za-z\s]{2,}$").unwrap(),
            message: "Name must be at least 2 characters and contain only letters",
        },
        FieldRule {
            field: Field::Email,
            pattern: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap(),
            message: "Please enter a valid email address",
        },
        FieldRule {
            field: Field::Phone,
            pattern: Regex::new(r"^[\d\s\-\+\(\)]{10,}$").unwrap(),
            message: "Phone number must be at least 10 digits",
        },
        FieldRule {
            field: Field::Password,
            pattern: Regex::new(r"^.{6,}$").unwrap(),
            message: "Password must be at least 6 characters long",
        },
    ]
});

pub fn rules() -> &'static [FieldRule] {
    &RULES
}

/// Validates the trimmed value of one field. An empty value always fails
/// with the required-field message; otherwise the field's rule decides.
/// `Err` carries the inline message to surface next to the input.
pub fn validate(field: Field, raw: &str) -> Result<(), String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(format!("{} is required", field.title()));
    }
    if let Some(rule) = rules().iter().find(|rule| rule.field == field) {
        if !rule.pattern.is_match(value) {
            return Err(rule.message.to_string());
        }
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_a_rule() {
        for field in Field::ALL {
            assert!(rules().iter().any(|rule| rule.field == field));
        }
    }

    #[test]
    fn empty_value_is_required_regardless_of_field() {
        assert_eq!(validate(Field::Name, "").unwrap_err(), "Name is required");
        assert_eq!(validate(Field::Email, "   ").unwrap_err(), "Email is required");
        assert_eq!(validate(Field::Phone, "\t").unwrap_err(), "Phone is required");
        assert_eq!(
            validate(Field::Password, "").unwrap_err(),
            "Password is required"
        );
    }

    #[test]
    fn name_allows_letters_and_whitespace_only() {
        assert!(validate(Field::Name, "Al").is_ok());
        assert!(validate(Field::Name, "Jane Doe").is_ok());
        // digit not permitted
        assert_eq!(
            validate(Field::Name, "A1").unwrap_err(),
            "Name must be at least 2 characters and contain only letters"
        );
        // too short
        assert!(validate(Field::Name, "A").is_err());
    }

    #[test]
    fn email_needs_local_domain_and_tld() {
        assert!(validate(Field::Email, "a@b.co").is_ok());
        // no dot-segment after the domain
        assert!(validate(Field::Email, "a@b").is_err());
        // embedded whitespace in the local part
        assert_eq!(
            validate(Field::Email, "a b@c.com").unwrap_err(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn phone_needs_ten_allowed_characters() {
        assert!(validate(Field::Phone, "123-456-7890").is_ok());
        assert!(validate(Field::Phone, "+1 (555) 123 4567").is_ok());
        assert_eq!(
            validate(Field::Phone, "12345").unwrap_err(),
            "Phone number must be at least 10 digits"
        );
    }

    #[test]
    fn password_needs_six_characters_of_any_kind() {
        assert!(validate(Field::Password, "abcdef").is_ok());
        assert!(validate(Field::Password, "p@ss w").is_ok());
        assert_eq!(
            validate(Field::Password, "abc").unwrap_err(),
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn values_are_trimmed_before_matching() {
        assert!(validate(Field::Email, "  a@b.co  ").is_ok());
        assert!(validate(Field::Password, " abcd ").is_err());
    }
}
