//! 联系表单字段校验规则

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FieldError;
use crate::types::FieldId;

/// `local@domain.tld`: no whitespace, one `@`, a `.` after it
static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map_err(|e| log::error!("Invalid email pattern: {e}"))
        .ok()
});

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Whether `email` looks like an address; surrounding whitespace is ignored
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(email.trim()))
}

/// Check one raw field value
///
/// Lengths count characters of the trimmed value.
pub fn validate_field(field: FieldId, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();

    match field {
        FieldId::Name => {
            if value.is_empty() {
                Err(FieldError::NameRequired)
            } else if value.chars().count() < MIN_NAME_CHARS {
                Err(FieldError::NameTooShort)
            } else {
                Ok(())
            }
        }
        FieldId::Email => {
            if value.is_empty() {
                Err(FieldError::EmailRequired)
            } else if !is_valid_email(value) {
                Err(FieldError::EmailInvalid)
            } else {
                Ok(())
            }
        }
        FieldId::Message => {
            if value.is_empty() {
                Err(FieldError::MessageRequired)
            } else if value.chars().count() < MIN_MESSAGE_CHARS {
                Err(FieldError::MessageTooShort)
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_boundaries() {
        assert_eq!(
            validate_field(FieldId::Name, "A"),
            Err(FieldError::NameTooShort)
        );
        assert_eq!(validate_field(FieldId::Name, "Al"), Ok(()));
        assert_eq!(
            validate_field(FieldId::Name, "   "),
            Err(FieldError::NameRequired)
        );
        // 首尾空白不计入长度
        assert_eq!(
            validate_field(FieldId::Name, " A "),
            Err(FieldError::NameTooShort)
        );
    }

    #[test]
    fn message_boundaries() {
        assert_eq!(validate_field(FieldId::Message, "0123456789"), Ok(()));
        assert_eq!(
            validate_field(FieldId::Message, "012345678"),
            Err(FieldError::MessageTooShort)
        );
        assert_eq!(
            validate_field(FieldId::Message, ""),
            Err(FieldError::MessageRequired)
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        assert_eq!(validate_field(FieldId::Name, "李雷"), Ok(()));
        assert_eq!(
            validate_field(FieldId::Message, "你好你好你好你好你"),
            Err(FieldError::MessageTooShort)
        );
    }

    #[test]
    fn email_shapes() {
        assert!(!is_valid_email("a@b"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("  a@b.co  "));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("@b.c"));

        assert_eq!(
            validate_field(FieldId::Email, ""),
            Err(FieldError::EmailRequired)
        );
        assert_eq!(
            validate_field(FieldId::Email, "a@b"),
            Err(FieldError::EmailInvalid)
        );
    }

    #[test]
    fn messages_match_page_text() {
        assert_eq!(FieldError::NameTooShort.to_string(), "Name must be at least 2 characters");
        assert_eq!(FieldError::EmailInvalid.to_string(), "Please enter a valid email address");
    }
}
