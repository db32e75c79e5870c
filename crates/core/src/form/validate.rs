use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{Field, PredictionForm};
use crate::error::ValidationError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("invalid email regex"));

/// Check the form the way a browser would before allowing submit.
///
/// Reports the first problem in on-screen order.
pub fn validate(form: &PredictionForm) -> Result<(), ValidationError> {
    for field in Field::ALL.into_iter().filter(|field| field.is_required()) {
        if form.get(field).trim().is_empty() {
            return Err(ValidationError::Required(field));
        }
    }

    let email = form.email.trim();
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail {
            value: email.to_string(),
        });
    }

    let date = form.manager_leave_date.trim();
    if !date.is_empty() && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(ValidationError::InvalidDate {
            value: date.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PredictionForm {
        let mut form = PredictionForm::new();
        form.set(Field::Name, "Sam");
        form.set(Field::Email, "sam@example.com");
        form
    }

    #[test]
    fn name_and_email_are_required() {
        let mut form = filled();
        form.set(Field::Name, "   ");
        assert_eq!(validate(&form), Err(ValidationError::Required(Field::Name)));

        let mut form = filled();
        form.clear(Field::Email);
        assert_eq!(validate(&form), Err(ValidationError::Required(Field::Email)));
    }

    #[test]
    fn choice_fields_may_stay_empty() {
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut form = filled();
        form.set(Field::Email, "not-an-email");
        let err = validate(&form).unwrap_err();
        assert_eq!(err.field(), Field::Email);

        form.set(Field::Email, "a b@example.com");
        assert!(validate(&form).is_err());
    }

    #[test]
    fn leave_date_must_be_a_calendar_date() {
        let mut form = filled();
        form.set(Field::ManagerLeaveDate, "2025-11-03");
        assert_eq!(validate(&form), Ok(()));

        form.set(Field::ManagerLeaveDate, "2025-02-30");
        assert_eq!(
            validate(&form),
            Err(ValidationError::InvalidDate {
                value: "2025-02-30".to_string()
            })
        );

        form.set(Field::ManagerLeaveDate, "next week");
        assert_eq!(validate(&form).unwrap_err().field(), Field::ManagerLeaveDate);
    }
}
