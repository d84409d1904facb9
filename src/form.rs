//! State machine behind the signup form.
//!
//! Everything here is DOM-free: the component layer mirrors this state
//! into classes, error text and display toggles, so the whole submit
//! workflow can be exercised without a document.

use crate::validation::{self, Field};

/// Visual state of one field group. The three states are mutually
/// exclusive; `Neutral` renders neither marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Error,
    Success,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldEntry {
    pub value: String,
    pub status: FieldStatus,
    pub message: String,
}

/// The four tracked fields plus the submitted display flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    name: FieldEntry,
    email: FieldEntry,
    phone: FieldEntry,
    password: FieldEntry,
    pub submitted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// At least one field failed; `first_error` is the first field in
    /// document order now carrying the error marker.
    Rejected { first_error: Field },
}

impl SignupForm {
    pub fn entry(&self, field: Field) -> &FieldEntry {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Password => &self.password,
        }
    }

    fn entry_mut(&mut self, field: Field) -> &mut FieldEntry {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Password => &mut self.password,
        }
    }

    /// Keystroke: store the value and lift an error marker without
    /// re-validating. A field never earns the success marker from
    /// typing alone; that takes a blur or submit pass.
    pub fn input(&mut self, field: Field, value: String) {
        let entry = self.entry_mut(field);
        entry.value = value;
        if entry.status == FieldStatus::Error {
            entry.status = FieldStatus::Neutral;
        }
    }

    /// Focus loss: validate the trimmed value and settle the field into
    /// `Error` or `Success`. Returns whether the field is valid.
    pub fn blur(&mut self, field: Field) -> bool {
        let entry = self.entry_mut(field);
        match validation::validate(field, &entry.value) {
            Ok(()) => {
                entry.status = FieldStatus::Success;
                entry.message.clear();
                true
            }
            Err(message) => {
                entry.status = FieldStatus::Error;
                entry.message = message;
                false
            }
        }
    }

    /// Validates every field, deliberately without short-circuiting so
    /// each one gets visual feedback, then either accepts the submission
    /// or points at the first offending field.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut first_error = None;
        for field in Field::ALL {
            if !self.blur(field) && first_error.is_none() {
                first_error = Some(field);
            }
        }
        match first_error {
            None => {
                self.submitted = true;
                SubmitOutcome::Accepted
            }
            Some(first_error) => SubmitOutcome::Rejected { first_error },
        }
    }

    /// Wipes values and markers. The submitted flag is owned by the
    /// display-recovery workflow, not by clearing.
    pub fn clear(&mut self) {
        for field in Field::ALL {
            *self.entry_mut(field) = FieldEntry::default();
        }
    }

    /// Brings the form back after the success message has run its course.
    pub fn restore(&mut self) {
        self.submitted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        let mut form = SignupForm::default();
        form.input(Field::Name, "Jane Doe".into());
        form.input(Field::Email, "jane@example.com".into());
        form.input(Field::Phone, "123-456-7890".into());
        form.input(Field::Password, "abcdef".into());
        form
    }

    #[test]
    fn blur_settles_error_or_success() {
        let mut form = SignupForm::default();
        assert!(!form.blur(Field::Name));
        assert_eq!(form.entry(Field::Name).status, FieldStatus::Error);
        assert_eq!(form.entry(Field::Name).message, "Name is required");

        form.input(Field::Name, "Al".into());
        assert!(form.blur(Field::Name));
        assert_eq!(form.entry(Field::Name).status, FieldStatus::Success);
        assert!(form.entry(Field::Name).message.is_empty());
    }

    #[test]
    fn input_lifts_error_but_never_grants_success() {
        let mut form = SignupForm::default();
        form.blur(Field::Email);
        assert_eq!(form.entry(Field::Email).status, FieldStatus::Error);

        // typing while in error drops back to neutral only
        form.input(Field::Email, "a@b.co".into());
        assert_eq!(form.entry(Field::Email).status, FieldStatus::Neutral);

        // success takes a blur pass
        assert!(form.blur(Field::Email));
        assert_eq!(form.entry(Field::Email).status, FieldStatus::Success);
    }

    #[test]
    fn input_does_not_disturb_neutral_or_success() {
        let mut form = filled();
        form.blur(Field::Name);
        form.input(Field::Name, "Jan".into());
        assert_eq!(form.entry(Field::Name).status, FieldStatus::Success);

        form.input(Field::Phone, "123".into());
        assert_eq!(form.entry(Field::Phone).status, FieldStatus::Neutral);
    }

    #[test]
    fn submit_accepts_when_all_fields_valid() {
        let mut form = filled();
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert!(form.submitted);
        for field in Field::ALL {
            assert_eq!(form.entry(field).status, FieldStatus::Success);
        }
    }

    #[test]
    fn submit_marks_every_invalid_field_and_reports_the_first() {
        let mut form = filled();
        form.input(Field::Email, "a@b".into());
        form.input(Field::Password, "abc".into());

        let outcome = form.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                first_error: Field::Email
            }
        );
        assert!(!form.submitted);
        // no short-circuit: the later invalid field is marked too
        assert_eq!(form.entry(Field::Password).status, FieldStatus::Error);
        assert_eq!(form.entry(Field::Name).status, FieldStatus::Success);
    }

    #[test]
    fn submit_on_untouched_form_flags_name_first() {
        let mut form = SignupForm::default();
        assert_eq!(
            form.submit(),
            SubmitOutcome::Rejected {
                first_error: Field::Name
            }
        );
        for field in Field::ALL {
            assert_eq!(form.entry(field).status, FieldStatus::Error);
        }
    }

    #[test]
    fn clear_wipes_values_and_markers_but_not_the_flag() {
        let mut form = filled();
        form.submit();
        form.clear();
        for field in Field::ALL {
            assert!(form.entry(field).value.is_empty());
            assert_eq!(form.entry(field).status, FieldStatus::Neutral);
        }
        assert!(form.submitted);

        form.restore();
        assert!(!form.submitted);
        assert_eq!(form, SignupForm::default());
    }
}
