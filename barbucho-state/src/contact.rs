use serde::Deserialize;
use serde::Serialize;

use tracing::debug;
use tracing::trace;

use crate::delivery::DeliveryError;

pub const NAME_MAX_LEN: usize = 100;
pub const PHONE_MAX_LEN: usize = 20;
pub const MESSAGE_MAX_LEN: usize = 1000;

pub const ERR_NAME_REQUIRED: &str = "Nome é obrigatório";
pub const ERR_NAME_TOO_LONG: &str = "Nome muito longo";
pub const ERR_PHONE_REQUIRED: &str = "Telefone é obrigatório";
pub const ERR_PHONE_INVALID: &str = "Telefone inválido";
pub const ERR_MESSAGE_REQUIRED: &str = "Mensagem é obrigatória";
pub const ERR_MESSAGE_TOO_LONG: &str = "Mensagem muito longa";

/// The three user-entered values, also the payload handed to
/// [`crate::delivery::ContactDelivery`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ContactField {
    Name,
    Phone,
    Message,
}

/// Per-field validation messages, present only for fields that failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        match field {
            ContactField::Name => self.name,
            ContactField::Phone => self.phone,
            ContactField::Message => self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, msg: &'static str) {
        match field {
            ContactField::Name => self.name = Some(msg),
            ContactField::Phone => self.phone = Some(msg),
            ContactField::Message => self.message = Some(msg),
        }
    }

    pub fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Phone => self.phone = None,
            ContactField::Message => self.message = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.message.is_none()
    }

    pub fn len(&self) -> usize {
        [self.name, self.phone, self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Checks every field in one pass and collects all violations.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let name = fields.name.trim();
    if name.is_empty() {
        errors.set(ContactField::Name, ERR_NAME_REQUIRED);
    } else if name.chars().count() > NAME_MAX_LEN {
        errors.set(ContactField::Name, ERR_NAME_TOO_LONG);
    }

    let phone = fields.phone.trim();
    if phone.is_empty() {
        errors.set(ContactField::Phone, ERR_PHONE_REQUIRED);
    } else if phone.chars().count() > PHONE_MAX_LEN {
        errors.set(ContactField::Phone, ERR_PHONE_INVALID);
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.set(ContactField::Message, ERR_MESSAGE_REQUIRED);
    } else if message.chars().count() > MESSAGE_MAX_LEN {
        errors.set(ContactField::Message, ERR_MESSAGE_TOO_LONG);
    }

    errors
}

/// Lifecycle of one submission attempt. `Failed` carries the delivery
/// error so the user can be shown a retry.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(DeliveryError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// Re-entry while a submission is in flight or settling.
    Rejected,
    /// Validation failed, errors are populated.
    Invalid,
    /// Trimmed payload ready for delivery.
    Accepted(ContactFields),
}

/// Owns the form fields, the per-field errors and the submission state.
///
/// Timers and the delivery future live in the UI layer; this type only
/// transitions when told to, which keeps it testable off-wasm.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    state: SubmissionState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Inputs are editable while Idle or Failed, never mid-flight.
    pub fn accepts_input(&self) -> bool {
        matches!(
            self.state,
            SubmissionState::Idle | SubmissionState::Failed(_)
        )
    }

    /// Updates one field and optimistically clears its error. The rest of
    /// the errors stay until the next submit attempt revalidates.
    pub fn edit(&mut self, field: ContactField, value: String) {
        if !self.accepts_input() {
            trace!("ignoring edit of {} while {:?}", field, self.state);
            return;
        }
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Phone => self.fields.phone = value,
            ContactField::Message => self.fields.message = value,
        }
        self.errors.clear(field);
    }

    /// Submit trigger. Clears previous errors, revalidates everything and
    /// either stays Idle with the violations or enters Submitting and
    /// hands back the payload to deliver.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if !self.accepts_input() {
            debug!("submit rejected while {:?}", self.state);
            return SubmitAttempt::Rejected;
        }

        self.errors = FieldErrors::default();
        let errors = validate(&self.fields);
        if !errors.is_empty() {
            debug!("submit invalid: {} field error(s)", errors.len());
            self.errors = errors;
            self.state = SubmissionState::Idle;
            return SubmitAttempt::Invalid;
        }

        self.state = SubmissionState::Submitting;
        SubmitAttempt::Accepted(self.fields.trimmed())
    }

    /// Outcome of the delivery started by an `Accepted` attempt.
    pub fn complete(&mut self, outcome: Result<(), DeliveryError>) {
        if self.state != SubmissionState::Submitting {
            debug!("ignoring delivery outcome while {:?}", self.state);
            return;
        }
        self.state = match outcome {
            Ok(()) => SubmissionState::Success,
            Err(err) => {
                debug!("delivery failed: {}", err);
                SubmissionState::Failed(err)
            }
        };
    }

    /// End of the Success display window: fields cleared, back to Idle.
    pub fn settle(&mut self) {
        if self.state != SubmissionState::Success {
            return;
        }
        self.fields = ContactFields::default();
        self.state = SubmissionState::Idle;
    }
}

#[cfg(test)]
mod contact_form_tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::delivery::DeliveryError;

    fn filled() -> ContactFields {
        ContactFields {
            name: "João".to_string(),
            phone: "11999999999".to_string(),
            message: "Quero reservar uma mesa".to_string(),
        }
    }

    #[test]
    fn empty_fields_collect_all_required_errors() {
        init_logger();

        let mut form = ContactForm::new();
        let attempt = form.begin_submit();

        assert_eq!(attempt, SubmitAttempt::Invalid);
        assert_eq!(*form.state(), SubmissionState::Idle);
        assert_eq!(form.errors().len(), 3);
        assert_eq!(form.errors().name, Some(ERR_NAME_REQUIRED));
        assert_eq!(form.errors().phone, Some(ERR_PHONE_REQUIRED));
        assert_eq!(form.errors().message, Some(ERR_MESSAGE_REQUIRED));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = ContactForm::new();
        form.edit(ContactField::Name, "   ".to_string());
        form.edit(ContactField::Phone, "\t".to_string());
        form.edit(ContactField::Message, " \n ".to_string());

        assert_eq!(form.begin_submit(), SubmitAttempt::Invalid);
        for field in ContactField::iter() {
            assert!(form.errors().get(field).is_some(), "{} not flagged", field);
        }
    }

    #[test]
    fn over_limit_fields_get_length_errors() {
        let mut form = ContactForm::new();
        form.edit(ContactField::Name, "a".repeat(NAME_MAX_LEN + 1));
        form.edit(ContactField::Phone, "9".repeat(PHONE_MAX_LEN + 1));
        form.edit(ContactField::Message, "m".repeat(MESSAGE_MAX_LEN + 1));

        assert_eq!(form.begin_submit(), SubmitAttempt::Invalid);
        assert_eq!(form.errors().name, Some(ERR_NAME_TOO_LONG));
        assert_eq!(form.errors().phone, Some(ERR_PHONE_INVALID));
        assert_eq!(form.errors().message, Some(ERR_MESSAGE_TOO_LONG));
    }

    #[test]
    fn limits_are_inclusive() {
        let fields = ContactFields {
            name: "a".repeat(NAME_MAX_LEN),
            phone: "9".repeat(PHONE_MAX_LEN),
            message: "m".repeat(MESSAGE_MAX_LEN),
        };
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn surrounding_whitespace_does_not_count_toward_limits() {
        let fields = ContactFields {
            name: format!("  {}  ", "a".repeat(NAME_MAX_LEN)),
            phone: "11999999999".to_string(),
            message: "olá".to_string(),
        };
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn successful_cycle_resets_the_form() {
        init_logger();

        let mut form = ContactForm::new();
        let fields = filled();
        form.edit(ContactField::Name, fields.name.clone());
        form.edit(ContactField::Phone, fields.phone.clone());
        form.edit(ContactField::Message, fields.message.clone());

        let attempt = form.begin_submit();
        assert_eq!(attempt, SubmitAttempt::Accepted(fields));
        assert!(form.errors().is_empty());
        assert_eq!(*form.state(), SubmissionState::Submitting);

        form.complete(Ok(()));
        assert_eq!(*form.state(), SubmissionState::Success);

        form.settle();
        assert_eq!(*form.state(), SubmissionState::Idle);
        assert_eq!(*form.fields(), ContactFields::default());
    }

    #[test]
    fn accepted_payload_is_trimmed() {
        let mut form = ContactForm::new();
        form.edit(ContactField::Name, "  João  ".to_string());
        form.edit(ContactField::Phone, " 11999999999 ".to_string());
        form.edit(ContactField::Message, " olá ".to_string());

        let SubmitAttempt::Accepted(payload) = form.begin_submit() else {
            panic!("expected accepted attempt");
        };
        assert_eq!(payload.name, "João");
        assert_eq!(payload.phone, "11999999999");
        assert_eq!(payload.message, "olá");
    }

    #[test]
    fn editing_a_flagged_field_clears_only_its_error() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit(), SubmitAttempt::Invalid);
        assert_eq!(form.errors().len(), 3);

        form.edit(ContactField::Name, "J".to_string());

        assert!(form.errors().name.is_none());
        assert_eq!(form.errors().phone, Some(ERR_PHONE_REQUIRED));
        assert_eq!(form.errors().message, Some(ERR_MESSAGE_REQUIRED));
    }

    #[test]
    fn resubmit_while_in_flight_is_rejected() {
        let mut form = ContactForm::new();
        form.edit(ContactField::Name, filled().name);
        form.edit(ContactField::Phone, filled().phone);
        form.edit(ContactField::Message, filled().message);

        assert!(matches!(form.begin_submit(), SubmitAttempt::Accepted(_)));
        assert_eq!(form.begin_submit(), SubmitAttempt::Rejected);
        assert_eq!(*form.state(), SubmissionState::Submitting);

        form.complete(Ok(()));
        assert_eq!(form.begin_submit(), SubmitAttempt::Rejected);
        assert_eq!(*form.state(), SubmissionState::Success);
    }

    #[test]
    fn edits_are_ignored_while_in_flight() {
        let mut form = ContactForm::new();
        form.edit(ContactField::Name, filled().name);
        form.edit(ContactField::Phone, filled().phone);
        form.edit(ContactField::Message, filled().message);
        assert!(matches!(form.begin_submit(), SubmitAttempt::Accepted(_)));

        form.edit(ContactField::Name, "alterado".to_string());
        assert_eq!(form.fields().name, filled().name);
    }

    #[test]
    fn failed_delivery_keeps_fields_and_allows_retry() {
        init_logger();

        let mut form = ContactForm::new();
        form.edit(ContactField::Name, filled().name);
        form.edit(ContactField::Phone, filled().phone);
        form.edit(ContactField::Message, filled().message);
        assert!(matches!(form.begin_submit(), SubmitAttempt::Accepted(_)));

        let err = DeliveryError::Transport("sem conexão".to_string());
        form.complete(Err(err.clone()));
        assert_eq!(*form.state(), SubmissionState::Failed(err));
        assert_eq!(form.fields().name, filled().name);
        assert!(form.errors().is_empty());

        // retry goes through validation again
        assert!(matches!(form.begin_submit(), SubmitAttempt::Accepted(_)));
        assert_eq!(*form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn errors_are_cleared_before_revalidation() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit(), SubmitAttempt::Invalid);
        assert_eq!(form.errors().len(), 3);

        form.edit(ContactField::Name, filled().name);
        form.edit(ContactField::Phone, filled().phone);
        form.edit(ContactField::Message, filled().message);

        assert!(matches!(form.begin_submit(), SubmitAttempt::Accepted(_)));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn stale_delivery_outcome_is_ignored_after_settle() {
        let mut form = ContactForm::new();
        form.edit(ContactField::Name, filled().name);
        form.edit(ContactField::Phone, filled().phone);
        form.edit(ContactField::Message, filled().message);
        assert!(matches!(form.begin_submit(), SubmitAttempt::Accepted(_)));
        form.complete(Ok(()));
        form.settle();

        form.complete(Err(DeliveryError::Transport("tarde demais".to_string())));
        assert_eq!(*form.state(), SubmissionState::Idle);

        form.settle();
        assert_eq!(*form.state(), SubmissionState::Idle);
    }

    fn init_logger() {
        let _ = tracing_subscriber::fmt()
            .event_format(
                tracing_subscriber::fmt::format()
                    .with_file(true)
                    .with_line_number(true),
            )
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or(
                        tracing_subscriber::EnvFilter::from_str("barbucho=trace").unwrap(),
                    ),
            )
            .try_init();
    }
}
