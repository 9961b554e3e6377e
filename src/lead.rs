use std::rc::Rc;

use gloo_net::http::Request;
use log::{info, warn};
use thiserror::Error;
use yew::Reducible;

use crate::config;

/// Field values of the early-access form at the moment it is submitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub comments: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("form endpoint answered with status {0}")]
    Status(u16),
}

impl From<gloo_net::Error> for SubmitError {
    fn from(e: gloo_net::Error) -> Self {
        SubmitError::Transport(e.to_string())
    }
}

impl LeadForm {
    /// Same rule as the inputs' `required` attribute: the value must not be empty.
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("company", &self.company),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        Ok(())
    }

    /// `application/x-www-form-urlencoded` body. Empty comments are left out.
    pub fn encode(&self) -> String {
        let mut pairs = vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("company", self.company.as_str()),
        ];
        if let Some(comments) = self.comments.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("comments", comments));
        }
        pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// What the visitor has typed so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub comments: String,
}

pub enum FieldEdit {
    Name(String),
    Email(String),
    Company(String),
    Comments(String),
}

pub enum LeadAction {
    Edit(FieldEdit),
    Settled(Result<(), SubmitError>),
}

impl LeadFields {
    pub fn edit(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(value) => self.name = value,
            FieldEdit::Email(value) => self.email = value,
            FieldEdit::Company(value) => self.company = value,
            FieldEdit::Comments(value) => self.comments = value,
        }
    }

    /// Cleared after a delivered lead; kept as typed so a failed one can be resent.
    pub fn apply(&mut self, outcome: &Result<(), SubmitError>) {
        if outcome.is_ok() {
            *self = LeadFields::default();
        }
    }

    pub fn to_form(&self) -> LeadForm {
        LeadForm {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            comments: Some(self.comments.clone()).filter(|c| !c.trim().is_empty()),
        }
    }
}

impl Reducible for LeadFields {
    type Action = LeadAction;

    fn reduce(self: Rc<Self>, action: LeadAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LeadAction::Edit(edit) => next.edit(edit),
            LeadAction::Settled(outcome) => next.apply(&outcome),
        }
        Rc::new(next)
    }
}

/// Sends the lead to the form endpoint. Only the status code matters.
pub async fn submit_lead(endpoint: &str, form: &LeadForm) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form.encode())
        .send()
        .await?;

    if response.ok() {
        info!("Lead submitted for {}", form.company);
        Ok(())
    } else {
        warn!("Form endpoint rejected lead: {}", response.status());
        Err(SubmitError::Status(response.status()))
    }
}

pub async fn submit(form: &LeadForm) -> Result<(), SubmitError> {
    submit_lead(config::FORM_ENDPOINT, form).await
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FormStatus {
    pub fn button_label(self) -> &'static str {
        match self {
            FormStatus::Loading => "Enviando...",
            FormStatus::Success => "✓ Enviado com sucesso!",
            FormStatus::Idle | FormStatus::Error => "Quero Acesso Antecipado",
        }
    }

    /// Line shown under the submit button, with its CSS class.
    pub fn notice(self) -> Option<(&'static str, &'static str)> {
        match self {
            FormStatus::Idle => Some((
                "form-disclaimer",
                "Ao enviar, você concorda com nossa Política de Privacidade.",
            )),
            FormStatus::Success => Some((
                "form-success",
                "✓ Obrigado! Entraremos em contato em breve.",
            )),
            FormStatus::Error => Some(("form-error", "✗ Erro no envio. Tente novamente.")),
            FormStatus::Loading => None,
        }
    }
}

/// Identifies one submission attempt so late callbacks can be told apart
/// from the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attempt(u64);

/// Lifecycle of the lead form: idle → loading → success/error → idle.
#[derive(Debug, Default)]
pub struct SubmissionController {
    status: FormStatus,
    attempt: u64,
}

impl SubmissionController {
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Starts a new attempt, or returns `None` while one is in flight.
    pub fn begin(&mut self) -> Option<Attempt> {
        if self.status == FormStatus::Loading {
            return None;
        }
        self.attempt += 1;
        self.status = FormStatus::Loading;
        Some(Attempt(self.attempt))
    }

    /// Records the outcome of `attempt`. Returns false if it is stale.
    pub fn finish(&mut self, attempt: Attempt, outcome: &Result<(), SubmitError>) -> bool {
        if attempt.0 != self.attempt || self.status != FormStatus::Loading {
            return false;
        }
        self.status = match outcome {
            Ok(()) => FormStatus::Success,
            Err(_) => FormStatus::Error,
        };
        true
    }

    /// Auto-reset after the status message has been shown.
    pub fn expire(&mut self, attempt: Attempt) -> bool {
        let settled = matches!(self.status, FormStatus::Success | FormStatus::Error);
        if attempt.0 != self.attempt || !settled {
            return false;
        }
        self.status = FormStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        LeadForm {
            name: "Ana Souza".into(),
            email: "ana@empresa.com.br".into(),
            company: "Souza & Filhos".into(),
            comments: None,
        }
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        assert_eq!(filled().validate(), Ok(()));

        let form = LeadForm { name: String::new(), ..filled() };
        assert_eq!(form.validate(), Err(FormError::MissingField("name")));

        let form = LeadForm { company: String::new(), ..filled() };
        assert_eq!(form.validate(), Err(FormError::MissingField("company")));

        let form = LeadForm { comments: Some(String::new()), ..filled() };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn body_is_form_encoded() {
        assert_eq!(
            filled().encode(),
            "name=Ana%20Souza&email=ana%40empresa.com.br&company=Souza%20%26%20Filhos"
        );

        let form = LeadForm { comments: Some("Lucro Real, 2025".into()), ..filled() };
        assert!(form.encode().ends_with("&comments=Lucro%20Real%2C%202025"));

        let form = LeadForm { comments: Some(String::new()), ..filled() };
        assert!(!form.encode().contains("comments"));
    }

    #[test]
    fn successful_submission_goes_loading_success_idle() {
        let mut controller = SubmissionController::default();
        assert_eq!(controller.status(), FormStatus::Idle);

        let attempt = controller.begin().unwrap();
        assert_eq!(controller.status(), FormStatus::Loading);

        assert!(controller.finish(attempt, &Ok(())));
        assert_eq!(controller.status(), FormStatus::Success);

        assert!(controller.expire(attempt));
        assert_eq!(controller.status(), FormStatus::Idle);
    }

    #[test]
    fn rejected_or_failed_submission_goes_to_error() {
        let mut controller = SubmissionController::default();

        let attempt = controller.begin().unwrap();
        assert!(controller.finish(attempt, &Err(SubmitError::Status(422))));
        assert_eq!(controller.status(), FormStatus::Error);
        assert!(controller.expire(attempt));

        let attempt = controller.begin().unwrap();
        let outcome = Err(SubmitError::Transport("network down".into()));
        assert!(controller.finish(attempt, &outcome));
        assert_eq!(controller.status(), FormStatus::Error);
        assert!(controller.expire(attempt));
        assert_eq!(controller.status(), FormStatus::Idle);
    }

    #[test]
    fn no_second_attempt_while_loading() {
        let mut controller = SubmissionController::default();
        let attempt = controller.begin().unwrap();

        assert_eq!(controller.begin(), None);
        assert_eq!(controller.status(), FormStatus::Loading);

        assert!(controller.finish(attempt, &Ok(())));
        assert!(controller.begin().is_some());
    }

    #[test]
    fn stale_reset_does_not_clobber_newer_attempt() {
        let mut controller = SubmissionController::default();
        let first = controller.begin().unwrap();
        assert!(controller.finish(first, &Err(SubmitError::Status(500))));

        // Resubmitted inside the five second window
        let second = controller.begin().unwrap();
        assert!(!controller.expire(first));
        assert_eq!(controller.status(), FormStatus::Loading);

        assert!(controller.finish(second, &Ok(())));
        assert!(!controller.expire(first));
        assert_eq!(controller.status(), FormStatus::Success);
        assert!(controller.expire(second));
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut controller = SubmissionController::default();
        let first = controller.begin().unwrap();
        assert!(controller.finish(first, &Ok(())));
        let second = controller.begin().unwrap();

        assert!(!controller.finish(first, &Err(SubmitError::Status(500))));
        assert_eq!(controller.status(), FormStatus::Loading);
        assert!(controller.finish(second, &Ok(())));
    }

    #[test]
    fn expire_while_loading_is_a_no_op() {
        let mut controller = SubmissionController::default();
        let attempt = controller.begin().unwrap();
        assert!(!controller.expire(attempt));
        assert_eq!(controller.status(), FormStatus::Loading);
    }

    fn typed() -> LeadFields {
        LeadFields {
            name: "Ana Souza".into(),
            email: "ana@empresa.com.br".into(),
            company: "Souza & Filhos".into(),
            comments: "Lucro Real".into(),
        }
    }

    #[test]
    fn fields_are_cleared_after_success() {
        let mut fields = typed();
        fields.apply(&Ok(()));
        assert_eq!(fields, LeadFields::default());
    }

    #[test]
    fn fields_survive_a_failed_submission() {
        let mut fields = typed();
        fields.apply(&Err(SubmitError::Status(500)));
        assert_eq!(fields, typed());

        fields.apply(&Err(SubmitError::Transport("offline".into())));
        assert_eq!(fields, typed());
    }

    #[test]
    fn reducer_edits_then_settles() {
        let state = Rc::new(LeadFields::default());
        let state = state.reduce(LeadAction::Edit(FieldEdit::Name("Ana".into())));
        let state = state.reduce(LeadAction::Edit(FieldEdit::Comments("  ".into())));
        assert_eq!(state.name, "Ana");
        assert_eq!(state.to_form().comments, None);

        let kept = state.clone().reduce(LeadAction::Settled(Err(SubmitError::Status(422))));
        assert_eq!(kept.name, "Ana");

        let cleared = kept.reduce(LeadAction::Settled(Ok(())));
        assert_eq!(*cleared, LeadFields::default());
    }

    #[test]
    fn typed_fields_become_the_submitted_form() {
        let form = typed().to_form();
        assert_eq!(form.company, "Souza & Filhos");
        assert_eq!(form.comments.as_deref(), Some("Lucro Real"));
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn labels_follow_status() {
        assert_eq!(FormStatus::Loading.button_label(), "Enviando...");
        assert_eq!(FormStatus::Error.button_label(), "Quero Acesso Antecipado");
        assert_eq!(FormStatus::Loading.notice(), None);
        assert_eq!(FormStatus::Error.notice().map(|(class, _)| class), Some("form-error"));
    }
}
