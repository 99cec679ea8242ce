use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::timers::Timers;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-() ]+$").expect("valid phone pattern"));

const PHONE_MIN_DIGITS: usize = 7;
const PHONE_MAX_DIGITS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("يرجى إدخال الاسم")]
    MissingName,
    #[error("يرجى إدخال البريد الإلكتروني")]
    MissingEmail,
    #[error("يرجى إدخال بريد إلكتروني صحيح")]
    InvalidEmail,
    #[error("يرجى إدخال رقم جوال صحيح")]
    InvalidPhone,
    #[error("يرجى كتابة رسالتك")]
    MissingMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> ValidationReport {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, FieldError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(Field::Email, FieldError::MissingEmail);
        } else if !EMAIL_RE.is_match(email) {
            errors.insert(Field::Email, FieldError::InvalidEmail);
        }

        let phone = self.phone.trim();
        if !phone.is_empty() {
            let digits = phone.chars().filter(char::is_ascii_digit).count();
            let digits_ok = (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits);
            if !PHONE_RE.is_match(phone) || !digits_ok {
                errors.insert(Field::Phone, FieldError::InvalidPhone);
            }
        }

        if self.message.trim().is_empty() {
            errors.insert(Field::Message, FieldError::MissingMessage);
        }

        ValidationReport { errors }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn flagged(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Drops the flag on a field the user is editing.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    pub fn can_submit(self) -> bool {
        self != SubmitPhase::Sending
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Busy,
    Invalid(ValidationReport),
    Accepted,
}

pub trait SubmissionView {
    fn show_phase(&mut self, phase: SubmitPhase);

    fn clear_form(&mut self);
}

struct FlowState<V, T: Timers> {
    view: V,
    timers: T,
    send_delay_ms: u32,
    dismiss_delay_ms: u32,
    phase: SubmitPhase,
    generation: u32,
    pending: Option<T::Handle>,
}

impl<V: SubmissionView, T: Timers> FlowState<V, T> {
    fn set_phase(&mut self, phase: SubmitPhase) {
        self.phase = phase;
        self.view.show_phase(phase);
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timers.clear_timeout(handle);
        }
    }
}

/// Simulated contact submission. There is no backend yet: a valid submit
/// shows as sending for `send_delay_ms`, then the form is cleared and the
/// success message stays up for `dismiss_delay_ms`.
pub struct SubmissionFlow<V, T>
where
    V: SubmissionView + 'static,
    T: Timers + 'static,
{
    state: Rc<RefCell<FlowState<V, T>>>,
}

impl<V, T> SubmissionFlow<V, T>
where
    V: SubmissionView + 'static,
    T: Timers + 'static,
{
    pub fn new(view: V, timers: T, send_delay_ms: u32, dismiss_delay_ms: u32) -> Self {
        Self {
            state: Rc::new(RefCell::new(FlowState {
                view,
                timers,
                send_delay_ms,
                dismiss_delay_ms,
                phase: SubmitPhase::Idle,
                generation: 0,
                pending: None,
            })),
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> SubmitPhase {
        self.state.borrow().phase
    }

    pub fn submit(&self, draft: &ContactDraft) -> SubmitOutcome {
        let delay = {
            let mut state = self.state.borrow_mut();
            if !state.phase.can_submit() {
                debug!("Submit ignored, a request is already sending");
                return SubmitOutcome::Busy;
            }
            let report = draft.validate();
            if !report.is_valid() {
                info!("Contact form has {} invalid fields", report.flagged().count());
                return SubmitOutcome::Invalid(report);
            }
            state.generation += 1;
            state.set_phase(SubmitPhase::Sending);
            state.send_delay_ms
        };
        arm(&self.state, delay, finish_sending);
        SubmitOutcome::Accepted
    }
}

impl<V, T> Drop for SubmissionFlow<V, T>
where
    V: SubmissionView + 'static,
    T: Timers + 'static,
{
    fn drop(&mut self) {
        self.state.borrow_mut().cancel_pending();
    }
}

type Step<V, T> = fn(&Rc<RefCell<FlowState<V, T>>>, u32);

fn arm<V, T>(state: &Rc<RefCell<FlowState<V, T>>>, delay_ms: u32, step: Step<V, T>)
where
    V: SubmissionView + 'static,
    T: Timers + 'static,
{
    let weak: Weak<RefCell<FlowState<V, T>>> = Rc::downgrade(state);
    let mut guard = state.borrow_mut();
    guard.cancel_pending();
    let generation = guard.generation;
    let handle = guard.timers.set_timeout(
        delay_ms,
        Box::new(move || {
            if let Some(state) = weak.upgrade() {
                step(&state, generation);
            }
        }),
    );
    guard.pending = Some(handle);
}

fn finish_sending<V, T>(state: &Rc<RefCell<FlowState<V, T>>>, generation: u32)
where
    V: SubmissionView + 'static,
    T: Timers + 'static,
{
    let delay = {
        let mut guard = state.borrow_mut();
        if guard.generation != generation || guard.phase != SubmitPhase::Sending {
            return;
        }
        guard.pending = None;
        info!("Contact request sent");
        guard.view.clear_form();
        guard.set_phase(SubmitPhase::Sent);
        guard.dismiss_delay_ms
    };
    arm(state, delay, dismiss_success);
}

fn dismiss_success<V, T>(state: &Rc<RefCell<FlowState<V, T>>>, generation: u32)
where
    V: SubmissionView + 'static,
    T: Timers + 'static,
{
    let mut guard = state.borrow_mut();
    // a newer submission owns the message now
    if guard.generation != generation || guard.phase != SubmitPhase::Sent {
        return;
    }
    guard.pending = None;
    guard.set_phase(SubmitPhase::Idle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::timers::manual::ManualClock;

    fn draft(name: &str, email: &str, phone: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_name_and_bad_email_flag_exactly_two_fields() {
        let report = draft("", "abc", "", "Need a quote for a 40ft container").validate();
        assert!(!report.is_valid());
        assert_eq!(report.flagged().collect::<Vec<_>>(), vec![Field::Name, Field::Email]);
        assert_eq!(report.error(Field::Email), Some(&FieldError::InvalidEmail));
    }

    #[test]
    fn complete_draft_is_valid() {
        let report = draft("Ayman", "ops@example.com", "+966 55 123 4567", "Hello").validate();
        assert!(report.is_valid());
    }

    #[test]
    fn blank_fields_count_as_missing() {
        let report = draft("   ", "  ", "", "\n").validate();
        assert_eq!(report.error(Field::Name), Some(&FieldError::MissingName));
        assert_eq!(report.error(Field::Email), Some(&FieldError::MissingEmail));
        assert_eq!(report.error(Field::Message), Some(&FieldError::MissingMessage));
        assert_eq!(report.error(Field::Phone), None);
    }

    #[test]
    fn email_shapes() {
        for good in ["a@b.co", "first.last@sub.example.org"] {
            assert!(draft("n", good, "", "m").validate().is_valid(), "{}", good);
        }
        for bad in ["abc", "a@b", "a b@c.com", "@c.com", "a@@b.com"] {
            let report = draft("n", bad, "", "m").validate();
            assert_eq!(report.error(Field::Email), Some(&FieldError::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn phone_is_optional_but_checked_when_given() {
        for bad in ["12345", "call me", "+1 (555) 123-45x7", "1234567890123456"] {
            let report = draft("n", "a@b.co", bad, "m").validate();
            assert_eq!(report.error(Field::Phone), Some(&FieldError::InvalidPhone), "{}", bad);
        }
        assert!(draft("n", "a@b.co", "(555) 123-4567", "m").validate().is_valid());
    }

    #[test]
    fn clearing_a_flag_leaves_the_rest() {
        let mut report = draft("", "abc", "", "").validate();
        report.clear(Field::Email);
        assert_eq!(report.flagged().collect::<Vec<_>>(), vec![Field::Name, Field::Message]);
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(FieldError::InvalidEmail.to_string(), "يرجى إدخال بريد إلكتروني صحيح");
    }

    #[test]
    fn no_double_submit_while_sending() {
        assert!(SubmitPhase::Idle.can_submit());
        assert!(!SubmitPhase::Sending.can_submit());
        assert!(SubmitPhase::Sent.can_submit());
    }

    #[derive(Default)]
    struct Shown {
        phases: Vec<SubmitPhase>,
        cleared: usize,
    }

    #[derive(Clone, Default)]
    struct RecordingForm(Rc<RefCell<Shown>>);

    impl SubmissionView for RecordingForm {
        fn show_phase(&mut self, phase: SubmitPhase) {
            self.0.borrow_mut().phases.push(phase);
        }

        fn clear_form(&mut self) {
            self.0.borrow_mut().cleared += 1;
        }
    }

    fn flow() -> (SubmissionFlow<RecordingForm, ManualClock>, RecordingForm, ManualClock) {
        let form = RecordingForm::default();
        let clock = ManualClock::new();
        let flow = SubmissionFlow::new(form.clone(), clock.clone(), 1500, 5000);
        (flow, form, clock)
    }

    fn complete() -> ContactDraft {
        draft("Ayman", "ops@example.com", "", "Two pallets from Jeddah")
    }

    #[test]
    fn success_clears_the_form_then_dismisses() {
        let (flow, form, clock) = flow();
        assert_eq!(flow.submit(&complete()), SubmitOutcome::Accepted);
        assert_eq!(flow.phase(), SubmitPhase::Sending);
        assert_eq!(clock.deadlines(), vec![1500]);

        clock.advance_to(1499);
        assert_eq!(flow.phase(), SubmitPhase::Sending);
        assert_eq!(form.0.borrow().cleared, 0);

        clock.advance_to(1500);
        assert_eq!(flow.phase(), SubmitPhase::Sent);
        assert_eq!(form.0.borrow().cleared, 1);
        assert_eq!(clock.deadlines(), vec![6500]);

        clock.advance_to(6500);
        assert_eq!(flow.phase(), SubmitPhase::Idle);
        assert!(clock.deadlines().is_empty());
        assert_eq!(
            form.0.borrow().phases,
            vec![SubmitPhase::Sending, SubmitPhase::Sent, SubmitPhase::Idle]
        );
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let (flow, form, clock) = flow();
        flow.submit(&complete());
        clock.advance_to(500);

        assert_eq!(flow.submit(&complete()), SubmitOutcome::Busy);
        assert_eq!(flow.submit(&draft("", "", "", "")), SubmitOutcome::Busy);
        assert_eq!(clock.deadlines(), vec![1500]);
        assert_eq!(form.0.borrow().phases, vec![SubmitPhase::Sending]);
    }

    #[test]
    fn earlier_dismissal_does_not_hide_a_newer_success() {
        let (flow, _form, clock) = flow();
        flow.submit(&complete());
        clock.advance_to(3000);
        assert_eq!(flow.phase(), SubmitPhase::Sent);

        assert_eq!(flow.submit(&complete()), SubmitOutcome::Accepted);
        assert_eq!(clock.deadlines(), vec![4500]);
        clock.advance_to(4500);
        assert_eq!(clock.deadlines(), vec![9500]);

        clock.advance_to(6500);
        assert_eq!(flow.phase(), SubmitPhase::Sent);
        clock.advance_to(9500);
        assert_eq!(flow.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn invalid_resubmit_keeps_the_pending_dismissal() {
        let (flow, form, clock) = flow();
        flow.submit(&complete());
        clock.advance_to(2000);

        match flow.submit(&draft("", "abc", "", "m")) {
            SubmitOutcome::Invalid(report) => {
                assert_eq!(report.flagged().collect::<Vec<_>>(), vec![Field::Name, Field::Email]);
            }
            other => panic!("expected invalid, got {:?}", other),
        }
        assert_eq!(flow.phase(), SubmitPhase::Sent);
        assert_eq!(clock.deadlines(), vec![6500]);
        assert_eq!(form.0.borrow().cleared, 1);

        clock.advance_to(6500);
        assert_eq!(flow.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn invalid_first_submit_schedules_nothing() {
        let (flow, form, clock) = flow();
        assert!(matches!(flow.submit(&ContactDraft::default()), SubmitOutcome::Invalid(_)));
        assert_eq!(flow.phase(), SubmitPhase::Idle);
        assert!(clock.deadlines().is_empty());
        assert!(form.0.borrow().phases.is_empty());
    }

    #[test]
    fn dropping_the_flow_cancels_its_timer() {
        let (flow, form, clock) = flow();
        flow.submit(&complete());
        drop(flow);
        assert!(clock.deadlines().is_empty());
        clock.advance_to(10_000);
        assert_eq!(form.0.borrow().cleared, 0);
    }
}
