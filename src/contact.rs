//! Contact form draft with a simulated delivery.

use futures_util::future::AbortHandle;
use std::{future::Future, time::Duration};

pub const DEFAULT_SEND_DELAY_MS: u64 = 1_000;
pub const DEFAULT_SUCCESS_VISIBLE_MS: u64 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Maps an input's `name` attribute back to its field.
    pub fn from_name(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }

        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactError {
    MissingField(ContactField),
    InvalidEmail,
    SubmissionInFlight,
}

impl ContactError {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::InvalidEmail => "invalid_email",
            Self::SubmissionInFlight => "submission_in_flight",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionId(u64);

impl SubmissionId {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Delivered(SubmissionId),
    HideSuccess(SubmissionId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeliveryTiming {
    pub send_delay: Duration,
    pub success_visible: Duration,
}

impl Default for DeliveryTiming {
    fn default() -> Self {
        Self {
            send_delay: Duration::from_millis(DEFAULT_SEND_DELAY_MS),
            success_visible: Duration::from_millis(DEFAULT_SUCCESS_VISIBLE_MS),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    in_flight: Option<SubmissionId>,
    success_for: Option<SubmissionId>,
    next_id: u64,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_submitted(&self) -> bool {
        self.success_for.is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        *self.draft.slot(field) = value.into();
    }

    /// Validates the draft and marks it in flight.
    pub fn begin_submit(&mut self) -> Result<SubmissionId, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::SubmissionInFlight);
        }
        self.draft.validate()?;

        let id = SubmissionId(self.next_id);
        self.next_id += 1;
        self.in_flight = Some(id);
        Ok(id)
    }

    /// Applies a delivery event. Events for other submissions are ignored.
    pub fn apply(&mut self, action: ContactAction) -> bool {
        match action {
            ContactAction::Delivered(id) if self.in_flight == Some(id) => {
                self.in_flight = None;
                self.draft = ContactDraft::default();
                self.success_for = Some(id);
                true
            }
            ContactAction::HideSuccess(id) if self.success_for == Some(id) => {
                self.success_for = None;
                true
            }
            _ => false,
        }
    }
}

/// Abort handles for deliveries that are still running.
///
/// Deliveries for different submissions run side by side; stale events are
/// dropped by [`ContactForm::apply`], so nothing is cancelled until teardown.
#[derive(Debug, Default)]
pub struct PendingDeliveries {
    handles: Vec<(SubmissionId, AbortHandle)>,
}

impl PendingDeliveries {
    pub fn track(&mut self, id: SubmissionId, handle: AbortHandle) {
        self.handles.push((id, handle));
    }

    pub fn finish(&mut self, id: SubmissionId) {
        self.handles.retain(|(pending, _)| *pending != id);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.handles.drain(..) {
            handle.abort();
        }
    }
}

/// Waits out the simulated round trip, then the success display.
pub async fn simulate_delivery<S, Fut, D>(id: SubmissionId, timing: DeliveryTiming, sleep: S, mut dispatch: D)
where
    S: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
    D: FnMut(ContactAction),
{
    sleep(timing.send_delay).await;
    dispatch(ContactAction::Delivered(id));
    sleep(timing.success_visible).await;
    dispatch(ContactAction::HideSuccess(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::abortable;
    use std::{cell::RefCell, rc::Rc};
    use tokio::time::Instant;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(ContactField::Name, "Ada");
        form.edit(ContactField::Email, "ada@example.com");
        form.edit(ContactField::Message, "Hello there");
        form
    }

    #[test]
    fn empty_fields_block_submission() {
        let mut form = ContactForm::default();
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(ContactField::Name))
        );

        form.edit(ContactField::Name, "Ada");
        form.edit(ContactField::Email, "ada@example.com");
        form.edit(ContactField::Message, "   ");
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(ContactField::Message))
        );
        assert!(form.can_submit());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled_form();
        for email in ["ada", "@example.com", "ada@", "ada@@example.com", "a da@example.com"] {
            form.edit(ContactField::Email, email);
            assert_eq!(form.begin_submit(), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn submit_disables_until_delivered() {
        let mut form = filled_form();
        let id = form.begin_submit().expect("filled form submits");

        assert!(form.is_submitting());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(ContactError::SubmissionInFlight));

        assert!(form.apply(ContactAction::Delivered(id)));
        assert!(form.can_submit());
        assert!(form.is_submitted());
        assert_eq!(*form.draft(), ContactDraft::default());

        assert!(form.apply(ContactAction::HideSuccess(id)));
        assert!(!form.is_submitted());
    }

    #[test]
    fn stale_hide_does_not_clear_newer_success() {
        let mut form = filled_form();
        let first = form.begin_submit().expect("first submission");
        form.apply(ContactAction::Delivered(first));

        form.edit(ContactField::Name, "Grace");
        form.edit(ContactField::Email, "grace@example.com");
        form.edit(ContactField::Message, "Again");
        let second = form.begin_submit().expect("second submission");
        assert_ne!(first, second);

        assert!(form.apply(ContactAction::HideSuccess(first)));
        assert!(form.apply(ContactAction::Delivered(second)));
        assert!(!form.apply(ContactAction::HideSuccess(first)));
        assert!(!form.apply(ContactAction::Delivered(first)));
        assert!(form.is_submitted());
    }

    #[test]
    fn field_names_round_trip_through_input_names() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(ContactField::from_name("phone"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_delivery_follows_fixed_timings() {
        let form = Rc::new(RefCell::new(filled_form()));
        let id = form.borrow_mut().begin_submit().expect("filled form submits");
        let start = Instant::now();
        let events = Rc::new(RefCell::new(Vec::new()));

        {
            let form = Rc::clone(&form);
            let events = Rc::clone(&events);
            simulate_delivery(id, DeliveryTiming::default(), tokio::time::sleep, move |action| {
                events.borrow_mut().push((start.elapsed(), action));
                form.borrow_mut().apply(action);
            })
            .await;
        }

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].1, ContactAction::Delivered(id));
        assert!(events[0].0 >= Duration::from_millis(1_000));
        assert!(events[0].0 < Duration::from_millis(1_100));
        assert_eq!(events[1].1, ContactAction::HideSuccess(id));
        assert!(events[1].0 >= Duration::from_millis(4_000));
        assert!(events[1].0 < Duration::from_millis(4_100));

        let form = form.borrow();
        assert!(form.can_submit());
        assert!(!form.is_submitted());
        assert_eq!(*form.draft(), ContactDraft::default());
    }

    #[tokio::test(start_paused = true)]
    async fn aborted_delivery_dispatches_nothing() {
        let mut form = filled_form();
        let id = form.begin_submit().expect("filled form submits");
        let dispatched = RefCell::new(Vec::new());

        let (delivery, handle) = abortable(simulate_delivery(
            id,
            DeliveryTiming::default(),
            tokio::time::sleep,
            |action| dispatched.borrow_mut().push(action),
        ));
        handle.abort();

        assert!(delivery.await.is_err());
        assert!(dispatched.borrow().is_empty());
        assert!(form.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn earlier_banner_hides_on_schedule_while_next_submission_is_in_flight() {
        let timing = DeliveryTiming {
            send_delay: Duration::from_millis(2_000),
            success_visible: Duration::from_millis(500),
        };
        let form = Rc::new(RefCell::new(filled_form()));
        let start = Instant::now();
        let events = Rc::new(RefCell::new(Vec::new()));
        let record = |form: Rc<RefCell<ContactForm>>, events: Rc<RefCell<Vec<_>>>| {
            move |action: ContactAction| {
                let applied = form.borrow_mut().apply(action);
                let submitted = form.borrow().is_submitted();
                events.borrow_mut().push((start.elapsed(), action, applied, submitted));
            }
        };

        let first = form.borrow_mut().begin_submit().expect("first submission");
        let first_delivery = simulate_delivery(
            first,
            timing,
            tokio::time::sleep,
            record(Rc::clone(&form), Rc::clone(&events)),
        );
        let second_delivery = {
            let form = Rc::clone(&form);
            let events = Rc::clone(&events);
            async move {
                tokio::time::sleep(Duration::from_millis(2_200)).await;
                form.borrow_mut().edit(ContactField::Name, "Grace");
                form.borrow_mut().edit(ContactField::Email, "grace@example.com");
                form.borrow_mut().edit(ContactField::Message, "Again");
                let second = form.borrow_mut().begin_submit().expect("second submission");
                simulate_delivery(second, timing, tokio::time::sleep, record(Rc::clone(&form), events)).await;
                second
            }
        };

        let ((), second) = tokio::join!(first_delivery, second_delivery);

        let events = events.borrow();
        assert_eq!(events.len(), 4);

        let (at, action, applied, submitted) = events[1];
        assert_eq!(action, ContactAction::HideSuccess(first));
        assert!(at >= Duration::from_millis(2_500) && at < Duration::from_millis(2_600));
        assert!(applied);
        assert!(!submitted);

        let (at, action, applied, submitted) = events[2];
        assert_eq!(action, ContactAction::Delivered(second));
        assert!(at >= Duration::from_millis(4_200) && at < Duration::from_millis(4_300));
        assert!(applied && submitted);

        let (at, action, applied, submitted) = events[3];
        assert_eq!(action, ContactAction::HideSuccess(second));
        assert!(at >= Duration::from_millis(4_700) && at < Duration::from_millis(4_800));
        assert!(applied && !submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn pending_deliveries_abort_only_what_is_still_running() {
        let mut form = filled_form();
        let first = form.begin_submit().expect("first submission");
        let dispatched = RefCell::new(Vec::new());
        let mut pending = PendingDeliveries::default();

        let (finished, finished_handle) = abortable(async {});
        pending.track(first, finished_handle);
        assert!(finished.await.is_ok());
        pending.finish(first);
        assert!(pending.is_empty());

        let second = SubmissionId(first.get() + 1);
        let (running, running_handle) = abortable(simulate_delivery(
            second,
            DeliveryTiming::default(),
            tokio::time::sleep,
            |action| dispatched.borrow_mut().push(action),
        ));
        pending.track(second, running_handle);
        assert_eq!(pending.len(), 1);

        pending.abort_all();
        assert!(pending.is_empty());
        assert!(running.await.is_err());
        assert!(dispatched.borrow().is_empty());
    }
}
