use crate::config::toml_config::is_endpoint_configured;
use crate::core::message::MessageArea;
use crate::domain::model::{ElementHandle, EnquiryRecord, FormState, MessageKind};
use crate::domain::ports::{Dom, EnquirySink};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::Validate;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

pub const LOADING_CLASS: &str = "loading";
pub const SUCCESS_MESSAGE: &str = "Enquiry sent successfully ✅";
pub const FAILURE_MESSAGE: &str = "Submission failed. Try again later.";

/// Elements and timings the form controller is built from.
pub struct EnquiryFormParts<D: Dom> {
    pub dom: Arc<D>,
    pub form: ElementHandle,
    pub submit_button: ElementHandle,
    pub messages: MessageArea<D>,
    pub endpoint: String,
    pub success_lock: Duration,
}

/// Drives the enquiry form through `Idle → Submitting → Success | Failure → Idle`.
pub struct EnquiryForm<D: Dom, S: EnquirySink> {
    dom: Arc<D>,
    form: ElementHandle,
    submit_button: ElementHandle,
    messages: MessageArea<D>,
    sink: S,
    endpoint: String,
    success_lock: Duration,
    state: Mutex<FormState>,
}

/// Clears the loading style and returns the form to `Idle` when a submission
/// attempt ends, including when its future is dropped mid-flight.
struct AttemptGuard<'a, D: Dom> {
    dom: &'a D,
    submit_button: ElementHandle,
    state: &'a Mutex<FormState>,
}

impl<D: Dom> Drop for AttemptGuard<'_, D> {
    fn drop(&mut self) {
        self.dom.remove_class(self.submit_button, LOADING_CLASS);
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = FormState::Idle;
        tracing::debug!("Enquiry form back to Idle");
    }
}

impl<D: Dom, S: EnquirySink> EnquiryForm<D, S> {
    pub fn new(parts: EnquiryFormParts<D>, sink: S) -> Self {
        Self {
            dom: parts.dom,
            form: parts.form,
            submit_button: parts.submit_button,
            messages: parts.messages,
            sink,
            endpoint: parts.endpoint,
            success_lock: parts.success_lock,
            state: Mutex::new(FormState::Idle),
        }
    }

    pub fn state(&self) -> FormState {
        *self.lock_state()
    }

    /// Handles a submit event. Returns the record that was accepted by the webhook.
    pub async fn submit(&self) -> Result<EnquiryRecord> {
        {
            let mut state = self.lock_state();
            if *state != FormState::Idle {
                tracing::debug!("Submit ignored while {:?}", *state);
                return Err(SiteError::Busy);
            }

            if self.dom.is_disabled(self.submit_button) {
                tracing::debug!("Submit ignored while the submit control is disabled");
                return Err(SiteError::Busy);
            }

            if !is_endpoint_configured(&self.endpoint) {
                tracing::error!("Enquiry endpoint is not configured");
                let err = SiteError::EndpointNotConfigured;
                self.messages.show(err.user_friendly_message(), MessageKind::Error);
                return Err(err);
            }

            *state = FormState::Submitting;
        }

        self.dom.add_class(self.submit_button, LOADING_CLASS);
        let _guard = AttemptGuard {
            dom: self.dom.as_ref(),
            submit_button: self.submit_button,
            state: &self.state,
        };

        let outcome = self.attempt().await;
        match &outcome {
            Ok(_) => self.set_state(FormState::Success),
            Err(_) => self.set_state(FormState::Failure),
        }
        outcome
    }

    async fn attempt(&self) -> Result<EnquiryRecord> {
        let record = EnquiryRecord::collect(|name| self.dom.field_value(self.form, name));

        if let Err(err) = record.validate() {
            tracing::debug!("Enquiry rejected by validation: {}", err);
            self.messages.show(err.user_friendly_message(), MessageKind::Error);
            return Err(err);
        }

        let result = match self.sink.submit(&record).await {
            Ok(receipt) if receipt.is_success() => Ok(record),
            Ok(receipt) => Err(SiteError::Rejected {
                status: receipt.status,
            }),
            Err(err) => Err(err),
        };

        match result {
            Ok(record) => {
                tracing::info!("Enquiry from {} recorded", record.full_name);
                self.messages.show(SUCCESS_MESSAGE, MessageKind::Success);
                self.dom.reset_form(self.form);
                self.lock_submit_button();
                Ok(record)
            }
            Err(err) => {
                tracing::error!("Enquiry submission failed: {}", err);
                self.messages.show(FAILURE_MESSAGE, MessageKind::Error);
                Err(err)
            }
        }
    }

    /// Disables the submit control for `success_lock`, then re-enables it.
    fn lock_submit_button(&self) {
        self.dom.set_disabled(self.submit_button, true);

        let dom = Arc::clone(&self.dom);
        let button = self.submit_button;
        let lock = self.success_lock;
        tokio::spawn(async move {
            tokio::time::sleep(lock).await;
            dom.set_disabled(button, false);
        });
    }

    fn set_state(&self, next: FormState) {
        let mut state = self.lock_state();
        tracing::debug!("Enquiry form {:?} -> {:?}", *state, next);
        *state = next;
    }

    fn lock_state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
