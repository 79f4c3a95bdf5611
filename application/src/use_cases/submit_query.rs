//! Submit Query use case
//!
//! Runs one request/response cycle per activation of the submit control:
//! validate the question, show the placeholder, call the gateway, render the
//! answer or the error.

use crate::config::FormConfig;
use crate::ports::form_view::{FormHost, QueryFormView};
use crate::ports::query_gateway::QueryGateway;
use query_form_domain::{
    EMPTY_QUESTION_ALERT, QueryRequest, Question, ResultView, SubmitPolicy,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::{debug, error, info};

/// What a single activation ended with
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The question was empty; the user was alerted and nothing was sent
    Rejected,
    /// A request was already pending under [`SubmitPolicy::SingleFlight`]
    Busy,
    /// A newer activation started first under [`SubmitPolicy::LatestWins`];
    /// the response was dropped without rendering
    Superseded,
    /// The final state written to the result region
    Rendered(ResultView),
}

impl SubmitOutcome {
    /// Whether the activation rendered an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Rendered(view) if view.is_error())
    }
}

/// The synchronous half of an activation
pub enum Activation {
    /// The placeholder is shown and the request is ready to send
    Started(PendingSubmit),
    /// The activation ended without a request ([`SubmitOutcome::Rejected`]
    /// or [`SubmitOutcome::Busy`])
    Finished(SubmitOutcome),
}

/// A validated activation whose request has not completed yet.
///
/// Holds the single-flight flag until it is finished or dropped.
pub struct PendingSubmit {
    request: QueryRequest,
    ticket: u64,
    _flight: Option<FlightGuard>,
}

/// Controller binding the submit control to the query gateway
pub struct QueryFormController<G: QueryGateway + 'static, V: QueryFormView + 'static> {
    gateway: Arc<G>,
    view: Arc<V>,
    config: FormConfig,
    in_flight: Arc<AtomicBool>,
    latest: AtomicU64,
}

impl<G: QueryGateway + 'static, V: QueryFormView + 'static> QueryFormController<G, V> {
    /// Wire the controller to a host whose UI tree is ready.
    ///
    /// Returns `None` when the host has no submit control; nothing is bound
    /// in that case.
    pub fn initialize<H>(host: &H, gateway: Arc<G>, config: FormConfig) -> Option<Self>
    where
        H: FormHost<View = V>,
    {
        info!("Form host ready");

        if !host.has_submit_control() {
            error!("Submit control not found");
            return None;
        }

        info!("Submit control found (policy: {})", config.policy);
        Some(Self {
            gateway,
            view: host.view(),
            config,
            in_flight: Arc::new(AtomicBool::new(false)),
            latest: AtomicU64::new(0),
        })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Whether a request is pending under [`SubmitPolicy::SingleFlight`]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Handle one activation of the submit control
    pub async fn handle_submit(&self) -> SubmitOutcome {
        match self.begin_submit() {
            Activation::Started(pending) => self.finish_submit(pending).await,
            Activation::Finished(outcome) => outcome,
        }
    }

    /// Everything an activation does before the network call: policy check,
    /// validation and the placeholder.
    ///
    /// Hosts that keep accepting input while a request is pending call this
    /// on the input thread and run [`finish_submit`](Self::finish_submit) as
    /// a separate task, so the question is read at activation time.
    pub fn begin_submit(&self) -> Activation {
        debug!("Submit control activated");

        let flight = match self.config.policy {
            SubmitPolicy::SingleFlight => match FlightGuard::acquire(&self.in_flight) {
                Some(guard) => Some(guard),
                None => {
                    debug!("Request already pending, activation ignored");
                    return Activation::Finished(SubmitOutcome::Busy);
                }
            },
            _ => None,
        };

        let question = match Question::try_new(self.view.question()) {
            Ok(q) => q,
            Err(_) => {
                self.view.alert(EMPTY_QUESTION_ALERT);
                return Activation::Finished(SubmitOutcome::Rejected);
            }
        };

        let ticket = self.latest.fetch_add(1, Ordering::AcqRel) + 1;

        self.view.render(&ResultView::Pending);

        Activation::Started(PendingSubmit {
            request: QueryRequest::new(question),
            ticket,
            _flight: flight,
        })
    }

    /// Send the request of a started activation and render the outcome
    pub async fn finish_submit(&self, pending: PendingSubmit) -> SubmitOutcome {
        info!("Sending query");
        let view = match self.gateway.query(&pending.request).await {
            Ok(result) => {
                info!("Query answered");
                ResultView::Success(result)
            }
            Err(e) => {
                error!("Query failed: {}", e);
                ResultView::error(e.to_string())
            }
        };

        if self.config.policy == SubmitPolicy::LatestWins
            && self.latest.load(Ordering::Acquire) != pending.ticket
        {
            debug!("Dropping response to activation #{}", pending.ticket);
            return SubmitOutcome::Superseded;
        }

        self.view.render(&view);
        SubmitOutcome::Rendered(view)
    }
}

/// Holds the single-flight flag until dropped, on every exit path.
struct FlightGuard {
    flag: Arc<AtomicBool>,
}

impl FlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
