use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Mutex;

use crate::modules::payments::adapters::outbound::checkout_sdk::{
    CashfreeCheckout, CashfreeRedirect, ModalResult, RazorpayCheckout, RazorpayOptions,
};
use crate::modules::payments::adapters::outbound::payment_backend_in_memory::expected_signature;
use crate::modules::payments::core::gateway::GatewayResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedOutcome {
    Pay,
    PayWithBadSignature,
    Dismiss,
    Crash,
}

/// Plays back queued buyer behaviour. An empty queue means the buyer closes the modal.
pub struct ScriptedRazorpay {
    loaded: AtomicBool,
    outcomes: Mutex<VecDeque<ScriptedOutcome>>,
    pub opened: Mutex<Vec<RazorpayOptions>>,
    payments: AtomicU64,
}

impl Default for ScriptedRazorpay {
    fn default() -> Self {
        Self {
            loaded: AtomicBool::new(true),
            outcomes: Mutex::new(VecDeque::new()),
            opened: Mutex::new(Vec::new()),
            payments: AtomicU64::new(0),
        }
    }
}

impl ScriptedRazorpay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loaded(&self, loaded: bool) {
        self.loaded.store(loaded, Ordering::SeqCst);
    }

    pub async fn script(&self, outcome: ScriptedOutcome) {
        self.outcomes.lock().await.push_back(outcome);
    }

    pub async fn open_count(&self) -> usize {
        self.opened.lock().await.len()
    }
}

#[async_trait]
impl RazorpayCheckout for ScriptedRazorpay {
    fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    async fn open(&self, options: RazorpayOptions) -> anyhow::Result<ModalResult> {
        let outcome = self
            .outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or(ScriptedOutcome::Dismiss);
        let gateway_order_id = options.gateway_order_id.clone();
        self.opened.lock().await.push(options);

        let payment_id = format!(
            "pay_{}",
            self.payments.fetch_add(1, Ordering::SeqCst) + 1
        );
        match outcome {
            ScriptedOutcome::Dismiss => Ok(ModalResult::Dismissed),
            ScriptedOutcome::Crash => Err(anyhow::anyhow!("Razorpay modal crashed")),
            ScriptedOutcome::Pay => Ok(ModalResult::Completed(GatewayResponse {
                signature: expected_signature(&gateway_order_id, &payment_id),
                payment_id,
                gateway_order_id,
            })),
            ScriptedOutcome::PayWithBadSignature => Ok(ModalResult::Completed(GatewayResponse {
                signature: "forged".to_string(),
                payment_id,
                gateway_order_id,
            })),
        }
    }
}

pub struct RecordingCashfree {
    loaded: AtomicBool,
    pub redirects: Mutex<Vec<CashfreeRedirect>>,
}

impl Default for RecordingCashfree {
    fn default() -> Self {
        Self {
            loaded: AtomicBool::new(true),
            redirects: Mutex::new(Vec::new()),
        }
    }
}

impl RecordingCashfree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loaded(&self, loaded: bool) {
        self.loaded.store(loaded, Ordering::SeqCst);
    }
}

#[async_trait]
impl CashfreeCheckout for RecordingCashfree {
    fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    async fn redirect(&self, redirect: CashfreeRedirect) -> anyhow::Result<()> {
        tracing::info!(return_url = %redirect.return_url, "redirecting to Cashfree hosted checkout");
        self.redirects.lock().await.push(redirect);
        Ok(())
    }
}
