use crate::domain::form::FormStep;
use crate::domain::notification::Notification;
use crate::domain::ports::{NotifierBox, RelayClientBox};
use crate::domain::relay::DonationRequest;

/// The main entry point for the donation top-up flow.
///
/// `DonationFlow` owns the current step and the two entered fields, and
/// drives the single network interaction through the injected ports.
/// Submission outcomes never move the step; the user navigates back
/// explicitly.
pub struct DonationFlow {
    step: FormStep,
    nickname: String,
    amount: String,
    relay: RelayClientBox,
    notifier: NotifierBox,
}

impl DonationFlow {
    /// Creates a new flow at the `Form` step with empty fields.
    ///
    /// # Arguments
    ///
    /// * `relay` - The client used to submit confirmed requests.
    /// * `notifier` - The sink for user-facing notifications.
    pub fn new(relay: RelayClientBox, notifier: NotifierBox) -> Self {
        Self {
            step: FormStep::default(),
            nickname: String::new(),
            amount: String::new(),
            relay,
            notifier,
        }
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Replaces the entered nickname. The fields stay editable at any step.
    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    /// Replaces the entered amount.
    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    /// Validates the entered fields and advances to the `Payment` step.
    ///
    /// Both fields must be non-empty; nothing else is checked and no
    /// network traffic happens here. On failure the step is left unchanged
    /// and a destructive notification is emitted. Validation re-runs in
    /// full on every attempt.
    pub async fn submit(&mut self) {
        if self.nickname.is_empty() || self.amount.is_empty() {
            self.notifier
                .notify(Notification::destructive("Error", "Fill in all fields"))
                .await;
            return;
        }
        self.step = FormStep::Payment;
    }

    /// Returns to the `Form` step, keeping the entered values.
    ///
    /// Idempotent: calling it while already at `Form` is a no-op.
    pub fn go_back(&mut self) {
        self.step = FormStep::Form;
    }

    /// Reports the payment as made and submits the request to the relay.
    ///
    /// Meant to be called from the `Payment` step; the step is neither
    /// checked nor changed here, so the caller decides when to navigate
    /// back. Every outcome is terminal for this attempt and is reported
    /// through the notifier: accepted requests as an informational
    /// notification naming the amount and nickname, rejections with the
    /// relay's error string when it sent one, transport failures with a
    /// generic connectivity message. There is no retry and no in-flight
    /// guard against overlapping calls.
    pub async fn confirm_payment(&self) {
        let amount = match self.amount.trim().parse::<i64>() {
            Ok(amount) => amount,
            Err(_) => {
                self.notifier
                    .notify(Notification::destructive(
                        "Error",
                        "Amount must be a whole number",
                    ))
                    .await;
                return;
            }
        };

        let request = DonationRequest {
            nickname: self.nickname.clone(),
            amount,
        };

        match self.relay.submit(&request).await {
            Ok(response) if response.status_ok && response.reply.success => {
                self.notifier
                    .notify(Notification::info(
                        "✅ Request sent",
                        format!(
                            "Details were sent to the administrator. Expect {} donation rubles \
                             to be credited to {}",
                            self.amount.trim(),
                            self.nickname
                        ),
                    ))
                    .await;
            }
            Ok(response) => {
                tracing::warn!(
                    status_ok = response.status_ok,
                    "relay rejected the request"
                );
                let description = response
                    .reply
                    .error
                    .unwrap_or_else(|| "Failed to send the request".to_string());
                self.notifier
                    .notify(Notification::destructive("Error", description))
                    .await;
            }
            Err(err) => {
                tracing::warn!(%err, "relay request failed");
                self.notifier
                    .notify(Notification::destructive(
                        "Connection error",
                        "Check your internet connection",
                    ))
                    .await;
            }
        }
    }
}
