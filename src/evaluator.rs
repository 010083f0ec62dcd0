//! Password evaluator - strength and validation in a single report.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::entropy::entropy;
use crate::strength::StrengthLevel;
use crate::validator::{ValidationOutcome, Validator};

/// Delay before an async evaluation runs, so keystrokes in quick succession
/// only trigger the last one.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Strength and policy feedback for one password.
#[derive(Debug, Clone)]
pub struct PasswordReport {
    /// Estimated entropy in bits.
    pub entropy: f64,
    pub strength: StrengthLevel,
    pub outcome: ValidationOutcome,
}

impl PasswordReport {
    /// `true` when the password satisfies every rule of the validator.
    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid
    }
}

/// Evaluates a password's strength and validates it in one call.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `validator` - The rules the password must satisfy
///
/// # Returns
/// A `PasswordReport` with entropy, strength level and validation outcome.
pub fn evaluate_password(password: &SecretString, validator: &Validator) -> PasswordReport {
    let pwd = password.expose_secret();
    let bits = entropy(pwd);

    PasswordReport {
        entropy: bits,
        strength: StrengthLevel::from_entropy(bits),
        outcome: validator.validate(pwd),
    }
}

/// Async version that sends the report via channel.
///
/// Waits for [`DEBOUNCE`] first. If `token` is cancelled by then, typically
/// because a newer keystroke started another evaluation, nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    validator: &Validator,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before it started");
        return;
    }

    let report = evaluate_password(password, validator);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_tx(&secret("TestPass123!"), Validator::standard(), token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert!(report.is_valid());
        assert_eq!(report.strength, StrengthLevel::Strong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_tx(&secret("TestPass123!"), Validator::standard(), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_waits_for_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let start = tokio::time::Instant::now();

        evaluate_password_tx(&secret("abc"), Validator::standard(), token, tx).await;

        assert!(start.elapsed() >= DEBOUNCE);
        let report = rx.recv().await.expect("Should receive report");
        assert!(!report.is_valid());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_with_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must not panic when nobody listens anymore.
        evaluate_password_tx(
            &secret("TestPass123!"),
            Validator::standard(),
            CancellationToken::new(),
            tx,
        )
        .await;
    }
}
