//! Password checker - assembles the signals and the corpus distance into a report.

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::corpus::{CorpusError, default_corpus_path};
use crate::scanner::find_minimum_distance_to_bad_password_in;
use crate::signals::{
    contains_digits, contains_mix_of_case, contains_special_chars, looks_like_a_pass_phrase,
};

/// Signals computed for one password.
///
/// With the `serde` feature, serializes to `passwordLength`,
/// `containsDigits`, `containsSpecialChars`, `containsUpperAndLower`,
/// `couldPossiblyBeAPassphrase`, `minimumDistanceToBadPassword`, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PasswordReport {
    /// Length in bytes.
    pub password_length: usize,
    pub contains_digits: bool,
    pub contains_special_chars: bool,
    pub contains_upper_and_lower: bool,
    pub could_possibly_be_a_passphrase: bool,
    /// Best-effort minimum over the part of the corpus scanned within budget.
    pub minimum_distance_to_bad_password: usize,
}

/// Checks a password against the shipped corpus.
///
/// # Errors
///
/// Fails with [`CorpusError`] when the corpus cannot be opened or read;
/// there is no partial report.
pub fn check_password(password: &SecretString) -> Result<PasswordReport, CorpusError> {
    check_password_with_corpus(password, default_corpus_path())
}

/// Same as [`check_password`] against a specific corpus file.
pub fn check_password_with_corpus<P: AsRef<Path>>(
    password: &SecretString,
    corpus: P,
) -> Result<PasswordReport, CorpusError> {
    let pwd = password.expose_secret();

    let minimum_distance_to_bad_password = find_minimum_distance_to_bad_password_in(pwd, corpus)?;

    Ok(PasswordReport {
        password_length: pwd.len(),
        contains_digits: contains_digits(pwd),
        contains_special_chars: contains_special_chars(pwd),
        contains_upper_and_lower: contains_mix_of_case(pwd),
        could_possibly_be_a_passphrase: looks_like_a_pass_phrase(pwd),
        minimum_distance_to_bad_password,
    })
}

/// Async version that runs the check on the blocking pool and sends the
/// outcome via channel.
///
/// Nothing is sent if `token` is cancelled before the check completes. The
/// scan itself is not interrupted; it runs to its budget and the result is
/// dropped.
#[cfg(feature = "async")]
pub async fn check_password_tx(
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<PasswordReport, CorpusError>>,
) {
    check_password_with_corpus_tx(password, default_corpus_path(), token, tx).await
}

/// Same as [`check_password_tx`] against a specific corpus file.
#[cfg(feature = "async")]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub async fn check_password_with_corpus_tx<P>(
    password: SecretString,
    corpus: P,
    token: CancellationToken,
    tx: mpsc::Sender<Result<PasswordReport, CorpusError>>,
) where
    P: AsRef<Path> + Send + 'static,
{
    if token.is_cancelled() {
        return;
    }

    #[cfg(feature = "tracing")]
    tracing::info!("password check is about to start...");

    let handle =
        tokio::task::spawn_blocking(move || check_password_with_corpus(&password, corpus));

    let outcome = tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("password check cancelled, result will be discarded");
            return;
        }
        joined = handle => match joined {
            Ok(outcome) => outcome,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("password check task failed: {}", e);
                return;
            }
        },
    };

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", e);
    }
}



#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use serial_test::serial;
    use std::io::{BufWriter, Write};
    use tempfile::NamedTempFile;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    /// Corpus large enough that a scan runs until the budget expires.
    fn setup_large_corpus() -> NamedTempFile {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let mut writer = BufWriter::new(temp_file.as_file());
        for i in 0..200_000 {
            writeln!(writer, "abcdefghijklmnopqrstuvwxyz0123456789-{}", i).expect("Failed to write");
        }
        writer.flush().expect("Failed to flush");
        drop(writer);
        temp_file
    }

    #[tokio::test]
    #[serial]
    async fn test_check_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        check_password_tx(secret("password1234"), token, tx).await;

        let report = rx
            .recv()
            .await
            .expect("Should receive report")
            .expect("Corpus should be readable");
        assert_eq!(report.password_length, 12);
        assert_eq!(report.minimum_distance_to_bad_password, 0);
    }

    #[tokio::test]
    async fn test_check_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        check_password_tx(secret("password1234"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    #[serial]
    async fn test_check_password_tx_cancelled_during_check() {
        let corpus = setup_large_corpus();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let task = tokio::spawn(check_password_with_corpus_tx(
            secret("Passphrases are more secure than passwords"),
            corpus.path().to_path_buf(),
            token.clone(),
            tx,
        ));

        // Lets the spawned check start and park on the select.
        tokio::task::yield_now().await;
        token.cancel();

        task.await.expect("check task should not panic");
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_check_password_with_corpus_tx_missing_corpus() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        check_password_with_corpus_tx(secret("password"), "/nonexistent/list.txt", token, tx).await;

        let outcome = rx.recv().await.expect("Should receive outcome");
        assert!(matches!(outcome, Err(CorpusError::Unavailable { .. })));
    }
}
