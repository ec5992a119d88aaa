// Auth session collaborator
//
// Mock, synchronous stand-in for a real auth provider. The rest of the app
// only asks `is_logged_in()` and reads the signed-in account; credentials
// are checked against the seeded accounts.

use crate::catalog::Account;

/// Outcome of a sign-in attempt. Failures are UI states, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    SignedIn,
    InvalidCredentials,
    MissingFields,
}

/// Current sign-in state. Owned by the app, never persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    account: Option<Account>,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.account.is_some()
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    /// Validate credentials against the known accounts and sign in on match
    pub fn login(&mut self, accounts: &[Account], email: &str, password: &str) -> LoginOutcome {
        if email.trim().is_empty() || password.is_empty() {
            return LoginOutcome::MissingFields;
        }
        match accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email.trim()) && a.password == password)
        {
            Some(account) => {
                tracing::info!(account = %account.id, "signed in");
                self.account = Some(account.clone());
                LoginOutcome::SignedIn
            }
            None => LoginOutcome::InvalidCredentials,
        }
    }

    pub fn logout(&mut self) {
        if let Some(account) = self.account.take() {
            tracing::info!(account = %account.id, "signed out");
        }
    }
}

/// Required-field check used by the forms; mirrors what a browser's native
/// input constraints would enforce and nothing more.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value.contains('@') && !value.starts_with('@') && !value.ends_with('@')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn accounts() -> Vec<Account> {
        vec![Account {
            id: "acc-1".to_string(),
            name: "Sara Mansour".to_string(),
            email: "sara@timesouk.example".to_string(),
            password: "hourglass".to_string(),
            balance_hours: 12.5,
            joined_at: Utc::now(),
        }]
    }

    #[test]
    fn login_with_valid_credentials() {
        let mut session = Session::default();
        assert!(!session.is_logged_in());
        let outcome = session.login(&accounts(), "sara@timesouk.example", "hourglass");
        assert_eq!(outcome, LoginOutcome::SignedIn);
        assert!(session.is_logged_in());
        assert_eq!(session.account().unwrap().name, "Sara Mansour");
    }

    #[test]
    fn login_is_case_insensitive_on_email_only() {
        let mut session = Session::default();
        assert_eq!(
            session.login(&accounts(), "SARA@timesouk.example", "hourglass"),
            LoginOutcome::SignedIn
        );

        let mut session = Session::default();
        assert_eq!(
            session.login(&accounts(), "sara@timesouk.example", "HOURGLASS"),
            LoginOutcome::InvalidCredentials
        );
    }

    #[test]
    fn empty_fields_are_reported_not_checked() {
        let mut session = Session::default();
        assert_eq!(
            session.login(&accounts(), "", "hourglass"),
            LoginOutcome::MissingFields
        );
        assert_eq!(
            session.login(&accounts(), "sara@timesouk.example", ""),
            LoginOutcome::MissingFields
        );
    }

    #[test]
    fn logout_clears_the_account() {
        let mut session = Session::default();
        session.login(&accounts(), "sara@timesouk.example", "hourglass");
        session.logout();
        assert!(!session.is_logged_in());
        // Idempotent
        session.logout();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("a@b.example"));
        assert!(!looks_like_email(""));
        assert!(!looks_like_email("no-at-sign"));
        assert!(!looks_like_email("@leading"));
        assert!(!looks_like_email("trailing@"));
    }
}
