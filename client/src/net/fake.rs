//! Scripted in-memory [`IdentityService`] for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::identity::{IdentityError, IdentityService};
use super::types::{AttemptResult, SessionId, User};
use crate::state::session::{SessionFeed, SessionSnapshot};

/// One recorded call against the fake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    CreateSession { identifier: String, secret: String },
    CreateAccount { username: String, secret: String },
    Activate(SessionId),
    SignOut,
    Refresh,
}

/// Fake provider. Attempt results are popped from a queue; activation
/// publishes `user` on the feed unless `activate_error` is set.
#[derive(Default)]
pub struct FakeIdentity {
    pub feed: SessionFeed,
    pub user: Option<User>,
    pub attempts: RefCell<VecDeque<Result<AttemptResult, IdentityError>>>,
    pub activate_error: RefCell<Option<IdentityError>>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeIdentity {
    pub fn with_user(user: User) -> Self {
        Self { user: Some(user), ..Self::default() }
    }

    pub fn push_attempt(&self, result: Result<AttemptResult, IdentityError>) {
        self.attempts.borrow_mut().push_back(result);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn next_attempt(&self) -> Result<AttemptResult, IdentityError> {
        self.attempts
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(IdentityError::Transport("no scripted attempt".to_owned())))
    }
}

#[async_trait(?Send)]
impl IdentityService for FakeIdentity {
    async fn create_session(&self, identifier: &str, secret: &str) -> Result<AttemptResult, IdentityError> {
        self.calls.borrow_mut().push(Call::CreateSession {
            identifier: identifier.to_owned(),
            secret: secret.to_owned(),
        });
        self.next_attempt()
    }

    async fn create_account(&self, username: &str, secret: &str) -> Result<AttemptResult, IdentityError> {
        self.calls.borrow_mut().push(Call::CreateAccount {
            username: username.to_owned(),
            secret: secret.to_owned(),
        });
        self.next_attempt()
    }

    async fn activate_session(&self, session: &SessionId) -> Result<(), IdentityError> {
        self.calls.borrow_mut().push(Call::Activate(session.clone()));
        if let Some(err) = self.activate_error.borrow_mut().take() {
            return Err(err);
        }
        let user = self.user.clone().ok_or(IdentityError::Unavailable)?;
        self.feed.publish(SessionSnapshot::signed_in(Some(session.clone()), user));
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.calls.borrow_mut().push(Call::SignOut);
        self.feed.publish(SessionSnapshot::signed_out());
        Ok(())
    }

    async fn refresh(&self) -> Result<Option<User>, IdentityError> {
        self.calls.borrow_mut().push(Call::Refresh);
        Ok(self.feed.snapshot().user)
    }

    fn sessions(&self) -> &SessionFeed {
        &self.feed
    }
}
