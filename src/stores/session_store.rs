// ============================================================================
// SESSION STORE - Single source of truth for "who is signed in"
// ============================================================================
// Populated from the identity service's auth-state channel and from explicit
// login/logout actions. Constructed once in main and passed by context, so
// tests can build a fresh store around a mock identity service.
// ============================================================================

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::models::{AuthError, Principal, Session};
use crate::services::identity::{AuthSubscription, IdentityService};

type Observer = Rc<dyn Fn(Option<Session>)>;

struct StoreState {
    session: Option<Session>,
    /// True until the identity service delivers its first notification.
    /// Consumers must not render auth-dependent UI during this window.
    loading: bool,
    observers: BTreeMap<u64, Observer>,
    next_observer_id: u64,
    upstream: Option<AuthSubscription>,
}

#[derive(Clone)]
pub struct SessionStore {
    identity: Rc<dyn IdentityService>,
    state: Rc<RefCell<StoreState>>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl SessionStore {
    pub fn new(identity: Rc<dyn IdentityService>) -> Self {
        Self {
            identity,
            state: Rc::new(RefCell::new(StoreState {
                session: None,
                loading: true,
                observers: BTreeMap::new(),
                next_observer_id: 0,
                upstream: None,
            })),
        }
    }

    /// The identity service behind this store, for credential-exchange flows
    /// that resolve a principal before calling `login`.
    pub fn identity(&self) -> Rc<dyn IdentityService> {
        self.identity.clone()
    }

    pub fn current(&self) -> Option<Session> {
        self.state.borrow().session.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Register an observer of Session changes. The first observer opens the
    /// single upstream subscription to the identity service; the last one to
    /// unsubscribe closes it again. Observers joining after the loading
    /// window immediately receive the current value.
    pub fn subscribe(&self, callback: impl Fn(Option<Session>) + 'static) -> SessionSubscription {
        let observer: Observer = Rc::new(callback);

        let (id, needs_upstream, replay) = {
            let mut state = self.state.borrow_mut();
            let id = state.next_observer_id;
            state.next_observer_id += 1;
            state.observers.insert(id, observer.clone());
            let needs_upstream = state.upstream.is_none();
            let replay = if state.loading {
                None
            } else {
                Some(state.session.clone())
            };
            (id, needs_upstream, replay)
        };

        if needs_upstream {
            let weak = Rc::downgrade(&self.state);
            let upstream = self.identity.on_auth_change(Box::new(move |principal| {
                Self::apply_notification(&weak, principal);
            }));
            self.state.borrow_mut().upstream = Some(upstream);
        }

        if let Some(current) = replay {
            observer(current);
        }

        SessionSubscription {
            state: Rc::downgrade(&self.state),
            id,
        }
    }

    /// Set the local Session directly, without contacting the identity
    /// service. Used when the credential exchange already happened (popup
    /// federated sign-in, password exchange).
    pub fn login(&self, name: &str, email: &str, photo_url: Option<String>) {
        log::info!("✅ session established for {}", email);
        self.replace_session(Some(Session::new(name, email, photo_url)));
    }

    /// Request sign-out from the identity service. On success the local
    /// Session is cleared and observers are notified before this future
    /// resolves; on failure the prior Session stays and the error is
    /// returned. Idempotent when already unauthenticated.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.identity.sign_out().await?;
        log::info!("👋 signed out");
        self.replace_session(None);
        Ok(())
    }

    fn replace_session(&self, session: Option<Session>) {
        let observers: Vec<Observer> = {
            let mut state = self.state.borrow_mut();
            state.session = session.clone();
            state.loading = false;
            state.observers.values().cloned().collect()
        };
        for observer in observers {
            observer(session.clone());
        }
    }

    fn apply_notification(state: &Weak<RefCell<StoreState>>, principal: Option<Principal>) {
        let Some(state) = state.upgrade() else {
            return;
        };
        let session = principal.as_ref().map(Session::from_principal);

        // Observers are called outside the borrow; a callback may re-enter
        // the store.
        let observers: Vec<Observer> = {
            let mut state = state.borrow_mut();
            state.session = session.clone();
            state.loading = false;
            state.observers.values().cloned().collect()
        };
        for observer in observers {
            observer(session.clone());
        }
    }
}

/// Observer registration handle. Unsubscribes on drop; removing the last
/// observer closes the upstream identity-service subscription.
pub struct SessionSubscription {
    state: Weak<RefCell<StoreState>>,
    id: u64,
}

impl SessionSubscription {
    /// Explicit form of dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let upstream = {
            let mut state = state.borrow_mut();
            state.observers.remove(&self.id);
            if state.observers.is_empty() {
                state.upstream.take()
            } else {
                None
            }
        };
        // Cancelling runs outside the borrow.
        drop(upstream);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::identity::{AuthChangeCallback, FederatedProvider};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[derive(Default)]
    struct MockIdentity {
        callback: Rc<RefCell<Option<AuthChangeCallback>>>,
        subscriptions_opened: Cell<usize>,
        subscriptions_closed: Rc<Cell<usize>>,
        sign_out_calls: Cell<usize>,
        fail_sign_out: Cell<bool>,
    }

    impl MockIdentity {
        fn emit(&self, principal: Option<Principal>) {
            let callback = self.callback.borrow();
            let callback = callback
                .as_ref()
                .expect("no auth-state subscription is open");
            callback(principal);
        }
    }

    #[async_trait(?Send)]
    impl IdentityService for MockIdentity {
        fn on_auth_change(&self, callback: AuthChangeCallback) -> AuthSubscription {
            self.subscriptions_opened
                .set(self.subscriptions_opened.get() + 1);
            *self.callback.borrow_mut() = Some(callback);

            let slot = self.callback.clone();
            let closed = self.subscriptions_closed.clone();
            AuthSubscription::new(move || {
                slot.borrow_mut().take();
                closed.set(closed.get() + 1);
            })
        }

        async fn sign_in_with_popup(
            &self,
            _provider: FederatedProvider,
        ) -> Result<Principal, AuthError> {
            Err(AuthError::Provider("no popups in tests".to_string()))
        }

        async fn sign_in_with_password(
            &self,
            _email: &str,
            _password: &str,
        ) -> Result<Principal, AuthError> {
            Err(AuthError::InvalidCredentials)
        }

        async fn create_account_with_password(
            &self,
            _email: &str,
            _password: &str,
        ) -> Result<Principal, AuthError> {
            Err(AuthError::AccountAlreadyExists)
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            self.sign_out_calls.set(self.sign_out_calls.get() + 1);
            if self.fail_sign_out.get() {
                Err(AuthError::Provider("network down".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn store_with_mock() -> (SessionStore, Rc<MockIdentity>) {
        let mock = Rc::new(MockIdentity::default());
        (SessionStore::new(mock.clone()), mock)
    }

    fn principal(display_name: Option<&str>, email: &str) -> Principal {
        Principal {
            display_name: display_name.map(str::to_string),
            email: email.to_string(),
            photo_url: None,
        }
    }

    fn recording_observer() -> (
        Rc<RefCell<Vec<Option<Session>>>>,
        impl Fn(Option<Session>) + 'static,
    ) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |session| sink.borrow_mut().push(session))
    }

    #[test]
    fn login_then_logout_ends_unauthenticated() {
        let (store, _mock) = store_with_mock();

        store.login("Ann", "ann@x.com", None);
        block_on(store.logout()).unwrap();

        assert_eq!(store.current(), None);

        let (seen, observer) = recording_observer();
        let _sub = store.subscribe(observer);
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn subscribe_after_login_replays_the_current_session() {
        let (store, _mock) = store_with_mock();
        store.login("Ann", "ann@x.com", None);

        let (seen, observer) = recording_observer();
        let _sub = store.subscribe(observer);

        assert_eq!(
            *seen.borrow(),
            vec![Some(Session::new("Ann", "ann@x.com", None))]
        );
    }

    #[test]
    fn notifications_are_forwarded_in_order_each_replacing_the_previous() {
        let (store, mock) = store_with_mock();

        let (seen, observer) = recording_observer();
        let _sub = store.subscribe(observer);

        mock.emit(Some(principal(Some("A"), "a@x.com")));
        mock.emit(None);
        mock.emit(Some(principal(Some("B"), "b@x.com")));

        assert_eq!(
            *seen.borrow(),
            vec![
                Some(Session::new("A", "a@x.com", None)),
                None,
                Some(Session::new("B", "b@x.com", None)),
            ]
        );
        assert_eq!(store.current(), Some(Session::new("B", "b@x.com", None)));
    }

    #[test]
    fn logout_when_already_unauthenticated_is_idempotent() {
        let (store, mock) = store_with_mock();

        block_on(store.logout()).unwrap();
        block_on(store.logout()).unwrap();

        assert_eq!(store.current(), None);
        assert_eq!(mock.sign_out_calls.get(), 2);
    }

    #[test]
    fn failed_logout_keeps_the_prior_session() {
        let (store, mock) = store_with_mock();
        store.login("Ann", "ann@x.com", None);

        let (seen, observer) = recording_observer();
        let _sub = store.subscribe(observer);
        seen.borrow_mut().clear();

        mock.fail_sign_out.set(true);
        let result = block_on(store.logout());

        assert_eq!(result, Err(AuthError::Provider("network down".to_string())));
        assert_eq!(store.current(), Some(Session::new("Ann", "ann@x.com", None)));
        assert!(seen.borrow().is_empty(), "observers must not be notified");
    }

    #[test]
    fn observers_see_the_signed_out_state_when_logout_resolves() {
        let (store, _mock) = store_with_mock();
        store.login("Ann", "ann@x.com", None);

        let (seen, observer) = recording_observer();
        let _sub = store.subscribe(observer);
        seen.borrow_mut().clear();

        block_on(store.logout()).unwrap();
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn loading_lasts_until_the_first_notification() {
        let (store, mock) = store_with_mock();
        assert!(store.is_loading());

        let (seen, observer) = recording_observer();
        let _sub = store.subscribe(observer);
        assert!(seen.borrow().is_empty(), "no replay during loading");

        mock.emit(None);
        assert!(!store.is_loading());
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn upstream_subscription_is_shared_and_closed_on_last_unsubscribe() {
        let (store, mock) = store_with_mock();

        let first = store.subscribe(|_| {});
        let second = store.subscribe(|_| {});
        assert_eq!(mock.subscriptions_opened.get(), 1);

        first.unsubscribe();
        assert_eq!(mock.subscriptions_closed.get(), 0);

        second.unsubscribe();
        assert_eq!(mock.subscriptions_closed.get(), 1);
    }

    #[test]
    fn resubscribing_reopens_the_upstream_channel() {
        let (store, mock) = store_with_mock();

        store.subscribe(|_| {}).unsubscribe();
        let _sub = store.subscribe(|_| {});

        assert_eq!(mock.subscriptions_opened.get(), 2);
        assert_eq!(mock.subscriptions_closed.get(), 1);
    }
}
