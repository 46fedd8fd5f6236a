use crate::error::StoreError;
use crate::models::{SessionUser, UserAccount};
use crate::store::{RecordStore, CURRENT_USER_KEY, USERS_KEY};

/// Credential verification and current-identity exposure.
///
/// This is an explicit context object: create one at process start, pass it
/// to whoever needs the identity, drop it on shutdown. Construction restores
/// any persisted session exactly once; afterwards the identity is served
/// from memory until an explicit `login` or `logout` replaces it.
pub struct SessionProvider {
    store: RecordStore,
    current: Option<SessionUser>,
}

impl SessionProvider {
    /// Create a provider, restoring a persisted session if one exists.
    ///
    /// A corrupted session record is treated as "not logged in" rather than
    /// an error, mirroring the store's tolerant recovery policy.
    pub fn new(store: RecordStore) -> Self {
        let current = match store.read_record::<SessionUser>(CURRENT_USER_KEY) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!("failed to restore session: {}", err);
                None
            }
        };
        Self { store, current }
    }

    /// Verify credentials against the `dentalUsers` collection.
    ///
    /// The check is a linear scan for an exact, case-sensitive email and
    /// plaintext password match, the contract the seed data relies on. On
    /// success the reduced projection (never the password) becomes the
    /// current session and is persisted; on failure any prior session is
    /// left untouched and `Ok(false)` is returned.
    pub fn login(&mut self, email: &str, password: &str) -> Result<bool, StoreError> {
        let users: Vec<UserAccount> = self.store.load_collection(USERS_KEY)?;

        let account = users
            .iter()
            .find(|u| u.email == email && u.password == password);

        match account {
            Some(account) => {
                let session = account.session();
                self.store.write_record(CURRENT_USER_KEY, &session)?;
                tracing::info!("user {} logged in as {:?}", session.email, session.role);
                self.current = Some(session);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clear the current session from memory and the store
    pub fn logout(&mut self) -> Result<(), StoreError> {
        if let Some(session) = self.current.take() {
            tracing::info!("user {} logged out", session.email);
        }
        self.store.delete_record(CURRENT_USER_KEY)
    }

    /// The authenticated identity, if any
    pub fn current_user(&self) -> Option<&SessionUser> {
        self.current.as_ref()
    }
}
