//! Login stub. A local flag only - nothing is verified against a server,
//! mirroring the three auth keys the web client kept in local storage.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub is_authenticated: bool,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
}

impl Session {
    pub fn signed_in(email: String, name: String) -> Self {
        Self {
            is_authenticated: true,
            user_email: Some(email),
            user_name: Some(name),
        }
    }

    /// Logout drops all three fields at once.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_signed_out() {
        let session = Session::default();
        assert!(!session.is_authenticated);
        assert!(session.user_email.is_none());
        assert!(session.user_name.is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut session = Session::signed_in("admin@example.com".into(), "Admin".into());
        assert!(session.is_authenticated);

        session.clear();
        assert_eq!(session, Session::default());
    }
}
