use crate::ratelimit::now_millis;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

pub const TOKEN_TTL_MS: u64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Serialize)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub role: String,
}

struct Account {
    id: &'static str,
    username: &'static str,
    role: &'static str,
    password: &'static str,
}

// The operator roster is fixed; there is no account management surface.
const ACCOUNTS: &[Account] = &[
    Account {
        id: "1",
        username: "admin",
        role: "admin",
        password: "sky2024",
    },
    Account {
        id: "2",
        username: "manager",
        role: "manager",
        password: "manager123",
    },
];

#[derive(Debug, Clone)]
struct Session {
    username: String,
    issued_at_ms: u64,
}

/// Issues and validates opaque admin tokens backed by a server-side session
/// table, so a token's bytes reveal nothing and cannot be forged offline.
#[derive(Debug, Default)]
pub struct AuthService {
    sessions: HashMap<String, Session>,
}

impl AuthService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verify_credentials(&self, username: &str, password: &str) -> Option<AdminUser> {
        ACCOUNTS
            .iter()
            .find(|account| account.username == username && account.password == password)
            .map(to_user)
    }

    pub fn issue(&mut self, username: &str) -> String {
        self.issue_at(username, now_millis())
    }

    pub fn issue_at(&mut self, username: &str, now_ms: u64) -> String {
        self.sweep(now_ms);
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                username: username.to_string(),
                issued_at_ms: now_ms,
            },
        );
        token
    }

    /// Unknown and expired tokens are indistinguishable to the caller.
    pub fn validate(&mut self, token: &str) -> Option<AdminUser> {
        self.validate_at(token, now_millis())
    }

    pub fn validate_at(&mut self, token: &str, now_ms: u64) -> Option<AdminUser> {
        let (username, issued_at_ms) = {
            let session = self.sessions.get(token)?;
            (session.username.clone(), session.issued_at_ms)
        };

        if now_ms.saturating_sub(issued_at_ms) > TOKEN_TTL_MS {
            self.sessions.remove(token);
            return None;
        }

        ACCOUNTS
            .iter()
            .find(|account| account.username == username)
            .map(to_user)
    }

    fn sweep(&mut self, now_ms: u64) {
        self.sessions
            .retain(|_, session| now_ms.saturating_sub(session.issued_at_ms) <= TOKEN_TTL_MS);
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }
}

fn to_user(account: &Account) -> AdminUser {
    AdminUser {
        id: account.id.to_string(),
        username: account.username.to_string(),
        role: account.role.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_validate_returns_the_identity() {
        let mut auth = AuthService::new();
        let token = auth.issue_at("admin", 1_000);
        let user = auth.validate_at(&token, 2_000).expect("token should be valid");
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, "admin");
        assert_eq!(user.id, "1");
    }

    #[test]
    fn token_expires_after_24_hours() {
        let mut auth = AuthService::new();
        let issued = 1_000;
        let token = auth.issue_at("admin", issued);

        let twenty_five_hours = 25 * 60 * 60 * 1000;
        assert!(auth.validate_at(&token, issued + twenty_five_hours).is_none());
        // The expired session is dropped, not just rejected.
        assert_eq!(auth.active_sessions(), 0);
    }

    #[test]
    fn token_still_valid_just_inside_the_window() {
        let mut auth = AuthService::new();
        let token = auth.issue_at("manager", 0);
        let user = auth.validate_at(&token, TOKEN_TTL_MS).expect("still inside TTL");
        assert_eq!(user.role, "manager");
    }

    #[test]
    fn unknown_token_is_invalid() {
        let mut auth = AuthService::new();
        assert!(auth.validate_at("no-such-token", 0).is_none());
    }

    #[test]
    fn credentials_must_match_exactly() {
        let auth = AuthService::new();
        assert!(auth.verify_credentials("admin", "sky2024").is_some());
        assert!(auth.verify_credentials("admin", "SKY2024").is_none());
        assert!(auth.verify_credentials("intruder", "sky2024").is_none());
    }

    #[test]
    fn issuing_sweeps_expired_sessions() {
        let mut auth = AuthService::new();
        auth.issue_at("admin", 0);
        auth.issue_at("manager", 0);
        assert_eq!(auth.active_sessions(), 2);

        auth.issue_at("admin", TOKEN_TTL_MS * 2);
        assert_eq!(auth.active_sessions(), 1);
    }
}
