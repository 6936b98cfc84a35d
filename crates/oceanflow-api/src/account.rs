//! Account endpoint
//!
//! One read-only call, used both as the connectivity check and by the
//! `ocean auth` command.

use crate::client::DoClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

impl DoClient {
    /// Fetch the account behind the access token
    pub async fn get_account(&self) -> Result<Account> {
        let root: AccountRoot = self.get("/account").await?;
        Ok(root.account)
    }
}

// ============ API Types ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub droplet_limit: i64,
    #[serde(default)]
    pub floating_ip_limit: i64,
    #[serde(default)]
    pub volume_limit: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_message: String,
}

#[derive(Debug, Deserialize)]
struct AccountRoot {
    account: Account,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_from_api_json() {
        let root: AccountRoot = serde_json::from_str(
            r#"{
                "account": {
                    "droplet_limit": 25,
                    "floating_ip_limit": 5,
                    "volume_limit": 10,
                    "email": "sammy@digitalocean.com",
                    "uuid": "b6fr89dbf6d9156cace5f3c78dc9851d957381ef",
                    "email_verified": true,
                    "status": "active",
                    "status_message": ""
                }
            }"#,
        )
        .unwrap();
        assert_eq!(root.account.email, "sammy@digitalocean.com");
        assert_eq!(root.account.droplet_limit, 25);
        assert!(root.account.email_verified);
    }
}
