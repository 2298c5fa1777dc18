use anyhow::Result;
use async_trait::async_trait;
use roster_core::UserRecord;

use crate::infra::services::user_directory::UserDirectory;

/// Serves a fixed list, or a fixed failure.
#[derive(Debug, Clone)]
pub struct StaticUserDirectory {
    outcome: Result<Vec<UserRecord>, String>,
}

impl StaticUserDirectory {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { outcome: Ok(users) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }

    /// A small offline roster for running the app without the feed.
    pub fn sample() -> Self {
        let users = [
            ("1", "Aaron Miles", "aaron@mailinator.com", "member"),
            ("2", "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
            ("3", "Arvind Kumar", "arvind@mailinator.com", "admin"),
            ("4", "Caterina Binotto", "caterina@mailinator.com", "member"),
            ("5", "Chetan Kumar", "chetan@mailinator.com", "member"),
            ("6", "Jim McClain", "jim@mailinator.com", "member"),
            ("7", "Mahaveer Singh", "mahaveer@mailinator.com", "member"),
            ("8", "Rahul Jain", "rahul@mailinator.com", "admin"),
            ("9", "Rizan Khan", "rizan@mailinator.com", "member"),
            ("10", "Sarah Potter", "sarah@mailinator.com", "admin"),
            ("11", "Keshav Muddaiah", "keshav@mailinator.com", "member"),
            ("12", "Nita Ramesh", "nita@mailinator.com", "member"),
            ("13", "Julia Hunstman", "julia@mailinator.com", "member"),
            ("14", "Juan Alonso", "juan@mailinator.com", "admin"),
            ("15", "Gabriel Montoya", "gabriel@mailinator.com", "admin"),
            ("16", "Beatrice Iglesias", "beatrice@mailinator.com", "admin"),
            ("17", "Sarah Symms", "sarah.s@mailinator.com", "admin"),
            ("18", "Patrick Pinheiro", "patrick@mailinator.com", "admin"),
        ];
        Self::new(
            users
                .into_iter()
                .map(|(id, name, email, role)| UserRecord::new(id, name, email, role))
                .collect(),
        )
    }
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        self.outcome.clone().map_err(anyhow::Error::msg)
    }
}
