//! Static test data shipped with the framework.
//!
//! [`TestData`] is built once from the configuration and serialized into
//! `data/test-data.json`. The generated fixtures import that file and pass it
//! to tests as an ordinary value.

use serde::Serialize;

use crate::core::Configuration;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestData {
    pub base_url: String,
    pub users: Vec<TestUser>,
    pub search_terms: Vec<String>,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestUser {
    pub role: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Endpoints {
    pub home: String,
    pub health: String,
}

impl TestData {
    pub fn from_configuration(config: &Configuration) -> Self {
        let user = |role: &str| TestUser {
            role: role.to_string(),
            username: format!("{role}.user"),
            email: format!("{role}.user@example.com"),
        };

        Self {
            base_url: config.base_url.clone(),
            users: vec![user("standard"), user("admin")],
            search_terms: ["locator", "fixtures", "assertions"]
                .into_iter()
                .map(String::from)
                .collect(),
            endpoints: Endpoints {
                home: "/".to_string(),
                health: "/".to_string(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn test_data_json(config: &Configuration) -> serde_json::Result<String> {
    TestData::from_configuration(config).to_json()
}
