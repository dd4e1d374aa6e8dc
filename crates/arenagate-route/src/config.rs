//! Route configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::RouteError;

// ---------------------------------------------------------------------------
// RouteConfig
// ---------------------------------------------------------------------------

/// The handful of paths the guards need to know about.
///
/// `#[serde(default)]` lets a config file override only some fields:
/// `{"login": "/sign-in"}` keeps every other default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Where authenticated actors are bounced from login/registration.
    pub home: String,

    /// The login page. Always reachable while signed out.
    pub login: String,

    /// The registration page.
    pub register: String,

    /// Query parameter that carries the originally requested path on
    /// the login redirect.
    pub redirect_param: String,

    /// Legacy path → canonical path.
    pub aliases: BTreeMap<String, String>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            home: "/".to_string(),
            login: "/login".to_string(),
            register: "/register".to_string(),
            redirect_param: "redirect".to_string(),
            aliases: BTreeMap::from([("/home".to_string(), "/".to_string())]),
        }
    }
}

impl RouteConfig {
    /// Checks that every path is absolute and no alias loops on itself.
    ///
    /// # Errors
    /// The first [`RouteError`] found.
    pub fn validated(self) -> Result<Self, RouteError> {
        check_path("home", &self.home)?;
        check_path("login", &self.login)?;
        check_path("register", &self.register)?;

        if self.redirect_param.is_empty() {
            return Err(RouteError::EmptyRedirectParam);
        }

        for (alias, canonical) in &self.aliases {
            check_path("aliases", alias)?;
            check_path("aliases", canonical)?;
            if alias == canonical {
                return Err(RouteError::AliasLoop(alias.clone()));
            }
        }

        Ok(self)
    }
}

fn check_path(field: &'static str, path: &str) -> Result<(), RouteError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(RouteError::InvalidPath {
            field,
            path: path.to_string(),
        })
    }
}
