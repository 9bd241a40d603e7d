//! GitHub Actions inputs and runner environment.
//!
//! Actions exposes each `with:` input as `INPUT_<NAME>`. Values are read once
//! into immutable structs; an empty value is treated the same as an unset
//! one, because Actions exports every declared input even when the workflow
//! leaves it blank.

use std::collections::HashMap;

use github::GitHubClient;
use sizing::{IgnorePatterns, SizingError, SizingPolicy, Thresholds};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

pub const TOKEN_VAR: &str = "INPUT_GITHUB_TOKEN";
pub const XS_MAX_SIZE_VAR: &str = "INPUT_XS_MAX_SIZE";
pub const S_MAX_SIZE_VAR: &str = "INPUT_S_MAX_SIZE";
pub const M_MAX_SIZE_VAR: &str = "INPUT_M_MAX_SIZE";
pub const L_MAX_SIZE_VAR: &str = "INPUT_L_MAX_SIZE";
pub const FAIL_IF_XL_VAR: &str = "INPUT_FAIL_IF_XL";
pub const MESSAGE_IF_XL_VAR: &str = "INPUT_MESSAGE_IF_XL";
pub const FILES_TO_IGNORE_VAR: &str = "INPUT_FILES_TO_IGNORE";

/// Snapshot of the process environment.
pub type Vars = HashMap<String, String>;

fn non_empty<'a>(vars: &'a Vars, key: &str) -> Option<&'a str> {
    vars.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Action inputs
// ---------------------------------------------------------------------------

/// Validated action inputs.
#[derive(Clone, PartialEq, Eq)]
pub struct ActionConfig {
    pub token: String,
    pub policy: SizingPolicy,
}

impl std::fmt::Debug for ActionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionConfig")
            .field("token", &"<redacted>")
            .field("policy", &self.policy)
            .finish()
    }
}

impl ActionConfig {
    /// Loads the inputs from `vars`.
    ///
    /// Fails if the token is missing or any threshold or flag does not parse.
    /// Threshold ordering is not validated here; see
    /// [`Thresholds::is_ascending`].
    pub fn from_vars(vars: &Vars) -> Result<Self, SizingError> {
        let token = non_empty(vars, TOKEN_VAR)
            .ok_or_else(|| {
                SizingError::configuration(format!(
                    "Required configuration is missing: {TOKEN_VAR}"
                ))
            })?
            .to_owned();

        let defaults = Thresholds::default();
        let thresholds = Thresholds {
            xs_max: parse_int(vars, XS_MAX_SIZE_VAR, defaults.xs_max)?,
            s_max: parse_int(vars, S_MAX_SIZE_VAR, defaults.s_max)?,
            m_max: parse_int(vars, M_MAX_SIZE_VAR, defaults.m_max)?,
            l_max: parse_int(vars, L_MAX_SIZE_VAR, defaults.l_max)?,
        };

        let policy = SizingPolicy {
            thresholds,
            fail_if_xl: parse_bool(vars, FAIL_IF_XL_VAR, false)?,
            message_if_xl: non_empty(vars, MESSAGE_IF_XL_VAR)
                .unwrap_or_default()
                .to_owned(),
            ignore: IgnorePatterns::from_whitespace_separated(
                non_empty(vars, FILES_TO_IGNORE_VAR).unwrap_or_default(),
            ),
        };

        Ok(Self { token, policy })
    }
}

fn parse_int(vars: &Vars, key: &str, default: i64) -> Result<i64, SizingError> {
    match non_empty(vars, key).map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            SizingError::configuration(format!("{key} must be an integer, got '{raw}'"))
        }),
    }
}

/// Accepts `1`, `t`, `true` and `0`, `f`, `false` in lower, upper, or title case.
fn parse_bool(vars: &Vars, key: &str, default: bool) -> Result<bool, SizingError> {
    match non_empty(vars, key).map(str::trim) {
        None | Some("") => Ok(default),
        Some("1" | "t" | "T" | "TRUE" | "true" | "True") => Ok(true),
        Some("0" | "f" | "F" | "FALSE" | "false" | "False") => Ok(false),
        Some(raw) => Err(SizingError::configuration(format!(
            "{key} must be a boolean, got '{raw}'"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Runner environment
// ---------------------------------------------------------------------------

/// What the Actions runner tells us about the triggering event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerContext {
    /// `GITHUB_ACTIONS == "true"`.
    pub in_actions: bool,
    /// `GITHUB_EVENT_NAME`, empty if unset.
    pub event_name: String,
    /// `GITHUB_EVENT_PATH`.
    pub event_path: Option<String>,
    /// `GITHUB_REPOSITORY` in `owner/repo` form.
    pub repository: Option<String>,
    /// `GITHUB_API_URL`, defaulting to the public API.
    pub api_url: String,
    /// `RUNNER_DEBUG == "1"`, set when a workflow is re-run with debug logging.
    pub debug: bool,
}

impl RunnerContext {
    pub fn from_vars(vars: &Vars) -> Self {
        Self {
            in_actions: non_empty(vars, "GITHUB_ACTIONS") == Some("true"),
            event_name: non_empty(vars, "GITHUB_EVENT_NAME")
                .unwrap_or_default()
                .to_owned(),
            event_path: non_empty(vars, "GITHUB_EVENT_PATH").map(str::to_owned),
            repository: non_empty(vars, "GITHUB_REPOSITORY").map(str::to_owned),
            api_url: non_empty(vars, "GITHUB_API_URL")
                .unwrap_or(GitHubClient::DEFAULT_API_URL)
                .to_owned(),
            debug: non_empty(vars, "RUNNER_DEBUG") == Some("1"),
        }
    }
}
