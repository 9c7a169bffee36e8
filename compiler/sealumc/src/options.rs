//! Processor options.
//!
//! Options arrive as the `key=value` map a host build tool hands to every
//! processor it runs, so keys outside the `sealum.` namespace are ignored.

use std::fmt;

/// Turns the whole pass into a no-op when `true`.
pub const DISABLED_KEY: &str = "sealum.disabled";
/// Plan roots on a thread pool (default) or one after another.
pub const PARALLEL_KEY: &str = "sealum.parallel";
/// Report at most this many failures; `0` reports all.
pub const ERROR_LIMIT_KEY: &str = "sealum.error_limit";

const NAMESPACE: &str = "sealum.";

/// Configuration for one build pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessorOptions {
    pub disabled: bool,
    pub parallel: bool,
    pub error_limit: Option<usize>,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        ProcessorOptions {
            disabled: false,
            parallel: true,
            error_limit: None,
        }
    }
}

/// A recognised option whose value could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("option `{key}` expects `true` or `false`, found `{value}`")]
    InvalidBool { key: String, value: String },

    #[error("option `{key}` expects a non-negative integer, found `{value}`")]
    InvalidNumber { key: String, value: String },

    #[error("unknown option `{key}`")]
    UnknownKey { key: String },

    #[error("expected `key=value`, found `{0}`")]
    MissingValue(String),
}

impl ProcessorOptions {
    /// Read options from the host's option map.
    ///
    /// Later entries override earlier ones.
    pub fn from_map<'a, I>(options: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut parsed = ProcessorOptions::default();
        for (key, value) in options {
            let key = key.trim();
            let value = value.trim();
            match key {
                DISABLED_KEY => parsed.disabled = parse_bool(key, value)?,
                PARALLEL_KEY => parsed.parallel = parse_bool(key, value)?,
                ERROR_LIMIT_KEY => {
                    let limit: usize = value.parse().map_err(|_| OptionsError::InvalidNumber {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                    parsed.error_limit = (limit > 0).then_some(limit);
                }
                _ if key.starts_with(NAMESPACE) => {
                    return Err(OptionsError::UnknownKey {
                        key: key.to_string(),
                    });
                }
                _ => tracing::trace!(key, "ignoring option for another processor"),
            }
        }
        Ok(parsed)
    }

    /// Read options from `key=value` arguments.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, OptionsError> {
        let pairs = args
            .iter()
            .map(|arg| {
                let arg = arg.as_ref();
                arg.split_once('=')
                    .ok_or_else(|| OptionsError::MissingValue(arg.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        ProcessorOptions::from_map(pairs)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, OptionsError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(OptionsError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

impl fmt::Display for ProcessorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{DISABLED_KEY}={} {PARALLEL_KEY}={} {ERROR_LIMIT_KEY}={}",
            self.disabled,
            self.parallel,
            self.error_limit.unwrap_or(0)
        )
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
