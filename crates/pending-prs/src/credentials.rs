//! Wiki credentials stored as a Java-style properties file
//!
//! ```text
//! userName=alice
//! password=secret
//! ```

use report_core::{Credentials, ReportError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const USERNAME_KEY: &str = "userName";
const PASSWORD_KEY: &str = "password";

/// Load credentials from `path`, failing with the path in the message when it is absent
pub fn load_credentials(path: &Path) -> Result<Credentials> {
    if !path.exists() {
        return Err(ReportError::MissingCredentials {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ReportError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    let mut properties = parse_properties(&content);

    let mut take = |key: &str| {
        properties
            .remove(key)
            .ok_or_else(|| ReportError::IncompleteCredentials {
                path: path.to_path_buf(),
                key: key.to_string(),
            })
    };

    Ok(Credentials {
        username: take(USERNAME_KEY)?,
        password: take(PASSWORD_KEY)?,
    })
}

/// Parse `key=value`, `key: value` and `key value` lines
///
/// Blank lines and lines starting with `#` or `!` are skipped. Escapes and line
/// continuations are not supported.
fn parse_properties(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .map(|line| {
            // The key ends at the first separator; whitespace may surround `=` or `:`
            match line.find(['=', ':', ' ', '\t']) {
                Some(idx) => {
                    let (key, rest) = line.split_at(idx);
                    let rest = rest.trim_start();
                    let value = rest
                        .strip_prefix(['=', ':'])
                        .unwrap_or(rest)
                        .trim();
                    (key.to_string(), value.to_string())
                }
                None => (line.to_string(), String::new()),
            }
        })
        .collect()
}
