//! MySQL-style option file reader.
//!
//! Only `user`, `password`, `host` and `port` are picked up. Section headers,
//! comments and any other keys are ignored, and a missing file simply yields
//! empty credentials.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Connection credentials read from an option file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

fn option_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(user|password|host|port)\s*=\s*(.*)$").expect("static regex is valid")
    })
}

impl Credentials {
    /// Read credentials from `path`, returning defaults when it is unreadable.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            debug!("No option file at {}", path.display());
            return Self::default();
        };
        Self::parse(&content)
    }

    /// Parse option-file text. Later occurrences of a key win.
    pub fn parse(content: &str) -> Self {
        let mut creds = Self::default();
        for line in content.lines() {
            let line = line.trim();
            let Some(caps) = option_line().captures(line) else {
                continue;
            };
            let value = unquote(caps[2].trim());
            match &caps[1] {
                "user" => creds.user = Some(value.to_string()),
                "password" => creds.password = Some(value.to_string()),
                "host" => creds.host = Some(value.to_string()),
                "port" => creds.port = value.parse().ok(),
                _ => {}
            }
        }
        creds
    }

    /// Host to connect to: explicit flag, then option file, then localhost.
    pub fn resolve_host(&self, flag: Option<&str>) -> String {
        flag.filter(|h| !h.is_empty())
            .or(self.host.as_deref().filter(|h| !h.is_empty()))
            .unwrap_or("localhost")
            .to_string()
    }

    /// Port to connect to: explicit flag, then option file, then 3306.
    pub fn resolve_port(&self, flag: Option<u16>) -> u16 {
        flag.or(self.port).unwrap_or(3306)
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_basic_option_file() {
        let creds = Credentials::parse(
            "[client]\nuser=capture\npassword=s3cret\nhost=db1.internal\n",
        );
        assert_eq!(creds.user.as_deref(), Some("capture"));
        assert_eq!(creds.password.as_deref(), Some("s3cret"));
        assert_eq!(creds.host.as_deref(), Some("db1.internal"));
        assert_eq!(creds.port, None);
    }

    #[test]
    fn test_parse_tolerates_spacing_quotes_and_comments() {
        let creds = Credentials::parse(
            "# local box\n  user = root  \npassword=\"p=ss\"\n; port=1\n\
             port = 3307\nsocket=/tmp/x\n",
        );
        assert_eq!(creds.user.as_deref(), Some("root"));
        assert_eq!(creds.password.as_deref(), Some("p=ss"));
        assert_eq!(creds.port, Some(3307));
        assert_eq!(creds.host, None);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let tmp = TempDir::new().expect("tempdir");
        let creds = Credentials::load_from(&tmp.path().join(".my.cnf"));
        assert_eq!(creds, Credentials::default());
    }

    #[test]
    fn test_load_from_disk() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join(".my.cnf");
        std::fs::write(&path, "user=app\nhost=10.0.0.9\n").expect("write");
        let creds = Credentials::load_from(&path);
        assert_eq!(creds.user.as_deref(), Some("app"));
        assert_eq!(creds.host.as_deref(), Some("10.0.0.9"));
    }

    #[test]
    fn test_resolve_host_precedence() {
        let creds = Credentials {
            host: Some("from-file".to_string()),
            ..Default::default()
        };
        assert_eq!(creds.resolve_host(Some("from-flag")), "from-flag");
        assert_eq!(creds.resolve_host(None), "from-file");
        assert_eq!(creds.resolve_host(Some("")), "from-file");
        assert_eq!(Credentials::default().resolve_host(None), "localhost");
    }

    #[test]
    fn test_resolve_port_precedence() {
        let creds = Credentials {
            port: Some(3310),
            ..Default::default()
        };
        assert_eq!(creds.resolve_port(Some(4000)), 4000);
        assert_eq!(creds.resolve_port(None), 3310);
        assert_eq!(Credentials::default().resolve_port(None), 3306);
    }
}
