//! Which request paths the token guard applies to.
//!
//! Rules match whole path segments: `/api` covers `/api`, `/api/` and
//! `/api/stations` but not `/apix`, and an ignore entry of `/api/token`
//! exempts `/api/token/refresh` but not `/api/tokens`.

use waduk_config::JwtConfig;

#[derive(Debug, Clone)]
pub struct PathRule {
    path: Vec<String>,
    ignore: Vec<String>,
}

impl PathRule {
    pub fn new<P, I>(path: P, ignore: I) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            path: path.into_iter().map(|p| normalize_rule(p.as_ref())).collect(),
            ignore: ignore.into_iter().map(|p| normalize_rule(p.as_ref())).collect(),
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.path, &config.ignore)
    }

    pub fn is_guarded(&self, request_path: &str) -> bool {
        let request_path = collapse_slashes(request_path);

        if self.ignore.iter().any(|rule| covers(rule, &request_path)) {
            return false;
        }
        self.path.iter().any(|rule| covers(rule, &request_path))
    }
}

/// True when `path` is `rule` itself or lies below it.
fn covers(rule: &str, path: &str) -> bool {
    if rule == "/" {
        return true;
    }
    match path.strip_prefix(rule) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn normalize_rule(rule: &str) -> String {
    format!("/{}", rule.trim_matches('/'))
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        out.push('/');
    }
    for ch in path.chars() {
        if ch == '/' && out.ends_with('/') {
            continue;
        }
        out.push(ch);
    }
    out
}
