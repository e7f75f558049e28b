//! Secret-bearing values.

use std::fmt;

const REDACTED: &str = "***";

/// A credential that must never appear in logs or debug output.
///
/// The raw value is only reachable through [`Secret::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw credential.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({REDACTED})")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// Authenticated wiki remote: `https://<token>@github.com/<owner>/<repo>.wiki.git`.
///
/// Carries the token in the URL credential slot, so it gets the same handling
/// as [`Secret`]. The redacted form is built from the repository alone and
/// never derived from the authenticated URL.
#[derive(Clone, PartialEq, Eq)]
pub struct WikiRemote {
    url: Secret,
    repository: String,
}

impl WikiRemote {
    /// Build the remote for `repository` (`owner/repo`) authenticated with `token`.
    pub fn new(token: &Secret, repository: &str) -> Self {
        Self {
            url: Secret::new(wiki_url(token.expose(), repository)),
            repository: repository.to_string(),
        }
    }

    /// Borrow the full URL including the credential.
    pub fn expose(&self) -> &str {
        self.url.expose()
    }

    /// Render the URL with the credential replaced by `***`.
    pub fn redacted(&self) -> String {
        wiki_url(REDACTED, &self.repository)
    }
}

fn wiki_url(credential: &str, repository: &str) -> String {
    format!("https://{credential}@github.com/{repository}.wiki.git")
}

impl fmt::Debug for WikiRemote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WikiRemote").field(&self.redacted()).finish()
    }
}

impl fmt::Display for WikiRemote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}
