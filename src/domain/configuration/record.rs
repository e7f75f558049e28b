//! The validated configuration record and the accumulator it is built from.

use super::{ConfigError, ConflictStrategy, Secret, WikiRemote};

pub const DEFAULT_SYNC_FOLDER: &str = "docs";
pub const DEFAULT_CONFLICT_STRATEGY: &str = "repo-wins";

/// The `(owner, repo)` pair identifying the host repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    pub owner: String,
    pub repo: String,
}

impl RepositoryIdentity {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self { owner: owner.into(), repo: repo.into() }
    }

    /// `owner/repo`, or `None` when either half is empty.
    pub fn full_name(&self) -> Option<String> {
        if self.owner.is_empty() || self.repo.is_empty() {
            return None;
        }
        Some(format!("{}/{}", self.owner, self.repo))
    }
}

/// Raw action input values as read, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub token: String,
    pub sync_folder: String,
    pub conflict_strategy: String,
    pub sync_deletes: String,
}

/// `""` means unset and maps to `true`; otherwise only the exact string `"true"` is true.
pub fn parse_sync_deletes(raw: &str) -> bool {
    raw.is_empty() || raw == "true"
}

/// Configuration under construction. Every field is optional until
/// [`PartialConfig::validate`] turns it into a [`ConfigurationRecord`].
#[derive(Debug, Clone, Default)]
pub struct PartialConfig {
    pub token: Option<Secret>,
    pub sync_folder: Option<String>,
    pub conflict_strategy: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub repository: Option<String>,
    pub wiki_repo: Option<WikiRemote>,
    pub sync_deletes: Option<bool>,
}

impl PartialConfig {
    /// Apply input defaults. Empty strings select the default.
    pub fn with_inputs(mut self, inputs: RawInputs) -> Self {
        self.token = Some(Secret::new(inputs.token));
        self.sync_folder = Some(non_empty_or(inputs.sync_folder, DEFAULT_SYNC_FOLDER));
        self.conflict_strategy =
            Some(non_empty_or(inputs.conflict_strategy, DEFAULT_CONFLICT_STRATEGY));
        self.sync_deletes = Some(parse_sync_deletes(&inputs.sync_deletes));
        self
    }

    pub fn with_identity(mut self, identity: RepositoryIdentity) -> Self {
        self.repository = identity.full_name();
        self.owner = Some(identity.owner);
        self.repo = Some(identity.repo);
        self
    }

    /// Derive the wiki remote. Requires both token and repository.
    pub fn derive(mut self) -> Self {
        self.wiki_repo = match (&self.token, &self.repository) {
            (Some(token), Some(repository)) => Some(WikiRemote::new(token, repository)),
            _ => None,
        };
        self
    }

    /// Check invariants in order and produce the immutable record.
    ///
    /// The first failing check is returned.
    pub fn validate(self) -> Result<ConfigurationRecord, ConfigError> {
        let token = self.token.filter(|t| !t.is_empty()).ok_or(ConfigError::MissingToken)?;
        let repository = self
            .repository
            .filter(|r| !r.is_empty())
            .ok_or(ConfigError::MissingRepositoryInfo)?;

        let raw_strategy = self.conflict_strategy.unwrap_or_default();
        let conflict_strategy = raw_strategy
            .parse::<ConflictStrategy>()
            .map_err(|err| ConfigError::InvalidConflictStrategy { value: err.0 })?;

        let sync_folder = self.sync_folder.unwrap_or_else(|| DEFAULT_SYNC_FOLDER.to_string());
        if sync_folder.starts_with('/') {
            return Err(ConfigError::AbsoluteSyncFolder { path: sync_folder });
        }

        let owner =
            self.owner.filter(|o| !o.is_empty()).ok_or(ConfigError::MissingRepositoryInfo)?;
        let repo =
            self.repo.filter(|r| !r.is_empty()).ok_or(ConfigError::MissingRepositoryInfo)?;
        let wiki_repo = self.wiki_repo.unwrap_or_else(|| WikiRemote::new(&token, &repository));

        Ok(ConfigurationRecord {
            token,
            sync_folder,
            conflict_strategy,
            owner,
            repo,
            repository,
            wiki_repo,
            sync_deletes: self.sync_deletes.unwrap_or(true),
        })
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() { default.to_string() } else { value }
}

/// Fully validated configuration. Only obtainable through validation, and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationRecord {
    token: Secret,
    sync_folder: String,
    conflict_strategy: ConflictStrategy,
    owner: String,
    repo: String,
    repository: String,
    wiki_repo: WikiRemote,
    sync_deletes: bool,
}

impl ConfigurationRecord {
    pub fn token(&self) -> &str {
        self.token.expose()
    }

    pub fn sync_folder(&self) -> &str {
        &self.sync_folder
    }

    pub fn conflict_strategy(&self) -> ConflictStrategy {
        self.conflict_strategy
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// `owner/repo`.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Full wiki URL including the token.
    pub fn wiki_repo(&self) -> &str {
        self.wiki_repo.expose()
    }

    pub fn wiki_remote(&self) -> &WikiRemote {
        &self.wiki_repo
    }

    pub fn sync_deletes(&self) -> bool {
        self.sync_deletes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(token: &str) -> RawInputs {
        RawInputs { token: token.to_string(), ..RawInputs::default() }
    }

    fn build(
        inputs: RawInputs,
        identity: RepositoryIdentity,
    ) -> Result<ConfigurationRecord, ConfigError> {
        PartialConfig::default().with_inputs(inputs).with_identity(identity).derive().validate()
    }

    #[test]
    fn applies_defaults_for_empty_inputs() {
        let record = build(inputs("tok"), RepositoryIdentity::new("octo", "docs")).unwrap();
        assert_eq!(record.sync_folder(), "docs");
        assert_eq!(record.conflict_strategy(), ConflictStrategy::RepoWins);
        assert!(record.sync_deletes());
    }

    #[test]
    fn derives_repository_and_wiki_url() {
        let record = build(inputs("tok"), RepositoryIdentity::new("octo", "handbook")).unwrap();
        assert_eq!(record.owner(), "octo");
        assert_eq!(record.repo(), "handbook");
        assert_eq!(record.repository(), "octo/handbook");
        assert_eq!(record.wiki_repo(), "https://tok@github.com/octo/handbook.wiki.git");
    }

    #[test]
    fn sync_deletes_parsing() {
        assert!(parse_sync_deletes(""));
        assert!(parse_sync_deletes("true"));
        assert!(!parse_sync_deletes("false"));
        assert!(!parse_sync_deletes("TRUE"));
        assert!(!parse_sync_deletes("yes"));
        assert!(!parse_sync_deletes("1"));
    }

    #[test]
    fn empty_token_is_rejected_first() {
        let raw = RawInputs {
            conflict_strategy: "bogus".into(),
            sync_folder: "/abs".into(),
            ..RawInputs::default()
        };
        let err = build(raw, RepositoryIdentity::new("", "")).unwrap_err();
        assert_eq!(err, ConfigError::MissingToken);
    }

    #[test]
    fn empty_identity_is_missing_repository() {
        let err = build(inputs("tok"), RepositoryIdentity::new("octo", "")).unwrap_err();
        assert_eq!(err, ConfigError::MissingRepositoryInfo);
    }

    #[test]
    fn strategy_checked_before_sync_folder() {
        let raw = RawInputs {
            token: "tok".into(),
            conflict_strategy: "bogus".into(),
            sync_folder: "/abs".into(),
            ..RawInputs::default()
        };
        let err = build(raw, RepositoryIdentity::new("octo", "docs")).unwrap_err();
        assert_eq!(err, ConfigError::InvalidConflictStrategy { value: "bogus".into() });
    }

    #[test]
    fn absolute_sync_folder_is_rejected() {
        let raw = RawInputs {
            token: "tok".into(),
            sync_folder: "/abs/path".into(),
            ..RawInputs::default()
        };
        let err = build(raw, RepositoryIdentity::new("octo", "docs")).unwrap_err();
        assert_eq!(err, ConfigError::AbsoluteSyncFolder { path: "/abs/path".into() });
    }

    #[test]
    fn nested_relative_sync_folder_is_kept() {
        let raw = RawInputs {
            token: "tok".into(),
            sync_folder: "docs/wiki".into(),
            ..RawInputs::default()
        };
        let record = build(raw, RepositoryIdentity::new("octo", "docs")).unwrap();
        assert_eq!(record.sync_folder(), "docs/wiki");
    }

    #[test]
    fn validate_without_any_population_fails_on_token() {
        let err = PartialConfig::default().validate().unwrap_err();
        assert_eq!(err, ConfigError::MissingToken);
    }

    #[test]
    fn record_debug_does_not_leak_token() {
        let record = build(inputs("ghp_leaky"), RepositoryIdentity::new("octo", "docs")).unwrap();
        assert!(!format!("{record:?}").contains("ghp_leaky"));
    }

    #[test]
    fn record_debug_hides_tokens_containing_url_delimiters() {
        for token in ["x-access-token:ghp_colon", "ghp/slash#frag"] {
            let record = build(inputs(token), RepositoryIdentity::new("octo", "docs")).unwrap();
            let debug = format!("{record:?}");
            assert!(!debug.contains("ghp_colon") && !debug.contains("slash#frag"), "{debug}");
        }
    }
}
