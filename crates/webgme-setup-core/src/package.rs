//! Package-name parsing for install specs handed to the package manager

/// Derive the installed package name from an install spec.
///
/// Handles registry names with version ranges (`name@^1.0.0`), scoped
/// packages (`@scope/name@1.2.3`), GitHub shorthand (`user/repo`,
/// `github:user/repo#branch`) and git URLs (`git+https://host/user/repo.git`).
pub fn package_name(spec: &str) -> String {
    let spec = spec.trim();

    if is_git_like(spec) {
        return repo_name(spec);
    }

    if let Some(rest) = spec.strip_prefix('@') {
        // @scope/name[@version]
        let without_version = match rest.find('@') {
            Some(idx) => &rest[..idx],
            None => rest,
        };
        return format!("@{}", without_version);
    }

    if spec.contains('/') {
        return repo_name(spec);
    }

    match spec.find('@') {
        Some(idx) => spec[..idx].to_string(),
        None => spec.to_string(),
    }
}

fn is_git_like(spec: &str) -> bool {
    spec.contains("://")
        || spec.starts_with("git+")
        || spec.starts_with("git@")
        || ["github:", "gitlab:", "bitbucket:", "gist:"]
            .iter()
            .any(|prefix| spec.starts_with(prefix))
}

/// Last path segment of a repository reference without `.git` or `#ref`
fn repo_name(spec: &str) -> String {
    let without_ref = spec.split('#').next().unwrap_or(spec);
    let trimmed = without_ref.trim_end_matches('/');
    let last = trimmed
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(trimmed);
    last.trim_end_matches(".git").to_string()
}
