use url::Url;

/// Parse a pin's raw location into a repository URL.
///
/// Lossy on purpose: anything that is neither an absolute URL nor a git scp-style
/// remote (`user@host:path`, read as `ssh://user@host/path`) becomes `None`. That
/// includes relative paths and empty strings.
pub fn parse_repository_url(raw: &str) -> Option<Url> {
    Url::parse(raw)
        .ok()
        .or_else(|| scp_to_ssh(raw).and_then(|ssh| Url::parse(&ssh).ok()))
}

fn scp_to_ssh(raw: &str) -> Option<String> {
    if raw.contains("://") {
        return None;
    }
    let (user_host, path) = raw.split_once(':')?;
    let (user, host) = user_host.split_once('@')?;
    if user.is_empty() || host.is_empty() || host.contains('/') || path.is_empty() {
        return None;
    }
    Some(format!("ssh://{user}@{host}/{}", path.trim_start_matches('/')))
}
