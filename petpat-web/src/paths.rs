//! URLs that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (for example `/petpat`), generated
/// URLs are prefixed with it. Builds without it use root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_url())
}

/// Base path for the router, `None` when the app is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(public_url())
}

/// Prefix an API path such as `/api/feedback` with the deployment base.
#[must_use]
pub fn api_path(endpoint: &str) -> String {
    asset_path(endpoint)
}

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("static/img/paw.svg"), "/static/img/paw.svg");
        assert_eq!(api_path("/api/dog-images"), "/api/dog-images");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            asset_path_with_base("/api/dog-image?name=a.png", "/petpat/"),
            "/petpat/api/dog-image?name=a.png"
        );
        assert_eq!(router_base_with_base("/petpat/"), Some("/petpat".to_string()));
        assert_eq!(router_base_with_base("  "), None);
        assert_eq!(router_base(), None);
    }
}
