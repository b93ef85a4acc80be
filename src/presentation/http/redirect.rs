use url::Url;

const FALLBACK: &str = "/";

/// Same-origin path for a post-draft redirect. Anything that could leave the site, or does not
/// parse, becomes `/`.
pub fn safe_redirect_target(requested: Option<&str>) -> String {
    let Some(requested) = requested.map(str::trim).filter(|value| !value.is_empty()) else {
        return FALLBACK.to_string();
    };

    if !requested.starts_with('/') || requested.starts_with("//") || requested.starts_with("/\\") {
        tracing::warn!(redirect_to = %requested, "rejected draft redirect target");
        return FALLBACK.to_string();
    }

    let Ok(base) = Url::parse("http://localhost") else {
        return FALLBACK.to_string();
    };
    match base.join(requested) {
        Ok(resolved)
            if resolved.origin() == base.origin() && !resolved.path().starts_with("//") =>
        {
            let mut target = resolved.path().to_string();
            if let Some(query) = resolved.query() {
                target.push('?');
                target.push_str(query);
            }
            if let Some(fragment) = resolved.fragment() {
                target.push('#');
                target.push_str(fragment);
            }
            target
        }
        _ => {
            tracing::warn!(redirect_to = %requested, "rejected draft redirect target");
            FALLBACK.to_string()
        }
    }
}
