use axum::{
    body::Body,
    http::{Request, Uri},
    middleware::Next,
    response::Response,
};

/// 旧版API前缀到现行前缀的映射
const LEGACY_PREFIXES: &[(&str, &str)] = &[
    ("/api/carteirinha", "/api/social/carteirinha"),
    ("/api/financeiro", "/api/financial"),
];

/// 命中旧前缀时返回重写后的路径，否则返回 None
/// 只做整段前缀替换，"/api/carteirinhas" 这类路径不受影响
pub fn rewrite_path(path: &str) -> Option<String> {
    for (old, new) in LEGACY_PREFIXES {
        if let Some(rest) = path.strip_prefix(old) {
            if rest.is_empty() || rest.starts_with('/') {
                return Some(format!("{}{}", new, rest));
            }
        }
    }
    None
}

/// 重写旧版路径的中间件，在路由匹配之前执行
pub async fn rewrite_legacy_paths(mut req: Request<Body>, next: Next) -> Response {
    if let Some(new_path) = rewrite_path(req.uri().path()) {
        let rewritten = match req.uri().query() {
            Some(query) => format!("{}?{}", new_path, query),
            None => new_path,
        };
        match rewritten.parse::<Uri>() {
            Ok(uri) => {
                tracing::debug!("rewriting legacy path {} -> {}", req.uri().path(), uri.path());
                *req.uri_mut() = uri;
            }
            Err(e) => tracing::warn!("legacy path rewrite produced invalid uri: {}", e),
        }
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carteirinha_prefix_is_rewritten() {
        assert_eq!(
            rewrite_path("/api/carteirinha/summary").as_deref(),
            Some("/api/social/carteirinha/summary")
        );
        assert_eq!(
            rewrite_path("/api/carteirinha").as_deref(),
            Some("/api/social/carteirinha")
        );
    }

    #[test]
    fn financeiro_prefix_is_rewritten() {
        assert_eq!(
            rewrite_path("/api/financeiro/summary").as_deref(),
            Some("/api/financial/summary")
        );
    }

    #[test]
    fn unrelated_paths_pass_through() {
        assert!(rewrite_path("/api/patient/summary").is_none());
        assert!(rewrite_path("/api/social/carteirinha/summary").is_none());
        // 前缀必须整段命中
        assert!(rewrite_path("/api/carteirinhas/summary").is_none());
    }
}
