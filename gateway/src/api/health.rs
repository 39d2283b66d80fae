/// Liveness probe. The service has no upstream dependency to check at
/// startup, so reachable means healthy.
pub async fn health() -> &'static str {
    "ok\n"
}
