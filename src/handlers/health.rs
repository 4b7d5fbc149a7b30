/// Health check endpoints.

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn readiness_check() -> &'static str {
    "READY"
}
