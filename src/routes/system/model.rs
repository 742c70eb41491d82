use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub services: ServiceStatuses,
}

#[derive(Debug, Serialize)]
pub struct ServiceStatuses {
    pub web: &'static str,
    pub store: &'static str,
    pub cache: &'static str,
}
