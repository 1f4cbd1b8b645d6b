use crate::domain::health::entities::HealthStatus;

#[cfg_attr(test, mockall::automock)]
pub trait HealthService: Send + Sync {
    fn health(&self) -> HealthStatus;
}
