use std::future::Future;

use crate::domain::{
    auth::{
        entities::{AuthSession, AuthUser},
        value_objects::Credentials,
    },
    common::entities::app_errors::CoreError,
};

/// Gateway trait delegating account management to the external identity
/// provider. No credential material is validated or stored locally.
#[cfg_attr(test, mockall::automock)]
pub trait AuthGateway: Send + Sync {
    fn sign_up(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthUser, CoreError>> + Send;

    fn sign_in(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;
}

/// Service trait for account registration and login.
#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn sign_up(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthUser, CoreError>> + Send;

    fn sign_in(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;
}
