use crate::domain::{
    auth::{
        entities::{AuthSession, AuthUser},
        ports::{AuthGateway, AuthService},
        value_objects::Credentials,
    },
    classification::ports::{
        ClassificationRepository, LlmClient, RandomSource, RecipeRepository,
    },
    common::{entities::app_errors::CoreError, services::Service},
};

impl<CR, RR, L, A, RS> AuthService for Service<CR, RR, L, A, RS>
where
    CR: ClassificationRepository,
    RR: RecipeRepository,
    L: LlmClient,
    A: AuthGateway,
    RS: RandomSource,
{
    async fn sign_up(&self, credentials: Credentials) -> Result<AuthUser, CoreError> {
        let gateway = self
            .auth_gateway
            .as_ref()
            .ok_or(CoreError::NotConfigured("authentication service"))?;
        gateway.sign_up(credentials).await
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<AuthSession, CoreError> {
        let gateway = self
            .auth_gateway
            .as_ref()
            .ok_or(CoreError::NotConfigured("authentication service"))?;
        gateway.sign_in(credentials).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::ports::{
        MockClassificationRepository, MockLlmClient, MockRecipeRepository,
    };

    struct FixedIndex;

    impl RandomSource for FixedIndex {
        fn pick_index(&self, _len: usize) -> usize {
            0
        }
    }

    struct AcceptingGateway;

    impl AuthGateway for AcceptingGateway {
        async fn sign_up(&self, credentials: Credentials) -> Result<AuthUser, CoreError> {
            Ok(AuthUser {
                id: "user-1".to_string(),
                email: credentials.email,
            })
        }

        async fn sign_in(&self, credentials: Credentials) -> Result<AuthSession, CoreError> {
            Ok(AuthSession {
                user: AuthUser {
                    id: "user-1".to_string(),
                    email: credentials.email,
                },
                access_token: "token-abc".to_string(),
            })
        }
    }

    type TestService<A> = Service<
        MockClassificationRepository,
        MockRecipeRepository,
        MockLlmClient,
        A,
        FixedIndex,
    >;

    fn credentials() -> Credentials {
        Credentials {
            email: "patient@example.com".to_string(),
            password: "correct horse".to_string(),
        }
    }

    #[tokio::test]
    async fn sign_up_without_gateway_is_rejected_as_not_configured() {
        let service: TestService<AcceptingGateway> =
            Service::new(None, None, None, None, FixedIndex);

        let err = service.sign_up(credentials()).await.unwrap_err();
        assert_eq!(err, CoreError::NotConfigured("authentication service"));
    }

    #[tokio::test]
    async fn sign_in_is_delegated_to_the_gateway() {
        let service: TestService<AcceptingGateway> =
            Service::new(None, None, None, Some(AcceptingGateway), FixedIndex);

        let session = service.sign_in(credentials()).await.unwrap();
        assert_eq!(session.user.email, "patient@example.com");
        assert_eq!(session.access_token, "token-abc");
    }
}
