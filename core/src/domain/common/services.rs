/// Container wiring the resolution pipeline to its collaborators.
///
/// Every upstream capability is held as an independently nullable adapter:
/// an absent adapter means "this source is disabled" and the pipeline falls
/// through to the next source, it never means a crash. Only the random
/// source is mandatory, so fallback sampling stays injectable for tests.
#[derive(Debug, Clone)]
pub struct Service<CR, RR, L, A, RS> {
    pub classification_repository: Option<CR>,
    pub recipe_repository: Option<RR>,
    pub llm_client: Option<L>,
    pub auth_gateway: Option<A>,
    pub random_source: RS,
}

impl<CR, RR, L, A, RS> Service<CR, RR, L, A, RS> {
    pub fn new(
        classification_repository: Option<CR>,
        recipe_repository: Option<RR>,
        llm_client: Option<L>,
        auth_gateway: Option<A>,
        random_source: RS,
    ) -> Self {
        Self {
            classification_repository,
            recipe_repository,
            llm_client,
            auth_gateway,
            random_source,
        }
    }
}
