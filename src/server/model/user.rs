/// Profile fields persisted when a federated login completes.
#[derive(Debug, Clone)]
pub struct UpsertUserParams {
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}
