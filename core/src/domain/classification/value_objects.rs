use crate::domain::classification::entities::ItemKind;

#[derive(Debug, Clone)]
pub struct ClassifyInput {
    pub query: String,
    pub kind: ItemKind,
}
