use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Dog {
    pub id: i64,
    pub name: String,
    pub breed: Option<String>,
    pub owner_name: Option<String>,
    pub created_at: String,
}

/// Input for a new dog record.
#[derive(Debug, Clone, Default)]
pub struct NewDog {
    pub name: String,
    pub breed: Option<String>,
    pub owner_name: Option<String>,
}
