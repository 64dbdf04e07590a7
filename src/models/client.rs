use serde::{Deserialize, Serialize};

/// A client of the clinic. Referenced by appointments; the name is shown in
/// cancellation notices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Payload for registering a client; the id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}
