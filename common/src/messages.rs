use serde::{Deserialize, Serialize};

// A missing id reads as 0, which never names a stored todo
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct IdRequest {
    #[serde(default)]
    pub id: i64,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct AddTodoForm {
    #[serde(default)]
    pub title: Option<String>,
}

impl AddTodoForm {
    // A title in the body wins over one in the query string, even when empty
    pub fn title_or(self, query: AddTodoForm) -> String {
        self.title.or(query.title).unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DeleteResponse {
    pub success: bool,
}
