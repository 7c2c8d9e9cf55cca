use serde::{Deserialize, Serialize};

/// A browsable recipe category (catalog category or regional cuisine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(
        rename = "strCategoryDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, thumbnail: Option<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            thumbnail,
            description: None,
        }
    }
}
