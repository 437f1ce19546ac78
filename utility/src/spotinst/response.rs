use serde::{Deserialize, Serialize};

/// ApiResponse the envelope every spotinst api call answers with
#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct ApiResponse<T> {
    #[serde(default = "ResponseBody::empty")]
    pub response: ResponseBody<T>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Default, Clone)]
pub struct ResponseBody<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub count: usize,
}

impl<T> ResponseBody<T> {
    fn empty() -> Self {
        ResponseBody {
            items: vec![],
            count: 0,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        let count = items.len();
        ApiResponse {
            response: ResponseBody { items, count },
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.response.items
    }
}
