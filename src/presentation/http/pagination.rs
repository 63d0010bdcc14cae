use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::pagination::{Page, PageRequest};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-based page index.
    pub page: Option<i64>,
    /// Page size, clamped to 1..=100.
    pub size: Option<i64>,
}

impl PageQuery {
    pub fn to_request(&self, default_size: u32) -> PageRequest {
        PageRequest::new(self.page, self.size, default_size)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[aliases(
    DiaryPage = PageResponse<crate::presentation::http::diaries::DiaryResponse>,
    PublicDiaryPage = PageResponse<crate::presentation::http::diaries::PublicDiaryResponse>,
    MessagePage = PageResponse<crate::presentation::http::messages::MessageResponse>,
    TodoPage = PageResponse<crate::presentation::http::todos::TodoResponse>
)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number: u32,
    pub size: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
    pub number_of_elements: usize,
}

impl<T> PageResponse<T> {
    pub fn from_page<U, F>(page: Page<U>, f: F) -> Self
    where
        F: FnMut(U) -> T,
    {
        let total_pages = page.total_pages();
        let first = page.is_first();
        let last = page.is_last();
        let page = page.map(f);
        Self {
            empty: page.content.is_empty(),
            number_of_elements: page.content.len(),
            content: page.content,
            total_elements: page.total_elements,
            total_pages,
            number: page.number,
            size: page.size,
            first,
            last,
        }
    }
}
