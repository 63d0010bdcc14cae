pub const MAX_PAGE_SIZE: u32 = 100;

/// Zero-based page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: Option<i64>, size: Option<i64>, default_size: u32) -> Self {
        let page = page.unwrap_or(0).clamp(0, u32::MAX as i64) as u32;
        let size = size
            .unwrap_or(default_size as i64)
            .clamp(1, MAX_PAGE_SIZE as i64) as u32;
        Self { page, size }
    }

    pub fn limit(&self) -> i64 {
        self.size as i64
    }

    pub fn offset(&self) -> i64 {
        self.page as i64 * self.size as i64
    }
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub number: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: i64, req: PageRequest) -> Self {
        Self {
            content,
            total_elements,
            number: req.page,
            size: req.size,
        }
    }

    pub fn total_pages(&self) -> i64 {
        if self.size == 0 {
            return 0;
        }
        let size = self.size as i64;
        (self.total_elements + size - 1) / size
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        (self.number as i64) + 1 >= self.total_pages()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            number: self.number,
            size: self.size,
        }
    }
}
