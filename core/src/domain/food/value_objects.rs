/// Query sent to the list endpoint. `None` and blank text both mean "the
/// whole catalog".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFoodsFilter {
    pub title: Option<String>,
}

impl ListFoodsFilter {
    pub fn by_title(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            title: (!title.is_empty()).then_some(title),
        }
    }

    pub fn all() -> Self {
        Self::default()
    }
}
