use std::cmp::Ordering;

/// A run of text positioned on a page. `y` grows downward from the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

impl TextBlock {
    pub fn new(x: f32, y: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
        }
    }

    /// Top-to-bottom, then left-to-right.
    pub fn reading_order(a: &TextBlock, b: &TextBlock) -> Ordering {
        a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x))
    }
}
