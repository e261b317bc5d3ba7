use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Largest rectangle with `content`'s aspect ratio that fits inside `self`,
    /// centered on both axes.
    pub fn fit_centered(&self, content: Size) -> Rect {
        if content.width <= 0.0 || content.height <= 0.0 {
            return *self;
        }
        let box_ratio = self.width / self.height;
        let content_ratio = content.aspect_ratio();

        let (width, height) = if content_ratio > box_ratio {
            (self.width, self.width / content_ratio)
        } else {
            (self.height * content_ratio, self.height)
        };

        Rect {
            x: self.x + (self.width - width) / 2.0,
            y: self.y + (self.height - height) / 2.0,
            width,
            height,
        }
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        const EPSILON: f32 = 0.001;
        other.x >= self.x - EPSILON
            && other.y >= self.y - EPSILON
            && other.right() <= self.right() + EPSILON
            && other.bottom() <= self.bottom() + EPSILON
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}
