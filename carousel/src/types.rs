#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns `true` when both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        crate::math::is_positive_finite(self.width) && crate::math::is_positive_finite(self.height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Builds a rect of the given size centered on `(center_x, center_y)`.
    pub fn from_center(center_x: f32, center_y: f32, size: Size) -> Self {
        Self {
            x: center_x - size.width / 2.0,
            y: center_y - size.height / 2.0,
            width: size.width,
            height: size.height,
        }
    }
}

/// How an image is fitted into its item frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentMode {
    /// Scale to cover the whole frame, cropping the overflow.
    #[default]
    AspectFill,
    /// Scale to fit inside the frame, letterboxing the remainder.
    AspectFit,
}

impl ContentMode {
    /// The region of the image (in image coordinates) that ends up visible.
    ///
    /// Degenerate sizes yield the full image rect.
    pub fn source_rect(self, image: Size, target: Size) -> Rect {
        let full = Rect::new(0.0, 0.0, image.width, image.height);
        if !image.is_valid() || !target.is_valid() {
            return full;
        }
        match self {
            Self::AspectFit => full,
            Self::AspectFill => {
                let scale = (target.width / image.width).max(target.height / image.height);
                let visible = Size::new(target.width / scale, target.height / scale);
                Rect::from_center(image.width / 2.0, image.height / 2.0, visible)
            }
        }
    }

    /// Where the image is drawn, relative to the target's origin.
    ///
    /// Degenerate sizes yield the full target rect.
    pub fn destination_rect(self, image: Size, target: Size) -> Rect {
        let full = Rect::new(0.0, 0.0, target.width, target.height);
        if !image.is_valid() || !target.is_valid() {
            return full;
        }
        match self {
            Self::AspectFill => full,
            Self::AspectFit => {
                let scale = (target.width / image.width).min(target.height / image.height);
                let drawn = Size::new(image.width * scale, image.height * scale);
                Rect::from_center(target.width / 2.0, target.height / 2.0, drawn)
            }
        }
    }
}

/// A host scroll event, delivered by the scroll surface the carousel is attached to.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollEvent {
    /// The content offset changed (drag, momentum, or programmatic).
    Scroll { offset: f32 },
    /// The user lifted their finger; `target_offset` is where momentum would come to rest.
    DragEnd { target_offset: f32, velocity: f32 },
}
