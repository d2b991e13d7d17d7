use serde::Serialize;

// Every coordinate here lives in the host's normalized screen space:
// (0, 0) is the top-left corner and (1, 1) the bottom-right.

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

/// A rectangle described by its CENTER and its extent, matching how the host
/// positions rects and sprites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Point {
    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub const fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Size {
    #[inline(always)]
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

impl Rect {
    #[inline(always)]
    pub const fn centered(at: Point, size: Size) -> Self {
        Self {
            x: at.x,
            y: at.y,
            w: size.w,
            h: size.h,
        }
    }

    #[inline(always)]
    pub const fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
