use crate::core::space::{Point, Rect};
use crate::ui::color::Rgba;
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Opaque handle for an asynchronously loaded overlay movie (e.g. the glare).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct OverlayHandle(pub u32);

/// Opaque handle for a per-frame callback registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TickHandle(pub u32);

/// Everything the menu consumes from the embedding game.
///
/// All calls are non-blocking and fire-and-forget; the menu issues them from
/// inside the host's per-frame callback. Scheduling only hands back a handle:
/// the host's frame loop is expected to call [`crate::app::MenuContext::tick`]
/// once per frame while that handle is registered.
pub trait Host {
    fn draw_rect(&mut self, rect: Rect, color: Rgba);
    fn draw_sprite(&mut self, dict: &str, texture: &str, rect: Rect, rotation: f32, tint: Rgba);
    fn draw_text(&mut self, text: &str, font: u8, scale: f32, color: Rgba, at: Point);

    fn request_texture_dict(&mut self, dict: &str);
    fn request_overlay(&mut self, name: &str) -> OverlayHandle;
    fn is_overlay_loaded(&mut self, handle: OverlayHandle) -> bool;
    fn draw_overlay(&mut self, handle: OverlayHandle, rect: Rect, tint: Rgba, layer: i32);

    /// "Was this control pressed since the previous frame".
    fn is_control_just_pressed(&mut self, control: u32) -> bool;

    fn schedule_each_frame(&mut self) -> TickHandle;
    fn unschedule(&mut self, handle: TickHandle);

    fn play_sound(&mut self, bank: &str, sound: &str, looped: bool);
}

/* ============================ headless host ============================ */

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
    Rect {
        rect: Rect,
        color: Rgba,
    },
    Sprite {
        dict: String,
        texture: String,
        rect: Rect,
        rotation: f32,
        tint: Rgba,
    },
    Text {
        text: String,
        font: u8,
        scale: f32,
        color: Rgba,
        at: Point,
    },
    RequestTextureDict {
        dict: String,
    },
    RequestOverlay {
        name: String,
        handle: OverlayHandle,
    },
    DrawOverlay {
        handle: OverlayHandle,
        rect: Rect,
        tint: Rgba,
        layer: i32,
    },
    Schedule {
        handle: TickHandle,
    },
    Unschedule {
        handle: TickHandle,
    },
    Sound {
        bank: String,
        sound: String,
        looped: bool,
    },
}

impl HostCall {
    #[inline(always)]
    pub const fn is_draw(&self) -> bool {
        matches!(
            self,
            Self::Rect { .. } | Self::Sprite { .. } | Self::Text { .. } | Self::DrawOverlay { .. }
        )
    }
}

type Presses = SmallVec<[u32; 4]>;

/// A host with no screen: records every call and replays a scripted sequence
/// of per-frame control presses. Used by the demo binary and the tests.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    calls: Vec<HostCall>,
    script: VecDeque<Presses>,
    just_pressed: Presses,
    frame: u64,
    next_handle: u32,
    scheduled: Option<TickHandle>,
    // Polls answered "not loaded" before an overlay reports ready; None = never.
    overlay_delay: Option<u32>,
    overlay_polls: u32,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self {
            overlay_delay: Some(0),
            ..Self::default()
        }
    }

    /// Queue the controls that will read as "just pressed" on one future frame.
    pub fn queue_frame(&mut self, controls: &[u32]) {
        self.script.push_back(controls.iter().copied().collect());
    }

    /// Overlays report loaded only after `polls` unsuccessful polls.
    pub fn overlay_loads_after(&mut self, polls: u32) {
        self.overlay_delay = Some(polls);
    }

    pub fn overlay_never_loads(&mut self) {
        self.overlay_delay = None;
    }

    /// Start a new frame: the next scripted presses (if any) become current.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
        self.just_pressed = self.script.pop_front().unwrap_or_default();
    }

    #[inline(always)]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    #[inline(always)]
    pub const fn is_scheduled(&self) -> bool {
        self.scheduled.is_some()
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|c| match c {
            HostCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn next_handle(&mut self) -> u32 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl Host for HeadlessHost {
    fn draw_rect(&mut self, rect: Rect, color: Rgba) {
        self.calls.push(HostCall::Rect { rect, color });
    }

    fn draw_sprite(&mut self, dict: &str, texture: &str, rect: Rect, rotation: f32, tint: Rgba) {
        self.calls.push(HostCall::Sprite {
            dict: dict.to_owned(),
            texture: texture.to_owned(),
            rect,
            rotation,
            tint,
        });
    }

    fn draw_text(&mut self, text: &str, font: u8, scale: f32, color: Rgba, at: Point) {
        self.calls.push(HostCall::Text {
            text: text.to_owned(),
            font,
            scale,
            color,
            at,
        });
    }

    fn request_texture_dict(&mut self, dict: &str) {
        self.calls.push(HostCall::RequestTextureDict {
            dict: dict.to_owned(),
        });
    }

    fn request_overlay(&mut self, name: &str) -> OverlayHandle {
        let handle = OverlayHandle(self.next_handle());
        self.calls.push(HostCall::RequestOverlay {
            name: name.to_owned(),
            handle,
        });
        handle
    }

    fn is_overlay_loaded(&mut self, _handle: OverlayHandle) -> bool {
        let Some(delay) = self.overlay_delay else {
            return false;
        };
        if self.overlay_polls >= delay {
            return true;
        }
        self.overlay_polls += 1;
        false
    }

    fn draw_overlay(&mut self, handle: OverlayHandle, rect: Rect, tint: Rgba, layer: i32) {
        self.calls.push(HostCall::DrawOverlay {
            handle,
            rect,
            tint,
            layer,
        });
    }

    fn is_control_just_pressed(&mut self, control: u32) -> bool {
        self.just_pressed.contains(&control)
    }

    fn schedule_each_frame(&mut self) -> TickHandle {
        let handle = TickHandle(self.next_handle());
        self.scheduled = Some(handle);
        self.calls.push(HostCall::Schedule { handle });
        handle
    }

    fn unschedule(&mut self, handle: TickHandle) {
        if self.scheduled == Some(handle) {
            self.scheduled = None;
        }
        self.calls.push(HostCall::Unschedule { handle });
    }

    fn play_sound(&mut self, bank: &str, sound: &str, looped: bool) {
        self.calls.push(HostCall::Sound {
            bank: bank.to_owned(),
            sound: sound.to_owned(),
            looped,
        });
    }
}
