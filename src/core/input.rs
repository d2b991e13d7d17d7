use crate::core::host::Host;
use log::trace;
use rustc_hash::FxHashMap;
use smallvec::{SmallVec, smallvec};

/* ------------------------ Virtual menu actions ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuAction {
    NavigateUp,
    NavigateDown,
    Select,
    ListRight,
    ListLeft,
    Close,
}

impl MenuAction {
    /// Polling order. The first action whose control reads "just pressed"
    /// wins the frame; the rest are not even polled.
    pub const PRIORITY: [Self; 6] = [
        Self::NavigateUp,
        Self::NavigateDown,
        Self::Select,
        Self::ListRight,
        Self::ListLeft,
        Self::Close,
    ];

    pub const fn ini_key(self) -> &'static str {
        match self {
            Self::NavigateUp => "NavigateUp",
            Self::NavigateDown => "NavigateDown",
            Self::Select => "Select",
            Self::ListRight => "ListRight",
            Self::ListLeft => "ListLeft",
            Self::Close => "Close",
        }
    }

    pub fn from_ini_key(k: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|a| a.ini_key().eq_ignore_ascii_case(k.trim()))
    }
}

/* ------------------------ Keymap ------------------------ */

pub const CONTROL_NAVIGATE_UP: u32 = 300;
pub const CONTROL_NAVIGATE_DOWN: u32 = 299;
pub const CONTROL_SELECT: u32 = 215;
pub const CONTROL_CLOSE: u32 = 202;
pub const CONTROL_LIST_LEFT: u32 = 174;
pub const CONTROL_LIST_RIGHT: u32 = 175;

type Bindings = SmallVec<[u32; 2]>;

/// Host control ids bound to each menu action. An action fires when ANY of
/// its controls was just pressed.
#[derive(Clone, Debug)]
pub struct Keymap {
    map: FxHashMap<MenuAction, Bindings>,
}

impl Default for Keymap {
    fn default() -> Self {
        use MenuAction as A;
        let mut km = Self {
            map: FxHashMap::default(),
        };
        km.bind(A::NavigateUp, &[CONTROL_NAVIGATE_UP]);
        km.bind(A::NavigateDown, &[CONTROL_NAVIGATE_DOWN]);
        km.bind(A::Select, &[CONTROL_SELECT]);
        km.bind(A::ListRight, &[CONTROL_LIST_RIGHT]);
        km.bind(A::ListLeft, &[CONTROL_LIST_LEFT]);
        km.bind(A::Close, &[CONTROL_CLOSE]);
        km
    }
}

impl Keymap {
    #[inline(always)]
    pub fn bind(&mut self, action: MenuAction, controls: &[u32]) {
        self.map.insert(action, controls.iter().copied().collect());
    }

    #[inline(always)]
    pub fn bindings(&self, action: MenuAction) -> &[u32] {
        self.map.get(&action).map(|b| b.as_slice()).unwrap_or(&[])
    }
}

/// Parses an ini value such as `300` or `300, 172`. Empty means unbound.
pub fn parse_bindings(value: &str) -> Option<SmallVec<[u32; 2]>> {
    let mut out: Bindings = smallvec![];
    for part in value.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        out.push(part.parse::<u32>().ok()?);
    }
    Some(out)
}

/* ------------------------ Per-frame polling ------------------------ */

/// Polls the host once for this frame and returns the single winning action.
pub fn poll(host: &mut dyn Host, keymap: &Keymap) -> Option<MenuAction> {
    for action in MenuAction::PRIORITY {
        for &control in keymap.bindings(action) {
            if host.is_control_just_pressed(control) {
                trace!("Control {control} pressed -> {action:?}");
                return Some(action);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{
        CONTROL_CLOSE, CONTROL_NAVIGATE_DOWN, CONTROL_NAVIGATE_UP, CONTROL_SELECT, Keymap,
        MenuAction, parse_bindings, poll,
    };
    use crate::core::host::HeadlessHost;

    fn poll_with(pressed: &[u32], keymap: &Keymap) -> Option<MenuAction> {
        let mut host = HeadlessHost::new();
        host.queue_frame(pressed);
        host.begin_frame();
        poll(&mut host, keymap)
    }

    #[test]
    fn nothing_pressed_yields_no_action() {
        assert_eq!(poll_with(&[], &Keymap::default()), None);
    }

    #[test]
    fn earlier_priority_wins() {
        let km = Keymap::default();
        assert_eq!(
            poll_with(&[CONTROL_CLOSE, CONTROL_NAVIGATE_DOWN], &km),
            Some(MenuAction::NavigateDown)
        );
        assert_eq!(
            poll_with(&[CONTROL_SELECT, CONTROL_NAVIGATE_UP], &km),
            Some(MenuAction::NavigateUp)
        );
        assert_eq!(poll_with(&[CONTROL_CLOSE], &km), Some(MenuAction::Close));
    }

    #[test]
    fn extra_bindings_fire_the_same_action() {
        let mut km = Keymap::default();
        km.bind(MenuAction::Select, &[CONTROL_SELECT, 18]);
        assert_eq!(poll_with(&[18], &km), Some(MenuAction::Select));
        km.bind(MenuAction::Select, &[]);
        assert_eq!(poll_with(&[CONTROL_SELECT], &km), None);
    }

    #[test]
    fn ini_values() {
        assert_eq!(parse_bindings("300, 172").as_deref(), Some(&[300, 172][..]));
        assert_eq!(parse_bindings("").as_deref(), Some(&[][..]));
        assert!(parse_bindings("up").is_none());
        assert_eq!(MenuAction::from_ini_key("listright"), Some(MenuAction::ListRight));
        assert_eq!(MenuAction::from_ini_key("Jump"), None);
    }
}
