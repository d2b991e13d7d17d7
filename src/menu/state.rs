use crate::assets::OverlayLatch;
use crate::core::input::MenuAction;
use crate::menu::item::{Cycle, MenuItem};
use crate::ui::color::Rgba;
use bitflags::bitflags;
use log::{debug, trace};

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MenuFlags: u8 {
        const HEADER = 1 << 0;
        const GLARE = 1 << 1;
        const PAGE_COUNTER = 1 << 2;
    }
}

/// A texture drawn in place of the flat header rectangle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomHeader {
    pub dict: String,
    pub texture: String,
}

#[derive(Clone, Debug)]
pub struct MenuOptions {
    pub flags: MenuFlags,
    pub header_color: Option<Rgba>,
    pub custom_header: Option<CustomHeader>,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            flags: MenuFlags::HEADER | MenuFlags::PAGE_COUNTER,
            header_color: None,
            custom_header: None,
        }
    }
}

impl MenuOptions {
    pub fn header(mut self, enabled: bool) -> Self {
        self.flags.set(MenuFlags::HEADER, enabled);
        self
    }

    pub fn glare(mut self, enabled: bool) -> Self {
        self.flags.set(MenuFlags::GLARE, enabled);
        self
    }

    pub fn page_counter(mut self, enabled: bool) -> Self {
        self.flags.set(MenuFlags::PAGE_COUNTER, enabled);
        self
    }

    pub fn header_color(mut self, color: Rgba) -> Self {
        self.header_color = Some(color);
        self
    }

    pub fn custom_header(mut self, dict: impl Into<String>, texture: impl Into<String>) -> Self {
        self.custom_header = Some(CustomHeader {
            dict: dict.into(),
            texture: texture.into(),
        });
        self
    }

    #[inline(always)]
    pub const fn wants_glare(&self) -> bool {
        self.flags.contains(MenuFlags::HEADER.union(MenuFlags::GLARE))
    }
}

/// What a routed action did to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    None,
    FocusMoved(usize),
    Selected {
        activated: bool,
        checked: Option<bool>,
    },
    ListChanged(usize),
    CloseRequested,
}

/// The open menu: its rows and the focus cursor.
pub struct Menu {
    title: String,
    subtitle: String,
    closable: bool,
    options: MenuOptions,
    items: Vec<MenuItem>,
    focus: usize,
    pub(crate) glare: OverlayLatch,
}

impl Menu {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        closable: bool,
        options: MenuOptions,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            closable,
            options,
            items: Vec::new(),
            focus: 0,
            glare: OverlayLatch::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[inline(always)]
    pub const fn closable(&self) -> bool {
        self.closable
    }

    #[inline(always)]
    pub const fn options(&self) -> &MenuOptions {
        &self.options
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[inline(always)]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Always `< item_count()` unless the menu is empty.
    #[inline(always)]
    pub const fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused_item(&self) -> Option<&MenuItem> {
        self.items.get(self.focus)
    }

    /// Positional update: slot `i` takes `items[i]`, slots past the new data
    /// keep their previous item, and rows beyond the current end are appended.
    /// Focus is untouched apart from being kept in range.
    pub fn refresh(&mut self, items: Vec<MenuItem>) {
        if items.is_empty() {
            return;
        }
        for (i, mut item) in items.into_iter().enumerate() {
            if let Some(list) = item.list.as_mut() {
                list.clamp_index();
            }
            match self.items.get_mut(i) {
                Some(slot) => *slot = item,
                None => self.items.push(item),
            }
        }
        self.clamp_focus();
    }

    /// Wholesale replacement, which may shrink the menu.
    pub fn replace_items(&mut self, items: Vec<MenuItem>) {
        self.items = items;
        for list in self.items.iter_mut().filter_map(|i| i.list.as_mut()) {
            list.clamp_index();
        }
        self.clamp_focus();
    }

    fn clamp_focus(&mut self) {
        let last = self.items.len().saturating_sub(1);
        if self.focus > last {
            debug!("Focus {} past the last row, clamping to {last}", self.focus);
            self.focus = last;
        }
    }

    /// Applies one routed action. At most one happens per frame.
    pub fn apply(&mut self, action: MenuAction) -> Outcome {
        trace!("Applying {action:?} at focus {}", self.focus);
        let count = self.items.len();
        match action {
            MenuAction::NavigateUp if count > 0 => {
                self.focus = if self.focus > 0 { self.focus - 1 } else { count - 1 };
                Outcome::FocusMoved(self.focus)
            }
            MenuAction::NavigateDown if count > 0 => {
                self.focus = if self.focus + 1 < count { self.focus + 1 } else { 0 };
                Outcome::FocusMoved(self.focus)
            }
            MenuAction::Select => {
                let Some(item) = self.items.get_mut(self.focus) else {
                    return Outcome::None;
                };
                let activated = item.activate();
                let checked = item.checkbox.as_mut().and_then(|c| c.toggle());
                if !activated && checked.is_none() {
                    return Outcome::None;
                }
                Outcome::Selected { activated, checked }
            }
            MenuAction::ListRight | MenuAction::ListLeft => {
                let dir = if action == MenuAction::ListRight {
                    Cycle::Forward
                } else {
                    Cycle::Back
                };
                self.items
                    .get_mut(self.focus)
                    .and_then(|item| item.list.as_mut())
                    .and_then(|list| list.cycle(dir))
                    .map_or(Outcome::None, Outcome::ListChanged)
            }
            MenuAction::Close if self.closable => Outcome::CloseRequested,
            MenuAction::Close => {
                debug!("Close ignored: menu '{}' is not closable", self.title);
                Outcome::None
            }
            MenuAction::NavigateUp | MenuAction::NavigateDown => Outcome::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Menu, MenuFlags, MenuOptions, Outcome};
    use crate::core::input::MenuAction;
    use crate::menu::item::{Checkbox, ListSelector, MenuItem};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn menu_with(n: usize) -> Menu {
        let mut menu = Menu::new("T", "S", true, MenuOptions::default());
        menu.refresh((0..n).map(|i| MenuItem::new(format!("row {i}"))).collect());
        menu
    }

    #[test]
    fn navigation_wraps_exactly() {
        let mut menu = menu_with(3);
        assert_eq!(menu.apply(MenuAction::NavigateUp), Outcome::FocusMoved(2));
        assert_eq!(menu.apply(MenuAction::NavigateDown), Outcome::FocusMoved(0));
        assert_eq!(menu.apply(MenuAction::NavigateDown), Outcome::FocusMoved(1));
    }

    #[test]
    fn focus_stays_in_range_under_any_walk() {
        let mut menu = menu_with(4);
        let walk = [1u8, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0];
        for step in walk {
            let action = if step == 0 {
                MenuAction::NavigateUp
            } else {
                MenuAction::NavigateDown
            };
            menu.apply(action);
            assert!(menu.focus_index() < menu.item_count());
        }
    }

    #[test]
    fn empty_menu_ignores_everything_but_close() {
        let mut menu = menu_with(0);
        for action in [
            MenuAction::NavigateUp,
            MenuAction::NavigateDown,
            MenuAction::Select,
            MenuAction::ListRight,
            MenuAction::ListLeft,
        ] {
            assert_eq!(menu.apply(action), Outcome::None);
        }
        assert_eq!(menu.apply(MenuAction::Close), Outcome::CloseRequested);
    }

    #[test]
    fn close_requires_closable() {
        let mut menu = Menu::new("T", "", false, MenuOptions::default());
        assert_eq!(menu.apply(MenuAction::Close), Outcome::None);
    }

    #[test]
    fn select_fires_activate_and_check_once_each() {
        let presses = Rc::new(Cell::new(0));
        let checks = Rc::new(RefCell::new(Vec::new()));
        let (p, c) = (Rc::clone(&presses), Rc::clone(&checks));

        let mut menu = menu_with(0);
        menu.refresh(vec![
            MenuItem::new("both")
                .on_activate(move || p.set(p.get() + 1))
                .checkbox(Checkbox::new(false, move |v| c.borrow_mut().push(v))),
        ]);

        assert_eq!(
            menu.apply(MenuAction::Select),
            Outcome::Selected {
                activated: true,
                checked: Some(true)
            }
        );
        assert_eq!(presses.get(), 1);
        assert_eq!(*checks.borrow(), vec![true]);
        assert_eq!(menu.items()[0].checkbox.as_ref().map(|c| c.checked), Some(true));

        menu.apply(MenuAction::Select);
        assert_eq!(*checks.borrow(), vec![true, false]);
    }

    #[test]
    fn list_actions_only_touch_list_rows() {
        let mut menu = menu_with(1);
        assert_eq!(menu.apply(MenuAction::ListRight), Outcome::None);

        menu.refresh(vec![MenuItem::new("l").list(ListSelector::new(["x", "y"], 0))]);
        assert_eq!(menu.apply(MenuAction::ListLeft), Outcome::ListChanged(1));
        assert_eq!(menu.apply(MenuAction::ListRight), Outcome::ListChanged(0));
    }

    #[test]
    fn refresh_is_positional_and_partial() {
        let mut menu = menu_with(0);
        menu.refresh(vec![MenuItem::new("A"), MenuItem::new("B")]);
        menu.refresh(vec![MenuItem::new("C")]);
        let texts: Vec<&str> = menu.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["C", "B"]);

        menu.apply(MenuAction::NavigateDown);
        menu.refresh(Vec::new());
        assert_eq!(menu.item_count(), 2, "empty refresh is a no-op");
        assert_eq!(menu.focus_index(), 1, "refresh keeps focus");
    }

    #[test]
    fn shrinking_clamps_focus() {
        let mut menu = menu_with(5);
        menu.apply(MenuAction::NavigateUp);
        assert_eq!(menu.focus_index(), 4);

        menu.replace_items(vec![MenuItem::new("a"), MenuItem::new("b")]);
        assert_eq!(menu.focus_index(), 1);
        assert_eq!(menu.focused_item().map(|i| i.text.as_str()), Some("b"));

        menu.replace_items(Vec::new());
        assert_eq!(menu.focus_index(), 0);
        assert!(menu.focused_item().is_none());
    }

    #[test]
    fn option_builders_toggle_flags() {
        let opts = MenuOptions::default();
        assert!(opts.flags.contains(MenuFlags::HEADER | MenuFlags::PAGE_COUNTER));
        assert!(!opts.wants_glare());
        assert!(opts.clone().glare(true).wants_glare());
        assert!(!opts.glare(true).header(false).wants_glare(), "glare lives in the header");
    }
}
