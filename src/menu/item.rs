use std::fmt;
use std::rc::Rc;

pub type ActivateFn = Rc<dyn Fn()>;
pub type CheckFn = Rc<dyn Fn(bool)>;
pub type ListFn = Rc<dyn Fn(usize)>;

/// Which sub-widgets a row carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Plain,
    Checkbox,
    List,
    CheckboxList,
}

/// A checkbox glyph. Without a change handler it is display-only: selecting
/// the row leaves it as-is.
#[derive(Clone)]
pub struct Checkbox {
    pub checked: bool,
    on_change: Option<CheckFn>,
}

impl Checkbox {
    pub const fn display(checked: bool) -> Self {
        Self {
            checked,
            on_change: None,
        }
    }

    pub fn new(checked: bool, on_change: impl Fn(bool) + 'static) -> Self {
        Self {
            checked,
            on_change: Some(Rc::new(on_change)),
        }
    }

    #[inline(always)]
    pub const fn is_toggleable(&self) -> bool {
        self.on_change.is_some()
    }

    /// Flips the state and reports the new one, if this checkbox reacts to
    /// selection at all.
    pub(crate) fn toggle(&mut self) -> Option<bool> {
        let handler = self.on_change.clone()?;
        self.checked = !self.checked;
        handler(self.checked);
        Some(self.checked)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cycle {
    Forward,
    Back,
}

/// A cyclable list of labels with a cursor.
#[derive(Clone)]
pub struct ListSelector {
    entries: Vec<String>,
    index: usize,
    on_change: Option<ListFn>,
}

impl ListSelector {
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = S>, index: usize) -> Self {
        let mut list = Self {
            entries: entries.into_iter().map(Into::into).collect(),
            index,
            on_change: None,
        };
        list.clamp_index();
        list
    }

    pub fn on_change(mut self, f: impl Fn(usize) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline(always)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Label under the cursor; empty for an empty list.
    pub fn current(&self) -> &str {
        self.entries.get(self.index).map_or("", String::as_str)
    }

    pub(crate) fn clamp_index(&mut self) {
        self.index = self.index.min(self.entries.len().saturating_sub(1));
    }

    /// Moves the cursor one step, wrapping at both ends, and always notifies
    /// the handler. Empty lists do not move.
    pub(crate) fn cycle(&mut self, dir: Cycle) -> Option<usize> {
        let last = self.entries.len().checked_sub(1)?;
        self.index = match dir {
            Cycle::Forward if self.index < last => self.index + 1,
            Cycle::Forward => 0,
            Cycle::Back if self.index == 0 => last,
            Cycle::Back => self.index - 1,
        };
        if let Some(handler) = &self.on_change {
            handler(self.index);
        }
        Some(self.index)
    }
}

/// One navigable row of the menu.
#[derive(Clone)]
pub struct MenuItem {
    pub text: String,
    pub description: Option<String>,
    on_activate: Option<ActivateFn>,
    pub checkbox: Option<Checkbox>,
    pub list: Option<ListSelector>,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: None,
            on_activate: None,
            checkbox: None,
            list: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn on_activate(mut self, f: impl Fn() + 'static) -> Self {
        self.on_activate = Some(Rc::new(f));
        self
    }

    pub fn checkbox(mut self, checkbox: Checkbox) -> Self {
        self.checkbox = Some(checkbox);
        self
    }

    pub fn list(mut self, list: ListSelector) -> Self {
        self.list = Some(list);
        self
    }

    pub const fn kind(&self) -> ItemKind {
        match (self.checkbox.is_some(), self.list.is_some()) {
            (false, false) => ItemKind::Plain,
            (true, false) => ItemKind::Checkbox,
            (false, true) => ItemKind::List,
            (true, true) => ItemKind::CheckboxList,
        }
    }

    /// The description, if there is anything to show.
    pub fn visible_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    #[inline(always)]
    pub const fn is_activatable(&self) -> bool {
        self.on_activate.is_some()
    }

    pub(crate) fn activate(&self) -> bool {
        match &self.on_activate {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("text", &self.text)
            .field("description", &self.description)
            .field("activatable", &self.is_activatable())
            .field("checked", &self.checkbox.as_ref().map(|c| c.checked))
            .field("list", &self.list.as_ref().map(|l| (l.index, l.entries.len())))
            .finish()
    }
}
