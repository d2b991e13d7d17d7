use crate::assets;
use crate::config::Config;
use crate::core::audio;
use crate::core::host::{Host, TickHandle};
use crate::core::input;
use crate::menu::{Menu, MenuItem, MenuOptions, Outcome};
use crate::ui::{compose, frame};
use log::{debug, info};
use std::sync::Arc;

/// Handed to the application's per-frame handler after the frame has been
/// drawn and input routed. Everything done through it applies immediately and
/// becomes visible on the next frame.
pub struct FrameRequest<'a> {
    menu: &'a mut Menu,
    close: bool,
}

impl FrameRequest<'_> {
    /// Positional item update, see [`Menu::refresh`].
    pub fn refresh(&mut self, items: Vec<MenuItem>) {
        self.menu.refresh(items);
    }

    /// Full item replacement, see [`Menu::replace_items`].
    pub fn replace(&mut self, items: Vec<MenuItem>) {
        self.menu.replace_items(items);
    }

    pub fn close(&mut self) {
        self.close = true;
    }

    pub fn menu(&self) -> &Menu {
        &*self.menu
    }
}

pub type FrameHandler = Box<dyn FnMut(&mut FrameRequest<'_>)>;

struct ActiveMenu {
    menu: Menu,
    handler: FrameHandler,
    tick: TickHandle,
    open: bool,
}

/// Owns the single open menu of the process and its per-frame registration.
///
/// Create one per process and pass it where menus are opened; the host's
/// frame loop calls [`MenuContext::tick`] while a menu is scheduled.
pub struct MenuContext {
    config: Arc<Config>,
    active: Option<ActiveMenu>,
}

impl MenuContext {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            active: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True from `open` until `close` is requested.
    pub fn is_open(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.open)
    }

    /// True while the per-frame callback is registered with the host. Stays
    /// true for one frame after a close, until the next tick observes it.
    pub fn is_ticking(&self) -> bool {
        self.active.is_some()
    }

    pub fn menu(&self) -> Option<&Menu> {
        self.active.as_ref().map(|a| &a.menu)
    }

    /// Opens a menu and starts its per-frame loop. Returns `None`, touching
    /// nothing, if a menu is already open.
    ///
    /// `handler` runs at the end of every frame; it is where the application
    /// pushes the rows to show (a new menu starts with none).
    pub fn open(
        &mut self,
        host: &mut dyn Host,
        title: &str,
        subtitle: &str,
        closable: bool,
        options: MenuOptions,
        handler: impl FnMut(&mut FrameRequest<'_>) + 'static,
    ) -> Option<&mut Menu> {
        if self.is_open() {
            debug!("Refusing to open '{title}': a menu is already open");
            return None;
        }
        // A closed menu whose loop has not yet observed the close.
        self.teardown(host);

        audio::play_cue(host, &self.config, audio::CUE_OPEN);
        assets::request_menu_textures(host, &self.config, &options);
        let tick = host.schedule_each_frame();
        info!("Opened menu '{title}'");

        let active = self.active.insert(ActiveMenu {
            menu: Menu::new(title, subtitle, closable, options),
            handler: Box::new(handler),
            tick,
            open: true,
        });
        Some(&mut active.menu)
    }

    /// Flags the menu closed; the loop stops at the top of the next tick.
    pub fn close(&mut self) {
        if let Some(active) = self.active.as_mut().filter(|a| a.open) {
            info!("Closing menu '{}'", active.menu.title());
            active.open = false;
        }
    }

    /// Pushes item data from outside the frame handler.
    pub fn refresh(&mut self, items: Vec<MenuItem>) {
        if let Some(active) = self.active.as_mut() {
            active.menu.refresh(items);
        }
    }

    pub fn replace_items(&mut self, items: Vec<MenuItem>) {
        if let Some(active) = self.active.as_mut() {
            active.menu.replace_items(items);
        }
    }

    fn teardown(&mut self, host: &mut dyn Host) {
        if let Some(stale) = self.active.take() {
            host.unschedule(stale.tick);
            debug!("Stopped frame loop of '{}'", stale.menu.title());
        }
    }

    /// One frame. Returns whether the loop is still running afterwards.
    ///
    /// Draw calls always precede input handling, so a press only shows up on
    /// the frame after it was read.
    pub fn tick(&mut self, host: &mut dyn Host) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !active.open {
            self.teardown(host);
            return false;
        }

        let cfg = &*self.config;
        let menu = &mut active.menu;

        let glare = if menu.options().wants_glare() {
            menu.glare.poll(host, &cfg.glare_overlay)
        } else {
            None
        };
        let actors = frame::get_actors(menu, cfg, glare);
        compose::submit(host, &actors);

        if let Some(action) = input::poll(host, &cfg.controls) {
            match menu.apply(action) {
                Outcome::None => {}
                Outcome::FocusMoved(_) => audio::play_cue(host, cfg, audio::CUE_NAVIGATE),
                Outcome::Selected { .. } => audio::play_cue(host, cfg, audio::CUE_SELECT),
                Outcome::ListChanged(_) => audio::play_cue(host, cfg, audio::CUE_LIST),
                Outcome::CloseRequested => {
                    audio::play_cue(host, cfg, audio::CUE_CLOSE);
                    info!("Closing menu '{}'", menu.title());
                    active.open = false;
                }
            }
        }

        let mut request = FrameRequest {
            menu: &mut active.menu,
            close: false,
        };
        (active.handler)(&mut request);
        if request.close {
            info!("Closing menu '{}'", active.menu.title());
            active.open = false;
        }
        true
    }
}
