use crate::config::Config;
use crate::core::host::{Host, OverlayHandle};
use crate::menu::MenuOptions;
use log::debug;

/// Lazy one-shot load of a decorative overlay, polled once per frame.
///
/// The first poll issues the request; later polls only ask the host whether
/// it is ready. Nothing ever blocks: until the host reports the overlay
/// loaded, callers simply get `None` and skip drawing it. An overlay that
/// never loads is never drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayLatch {
    #[default]
    Unrequested,
    Requested(OverlayHandle),
    Loaded(OverlayHandle),
}

impl OverlayLatch {
    pub fn poll(&mut self, host: &mut dyn Host, name: &str) -> Option<OverlayHandle> {
        if let Self::Unrequested = *self {
            let handle = host.request_overlay(name);
            debug!("Requested overlay '{name}' ({handle:?})");
            *self = Self::Requested(handle);
        }
        match *self {
            Self::Requested(handle) if host.is_overlay_loaded(handle) => {
                debug!("Overlay '{name}' loaded");
                *self = Self::Loaded(handle);
                Some(handle)
            }
            Self::Loaded(handle) => Some(handle),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Streams in the texture dictionaries a menu will draw from.
pub fn request_menu_textures(host: &mut dyn Host, config: &Config, options: &MenuOptions) {
    host.request_texture_dict(&config.texture_dict);
    if let Some(custom) = &options.custom_header {
        host.request_texture_dict(&custom.dict);
    }
}

#[cfg(test)]
mod tests {
    use super::{OverlayLatch, request_menu_textures};
    use crate::config::Config;
    use crate::core::host::{HeadlessHost, HostCall};
    use crate::menu::MenuOptions;

    #[test]
    fn latch_requests_once_and_waits() {
        let mut host = HeadlessHost::new();
        host.overlay_loads_after(2);
        let mut latch = OverlayLatch::default();

        assert_eq!(latch.poll(&mut host, "MP_MENU_GLARE"), None);
        assert!(matches!(latch, OverlayLatch::Requested(_)));
        assert_eq!(latch.poll(&mut host, "MP_MENU_GLARE"), None);
        let loaded = latch.poll(&mut host, "MP_MENU_GLARE");
        assert!(loaded.is_some());
        assert!(latch.is_loaded());
        assert_eq!(latch.poll(&mut host, "MP_MENU_GLARE"), loaded);

        let requests = host
            .calls()
            .iter()
            .filter(|c| matches!(c, HostCall::RequestOverlay { .. }))
            .count();
        assert_eq!(requests, 1, "the overlay is requested exactly once");
    }

    #[test]
    fn overlay_that_never_loads_stays_pending() {
        let mut host = HeadlessHost::new();
        host.overlay_never_loads();
        let mut latch = OverlayLatch::default();
        for _ in 0..10 {
            assert_eq!(latch.poll(&mut host, "MP_MENU_GLARE"), None);
        }
        assert!(!latch.is_loaded());
    }

    #[test]
    fn custom_header_dict_is_requested_too() {
        let mut host = HeadlessHost::new();
        let opts = MenuOptions::default().custom_header("shopui_title_sm_hangar", "shopui_title_sm_hangar");
        request_menu_textures(&mut host, &Config::default(), &opts);
        assert_eq!(
            host.calls(),
            &[
                HostCall::RequestTextureDict {
                    dict: "commonmenu".to_owned()
                },
                HostCall::RequestTextureDict {
                    dict: "shopui_title_sm_hangar".to_owned()
                },
            ]
        );
    }
}
