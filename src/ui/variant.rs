use crate::config::Config;
use crate::ui::color::Rgba;

/// Visual parameters of one row for the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowVariant<'a> {
    pub background: Rgba,
    pub text: Rgba,
    pub list_tint: Rgba,
    /// Present only for rows that carry a checkbox.
    pub checkbox_texture: Option<&'a str>,
}

#[inline(always)]
pub fn checkbox_texture(cfg: &Config, focused: bool, checked: bool) -> &str {
    let set = cfg.checkbox.textures.pick(focused);
    if checked { &set.checked } else { &set.unchecked }
}

/// Looks up a row's variant from whether it holds focus and, for checkbox
/// rows, whether it is checked.
pub fn resolve(cfg: &Config, focused: bool, checked: Option<bool>) -> RowVariant<'_> {
    RowVariant {
        background: *cfg.button.color.pick(focused),
        text: *cfg.font_color.pick(focused),
        list_tint: *cfg.list.tint.pick(focused),
        checkbox_texture: checked.map(|c| checkbox_texture(cfg, focused, c)),
    }
}

#[cfg(test)]
mod tests {
    use super::{checkbox_texture, resolve};
    use crate::config::Config;

    #[test]
    fn four_checkbox_glyphs() {
        let cfg = Config::default();
        assert_eq!(checkbox_texture(&cfg, false, false), "shop_box_blank");
        assert_eq!(checkbox_texture(&cfg, false, true), "shop_box_tick");
        assert_eq!(checkbox_texture(&cfg, true, false), "shop_box_blankb");
        assert_eq!(checkbox_texture(&cfg, true, true), "shop_box_tickb");
    }

    #[test]
    fn focus_swaps_the_palette() {
        let cfg = Config::default();
        let on = resolve(&cfg, true, None);
        let off = resolve(&cfg, false, None);
        assert_eq!(on.background, [250, 250, 250, 245]);
        assert_eq!(off.background, [26, 26, 26, 195]);
        assert_eq!(on.text, [10, 10, 10, 250]);
        assert_eq!(off.text, [245, 245, 245, 235]);
        assert_eq!(on.list_tint, [10, 10, 10, 245]);
        assert_eq!(off.list_tint, [250, 250, 250, 245]);
        assert_eq!(on.checkbox_texture, None);
        assert_eq!(resolve(&cfg, true, Some(true)).checkbox_texture, Some("shop_box_tickb"));
    }
}
