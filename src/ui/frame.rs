use crate::config::Config;
use crate::core::host::OverlayHandle;
use crate::menu::{Menu, MenuFlags, MenuItem};
use crate::ui::actors::Actor;
use crate::ui::color::{self, WHITE};
use crate::ui::{layout, variant};
use smallvec::SmallVec;

const GLARE_LAYER: i32 = 1;
const LIST_LABEL_SCALE_DELTA: f32 = 0.015;

type RowActors = SmallVec<[Actor; 6]>;

/// Builds one frame of the menu, in draw order: header, subtitle bar, rows
/// with their sub-widgets, then the focused row's description.
///
/// `glare` is the overlay handle once it has loaded; until then the glare is
/// skipped.
pub fn get_actors(menu: &Menu, cfg: &Config, glare: Option<OverlayHandle>) -> Vec<Actor> {
    let count = menu.item_count();
    let mut actors = Vec::with_capacity(8 + count * 4);

    if menu.options().flags.contains(MenuFlags::HEADER) {
        push_header(&mut actors, menu, cfg, glare);
    }
    push_subtitle(&mut actors, menu, cfg);

    for (i, item) in menu.items().iter().enumerate() {
        actors.extend(row_actors(cfg, item, i, i == menu.focus_index()));
    }

    if let Some(text) = menu.focused_item().and_then(MenuItem::visible_description) {
        push_description(&mut actors, menu, cfg, text);
    }
    actors
}

fn push_header(out: &mut Vec<Actor>, menu: &Menu, cfg: &Config, glare: Option<OverlayHandle>) {
    let opts = menu.options();
    let color = opts.header_color.unwrap_or(cfg.header.color);
    let rect = layout::header_rect(cfg);

    match &opts.custom_header {
        None => out.push(Actor::Quad { rect, color }),
        Some(custom) => out.push(Actor::sprite(
            &custom.dict,
            &custom.texture,
            rect,
            color::with_alpha(WHITE, color[3]),
        )),
    }

    if !menu.title().is_empty() {
        out.push(Actor::text(
            menu.title(),
            cfg.header.title_font,
            cfg.header.title_size,
            WHITE,
            layout::title_anchor(cfg),
        ));
    }

    if let Some(handle) = glare.filter(|_| opts.flags.contains(MenuFlags::GLARE)) {
        out.push(Actor::Overlay {
            handle,
            rect: layout::glare_rect(cfg),
            tint: WHITE,
            layer: GLARE_LAYER,
        });
    }
}

fn push_subtitle(out: &mut Vec<Actor>, menu: &Menu, cfg: &Config) {
    out.push(Actor::Quad {
        rect: layout::subtitle_rect(cfg),
        color: cfg.subtitle.color,
    });

    if !menu.subtitle().is_empty() {
        out.push(Actor::text(
            menu.subtitle().to_uppercase(),
            cfg.font_index,
            cfg.subtitle.text_size,
            cfg.font_color.inactive,
            layout::subtitle_text_anchor(cfg),
        ));
    }

    let count = menu.item_count();
    if count > 0 && menu.options().flags.contains(MenuFlags::PAGE_COUNTER) {
        out.push(Actor::text(
            format!("{} / {}", menu.focus_index() + 1, count),
            cfg.font_index,
            cfg.subtitle.text_size,
            cfg.font_color.inactive,
            layout::page_counter_anchor(cfg),
        ));
    }
}

fn row_actors(cfg: &Config, item: &MenuItem, index: usize, focused: bool) -> RowActors {
    let mut out = RowActors::new();
    let v = variant::resolve(cfg, focused, item.checkbox.as_ref().map(|c| c.checked));

    out.push(Actor::Quad {
        rect: layout::row_rect(cfg, index),
        color: v.background,
    });
    if !item.text.is_empty() {
        out.push(Actor::text(
            item.text.as_str(),
            cfg.font_index,
            cfg.button.text_size,
            v.text,
            layout::row_text_anchor(cfg, index),
        ));
    }

    if let Some(texture) = v.checkbox_texture {
        out.push(Actor::sprite(
            &cfg.texture_dict,
            texture,
            layout::checkbox_rect(cfg, index),
            color::with_alpha(WHITE, 245),
        ));
    }

    if let Some(list) = &item.list {
        let label = list.current();
        let l = layout::list_layout(cfg, index, label);
        out.push(Actor::sprite(&cfg.texture_dict, &cfg.list.right_texture, l.right_arrow, v.list_tint));
        if let Some(at) = l.label {
            out.push(Actor::text(
                label,
                cfg.font_index,
                cfg.button.text_size - LIST_LABEL_SCALE_DELTA,
                v.text,
                at,
            ));
        }
        out.push(Actor::sprite(&cfg.texture_dict, &cfg.list.left_texture, l.left_arrow, v.list_tint));
    }
    out
}

fn push_description(out: &mut Vec<Actor>, menu: &Menu, cfg: &Config, text: &str) {
    let d = &cfg.description;
    let l = layout::description_layout(cfg, menu.item_count());
    let accent = menu.options().header_color.unwrap_or(cfg.header.color);

    out.push(Actor::Quad {
        rect: l.mini_bar,
        color: color::with_alpha(accent, d.mini_bar_alpha),
    });
    out.push(Actor::Quad {
        rect: l.bar,
        color: color::with_alpha(cfg.subtitle.color, d.alpha),
    });
    out.push(Actor::text(text, cfg.font_index, d.text_size, d.text_color, l.text));
}

#[cfg(test)]
mod tests {
    use super::get_actors;
    use crate::config::Config;
    use crate::core::host::OverlayHandle;
    use crate::core::input::MenuAction;
    use crate::menu::{Checkbox, ListSelector, Menu, MenuItem, MenuOptions};
    use crate::ui::actors::Actor;

    fn texts(actors: &[Actor]) -> Vec<&str> {
        actors.iter().filter_map(Actor::as_text).collect()
    }

    fn sprites(actors: &[Actor]) -> Vec<&str> {
        actors
            .iter()
            .filter_map(|a| match a {
                Actor::Sprite { texture, .. } => Some(texture.as_str()),
                _ => None,
            })
            .collect()
    }

    fn menu(options: MenuOptions, items: Vec<MenuItem>) -> Menu {
        let mut m = Menu::new("Title", "Sub title", true, options);
        m.refresh(items);
        m
    }

    #[test]
    fn frame_draws_in_fixed_order() {
        let cfg = Config::default();
        let m = menu(
            MenuOptions::default(),
            vec![MenuItem::new("A").description("first"), MenuItem::new("B")],
        );
        let actors = get_actors(&m, &cfg, None);
        assert_eq!(texts(&actors), ["Title", "SUB TITLE", "1 / 2", "A", "B", "first"]);
        assert!(matches!(actors[0], Actor::Quad { color, .. } if color == cfg.header.color));
        assert!(matches!(actors.last(), Some(Actor::Text { .. })));
    }

    #[test]
    fn page_counter_needs_items_and_the_option() {
        let cfg = Config::default();
        let empty = menu(MenuOptions::default(), Vec::new());
        assert!(!texts(&get_actors(&empty, &cfg, None)).iter().any(|t| t.contains(" / ")));

        let off = menu(MenuOptions::default().page_counter(false), vec![MenuItem::new("A")]);
        assert!(!texts(&get_actors(&off, &cfg, None)).contains(&"1 / 1"));

        let on = menu(MenuOptions::default(), vec![MenuItem::new("A")]);
        assert!(texts(&get_actors(&on, &cfg, None)).contains(&"1 / 1"));
    }

    #[test]
    fn description_only_for_focused_non_empty() {
        let cfg = Config::default();
        let mut m = menu(
            MenuOptions::default(),
            vec![
                MenuItem::new("A"),
                MenuItem::new("B").description("about b"),
                MenuItem::new("C").description(""),
            ],
        );
        assert!(!texts(&get_actors(&m, &cfg, None)).contains(&"about b"));
        m.apply(MenuAction::NavigateDown);
        let actors = get_actors(&m, &cfg, None);
        assert!(texts(&actors).contains(&"about b"));
        let quads = actors.iter().filter(|a| matches!(a, Actor::Quad { .. })).count();
        assert_eq!(quads, 1 + 1 + 3 + 2, "header, subtitle, rows, mini bar + bar");

        m.apply(MenuAction::NavigateDown);
        let quads = get_actors(&m, &cfg, None)
            .iter()
            .filter(|a| matches!(a, Actor::Quad { .. }))
            .count();
        assert_eq!(quads, 5, "empty description draws no panel");
    }

    #[test]
    fn checkbox_and_list_widgets() {
        let cfg = Config::default();
        let m = menu(
            MenuOptions::default(),
            vec![
                MenuItem::new("cb").checkbox(Checkbox::display(true)),
                MenuItem::new("l").list(ListSelector::new(["Test", "damn"], 1)),
            ],
        );
        let actors = get_actors(&m, &cfg, None);
        assert_eq!(sprites(&actors), ["shop_box_tickb", "arrowright", "arrowleft"]);
        assert!(texts(&actors).contains(&"damn"));
    }

    #[test]
    fn custom_header_and_glare() {
        let cfg = Config::default();
        let opts = MenuOptions::default()
            .custom_header("shopui", "banner")
            .header_color([1, 2, 3, 100])
            .glare(true);
        let m = menu(opts.clone(), vec![MenuItem::new("A").description("d")]);

        let pending = get_actors(&m, &cfg, None);
        assert!(!pending.iter().any(|a| matches!(a, Actor::Overlay { .. })));
        assert!(matches!(&pending[0], Actor::Sprite { texture, tint, .. } if texture == "banner" && *tint == [255, 255, 255, 100]));

        let loaded = get_actors(&m, &cfg, Some(OverlayHandle(3)));
        assert!(loaded.iter().any(|a| matches!(a, Actor::Overlay { layer: 1, .. })));

        // description mini bar takes the header color override
        assert!(loaded.iter().any(|a| matches!(a, Actor::Quad { color, .. } if *color == [1, 2, 3, 210])));

        let headless = menu(opts.header(false), vec![]);
        let actors = get_actors(&headless, &cfg, Some(OverlayHandle(3)));
        assert!(!texts(&actors).contains(&"Title"));
        assert!(!actors.iter().any(|a| matches!(a, Actor::Overlay { .. })));
    }
}
