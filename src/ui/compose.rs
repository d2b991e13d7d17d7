use crate::core::host::Host;
use crate::ui::actors::Actor;

/* ======================= HOST SUBMISSION ======================= */

/// Issues one host draw call per actor, in slice order.
pub fn submit(host: &mut dyn Host, actors: &[Actor]) {
    for actor in actors {
        match actor {
            Actor::Quad { rect, color } => host.draw_rect(*rect, *color),
            Actor::Sprite {
                dict,
                texture,
                rect,
                rotation,
                tint,
            } => host.draw_sprite(dict, texture, *rect, *rotation, *tint),
            Actor::Text {
                content,
                font,
                scale,
                color,
                at,
            } => host.draw_text(content, *font, *scale, *color, *at),
            Actor::Overlay {
                handle,
                rect,
                tint,
                layer,
            } => host.draw_overlay(*handle, *rect, *tint, *layer),
        }
    }
}
