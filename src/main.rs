use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;
use std::sync::Arc;

use tickmenu::config;
use tickmenu::core::host::HeadlessHost;
use tickmenu::core::input::{
    CONTROL_CLOSE, CONTROL_LIST_LEFT, CONTROL_LIST_RIGHT, CONTROL_NAVIGATE_DOWN,
    CONTROL_NAVIGATE_UP, CONTROL_SELECT,
};
use tickmenu::ui::color::rgba_hex;
use tickmenu::{Checkbox, ListSelector, MenuContext, MenuItem, MenuOptions};

const DEFAULT_FRAMES: u64 = 12;

/// Presses replayed by the headless host, one entry per frame.
const SCRIPT: &[&[u32]] = &[
    &[],
    &[CONTROL_SELECT],
    &[CONTROL_NAVIGATE_DOWN],
    &[CONTROL_LIST_RIGHT],
    &[CONTROL_LIST_RIGHT],
    &[CONTROL_LIST_LEFT],
    &[CONTROL_NAVIGATE_DOWN],
    &[CONTROL_SELECT],
    &[CONTROL_NAVIGATE_UP, CONTROL_CLOSE],
    &[CONTROL_CLOSE],
];

fn demo_items(list_index: &Rc<Cell<usize>>, god_mode: &Rc<Cell<bool>>) -> Vec<MenuItem> {
    let store = Rc::clone(list_index);
    let toggle = Rc::clone(god_mode);
    vec![
        MenuItem::new("Say hello")
            .description("Logs a greeting")
            .on_activate(|| log::info!("Hello from the menu")),
        MenuItem::new("Pick a word").list(
            ListSelector::new(["Test", "damn", "yooo"], list_index.get()).on_change(move |i| {
                log::info!("List index -> {i}");
                store.set(i);
            }),
        ),
        MenuItem::new("God mode").checkbox(Checkbox::new(god_mode.get(), move |on| {
            log::info!("God mode -> {on}");
            toggle.set(on);
        })),
        MenuItem::new("Plain row"),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Install logger immediately, then set runtime max level from config after loading it.
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .try_init();
    // Startup default when config is missing or malformed.
    log::set_max_level(log::LevelFilter::Warn);

    config::load();
    let cfg = config::get();
    log::set_max_level(cfg.log_level.as_level_filter());

    let frames = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => DEFAULT_FRAMES,
    };

    let mut host = HeadlessHost::new();
    for presses in SCRIPT {
        host.queue_frame(presses);
    }

    let list_index = Rc::new(Cell::new(0usize));
    let god_mode = Rc::new(Cell::new(false));
    let mut ctx = MenuContext::new(Arc::clone(&cfg));
    let options = MenuOptions::default()
        .glare(true)
        .header_color(rgba_hex("#265CB4F5"));
    ctx.open(&mut host, "Demo Menu", "Subtitle!", true, options, move |req| {
        req.refresh(demo_items(&list_index, &god_mode));
    });

    let mut out = std::io::stdout().lock();
    for _ in 0..frames {
        host.begin_frame();
        let running = ctx.tick(&mut host);
        for call in host.take_calls() {
            let line = serde_json::json!({ "frame": host.frame(), "call": call });
            writeln!(out, "{line}")?;
        }
        if !running {
            break;
        }
    }
    Ok(())
}
