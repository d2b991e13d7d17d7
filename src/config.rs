use crate::core::audio::{self, SoundTable};
use crate::core::input::{self, Keymap, MenuAction};
use crate::core::space::{Point, Size};
use crate::ui::color::{self, Rgba};
use log::{info, warn};
use rustc_hash::FxHashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, LazyLock, RwLock};

pub const CONFIG_PATH: &str = "tickmenu.ini";

// --- Minimal INI reader ---
#[derive(Debug, Default)]
pub struct SimpleIni {
    sections: FxHashMap<String, FxHashMap<String, String>>,
}

impl SimpleIni {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        self.parse(&content);
        Ok(())
    }

    pub fn parse(&mut self, content: &str) {
        self.sections.clear();

        let mut current_section = String::new();

        for raw_line in content.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            // Section header: [SectionName]
            if line.starts_with('[') && line.ends_with(']') && line.len() >= 2 {
                current_section = line[1..line.len() - 1].trim().to_string();
                self.sections.entry(current_section.clone()).or_default();
                continue;
            }

            // Key/value pair: key=value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                self.sections
                    .entry(current_section.clone())
                    .or_default()
                    .insert(key.to_string(), value.trim().to_string());
            }
        }
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    pub fn get_section(&self, section: &str) -> Option<&FxHashMap<String, String>> {
        self.sections.get(section)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn as_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Off => log::LevelFilter::Off,
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

/// A value with one variant for the focused row and one for the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant<T> {
    pub inactive: T,
    pub active: T,
}

impl<T> Variant<T> {
    #[inline(always)]
    pub const fn pick(&self, focused: bool) -> &T {
        if focused { &self.active } else { &self.inactive }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTextures {
    pub unchecked: String,
    pub checked: String,
}

#[derive(Debug, Clone)]
pub struct HeaderConfig {
    pub height: f32,
    pub color: Rgba,
    pub title_font: u8,
    pub title_size: f32,
}

#[derive(Debug, Clone)]
pub struct SubtitleConfig {
    pub text_size: f32,
    pub color: Rgba,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct ButtonConfig {
    pub text_size: f32,
    pub height: f32,
    pub color: Variant<Rgba>,
}

#[derive(Debug, Clone)]
pub struct CheckboxConfig {
    pub textures: Variant<CheckTextures>,
    pub size: Size,
}

#[derive(Debug, Clone)]
pub struct ListConfig {
    pub tint: Variant<Rgba>,
    pub left_texture: String,
    pub right_texture: String,
    pub size: Size,
}

#[derive(Debug, Clone)]
pub struct DescriptionConfig {
    pub mini_bar_height: f32,
    pub mini_bar_alpha: u8,
    pub height: f32,
    pub alpha: u8,
    pub text_size: f32,
    pub text_color: Rgba,
}

/// Process-wide menu configuration. Read-only once a menu context holds it.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: LogLevel,
    pub enable_sounds: bool,
    pub texture_dict: String,
    pub glare_overlay: String,
    pub font_index: u8,
    pub font_color: Variant<Rgba>,
    pub anchor: Point,
    pub width: f32,
    pub header: HeaderConfig,
    pub subtitle: SubtitleConfig,
    pub button: ButtonConfig,
    pub checkbox: CheckboxConfig,
    pub list: ListConfig,
    pub description: DescriptionConfig,
    pub controls: Keymap,
    pub sounds: SoundTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            enable_sounds: false,
            texture_dict: "commonmenu".to_owned(),
            glare_overlay: "MP_MENU_GLARE".to_owned(),
            font_index: 0,
            font_color: Variant {
                inactive: [245, 245, 245, 235],
                active: [10, 10, 10, 250],
            },
            anchor: Point::new(0.15, 0.135),
            width: 0.210,
            header: HeaderConfig {
                height: 0.095,
                color: [38, 92, 180, 245],
                title_font: 1,
                title_size: 0.70,
            },
            subtitle: SubtitleConfig {
                text_size: 0.25,
                color: [26, 26, 26, 245],
                height: 0.025,
            },
            button: ButtonConfig {
                text_size: 0.265,
                height: 0.0295,
                color: Variant {
                    inactive: [26, 26, 26, 195],
                    active: [250, 250, 250, 245],
                },
            },
            checkbox: CheckboxConfig {
                textures: Variant {
                    inactive: CheckTextures {
                        unchecked: "shop_box_blank".to_owned(),
                        checked: "shop_box_tick".to_owned(),
                    },
                    active: CheckTextures {
                        unchecked: "shop_box_blankb".to_owned(),
                        checked: "shop_box_tickb".to_owned(),
                    },
                },
                size: Size::new(0.02, 0.03),
            },
            list: ListConfig {
                tint: Variant {
                    inactive: [250, 250, 250, 245],
                    active: [10, 10, 10, 245],
                },
                left_texture: "arrowleft".to_owned(),
                right_texture: "arrowright".to_owned(),
                size: Size::new(0.01, 0.02),
            },
            description: DescriptionConfig {
                mini_bar_height: 0.002,
                mini_bar_alpha: 210,
                height: 0.025,
                alpha: 245,
                text_size: 0.22,
                text_color: [235, 235, 235, 140],
            },
            controls: Keymap::default(),
            sounds: audio::default_sounds(),
        }
    }
}

// Global configuration instance, replaced wholesale by `load`.
static CONFIG: LazyLock<RwLock<Arc<Config>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Config::default())));

// --- Typed value readers: a bad value keeps the default and warns ---

struct Reader<'a> {
    conf: &'a SimpleIni,
}

impl Reader<'_> {
    fn value<T>(&self, section: &str, key: &str, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
        let raw = self.conf.get(section, key)?;
        let parsed = parse(raw);
        if parsed.is_none() {
            warn!("Ignoring invalid value '{raw}' for [{section}] {key}");
        }
        parsed
    }

    fn f32(&self, section: &str, key: &str, slot: &mut f32) {
        if let Some(v) = self.value(section, key, |s| s.parse::<f32>().ok().filter(|v| v.is_finite())) {
            *slot = v;
        }
    }

    fn u8(&self, section: &str, key: &str, slot: &mut u8) {
        if let Some(v) = self.value(section, key, |s| s.parse::<u8>().ok()) {
            *slot = v;
        }
    }

    fn flag(&self, section: &str, key: &str, slot: &mut bool) {
        if let Some(v) = self.value(section, key, parse_flag) {
            *slot = v;
        }
    }

    fn color(&self, section: &str, key: &str, slot: &mut Rgba) {
        if let Some(v) = self.value(section, key, color::parse_rgba) {
            *slot = v;
        }
    }

    fn string(&self, section: &str, key: &str, slot: &mut String) {
        if let Some(v) = self.value(section, key, |s| (!s.is_empty()).then(|| s.to_owned())) {
            *slot = v;
        }
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    if v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes") || v.eq_ignore_ascii_case("on") {
        Some(true)
    } else if v.eq_ignore_ascii_case("false")
        || v.eq_ignore_ascii_case("no")
        || v.eq_ignore_ascii_case("off")
    {
        Some(false)
    } else {
        v.parse::<u8>().ok().map(|n| n != 0)
    }
}

fn load_keymap_from_ini(conf: &SimpleIni, keymap: &mut Keymap) {
    let Some(section) = conf.get_section("Controls") else {
        return;
    };
    for (key, value) in section {
        let Some(action) = MenuAction::from_ini_key(key) else {
            warn!("Unknown menu action '{key}' in [Controls]");
            continue;
        };
        match input::parse_bindings(value) {
            Some(controls) => keymap.bind(action, &controls),
            None => warn!("Ignoring invalid control list '{value}' for {key}"),
        }
    }
}

fn load_sounds_from_ini(conf: &SimpleIni, sounds: &mut SoundTable) {
    let Some(section) = conf.get_section("Sounds") else {
        return;
    };
    for (key, value) in section {
        let cue = key.to_ascii_lowercase();
        if value.is_empty() {
            sounds.remove(&cue);
            continue;
        }
        match audio::parse_cue(value) {
            Some(parsed) => {
                sounds.insert(cue, parsed);
            }
            None => warn!("Ignoring invalid sound '{value}' for cue {key}"),
        }
    }
}

/// Builds a config from parsed ini data, using the default for every
/// missing or malformed key.
pub fn from_ini(conf: &SimpleIni) -> Config {
    let mut cfg = Config::default();
    let r = Reader { conf };

    if let Some(level) = r.value("Options", "LogLevel", |s| LogLevel::from_str(s).ok()) {
        cfg.log_level = level;
    }
    r.flag("Options", "EnableSounds", &mut cfg.enable_sounds);
    r.string("Options", "TextureDict", &mut cfg.texture_dict);
    r.string("Options", "GlareOverlay", &mut cfg.glare_overlay);

    r.f32("Layout", "X", &mut cfg.anchor.x);
    r.f32("Layout", "Y", &mut cfg.anchor.y);
    r.f32("Layout", "Width", &mut cfg.width);
    r.u8("Layout", "FontIndex", &mut cfg.font_index);
    r.color("Layout", "FontColor", &mut cfg.font_color.inactive);
    r.color("Layout", "FontColorActive", &mut cfg.font_color.active);

    r.f32("Header", "Height", &mut cfg.header.height);
    r.color("Header", "Color", &mut cfg.header.color);
    r.u8("Header", "TitleFont", &mut cfg.header.title_font);
    r.f32("Header", "TitleSize", &mut cfg.header.title_size);

    r.f32("Subtitle", "TextSize", &mut cfg.subtitle.text_size);
    r.color("Subtitle", "Color", &mut cfg.subtitle.color);
    r.f32("Subtitle", "Height", &mut cfg.subtitle.height);

    r.f32("Button", "TextSize", &mut cfg.button.text_size);
    r.f32("Button", "Height", &mut cfg.button.height);
    r.color("Button", "Color", &mut cfg.button.color.inactive);
    r.color("Button", "ColorActive", &mut cfg.button.color.active);

    let tex = &mut cfg.checkbox.textures;
    r.string("Checkbox", "Unchecked", &mut tex.inactive.unchecked);
    r.string("Checkbox", "Checked", &mut tex.inactive.checked);
    r.string("Checkbox", "UncheckedActive", &mut tex.active.unchecked);
    r.string("Checkbox", "CheckedActive", &mut tex.active.checked);
    r.f32("Checkbox", "Width", &mut cfg.checkbox.size.w);
    r.f32("Checkbox", "Height", &mut cfg.checkbox.size.h);

    r.color("List", "Tint", &mut cfg.list.tint.inactive);
    r.color("List", "TintActive", &mut cfg.list.tint.active);
    r.string("List", "LeftTexture", &mut cfg.list.left_texture);
    r.string("List", "RightTexture", &mut cfg.list.right_texture);
    r.f32("List", "Width", &mut cfg.list.size.w);
    r.f32("List", "Height", &mut cfg.list.size.h);

    let d = &mut cfg.description;
    r.f32("Description", "MiniBarHeight", &mut d.mini_bar_height);
    r.u8("Description", "MiniBarAlpha", &mut d.mini_bar_alpha);
    r.f32("Description", "Height", &mut d.height);
    r.u8("Description", "Alpha", &mut d.alpha);
    r.f32("Description", "TextSize", &mut d.text_size);
    r.color("Description", "TextColor", &mut d.text_color);

    load_keymap_from_ini(conf, &mut cfg.controls);
    load_sounds_from_ini(conf, &mut cfg.sounds);
    cfg
}

/// Reads `path`; a missing or unreadable file yields the defaults.
pub fn load_from<P: AsRef<Path>>(path: P) -> Config {
    let path = path.as_ref();
    if !path.exists() {
        info!("'{}' not found, using default menu configuration.", path.display());
        return Config::default();
    }

    let mut conf = SimpleIni::new();
    match conf.load(path) {
        Ok(()) => {
            info!("Loaded menu configuration from '{}'.", path.display());
            from_ini(&conf)
        }
        Err(e) => {
            warn!("Failed to read '{}': {e}; using defaults.", path.display());
            Config::default()
        }
    }
}

/// Loads [`CONFIG_PATH`] into the process-wide slot.
pub fn load() {
    install(load_from(CONFIG_PATH));
}

pub fn install(cfg: Config) {
    let cfg = Arc::new(cfg);
    match CONFIG.write() {
        Ok(mut slot) => *slot = cfg,
        Err(poisoned) => *poisoned.into_inner() = cfg,
    }
}

pub fn get() -> Arc<Config> {
    match CONFIG.read() {
        Ok(slot) => Arc::clone(&slot),
        Err(poisoned) => Arc::clone(&poisoned.into_inner()),
    }
}
