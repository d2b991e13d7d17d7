use crate::config::Config;
use crate::core::host::Host;
use log::trace;
use rustc_hash::FxHashMap;

pub const CUE_OPEN: &str = "open";
pub const CUE_NAVIGATE: &str = "navigate";
pub const CUE_SELECT: &str = "select";
pub const CUE_LIST: &str = "list";
pub const CUE_CLOSE: &str = "close";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoundCue {
    pub bank: String,
    pub sound: String,
    pub looped: bool,
}

pub type SoundTable = FxHashMap<String, SoundCue>;

pub fn default_sounds() -> SoundTable {
    let mut table = SoundTable::default();
    table.insert(
        CUE_OPEN.to_owned(),
        SoundCue {
            bank: "GTAO_FM_Events_Soundset".to_owned(),
            sound: "OOB_Start".to_owned(),
            looped: false,
        },
    );
    table
}

/// `bank,sound[,loop]`, loop being `0`/`1`.
pub fn parse_cue(value: &str) -> Option<SoundCue> {
    let mut parts = value.split(',').map(str::trim);
    let bank = parts.next().filter(|s| !s.is_empty())?;
    let sound = parts.next().filter(|s| !s.is_empty())?;
    let looped = match parts.next() {
        None | Some("0") => false,
        Some("1") => true,
        Some(_) => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(SoundCue {
        bank: bank.to_owned(),
        sound: sound.to_owned(),
        looped,
    })
}

/// Best-effort: silently skipped when sounds are off or the cue is unmapped.
pub fn play_cue(host: &mut dyn Host, config: &Config, cue: &str) {
    if !config.enable_sounds {
        return;
    }
    match config.sounds.get(cue) {
        Some(s) => host.play_sound(&s.bank, &s.sound, s.looped),
        None => trace!("No sound mapped for cue '{cue}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::{CUE_NAVIGATE, CUE_OPEN, parse_cue, play_cue};
    use crate::config::Config;
    use crate::core::host::{HeadlessHost, HostCall};

    #[test]
    fn cues_parse() {
        let cue = parse_cue("HUD_FRONTEND_DEFAULT_SOUNDSET, NAV_UP_DOWN, 1").expect("valid cue");
        assert_eq!(cue.bank, "HUD_FRONTEND_DEFAULT_SOUNDSET");
        assert_eq!(cue.sound, "NAV_UP_DOWN");
        assert!(cue.looped);
        assert!(parse_cue("bank,sound").is_some_and(|c| !c.looped));
        assert!(parse_cue("bank").is_none());
        assert!(parse_cue("bank,sound,yes").is_none());
        assert!(parse_cue("a,b,0,extra").is_none());
    }

    #[test]
    fn disabled_sounds_stay_silent() {
        let mut host = HeadlessHost::new();
        let config = Config::default();
        assert!(!config.enable_sounds);
        play_cue(&mut host, &config, CUE_OPEN);
        assert!(host.calls().is_empty());
    }

    #[test]
    fn enabled_sounds_play_mapped_cues_only() {
        let mut host = HeadlessHost::new();
        let config = Config {
            enable_sounds: true,
            ..Config::default()
        };
        play_cue(&mut host, &config, CUE_NAVIGATE);
        assert!(host.calls().is_empty(), "navigate is unmapped by default");
        play_cue(&mut host, &config, CUE_OPEN);
        assert_eq!(
            host.calls(),
            &[HostCall::Sound {
                bank: "GTAO_FM_Events_Soundset".to_owned(),
                sound: "OOB_Start".to_owned(),
                looped: false,
            }]
        );
    }
}
