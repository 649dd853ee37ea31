// Control panel row definitions and readout text.

use comet_core::{format_readout, toggle_label, ParamKey, Params, PANEL_CONTROLS};
use std::collections::HashSet;

#[test]
fn panel_rows_are_unique_and_exclude_hidden_params() {
    let keys: HashSet<ParamKey> = PANEL_CONTROLS.iter().map(|c| c.key).collect();
    assert_eq!(keys.len(), PANEL_CONTROLS.len());
    assert!(!keys.contains(&ParamKey::ParticleSpeedMin));
    assert!(!keys.contains(&ParamKey::ParticleSpeedMax));
    assert!(!keys.contains(&ParamKey::RespawnDelay));
    assert!(keys.contains(&ParamKey::HeadSpeed));
    assert!(keys.contains(&ParamKey::FadeOutStart));
}

#[test]
fn panel_rows_have_labels_and_usable_ranges() {
    for def in PANEL_CONTROLS {
        assert!(!def.label.is_empty());
        let b = def.bounds();
        assert!(b.min < b.max, "{}", def.label);
        // At least a handful of slider positions
        assert!((b.max - b.min) / b.step >= 5.0, "{}", def.label);
    }
}

#[test]
fn readout_uses_integers_for_whole_steps() {
    assert_eq!(format_readout(520.0, 10.0), "520");
    assert_eq!(format_readout(7.6, 1.0), "8");
    assert_eq!(format_readout(0.26, 0.01), "0.26");
    assert_eq!(format_readout(0.2, 0.05), "0.20");
}

#[test]
fn initial_readouts_match_defaults() {
    let params = Params::default();
    let texts: Vec<String> = PANEL_CONTROLS
        .iter()
        .map(|def| def.format_value(params.get(def.key)))
        .collect();
    assert_eq!(texts[0], "520");
    assert_eq!(texts[1], "2");
    assert_eq!(texts[3], "0.26");
    assert_eq!(texts[10], "0.40");
}

#[test]
fn toggle_label_reflects_collapsed_state() {
    assert_eq!(toggle_label(true), "Show controls");
    assert_eq!(toggle_label(false), "Hide controls");
}
