use super::*;

fn at(row: u8, col: u8) -> KeyPos {
    KeyPos::new(row, col)
}

#[test]
fn keymap_shape() {
    assert_eq!(IrisCe.layer_count(), 6);
    assert_eq!(KEYMAP.rows(), 10);
    assert_eq!(KEYMAP.columns(), 6);
    assert_eq!(IrisCe::NAME, "iris_ce");
}

#[test]
fn default_layer() {
    let b = IrisCe;
    assert_eq!(b.keycode_at(DFLT, at(0, 0)), QK_GESC);
    assert_eq!(b.keycode_at(DFLT, at(0, 5)), KC_5);
    assert_eq!(b.keycode_at(DFLT, at(3, 1)), BRM_Z);
    assert_eq!(b.keycode_at(DFLT, at(4, 5)), mo(SYS));
    assert_eq!(b.keycode_at(DFLT, at(4, 2)), KC_ESC);
    assert_eq!(b.keycode_at(DFLT, at(4, 3)), MT_TAB);
    assert_eq!(b.keycode_at(DFLT, at(4, 4)), NAV_BS);

    assert_eq!(b.keycode_at(DFLT, at(5, 5)), KC_6);
    assert_eq!(b.keycode_at(DFLT, at(5, 0)), KC_TRNS);
    assert_eq!(b.keycode_at(DFLT, at(8, 0)), KC_ENT);
    assert_eq!(b.keycode_at(DFLT, at(8, 3)), BRM_COMM);
    assert_eq!(b.keycode_at(DFLT, at(9, 5)), mo(CFG));
    assert_eq!(b.keycode_at(DFLT, at(9, 4)), NAV_SPC);
    assert_eq!(b.keycode_at(DFLT, at(9, 3)), NUM_ENT);
    assert_eq!(b.keycode_at(DFLT, at(9, 2)), KC_LALT);
}

#[test]
fn layers_resolve_through_transparent() {
    let b = IrisCe;
    let mut state = LayerState::with(DFLT);
    state.on(GAME);
    assert_eq!(b.resolve(state, at(1, 1)), KC_I);
    assert_eq!(b.resolve(state, at(0, 0)), QK_GESC);
    assert_eq!(b.resolve(state, at(4, 3)), mo(NAV));
    assert_eq!(b.resolve(state, at(6, 5)), KC_J);

    let sys = LayerState::with(SYS);
    assert_eq!(b.resolve(sys, at(1, 1)), LSG_S);
    assert_eq!(b.resolve(sys, at(6, 5)), RGB_VAI);
    assert_eq!(b.resolve(sys, at(7, 5)), RGB_VAD);
    assert_eq!(b.resolve(sys, at(4, 2)), QK_BOOT);
    assert_eq!(b.resolve(sys, at(9, 2)), QK_BOOT);

    let cfg = LayerState::with(CFG);
    assert_eq!(b.resolve(cfg, at(0, 1)), to(DFLT));
    assert_eq!(b.resolve(cfg, at(0, 2)), to(GAME));
    assert_eq!(b.resolve(cfg, at(0, 3)), KC_3);
}

#[test]
fn tapping_term() {
    let b = IrisCe;
    for kc in [BRM_COMM, BRM_DOT, BRM_SLSH] {
        assert_eq!(b.tapping_term(kc), 300, "{}", name(tap_keycode(kc)));
    }
    for kc in [BRM_Z, BRM_X, BRM_C] {
        assert_eq!(b.tapping_term(kc), 400, "{}", name(tap_keycode(kc)));
    }
    assert_eq!(b.tapping_term(MT_TAB), 200);
    assert_eq!(b.tapping_term(KC_A), 200);
}

#[test]
fn quick_tap_term() {
    let b = IrisCe;
    assert_eq!(b.quick_tap_term(MT_TAB), 200);
    assert_eq!(b.quick_tap_term(NAV_SPC), 200);
    assert_eq!(b.quick_tap_term(NAV_BS), 200);
    assert_eq!(b.quick_tap_term(BRM_X), 300);
    assert_eq!(b.quick_tap_term(BRM_COMM), 0);
    assert_eq!(b.quick_tap_term(NUM_ENT), 0);
}

#[test]
fn flow_tap_disabled() {
    assert_eq!(IrisCe.flow_tap_term(BRM_Z, KC_A), 0);
    assert_eq!(IrisCe.config().flow_tap_term, None);
}

#[test]
fn hold_preferences() {
    let b = IrisCe;
    assert!(b.hold_on_other_key_press(MT_TAB));
    assert!(!b.hold_on_other_key_press(NAV_SPC));

    for kc in [MT_TAB, NAV_SPC, NAV_BS] {
        assert!(b.permissive_hold(kc));
    }
    assert!(!b.permissive_hold(BRM_Z));

    for kc in [BRM_Z, BRM_X, BRM_C, BRM_COMM, BRM_DOT, BRM_SLSH] {
        assert!(b.retro_tapping(kc));
    }
    assert!(!b.retro_tapping(MT_TAB));
}

#[test]
fn auto_shift() {
    let b = IrisCe;
    for kc in [KC_GRV, KC_MINS, KC_EQL, KC_BSLS, KC_SCLN] {
        assert!(b.auto_shifted_key(kc, NAV), "{}", name(kc));
        assert!(!b.auto_shifted_key(kc, DFLT));
    }
    assert!(!b.auto_shifted_key(KC_LBRC, NAV));

    for kc in [KC_1, KC_5, KC_9, KC_0] {
        assert!(b.auto_shifted_key(kc, NUM), "{}", name(kc));
        assert!(!b.auto_shifted_key(kc, NAV));
    }
    assert!(!b.auto_shifted_key(KC_F1, NUM));
    assert!(!b.auto_shifted_key(KC_1, GAME));
}

#[test]
fn config() {
    let c = IrisCe.config();
    assert_eq!(c.tapping_term, 200);
    assert_eq!(c.led_count, 68);
    assert!(c.auto_shift_per_key && c.hold_on_other_key_press_per_key);
    assert_eq!(c.bootmagic_left, at(0, 0));
    assert_eq!(c.bootmagic_right, at(5, 0));
}
