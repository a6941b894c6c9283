use luke_common::layers::*;

use super::*;

#[test]
fn palette_by_layer() {
    assert_eq!(layer_color(DFLT), Some(WHITE));
    assert_eq!(layer_color(GAME), Some(RED));
    assert_eq!(layer_color(NAV), Some(BLUE));
    assert_eq!(layer_color(NUM), Some(PURPLE));
    assert_eq!(layer_color(SYS), None);
    assert_eq!(layer_color(CFG), None);
    assert_eq!(layer_color(31), None);
}

#[test]
fn palette_values() {
    assert_eq!(BLUE.with_value(90), Hsv::new(170, 255, 90));
    assert_eq!(PURPLE.with_value(0), Hsv::new(191, 255, 0));
    assert_eq!(WHITE.with_value(255), Hsv::new(0, 0, 255));
    assert_eq!(GREEN, Color { h: 85, s: 255 });
}

#[test]
fn config_bytes() {
    let config = RgbConfig {
        enable: true,
        mode: RgbMode::Breathing,
        hsv: Hsv::new(10, 20, 30),
        speed: 40,
    };
    let bytes = config.to_bytes();
    assert_eq!(bytes, [1, 2, 10, 20, 30, 40]);
    assert_eq!(RgbConfig::from_bytes(&bytes), Some(config));
}

#[test]
fn config_bytes_rejects_garbage() {
    assert_eq!(RgbConfig::from_bytes(&[1, 1, 0, 0]), None);
    assert_eq!(RgbConfig::from_bytes(&[2, 1, 0, 0, 0, 0]), None);
    assert_eq!(RgbConfig::from_bytes(&[1, 9, 0, 0, 0, 0]), None);
    assert_eq!(RgbConfig::from_bytes(&[0xff; 8]), None);
}

#[test]
fn default_config() {
    let config = RgbConfig::default();
    assert!(config.enable);
    assert_eq!(config.mode, RgbMode::SolidColor);
    assert_eq!(config.hsv.v, 64);
}
