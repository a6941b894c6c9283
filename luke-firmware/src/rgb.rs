use luke_common::layers;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}
impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Hue and saturation of a palette entry; the value channel comes from the brightness setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub h: u8,
    pub s: u8,
}
impl Color {
    pub const fn with_value(self, v: u8) -> Hsv {
        Hsv::new(self.h, self.s, v)
    }
}

pub const WHITE: Color = Color { h: 0, s: 0 };
pub const RED: Color = Color { h: 0, s: 255 };
pub const GREEN: Color = Color { h: 85, s: 255 };
pub const BLUE: Color = Color { h: 170, s: 255 };
pub const PURPLE: Color = Color { h: 191, s: 255 };

/// Indicator colour for the highest active layer. Layers without an entry keep whatever colour
/// is currently shown.
pub const fn layer_color(layer: u8) -> Option<Color> {
    match layer {
        layers::DFLT => Some(WHITE),
        layers::GAME => Some(RED),
        layers::NAV => Some(BLUE),
        layers::NUM => Some(PURPLE),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RgbMode {
    Off = 0,
    #[default]
    SolidColor = 1,
    Breathing = 2,
    CycleAll = 3,
}
impl RgbMode {
    pub fn from_u8(n: u8) -> Option<Self> {
        Some(match n {
            0 => Self::Off,
            1 => Self::SolidColor,
            2 => Self::Breathing,
            3 => Self::CycleAll,
            _ => return None,
        })
    }
}

/// The driver settings that survive a power cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbConfig {
    pub enable: bool,
    pub mode: RgbMode,
    pub hsv: Hsv,
    pub speed: u8,
}

impl Default for RgbConfig {
    fn default() -> Self {
        Self {
            enable: true,
            mode: RgbMode::SolidColor,
            hsv: WHITE.with_value(luke_common::globals::DEFAULT_BRIGHTNESS),
            speed: 128,
        }
    }
}

impl RgbConfig {
    pub const SERIALIZED_LEN: usize = 6;

    pub fn to_bytes(&self) -> [u8; Self::SERIALIZED_LEN] {
        [
            self.enable as u8,
            self.mode as u8,
            self.hsv.h,
            self.hsv.s,
            self.hsv.v,
            self.speed,
        ]
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let bytes: &[u8; Self::SERIALIZED_LEN] = bytes.get(..Self::SERIALIZED_LEN)?.try_into().ok()?;
        Some(Self {
            enable: match bytes[0] {
                0 => false,
                1 => true,
                _ => return None,
            },
            mode: RgbMode::from_u8(bytes[1])?,
            hsv: Hsv::new(bytes[2], bytes[3], bytes[4]),
            speed: bytes[5],
        })
    }
}

/// The RGB matrix driver owned by the host runtime. The `_noeeprom` calls change the live state
/// only; persisting is done through [crate::config_store::ConfigStore].
pub trait RgbMatrix {
    fn enable_noeeprom(&mut self);
    fn mode_noeeprom(&mut self, mode: RgbMode);
    fn sethsv_noeeprom(&mut self, hsv: Hsv);
    /// Current brightness (the value channel).
    fn val(&self) -> u8;
    /// Snapshot of the live configuration.
    fn config(&self) -> RgbConfig;
    /// Replace the live configuration, e.g. with one read from storage.
    fn load_config(&mut self, config: RgbConfig);
}

#[cfg(test)]
#[path = "rgb_test.rs"]
mod test;
