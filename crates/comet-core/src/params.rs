//! Tunable animation parameters.
//!
//! `Params` is read every frame by the comet and the particle tail, and written
//! by the control panel and by URL overrides. All writes go through
//! [`Params::apply_edit`] so that every min/max pair stays ordered and every
//! value stays inside its declared bounds.

use crate::constants::RANGE_PAIR_GAP;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub head_speed: f32,
    pub arc_height: f32,
    pub emission_rate: f32,
    pub tail_spread: f32,
    pub particle_life_min: f32,
    pub particle_life_max: f32,
    pub particle_speed_min: f32,
    pub particle_speed_max: f32,
    pub particle_radius_min: f32,
    pub particle_radius_max: f32,
    pub head_radius: f32,
    pub head_glow: f32,
    pub fade_out_start: f32,
    pub respawn_delay: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            head_speed: 520.0,
            arc_height: 0.26,
            emission_rate: 140.0,
            tail_spread: 0.6,
            particle_life_min: 0.20,
            particle_life_max: 0.75,
            particle_speed_min: 30.0,
            particle_speed_max: 110.0,
            particle_radius_min: 0.5,
            particle_radius_max: 1.5,
            head_radius: 2.0,
            head_glow: 8.0,
            fade_out_start: 0.4,
            respawn_delay: 0.8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    HeadSpeed,
    ArcHeight,
    EmissionRate,
    TailSpread,
    ParticleLifeMin,
    ParticleLifeMax,
    ParticleSpeedMin,
    ParticleSpeedMax,
    ParticleRadiusMin,
    ParticleRadiusMax,
    HeadRadius,
    HeadGlow,
    FadeOutStart,
    RespawnDelay,
}

/// Declared bounds and slider step of one parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Bounds {
    const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }
}

impl ParamKey {
    pub const ALL: [ParamKey; 14] = [
        ParamKey::HeadSpeed,
        ParamKey::ArcHeight,
        ParamKey::EmissionRate,
        ParamKey::TailSpread,
        ParamKey::ParticleLifeMin,
        ParamKey::ParticleLifeMax,
        ParamKey::ParticleSpeedMin,
        ParamKey::ParticleSpeedMax,
        ParamKey::ParticleRadiusMin,
        ParamKey::ParticleRadiusMax,
        ParamKey::HeadRadius,
        ParamKey::HeadGlow,
        ParamKey::FadeOutStart,
        ParamKey::RespawnDelay,
    ];

    /// camelCase name used by URL overrides.
    pub fn name(self) -> &'static str {
        match self {
            ParamKey::HeadSpeed => "headSpeed",
            ParamKey::ArcHeight => "arcHeight",
            ParamKey::EmissionRate => "emissionRate",
            ParamKey::TailSpread => "tailSpread",
            ParamKey::ParticleLifeMin => "particleLifeMin",
            ParamKey::ParticleLifeMax => "particleLifeMax",
            ParamKey::ParticleSpeedMin => "particleSpeedMin",
            ParamKey::ParticleSpeedMax => "particleSpeedMax",
            ParamKey::ParticleRadiusMin => "particleRadiusMin",
            ParamKey::ParticleRadiusMax => "particleRadiusMax",
            ParamKey::HeadRadius => "headRadius",
            ParamKey::HeadGlow => "headGlow",
            ParamKey::FadeOutStart => "fadeOutStart",
            ParamKey::RespawnDelay => "respawnDelay",
        }
    }

    pub fn bounds(self) -> Bounds {
        match self {
            ParamKey::HeadSpeed => Bounds::new(180.0, 620.0, 10.0),
            ParamKey::ArcHeight => Bounds::new(0.0, 0.5, 0.01),
            ParamKey::EmissionRate => Bounds::new(40.0, 520.0, 10.0),
            ParamKey::TailSpread => Bounds::new(0.1, 1.5, 0.05),
            ParamKey::ParticleLifeMin => Bounds::new(0.1, 1.5, 0.05),
            ParamKey::ParticleLifeMax => Bounds::new(0.2, 3.2, 0.05),
            ParamKey::ParticleSpeedMin => Bounds::new(0.0, 400.0, 5.0),
            ParamKey::ParticleSpeedMax => Bounds::new(0.0, 400.0, 5.0),
            ParamKey::ParticleRadiusMin => Bounds::new(0.1, 3.0, 0.05),
            ParamKey::ParticleRadiusMax => Bounds::new(0.5, 6.0, 0.05),
            ParamKey::HeadRadius => Bounds::new(1.0, 20.0, 1.0),
            ParamKey::HeadGlow => Bounds::new(1.0, 20.0, 1.0),
            ParamKey::FadeOutStart => Bounds::new(0.4, 0.95, 0.01),
            ParamKey::RespawnDelay => Bounds::new(0.0, 10.0, 0.1),
        }
    }

    /// The other half of a min/max pair, with `true` when `self` is the min side.
    fn pair(self) -> Option<(ParamKey, bool)> {
        match self {
            ParamKey::ParticleLifeMin => Some((ParamKey::ParticleLifeMax, true)),
            ParamKey::ParticleLifeMax => Some((ParamKey::ParticleLifeMin, false)),
            ParamKey::ParticleSpeedMin => Some((ParamKey::ParticleSpeedMax, true)),
            ParamKey::ParticleSpeedMax => Some((ParamKey::ParticleSpeedMin, false)),
            ParamKey::ParticleRadiusMin => Some((ParamKey::ParticleRadiusMax, true)),
            ParamKey::ParticleRadiusMax => Some((ParamKey::ParticleRadiusMin, false)),
            _ => None,
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamKey {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamKey::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| ParamError::UnknownKey(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("unknown parameter `{0}`")]
    UnknownKey(String),
    #[error("parameter `{0}` has no value")]
    MissingValue(String),
    #[error("parameter `{key}` has a non-numeric value `{value}`")]
    InvalidValue { key: String, value: String },
}

impl Params {
    pub fn get(&self, key: ParamKey) -> f32 {
        match key {
            ParamKey::HeadSpeed => self.head_speed,
            ParamKey::ArcHeight => self.arc_height,
            ParamKey::EmissionRate => self.emission_rate,
            ParamKey::TailSpread => self.tail_spread,
            ParamKey::ParticleLifeMin => self.particle_life_min,
            ParamKey::ParticleLifeMax => self.particle_life_max,
            ParamKey::ParticleSpeedMin => self.particle_speed_min,
            ParamKey::ParticleSpeedMax => self.particle_speed_max,
            ParamKey::ParticleRadiusMin => self.particle_radius_min,
            ParamKey::ParticleRadiusMax => self.particle_radius_max,
            ParamKey::HeadRadius => self.head_radius,
            ParamKey::HeadGlow => self.head_glow,
            ParamKey::FadeOutStart => self.fade_out_start,
            ParamKey::RespawnDelay => self.respawn_delay,
        }
    }

    fn slot(&mut self, key: ParamKey) -> &mut f32 {
        match key {
            ParamKey::HeadSpeed => &mut self.head_speed,
            ParamKey::ArcHeight => &mut self.arc_height,
            ParamKey::EmissionRate => &mut self.emission_rate,
            ParamKey::TailSpread => &mut self.tail_spread,
            ParamKey::ParticleLifeMin => &mut self.particle_life_min,
            ParamKey::ParticleLifeMax => &mut self.particle_life_max,
            ParamKey::ParticleSpeedMin => &mut self.particle_speed_min,
            ParamKey::ParticleSpeedMax => &mut self.particle_speed_max,
            ParamKey::ParticleRadiusMin => &mut self.particle_radius_min,
            ParamKey::ParticleRadiusMax => &mut self.particle_radius_max,
            ParamKey::HeadRadius => &mut self.head_radius,
            ParamKey::HeadGlow => &mut self.head_glow,
            ParamKey::FadeOutStart => &mut self.fade_out_start,
            ParamKey::RespawnDelay => &mut self.respawn_delay,
        }
    }

    /// Store a user-supplied value and return what was actually stored.
    ///
    /// The min side of a pair is capped just below the current max and the max
    /// side floored just above the current min, then the result is clamped to
    /// the key's bounds. A NaN input leaves the parameter unchanged.
    pub fn apply_edit(&mut self, key: ParamKey, raw: f32) -> f32 {
        if raw.is_nan() {
            return self.get(key);
        }
        let mut value = raw;
        if let Some((other, is_min)) = key.pair() {
            let other_val = self.get(other);
            value = if is_min {
                value.min(other_val - RANGE_PAIR_GAP)
            } else {
                value.max(other_val + RANGE_PAIR_GAP)
            };
        }
        let value = key.bounds().clamp(value);
        *self.slot(key) = value;
        value
    }

    /// Apply `key=value` pairs from a URL query string (leading `?` optional).
    ///
    /// Valid pairs are applied in order through [`Params::apply_edit`]; every
    /// rejected pair is returned and leaves the params untouched.
    pub fn apply_query(&mut self, query: &str) -> Vec<ParamError> {
        let mut errors = Vec::new();
        for parsed in parse_query(query) {
            match parsed {
                Ok((key, value)) => {
                    let stored = self.apply_edit(key, value);
                    log::debug!("[params] override {}={} (stored {})", key, value, stored);
                }
                Err(e) => errors.push(e),
            }
        }
        errors
    }
}

/// Parse a query string into parameter assignments without applying them.
pub fn parse_query(query: &str) -> Vec<Result<(ParamKey, f32), ParamError>> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(parse_pair)
        .collect()
}

fn parse_pair(pair: &str) -> Result<(ParamKey, f32), ParamError> {
    let (name, value) = match pair.split_once('=') {
        Some((n, v)) => (n, v),
        None => return Err(ParamError::MissingValue(pair.to_string())),
    };
    let key: ParamKey = name.parse()?;
    if value.is_empty() {
        return Err(ParamError::MissingValue(name.to_string()));
    }
    let parsed = value
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParamError::InvalidValue {
            key: name.to_string(),
            value: value.to_string(),
        })?;
    Ok((key, parsed))
}
