use crate::constants::*;
use thiserror::Error;

/// Rejected tuning values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("damping must lie in [0, 1), got {0}")]
    Damping(f32),
    #[error("rest depth {rest} must lie below max depth {max}")]
    DepthRange { rest: f32, max: f32 },
}

/// Tuning for one grid simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct GridParams {
    pub spacing: f32,
    pub influence_radius: f32,
    pub push_gain: f32,
    pub spring_gain: f32,
    pub damping: f32,
    pub max_depth_offset: f32,
    pub rest_depth_offset: f32,
    pub home_epsilon: f32,
    pub bounce_window: f32,
    pub bounce_min_speed: f32,
    pub bounce_factor: f32,
    pub saturation: f32,
    pub base_lightness: f32,
    pub lightness_span: f32,
    pub initial_size: f32,
    pub size_floor: f32,
    pub size_scale: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            spacing: GRID_SPACING,
            influence_radius: INFLUENCE_RADIUS,
            push_gain: PUSH_GAIN,
            spring_gain: SPRING_GAIN,
            damping: DAMPING,
            max_depth_offset: MAX_DEPTH_OFFSET,
            rest_depth_offset: REST_DEPTH_OFFSET,
            home_epsilon: HOME_EPSILON,
            bounce_window: BOUNCE_WINDOW,
            bounce_min_speed: BOUNCE_MIN_SPEED,
            bounce_factor: BOUNCE_FACTOR,
            saturation: SATURATION,
            base_lightness: BASE_LIGHTNESS,
            lightness_span: LIGHTNESS_SPAN,
            initial_size: INITIAL_SIZE,
            size_floor: SIZE_FLOOR,
            size_scale: SIZE_SCALE,
        }
    }
}

impl GridParams {
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_influence_radius(mut self, radius: f32) -> Self {
        self.influence_radius = radius;
        self
    }

    /// Smallest radius a point can be drawn with.
    #[inline]
    pub fn min_size(&self) -> f32 {
        self.size_floor * self.size_scale
    }

    #[inline]
    pub fn max_lightness(&self) -> f32 {
        self.base_lightness + self.lightness_span
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        let all = [
            ("spacing", self.spacing),
            ("influence_radius", self.influence_radius),
            ("push_gain", self.push_gain),
            ("spring_gain", self.spring_gain),
            ("damping", self.damping),
            ("max_depth_offset", self.max_depth_offset),
            ("rest_depth_offset", self.rest_depth_offset),
            ("home_epsilon", self.home_epsilon),
            ("bounce_window", self.bounce_window),
            ("bounce_min_speed", self.bounce_min_speed),
            ("bounce_factor", self.bounce_factor),
            ("saturation", self.saturation),
            ("base_lightness", self.base_lightness),
            ("lightness_span", self.lightness_span),
            ("initial_size", self.initial_size),
            ("size_floor", self.size_floor),
            ("size_scale", self.size_scale),
        ];
        if let Some(&(name, value)) = all.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ParamsError::NotFinite { name, value });
        }
        let positive = [
            ("spacing", self.spacing),
            ("influence_radius", self.influence_radius),
            ("max_depth_offset", self.max_depth_offset),
            ("size_floor", self.size_floor),
            ("size_scale", self.size_scale),
        ];
        if let Some(&(name, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ParamsError::NotPositive { name, value });
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(ParamsError::Damping(self.damping));
        }
        if self.rest_depth_offset >= self.max_depth_offset {
            return Err(ParamsError::DepthRange {
                rest: self.rest_depth_offset,
                max: self.max_depth_offset,
            });
        }
        Ok(())
    }
}
