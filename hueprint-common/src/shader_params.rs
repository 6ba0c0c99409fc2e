//! Shader parameter output record
//!
//! One field per fragment-shader uniform. The record knows nothing about
//! uniform names or GL state; the renderer binds it.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::weights::Weights;

/// Number of extra-color slots the shader reads
pub const EXTRA_COLOR_LIMIT: usize = 21;

/// Final shader parameters produced by the mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShaderParams {
    pub seed: f64,
    pub noise_scale: f64,
    pub warp: f64,
    pub speed: f64,
    pub contrast: f64,
    pub hue_shift: f64,
    pub grain: f64,
    pub palette_a: Rgb,
    pub palette_b: Rgb,
    pub palette_c: Rgb,
    /// One color per perspective selection, in input order. Not truncated;
    /// the shader reads only the first `extra_count`.
    pub extra_colors: Vec<Rgb>,
    /// `min(extra_colors.len(), EXTRA_COLOR_LIMIT)`
    pub extra_count: usize,
    /// Sums to 1
    pub texture_weights: Weights,
    pub texture_scale: f64,
    /// Sums to 1
    pub motion_weights: Weights,
}
