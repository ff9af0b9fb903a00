//! 关键帧采样
//!
//! 按任意权重从 BlendShape 的关键帧求出偏移帧。规则：
//!
//! 1. 顺序扫描关键帧，取第一个权重 >= 请求权重的帧；没有则取第 0 帧
//! 2. 第 0 帧：比例 = 请求权重 / 100（视为从零形状线性过渡）
//! 3. 其余：比例 = (请求权重 - 前一帧权重) / (当前帧权重 - 前一帧权重)
//! 4. 结果 = 选中帧的偏移 × 比例
//!
//! 超过最后一帧权重时会回落到第 0 帧并按 请求权重/100 缩放，
//! 这是既有行为，外推结果依赖于此。

use super::{BlendShape, DeltaFrame, FULL_WEIGHT};
use crate::{BlendShapeError, Result};

/// 采样 BlendShape 在指定权重下的偏移帧
pub fn sample(shape: &BlendShape, weight: f32) -> Result<DeltaFrame> {
    if shape.frames.is_empty() {
        return Err(BlendShapeError::EmptyTarget(shape.name.clone()));
    }

    let frame_index = find_frame_index(shape, weight);
    let ratio = apply_ratio(shape, frame_index, weight);
    if !ratio.is_finite() {
        log::warn!(
            "BlendShape '{}' 采样比例无效: 权重 {}，关键帧 {}，比例 {}",
            shape.name,
            weight,
            frame_index,
            ratio
        );
    }

    let mut delta = shape.frames[frame_index].delta.clone();
    delta.scale(ratio);
    Ok(delta)
}

/// 第一个权重 >= weight 的关键帧，没有时为 0
pub fn find_frame_index(shape: &BlendShape, weight: f32) -> usize {
    shape
        .frames
        .iter()
        .position(|f| f.weight >= weight)
        .unwrap_or(0)
}

/// 关键帧的适用比例
pub fn apply_ratio(shape: &BlendShape, frame_index: usize, weight: f32) -> f32 {
    if frame_index == 0 {
        return weight / FULL_WEIGHT;
    }
    // 权重有限时前一帧权重 < weight <= 当前帧权重，区间宽度为正
    let previous = shape.frames[frame_index - 1].weight;
    let current = shape.frames[frame_index].weight;
    (weight - previous) / (current - previous)
}
