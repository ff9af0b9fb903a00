//! BlendShape 变形数据
//!
//! - [`DeltaFrame`] 逐顶点的位置/法线/切线偏移，支持代数组合
//! - [`BlendShape`] 带关键帧的变形目标
//! - [`BlendShapeSet`] 网格上按顺序存储的变形目标集合
//! - [`sample`] 按任意权重从关键帧插值出偏移帧

mod delta;
mod manager;
pub mod sampler;

pub use delta::DeltaFrame;
pub use manager::BlendShapeSet;
pub use sampler::sample;

use crate::{BlendShapeError, Result};

/// 满权重（BlendShape 权重约定范围为 0 ~ 100）
pub const FULL_WEIGHT: f32 = 100.0;

/// BlendShape 关键帧
#[derive(Clone, Debug, PartialEq)]
pub struct BlendShapeFrame {
    pub weight: f32,
    pub delta: DeltaFrame,
}

impl BlendShapeFrame {
    pub fn new(weight: f32, delta: DeltaFrame) -> Self {
        Self { weight, delta }
    }
}

/// BlendShape 变形目标
#[derive(Clone, Debug, PartialEq)]
pub struct BlendShape {
    pub name: String,
    /// 关键帧，权重单调不减
    pub frames: Vec<BlendShapeFrame>,
}

impl BlendShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
        }
    }

    /// 获取关键帧数量
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// 获取关键帧权重
    pub fn frame_weight(&self, index: usize) -> Option<f32> {
        self.frames.get(index).map(|f| f.weight)
    }

    /// 追加关键帧，权重不得小于上一帧
    pub fn push_frame(&mut self, weight: f32, delta: DeltaFrame) -> Result<()> {
        if let Some(previous) = self.frames.last().map(|f| f.weight) {
            if weight < previous {
                return Err(BlendShapeError::NonMonotonicKeyframe {
                    name: self.name.clone(),
                    weight,
                    previous,
                });
            }
            if weight == previous {
                log::warn!("BlendShape '{}' 关键帧权重重复: {}", self.name, weight);
            }
        }
        self.frames.push(BlendShapeFrame::new(weight, delta));
        Ok(())
    }
}

/// 用户选择的 BlendShape 及其权重
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphSelection {
    pub index: usize,
    pub weight: f32,
}

impl MorphSelection {
    pub fn new(index: usize, weight: f32) -> Self {
        Self { index, weight }
    }

    /// 以满权重选择
    pub fn full(index: usize) -> Self {
        Self::new(index, FULL_WEIGHT)
    }
}
