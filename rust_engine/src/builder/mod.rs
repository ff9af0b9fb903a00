//! 网格重建管线
//!
//! 执行顺序固定：
//!
//! 1. Clone —— 复制源网格静态数据，不含 BlendShape
//! 2. Bake（可选）—— 所有偏移帧求和后加到基础形状上
//! 3. CopyExisting —— 按 [`CopyStrategy`] 复制已有 BlendShape，只执行一次
//! 4. ApplyPasses —— 按注册顺序执行 [`FramePass`]
//! 5. Output —— `build` 消耗构建器并返回新网格

mod pass;
mod pipeline;

pub use pipeline::MeshBuilder;

use glam::Vec3;

use crate::mesh::ReorderEntry;

/// 偏移帧应用方式
#[derive(Clone, Debug, PartialEq)]
pub enum FramePass {
    /// 全部帧求和，写为权重 100 的单帧
    Blend { name: String },
    /// 求和后取反
    BlendInverse { name: String },
    /// 每帧单独写入，权重依次为 100·(i+1)/N
    Connect { name: String },
    /// 累加和依次写入，权重同 Connect
    BlendThenConnect { name: String },
    /// 求和后乘以逐顶点遮罩
    MaskedApply { name: String, mask: VertexMask },
}

impl FramePass {
    /// 输出的 BlendShape 名称
    pub fn name(&self) -> &str {
        match self {
            FramePass::Blend { name }
            | FramePass::BlendInverse { name }
            | FramePass::Connect { name }
            | FramePass::BlendThenConnect { name }
            | FramePass::MaskedApply { name, .. } => name,
        }
    }
}

/// 逐顶点遮罩，由输出网格当前顶点位置求出
#[derive(Clone, Debug, PartialEq)]
pub enum VertexMask {
    /// 左半边：x <= -range 为 1，x >= range 为 0
    Left { smooth_range: f32 },
    /// 右半边：与 Left 镜像
    Right { smooth_range: f32 },
    /// 直接给定的权重
    PerVertex(Vec<f32>),
}

impl VertexMask {
    pub fn evaluate(&self, positions: &[Vec3]) -> Vec<f32> {
        match self {
            VertexMask::Left { smooth_range } => positions
                .iter()
                .map(|p| inverse_lerp(*smooth_range, -*smooth_range, p.x))
                .collect(),
            VertexMask::Right { smooth_range } => positions
                .iter()
                .map(|p| inverse_lerp(-*smooth_range, *smooth_range, p.x))
                .collect(),
            VertexMask::PerVertex(weights) => weights.clone(),
        }
    }
}

/// value 在 [a, b] 中的位置，截断到 [0, 1]；a == b 时为 0
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

/// 按索引或名称排除 BlendShape
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TargetFilter {
    pub exclude_names: Vec<String>,
    pub exclude_indices: Vec<usize>,
}

impl TargetFilter {
    pub fn exclude_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclude_names: names.into_iter().map(Into::into).collect(),
            exclude_indices: Vec::new(),
        }
    }

    pub fn accepts(&self, index: usize, name: &str) -> bool {
        !self.exclude_indices.contains(&index) && !self.exclude_names.iter().any(|n| n == name)
    }
}

/// 已有 BlendShape 的复制方式
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CopyStrategy {
    /// 原样复制全部
    #[default]
    All,
    /// 跳过被过滤的目标
    Filtered(TargetFilter),
    /// 按条目顺序复制并重命名
    Reordered(Vec<ReorderEntry>),
}
