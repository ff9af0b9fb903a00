//! BlendShape Engine - 网格变形目标编辑核心
//!
//! 提供与 BlendShapeEditor 编辑器等价的网格处理功能：
//! - 形变偏移帧代数（合成、反转、遮罩、插值）
//! - 关键帧按任意权重采样
//! - 网格快照复制，BlendShape 的复制/过滤/重排/重命名
//! - 网格重建管线（烘焙到基础形状、合成、动画、左右分割）
//!
//! 核心不做任何 I/O；保存网格、界面与名称校验由宿主负责。

pub mod builder;
pub mod editor;
pub mod mesh;
pub mod morph;

pub use builder::{CopyStrategy, FramePass, MeshBuilder, TargetFilter, VertexMask};
pub use editor::{
    run_operation, run_operation_with, BlendShapeOperation, EditorConfig, ShapeWeights,
};
pub use mesh::{Mesh, ReorderEntry, SubMesh};
pub use morph::{BlendShape, BlendShapeFrame, BlendShapeSet, DeltaFrame, MorphSelection};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlendShapeError {
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Frame list is empty")]
    EmptyFrameList,

    #[error("BlendShape index {index} out of range (count {count})")]
    TargetIndexOutOfRange { index: usize, count: usize },

    #[error("Vertex index {index} out of range (vertex count {count})")]
    VertexIndexOutOfRange { index: usize, count: usize },

    #[error("BlendShape '{0}' has no keyframes")]
    EmptyTarget(String),

    #[error("Keyframe weight {weight} on '{name}' is below previous weight {previous}")]
    NonMonotonicKeyframe {
        name: String,
        weight: f32,
        previous: f32,
    },

    #[error("Invalid BlendShape name: '{0}'")]
    InvalidName(String),

    #[error("Duplicate BlendShape name: '{0}'")]
    DuplicateName(String),
}

pub type Result<T> = std::result::Result<T, BlendShapeError>;
