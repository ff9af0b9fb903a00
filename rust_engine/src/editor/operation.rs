//! 编辑操作：把用户命令翻译成构建管线配置

use super::config::{get_config, EditorConfig};
use crate::builder::{CopyStrategy, FramePass, MeshBuilder, TargetFilter, VertexMask};
use crate::mesh::{Mesh, ReorderEntry};
use crate::morph::{sample, MorphSelection, FULL_WEIGHT};
use crate::Result;

/// BlendShape 编辑操作
#[derive(Clone, Debug, PartialEq)]
pub enum BlendShapeOperation {
    /// 排序、重命名、删除（未列出的目标被删除）
    Sort { entries: Vec<ReorderEntry> },
    /// 合成所选 BlendShape
    Blend { name: String },
    /// 合成后反转
    Inverse { name: String },
    /// 所选 BlendShape 依次作为关键帧，制作动画
    Connect { name: String },
    /// 累积合成并制作动画
    BlendConnect { name: String },
    /// 把合成结果应用到基础网格，并追加还原用的反向 BlendShape
    ApplyToBase { name: String },
    /// 左右分割为 <名称>_L 与 <名称>_R，未指定平滑半径时使用配置值
    Separate {
        target: usize,
        smooth_range: Option<f32>,
    },
}

/// 对源网格执行操作，返回新网格（使用全局配置）
///
/// Sort 与 Separate 不使用 selections。新名称为空时使用配置的默认名称。
pub fn run_operation(
    mesh: &Mesh,
    selections: &[MorphSelection],
    operation: &BlendShapeOperation,
) -> Result<Mesh> {
    run_operation_with(mesh, selections, operation, &get_config())
}

/// 新 BlendShape 名称，空白时回落到默认名称
fn shape_name(name: &str, config: &EditorConfig) -> String {
    if name.trim().is_empty() {
        config.default_shape_name.clone()
    } else {
        name.to_string()
    }
}

/// 使用指定配置执行操作
pub fn run_operation_with(
    mesh: &Mesh,
    selections: &[MorphSelection],
    operation: &BlendShapeOperation,
    config: &EditorConfig,
) -> Result<Mesh> {
    if config.debug_log {
        log::info!(
            "[BlendShape] {:?}，选择 {} 项，源 BlendShape {} 个",
            operation,
            selections.len(),
            mesh.blend_shape_count()
        );
    }

    let builder = MeshBuilder::new(mesh).debug_log(config.debug_log);
    let builder = match operation {
        BlendShapeOperation::Sort { entries } => {
            builder.copy_strategy(CopyStrategy::Reordered(entries.clone()))
        }
        BlendShapeOperation::Blend { name } => builder
            .select(selections)?
            .pass(FramePass::Blend {
                name: shape_name(name, config),
            }),
        BlendShapeOperation::Inverse { name } => builder
            .select(selections)?
            .pass(FramePass::BlendInverse {
                name: shape_name(name, config),
            }),
        BlendShapeOperation::Connect { name } => builder
            .select(selections)?
            .pass(FramePass::Connect {
                name: shape_name(name, config),
            }),
        BlendShapeOperation::BlendConnect { name } => builder
            .select(selections)?
            .pass(FramePass::BlendThenConnect {
                name: shape_name(name, config),
            }),
        BlendShapeOperation::ApplyToBase { name } => builder
            .select(selections)?
            .bake_to_base()
            .pass(FramePass::BlendInverse {
                name: shape_name(name, config),
            }),
        BlendShapeOperation::Separate { target, smooth_range } => {
            let shape = mesh.blend_shape(*target)?;
            let left = format!("{}{}", shape.name, config.left_suffix);
            let right = format!("{}{}", shape.name, config.right_suffix);
            let smooth_range =
                config.clamp_smooth_range(smooth_range.unwrap_or(config.split_smooth_range));

            // 从源网格采样，重名的旧 _L/_R 被过滤后索引会变化
            builder
                .frame(sample(shape, FULL_WEIGHT)?)
                .copy_strategy(CopyStrategy::Filtered(TargetFilter::exclude_names([
                    left.clone(),
                    right.clone(),
                ])))
                .pass(FramePass::MaskedApply {
                    name: left,
                    mask: VertexMask::Left { smooth_range },
                })
                .pass(FramePass::MaskedApply {
                    name: right,
                    mask: VertexMask::Right { smooth_range },
                })
        }
    };

    builder.build()
}
