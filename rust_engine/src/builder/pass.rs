//! 偏移帧应用

use super::FramePass;
use crate::mesh::Mesh;
use crate::morph::{DeltaFrame, FULL_WEIGHT};
use crate::{BlendShapeError, Result};

/// 执行一个 pass，把合成的 BlendShape 写入 mesh
pub(crate) fn apply_pass(pass: &FramePass, frames: &[DeltaFrame], mesh: &mut Mesh) -> Result<()> {
    match pass {
        FramePass::Blend { name } => {
            let blended = DeltaFrame::sum(frames)?;
            blended.write_as_keyframe(mesh, name, FULL_WEIGHT)
        }
        FramePass::BlendInverse { name } => {
            let mut blended = DeltaFrame::sum(frames)?;
            blended.scale(-1.0);
            blended.write_as_keyframe(mesh, name, FULL_WEIGHT)
        }
        FramePass::Connect { name } => {
            let count = non_empty(frames)?;
            for (i, frame) in frames.iter().enumerate() {
                frame.write_as_keyframe(mesh, name, step_weight(i, count))?;
            }
            Ok(())
        }
        FramePass::BlendThenConnect { name } => {
            let count = non_empty(frames)?;
            let mut accumulated = DeltaFrame::zeros(frames[0].len());
            for (i, frame) in frames.iter().enumerate() {
                accumulated.add_assign(frame)?;
                accumulated.write_as_keyframe(mesh, name, step_weight(i, count))?;
            }
            Ok(())
        }
        FramePass::MaskedApply { name, mask } => {
            let mut blended = DeltaFrame::sum(frames)?;
            let weights = mask.evaluate(&mesh.positions);
            blended.mask(&weights)?;
            blended.write_as_keyframe(mesh, name, FULL_WEIGHT)
        }
    }
}

fn non_empty(frames: &[DeltaFrame]) -> Result<usize> {
    if frames.is_empty() {
        return Err(BlendShapeError::EmptyFrameList);
    }
    Ok(frames.len())
}

/// 第 i 帧（共 count 帧）的权重 100·(i+1)/count
fn step_weight(i: usize, count: usize) -> f32 {
    FULL_WEIGHT * (i + 1) as f32 / count as f32
}
