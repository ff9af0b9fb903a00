//! 网格快照：复制静态数据，在网格之间复制/过滤/重排 BlendShape

use super::Mesh;
use crate::morph::BlendShape;
use crate::Result;

/// 重排条目：源 BlendShape 索引 + 输出名称
#[derive(Clone, Debug, PartialEq)]
pub struct ReorderEntry {
    pub index: usize,
    pub name: String,
}

impl ReorderEntry {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self { index, name: name.into() }
    }
}

/// 深拷贝全部静态缓冲区与拓扑，不含 BlendShape
pub fn clone_static(mesh: &Mesh) -> Mesh {
    let mut out = Mesh::new(mesh.name.clone());
    out.index_format = mesh.index_format;
    out.positions = mesh.positions.clone();
    out.normals = mesh.normals.clone();
    out.tangents = mesh.tangents.clone();
    out.uvs = mesh.uvs.clone();
    out.colors = mesh.colors.clone();
    out.bone_weights = mesh.bone_weights.clone();
    out.bind_poses = mesh.bind_poses.clone();
    out.bounds = mesh.bounds;
    out.submeshes = mesh.submeshes.clone();
    out
}

/// 原样复制全部 BlendShape
pub fn copy_all_targets(dst: &mut Mesh, src: &Mesh) -> Result<()> {
    copy_targets_filtered(dst, src, |_, _| true)?;
    Ok(())
}

/// 复制通过 predicate(索引, 名称) 的 BlendShape，返回复制数量
pub fn copy_targets_filtered<F>(dst: &mut Mesh, src: &Mesh, mut predicate: F) -> Result<usize>
where
    F: FnMut(usize, &str) -> bool,
{
    let mut copied = 0;
    for (index, shape) in src.blend_shapes().iter().enumerate() {
        if !predicate(index, &shape.name) {
            continue;
        }
        copy_frames(dst, shape, &shape.name)?;
        copied += 1;
    }
    Ok(copied)
}

/// 按给定顺序复制并重命名 BlendShape，未列出的目标被丢弃
///
/// 名称唯一性由调用方保证；重名条目会把关键帧追加到同一目标。
pub fn copy_targets_reordered(dst: &mut Mesh, src: &Mesh, entries: &[ReorderEntry]) -> Result<()> {
    for entry in entries {
        let shape = src.blend_shape(entry.index)?;
        copy_frames(dst, shape, &entry.name)?;
    }
    Ok(())
}

fn copy_frames(dst: &mut Mesh, shape: &BlendShape, name: &str) -> Result<()> {
    for frame in &shape.frames {
        dst.add_blend_shape_frame(name, frame.weight, frame.delta.clone())?;
    }
    Ok(())
}
