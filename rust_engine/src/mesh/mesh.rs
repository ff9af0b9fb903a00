//! 网格数据

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::morph::{BlendShape, BlendShapeSet, DeltaFrame};
use crate::{BlendShapeError, Result};

use super::{BoneWeight, Bounds, IndexFormat, SubMesh, MAX_UV_CHANNELS};

/// 带 BlendShape 的网格
///
/// 顶点数由 `positions` 决定，其余逐顶点数组要么为空（该属性不存在），
/// 要么与顶点数等长。
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub name: String,
    pub index_format: IndexFormat,

    // 顶点属性
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// xyz 为切线方向，w 为副切线符号
    pub tangents: Vec<Vec4>,
    pub uvs: [Vec<Vec2>; MAX_UV_CHANNELS],
    pub colors: Vec<Vec4>,

    // 蒙皮
    pub bone_weights: Vec<BoneWeight>,
    pub bind_poses: Vec<Mat4>,

    pub bounds: Bounds,
    pub submeshes: Vec<SubMesh>,

    blend_shapes: BlendShapeSet,
}

impl Mesh {
    /// 创建空网格
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// 获取子网格数量
    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    /// 获取 BlendShape 数量
    pub fn blend_shape_count(&self) -> usize {
        self.blend_shapes.len()
    }

    pub fn blend_shapes(&self) -> &BlendShapeSet {
        &self.blend_shapes
    }

    /// 获取 BlendShape
    pub fn blend_shape(&self, index: usize) -> Result<&BlendShape> {
        self.blend_shapes
            .get(index)
            .ok_or(BlendShapeError::TargetIndexOutOfRange {
                index,
                count: self.blend_shapes.len(),
            })
    }

    pub fn blend_shape_name(&self, index: usize) -> Option<&str> {
        self.blend_shapes.get(index).map(|s| s.name.as_str())
    }

    /// 通过名称查找 BlendShape
    pub fn find_blend_shape(&self, name: &str) -> Option<usize> {
        self.blend_shapes.find_by_name(name)
    }

    /// 所有 BlendShape 名称（按存储顺序）
    pub fn blend_shape_names(&self) -> Vec<String> {
        self.blend_shapes.names()
    }

    /// 追加一个关键帧，目标不存在时新建
    pub fn add_blend_shape_frame(
        &mut self,
        name: &str,
        weight: f32,
        delta: DeltaFrame,
    ) -> Result<usize> {
        if delta.len() != self.vertex_count() {
            return Err(BlendShapeError::LengthMismatch {
                expected: self.vertex_count(),
                actual: delta.len(),
            });
        }
        self.blend_shapes.add_frame(name, weight, delta)
    }

    /// 移除全部 BlendShape
    pub fn clear_blend_shapes(&mut self) {
        self.blend_shapes.clear();
    }

    /// 按当前顶点位置重新计算包围盒
    pub fn recalculate_bounds(&mut self) {
        self.bounds = Bounds::from_points(&self.positions);
    }

    /// 检查逐顶点数组与拓扑是否一致
    pub fn validate(&self) -> Result<()> {
        let count = self.vertex_count();
        let check = |len: usize| -> Result<()> {
            if len != 0 && len != count {
                return Err(BlendShapeError::LengthMismatch {
                    expected: count,
                    actual: len,
                });
            }
            Ok(())
        };

        check(self.normals.len())?;
        check(self.tangents.len())?;
        check(self.colors.len())?;
        check(self.bone_weights.len())?;
        for uv in &self.uvs {
            check(uv.len())?;
        }

        for shape in self.blend_shapes.iter() {
            for frame in &shape.frames {
                check(frame.delta.len())?;
            }
        }

        for submesh in &self.submeshes {
            if let Some(max) = submesh.max_vertex() {
                if max as usize >= count {
                    return Err(BlendShapeError::VertexIndexOutOfRange {
                        index: max as usize,
                        count,
                    });
                }
            }
        }
        Ok(())
    }
}
