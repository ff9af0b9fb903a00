//! 网格静态数据与快照工具

mod mesh;
pub mod snapshot;
mod submesh;

pub use mesh::Mesh;
pub use snapshot::ReorderEntry;
pub use submesh::SubMesh;

use glam::Vec3;

/// UV 通道上限（uv0 ~ uv7）
pub const MAX_UV_CHANNELS: usize = 8;

/// 索引格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IndexFormat {
    #[default]
    UInt16,
    UInt32,
}

/// 顶点骨骼权重（最多 4 根骨骼）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoneWeight {
    pub bones: [i32; 4],
    pub weights: [f32; 4],
}

impl Default for BoneWeight {
    fn default() -> Self {
        BoneWeight {
            bones: [0; 4],
            weights: [1.0, 0.0, 0.0, 0.0],
        }
    }
}

/// 轴对齐包围盒
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// 由顶点位置计算包围盒，空列表返回零包围盒
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let (min, max) = points
            .iter()
            .skip(1)
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Self { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}
