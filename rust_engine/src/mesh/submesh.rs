//! 子网格定义

/// 子网格（按材质划分的三角形列表）
#[derive(Clone, Debug, PartialEq)]
pub struct SubMesh {
    /// 三角形索引（相对于 base_vertex）
    pub indices: Vec<u32>,
    pub base_vertex: u32,
    pub material_id: i32,
}

impl SubMesh {
    pub fn new(indices: Vec<u32>, base_vertex: u32, material_id: i32) -> Self {
        Self { indices, base_vertex, material_id }
    }

    /// 获取索引数量
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// 获取三角形数量
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// 最大顶点引用（已加上 base_vertex）
    pub fn max_vertex(&self) -> Option<u32> {
        self.indices.iter().max().map(|i| i + self.base_vertex)
    }
}
