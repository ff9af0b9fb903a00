//! BlendShape 权重重新分配
//!
//! 网格替换后 BlendShape 的索引会变化，按名称把旧权重映射到新网格。

use std::collections::HashMap;

use crate::mesh::Mesh;

/// 按名称记录的 BlendShape 权重
#[derive(Clone, Debug, Default)]
pub struct ShapeWeights {
    weights: HashMap<String, f32>,
}

impl ShapeWeights {
    /// 记录当前权重，weights[i] 对应网格第 i 个 BlendShape
    ///
    /// 同名目标只保留第一个的权重。
    pub fn capture(mesh: &Mesh, weights: &[f32]) -> Self {
        let mut map = HashMap::new();
        for (shape, &weight) in mesh.blend_shapes().iter().zip(weights) {
            map.entry(shape.name.clone()).or_insert(weight);
        }
        Self { weights: map }
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.weights.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// 生成新网格的权重列表，找不到名称的目标权重为 0
    pub fn reapply(&self, mesh: &Mesh) -> Vec<f32> {
        mesh.blend_shapes()
            .iter()
            .map(|shape| self.get(&shape.name).unwrap_or(0.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{run_operation, BlendShapeOperation};
    use crate::mesh::ReorderEntry;
    use crate::morph::DeltaFrame;

    fn mesh() -> Mesh {
        let mut mesh = Mesh::new("m");
        mesh.positions = vec![glam::Vec3::ZERO; 2];
        for name in ["A", "B", "C"] {
            mesh.add_blend_shape_frame(name, 100.0, DeltaFrame::zeros(2)).unwrap();
        }
        mesh
    }

    #[test]
    fn test_reapply_after_sort() {
        let old = mesh();
        let saved = ShapeWeights::capture(&old, &[10.0, 20.0, 30.0]);
        assert_eq!(saved.len(), 3);

        let op = BlendShapeOperation::Sort {
            entries: vec![
                ReorderEntry::new(2, "C"),
                ReorderEntry::new(0, "A_renamed"),
                ReorderEntry::new(1, "B"),
            ],
        };
        let new = run_operation(&old, &[], &op).unwrap();
        assert_eq!(saved.reapply(&new), vec![30.0, 0.0, 20.0]);
    }

    #[test]
    fn test_capture_short_weight_list() {
        let saved = ShapeWeights::capture(&mesh(), &[5.0]);
        assert_eq!(saved.get("A"), Some(5.0));
        assert_eq!(saved.get("B"), None);
    }
}
