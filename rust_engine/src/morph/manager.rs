//! BlendShape 集合

use std::collections::HashMap;

use super::{BlendShape, DeltaFrame};
use crate::Result;

/// 网格上的 BlendShape 集合
///
/// 保持插入顺序（即 BlendShape 索引），同名写入会追加到已有目标的关键帧序列。
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlendShapeSet {
    shapes: Vec<BlendShape>,
    name_to_index: HashMap<String, usize>,
}

impl BlendShapeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加关键帧，返回目标索引
    pub fn add_frame(&mut self, name: &str, weight: f32, delta: DeltaFrame) -> Result<usize> {
        let index = match self.name_to_index.get(name) {
            Some(&index) => index,
            None => {
                let index = self.shapes.len();
                self.shapes.push(BlendShape::new(name));
                self.name_to_index.insert(name.to_string(), index);
                index
            }
        };

        // 新建的目标没有前一帧，push_frame 只会在已有目标上失败
        self.shapes[index].push_frame(weight, delta)?;
        Ok(index)
    }

    /// 通过名称查找
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// 获取数量
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BlendShape> {
        self.shapes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlendShape> {
        self.shapes.iter()
    }

    /// 名称列表
    pub fn names(&self) -> Vec<String> {
        self.shapes.iter().map(|s| s.name.clone()).collect()
    }

    /// 清空
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.name_to_index.clear();
    }
}
