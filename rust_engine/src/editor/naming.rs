//! BlendShape 名称检查
//!
//! 供宿主在调用构建管线之前使用，管线本身不做名称校验。

use std::collections::HashSet;

use crate::mesh::Mesh;
use crate::{BlendShapeError, Result};

/// 检查名称列表没有重复（排序/重命名界面）
pub fn check_unique_names<S: AsRef<str>>(names: &[S]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        let name = name.as_ref();
        if !seen.insert(name) {
            return Err(BlendShapeError::DuplicateName(name.to_string()));
        }
    }
    Ok(())
}

/// 检查新 BlendShape 名称非空且网格上不存在
pub fn check_new_name(mesh: &Mesh, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(BlendShapeError::InvalidName(name.to_string()));
    }
    if mesh.find_blend_shape(name).is_some() {
        return Err(BlendShapeError::DuplicateName(name.to_string()));
    }
    Ok(())
}
