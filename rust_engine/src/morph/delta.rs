//! 形变偏移帧

use glam::{Vec3, Vec4};

use crate::mesh::Mesh;
use crate::{BlendShapeError, Result};

/// 一个关键帧对网格的逐顶点贡献：位置、法线、切线三组偏移
///
/// 三个数组长度始终相同，二元运算要求两帧长度一致。
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeltaFrame {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    tangents: Vec<Vec3>,
}

impl DeltaFrame {
    /// 全零偏移帧
    pub fn zeros(vertex_count: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; vertex_count],
            normals: vec![Vec3::ZERO; vertex_count],
            tangents: vec![Vec3::ZERO; vertex_count],
        }
    }

    /// 由三组偏移构造，长度不一致时报错
    pub fn from_parts(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        tangents: Vec<Vec3>,
    ) -> Result<Self> {
        for len in [normals.len(), tangents.len()] {
            if len != positions.len() {
                return Err(BlendShapeError::LengthMismatch {
                    expected: positions.len(),
                    actual: len,
                });
            }
        }
        Ok(Self {
            positions,
            normals,
            tangents,
        })
    }

    /// 只有位置偏移的帧
    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        let n = positions.len();
        Self {
            positions,
            normals: vec![Vec3::ZERO; n],
            tangents: vec![Vec3::ZERO; n],
        }
    }

    /// 顶点数量
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn tangents(&self) -> &[Vec3] {
        &self.tangents
    }

    pub fn into_parts(self) -> (Vec<Vec3>, Vec<Vec3>, Vec<Vec3>) {
        (self.positions, self.normals, self.tangents)
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len != self.len() {
            return Err(BlendShapeError::LengthMismatch {
                expected: self.len(),
                actual: len,
            });
        }
        Ok(())
    }

    /// 逐元素相加
    pub fn add_assign(&mut self, other: &DeltaFrame) -> Result<()> {
        self.check_len(other.len())?;
        add_each(&mut self.positions, &other.positions);
        add_each(&mut self.normals, &other.normals);
        add_each(&mut self.tangents, &other.tangents);
        Ok(())
    }

    /// 整体缩放（-1 即反转）
    pub fn scale(&mut self, scalar: f32) {
        for v in self
            .positions
            .iter_mut()
            .chain(self.normals.iter_mut())
            .chain(self.tangents.iter_mut())
        {
            *v *= scalar;
        }
    }

    /// 逐顶点缩放
    pub fn mask(&mut self, weights: &[f32]) -> Result<()> {
        self.check_len(weights.len())?;
        for (i, &w) in weights.iter().enumerate() {
            self.positions[i] *= w;
            self.normals[i] *= w;
            self.tangents[i] *= w;
        }
        Ok(())
    }

    /// 线性插值 from + (to - from) * t
    pub fn lerp(from: &DeltaFrame, to: &DeltaFrame, t: f32) -> Result<DeltaFrame> {
        from.check_len(to.len())?;
        let mix = |a: &[Vec3], b: &[Vec3]| -> Vec<Vec3> {
            a.iter().zip(b).map(|(a, b)| a.lerp(*b, t)).collect()
        };
        Ok(DeltaFrame {
            positions: mix(&from.positions, &to.positions),
            normals: mix(&from.normals, &to.normals),
            tangents: mix(&from.tangents, &to.tangents),
        })
    }

    /// 求和，空列表报错
    pub fn sum(frames: &[DeltaFrame]) -> Result<DeltaFrame> {
        let (first, rest) = frames.split_first().ok_or(BlendShapeError::EmptyFrameList)?;
        let mut total = first.clone();
        for frame in rest {
            total.add_assign(frame)?;
        }
        Ok(total)
    }

    /// 作为关键帧写入网格，目标不存在时新建
    pub fn write_as_keyframe(&self, mesh: &mut Mesh, name: &str, weight: f32) -> Result<()> {
        mesh.add_blend_shape_frame(name, weight, self.clone())?;
        Ok(())
    }

    /// 将偏移永久加到网格基础形状上
    ///
    /// 切线只修改 xyz，w（副切线符号）保持不变。
    /// 网格缺少法线或切线时对应偏移被忽略。
    pub fn bake_into(&self, mesh: &mut Mesh) -> Result<()> {
        self.check_len(mesh.vertex_count())?;

        add_each(&mut mesh.positions, &self.positions);
        if !mesh.normals.is_empty() {
            self.check_len(mesh.normals.len())?;
            add_each(&mut mesh.normals, &self.normals);
        }
        if !mesh.tangents.is_empty() {
            self.check_len(mesh.tangents.len())?;
            for (t, d) in mesh.tangents.iter_mut().zip(&self.tangents) {
                *t += Vec4::new(d.x, d.y, d.z, 0.0);
            }
        }
        Ok(())
    }
}

fn add_each(dst: &mut [Vec3], src: &[Vec3]) {
    for (a, b) in dst.iter_mut().zip(src) {
        *a += *b;
    }
}
