//! 网格构建器

use super::pass::apply_pass;
use super::{CopyStrategy, FramePass};
use crate::editor::get_config;
use crate::mesh::{snapshot, Mesh};
use crate::morph::{sample, DeltaFrame, MorphSelection};
use crate::Result;

/// 网格构建器
///
/// 收集偏移帧与 pass 配置，`build` 时一次性生成新网格。源网格不会被修改。
///
/// ```ignore
/// let mesh = MeshBuilder::new(&source)
///     .select(&[MorphSelection::new(0, 100.0), MorphSelection::new(2, 50.0)])?
///     .pass(FramePass::Blend { name: "Morph".into() })
///     .build()?;
/// ```
pub struct MeshBuilder<'a> {
    source: &'a Mesh,
    frames: Vec<DeltaFrame>,
    bake: bool,
    copy: CopyStrategy,
    passes: Vec<FramePass>,
    debug_log: bool,
}

impl<'a> MeshBuilder<'a> {
    pub fn new(source: &'a Mesh) -> Self {
        Self {
            source,
            frames: Vec::new(),
            bake: false,
            copy: CopyStrategy::All,
            passes: Vec::new(),
            debug_log: get_config().debug_log,
        }
    }

    /// 按选择采样源网格的 BlendShape，结果按顺序追加到帧列表
    pub fn select(mut self, selections: &[MorphSelection]) -> Result<Self> {
        for selection in selections {
            let shape = self.source.blend_shape(selection.index)?;
            self.frames.push(sample(shape, selection.weight)?);
        }
        Ok(self)
    }

    /// 直接追加偏移帧
    pub fn frame(mut self, frame: DeltaFrame) -> Self {
        self.frames.push(frame);
        self
    }

    /// 在复制 BlendShape 之前把全部帧之和烘焙进基础形状
    pub fn bake_to_base(mut self) -> Self {
        self.bake = true;
        self
    }

    pub fn copy_strategy(mut self, copy: CopyStrategy) -> Self {
        self.copy = copy;
        self
    }

    /// 注册 pass，按注册顺序执行
    pub fn pass(mut self, pass: FramePass) -> Self {
        self.passes.push(pass);
        self
    }

    /// 是否输出逐阶段调试日志，默认取全局配置
    pub fn debug_log(mut self, enabled: bool) -> Self {
        self.debug_log = enabled;
        self
    }

    pub fn is_debug_log(&self) -> bool {
        self.debug_log
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// 执行管线并返回新网格
    pub fn build(self) -> Result<Mesh> {
        let mut mesh = snapshot::clone_static(self.source);

        if self.bake {
            let composite = DeltaFrame::sum(&self.frames)?;
            composite.bake_into(&mut mesh)?;
            mesh.recalculate_bounds();
            if self.debug_log {
                log::debug!("已烘焙 {} 个偏移帧到基础形状", self.frames.len());
            }
        }

        match &self.copy {
            CopyStrategy::All => snapshot::copy_all_targets(&mut mesh, self.source)?,
            CopyStrategy::Filtered(filter) => {
                let copied = snapshot::copy_targets_filtered(&mut mesh, self.source, |i, name| {
                    filter.accepts(i, name)
                })?;
                if self.debug_log {
                    log::debug!(
                        "过滤复制 BlendShape: 保留 {} / {}",
                        copied,
                        self.source.blend_shape_count()
                    );
                }
            }
            CopyStrategy::Reordered(entries) => {
                snapshot::copy_targets_reordered(&mut mesh, self.source, entries)?
            }
        }

        for pass in &self.passes {
            apply_pass(pass, &self.frames, &mut mesh)?;
            if self.debug_log {
                log::debug!("pass 完成: {}", pass.name());
            }
        }

        log::info!(
            "网格构建完成: {} (顶点 {}, BlendShape {} -> {}, pass {})",
            mesh.name,
            mesh.vertex_count(),
            self.source.blend_shape_count(),
            mesh.blend_shape_count(),
            self.passes.len(),
        );
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{TargetFilter, VertexMask};
    use crate::mesh::{ReorderEntry, SubMesh};
    use crate::BlendShapeError;
    use glam::{Vec3, Vec4};

    fn delta(xs: [f32; 3]) -> DeltaFrame {
        DeltaFrame::from_parts(
            xs.iter().map(|&x| Vec3::new(x, 0.0, 0.0)).collect(),
            xs.iter().map(|&x| Vec3::new(0.0, x, 0.0)).collect(),
            xs.iter().map(|&x| Vec3::new(0.0, 0.0, x)).collect(),
        )
        .unwrap()
    }

    fn source() -> Mesh {
        let mut mesh = Mesh::new("Face");
        mesh.positions = vec![
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        mesh.normals = vec![Vec3::Z; 3];
        mesh.tangents = vec![Vec4::new(1.0, 0.0, 0.0, 1.0); 3];
        mesh.submeshes = vec![SubMesh::new(vec![0, 1, 2], 0, 0)];
        mesh.recalculate_bounds();

        mesh.add_blend_shape_frame("A", 100.0, delta([1.0, 1.0, 1.0])).unwrap();
        mesh.add_blend_shape_frame("B", 100.0, delta([2.0, 0.0, -2.0])).unwrap();
        mesh.add_blend_shape_frame("C", 100.0, delta([0.5, 0.5, 0.5])).unwrap();
        mesh.add_blend_shape_frame("D", 100.0, delta([4.0, 4.0, 4.0])).unwrap();
        mesh
    }

    fn all_full() -> Vec<MorphSelection> {
        (0..4).map(MorphSelection::full).collect()
    }

    fn assert_frame_close(a: &DeltaFrame, b: &DeltaFrame) {
        let pairs = a
            .positions()
            .iter()
            .zip(b.positions())
            .chain(a.normals().iter().zip(b.normals()))
            .chain(a.tangents().iter().zip(b.tangents()));
        for (x, y) in pairs {
            assert!((*x - *y).length() < 1e-5, "{x:?} != {y:?}");
        }
    }

    #[test]
    fn test_blend() {
        let src = source();
        let out = MeshBuilder::new(&src)
            .select(&[MorphSelection::new(0, 100.0), MorphSelection::new(1, 50.0)])
            .unwrap()
            .pass(FramePass::Blend { name: "AB".into() })
            .build()
            .unwrap();

        assert_eq!(out.blend_shape_count(), 5);
        let ab = out.blend_shape(4).unwrap();
        assert_eq!(ab.name, "AB");
        assert_eq!(ab.frame_count(), 1);
        assert_eq!(ab.frame_weight(0), Some(100.0));
        assert_frame_close(&ab.frames[0].delta, &delta([2.0, 1.0, 0.0]));
    }

    #[test]
    fn test_blend_inverse_round_trip() {
        let src = source();
        let selections = [MorphSelection::full(0), MorphSelection::full(1)];
        let blended = MeshBuilder::new(&src)
            .select(&selections)
            .unwrap()
            .pass(FramePass::Blend { name: "Blend".into() })
            .pass(FramePass::BlendInverse { name: "Inverse".into() })
            .build()
            .unwrap();

        let idx = blended.find_blend_shape("Blend").unwrap();
        let inv = blended.find_blend_shape("Inverse").unwrap();
        let mut restored = blended.blend_shape(inv).unwrap().frames[0].delta.clone();
        restored.scale(-1.0);
        assert_eq!(restored, blended.blend_shape(idx).unwrap().frames[0].delta);
    }

    #[test]
    fn test_connect_spacing() {
        let src = source();
        let out = MeshBuilder::new(&src)
            .select(&all_full())
            .unwrap()
            .copy_strategy(CopyStrategy::Filtered(TargetFilter {
                exclude_names: vec![],
                exclude_indices: vec![0, 1, 2, 3],
            }))
            .pass(FramePass::Connect { name: "Anim".into() })
            .build()
            .unwrap();

        assert_eq!(out.blend_shape_count(), 1);
        let anim = out.blend_shape(0).unwrap();
        let weights: Vec<f32> = anim.frames.iter().map(|f| f.weight).collect();
        assert_eq!(weights, vec![25.0, 50.0, 75.0, 100.0]);
        for (i, frame) in anim.frames.iter().enumerate() {
            assert_eq!(frame.delta, src.blend_shape(i).unwrap().frames[0].delta);
        }
    }

    #[test]
    fn test_blend_then_connect_accumulation() {
        let src = source();
        let out = MeshBuilder::new(&src)
            .select(&all_full()[..3])
            .unwrap()
            .pass(FramePass::BlendThenConnect { name: "Grow".into() })
            .build()
            .unwrap();

        let grow = out.blend_shape(out.find_blend_shape("Grow").unwrap()).unwrap();
        assert_eq!(grow.frame_count(), 3);
        assert!((grow.frames[0].weight - 33.333).abs() < 1e-2);
        assert!((grow.frames[1].weight - 66.666).abs() < 1e-2);
        assert_eq!(grow.frames[2].weight, 100.0);
        assert_frame_close(&grow.frames[0].delta, &delta([1.0, 1.0, 1.0]));
        assert_frame_close(&grow.frames[1].delta, &delta([3.0, 1.0, -1.0]));
        assert_frame_close(&grow.frames[2].delta, &delta([3.5, 1.5, -0.5]));
    }

    #[test]
    fn test_bake_then_inverse_restores_shape() {
        let src = source();
        let out = MeshBuilder::new(&src)
            .select(&[MorphSelection::full(1)])
            .unwrap()
            .bake_to_base()
            .pass(FramePass::BlendInverse { name: "Restore".into() })
            .build()
            .unwrap();

        assert_eq!(out.positions[0], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(out.positions[2], Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(out.normals[0], Vec3::new(0.0, 2.0, 1.0));
        assert_eq!(out.tangents[0], Vec4::new(1.0, 0.0, 2.0, 1.0));
        assert_eq!(out.bounds.min, Vec3::new(-1.0, 0.0, 0.0));

        // 原有 BlendShape 原样保留，新目标在最后
        assert_eq!(out.blend_shape_names(), vec!["A", "B", "C", "D", "Restore"]);
        let restore = &out.blend_shape(4).unwrap().frames[0].delta;
        let restored: Vec<Vec3> = out
            .positions
            .iter()
            .zip(restore.positions())
            .map(|(p, d)| *p + *d)
            .collect();
        assert_eq!(restored, src.positions);
    }

    #[test]
    fn test_split_left_right() {
        let src = source();
        let filter = TargetFilter::exclude_names(["D_L", "D_R"]);
        let out = MeshBuilder::new(&src)
            .select(&[MorphSelection::full(3)])
            .unwrap()
            .copy_strategy(CopyStrategy::Filtered(filter))
            .pass(FramePass::MaskedApply {
                name: "D_L".into(),
                mask: VertexMask::Left { smooth_range: 0.001 },
            })
            .pass(FramePass::MaskedApply {
                name: "D_R".into(),
                mask: VertexMask::Right { smooth_range: 0.001 },
            })
            .build()
            .unwrap();

        let left = &out.blend_shape(out.find_blend_shape("D_L").unwrap()).unwrap().frames[0].delta;
        let right = &out.blend_shape(out.find_blend_shape("D_R").unwrap()).unwrap().frames[0].delta;
        assert_eq!(left.positions()[0], Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(left.positions()[2], Vec3::ZERO);
        assert_eq!(right.positions()[0], Vec3::ZERO);
        assert_eq!(right.positions()[2], Vec3::new(4.0, 0.0, 0.0));
        // x = 0 的顶点两边各一半
        assert_eq!(left.positions()[1], Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(right.positions()[1], Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_reordered_copy() {
        let src = source();
        let out = MeshBuilder::new(&src)
            .copy_strategy(CopyStrategy::Reordered(vec![
                ReorderEntry::new(2, "C"),
                ReorderEntry::new(0, "A2"),
            ]))
            .build()
            .unwrap();
        assert_eq!(out.blend_shape_names(), vec!["C", "A2"]);
    }

    #[test]
    fn test_source_untouched() {
        let src = source();
        let before = src.clone();
        let _ = MeshBuilder::new(&src)
            .select(&all_full())
            .unwrap()
            .bake_to_base()
            .pass(FramePass::Blend { name: "X".into() })
            .build()
            .unwrap();
        assert_eq!(src.positions, before.positions);
        assert_eq!(src.blend_shapes(), before.blend_shapes());
    }

    #[test]
    fn test_errors() {
        let src = source();
        let err = MeshBuilder::new(&src)
            .select(&[MorphSelection::full(7)])
            .err()
            .unwrap();
        assert_eq!(err, BlendShapeError::TargetIndexOutOfRange { index: 7, count: 4 });

        let err = MeshBuilder::new(&src)
            .pass(FramePass::Blend { name: "X".into() })
            .build()
            .unwrap_err();
        assert_eq!(err, BlendShapeError::EmptyFrameList);

        let err = MeshBuilder::new(&src).bake_to_base().build().unwrap_err();
        assert_eq!(err, BlendShapeError::EmptyFrameList);

        let err = MeshBuilder::new(&src)
            .frame(DeltaFrame::zeros(2))
            .pass(FramePass::Blend { name: "X".into() })
            .build()
            .unwrap_err();
        assert_eq!(err, BlendShapeError::LengthMismatch { expected: 3, actual: 2 });
    }

    #[test]
    fn test_debug_log_toggle() {
        let src = source();
        let quiet = MeshBuilder::new(&src).debug_log(false);
        assert!(!quiet.is_debug_log());

        let verbose = MeshBuilder::new(&src).debug_log(true);
        assert!(verbose.is_debug_log());

        // 日志开关不影响结果
        let build = |debug: bool| {
            MeshBuilder::new(&src)
                .debug_log(debug)
                .select(&all_full())
                .unwrap()
                .bake_to_base()
                .pass(FramePass::Blend { name: "X".into() })
                .build()
                .unwrap()
        };
        let (a, b) = (build(false), build(true));
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.blend_shapes(), b.blend_shapes());
    }
}
