//! 编辑器操作层
//!
//! 把宿主界面的命令（排序、合成、反转、动画、应用到基础网格、左右分割）
//! 翻译为构建管线配置，并提供名称检查与权重重新分配。

mod config;
pub mod naming;
mod operation;
mod weights;

pub use config::{get_config, reset_config, set_config, EditorConfig};
pub use naming::{check_new_name, check_unique_names};
pub use operation::{run_operation, run_operation_with, BlendShapeOperation};
pub use weights::ShapeWeights;
