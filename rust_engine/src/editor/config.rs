//! 编辑器配置
//!
//! 所有参数扁平化，直接在代码中修改默认值即可。

use once_cell::sync::Lazy;
use std::sync::RwLock;

/// 编辑器配置（扁平化，不嵌套）
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    // ========== 命名 ==========
    /// 新建 BlendShape 的默认名称，默认 "Morph"
    pub default_shape_name: String,
    /// 左右分割时左半边后缀，默认 "_L"
    pub left_suffix: String,
    /// 左右分割时右半边后缀，默认 "_R"
    pub right_suffix: String,

    // ========== 对称分割 ==========
    /// 平滑半径，默认 0.001
    /// x 在 [-半径, 半径] 内的顶点按比例分给左右两边
    pub split_smooth_range: f32,
    /// 平滑半径下限，默认 0.001
    pub min_smooth_range: f32,
    /// 平滑半径上限，默认 10.0
    pub max_smooth_range: f32,

    // ========== 调试 ==========
    /// 是否输出调试日志，默认 false
    pub debug_log: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_shape_name: "Morph".to_string(),
            left_suffix: "_L".to_string(),
            right_suffix: "_R".to_string(),

            // 模型单位一般是米，0.001 即中线两侧各 1 毫米
            split_smooth_range: 0.001,
            min_smooth_range: 0.001,
            max_smooth_range: 10.0,

            debug_log: false,
        }
    }
}

impl EditorConfig {
    /// 把平滑半径限制到 [下限, 上限]
    pub fn clamp_smooth_range(&self, range: f32) -> f32 {
        range.clamp(self.min_smooth_range, self.max_smooth_range)
    }
}

/// 全局配置实例
static EDITOR_CONFIG: Lazy<RwLock<EditorConfig>> = Lazy::new(|| {
    RwLock::new(EditorConfig::default())
});

/// 获取当前配置（只读）
pub fn get_config() -> EditorConfig {
    match EDITOR_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// 手动设置配置
pub fn set_config(config: EditorConfig) {
    match EDITOR_CONFIG.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// 重置为默认配置
pub fn reset_config() {
    set_config(EditorConfig::default());
}
