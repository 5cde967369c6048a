//! 条目操作错误类型

use thiserror::Error;

/// 条目控制器返回的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("名称不能为空")]
    EmptyName,

    #[error("卡路里不能为空")]
    EmptyCalories,

    #[error("无效的卡路里值: {0}")]
    InvalidCalories(String),

    #[error("条目不存在: {0}")]
    NotFound(u32),

    #[error("当前没有正在编辑的条目")]
    NoCurrentItem,
}
