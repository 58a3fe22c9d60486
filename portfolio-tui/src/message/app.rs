//! 应用主消息枚举

use super::FormMessage;
use crate::backend::SubmissionOutcome;

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 帧节拍
    Tick,

    /// 按文档单位滚动页面（负数向上）
    Scroll(f64),

    /// 平滑滚动到顶部
    ScrollToTop,

    /// 点击第 n 个导航链接
    NavigateTo(usize),

    /// 切换移动端菜单
    ToggleMenu,

    /// 焦点切换
    FocusNext,
    FocusPrevious,
    /// 焦点回到页面
    FocusPage,

    /// 表单相关消息
    Form(FormMessage),

    /// 鼠标移动到终端格子
    PointerMoved { column: u16, row: u16 },

    /// 终端尺寸变化
    Resized { columns: u16, rows: u16 },

    /// 后台提交完成
    SubmissionFinished(SubmissionOutcome),

    /// 头像加载失败（终端里由按键模拟）
    ImageFailed,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
