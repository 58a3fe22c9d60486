//! 联系表单子消息

/// 聚焦字段上的输入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// 输入一个字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 提交表单
    Submit,
}
