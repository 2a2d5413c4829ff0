//! 表单输入状态

use student_roster_core::FormField;

/// 两个输入框的文本缓冲
#[derive(Debug, Default)]
pub struct FormInput {
    /// 学号输入框
    pub student_id: String,
    /// 姓名输入框
    pub name: String,
    /// 当前获得焦点的输入框
    pub focused: FormField,
}

impl FormInput {
    /// 在焦点输入框末尾追加字符
    pub fn input(&mut self, ch: char) {
        self.focused_mut().push(ch);
    }

    /// 删除焦点输入框的最后一个字符
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// 切换到另一个输入框
    pub fn next_field(&mut self) {
        self.focused = self.focused.toggle();
    }

    /// 清空两个输入框
    pub fn clear(&mut self) {
        self.student_id.clear();
        self.name.clear();
    }

    /// 载入选中记录
    pub fn fill(&mut self, student_id: &str, name: &str) {
        self.student_id = student_id.to_string();
        self.name = name.to_string();
    }

    /// 指定输入框的内容
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::StudentId => &self.student_id,
            FormField::Name => &self.name,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focused {
            FormField::StudentId => &mut self.student_id,
            FormField::Name => &mut self.name,
        }
    }
}
