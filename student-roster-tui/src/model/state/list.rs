//! 学生列表视图状态
//!
//! 每一行缓存渲染用的文本。收到变更通知时只让受影响的行失效，
//! `sync()` 时也只重新读取失效的行，而不是整表刷新。

use student_roster_core::{Record, RecordStore};

/// 一行的渲染缓存
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowText {
    pub student_id: String,
    pub name: String,
}

impl From<&Record> for RowText {
    fn from(record: &Record) -> Self {
        Self {
            student_id: record.student_id.clone(),
            name: record.name.clone(),
        }
    }
}

/// 学生列表视图
#[derive(Debug, Default)]
pub struct RosterListView {
    /// `None` 表示该行已失效，等待下次 sync 重新渲染
    rows: Vec<Option<RowText>>,
    /// 列表光标
    selected: usize,
}

impl RosterListView {
    /// 在 `index` 处插入一个待渲染的行
    pub fn on_inserted(&mut self, index: usize) {
        let index = index.min(self.rows.len());
        self.rows.insert(index, None);
        if index <= self.selected && self.rows.len() > 1 {
            self.selected += 1;
        }
    }

    /// 让 `index` 处的行失效
    pub fn on_changed(&mut self, index: usize) {
        match self.rows.get_mut(index) {
            Some(row) => *row = None,
            None => log::warn!("Change notification for missing row {index}"),
        }
    }

    /// 移除 `index` 处的行，光标跟随
    pub fn on_removed(&mut self, index: usize) {
        if index >= self.rows.len() {
            log::warn!("Remove notification for missing row {index}");
            return;
        }
        self.rows.remove(index);
        if self.selected > index {
            self.selected -= 1;
        }
        self.clamp_cursor();
    }

    /// 重新渲染失效的行，返回本次渲染的行数
    ///
    /// 行数与 store 不一致说明漏掉了通知，此时整表重建。
    pub fn sync(&mut self, store: &RecordStore) -> usize {
        if self.rows.len() != store.len() {
            log::warn!(
                "List view out of sync ({} rows, store has {}), rebuilding",
                self.rows.len(),
                store.len()
            );
            self.rows = vec![None; store.len()];
        }

        let mut rendered = 0;
        for (index, row) in self.rows.iter_mut().enumerate() {
            if row.is_none() {
                *row = store.get(index).map(RowText::from);
                rendered += 1;
            }
        }

        self.clamp_cursor();
        rendered
    }

    /// 当前渲染缓存
    pub fn rows(&self) -> impl Iterator<Item = Option<&RowText>> + '_ {
        self.rows.iter().map(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 光标所在行
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.rows.is_empty() && self.selected < self.rows.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.selected = self.rows.len() - 1;
        }
    }

    fn clamp_cursor(&mut self) {
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(names: &[(&str, &str)]) -> RecordStore {
        let mut store = RecordStore::new();
        for (id, name) in names {
            store.append(Record::new(*id, *name));
        }
        store
    }

    fn texts(view: &RosterListView) -> Vec<String> {
        view.rows()
            .map(|row| row.map(|r| r.name.clone()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_insert_renders_only_new_row() {
        let mut store = store_of(&[("SV01", "Alice")]);
        let mut view = RosterListView::default();
        view.on_inserted(0);
        assert_eq!(view.sync(&store), 1);

        store.append(Record::new("SV02", "Bob"));
        view.on_inserted(1);
        assert_eq!(view.sync(&store), 1);
        assert_eq!(texts(&view), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_change_rerenders_single_row() {
        let mut store = store_of(&[("SV01", "Alice"), ("SV02", "Bob")]);
        let mut view = RosterListView::default();
        view.sync(&store);

        let key = store.key_at(1).unwrap();
        store.rename(key, "Robert").unwrap();
        view.on_changed(1);

        assert_eq!(view.sync(&store), 1);
        assert_eq!(texts(&view), vec!["Alice", "Robert"]);
    }

    #[test]
    fn test_remove_moves_cursor_up() {
        let mut store = store_of(&[("SV01", "Alice"), ("SV02", "Bob"), ("SV03", "Carol")]);
        let mut view = RosterListView::default();
        view.sync(&store);
        view.select_last();

        store.remove_at(0).unwrap();
        view.on_removed(0);

        assert_eq!(view.sync(&store), 0);
        assert_eq!(view.selected(), 1);
        assert_eq!(texts(&view), vec!["Bob", "Carol"]);
    }

    #[test]
    fn test_remove_last_row_clamps_cursor() {
        let mut store = store_of(&[("SV01", "Alice"), ("SV02", "Bob")]);
        let mut view = RosterListView::default();
        view.sync(&store);
        view.select_last();

        store.remove_at(1).unwrap();
        view.on_removed(1);

        assert_eq!(view.selected(), 0);
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_missed_notification_triggers_rebuild() {
        let store = store_of(&[("SV01", "Alice"), ("SV02", "Bob")]);
        let mut view = RosterListView::default();

        assert_eq!(view.sync(&store), 2);
        assert_eq!(texts(&view), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut view = RosterListView::default();
        view.select_next();
        view.select_last();
        assert_eq!(view.selected(), 0);

        view.on_inserted(0);
        view.on_inserted(1);
        view.select_next();
        view.select_next();
        assert_eq!(view.selected(), 1);
        view.select_first();
        assert_eq!(view.selected(), 0);
    }
}
