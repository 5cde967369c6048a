use chrono::{DateTime, Local};

use crate::error::ItemError;

/// 食物条目
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub calories: u32,
    pub added_at: DateTime<Local>,
}

impl Item {
    pub fn new(id: u32, name: String, calories: u32) -> Self {
        Self {
            id,
            name,
            calories,
            added_at: Local::now(),
        }
    }
}

/// 条目控制器：持有条目列表、当前编辑条目和总卡路里
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    current_item: Option<u32>,
    total_calories: u64,
}

/// 宽松解析卡路里：跳过前导空白，可选 '+'，取最长的数字前缀，忽略其后的文本
pub fn parse_calories(input: &str) -> Result<u32, ItemError> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Err(ItemError::EmptyCalories);
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: &str = {
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        &unsigned[..end]
    };

    if digits.is_empty() {
        return Err(ItemError::InvalidCalories(input.to_string()));
    }

    digits
        .parse::<u32>()
        .map_err(|_| ItemError::InvalidCalories(input.to_string()))
}

/// 校验表单输入，返回去除首尾空白的名称和解析后的卡路里
fn validate_input(name: &str, calories: &str) -> Result<(String, u32), ItemError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ItemError::EmptyName);
    }
    let calories = parse_calories(calories)?;
    Ok((name.to_string(), calories))
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有条目（按添加顺序）
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 下一个 ID：最后一个条目的 ID + 1，列表为空时为 0
    fn next_id(&self) -> u32 {
        self.items.last().map(|item| item.id + 1).unwrap_or(0)
    }

    /// 添加新条目
    pub fn add_item(&mut self, name: &str, calories: &str) -> Result<Item, ItemError> {
        let (name, calories) = validate_input(name, calories)?;
        let item = Item::new(self.next_id(), name, calories);
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn get_item_by_id(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// 设置当前编辑的条目
    pub fn set_current_item(&mut self, id: u32) -> Result<&Item, ItemError> {
        let index = self.position(id)?;
        self.current_item = Some(id);
        Ok(&self.items[index])
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.current_item.and_then(|id| self.get_item_by_id(id))
    }

    pub fn clear_current_item(&mut self) {
        self.current_item = None;
    }

    /// 更新当前条目的名称和卡路里，ID 和位置保持不变
    pub fn update_item(&mut self, name: &str, calories: &str) -> Result<Item, ItemError> {
        let id = self.current_item.ok_or(ItemError::NoCurrentItem)?;
        let (name, calories) = validate_input(name, calories)?;
        let index = self.position(id)?;

        let item = &mut self.items[index];
        item.name = name;
        item.calories = calories;
        Ok(item.clone())
    }

    /// 删除条目；如果它正在被编辑，同时清除当前条目
    pub fn delete_item(&mut self, id: u32) -> Result<Item, ItemError> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        if self.current_item == Some(id) {
            self.current_item = None;
        }
        Ok(removed)
    }

    /// 清空所有条目
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.current_item = None;
        self.total_calories = 0;
    }

    /// 重新计算并缓存总卡路里
    pub fn total_calories(&mut self) -> u64 {
        self.total_calories = self.items.iter().map(|item| u64::from(item.calories)).sum();
        self.total_calories
    }

    /// 上次计算的总卡路里
    pub fn cached_total(&self) -> u64 {
        self.total_calories
    }

    fn position(&self, id: u32) -> Result<usize, ItemError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ItemError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(entries: &[(&str, &str)]) -> ItemStore {
        let mut store = ItemStore::new();
        for (name, calories) in entries {
            store.add_item(name, calories).unwrap();
        }
        store
    }

    #[test]
    fn test_add_item_assigns_sequential_ids() {
        let mut store = ItemStore::new();
        let first = store.add_item("Steak Dinner", "1200").unwrap();
        let second = store.add_item("Cookie", "400").unwrap();

        assert_eq!(first.id, 0);
        assert_eq!(second.id, 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[1].name, "Cookie");
        assert_eq!(store.items()[1].calories, 400);
    }

    #[test]
    fn test_next_id_follows_last_item_after_delete() {
        let mut store =
            store_with(&[("Steak Dinner", "1200"), ("Cookie", "400"), ("Eggs", "300")]);
        store.delete_item(1).unwrap();

        let added = store.add_item("Toast", "150").unwrap();
        assert_eq!(added.id, 3);

        store.delete_item(3).unwrap();
        store.delete_item(2).unwrap();
        let added = store.add_item("Apple", "95").unwrap();
        assert_eq!(added.id, 1);
    }

    #[test]
    fn test_id_restarts_at_zero_when_empty() {
        let mut store = store_with(&[("Cookie", "400")]);
        store.clear_all();
        assert_eq!(store.add_item("Eggs", "300").unwrap().id, 0);
    }

    #[test]
    fn test_add_item_rejects_empty_fields() {
        let mut store = ItemStore::new();
        assert_eq!(store.add_item("", "100"), Err(ItemError::EmptyName));
        assert_eq!(store.add_item("   ", "100"), Err(ItemError::EmptyName));
        assert_eq!(store.add_item("Cookie", ""), Err(ItemError::EmptyCalories));
        assert!(store.is_empty());
    }

    #[test]
    fn test_parse_calories_is_lenient() {
        assert_eq!(parse_calories("250"), Ok(250));
        assert_eq!(parse_calories("  42"), Ok(42));
        assert_eq!(parse_calories("+7"), Ok(7));
        assert_eq!(parse_calories("250kcal"), Ok(250));
        assert_eq!(parse_calories("12.9"), Ok(12));
    }

    #[test]
    fn test_parse_calories_rejects_garbage() {
        assert!(matches!(parse_calories("abc"), Err(ItemError::InvalidCalories(_))));
        assert!(matches!(parse_calories("-5"), Err(ItemError::InvalidCalories(_))));
        assert!(matches!(parse_calories("+"), Err(ItemError::InvalidCalories(_))));
        assert!(matches!(
            parse_calories("99999999999"),
            Err(ItemError::InvalidCalories(_))
        ));
        assert_eq!(parse_calories("   "), Err(ItemError::EmptyCalories));
    }

    #[test]
    fn test_total_calories() {
        let mut store = ItemStore::new();
        assert_eq!(store.total_calories(), 0);

        store.add_item("Steak Dinner", "1200").unwrap();
        store.add_item("Cookie", "400").unwrap();
        store.add_item("Eggs", "300").unwrap();
        assert_eq!(store.total_calories(), 1900);
        assert_eq!(store.cached_total(), 1900);
    }

    #[test]
    fn test_total_calories_exceeds_u32() {
        let mut store = store_with(&[("Feast", "3000000000"), ("Banquet", "3000000000")]);
        assert_eq!(store.total_calories(), 6_000_000_000);
        assert_eq!(store.cached_total(), 6_000_000_000);
    }

    #[test]
    fn test_update_current_item() {
        let mut store = store_with(&[("Steak Dinner", "1200"), ("Cookie", "400")]);

        assert_eq!(store.update_item("Biscuit", "300"), Err(ItemError::NoCurrentItem));

        store.set_current_item(1).unwrap();
        let updated = store.update_item("Biscuit", "350").unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(store.items()[1].name, "Biscuit");
        assert_eq!(store.items()[1].calories, 350);
        assert_eq!(store.total_calories(), 1550);
    }

    #[test]
    fn test_failed_update_leaves_item_untouched() {
        let mut store = store_with(&[("Cookie", "400")]);
        store.set_current_item(0).unwrap();

        assert!(store.update_item("Biscuit", "lots").is_err());
        assert_eq!(store.items()[0].name, "Cookie");
        assert_eq!(store.items()[0].calories, 400);
    }

    #[test]
    fn test_set_current_item_unknown_id() {
        let mut store = store_with(&[("Cookie", "400")]);
        assert_eq!(store.set_current_item(9).unwrap_err(), ItemError::NotFound(9));
        assert!(store.current_item().is_none());
    }

    #[test]
    fn test_delete_clears_current_item() {
        let mut store = store_with(&[("Steak Dinner", "1200"), ("Cookie", "400")]);
        store.set_current_item(0).unwrap();

        let removed = store.delete_item(0).unwrap();
        assert_eq!(removed.name, "Steak Dinner");
        assert!(store.current_item().is_none());
        assert!(store.get_item_by_id(0).is_none());
        assert_eq!(store.delete_item(0), Err(ItemError::NotFound(0)));
    }

    #[test]
    fn test_clear_all() {
        let mut store = store_with(&[("Steak Dinner", "1200"), ("Cookie", "400")]);
        store.set_current_item(1).unwrap();
        store.clear_all();

        assert!(store.is_empty());
        assert!(store.current_item().is_none());
        assert_eq!(store.cached_total(), 0);
    }
}
