//! アイテム登録管理
//!
//! アイテムをメモリ内で挿入順に保持し、キーの一意性と存在を保証する。
//! 全操作は単一のRwLockで直列化される（チェックと変更は同じ書き込みロック内で行う）。

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::common::{
    error::{StoreError, StoreResult},
    types::{Item, ItemId},
};

/// アイテムレジストリ
#[derive(Clone, Default)]
pub struct ItemRegistry {
    items: Arc<RwLock<Vec<Item>>>,
}

impl ItemRegistry {
    /// 空のレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// アイテムを登録
    ///
    /// 同じIDのアイテムが既に存在する場合は `DuplicateKey`。
    pub async fn create(&self, item: Item) -> StoreResult<Item> {
        let mut items = self.items.write().await;

        if items.iter().any(|existing| existing.id == item.id) {
            debug!(item_id = item.id, "Rejected duplicate item");
            return Err(StoreError::DuplicateKey(item.id));
        }

        items.push(item.clone());
        info!(item_id = item.id, total = items.len(), "Item created");
        Ok(item)
    }

    /// 全アイテムを挿入順で取得
    pub async fn list(&self) -> Vec<Item> {
        let items = self.items.read().await;
        items.clone()
    }

    /// アイテムを取得
    pub async fn get(&self, id: ItemId) -> StoreResult<Item> {
        let items = self.items.read().await;
        items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// アイテムを全置換で更新
    ///
    /// パスのIDが正となる。ボディ側のIDが異なる場合はパスのIDで上書きし、
    /// 一意性を崩す再キー付けは行わない。格納位置（挿入順）は維持される。
    pub async fn update(&self, id: ItemId, mut item: Item) -> StoreResult<Item> {
        let mut items = self.items.write().await;
        let slot = items
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if item.id != id {
            warn!(
                item_id = id,
                body_id = item.id,
                "Body id differs from path id; keeping path id"
            );
            item.id = id;
        }

        *slot = item.clone();
        info!(item_id = id, "Item updated");
        Ok(item)
    }

    /// アイテムを削除
    pub async fn delete(&self, id: ItemId) -> StoreResult<()> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;

        items.remove(index);
        info!(item_id = id, total = items.len(), "Item deleted");
        Ok(())
    }

    /// 格納アイテム数
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// 空かどうか
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}
