use crate::domain::cache::ItemCache;
use crate::domain::errors::ValidationError;
use crate::domain::ops::{InFlight, Op, OpGuard};
use crate::domain::ports::InventoryApi;
use crate::errors::ClientError;
use crate::models::item::{Item, NewItem};

/// Read and mutate operations against the inventory service. One instance
/// per UI; duplicate triggers of an outstanding operation are refused
/// without touching the network.
pub struct InventoryService<A> {
    api: A,
    flags: InFlight,
}

impl<A: InventoryApi> InventoryService<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            flags: InFlight::new(),
        }
    }

    /// The full item list, zero-stock rows included.
    pub async fn list(&self) -> Result<Vec<Item>, ClientError> {
        let _busy = self.begin(Op::LoadItems)?;
        Ok(self.api.list_items().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Item, ClientError> {
        let _busy = self.begin(Op::LoadItem(id))?;
        Ok(self.api.get_item(id).await?)
    }

    /// Fetch the item list and replace `cache` with the orderable subset
    /// (`quantity > 0`), returning the retained items. On any failure the
    /// cache keeps its previous contents; there is no partial update.
    pub async fn load_available(&self, cache: &mut ItemCache) -> Result<Vec<Item>, ClientError> {
        let _busy = self.begin(Op::LoadItems)?;
        let items = self.api.list_items().await?;
        cache.replace_with_available(items);
        Ok(cache.items().to_vec())
    }

    /// Validate the form fields, then create the item. Validation failures
    /// never reach the network.
    pub async fn create(&self, item: NewItem) -> Result<Item, ClientError> {
        item.validate()?;
        let _busy = self.begin(Op::CreateItem)?;
        let created = self.api.create_item(&item).await?;
        log::info!("created item {} ({})", created.id, created.name);
        Ok(created)
    }

    /// Send a signed quantity adjustment, then re-fetch the full list once
    /// the adjustment response has arrived, so the returned list reflects
    /// it. `current` is the caller's displayed snapshot; a decrement of an
    /// item it shows at zero stock is refused client-side and never issued.
    /// No optimistic update, no retry; concurrent writers are the
    /// backend's problem.
    pub async fn adjust(
        &self,
        current: &[Item],
        id: i64,
        delta: i32,
    ) -> Result<Vec<Item>, ClientError> {
        if delta < 0 {
            let on_hand = current
                .iter()
                .find(|i| i.id == id)
                .map(|i| i.quantity)
                .unwrap_or(0);
            if on_hand == 0 {
                return Err(ValidationError::OutOfStock(id).into());
            }
        }
        let _busy = self.begin(Op::AdjustItem(id))?;
        let adjusted = self.api.adjust_quantity(id, delta).await?;
        log::debug!(
            "item {} adjusted by {}, now at {}",
            adjusted.id,
            delta,
            adjusted.quantity
        );
        Ok(self.api.list_items().await?)
    }

    fn begin(&self, op: Op) -> Result<OpGuard<'_>, ClientError> {
        self.flags.begin(op).ok_or(ClientError::Busy(op))
    }
}
