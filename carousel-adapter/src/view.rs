use alloc::sync::Arc;
use alloc::vec::Vec;

use carousel::{CarouselConfig, ConfigError, IndicatorLayout, ItemTransform};

use crate::key::KeyIndexMap;
use crate::{CarouselKey, Controller, Frame};

/// One item ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedItem<K, R> {
    pub key: K,
    pub transform: ItemTransform,
    pub content: R,
}

/// Binds an ordered item collection, a stable identity key and a render callback to a
/// [`Controller`].
///
/// The callbacks are stored in `Arc`s so the view can be cloned cheaply alongside its
/// items.
pub struct CarouselView<T, K, R> {
    items: Vec<T>,
    key: Arc<dyn Fn(&T) -> K + Send + Sync>,
    render: Arc<dyn Fn(&T) -> R + Send + Sync>,
    controller: Controller,
}

impl<T: Clone, K, R> Clone for CarouselView<T, K, R> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            key: Arc::clone(&self.key),
            render: Arc::clone(&self.render),
            controller: self.controller.clone(),
        }
    }
}

impl<T, K, R> core::fmt::Debug for CarouselView<T, K, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselView")
            .field("len", &self.items.len())
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

impl<T, K: CarouselKey, R> CarouselView<T, K, R> {
    pub fn new(
        config: CarouselConfig,
        items: Vec<T>,
        key: impl Fn(&T) -> K + Send + Sync + 'static,
        render: impl Fn(&T) -> R + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        let controller = Controller::new(config, items.len())?;
        Ok(Self {
            items,
            key: Arc::new(key),
            render: Arc::new(render),
            controller,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn key_for(&self, index: usize) -> Option<K> {
        self.items.get(index).map(|item| (self.key)(item))
    }

    /// The item at the committed rest index.
    pub fn focused_item(&self) -> Option<&T> {
        self.items.get(self.controller.carousel().rest_index())
    }

    /// Replaces the items, keeping the focused item focused when its key survives.
    ///
    /// Returns `true` when focus followed the previous item's key. Otherwise the index is
    /// clamped into the new range. Any running animation is dropped.
    pub fn set_items(&mut self, items: Vec<T>) -> bool {
        let anchor = self
            .controller
            .carousel()
            .is_mounted()
            .then(|| self.controller.capture_focus_anchor(|i| self.key_for(i)))
            .flatten();

        self.items = items;
        self.controller.set_count(self.items.len());

        let Some(anchor) = anchor else {
            return false;
        };
        let index_of: KeyIndexMap<K> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| ((self.key)(item), i))
            .collect();
        let applied = self
            .controller
            .apply_focus_anchor(&anchor, |k| index_of.get(k).copied());
        atrace!(applied, len = self.items.len(), "CarouselView::set_items");
        applied
    }

    /// The displayed frame at `now_ms`.
    pub fn frame(&self, now_ms: u64) -> Frame {
        self.controller.frame(now_ms)
    }

    /// Renders every item back-to-front at `now_ms`.
    pub fn render(&self, now_ms: u64) -> Vec<RenderedItem<K, R>> {
        self.controller
            .frame(now_ms)
            .transforms
            .into_iter()
            .filter_map(|transform| {
                let item = self.items.get(transform.index)?;
                Some(RenderedItem {
                    key: (self.key)(item),
                    transform,
                    content: (self.render)(item),
                })
            })
            .collect()
    }

    pub fn indicator(&self, now_ms: u64) -> Option<IndicatorLayout> {
        self.controller.indicator(now_ms)
    }
}
