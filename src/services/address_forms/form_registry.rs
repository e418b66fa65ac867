use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use super::address_form::{AddressForm, AddressFormCallbacks};
use crate::{
    services::address_resolution::address_resolver::AddressResolver,
    types::{coordinate::Coordinate, map_view::MapView},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormLimits {
    pub ttl: Duration,
    pub max_forms: usize,
}

fn is_expired(form: &AddressForm, ttl: Duration) -> bool {
    (Utc::now() - form.created_at())
        .to_std()
        .unwrap_or_default()
        >= ttl
}

/// Live address forms.
///
/// A form is dropped when it is submitted or closed, once it is older than
/// `ttl`, or when it is the oldest form and `max_forms` would be exceeded.
pub struct FormRegistry {
    resolver: AddressResolver,
    callbacks: AddressFormCallbacks,
    limits: FormLimits,
    next_id: AtomicU64,
    forms: RwLock<HashMap<u64, Arc<AddressForm>>>,
}

impl FormRegistry {
    pub fn new(
        resolver: AddressResolver,
        callbacks: AddressFormCallbacks,
        limits: FormLimits,
    ) -> Self {
        Self {
            resolver,
            callbacks,
            limits,
            next_id: AtomicU64::new(1),
            forms: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(
        &self,
        default_center: Coordinate,
        user_location: Option<Coordinate>,
        zoom: u8,
    ) -> Arc<AddressForm> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let form = Arc::new(AddressForm::new(
            id,
            self.resolver.clone(),
            self.callbacks.clone(),
            MapView::new(default_center, user_location, zoom),
        ));

        let mut forms = self.forms.write().await;

        let before = forms.len();
        forms.retain(|_, form| !is_expired(form, self.limits.ttl));
        if forms.len() < before {
            info!("Expired {} address forms", before - forms.len());
        }

        while !forms.is_empty() && forms.len() >= self.limits.max_forms {
            let Some(oldest) = forms
                .values()
                .min_by_key(|form| (form.created_at(), form.id()))
                .map(|form| form.id())
            else {
                break;
            };
            forms.remove(&oldest);
            info!("Evicted address form {} to stay under the form limit", oldest);
        }

        forms.insert(id, form.clone());
        info!("Opened address form {}", id);

        form
    }

    pub async fn get(&self, id: u64) -> Option<Arc<AddressForm>> {
        self.forms
            .read()
            .await
            .get(&id)
            .filter(|form| !is_expired(form, self.limits.ttl))
            .cloned()
    }

    pub async fn remove(&self, id: u64) -> Option<Arc<AddressForm>> {
        let removed = self.forms.write().await.remove(&id);

        if removed.is_some() {
            info!("Closed address form {}", id);
        }

        removed
    }
}
