// SPDX-License-Identifier: MPL-2.0
//! Header/footer partials injected into placeholder elements.

use crate::page::{Document, Node};
use crate::source::SiteSource;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A partial and the id of the element that receives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSlot {
    pub target_id: String,
    pub path: String,
}

impl ComponentSlot {
    pub fn new(target_id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            path: path.into(),
        }
    }
}

/// `#header ← components/header.html`, `#footer ← components/footer.html`.
pub fn default_slots() -> Vec<ComponentSlot> {
    vec![
        ComponentSlot::new("header", "components/header.html"),
        ComponentSlot::new("footer", "components/footer.html"),
    ]
}

/// A fetched partial, not yet placed.
#[derive(Debug, Clone)]
pub struct LoadedComponent {
    pub slot: ComponentSlot,
    pub markup: String,
}

/// Fetches every slot concurrently. Failed fetches are logged and left out.
pub async fn load_components<S: SiteSource>(
    source: &S,
    slots: &[ComponentSlot],
) -> Vec<LoadedComponent> {
    let fetches = slots.iter().map(|slot| async move {
        match source.fetch(&slot.path).await {
            Ok(bytes) => Some(LoadedComponent {
                slot: slot.clone(),
                markup: String::from_utf8_lossy(&bytes).into_owned(),
            }),
            Err(err) => {
                warn!(path = %slot.path, error = %err, "failed to load component");
                None
            }
        }
    });
    join_all(fetches).await.into_iter().flatten().collect()
}

/// Places each partial inside its target element, replacing what was there.
///
/// Well-formed partials become part of the tree so their tagged elements
/// get localized; anything else is inserted verbatim. Returns how many
/// partials found a target.
pub fn inject_components(document: &mut Document, components: &[LoadedComponent]) -> usize {
    let mut injected = 0;
    for component in components {
        let Some(target) = document.find_by_id_mut(&component.slot.target_id) else {
            debug!(id = %component.slot.target_id, "no element for component, skipping");
            continue;
        };
        match Document::parse(&component.markup) {
            Ok(fragment) => target.set_children(fragment.nodes),
            Err(err) => {
                debug!(path = %component.slot.path, error = %err, "component is not well-formed, inserting verbatim");
                target.set_children(vec![Node::Markup(component.markup.clone())]);
            }
        }
        injected += 1;
    }
    injected
}
