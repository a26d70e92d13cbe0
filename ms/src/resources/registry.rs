//! ResourceRegistry - holds the resources a server exposes

use std::collections::BTreeMap;

use tracing::debug;

use crate::protocol::{ResourceContents, ResourceDescriptor, ServerError};

use super::Resource;

/// Resources keyed by URI
pub struct ResourceRegistry {
    resources: BTreeMap<String, Box<dyn Resource>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self {
            resources: BTreeMap::new(),
        }
    }

    /// Add a resource, replacing any resource with the same URI
    pub fn add_resource(&mut self, resource: Box<dyn Resource>) {
        debug!(uri = resource.uri(), "ResourceRegistry::add_resource: called");
        self.resources.insert(resource.uri().to_string(), resource);
    }

    /// Descriptors for resources/list, ordered by URI
    pub fn descriptors(&self) -> Vec<ResourceDescriptor> {
        self.resources
            .values()
            .map(|r| ResourceDescriptor {
                uri: r.uri().to_string(),
                name: r.name().to_string(),
                description: r.description().to_string(),
                mime_type: r.mime_type().to_string(),
            })
            .collect()
    }

    /// Read a resource by URI
    pub async fn read(&self, uri: &str) -> Result<ResourceContents, ServerError> {
        let resource = self
            .resources
            .get(uri)
            .ok_or_else(|| ServerError::UnknownResource(uri.to_string()))?;

        let text = resource.read().await?;
        Ok(ResourceContents {
            uri: uri.to_string(),
            mime_type: resource.mime_type().to_string(),
            text,
        })
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
