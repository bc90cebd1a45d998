//! Application state holding the collaborator handles.
//!
//! All handles are explicitly constructed in `main` and injected here, so
//! tests build an [`AppState`] around doubles instead of network clients.
//! Everything is read-only after startup; requests share nothing mutable.

use std::sync::Arc;

use crate::clients::classifier::ImageClassifier;
use crate::clients::datastore::DatastoreHandle;
use crate::clients::gemini::GenerativeModel;

/// Shared application state for the HTTP gateway.
#[derive(Clone)]
pub struct AppState {
    /// Image-classification collaborator.
    pub classifier: Arc<dyn ImageClassifier>,
    /// Generative-language collaborator.
    pub model: Arc<dyn GenerativeModel>,
    /// Document-store handle; connected at startup, unused by endpoints.
    pub datastore: Arc<DatastoreHandle>,
}

impl AppState {
    pub fn new(
        classifier: Arc<dyn ImageClassifier>,
        model: Arc<dyn GenerativeModel>,
        datastore: Arc<DatastoreHandle>,
    ) -> Self {
        AppState {
            classifier,
            model,
            datastore,
        }
    }
}
