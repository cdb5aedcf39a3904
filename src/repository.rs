//! In-memory request repository.
//!
//! CRUD glue between the collaborator (forms, scenario generator) and the
//! scheduler. The repository owns the working list of requests; a
//! scheduling run never sees it directly — it receives a [`snapshot`]
//! instead, so edits made mid-run cannot leak into the batch.
//!
//! [`snapshot`]: RequestRepository::snapshot

use crate::models::VehicleRequest;

/// A mutable working set of vehicle requests.
#[derive(Debug, Clone, Default)]
pub struct RequestRepository {
    requests: Vec<VehicleRequest>,
}

impl RequestRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests, in insertion order.
    pub fn list(&self) -> &[VehicleRequest] {
        &self.requests
    }

    /// Finds a request by id.
    pub fn get(&self, id: &str) -> Option<&VehicleRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// Appends a request.
    pub fn add(&mut self, request: VehicleRequest) {
        self.requests.push(request);
    }

    /// Replaces the request with a matching id.
    ///
    /// Returns `false` if no request has that id.
    pub fn update(&mut self, request: VehicleRequest) -> bool {
        match self.requests.iter_mut().find(|r| r.id == request.id) {
            Some(slot) => {
                *slot = request;
                true
            }
            None => false,
        }
    }

    /// Removes the request with the given id.
    ///
    /// Returns `false` if no request has that id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.requests.len();
        self.requests.retain(|r| r.id != id);
        self.requests.len() < before
    }

    /// Removes all requests.
    pub fn clear(&mut self) {
        self.requests.clear();
    }

    /// A frozen copy of the working set, suitable for one scheduling run.
    pub fn snapshot(&self) -> Vec<VehicleRequest> {
        self.requests.clone()
    }

    /// Number of requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
