// Fetch-then-save workflow

use crate::client::HotelDataClient;
use crate::types::{Hotel, HotelError, HotelResult, SaveAck};

/// Observable states of one fetch-then-save workflow.
///
/// The transient `Fetching`/`Saving` phases exist only while the
/// corresponding call is awaited, so they never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    FetchedOk,
    FetchFailed,
    SavedOk,
    SaveFailed,
}

/// One user-driven fetch-then-optionally-save sequence.
///
/// Holds the fetched [`Hotel`] between the two operations; the client
/// itself keeps no state. Failed states are terminal for that attempt only:
/// a new `fetch` or `save` call restarts the relevant transition. There is
/// no automatic retry.
pub struct HotelWorkflow {
    client: HotelDataClient,
    hotel: Option<Hotel>,
    state: WorkflowState,
}

impl HotelWorkflow {
    pub fn new(client: HotelDataClient) -> Self {
        Self {
            client,
            hotel: None,
            state: WorkflowState::Idle,
        }
    }

    /// The hotel held from the last successful fetch, if any.
    pub fn hotel(&self) -> Option<&Hotel> {
        self.hotel.as_ref()
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Fetch scraped data for `name` and hold it for a later save.
    ///
    /// On failure any previously fetched hotel is cleared, so stale data is
    /// never held alongside an error.
    pub async fn fetch(&mut self, name: &str) -> HotelResult<&Hotel> {
        let hotel = self.client.fetch_hotel(name).await.map_err(|err| {
            self.hotel = None;
            self.state = WorkflowState::FetchFailed;
            err
        })?;

        self.state = WorkflowState::FetchedOk;
        Ok(&*self.hotel.insert(hotel))
    }

    /// Submit the held hotel for persistence.
    ///
    /// With nothing fetched this fails with
    /// `ValidationError("no data to save")` and issues no network request;
    /// the workflow state is left untouched since no transition was
    /// attempted.
    pub async fn save(&mut self) -> HotelResult<SaveAck> {
        let hotel = match &self.hotel {
            Some(hotel) => hotel,
            None => {
                return Err(HotelError::ValidationError("no data to save".to_string()));
            }
        };

        match self.client.save_hotel(hotel).await {
            Ok(ack) => {
                self.state = WorkflowState::SavedOk;
                Ok(ack)
            }
            Err(err) => {
                self.state = WorkflowState::SaveFailed;
                Err(err)
            }
        }
    }

    /// Abandon the current workflow, dropping any held hotel.
    pub fn reset(&mut self) {
        self.hotel = None;
        self.state = WorkflowState::Idle;
    }
}
