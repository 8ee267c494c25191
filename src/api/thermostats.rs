use crate::api::domain::{StatusResponse, ThermostatQuery, ThermostatResponse, ThermostatSummaryResponse};
use crate::api::{ApiRequest, EcobeeClient, map_revisions, map_thermostats};
use crate::domain::{Selection, ThermostatRevision, ThermostatUpdate, Thermostats};
use crate::error::EcobeeError;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, instrument};

impl EcobeeClient {
    /// Retrieves the revision summary of the selected thermostats as returned by ecobee.
    /// [`poll_thermostats`](EcobeeClient::poll_thermostats) is usually more convenient.
    #[instrument(skip(self))]
    pub async fn poll_thermostats_raw(&self, selection: &Selection) -> Result<ThermostatSummaryResponse, EcobeeError> {
        let query = ThermostatQuery { selection, page: None };
        let request = ApiRequest::new("thermostatSummary").query("json", serde_json::to_string(&query)?);

        let response = self.send_request(request).await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Retrieves when the selected thermostats last changed, keyed by thermostat identifier.
    ///
    /// Poll this every few minutes and only fetch thermostat details once a revision changes.
    pub async fn poll_thermostats(&self, selection: &Selection) -> Result<HashMap<String, ThermostatRevision>, EcobeeError> {
        let response = self.poll_thermostats_raw(selection).await?;
        let revisions = map_revisions(&response.revision_list);

        debug!("Polled {} thermostats", revisions.len());
        Ok(revisions)
    }

    #[instrument(skip(self))]
    pub async fn get_thermostats_raw(&self, selection: &Selection, page: Option<u32>) -> Result<ThermostatResponse, EcobeeError> {
        if page == Some(0) {
            return Err(EcobeeError::InvalidArgument("invalid page"));
        }

        let query = ThermostatQuery { selection, page };
        let request = ApiRequest::new("thermostat").query("json", serde_json::to_string(&query)?);

        let response = self.send_request(request).await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Retrieves the selected thermostats keyed by identifier. Pages start at 1.
    pub async fn get_thermostats(&self, selection: &Selection, page: Option<u32>) -> Result<Thermostats, EcobeeError> {
        let response = self.get_thermostats_raw(selection, page).await?;
        Ok(map_thermostats(response))
    }

    #[instrument(skip(self))]
    pub async fn update_thermostats_raw(&self, selection: &Selection, update: &ThermostatUpdate) -> Result<StatusResponse, EcobeeError> {
        let mut thermostat = Map::new();
        thermostat.insert("settings".to_string(), Value::Object(update.settings.clone()));

        let mut data = Map::new();
        data.insert("selection".to_string(), serde_json::to_value(selection)?);
        data.insert("functions".to_string(), serde_json::to_value(&update.functions)?);
        data.insert("thermostat".to_string(), Value::Object(thermostat));

        let response = self.send_request(ApiRequest::new("thermostat").data(data)).await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Applies `update` to the thermostats with the given identifiers.
    pub async fn update_thermostats<S: AsRef<str>>(&self, identifiers: &[S], update: &ThermostatUpdate) -> Result<StatusResponse, EcobeeError> {
        if identifiers.is_empty() {
            return Err(EcobeeError::InvalidArgument("invalid identifiers"));
        }

        self.update_thermostats_raw(&Selection::thermostats(identifiers), update).await
    }
}
