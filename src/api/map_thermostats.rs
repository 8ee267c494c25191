use crate::api::domain::ThermostatResponse;
use crate::domain::{Thermostat, Thermostats};
use std::collections::HashMap;

pub fn map_thermostats(response: ThermostatResponse) -> Thermostats {
    let thermostats = response
        .thermostat_list
        .into_iter()
        .map(|thermostat| (thermostat.identifier.clone(), thermostat))
        .collect::<HashMap<String, Thermostat>>();

    Thermostats {
        page: response.page,
        status: response.status,
        thermostats,
    }
}
