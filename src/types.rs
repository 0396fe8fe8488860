use serde::{Deserialize, Serialize};

/// Spreadsheet headers, in the same order as the `InterfaceRecord` fields.
pub(crate) const COLUMNS: [&str; 12] = [
    "Device Name",
    "Interface",
    "Description",
    "Status",
    "Vlan",
    "Duplex",
    "Speed",
    "Type",
    "CDP Device ID",
    "CDP Neighbor IP Address",
    "Neighbor Dest. Port",
    "Observation",
];

/// One row of the "show interfaces status" table, enriched with CDP and error data.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[cfg_attr(test, derive(PartialEq))]
pub struct InterfaceRecord {
    pub(crate) device_name: String,
    pub(crate) interface_id: String,
    pub(crate) description: String,
    pub(crate) status: String,
    pub(crate) vlan: String,
    pub(crate) duplex: String,
    pub(crate) speed: String,
    pub(crate) media_type: String,
    #[serde(default)]
    pub(crate) cdp_neighbor_device: String,
    #[serde(default)]
    pub(crate) cdp_neighbor_ip: String,
    #[serde(default)]
    pub(crate) neighbor_dest_port: String,
    #[serde(default)]
    pub(crate) observation: String,
}

impl InterfaceRecord {
    /// Cell values in column order.
    pub(crate) fn cells(&self) -> [&str; 12] {
        [
            &self.device_name,
            &self.interface_id,
            &self.description,
            &self.status,
            &self.vlan,
            &self.duplex,
            &self.speed,
            &self.media_type,
            &self.cdp_neighbor_device,
            &self.cdp_neighbor_ip,
            &self.neighbor_dest_port,
            &self.observation,
        ]
    }
}

/// A single "Device ID:" block of "show cdp neighbors detail".
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[cfg_attr(test, derive(PartialEq))]
pub struct NeighborRecord {
    pub(crate) local_port: String,
    pub(crate) neighbor_device: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub(crate) neighbor_ip: String,
    pub(crate) neighbor_port: String,
}

/// Everything extracted from one device capture.
#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct DeviceReport {
    pub(crate) device_name: String,
    pub(crate) interfaces: Vec<InterfaceRecord>,
    pub(crate) neighbors: Vec<NeighborRecord>,
}
